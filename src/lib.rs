// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

//! Greeting
//!
//! This crate produces a fixed greeting and writes it out.
//!
//! # Quick Start
//!
//! ```
//! use greeter::{greet, Greeter};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     assert_eq!(Greeter::new().greeting(), "Hello world.");
//!
//!     let mut out = Vec::new();
//!     greet(&mut out)?;
//!     assert_eq!(out, b"Hello world.\n");
//!     Ok(())
//! }
//! ```

use std::fmt::{Display, Formatter};
use std::io::Write;

use anyhow::Result;

/// The greeting text.
pub const GREETING: &str = "Hello world.";

/// Produces the greeting.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Greeter;

impl Greeter {
    pub fn new() -> Self {
        Self
    }

    /// Returns the greeting. Always [GREETING].
    pub fn greeting(&self) -> &'static str {
        GREETING
    }
}

impl Display for Greeter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.greeting())
    }
}

/// Writes the greeting followed by a newline to `out`. An error is returned
/// only if the writer fails.
pub fn greet<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", Greeter::new())?;
    out.flush()?;
    Ok(())
}
