// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::ffi::OsString;
use std::io;

use anyhow::Result;
use clap::Parser;

use greeter::greet;

/// Prints a greeting.
///
/// Every argument is accepted and ignored, including ones that look like
/// flags.
#[derive(Debug, Parser)]
#[clap(name = env!("CARGO_CRATE_NAME"))]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct App {
    #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    _ignored: Vec<OsString>,
}

fn main() -> Result<()> {
    App::parse();

    let stdout = io::stdout();
    greet(&mut stdout.lock())
}
