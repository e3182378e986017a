//! callmap CLI application entry point.

use std::process::ExitCode;

use callmap::cli::{Arguments, ExitStatus};
use clap::Parser;

fn main() -> ExitCode {
    let args = Arguments::parse();

    match callmap::cli::run_cli(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitStatus::Error.into()
        }
    }
}
