//! CLI layer - user-facing command-line interface.
//!
//! ## Module Structure
//!
//! - `args`: CLI argument definitions using clap
//! - `exit_status`: exit status codes
//! - `run`: analyze-then-serve entry point

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;

pub use args::Arguments;
pub use exit_status::ExitStatus;

pub mod args;
mod exit_status;
pub mod run;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let summary = run::run(args)?;
    println!(
        "{} {} ({} mapped definitions, {} call sites across {} target{})",
        "wrote".green().bold(),
        summary.out_path.display(),
        summary.mapped_definition_count,
        summary.call_site_count,
        summary.target_count,
        if summary.target_count == 1 { "" } else { "s" },
    );
    Ok(ExitStatus::Success.into())
}
