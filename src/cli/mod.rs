//! Command-line interface layer.
//!
//! - `args`: clap argument definitions
//! - `exit_status`: process exit codes
//! - `report`: summary and stub rendering
//! - `run`: settings resolution and pipeline driver

pub mod args;
pub mod exit_status;
pub mod report;
pub mod run;

use anyhow::Result;

pub use args::Arguments;
pub use exit_status::ExitStatus;

/// Run one audit and print the report.
///
/// The whole analysis completes before the first line is printed, so a
/// fatal error never leaves a partial report on stdout.
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let result = run::run(&args)?;
    report::report(&result);

    Ok(ExitStatus::Success)
}
