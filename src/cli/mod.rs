//! Command line interface for the offline packager.
//!
//! This module provides argument parsing, command dispatch and user feedback.

mod args;
pub mod commands;
mod output;

pub use args::{ArchiverKind, Args, Command, InterestArgs, RuntimeConfig};
pub use output::OutputManager;

use crate::error::{CliError, Result};

/// Main CLI entry point
pub fn run() -> Result<i32> {
    run_with(Args::parse_args())
}

/// Executes already parsed arguments.
pub fn run_with(args: Args) -> Result<i32> {
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;
    let config = RuntimeConfig::from(&args);

    match &args.command {
        Some(Command::Interest(interest)) => commands::execute_interest(interest, &config),
        None => commands::execute_package(&args, &config),
    }
}
