//! Command implementations for the z/OS log processor CLI
//!
//! This module contains the main command execution logic, progress reporting,
//! and error handling for the CLI interface. Each command is implemented in
//! its own module.

pub mod check;
pub mod parse;
pub mod shared;

pub use shared::RunStats;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the z/OS log processor
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `parse`: reconstruct messages and write them out
/// - `check`: parse only, then report statistics
pub fn run(args: Args) -> Result<RunStats> {
    match args.get_command() {
        Commands::Parse(parse_args) => parse::run_parse(parse_args),
        Commands::Check(check_args) => check::run_check(check_args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_stats_re_export() {
        let stats = RunStats::default();
        assert_eq!(stats.files_processed, 0);
        assert_eq!(stats.parse.messages_produced, 0);
    }
}
