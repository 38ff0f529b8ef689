//! Command-line argument definitions for the z/OS log processor
//!
//! This module defines the complete CLI interface using the clap derive API.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::{Error, Result};

/// CLI arguments for the z/OS console-log processor
///
/// Reconstructs logical operator-console messages from raw syslog and
/// operlog dump files.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "zoslog-processor",
    version,
    about = "Reconstruct operator-console messages from z/OS syslog and operlog dumps",
    long_about = "Parses raw, line-oriented mainframe console-log dumps (syslog or operlog \
                  format), reassembles wrapped and multi-line records into complete logical \
                  messages, and exports them as text, JSON or CSV. Malformed input is \
                  tolerated and logged by default; use --strict to abort on the first error."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the log processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse dump files and emit the reconstructed messages
    Parse(ParseArgs),
    /// Parse dump files and report statistics only
    Check(CheckArgs),
}

/// Arguments for the parse command (main message extraction)
#[derive(Debug, Clone, Parser)]
pub struct ParseArgs {
    /// Dump file to parse, or a directory to scan for *.log / *.txt dumps
    #[arg(value_name = "PATH", help = "Dump file or directory of dump files")]
    pub input: PathBuf,

    /// Output file for the reconstructed messages
    ///
    /// If not specified, messages are written to stdout.
    #[arg(
        short = 'o',
        long = "output-file",
        value_name = "FILE",
        help = "Output file (defaults to stdout)"
    )]
    pub output_file: Option<PathBuf>,

    /// Output format for the reconstructed messages
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for messages"
    )]
    pub output_format: OutputFormat,

    /// Abort on the first parse error instead of logging and skipping
    #[arg(long = "strict", help = "Halt on malformed input instead of skipping it")]
    pub strict: bool,

    /// Keep only messages matching this regex (repeatable)
    ///
    /// With no include filters, every message is kept. Matching runs over
    /// the full reconstructed message text.
    #[arg(
        short = 'f',
        long = "filter",
        value_name = "REGEX",
        help = "Keep only messages matching REGEX (repeatable)"
    )]
    pub filter: Vec<String>,

    /// Drop messages matching this regex (repeatable; wins over --filter)
    #[arg(
        short = 'x',
        long = "exclude",
        value_name = "REGEX",
        help = "Drop messages matching REGEX (repeatable)"
    )]
    pub exclude: Vec<String>,

    /// Path to configuration file
    ///
    /// TOML configuration file. If not specified, looks for
    /// ~/.config/zoslog-processor/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors; also disables the progress bar.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the check command (statistics report)
#[derive(Debug, Clone, Parser)]
pub struct CheckArgs {
    /// Dump file to check, or a directory to scan for *.log / *.txt dumps
    #[arg(value_name = "PATH", help = "Dump file or directory of dump files")]
    pub input: PathBuf,

    /// Abort on the first parse error instead of logging and skipping
    #[arg(long = "strict", help = "Halt on malformed input instead of skipping it")]
    pub strict: bool,

    /// Path to configuration file
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for reconstructed messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON array for scripting
    Json,
    /// CSV for data analysis
    Csv,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ParseArgs {
    /// Validate the parse command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            return Err(Error::configuration(format!(
                "input path does not exist: {}",
                self.input.display()
            )));
        }

        if let Some(output_file) = &self.output_file {
            if let Some(parent) = output_file.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "output file directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show the progress bar (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl CheckArgs {
    /// Validate the check command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            return Err(Error::configuration(format!(
                "input path does not exist: {}",
                self.input.display()
            )));
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
