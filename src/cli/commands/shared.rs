//! Shared components for CLI commands
//!
//! This module contains common types, utilities, and functions used across
//! the CLI command implementations.

use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::app::services::dump_parser::ParseStats;
use crate::cli::args::{CheckArgs, ParseArgs};
use crate::config::Config;
use crate::constants::is_dump_extension;
use crate::{Error, Result};

/// Statistics for a whole command run, aggregated over every dump file
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Number of dump files processed
    pub files_processed: usize,
    /// Aggregated parse statistics across all files
    pub parse: ParseStats,
    /// Total processing time
    pub processing_time: std::time::Duration,
}

/// Set up structured logging to stderr
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("zoslog_processor={}", log_level)));

    if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration for the parse command (file, then CLI overrides)
pub fn load_parse_configuration(args: &ParseArgs) -> Result<Config> {
    info!("Loading configuration");

    let mut config = Config::load_layered(args.config_file.as_deref())?;

    // Apply CLI argument overrides
    if args.strict {
        config.processing.halt_on_errors = true;
    }
    if args.quiet {
        config.processing.show_progress = false;
    }
    config
        .filters
        .include
        .extend(args.filter.iter().cloned());
    config
        .filters
        .exclude
        .extend(args.exclude.iter().cloned());
    config.logging.level = args.get_log_level().to_string();

    config.validate()?;
    Ok(config)
}

/// Load configuration for the check command (file, then CLI overrides)
pub fn load_check_configuration(args: &CheckArgs) -> Result<Config> {
    info!("Loading configuration");

    let mut config = Config::load_layered(args.config_file.as_deref())?;

    if args.strict {
        config.processing.halt_on_errors = true;
    }
    config.logging.level = args.get_log_level().to_string();

    config.validate()?;
    Ok(config)
}

/// Discover dump files at `input`
///
/// A file path is returned as-is; a directory is walked recursively for
/// `*.log` and `*.txt` files, sorted for a stable processing order.
pub fn discover_dump_files(input: &Path) -> Result<Vec<PathBuf>> {
    use walkdir::WalkDir;

    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }

    if !input.is_dir() {
        return Err(Error::file_not_found(input.display().to_string()));
    }

    let mut dump_files = Vec::new();
    for entry in WalkDir::new(input)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.is_file()
            && path
                .extension()
                .and_then(|s| s.to_str())
                .is_some_and(is_dump_extension)
        {
            dump_files.push(path.to_path_buf());
        }
    }

    // Sort files for consistent processing order
    dump_files.sort();

    if dump_files.is_empty() {
        warn!("No dump files found under: {}", input.display());
    } else {
        debug!(
            "Discovered {} dump files in {}",
            dump_files.len(),
            input.display()
        );
        for file in &dump_files {
            debug!("  Found: {}", file.display());
        }
    }

    Ok(dump_files)
}

/// Create a progress bar with appropriate styling
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg} [{per_sec}] ETA: {eta}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_run_stats_default() {
        let stats = RunStats::default();
        assert_eq!(stats.files_processed, 0);
        assert_eq!(stats.parse.lines_read, 0);
    }

    #[test]
    fn test_discover_single_file_passes_through() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("dump.weird");
        fs::write(&file, "N HELLO\n").unwrap();

        // Explicit file paths skip the extension check
        let files = discover_dump_files(&file).unwrap();
        assert_eq!(files, vec![file]);
    }

    #[test]
    fn test_discover_directory_filters_and_sorts() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.log"), "").unwrap();
        fs::write(temp_dir.path().join("a.txt"), "").unwrap();
        fs::write(temp_dir.path().join("notes.md"), "").unwrap();
        fs::create_dir(temp_dir.path().join("nested")).unwrap();
        fs::write(temp_dir.path().join("nested/c.log"), "").unwrap();

        let files = discover_dump_files(temp_dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(temp_dir.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            names,
            vec![
                PathBuf::from("a.txt"),
                PathBuf::from("b.log"),
                PathBuf::from("nested/c.log"),
            ]
        );
    }

    #[test]
    fn test_discover_missing_path_is_an_error() {
        let result = discover_dump_files(Path::new("/nonexistent/dumps"));
        assert!(matches!(result, Err(Error::FileNotFound { .. })));
    }
}
