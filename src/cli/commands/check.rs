//! Check command implementation for the z/OS log processor CLI
//!
//! Parses dump files without emitting the reconstructed messages, then
//! reports statistics about what a full parse would produce.

use chrono::Local;
use colored::Colorize;
use std::fs;
use std::time::Instant;
use tracing::{debug, info};

use super::shared::{RunStats, discover_dump_files, load_check_configuration, setup_logging};
use crate::app::services::dump_parser::DumpParser;
use crate::app::services::message_factory::HardcopyMessageFactory;
use crate::cli::args::CheckArgs;
use crate::{Error, Result};

/// Check command runner
pub fn run_check(args: CheckArgs) -> Result<RunStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), false)?;

    info!("Starting dump check");
    debug!("Check arguments: {:?}", args);

    args.validate()?;
    let config = load_check_configuration(&args)?;

    let files = discover_dump_files(&args.input)?;
    let factory = HardcopyMessageFactory::new(&config.filters)?;
    let parser = DumpParser::new(factory, config.processing.halt_on_errors);

    let mut run = RunStats::default();
    for file in &files {
        info!("Checking {}", file.display());
        let content = fs::read_to_string(file)
            .map_err(|e| Error::io(format!("failed to read dump file {}", file.display()), e))?;

        let result = parser.parse(content.lines())?;
        run.files_processed += 1;
        run.parse.merge(&result.stats);
    }

    run.processing_time = start_time.elapsed();
    print_report(&run);

    Ok(run)
}

/// Print the statistics report to stdout
fn print_report(run: &RunStats) {
    let stats = &run.parse;

    println!("{}", "Dump Check Report".bold());
    println!("=================");
    println!(
        "Generated: {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    println!();
    println!("Files processed:      {}", run.files_processed);
    println!("Lines read:           {}", stats.lines_read);
    println!(
        "Messages produced:    {}",
        stats.messages_produced.to_string().green()
    );
    println!("Filtered out:         {}", stats.filtered_out);
    println!(
        "Malformed records:    {}",
        colorize_count(stats.malformed_records)
    );
    println!(
        "Dangling appends:     {}",
        colorize_count(stats.dangling_appends)
    );
    println!(
        "Unterminated groups:  {}",
        colorize_count(stats.unterminated_groups)
    );
    println!(
        "Factory failures:     {}",
        colorize_count(stats.factory_failures)
    );
    println!("Success rate:         {:.1}%", stats.success_rate());
    println!(
        "Processing time:      {:.2}s",
        run.processing_time.as_secs_f64()
    );

    if !stats.errors.is_empty() {
        println!();
        println!("{}", "Problems:".yellow().bold());
        for error in stats.errors.iter().take(MAX_REPORTED_PROBLEMS) {
            println!("  - {}", error);
        }
        if stats.errors.len() > MAX_REPORTED_PROBLEMS {
            println!(
                "  ... and {} more (rerun with -v for details)",
                stats.errors.len() - MAX_REPORTED_PROBLEMS
            );
        }
    }
}

/// Zero stays plain; anything else is a problem worth highlighting
fn colorize_count(count: usize) -> String {
    if count == 0 {
        count.to_string()
    } else {
        count.to_string().red().to_string()
    }
}

const MAX_REPORTED_PROBLEMS: usize = 10;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colorize_count_zero_is_plain() {
        colored::control::set_override(true);
        assert_eq!(colorize_count(0), "0");
        assert_ne!(colorize_count(3), "3");
        colored::control::unset_override();
    }
}
