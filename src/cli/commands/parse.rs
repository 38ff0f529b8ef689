//! Parse command implementation for the z/OS log processor CLI
//!
//! Reads one or more dump files, reconstructs the console messages and
//! writes them to stdout or a file in the requested format.

use colored::Colorize;
use csv::WriterBuilder;
use std::fs;
use std::io::{BufWriter, Write};
use std::time::Instant;
use tracing::{debug, info};

use super::shared::{
    RunStats, create_progress_bar, discover_dump_files, load_parse_configuration, setup_logging,
};
use crate::app::models::{ConsoleMessage, MessageSet};
use crate::app::services::dump_parser::DumpParser;
use crate::app::services::message_factory::HardcopyMessageFactory;
use crate::cli::args::{OutputFormat, ParseArgs};
use crate::{Error, Result};

/// Parse command runner
pub fn run_parse(args: ParseArgs) -> Result<RunStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting dump parse");
    debug!("Parse arguments: {:?}", args);

    args.validate()?;
    let config = load_parse_configuration(&args)?;

    let files = discover_dump_files(&args.input)?;
    let factory = HardcopyMessageFactory::new(&config.filters)?;
    let parser = DumpParser::new(factory, config.processing.halt_on_errors);

    let mut run = RunStats::default();
    let mut all_messages = MessageSet::new();

    for file in &files {
        info!("Parsing {}", file.display());
        let content = fs::read_to_string(file)
            .map_err(|e| Error::io(format!("failed to read dump file {}", file.display()), e))?;

        let result = if config.processing.show_progress && args.show_progress() {
            let pb = create_progress_bar(
                content.lines().count() as u64,
                &format!("Parsing {}", file.display()),
            );
            let result = parser.parse(pb.wrap_iter(content.lines()))?;
            pb.finish_and_clear();
            result
        } else {
            parser.parse(content.lines())?
        };

        run.files_processed += 1;
        run.parse.merge(&result.stats);
        for message in result.messages {
            all_messages.push(message);
        }
    }

    write_messages(&args, &all_messages)?;

    run.processing_time = start_time.elapsed();

    info!(
        "Parse completed in {:.2}s: {} files, {} messages, {:.1}% success rate",
        run.processing_time.as_secs_f64(),
        run.files_processed,
        run.parse.messages_produced,
        run.parse.success_rate()
    );

    // Keep the summary off stdout, which carries the message output
    if !args.quiet {
        eprintln!(
            "{} {} message(s) from {} file(s), {} filtered, {} error(s)",
            "Done:".green().bold(),
            run.parse.messages_produced,
            run.files_processed,
            run.parse.filtered_out,
            run.parse.error_count()
        );
    }

    Ok(run)
}

/// Write reconstructed messages in the requested format and destination
fn write_messages(args: &ParseArgs, messages: &MessageSet) -> Result<()> {
    let mut writer: Box<dyn Write> = match &args.output_file {
        Some(path) => {
            let file = fs::File::create(path).map_err(|e| {
                Error::io(format!("failed to create output file {}", path.display()), e)
            })?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(std::io::stdout())),
    };

    match args.output_format {
        OutputFormat::Human => write_human(&mut writer, messages)?,
        OutputFormat::Json => write_json(&mut writer, messages)?,
        OutputFormat::Csv => write_csv(&mut writer, messages)?,
    }

    writer.flush()?;
    Ok(())
}

fn write_human(writer: &mut dyn Write, messages: &MessageSet) -> Result<()> {
    for message in messages.iter() {
        writeln!(writer, "{}", message.text)?;
    }
    Ok(())
}

fn write_json(writer: &mut dyn Write, messages: &MessageSet) -> Result<()> {
    let all: Vec<&ConsoleMessage> = messages.iter().collect();
    serde_json::to_writer_pretty(&mut *writer, &all)?;
    writeln!(writer)?;
    Ok(())
}

fn write_csv(writer: &mut dyn Write, messages: &MessageSet) -> Result<()> {
    let mut csv_writer = WriterBuilder::new().from_writer(writer);
    csv_writer.write_record(["kind", "message_id", "job_id", "timestamp", "lines", "text"])?;

    for message in messages.iter() {
        csv_writer.write_record([
            message.kind.label(),
            message.message_id.as_deref().unwrap_or(""),
            message.job_id.as_deref().unwrap_or(""),
            message.timestamp.as_deref().unwrap_or(""),
            &message.line_count.to_string(),
            &message.text,
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}
