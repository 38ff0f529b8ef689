//! Integration tests for the dump parser with realistic console-log fixtures
//!
//! These tests exercise the whole pipeline from raw dump text through
//! normalization, continuation merging and multiline assembly to the
//! message factory, the way the CLI drives it.

use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

use zoslog_processor::app::models::MessageKind;
use zoslog_processor::app::services::dump_parser::DumpParser;
use zoslog_processor::app::services::message_factory::{HardcopyMessageFactory, MessageFilters};

/// Build a D/L/E style line with `id` at absolute columns 42..45
fn columned(tag: char, id: &str, payload: &str) -> String {
    format!("{}{}{}{}", tag, " ".repeat(41), id, payload)
}

fn default_parser() -> DumpParser<HardcopyMessageFactory> {
    let factory = HardcopyMessageFactory::new(&MessageFilters::default())
        .expect("default filters always compile");
    DumpParser::new(factory, false)
}

/// A small but realistic syslog excerpt: page markers, virtual-page
/// digits, single-line messages, a wrapped line and one multiline group.
fn sample_dump() -> String {
    let mut dump = String::new();
    dump.push_str("+TITLE PAGE 0001\n");
    dump.push_str("0N 10:05:59.12 JOB00123 IEF403I MYJOB - STARTED\n");
    dump.push_str("N 10:06:00.00 JOB00123 IEF234E LONG LINE THAT THE\n");
    dump.push_str("S CONSOLE WRAPPED\n");
    dump.push_str("0M 10:06:00.51 STC00042 IST075I NAME = NETWORK 007\n");
    dump.push_str(&columned('D', "007", " STATUS = ACTIVE\n"));
    dump.push_str(&columned('L', "007", " SESSIONS = 12\n"));
    dump.push_str(&columned('E', "007", "\n"));
    dump.push_str("4\n");
    dump.push_str("X 10:06:01.03 INTERNAL READER WAITING FOR WORK\n");
    dump
}

#[test]
fn test_end_to_end_sample_dump() {
    let parser = default_parser();
    let result = parser.parse(sample_dump().lines()).unwrap();

    assert_eq!(result.messages.len(), 4);
    assert_eq!(result.stats.error_count(), 0);
    assert_eq!(result.stats.unterminated_groups, 0);

    // Wrapped single line came back together
    assert!(result.messages[1].text.ends_with("THAT THE CONSOLE WRAPPED"));

    // Multiline group assembled in order, header first
    let network = &result.messages[2];
    assert_eq!(network.kind, MessageKind::Multiline);
    assert_eq!(network.line_count, 4);
    let lines: Vec<&str> = network.text.lines().collect();
    assert!(lines[0].contains("IST075I"));
    assert!(lines[1].contains("STATUS = ACTIVE"));
    assert!(lines[2].contains("SESSIONS = 12"));
}

#[test]
fn test_field_extraction_from_sample_dump() {
    let parser = default_parser();
    let result = parser.parse(sample_dump().lines()).unwrap();

    let started = &result.messages[0];
    assert_eq!(started.timestamp.as_deref(), Some("10:05:59.12"));
    assert_eq!(started.job_id.as_deref(), Some("JOB00123"));
    assert_eq!(started.message_id.as_deref(), Some("IEF403I"));

    let network = &result.messages[2];
    assert_eq!(network.job_id.as_deref(), Some("STC00042"));
    assert_eq!(network.message_id.as_deref(), Some("IST075I"));
}

#[test]
fn test_parse_from_a_file_on_disk() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", sample_dump()).unwrap();

    let content = fs::read_to_string(file.path()).unwrap();
    let result = default_parser().parse(content.lines()).unwrap();

    assert_eq!(result.messages.len(), 4);
    assert_eq!(result.stats.lines_read, 10);
}

#[test]
fn test_include_and_exclude_filters() {
    let factory = HardcopyMessageFactory::new(&MessageFilters {
        include: vec!["^.*IEF".to_string()],
        exclude: vec!["IEF234E".to_string()],
    })
    .unwrap();
    let parser = DumpParser::new(factory, false);
    let result = parser.parse(sample_dump().lines()).unwrap();

    // Only the IEF403I line survives: IST/internal-reader lines miss the
    // include set, and the wrapped IEF234E line is excluded.
    assert_eq!(result.messages.len(), 1);
    assert!(result.messages[0].text.contains("IEF403I"));
    assert_eq!(result.stats.filtered_out, 3);
    assert_eq!(result.stats.error_count(), 0);
}

#[test]
fn test_truncated_dump_flushes_open_group() {
    let mut dump = String::new();
    dump.push_str("M 10:06:00.51 IST075I NAME = NETWORK 007\n");
    dump.push_str(&columned('D', "007", " STATUS = ACTIVE\n"));
    // Dump ends mid-group, no E record

    let result = default_parser().parse(dump.lines()).unwrap();

    assert_eq!(result.messages.len(), 1);
    assert_eq!(result.messages[0].line_count, 2);
    assert_eq!(result.stats.unterminated_groups, 1);
}

#[test]
fn test_strict_mode_aborts_on_garbage_tolerant_continues() {
    let dump = "N FIRST\n? garbage line\nN SECOND\n";

    let tolerant = default_parser().parse(dump.lines()).unwrap();
    assert_eq!(tolerant.messages.len(), 2);
    assert_eq!(tolerant.stats.malformed_records, 1);

    let factory = HardcopyMessageFactory::new(&MessageFilters::default()).unwrap();
    let strict = DumpParser::new(factory, true);
    assert!(strict.parse(dump.lines()).is_err());
}

#[test]
fn test_pop_drains_in_reverse_completion_order() {
    let result = default_parser()
        .parse(["N FIRST", "N SECOND", "N THIRD"])
        .unwrap();

    let mut messages = result.messages;
    assert_eq!(messages.pop().unwrap().text, "THIRD");
    assert_eq!(messages.pop().unwrap().text, "SECOND");
    assert_eq!(messages.pop().unwrap().text, "FIRST");
    assert!(messages.pop().is_none());
}

#[test]
fn test_interleaved_multiline_groups() {
    let mut dump = String::new();
    dump.push_str("M FIRST GROUP 001\n");
    dump.push_str("M SECOND GROUP 002\n");
    dump.push_str(&columned('D', "001", " FIRST BODY\n"));
    dump.push_str(&columned('D', "002", " SECOND BODY\n"));
    dump.push_str(&columned('E', "002", "\n"));
    dump.push_str(&columned('E', "001", "\n"));

    let result = default_parser().parse(dump.lines()).unwrap();

    // Group 002 closed first, so it completes first
    assert_eq!(result.messages.len(), 2);
    assert!(result.messages[0].text.contains("SECOND BODY"));
    assert!(result.messages[1].text.contains("FIRST BODY"));
    assert_eq!(result.stats.error_count(), 0);
}
