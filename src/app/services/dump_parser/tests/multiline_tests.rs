//! Tests for the multiline group collector

use crate::app::services::dump_parser::classifier::classify;
use crate::app::services::dump_parser::multiline::MultilineCollector;

fn line(text: &str) -> crate::app::services::dump_parser::classifier::ClassifiedLine {
    classify(text).expect("test line should classify")
}

#[test]
fn test_start_append_close_round_trip() {
    let mut collector = MultilineCollector::new();

    collector.start("007".to_string(), line("M HEADER 007"));
    assert_eq!(collector.open_count(), 1);
    assert!(collector.append("007", line("D body one")));
    assert!(collector.append("007", line("D body two")));

    let closed = collector.close("007", line("E end"));
    assert!(!closed.dangling);
    assert_eq!(closed.lines.len(), 4);
    assert!(closed.lines[0].content.starts_with('M'));
    assert!(closed.lines[3].content.starts_with('E'));

    // Removed from the live map the instant the terminator is processed
    assert_eq!(collector.open_count(), 0);
}

#[test]
fn test_start_overwrites_existing_group_silently() {
    let mut collector = MultilineCollector::new();

    collector.start("007".to_string(), line("M FIRST 007"));
    collector.append("007", line("D stale body"));
    collector.start("007".to_string(), line("M SECOND 007"));

    assert_eq!(collector.open_count(), 1);
    let closed = collector.close("007", line("E end"));
    assert_eq!(closed.lines.len(), 2);
    assert!(closed.lines[0].content.contains("SECOND"));
}

#[test]
fn test_append_to_unknown_id_is_dangling() {
    let mut collector = MultilineCollector::new();
    assert!(!collector.append("999", line("D orphan body")));
    assert_eq!(collector.open_count(), 0);
}

#[test]
fn test_close_unknown_id_returns_synthetic_group() {
    let mut collector = MultilineCollector::new();
    let closed = collector.close("999", line("E orphan end"));

    assert!(closed.dangling);
    assert_eq!(closed.lines.len(), 1);
    assert!(closed.lines[0].content.starts_with('E'));
}

#[test]
fn test_drain_preserves_insertion_order() {
    let mut collector = MultilineCollector::new();
    collector.start("003".to_string(), line("M THIRD 003"));
    collector.start("001".to_string(), line("M FIRST 001"));
    collector.start("002".to_string(), line("M SECOND 002"));

    let drained = collector.drain();
    let ids: Vec<&str> = drained.iter().map(|(id, _)| id.as_str()).collect();
    assert_eq!(ids, vec!["003", "001", "002"]);
    assert_eq!(collector.open_count(), 0);
}
