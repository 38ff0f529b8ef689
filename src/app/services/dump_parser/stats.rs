//! Parsing statistics and result structures for dump processing
//!
//! This module provides types for tracking parse outcomes and error
//! counters, and for organizing parsed results for downstream reporting.

use crate::app::models::MessageSet;

/// Parsing result with reconstructed messages and statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Messages accepted by the factory, in completion order
    pub messages: MessageSet,

    /// Parse statistics and collected error descriptions
    pub stats: ParseStats,
}

/// Counters describing one parse run
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct ParseStats {
    /// Physical lines consumed from the input, including merged tails
    pub lines_read: usize,

    /// Messages accepted by the factory
    pub messages_produced: usize,

    /// Well-formed records excluded by the active filters (not errors)
    pub filtered_out: usize,

    /// Lines with an unclassifiable tag or an invalid multiline id
    pub malformed_records: usize,

    /// Body/end lines referencing a group id with no open group
    pub dangling_appends: usize,

    /// Groups still open when the stream ended
    pub unterminated_groups: usize,

    /// Records the message factory rejected
    pub factory_failures: usize,

    /// Error descriptions collected during a tolerant-mode parse
    pub errors: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of error-class events observed
    pub fn error_count(&self) -> usize {
        self.malformed_records + self.dangling_appends + self.factory_failures
    }

    /// Calculate the fraction of attempted records that produced a message,
    /// as a percentage. Filtered records count as successes.
    pub fn success_rate(&self) -> f64 {
        let attempted = self.messages_produced + self.filtered_out + self.error_count();
        if attempted == 0 {
            0.0
        } else {
            ((self.messages_produced + self.filtered_out) as f64 / attempted as f64) * 100.0
        }
    }

    /// Fold another run's counters into this one (per-file aggregation)
    pub fn merge(&mut self, other: &ParseStats) {
        self.lines_read += other.lines_read;
        self.messages_produced += other.messages_produced;
        self.filtered_out += other.filtered_out;
        self.malformed_records += other.malformed_records;
        self.dangling_appends += other.dangling_appends;
        self.unterminated_groups += other.unterminated_groups;
        self.factory_failures += other.factory_failures;
        self.errors.extend(other.errors.iter().cloned());
    }
}
