//! Hardcopy-log message factory
//!
//! Interprets the field layout of a completed logical record: the record tag
//! is stripped, then the remaining tokens are scanned for a time-of-day
//! stamp, a JES job identifier and a z/OS message identifier. Field
//! extraction is heuristic and forgiving; only an empty record body is a
//! parse failure.

use regex::Regex;
use tracing::trace;

use super::filters::{CompiledFilters, MessageFilters};
use super::{FactoryOutcome, LogicalRecord, MessageFactory};
use crate::app::models::{ConsoleMessage, MessageKind};
use crate::app::services::dump_parser::classifier::ClassifiedLine;
use crate::constants::{JOB_ID_PATTERN, MESSAGE_ID_PATTERN, TIMESTAMP_PATTERN};
use crate::{Error, Result};

/// Message factory for the hardcopy-log record layout
#[derive(Debug)]
pub struct HardcopyMessageFactory {
    filters: CompiledFilters,
    message_id: Regex,
    job_id: Regex,
    timestamp: Regex,
}

impl HardcopyMessageFactory {
    /// Create a factory with the given filter configuration
    pub fn new(filters: &MessageFilters) -> Result<Self> {
        Ok(Self {
            filters: filters.compile()?,
            message_id: Regex::new(MESSAGE_ID_PATTERN)?,
            job_id: Regex::new(JOB_ID_PATTERN)?,
            timestamp: Regex::new(TIMESTAMP_PATTERN)?,
        })
    }

    /// Line content with the record tag character removed
    fn body(line: &ClassifiedLine) -> &str {
        let content = line.content.as_str();
        match content.char_indices().nth(1) {
            Some((idx, _)) => content[idx..].trim(),
            None => "",
        }
    }

    fn build_message(&self, kind: MessageKind, bodies: &[&str]) -> Result<FactoryOutcome> {
        let text = bodies.join("\n");
        if text.trim().is_empty() {
            return Err(Error::factory_failure("record has no message body"));
        }

        // Field scan runs over the head line only; body lines of a group
        // repeat layout columns, not message metadata.
        let head = bodies[0];
        let mut message_id = None;
        let mut job_id = None;
        let mut timestamp = None;
        for token in head.split_whitespace() {
            // Job-id check runs first: JES job tokens also satisfy the
            // broader message-id shape.
            if job_id.is_none() && self.job_id.is_match(token) {
                job_id = Some(token.to_string());
            } else if message_id.is_none() && self.message_id.is_match(token) {
                message_id = Some(token.to_string());
            } else if timestamp.is_none() && self.timestamp.is_match(token) {
                timestamp = Some(token.to_string());
            }
        }

        if !self.filters.matches(&text) {
            trace!("message excluded by filter: {}", head);
            return Ok(FactoryOutcome::Filtered);
        }

        Ok(FactoryOutcome::Accepted(ConsoleMessage {
            kind,
            message_id,
            job_id,
            timestamp,
            text,
            line_count: bodies.len(),
        }))
    }
}

impl MessageFactory for HardcopyMessageFactory {
    fn build(&self, record: LogicalRecord<'_>) -> Result<FactoryOutcome> {
        match record {
            LogicalRecord::Single(line) => {
                self.build_message(MessageKind::Single, &[Self::body(line)])
            }
            LogicalRecord::Group(lines) => {
                if lines.is_empty() {
                    return Err(Error::factory_failure("empty multiline group"));
                }
                let bodies: Vec<&str> = lines.iter().map(Self::body).collect();
                self.build_message(MessageKind::Multiline, &bodies)
            }
        }
    }
}
