//! Driver state machine over the dump line stream
//!
//! The driver pulls lines through a two-slot sliding window (current plus
//! one line of lookahead), merges raw continuation pairs, and routes every
//! classified line through one shared dispatch routine. The final line of
//! the input goes through exactly the same routine; it simply has no
//! lookahead, so no continuation merge is possible on it.

use tracing::{debug, trace, warn};

use super::classifier::{
    ClassifiedLine, RecordType, classify, is_numeric_id, strip_page_digit, trailing_token,
};
use super::multiline::MultilineCollector;
use super::normalizer::normalize;
use super::stats::{ParseResult, ParseStats};
use crate::app::models::MessageSet;
use crate::app::services::message_factory::{FactoryOutcome, LogicalRecord, MessageFactory};
use crate::constants::CONTINUATION_TAG;
use crate::{Error, Result};

/// Parser for syslog/operlog console dump streams.
///
/// One value is reusable across parses; all per-run state (the live
/// multiline-group map and the output sequence) lives on the stack of
/// [`DumpParser::parse`].
#[derive(Debug)]
pub struct DumpParser<F: MessageFactory> {
    factory: F,
    halt_on_errors: bool,
}

impl<F: MessageFactory> DumpParser<F> {
    /// Create a parser.
    ///
    /// With `halt_on_errors` the first malformed record, dangling append or
    /// factory failure aborts the whole parse; otherwise problems are logged
    /// and the offending line or group is dropped.
    pub fn new(factory: F, halt_on_errors: bool) -> Self {
        Self {
            factory,
            halt_on_errors,
        }
    }

    /// Parse an ordered stream of raw physical lines into messages.
    ///
    /// The input is consumed exactly once; restarting requires a fresh
    /// stream from the caller.
    pub fn parse<I, S>(&self, lines: I) -> Result<ParseResult>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stats = ParseStats::new();
        let mut messages = MessageSet::new();
        let mut groups = MultilineCollector::new();

        let mut iter = lines.into_iter();
        let mut current = iter.next();

        while let Some(raw) = current {
            stats.lines_read += 1;
            let mut lookahead = iter.next();

            let normalized = normalize(raw.as_ref());
            if let Some(line) = classify(&normalized) {
                let line = if line.record_type.carries_content() {
                    self.merge_lookahead(line, &mut lookahead, &mut iter, &mut stats)
                } else {
                    line
                };
                self.dispatch(line, &mut groups, &mut messages, &mut stats)?;
            }

            current = lookahead;
        }

        self.flush_unterminated(&mut groups, &mut messages, &mut stats);

        debug!(
            "parse complete: {} lines, {} messages, {} filtered, {} errors",
            stats.lines_read,
            stats.messages_produced,
            stats.filtered_out,
            stats.error_count()
        );

        Ok(ParseResult { messages, stats })
    }

    /// Fold a raw-continuation lookahead line into the current line.
    ///
    /// When the lookahead (normalized and digit-stripped) carries the `S`
    /// tag, its content joins the current line's trimmed trailing edge with
    /// a single separating space and the lookahead is consumed without ever
    /// being classified on its own. An `M` line re-derives its trailing
    /// token id afterwards, since the merge extends the trailing edge.
    fn merge_lookahead<I, S>(
        &self,
        mut line: ClassifiedLine,
        lookahead: &mut Option<S>,
        iter: &mut I,
        stats: &mut ParseStats,
    ) -> ClassifiedLine
    where
        I: Iterator<Item = S>,
        S: AsRef<str>,
    {
        let Some(next_raw) = lookahead.as_ref() else {
            return line;
        };

        let next = normalize(next_raw.as_ref());
        let next = strip_page_digit(&next);
        if !next.starts_with(CONTINUATION_TAG) {
            return line;
        }

        let tail = next[CONTINUATION_TAG.len_utf8()..].trim_start();
        trace!("merging continuation tail into: {}", line.content);
        line.content = format!("{} {}", line.content.trim_end(), tail);
        if line.record_type == RecordType::MultilineStart {
            line.group_id = trailing_token(&line.content);
        }

        stats.lines_read += 1;
        *lookahead = iter.next();
        line
    }

    /// Shared dispatch routine for every classified line, streaming and
    /// final alike.
    fn dispatch(
        &self,
        line: ClassifiedLine,
        groups: &mut MultilineCollector,
        messages: &mut MessageSet,
        stats: &mut ParseStats,
    ) -> Result<()> {
        match line.record_type {
            RecordType::PageBreak | RecordType::Continuation => {
                // Page markers and already-merged continuation tails carry
                // no content of their own.
                trace!("skipping non-content line: {}", line.content);
                Ok(())
            }
            RecordType::Single => {
                self.produce(LogicalRecord::Single(&line), messages, stats, false)
            }
            RecordType::MultilineStart => self.start_group(line, groups, stats),
            RecordType::MultilineBody => self.append_to_group(line, groups, stats),
            RecordType::MultilineEnd => self.close_group(line, groups, messages, stats),
            RecordType::Unknown(tag) => {
                let reason = format!("unrecognized record type '{}'", tag);
                warn!("{}, skipping: {}", reason, line.content);
                stats.malformed_records += 1;
                stats.errors.push(format!("{}: {}", reason, line.content));
                if self.halt_on_errors {
                    return Err(Error::malformed_record(line.content, reason));
                }
                Ok(())
            }
        }
    }

    fn start_group(
        &self,
        line: ClassifiedLine,
        groups: &mut MultilineCollector,
        stats: &mut ParseStats,
    ) -> Result<()> {
        // An M line always has a trailing token; it is expected to be the
        // numeric multiline id.
        let id = line.group_id.clone().unwrap_or_default();
        if !is_numeric_id(&id) {
            warn!("multiline start with non-numeric id '{}': {}", id, line.content);
            stats.malformed_records += 1;
            stats
                .errors
                .push(format!("non-numeric multiline id '{}': {}", id, line.content));
            if self.halt_on_errors {
                return Err(Error::malformed_record(
                    line.content,
                    format!("non-numeric multiline id '{}'", id),
                ));
            }
        }
        groups.start(id, line);
        Ok(())
    }

    fn append_to_group(
        &self,
        line: ClassifiedLine,
        groups: &mut MultilineCollector,
        stats: &mut ParseStats,
    ) -> Result<()> {
        let Some(id) = line.group_id.clone() else {
            return self.malformed_columns(line, stats);
        };
        if !groups.append(&id, line) {
            warn!(
                "appending data to multiline message {} with no such message header",
                id
            );
            stats.dangling_appends += 1;
            stats.errors.push(format!("dangling append to group '{}'", id));
            if self.halt_on_errors {
                return Err(Error::dangling_append(id));
            }
        }
        Ok(())
    }

    fn close_group(
        &self,
        line: ClassifiedLine,
        groups: &mut MultilineCollector,
        messages: &mut MessageSet,
        stats: &mut ParseStats,
    ) -> Result<()> {
        let Some(id) = line.group_id.clone() else {
            return self.malformed_columns(line, stats);
        };
        let closed = groups.close(&id, line);
        if closed.dangling {
            warn!("multiline ending {} with no header", id);
            stats.dangling_appends += 1;
            stats.errors.push(format!("dangling terminator for group '{}'", id));
            if self.halt_on_errors {
                return Err(Error::dangling_append(id));
            }
        }
        // The group has already left the live map; the factory sees the full
        // ordered sequence (or the synthetic terminator-only group).
        self.produce(LogicalRecord::Group(&closed.lines), messages, stats, false)
    }

    /// Body/end line truncated before the id columns
    fn malformed_columns(&self, line: ClassifiedLine, stats: &mut ParseStats) -> Result<()> {
        let reason = "line truncated before multiline id columns";
        warn!("{}: {}", reason, line.content);
        stats.malformed_records += 1;
        stats.errors.push(format!("{}: {}", reason, line.content));
        if self.halt_on_errors {
            return Err(Error::malformed_record(line.content, reason));
        }
        Ok(())
    }

    /// Hand a completed logical record to the factory and account for the
    /// outcome. `end_of_stream` relaxes the strict-mode escalation for
    /// factory failures on force-flushed groups.
    fn produce(
        &self,
        record: LogicalRecord<'_>,
        messages: &mut MessageSet,
        stats: &mut ParseStats,
        end_of_stream: bool,
    ) -> Result<()> {
        match self.factory.build(record) {
            Ok(FactoryOutcome::Accepted(message)) => {
                messages.push(message);
                stats.messages_produced += 1;
            }
            Ok(FactoryOutcome::Filtered) => {
                stats.filtered_out += 1;
            }
            Err(error) => {
                stats.factory_failures += 1;
                if end_of_stream {
                    // Stream has already ended; rejection of a force-flushed
                    // group is tolerated silently.
                    debug!("factory rejected unterminated group: {}", error);
                } else {
                    warn!("message factory rejected record: {}", error);
                    stats.errors.push(error.to_string());
                    if self.halt_on_errors {
                        return Err(error);
                    }
                }
            }
        }
        Ok(())
    }

    /// Force-flush every group still open at end of stream.
    ///
    /// Unterminated groups are always a recoverable warning, even in strict
    /// mode: the stream has already ended, there is nothing to abort into.
    fn flush_unterminated(
        &self,
        groups: &mut MultilineCollector,
        messages: &mut MessageSet,
        stats: &mut ParseStats,
    ) {
        if groups.open_count() > 0 {
            warn!(
                "{} multiline message(s) never saw an ending",
                groups.open_count()
            );
        }
        for (id, lines) in groups.drain() {
            stats.unterminated_groups += 1;
            stats
                .errors
                .push(format!("unterminated multiline group '{}'", id));
            // Err is impossible here with end_of_stream set.
            let _ = self.produce(LogicalRecord::Group(&lines), messages, stats, true);
        }
    }
}
