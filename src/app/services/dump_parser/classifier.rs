//! Record classification for normalized dump lines
//!
//! Every physical line carries a one-character record-type tag, optionally
//! preceded by a single virtual-page digit that syslog inserts when it
//! creates a new virtual page. Multiline records additionally carry a group
//! identifier: the trailing token of an `M` line, or the fixed column slice
//! 42..45 of a `D`/`L`/`E` line.

use crate::constants::{
    CONTINUATION_TAG, MULTILINE_END_TAG, MULTILINE_ID_END, MULTILINE_ID_START, MULTILINE_START_TAG,
    PAGE_BREAK_TAG, is_multiline_body_tag, is_single_line_tag,
};

/// Record type derived from the first significant character of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordType {
    /// '+': a new console page marker, never content
    PageBreak,
    /// 'S': wrapped tail of the previous logical line
    Continuation,
    /// 'N' or 'X': one complete single-line message
    Single,
    /// 'M': opens a multiline group
    MultilineStart,
    /// 'D' or 'L': body line of an open multiline group
    MultilineBody,
    /// 'E': closes a multiline group
    MultilineEnd,
    /// Anything else: unclassifiable, dropped with a warning
    Unknown(char),
}

impl RecordType {
    /// True for record types whose line content survives past classification.
    ///
    /// Page breaks and raw continuation tails are consumed by the driver
    /// before any content handling, so they never receive a lookahead merge.
    pub fn carries_content(&self) -> bool {
        !matches!(self, RecordType::PageBreak | RecordType::Continuation)
    }
}

/// A normalized line plus its derived record type and group identifier
#[derive(Debug, Clone)]
pub struct ClassifiedLine {
    pub record_type: RecordType,
    /// Line text after normalization and virtual-page digit stripping
    pub content: String,
    /// Multiline group identifier, where the record type defines one
    pub group_id: Option<String>,
}

/// Strip at most one leading virtual-page digit from a normalized line.
pub fn strip_page_digit(line: &str) -> &str {
    match line.chars().next() {
        Some(c) if c.is_ascii_digit() => &line[1..],
        _ => line,
    }
}

/// Classify a normalized line.
///
/// Returns `None` when nothing remains after virtual-page digit stripping
/// (the driver advances its window without emitting anything).
pub fn classify(line: &str) -> Option<ClassifiedLine> {
    let content = strip_page_digit(line);
    let first = content.chars().next()?;

    let (record_type, group_id) = if first == PAGE_BREAK_TAG {
        (RecordType::PageBreak, None)
    } else if first == CONTINUATION_TAG {
        (RecordType::Continuation, None)
    } else if is_single_line_tag(first) {
        (RecordType::Single, None)
    } else if first == MULTILINE_START_TAG {
        (RecordType::MultilineStart, trailing_token(content))
    } else if is_multiline_body_tag(first) {
        (RecordType::MultilineBody, column_id(line))
    } else if first == MULTILINE_END_TAG {
        (RecordType::MultilineEnd, column_id(line))
    } else {
        (RecordType::Unknown(first), None)
    };

    Some(ClassifiedLine {
        record_type,
        content: content.to_string(),
        group_id,
    })
}

/// Last whitespace-delimited token of a line; the multiline id of an `M`
/// record. Re-run after a continuation merge since the merged tail extends
/// the trailing edge.
pub fn trailing_token(line: &str) -> Option<String> {
    line.split_whitespace().last().map(str::to_string)
}

/// Fixed-column multiline id of a `D`/`L`/`E` record.
///
/// The id occupies absolute columns 42..45 of the physical line; a
/// virtual-page digit, when present, occupies column 0 and shifts the tag,
/// not the id. Extraction therefore runs on the line before digit
/// stripping. Bounds-checked: a line truncated before column 45 yields
/// `None` instead of panicking.
pub fn column_id(line: &str) -> Option<String> {
    line.get(MULTILINE_ID_START..MULTILINE_ID_END)
        .map(str::to_string)
}

/// Check that a multiline identifier is fully numeric, as the dump format
/// promises for `M` records.
pub fn is_numeric_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_digit())
}
