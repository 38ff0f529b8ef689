//! Core data model types for reconstructed console messages.
//!
//! These are the shared vocabulary between the dump parser, the message
//! factory and the CLI export layer.

use serde::Serialize;

/// Kind of logical record a message was built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// One physical line (N or X record)
    Single,
    /// An assembled multiline group (M .. D/L .. E records)
    Multiline,
}

impl MessageKind {
    /// Human-readable label for display
    pub fn label(&self) -> &'static str {
        match self {
            MessageKind::Single => "single",
            MessageKind::Multiline => "multiline",
        }
    }
}

/// One semantically complete console event, reconstructed from one or more
/// physical dump lines.
#[derive(Debug, Clone, Serialize)]
pub struct ConsoleMessage {
    /// Whether this came from a single-line or multiline record
    pub kind: MessageKind,

    /// z/OS message identifier (e.g. "IEF450I"), when one was recognized
    pub message_id: Option<String>,

    /// JES job identifier (e.g. "JOB00123"), when one was recognized
    pub job_id: Option<String>,

    /// Time-of-day text as it appeared in the record (not reinterpreted)
    pub timestamp: Option<String>,

    /// Full message text; multiline records join their line bodies with '\n'
    pub text: String,

    /// Number of physical lines this message was assembled from
    pub line_count: usize,
}

/// Ordered collection of reconstructed messages.
///
/// Insertion order is completion order of the logical records. Note that
/// [`MessageSet::pop`] consumes from the **back** (most recently completed
/// first); this mirrors the original library's contract, so callers wanting
/// scan order should index or iterate instead.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MessageSet {
    messages: Vec<ConsoleMessage>,
}

impl MessageSet {
    /// Create an empty message set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message; called in record completion order
    pub fn push(&mut self, message: ConsoleMessage) {
        self.messages.push(message);
    }

    /// Number of messages in the set
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True if no messages were produced
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Access a message by position in completion order
    pub fn get(&self, index: usize) -> Option<&ConsoleMessage> {
        self.messages.get(index)
    }

    /// Remove and return the most recently appended message (LIFO).
    ///
    /// Consuming the whole set through `pop` yields reverse completion
    /// order.
    pub fn pop(&mut self) -> Option<ConsoleMessage> {
        self.messages.pop()
    }

    /// Iterate messages in completion order
    pub fn iter(&self) -> std::slice::Iter<'_, ConsoleMessage> {
        self.messages.iter()
    }
}

impl std::ops::Index<usize> for MessageSet {
    type Output = ConsoleMessage;

    fn index(&self, index: usize) -> &Self::Output {
        &self.messages[index]
    }
}

impl IntoIterator for MessageSet {
    type Item = ConsoleMessage;
    type IntoIter = std::vec::IntoIter<ConsoleMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.into_iter()
    }
}

impl<'a> IntoIterator for &'a MessageSet {
    type Item = &'a ConsoleMessage;
    type IntoIter = std::slice::Iter<'a, ConsoleMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
