//! Collection of open multiline message groups
//!
//! One collector instance is owned by a single driver run; there is no
//! shared or static state. Groups are kept in insertion order so the
//! end-of-stream flush of unterminated groups is deterministic.

use indexmap::IndexMap;
use tracing::debug;

use super::classifier::ClassifiedLine;

/// A closed multiline group handed back to the driver
#[derive(Debug)]
pub struct ClosedGroup {
    /// The ordered physical lines, start through terminator
    pub lines: Vec<ClassifiedLine>,
    /// True when the terminator referenced an id with no open group; the
    /// group then contains only the terminator line itself
    pub dangling: bool,
}

/// Live map of open multiline groups, keyed by group identifier.
///
/// Invariant: every key corresponds to exactly one open, unterminated group.
/// A key absent from the map means either "never started" or "already closed
/// and removed".
#[derive(Debug, Default)]
pub struct MultilineCollector {
    groups: IndexMap<String, Vec<ClassifiedLine>>,
}

impl MultilineCollector {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of currently open groups
    pub fn open_count(&self) -> usize {
        self.groups.len()
    }

    /// Open a new group. An existing group under the same id is silently
    /// replaced; id reuse happens in truncated dumps and is tolerated.
    pub fn start(&mut self, id: String, line: ClassifiedLine) {
        if let Some(previous) = self.groups.insert(id.clone(), vec![line]) {
            debug!(
                "multiline id {} reused while {} lines were still open; discarding previous group",
                id,
                previous.len()
            );
        }
    }

    /// Append a body line to an open group.
    ///
    /// Returns false when no group is open under `id` (a dangling append);
    /// the line is dropped and the caller decides the error policy.
    pub fn append(&mut self, id: &str, line: ClassifiedLine) -> bool {
        match self.groups.get_mut(id) {
            Some(lines) => {
                lines.push(line);
                true
            }
            None => false,
        }
    }

    /// Close a group: append the terminator, remove the group from the live
    /// map and return the full ordered sequence.
    ///
    /// Closing an id with no open group returns a synthetic group holding
    /// only the terminator, flagged as dangling.
    pub fn close(&mut self, id: &str, line: ClassifiedLine) -> ClosedGroup {
        match self.groups.shift_remove(id) {
            Some(mut lines) => {
                lines.push(line);
                ClosedGroup {
                    lines,
                    dangling: false,
                }
            }
            None => ClosedGroup {
                lines: vec![line],
                dangling: true,
            },
        }
    }

    /// Remove and return every still-open group in insertion order.
    ///
    /// Called at end of stream to force-flush groups whose terminator was
    /// never observed.
    pub fn drain(&mut self) -> Vec<(String, Vec<ClassifiedLine>)> {
        self.groups.drain(..).collect()
    }
}
