//! Message factory: turning completed logical records into console messages
//!
//! The dump parser consumes this module through the narrow [`MessageFactory`]
//! trait only; it never inspects message fields, just whether production
//! succeeded, was filtered out, or failed. The provided
//! [`HardcopyMessageFactory`] understands the hardcopy-log field layout and
//! applies the user's include/exclude filters.

pub mod factory;
pub mod filters;

pub use factory::HardcopyMessageFactory;
pub use filters::{CompiledFilters, MessageFilters};

use crate::Result;
use crate::app::models::ConsoleMessage;
use crate::app::services::dump_parser::classifier::ClassifiedLine;

/// A completed logical record handed to the factory
#[derive(Debug, Clone, Copy)]
pub enum LogicalRecord<'a> {
    /// One physical line (N or X record)
    Single(&'a ClassifiedLine),
    /// An ordered multiline group, start line first
    Group(&'a [ClassifiedLine]),
}

/// Factory outcome for a well-formed input record
#[derive(Debug)]
pub enum FactoryOutcome {
    /// Record produced a message
    Accepted(ConsoleMessage),
    /// Record was well-formed but excluded by a filter predicate; never an
    /// error in any mode
    Filtered,
}

/// External contract consumed by the dump parser.
///
/// Implementations return `Err` only for parse failures; filter exclusion is
/// the non-error [`FactoryOutcome::Filtered`].
pub trait MessageFactory {
    fn build(&self, record: LogicalRecord<'_>) -> Result<FactoryOutcome>;
}
