//! Dump parser for z/OS syslog and operlog console-log files
//!
//! This module turns a raw stream of physical dump lines into an ordered
//! sequence of complete logical console messages, tolerating malformed or
//! truncated input.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Driver state machine with one-line lookahead
//! - [`normalizer`] - Per-line character cleanup
//! - [`classifier`] - Record-type tagging and identifier extraction
//! - [`multiline`] - Collection of open multiline message groups
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use zoslog_processor::app::services::dump_parser::DumpParser;
//! use zoslog_processor::app::services::message_factory::{
//!     HardcopyMessageFactory, MessageFilters,
//! };
//!
//! # fn example() -> zoslog_processor::Result<()> {
//! let factory = HardcopyMessageFactory::new(&MessageFilters::default())?;
//! let parser = DumpParser::new(factory, false);
//! let result = parser.parse(["N SYS1 10:00:00.00 IEF125I HELLO".to_string()])?;
//!
//! println!("{} messages from {} lines",
//!          result.stats.messages_produced,
//!          result.stats.lines_read);
//! # Ok(())
//! # }
//! ```

pub mod classifier;
pub mod multiline;
pub mod normalizer;
pub mod parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use classifier::{ClassifiedLine, RecordType};
pub use multiline::MultilineCollector;
pub use parser::DumpParser;
pub use stats::{ParseResult, ParseStats};
