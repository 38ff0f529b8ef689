//! z/OS Console-Log Processor Library
//!
//! A Rust library for reconstructing logical operator-console messages from
//! raw z/OS syslog and operlog dump files.
//!
//! This library provides tools for:
//! - Normalizing and classifying tagged physical dump lines
//! - Merging wrapped "raw continuation" line pairs back into one logical line
//! - Assembling multi-line messages keyed by their multiline identifier
//! - Producing structured console messages through a pluggable message factory
//! - Tolerant-by-default error handling with an optional strict mode

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod dump_parser;
        pub mod message_factory;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ConsoleMessage, MessageSet};
pub use app::services::dump_parser::{DumpParser, ParseResult, ParseStats};
pub use config::Config;

/// Result type alias for the z/OS log processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for console-log processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A physical line could not be classified, or carried an invalid
    /// multiline identifier
    #[error("malformed record: {reason}: {line}")]
    MalformedRecord { line: String, reason: String },

    /// A multiline body or end line referenced a group id with no open group
    #[error("dangling append to multiline group '{group_id}' with no open start record")]
    DanglingAppend { group_id: String },

    /// The message factory rejected a syntactically assembled record
    #[error("message factory failure: {message}")]
    FactoryFailure { message: String },

    /// Configuration error
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// File not found
    #[error("file not found: {path}")]
    FileNotFound { path: String },

    /// Export/serialization error while writing results
    #[error("export error: {message}")]
    Export {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a malformed record error
    pub fn malformed_record(line: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line: line.into(),
            reason: reason.into(),
        }
    }

    /// Create a dangling append error
    pub fn dangling_append(group_id: impl Into<String>) -> Self {
        Self::DanglingAppend {
            group_id: group_id.into(),
        }
    }

    /// Create a message factory failure
    pub fn factory_failure(message: impl Into<String>) -> Self {
        Self::FactoryFailure {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create an export error with context
    pub fn export(
        message: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self::Export {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<regex::Error> for Error {
    fn from(error: regex::Error) -> Self {
        Self::Configuration {
            message: format!("invalid filter pattern: {}", error),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Self::Configuration {
            message: format!("invalid configuration file: {}", error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Export {
            message: "JSON serialization failed".to_string(),
            source: Box::new(error),
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::Export {
            message: "CSV serialization failed".to_string(),
            source: Box::new(error),
        }
    }
}
