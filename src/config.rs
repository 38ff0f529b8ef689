//! Configuration management and validation.
//!
//! Provides the layered configuration for dump processing: defaults, an
//! optional TOML config file, then CLI argument overrides applied by the
//! command layer.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::app::services::message_factory::MessageFilters;
use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_HALT_ON_ERRORS, DEFAULT_SHOW_PROGRESS,
};
use crate::{Error, Result};

/// Global configuration for dump processing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Parse behavior settings
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Message filter patterns forwarded verbatim to the message factory
    #[serde(default)]
    pub filters: MessageFilters,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Parse behavior settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Abort the whole parse on the first malformed record, dangling append
    /// or factory failure instead of logging and skipping
    pub halt_on_errors: bool,

    /// Display a progress bar while parsing (cosmetic only; suppressed
    /// automatically when stderr is not a terminal)
    pub show_progress: bool,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            halt_on_errors: DEFAULT_HALT_ON_ERRORS,
            show_progress: DEFAULT_SHOW_PROGRESS,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (error, warn, info, debug, trace)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Platform default config file path
    /// (e.g. `~/.config/zoslog-processor/config.toml`)
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::configuration("could not determine config directory"))?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load configuration from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("failed to read config file {}", path.display()), e))?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Layered load: explicit file if given, otherwise the default location
    /// when it exists, otherwise built-in defaults.
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        if let Some(path) = config_file {
            debug!("loading config file: {}", path.display());
            return Self::load_from_file(path);
        }

        if let Ok(default_path) = Self::default_config_path() {
            if default_path.exists() {
                debug!("loading default config file: {}", default_path.display());
                return Self::load_from_file(&default_path);
            }
        }

        debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        match self.logging.level.as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            other => {
                return Err(Error::configuration(format!(
                    "unknown log level '{}' (expected error, warn, info, debug or trace)",
                    other
                )));
            }
        }

        // Surface bad filter regexes at configuration time, not mid-parse
        self.filters.compile()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert!(!config.processing.halt_on_errors);
        assert!(config.processing.show_progress);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[processing]
halt_on_errors = true
show_progress = false

[filters]
include = ["^IEF"]
exclude = ["TESTJOB"]

[logging]
level = "debug"
"#
        )
        .unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        assert!(config.processing.halt_on_errors);
        assert!(!config.processing.show_progress);
        assert_eq!(config.filters.include, vec!["^IEF"]);
        assert_eq!(config.logging.level, "debug");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[processing]\nhalt_on_errors = true\nshow_progress = true").unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        assert!(config.processing.halt_on_errors);
        assert_eq!(config.logging.level, "warn");
        assert!(config.filters.include.is_empty());
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let mut config = Config::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_filter_pattern_rejected() {
        let mut config = Config::default();
        config.filters.include.push("[unclosed".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = Config::load_from_file(Path::new("/nonexistent/config.toml"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
