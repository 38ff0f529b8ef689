//! Include/exclude filter configuration for message production
//!
//! Filters are opaque to the dump parser; it forwards them verbatim to the
//! factory. Patterns are regexes matched against the reconstructed message
//! text. Exclusions win over inclusions; an empty include list admits
//! everything.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::Result;

/// User-supplied filter patterns, as stored in configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageFilters {
    /// Messages must match at least one of these (empty = all)
    #[serde(default)]
    pub include: Vec<String>,

    /// Messages matching any of these are dropped
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl MessageFilters {
    /// Compile the patterns, failing on an invalid regex
    pub fn compile(&self) -> Result<CompiledFilters> {
        let include = self
            .include
            .iter()
            .map(|p| Regex::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let exclude = self
            .exclude
            .iter()
            .map(|p| Regex::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(CompiledFilters { include, exclude })
    }
}

/// Compiled form of [`MessageFilters`], ready for matching
#[derive(Debug, Clone, Default)]
pub struct CompiledFilters {
    include: Vec<Regex>,
    exclude: Vec<Regex>,
}

impl CompiledFilters {
    /// True when no filters are active
    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }

    /// Decide whether a message with the given text should be kept
    pub fn matches(&self, text: &str) -> bool {
        if self.exclude.iter().any(|re| re.is_match(text)) {
            return false;
        }
        self.include.is_empty() || self.include.iter().any(|re| re.is_match(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filters_admit_everything() {
        let filters = MessageFilters::default().compile().unwrap();
        assert!(filters.is_empty());
        assert!(filters.matches("IEF450I anything at all"));
    }

    #[test]
    fn test_include_requires_a_match() {
        let filters = MessageFilters {
            include: vec!["^IEF".to_string()],
            exclude: vec![],
        }
        .compile()
        .unwrap();

        assert!(filters.matches("IEF450I JOB ENDED"));
        assert!(!filters.matches("IST314I END"));
    }

    #[test]
    fn test_exclude_wins_over_include() {
        let filters = MessageFilters {
            include: vec!["IEF".to_string()],
            exclude: vec!["ABEND".to_string()],
        }
        .compile()
        .unwrap();

        assert!(filters.matches("IEF450I JOB ENDED"));
        assert!(!filters.matches("IEF450I JOB ENDED - ABEND=S0C4"));
    }

    #[test]
    fn test_invalid_pattern_is_a_configuration_error() {
        let filters = MessageFilters {
            include: vec!["[unclosed".to_string()],
            exclude: vec![],
        };
        assert!(filters.compile().is_err());
    }
}
