//! Application constants for the z/OS log processor
//!
//! This module contains the record-type tag characters and fixed column
//! offsets defined by the syslog/operlog dump layouts, plus default values
//! used throughout the application.

// =============================================================================
// Record Tag Characters
// =============================================================================

/// Marks the start of a new console page, not content
pub const PAGE_BREAK_TAG: char = '+';

/// Marks a physical line that is the wrapped tail of the previous logical line
pub const CONTINUATION_TAG: char = 'S';

/// Single-line message tags ('N' normal, 'X' syslog initialization)
pub const SINGLE_LINE_TAGS: &[char] = &['N', 'X'];

/// Multiline message start tag
pub const MULTILINE_START_TAG: char = 'M';

/// Multiline body tags ('D' data, 'L' list)
pub const MULTILINE_BODY_TAGS: &[char] = &['D', 'L'];

/// Multiline end tag
pub const MULTILINE_END_TAG: char = 'E';

// =============================================================================
// Fixed Column Layout
// =============================================================================

/// Byte offset where the multiline group identifier begins on D/L/E lines.
///
/// These offsets are a bit-exact contract derived from the dump layout and
/// must not change.
pub const MULTILINE_ID_START: usize = 42;

/// Byte offset one past the end of the multiline group identifier
pub const MULTILINE_ID_END: usize = 45;

// =============================================================================
// Message Field Patterns
// =============================================================================

/// Pattern for a z/OS message identifier token (e.g. IEF450I, IST314I)
pub const MESSAGE_ID_PATTERN: &str = r"^[A-Z]{3,6}[0-9]{2,5}[A-Z]?$";

/// Pattern for a JES job identifier token (e.g. JOB00123, STC04711)
pub const JOB_ID_PATTERN: &str = r"^(JOB|STC|TSU)[0-9]{3,8}$";

/// Pattern for a hardcopy time-of-day token (e.g. 10:05:59.35)
pub const TIMESTAMP_PATTERN: &str = r"^[0-9]{2}:[0-9]{2}:[0-9]{2}(\.[0-9]+)?$";

// =============================================================================
// File and Directory Constants
// =============================================================================

/// File extensions considered console-log dumps during directory discovery
pub const DUMP_FILE_EXTENSIONS: &[&str] = &["log", "txt"];

/// Config file name within the platform config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Config subdirectory name
pub const CONFIG_DIR_NAME: &str = "zoslog-processor";

// =============================================================================
// Defaults
// =============================================================================

/// Default strict-mode setting: tolerate and log malformed input
pub const DEFAULT_HALT_ON_ERRORS: bool = false;

/// Default progress-bar setting (suppressed automatically off-terminal)
pub const DEFAULT_SHOW_PROGRESS: bool = true;

// =============================================================================
// Helper Functions
// =============================================================================

/// Check if a tag character marks a single-line message record
pub fn is_single_line_tag(tag: char) -> bool {
    SINGLE_LINE_TAGS.contains(&tag)
}

/// Check if a tag character marks a multiline body record
pub fn is_multiline_body_tag(tag: char) -> bool {
    MULTILINE_BODY_TAGS.contains(&tag)
}

/// Check if a file extension identifies a dump file candidate
pub fn is_dump_extension(extension: &str) -> bool {
    DUMP_FILE_EXTENSIONS
        .iter()
        .any(|e| extension.eq_ignore_ascii_case(e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_tags() {
        assert!(is_single_line_tag('N'));
        assert!(is_single_line_tag('X'));
        assert!(!is_single_line_tag('M'));
        assert!(!is_single_line_tag('n'));
    }

    #[test]
    fn test_multiline_body_tags() {
        assert!(is_multiline_body_tag('D'));
        assert!(is_multiline_body_tag('L'));
        assert!(!is_multiline_body_tag('E'));
    }

    #[test]
    fn test_dump_extensions() {
        assert!(is_dump_extension("log"));
        assert!(is_dump_extension("LOG"));
        assert!(is_dump_extension("txt"));
        assert!(!is_dump_extension("csv"));
    }

    #[test]
    fn test_id_column_width() {
        assert_eq!(MULTILINE_ID_END - MULTILINE_ID_START, 3);
    }
}
