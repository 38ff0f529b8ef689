//! Per-line cleanup applied before classification
//!
//! Syslog dumps prefix lines with a leading space while operlog dumps do
//! not, and dumps written by older export programs can carry stray non-ASCII
//! bytes. Normalization makes both formats look the same to the classifier.

/// Clean one raw physical line for classification.
///
/// Drops every non-ASCII character and strips leading whitespace. Never
/// fails; an empty result means there is nothing to classify. Normalizing an
/// already-normalized line is a no-op.
pub fn normalize(raw: &str) -> String {
    let ascii: String = raw.chars().filter(char::is_ascii).collect();
    ascii.trim_start().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_leading_whitespace() {
        assert_eq!(normalize("  N SYS1 message"), "N SYS1 message");
        assert_eq!(normalize("\tN tabbed"), "N tabbed");
    }

    #[test]
    fn test_drops_non_ascii() {
        assert_eq!(normalize("N caf\u{e9} r\u{e9}cord"), "N caf rcord");
        assert_eq!(normalize("\u{feff}N bom"), "N bom");
    }

    #[test]
    fn test_trailing_whitespace_kept() {
        // Only the leading edge is trimmed; the continuation merger owns
        // the trailing edge.
        assert_eq!(normalize(" N padded  "), "N padded  ");
    }

    #[test]
    fn test_idempotent_on_normalized_input() {
        let line = "N SYS1 10:05:59.35 IEF450I ALPHA";
        assert_eq!(normalize(line), line);
        assert_eq!(normalize(&normalize(line)), line);
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("\u{2764}"), "");
    }
}
