//! Search query sanitization.
//!
//! Reader search interpolates user text into an `ILIKE` OR-list filter.
//! [`sanitize_query`] neutralizes the characters that carry meaning in
//! that filter grammar before the query string is built. This is a
//! defense against filter-syntax injection, not general SQL injection:
//! the sanitized text is still bound as a pattern, never concatenated
//! into raw SQL.

/// Maximum sanitized query length, bounding query cost.
pub const MAX_QUERY_LEN: usize = 100;

/// Default number of search results per page.
pub const DEFAULT_SEARCH_LIMIT: i64 = 20;

/// Sanitize raw reader-supplied search text.
///
/// - `%`, `_`, and `\` (pattern wildcards and the escape character) are
///   escaped with a backslash.
/// - `(`, `)`, `,`, and `.` are stripped entirely: they are structural in
///   the OR-list grammar and cannot safely appear even escaped.
/// - Surrounding whitespace is trimmed and the result is truncated to
///   [`MAX_QUERY_LEN`] characters (after escaping).
///
/// Always returns a (possibly empty) string; never fails.
pub fn sanitize_query(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '%' | '_' | '\\' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '(' | ')' | ',' | '.' => {}
            _ => escaped.push(c),
        }
    }
    escaped.trim().chars().take(MAX_QUERY_LEN).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_wildcards_and_strips_structural_characters() {
        let out = sanitize_query("100% off (urgent), please");
        assert_eq!(out, "100\\% off urgent please");
        assert!(!out.contains('('));
        assert!(!out.contains(')'));
        assert!(!out.contains(','));
        // The only '%' left is escaped.
        assert!(out.contains("\\%"));
        assert!(out.len() <= MAX_QUERY_LEN);
    }

    #[test]
    fn escapes_underscore_and_backslash() {
        assert_eq!(sanitize_query("a_b"), "a\\_b");
        assert_eq!(sanitize_query(r"a\b"), r"a\\b");
    }

    #[test]
    fn strips_periods() {
        assert_eq!(sanitize_query("v1.2.3"), "v123");
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(sanitize_query("  visa  "), "visa");
    }

    #[test]
    fn truncates_long_input_to_exactly_max_len() {
        let long: String = "a".repeat(200);
        let out = sanitize_query(&long);
        assert_eq!(out.chars().count(), MAX_QUERY_LEN);
    }

    #[test]
    fn empty_and_whitespace_only_yield_empty() {
        assert_eq!(sanitize_query(""), "");
        assert_eq!(sanitize_query("   "), "");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(sanitize_query("visa"), "visa");
        assert_eq!(sanitize_query("भिसा नियम"), "भिसा नियम");
    }
}
