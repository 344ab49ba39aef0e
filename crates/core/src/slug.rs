//! URL slug generation for new posts.

/// Maximum slug length, matching the column bound.
pub const MAX_SLUG_LEN: usize = 200;

/// Derive a URL slug from a post title.
///
/// Lowercases, truncates to [`MAX_SLUG_LEN`], replaces whitespace runs
/// with a single `-`, drops everything outside `[a-z0-9_-]`, and trims
/// leading/trailing dashes. Nepali titles therefore slugify to the empty
/// string; editors supply the Nepali slug explicitly.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let truncated: String = lowered.chars().take(MAX_SLUG_LEN).collect();

    let mut out = String::with_capacity(truncated.len());
    for c in truncated.chars() {
        if c.is_whitespace() {
            out.push('-');
        } else if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            out.push(c);
        }
    }

    let mut collapsed = String::with_capacity(out.len());
    let mut prev_dash = false;
    for c in out.chars() {
        if c == '-' {
            if !prev_dash {
                collapsed.push('-');
            }
            prev_dash = true;
        } else {
            collapsed.push(c);
            prev_dash = false;
        }
    }
    collapsed.trim_matches('-').to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_title() {
        assert_eq!(slugify("New Visa Rules Announced"), "new-visa-rules-announced");
    }

    #[test]
    fn strips_punctuation_and_collapses_dashes() {
        assert_eq!(slugify("Germany's \"Opportunity Card\"!"), "germanys-opportunity-card");
        assert_eq!(slugify("a  --  b"), "a-b");
    }

    #[test]
    fn trims_edge_dashes() {
        assert_eq!(slugify("  hello world  "), "hello-world");
        assert_eq!(slugify("-- hi --"), "hi");
    }

    #[test]
    fn preserves_digits_and_underscores() {
        assert_eq!(slugify("Top 5 Schengen_Countries 2026"), "top-5-schengen_countries-2026");
    }

    #[test]
    fn non_ascii_text_yields_empty() {
        assert_eq!(slugify("राजनीति"), "");
    }

    #[test]
    fn respects_length_bound() {
        let long = "word ".repeat(100);
        assert!(slugify(&long).len() <= MAX_SLUG_LEN);
    }
}
