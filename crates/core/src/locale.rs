//! Bilingual field resolution.
//!
//! Every reader-facing entity stores each text field in two variants,
//! English (canonical, always present for valid rows) and Nepali
//! (optional). [`localized`] picks the variant for a requested language
//! and falls back to English when the Nepali value is absent or empty.

use serde::{Deserialize, Serialize};

/// Reader-facing language. English is the canonical language; Nepali
/// content is optional per field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Ne,
}

impl Lang {
    /// Parse a URL language segment or `?lang=` value.
    ///
    /// Anything other than `ne` (including the empty string) resolves to
    /// English, matching the site's default-language routing.
    pub fn from_path_segment(segment: &str) -> Self {
        match segment {
            "ne" => Lang::Ne,
            _ => Lang::En,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ne => "ne",
        }
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve a bilingual field pair to the value for `lang`.
///
/// `None` and the empty string both count as "absent" and trigger the
/// English fallback. When the English variant is also absent the result
/// is the empty string: this function is total and never panics, so
/// templates can call it unconditionally.
pub fn localized<'a>(lang: Lang, en: Option<&'a str>, ne: Option<&'a str>) -> &'a str {
    let present = |value: Option<&'a str>| value.filter(|s| !s.is_empty());
    match lang {
        Lang::Ne => present(ne).or_else(|| present(en)).unwrap_or(""),
        Lang::En => present(en).unwrap_or(""),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- localized -----------------------------------------------------------

    #[test]
    fn nepali_returns_nepali_when_present() {
        assert_eq!(localized(Lang::Ne, Some("Politics"), Some("राजनीति")), "राजनीति");
    }

    #[test]
    fn nepali_falls_back_to_english_when_absent() {
        assert_eq!(localized(Lang::Ne, Some("Politics"), None), "Politics");
    }

    #[test]
    fn nepali_falls_back_to_english_when_empty() {
        assert_eq!(localized(Lang::Ne, Some("Politics"), Some("")), "Politics");
    }

    #[test]
    fn english_always_returns_english() {
        assert_eq!(localized(Lang::En, Some("Politics"), Some("राजनीति")), "Politics");
    }

    #[test]
    fn both_absent_yields_empty_string() {
        assert_eq!(localized(Lang::Ne, None, None), "");
        assert_eq!(localized(Lang::En, None, None), "");
        assert_eq!(localized(Lang::En, Some(""), None), "");
    }

    // -- Lang ----------------------------------------------------------------

    #[test]
    fn lang_parses_path_segments() {
        assert_eq!(Lang::from_path_segment("ne"), Lang::Ne);
        assert_eq!(Lang::from_path_segment("en"), Lang::En);
        assert_eq!(Lang::from_path_segment(""), Lang::En);
        assert_eq!(Lang::from_path_segment("fr"), Lang::En);
    }

    #[test]
    fn lang_default_is_english() {
        assert_eq!(Lang::default(), Lang::En);
    }
}
