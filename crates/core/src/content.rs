//! Article content helpers.

use std::sync::OnceLock;

use regex::Regex;

/// Assumed reading speed for the "min read" badge.
pub const WORDS_PER_MINUTE: usize = 200;

fn tag_pattern() -> &'static Regex {
    static TAG_RE: OnceLock<Regex> = OnceLock::new();
    TAG_RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("static regex must compile"))
}

/// Estimate reading time in minutes for rich-HTML article content.
///
/// Tags are stripped, words counted on whitespace, and the result is
/// rounded up with a floor of one minute so even a stub article shows
/// "1 min read".
pub fn reading_minutes(html: &str) -> u32 {
    let text = tag_pattern().replace_all(html, " ");
    let words = text.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1) as u32
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_content_is_one_minute() {
        assert_eq!(reading_minutes(""), 1);
        assert_eq!(reading_minutes("<p></p>"), 1);
    }

    #[test]
    fn short_content_is_one_minute() {
        assert_eq!(reading_minutes("<p>Hello world</p>"), 1);
    }

    #[test]
    fn tags_do_not_count_as_words() {
        let html = "<div class=\"prose\"><p>one two three</p></div>";
        assert_eq!(reading_minutes(html), 1);
    }

    #[test]
    fn long_content_rounds_up() {
        // 201 words at 200 wpm is 2 minutes.
        let body = "word ".repeat(201);
        let html = format!("<article>{body}</article>");
        assert_eq!(reading_minutes(&html), 2);
    }
}
