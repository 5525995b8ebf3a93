// src/core/text.rs
//
// Collapsed display of long raw text. Two independent thresholds:
// LONG_TEXT_CHARS decides whether a row gets a Show more toggle,
// TRUNCATE_CHARS decides where the collapsed text is cut.

use std::borrow::Cow;

use crate::config::consts::{ELLIPSIS, LONG_TEXT_CHARS, TRUNCATE_CHARS, TRUNCATE_LINES};

#[inline]
fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

/// More than 50 chars or more than 4 lines.
pub fn is_long(text: &str) -> bool {
    text.chars().count() > LONG_TEXT_CHARS || line_count(text) > TRUNCATE_LINES
}

/// First 4 lines, else first 300 chars, each with "..." appended.
/// Short text comes back borrowed and unchanged.
pub fn truncate(text: &str) -> Cow<'_, str> {
    if line_count(text) > TRUNCATE_LINES {
        let head: Vec<&str> = text.split('\n').take(TRUNCATE_LINES).collect();
        let mut out = head.join("\n");
        out.push_str(ELLIPSIS);
        return Cow::Owned(out);
    }
    if let Some((cut, _)) = text.char_indices().nth(TRUNCATE_CHARS) {
        let mut out = s!(&text[..cut]);
        out.push_str(ELLIPSIS);
        return Cow::Owned(out);
    }
    Cow::Borrowed(text)
}

/// What the Raw Response cell shows for a record.
pub fn display_text(raw: &str, expanded: bool) -> Cow<'_, str> {
    if raw.is_empty() {
        Cow::Borrowed("N/A")
    } else if expanded || !is_long(raw) {
        Cow::Borrowed(raw)
    } else {
        truncate(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_lines_keep_first_four() {
        assert_eq!(truncate("a\nb\nc\nd\ne"), "a\nb\nc\nd...");
    }

    #[test]
    fn four_lines_are_untouched() {
        assert!(matches!(truncate("a\nb\nc\nd"), Cow::Borrowed(_)));
    }

    #[test]
    fn long_line_cut_at_300_chars() {
        let text = "x".repeat(301);
        let out = truncate(&text);
        assert_eq!(out.len(), 303);
        assert!(out.ends_with("x..."));
    }

    #[test]
    fn cut_respects_char_boundaries() {
        let text = "é".repeat(310);
        let out = truncate(&text);
        assert_eq!(out.chars().count(), 303);
    }

    #[test]
    fn thresholds_are_independent() {
        // Long enough for a toggle, too short to be cut
        let text = "y".repeat(120);
        assert!(is_long(&text));
        assert_eq!(truncate(&text), text.as_str());
        assert!(!is_long(&"y".repeat(50)));
    }

    #[test]
    fn empty_raw_shows_placeholder() {
        assert_eq!(display_text("", false), "N/A");
        assert_eq!(display_text("", true), "N/A");
    }

    #[test]
    fn expanded_shows_everything() {
        let text = "z".repeat(400);
        assert_eq!(display_text(&text, true), text.as_str());
        assert_eq!(display_text(&text, false).chars().count(), 303);
    }
}
