//! Markup stripping.

use regex::Regex;
use std::sync::OnceLock;

fn tag_regex() -> &'static Regex {
    static TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    TAG_REGEX.get_or_init(|| Regex::new(r"<[^>]*>").expect("valid tag regex"))
}

fn entity_regex() -> &'static Regex {
    static ENTITY_REGEX: OnceLock<Regex> = OnceLock::new();
    ENTITY_REGEX.get_or_init(|| {
        Regex::new(r"&(?:[a-zA-Z][a-zA-Z0-9]*|#[0-9]+|#[xX][0-9a-fA-F]+);")
            .expect("valid entity regex")
    })
}

fn non_letter_regex() -> &'static Regex {
    static NON_LETTER_REGEX: OnceLock<Regex> = OnceLock::new();
    NON_LETTER_REGEX.get_or_init(|| Regex::new(r"[^a-zA-Z ]").expect("valid letter regex"))
}

fn whitespace_regex() -> &'static Regex {
    static WHITESPACE_REGEX: OnceLock<Regex> = OnceLock::new();
    WHITESPACE_REGEX.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace regex"))
}

/// Reduce markup to ASCII letters separated by single spaces.
///
/// Tags are removed outright; character entities and every other
/// non-letter become a space, then runs of whitespace collapse.
pub fn strip_markup(markup: &str) -> String {
    let text = tag_regex().replace_all(markup, "");
    let text = entity_regex().replace_all(&text, " ");
    let text = non_letter_regex().replace_all(&text, " ");
    whitespace_regex().replace_all(&text, " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_tags() {
        assert_eq!(strip_markup("<p>Hello <b>world</b></p>"), "Hello world");
    }

    #[test]
    fn test_tags_join_adjacent_text() {
        assert_eq!(strip_markup("Micro<i>soft</i>"), "Microsoft");
    }

    #[test]
    fn test_non_letters_become_spaces() {
        assert_eq!(
            strip_markup("In 1975, Gates & Allen's \"Micro-Soft\""),
            "In Gates Allen s Micro Soft "
        );
    }

    #[test]
    fn test_ordinals_leave_fragments() {
        assert_eq!(strip_markup("the 20th and 3rd"), "the th and rd");
    }

    #[test]
    fn test_entities_removed() {
        assert_eq!(strip_markup("AT&amp;T&#160;Bell &#x2014;Labs"), "AT T Bell Labs");
    }

    #[test]
    fn test_whitespace_collapsed() {
        assert_eq!(strip_markup("a \n\t  b"), "a b");
    }

    #[test]
    fn test_non_ascii_letters_replaced() {
        assert_eq!(strip_markup("café naïve"), "caf na ve");
    }
}
