//! Markup stripping and whitespace handling.

use std::sync::LazyLock;

use readtime_types::Content;
use regex_lite::Regex;

/// A comment, or a `<` directly followed by a non-space character up to the
/// next `>` outside quotes.
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s:<!--.*?-->)|<[^\s>](?:"[^"]*"|'[^']*'|[^"'>])*>"#)
        .expect("TAG_RE should compile")
});

/// Whitespace trimmed from the ends of each sequence piece.
const PIECE_WHITESPACE: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B'];

/// Removes HTML/XML-like tags and comments, keeping the text between them.
///
/// Entities are left undecoded. A `<` followed by whitespace, or one that is
/// never closed, is kept as text.
#[must_use]
pub fn strip_tags(text: &str) -> String {
    TAG_RE.replace_all(text, "").into_owned()
}

/// Reduces content to the plain text whose words are counted.
///
/// A single text only has its tags stripped. The pieces of a sequence are
/// trimmed of ASCII whitespace and concatenated without a separator, then
/// stripped. A nested sequence is normalized on its own before it is trimmed.
#[must_use]
pub fn normalize(content: &Content) -> String {
    match content {
        Content::Text(text) => strip_tags(text),
        Content::Sequence(items) => {
            let joined = items.iter().fold(String::new(), |mut joined, item| {
                match item {
                    Content::Text(text) => joined.push_str(text.trim_matches(PIECE_WHITESPACE)),
                    Content::Sequence(_) => {
                        joined.push_str(normalize(item).trim_matches(PIECE_WHITESPACE));
                    }
                }
                joined
            });
            strip_tags(&joined)
        }
    }
}

/// Collapses every run of whitespace into a single space and trims the ends.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Reverses the order of space-separated words.
///
/// This is a word-order reversal, not bidirectional text rendering.
#[must_use]
pub fn reverse_words(text: &str) -> String {
    text.split(' ').rev().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_tags_keeps_text() {
        assert_eq!(
            strip_tags("<p>Hello <strong>World</strong>!</p>"),
            "Hello World!"
        );
        assert_eq!(
            strip_tags(r#"<a href="/x" class="link">Nutrition</a>"#),
            "Nutrition"
        );
    }

    #[test]
    fn test_strip_tags_comments_and_self_closing() {
        assert_eq!(strip_tags("one<br/>two<!-- note -->three"), "onetwothree");
    }

    #[test]
    fn test_strip_tags_leaves_comparisons() {
        assert_eq!(strip_tags("a < b and c > d"), "a < b and c > d");
        assert_eq!(strip_tags("unclosed <tag"), "unclosed <tag");
    }

    #[test]
    fn test_strip_tags_keeps_entities() {
        assert_eq!(strip_tags("<b>fish &amp; chips</b>"), "fish &amp; chips");
    }

    #[test]
    fn test_strip_tags_comment_containing_bracket() {
        assert_eq!(strip_tags("<!-- a > b -->text"), "text");
        assert_eq!(strip_tags("one<!--\n<p>hidden</p>\n-->two"), "onetwo");
    }

    #[test]
    fn test_strip_tags_quoted_attribute_containing_bracket() {
        assert_eq!(strip_tags(r#"<a title="x > y">link</a>"#), "link");
        assert_eq!(strip_tags("<img alt='a > b' src=\"x.png\">caption"), "caption");
    }

    #[test]
    fn test_normalize_text_is_not_trimmed() {
        let content = Content::from("  <p>hello world</p> \n");
        assert_eq!(normalize(&content), "  hello world \n");
    }

    #[test]
    fn test_normalize_sequence_trims_and_joins() {
        let content = Content::from(vec!["  <p>one</p> ", "\n<p>two</p>\n"]);
        assert_eq!(normalize(&content), "onetwo");

        let content = Content::from(vec![
            Content::from("a "),
            Content::from(vec![" b", " c "]),
            Content::from(" d"),
        ]);
        assert_eq!(normalize(&content), "abcd");
    }

    #[test]
    fn test_normalize_strips_nested_sequence_before_trimming() {
        let content = Content::from(vec![
            Content::from(vec!["<p> alpha </p>"]),
            Content::from("beta"),
        ]);
        assert_eq!(normalize(&content), "alphabeta");
    }

    #[test]
    fn test_normalize_keeps_non_breaking_space() {
        let content = Content::from(vec!["one\u{a0}", "\u{a0}two"]);
        assert_eq!(normalize(&content), "one\u{a0}\u{a0}two");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  3 minute \t\n read  "), "3 minute read");
        assert_eq!(collapse_whitespace(" \n "), "");
    }

    #[test]
    fn test_reverse_words() {
        assert_eq!(reverse_words("1 min 10 sec read"), "read sec 10 min 1");
        assert_eq!(reverse_words("single"), "single");
    }
}
