//! Word counting.

/// Counts the words in `text`.
///
/// A word is a maximal run of ASCII letters, apostrophes and hyphens, so
/// numerals and punctuation separate words without being counted. A single
/// `'` or `-` at the very start of the text and a single `-` at the very end
/// are not part of any word.
#[must_use]
pub fn count_words(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut start = 0;
    let mut end = bytes.len();

    if matches!(bytes.first(), Some(b'\'' | b'-')) {
        start += 1;
    }
    if end > start && bytes[end - 1] == b'-' {
        end -= 1;
    }

    let mut count = 0;
    let mut in_word = false;
    for &byte in &bytes[start..end] {
        let is_word_byte = byte.is_ascii_alphabetic() || byte == b'\'' || byte == b'-';
        if is_word_byte && !in_word {
            count += 1;
        }
        in_word = is_word_byte;
    }
    count
}
