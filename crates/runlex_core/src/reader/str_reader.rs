//! Readers indexed by UTF-8 byte offset.

use super::{grapheme_len, CharacterReader};

/// Grapheme-cluster reader over `&str`, indexed by byte offset.
///
/// Each character is one extended grapheme cluster, so `"\r\n"` and
/// `"e\u{301}"` are single characters.
#[derive(Clone, Copy, Debug)]
pub struct StrReader<'a> {
    text: &'a str,
    pos: usize,
    /// Byte length of the character at `pos` (0 at the end).
    current_len: usize,
}

impl<'a> StrReader<'a> {
    /// Create a reader positioned at the first character of `text`.
    pub fn new(text: &'a str) -> Self {
        StrReader {
            text,
            pos: 0,
            current_len: grapheme_len(text),
        }
    }

    /// The text being read.
    pub fn text(&self) -> &'a str {
        self.text
    }
}

impl CharacterReader for StrReader<'_> {
    type Index = usize;

    #[inline]
    fn is_at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    #[inline]
    fn current_index(&self) -> usize {
        self.pos
    }

    #[inline]
    fn current_character(&self) -> &str {
        &self.text[self.pos..self.pos + self.current_len]
    }

    fn advance_index(&mut self) -> bool {
        assert!(
            self.current_len > 0,
            "StrReader failed to advance at byte {}",
            self.pos
        );
        self.pos += self.current_len;
        self.current_len = grapheme_len(&self.text[self.pos..]);
        !self.is_at_end()
    }
}

/// Scalar-value reader over `&str`, indexed by byte offset.
///
/// Each character is exactly one `char`; combining marks and the two halves
/// of `"\r\n"` are read separately.
#[derive(Clone, Copy, Debug)]
pub struct ScalarReader<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> ScalarReader<'a> {
    /// Create a reader positioned at the first scalar of `text`.
    pub fn new(text: &'a str) -> Self {
        ScalarReader { text, pos: 0 }
    }

    /// The text being read.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// The current scalar value, or `None` at the end.
    pub fn current_char(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }
}

impl CharacterReader for ScalarReader<'_> {
    type Index = usize;

    #[inline]
    fn is_at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    #[inline]
    fn current_index(&self) -> usize {
        self.pos
    }

    fn current_character(&self) -> &str {
        let width = self.current_char().map_or(0, char::len_utf8);
        &self.text[self.pos..self.pos + width]
    }

    fn advance_index(&mut self) -> bool {
        let width = self.current_char().map_or(0, char::len_utf8);
        assert!(width > 0, "ScalarReader failed to advance at byte {}", self.pos);
        self.pos += width;
        !self.is_at_end()
    }
}
