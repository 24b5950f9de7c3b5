//! Reader indexed by UTF-16 code-unit offset.

use super::{grapheme_len, CharacterReader, Utf16Offset};

/// Grapheme-cluster reader over `&str`, indexed by [`Utf16Offset`].
///
/// Tokens produced from this reader carry ranges that can be handed to a
/// UTF-16 host without conversion. The byte position is tracked alongside so
/// reading stays linear.
#[derive(Clone, Copy, Debug)]
pub struct Utf16Reader<'a> {
    text: &'a str,
    byte_pos: usize,
    unit_pos: usize,
    current_len: usize,
}

impl<'a> Utf16Reader<'a> {
    /// Create a reader positioned at the first character of `text`.
    pub fn new(text: &'a str) -> Self {
        Utf16Reader {
            text,
            byte_pos: 0,
            unit_pos: 0,
            current_len: grapheme_len(text),
        }
    }

    /// The text being read.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Byte offset of the current character.
    pub fn byte_offset(&self) -> usize {
        self.byte_pos
    }
}

impl CharacterReader for Utf16Reader<'_> {
    type Index = Utf16Offset;

    #[inline]
    fn is_at_end(&self) -> bool {
        self.byte_pos >= self.text.len()
    }

    #[inline]
    fn current_index(&self) -> Utf16Offset {
        Utf16Offset(self.unit_pos)
    }

    #[inline]
    fn current_character(&self) -> &str {
        &self.text[self.byte_pos..self.byte_pos + self.current_len]
    }

    fn advance_index(&mut self) -> bool {
        assert!(
            self.current_len > 0,
            "Utf16Reader failed to advance at code unit {}",
            self.unit_pos
        );
        let units: usize = self.current_character().chars().map(char::len_utf16).sum();
        self.unit_pos += units;
        self.byte_pos += self.current_len;
        self.current_len = grapheme_len(&self.text[self.byte_pos..]);
        !self.is_at_end()
    }
}
