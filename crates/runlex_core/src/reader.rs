//! Forward-only character readers.
//!
//! A [`CharacterReader`] walks a borrowed `&str` one character at a time and
//! reports positions in its own index space. The reader never backtracks;
//! lookahead is the job of [`LookAheadBuffer`](crate::LookAheadBuffer).
//!
//! # Progress
//!
//! Every advance must strictly move the cursor forward. A reader that fails
//! to do so would spin upstream scanning loops forever, so it is treated as a
//! contract violation and panics rather than returning a value.

use std::fmt;
use std::ops::Range;

use crate::UnicodeSet;

mod str_reader;
mod utf16_reader;

pub use str_reader::{ScalarReader, StrReader};
pub use utf16_reader::Utf16Reader;

/// Offset in UTF-16 code units from the start of a text.
///
/// This is the index space most host text-editing platforms use for their
/// integer-offset ranges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Utf16Offset(pub usize);

impl Utf16Offset {
    /// The offset as a raw code-unit count.
    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for Utf16Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}u16", self.0)
    }
}

/// Sequential cursor over text.
///
/// `current_index` and `current_character` are meaningful only while
/// [`is_at_end`](Self::is_at_end) is `false`; at the end, the current
/// character is the empty string.
pub trait CharacterReader {
    /// Position type reported by this reader.
    type Index: Copy + Ord + fmt::Debug;

    /// `true` iff the cursor is at or past the end of the text.
    fn is_at_end(&self) -> bool;

    /// Position of the current character.
    fn current_index(&self) -> Self::Index;

    /// The current character, or `""` at the end.
    fn current_character(&self) -> &str;

    /// Move past the current character.
    ///
    /// Returns whether the new position is still within the text.
    ///
    /// # Panics
    ///
    /// Panics if the cursor does not move (including when already at the end).
    fn advance_index(&mut self) -> bool;

    /// Consume exactly one character and return its range.
    ///
    /// Returns `None` if the reader is already at the end.
    ///
    /// # Panics
    ///
    /// Panics if [`advance_index`](Self::advance_index) leaves the cursor
    /// where it was.
    fn advance_and_get_range(&mut self) -> Option<Range<Self::Index>> {
        if self.is_at_end() {
            return None;
        }
        let start = self.current_index();
        self.advance_index();
        let end = self.current_index();
        assert!(end > start, "reader failed to advance past {start:?}");
        Some(start..end)
    }

    /// Consume a run of characters.
    ///
    /// The current character is always consumed, whether or not it satisfies
    /// `predicate`; the predicate only decides whether each following
    /// character extends the run. Returns `None` if already at the end.
    ///
    /// # Panics
    ///
    /// Panics if any step leaves the cursor where it was.
    fn advance_while(&mut self, mut predicate: impl FnMut(&str) -> bool) -> Option<Range<Self::Index>> {
        if self.is_at_end() {
            return None;
        }
        let start = self.current_index();
        loop {
            let before = self.current_index();
            let in_bounds = self.advance_index();
            let after = self.current_index();
            assert!(after > before, "reader failed to advance past {before:?}");
            if !in_bounds || !predicate(self.current_character()) {
                break;
            }
        }
        Some(start..self.current_index())
    }

    /// [`advance_while`](Self::advance_while) over membership in `set`.
    fn advance_while_in(&mut self, set: UnicodeSet) -> Option<Range<Self::Index>> {
        self.advance_while(|c| set.contains(c))
    }
}

/// Byte length of the grapheme cluster at the front of `rest`.
fn grapheme_len(rest: &str) -> usize {
    use unicode_segmentation::UnicodeSegmentation;

    rest.graphemes(true).next().map_or(0, str::len)
}
