//! Unicode character sets used for classification and run scanning.
//!
//! A "character" throughout this crate is a `&str` slice holding one
//! user-perceived character (an extended grapheme cluster, or a single
//! scalar for [`ScalarReader`](crate::ScalarReader)). Set membership for a
//! multi-scalar character requires every scalar to be a member; the empty
//! string is never a member of any set.

use unicode_general_category::{get_general_category, GeneralCategory};

/// A Unicode general-category based character set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnicodeSet {
    /// General category `Nd`.
    DecimalDigits,
    /// General category `Ll`.
    LowercaseLetters,
    /// General categories `Lu` and `Lt`.
    UppercaseLetters,
}

impl UnicodeSet {
    /// Returns `true` if the scalar `c` is in this set.
    #[inline]
    pub fn contains_char(self, c: char) -> bool {
        let category = get_general_category(c);
        match self {
            UnicodeSet::DecimalDigits => category == GeneralCategory::DecimalNumber,
            UnicodeSet::LowercaseLetters => category == GeneralCategory::LowercaseLetter,
            UnicodeSet::UppercaseLetters => matches!(
                category,
                GeneralCategory::UppercaseLetter | GeneralCategory::TitlecaseLetter
            ),
        }
    }

    /// Returns `true` if every scalar of `character` is in this set.
    pub fn contains(self, character: &str) -> bool {
        !character.is_empty() && character.chars().all(|c| self.contains_char(c))
    }
}
