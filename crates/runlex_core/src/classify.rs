//! Single-character classification.
//!
//! Classification runs in two ordered stages:
//! 1. Exact match against the ASCII literal table (whitespace, quotes,
//!    brackets, punctuation). First match wins.
//! 2. Unicode set fallbacks: decimal digit, then lowercase letter, then
//!    uppercase letter, then [`CharacterKind::OtherCharacter`].

use crate::UnicodeSet;

/// Kind of a single character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharacterKind {
    // === Whitespace ===
    Tab,
    Space,
    /// `\n`, `\r`, or a `\r\n` cluster.
    Newline,

    // === Unicode sets ===
    LowercaseLetter,
    UppercaseLetter,
    Digit,
    OtherCharacter,

    // === Quotes ===
    SingleQuote,
    DoubleQuote,
    Backtick,

    // === Delimiters ===
    OpenBrace,
    CloseBrace,
    OpenBracket,
    CloseBracket,
    OpenParen,
    CloseParen,
    LessThan,
    GreaterThan,

    // === Punctuation ===
    Tilde,
    Exclamation,
    Question,
    At,
    Percent,
    Caret,
    Ampersand,
    Dollar,
    Star,
    Slash,
    Pound,
    Pipe,
    Backslash,
    Dash,
    Plus,
    Equals,
    Period,
    Comma,
    Colon,
    Semicolon,
    Underscore,
}

impl CharacterKind {
    /// Returns `true` for tab, space and newline.
    #[inline]
    pub fn is_whitespace(self) -> bool {
        matches!(
            self,
            CharacterKind::Tab | CharacterKind::Space | CharacterKind::Newline
        )
    }

    /// Returns `true` for either letter case.
    #[inline]
    pub fn is_letter(self) -> bool {
        matches!(
            self,
            CharacterKind::LowercaseLetter | CharacterKind::UppercaseLetter
        )
    }

    /// The literal-table kind for `c`, if it has one.
    fn from_literal(c: char) -> Option<Self> {
        let kind = match c {
            '\t' => CharacterKind::Tab,
            '\n' | '\r' => CharacterKind::Newline,
            ' ' => CharacterKind::Space,
            '\'' => CharacterKind::SingleQuote,
            '"' => CharacterKind::DoubleQuote,
            '`' => CharacterKind::Backtick,
            '{' => CharacterKind::OpenBrace,
            '}' => CharacterKind::CloseBrace,
            '[' => CharacterKind::OpenBracket,
            ']' => CharacterKind::CloseBracket,
            '(' => CharacterKind::OpenParen,
            ')' => CharacterKind::CloseParen,
            '<' => CharacterKind::LessThan,
            '>' => CharacterKind::GreaterThan,
            '~' => CharacterKind::Tilde,
            '!' => CharacterKind::Exclamation,
            '?' => CharacterKind::Question,
            '@' => CharacterKind::At,
            '%' => CharacterKind::Percent,
            '^' => CharacterKind::Caret,
            '&' => CharacterKind::Ampersand,
            '$' => CharacterKind::Dollar,
            '*' => CharacterKind::Star,
            '/' => CharacterKind::Slash,
            '#' => CharacterKind::Pound,
            '|' => CharacterKind::Pipe,
            '\\' => CharacterKind::Backslash,
            '-' => CharacterKind::Dash,
            '+' => CharacterKind::Plus,
            '=' => CharacterKind::Equals,
            '.' => CharacterKind::Period,
            ',' => CharacterKind::Comma,
            '_' => CharacterKind::Underscore,
            ';' => CharacterKind::Semicolon,
            ':' => CharacterKind::Colon,
            _ => return None,
        };
        Some(kind)
    }
}

/// Classify one character (a grapheme cluster or a single scalar).
///
/// Total: every input, including `""`, maps to some kind.
pub fn classify(character: &str) -> CharacterKind {
    let mut chars = character.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some('\r'), Some('\n'), None) => return CharacterKind::Newline,
        (Some(c), None, _) => {
            if let Some(kind) = CharacterKind::from_literal(c) {
                return kind;
            }
        }
        _ => {}
    }

    if UnicodeSet::DecimalDigits.contains(character) {
        CharacterKind::Digit
    } else if UnicodeSet::LowercaseLetters.contains(character) {
        CharacterKind::LowercaseLetter
    } else if UnicodeSet::UppercaseLetters.contains(character) {
        CharacterKind::UppercaseLetter
    } else {
        CharacterKind::OtherCharacter
    }
}

/// Classify a single scalar value.
pub fn classify_char(c: char) -> CharacterKind {
    let mut buf = [0u8; 4];
    classify(c.encode_utf8(&mut buf))
}
