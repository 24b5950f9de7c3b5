//! Word tokenizer over character tokens.
//!
//! Grouping rules, decided by the kind of the first character:
//! - letters or underscore start a word, which continues through letters,
//!   underscores and digits
//! - digits form a number
//! - spaces, tabs and newlines form one whitespace token
//! - anything else starts a symbol, which runs until whitespace or a word
//!   or number character

use std::fmt;

use runlex_core::{
    CharacterKind, CharacterLexer, CharacterReader, CharacterStream, CharacterToken, LookAhead,
    LookAheadBuffer, LookAheadExt, StrReader, Token, TokenLookAhead, TokenStream,
};
use tracing::trace;

/// Kind of a token produced by [`WordStream`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WordKind {
    Word,
    Number,
    Symbol,
    Whitespace,
}

/// Token produced by [`WordStream`].
pub type WordToken<I> = Token<I, WordKind>;

const WORD_CHARACTERS: &[CharacterKind] = &[
    CharacterKind::LowercaseLetter,
    CharacterKind::UppercaseLetter,
    CharacterKind::Underscore,
    CharacterKind::Digit,
];

const WHITESPACE: &[CharacterKind] = &[
    CharacterKind::Newline,
    CharacterKind::Tab,
    CharacterKind::Space,
];

const SYMBOL_TERMINATORS: &[CharacterKind] = &[
    CharacterKind::Newline,
    CharacterKind::Tab,
    CharacterKind::Space,
    CharacterKind::LowercaseLetter,
    CharacterKind::UppercaseLetter,
    CharacterKind::Underscore,
    CharacterKind::Digit,
];

/// Groups character tokens from `L` into [`WordToken`]s.
///
/// `L` is any character lookahead: a [`CharacterLexer`] owned by the stream,
/// or a [`SharedLookAhead`](runlex_core::SharedLookAhead) whose other
/// handles observe the characters this stream consumes.
#[derive(Clone, Debug)]
pub struct WordStream<L> {
    chars: L,
}

impl<L> WordStream<L> {
    pub fn new(chars: L) -> Self {
        WordStream { chars }
    }

    /// Give back the character lookahead, including anything it buffered.
    pub fn into_inner(self) -> L {
        self.chars
    }
}

impl<R: CharacterReader> WordStream<CharacterLexer<R>> {
    /// Words over the characters of `reader`.
    pub fn from_reader(reader: R) -> Self {
        WordStream::new(CharacterStream::new(reader).lexer())
    }

    /// `true` when every character has been grouped.
    pub fn is_at_end(&self) -> bool {
        self.chars.is_at_end()
    }
}

impl<L, I> Iterator for WordStream<L>
where
    L: LookAhead<Item = CharacterToken<I>>,
    I: Copy + Ord + fmt::Debug,
{
    type Item = WordToken<I>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.chars.peek()?;
        let (kind, last) = match first.kind {
            CharacterKind::LowercaseLetter
            | CharacterKind::UppercaseLetter
            | CharacterKind::Underscore => {
                (WordKind::Word, self.chars.next_until_not_in(WORD_CHARACTERS))
            }
            CharacterKind::Digit => (
                WordKind::Number,
                self.chars.next_until(|t| t.kind != CharacterKind::Digit),
            ),
            kind if kind.is_whitespace() => {
                (WordKind::Whitespace, self.chars.next_until_not_in(WHITESPACE))
            }
            _ => (WordKind::Symbol, self.chars.next_until_in(SYMBOL_TERMINATORS)),
        };
        // A zero scan limit consumes nothing; take the first character alone.
        let last = last.or_else(|| self.chars.next());
        let token = Token::spanning(kind, &first, last.as_ref())?;
        trace!(kind = ?token.kind, start = ?token.start(), end = ?token.end(), "word");
        Some(token)
    }
}

/// Peekable word tokens over `text`, indexed by UTF-8 byte offset.
pub fn words(text: &str) -> LookAheadBuffer<WordStream<CharacterLexer<StrReader<'_>>>> {
    WordStream::from_reader(StrReader::new(text)).look_ahead()
}
