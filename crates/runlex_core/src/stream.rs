//! Lazy token producers over a [`CharacterReader`].
//!
//! Two emission strategies share one reader abstraction:
//! - [`CharacterStream`] emits one token per character.
//! - [`RunStream`] compacts maximal runs of lowercase letters, uppercase
//!   letters and decimal digits into single tokens; everything else is one
//!   token per character.
//!
//! Both are plain iterators. Wrap either in a [`LookAheadBuffer`] (see
//! [`TokenStream::lexer`]) to get peeking; [`CharacterLexer`] and
//! [`RunLexer`] name those wrapped forms.

use crate::{classify, CharacterKind, CharacterReader, LookAheadBuffer, Token, UnicodeSet};

/// Kind of a token produced by [`RunStream`].
///
/// Mirrors [`CharacterKind`] with the letter and digit kinds replaced by
/// their run forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RunKind {
    Tab,
    Space,
    Newline,

    LowercaseRun,
    UppercaseRun,
    NumberRun,
    OtherCharacter,

    SingleQuote,
    DoubleQuote,
    Backtick,

    OpenBrace,
    CloseBrace,
    OpenBracket,
    CloseBracket,
    OpenParen,
    CloseParen,
    LessThan,
    GreaterThan,

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

impl From<CharacterKind> for RunKind {
    fn from(kind: CharacterKind) -> Self {
        match kind {
            CharacterKind::Tab => RunKind::Tab,
            CharacterKind::Space => RunKind::Space,
            CharacterKind::Newline => RunKind::Newline,
            CharacterKind::LowercaseLetter => RunKind::LowercaseRun,
            CharacterKind::UppercaseLetter => RunKind::UppercaseRun,
            CharacterKind::Digit => RunKind::NumberRun,
            CharacterKind::OtherCharacter => RunKind::OtherCharacter,
            CharacterKind::SingleQuote => RunKind::SingleQuote,
            CharacterKind::DoubleQuote => RunKind::DoubleQuote,
            CharacterKind::Backtick => RunKind::Backtick,
            CharacterKind::OpenBrace => RunKind::OpenBrace,
            CharacterKind::CloseBrace => RunKind::CloseBrace,
            CharacterKind::OpenBracket => RunKind::OpenBracket,
            CharacterKind::CloseBracket => RunKind::CloseBracket,
            CharacterKind::OpenParen => RunKind::OpenParen,
            CharacterKind::CloseParen => RunKind::CloseParen,
            CharacterKind::LessThan => RunKind::LessThan,
            CharacterKind::GreaterThan => RunKind::GreaterThan,
            CharacterKind::Tilde => RunKind::Tilde,
            CharacterKind::Exclamation => RunKind::Exclamation,
            CharacterKind::Question => RunKind::Question,
            CharacterKind::At => RunKind::At,
            CharacterKind::Percent => RunKind::Percent,
            CharacterKind::Caret => RunKind::Caret,
            CharacterKind::Ampersand => RunKind::Ampersand,
            CharacterKind::Dollar => RunKind::Dollar,
            CharacterKind::Star => RunKind::Star,
            CharacterKind::Slash => RunKind::Slash,
            CharacterKind::Pound => RunKind::Pound,
            CharacterKind::Pipe => RunKind::Pipe,
            CharacterKind::Backslash => RunKind::Backslash,
            CharacterKind::Dash => RunKind::Dash,
            CharacterKind::Plus => RunKind::Plus,
            CharacterKind::Equals => RunKind::Equals,
            CharacterKind::Period => RunKind::Period,
            CharacterKind::Comma => RunKind::Comma,
            CharacterKind::Colon => RunKind::Colon,
            CharacterKind::Semicolon => RunKind::Semicolon,
            CharacterKind::Underscore => RunKind::Underscore,
        }
    }
}

/// Token produced by [`CharacterStream`].
pub type CharacterToken<I> = Token<I, CharacterKind>;

/// Token produced by [`RunStream`].
pub type RunToken<I> = Token<I, RunKind>;

/// Peekable per-character lexer.
pub type CharacterLexer<R> = LookAheadBuffer<CharacterStream<R>>;

/// Peekable run-compacting lexer.
pub type RunLexer<R> = LookAheadBuffer<RunStream<R>>;

/// A token iterator driven by a [`CharacterReader`].
pub trait TokenStream: Iterator + Sized {
    /// The reader this stream consumes.
    type Reader: CharacterReader;

    /// The underlying reader.
    fn reader(&self) -> &Self::Reader;

    /// Wrap this stream in a [`LookAheadBuffer`].
    fn lexer(self) -> LookAheadBuffer<Self> {
        LookAheadBuffer::new(self)
    }
}

impl<S: TokenStream> LookAheadBuffer<S> {
    /// `true` when no buffered tokens remain and the reader is exhausted.
    pub fn is_at_end(&self) -> bool {
        self.buffered() == 0 && self.source().reader().is_at_end()
    }
}

/// One token per character, kind from [`classify`].
#[derive(Clone, Debug)]
pub struct CharacterStream<R> {
    reader: R,
}

impl<R: CharacterReader> CharacterStream<R> {
    pub fn new(reader: R) -> Self {
        CharacterStream { reader }
    }
}

impl<R: CharacterReader> Iterator for CharacterStream<R> {
    type Item = CharacterToken<R::Index>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.reader.is_at_end() {
            return None;
        }
        let kind = classify(self.reader.current_character());
        Token::from_range(kind, self.reader.advance_and_get_range())
    }
}

impl<R: CharacterReader> TokenStream for CharacterStream<R> {
    type Reader = R;

    fn reader(&self) -> &R {
        &self.reader
    }
}

/// Run-compacting token stream.
///
/// A run continues only while characters stay in the same [`UnicodeSet`]
/// that started it, so `"AbcDef"` yields four tokens.
#[derive(Clone, Debug)]
pub struct RunStream<R> {
    reader: R,
}

impl<R: CharacterReader> RunStream<R> {
    pub fn new(reader: R) -> Self {
        RunStream { reader }
    }

    fn run(&mut self, set: UnicodeSet, kind: RunKind) -> Option<RunToken<R::Index>> {
        Token::from_range(kind, self.reader.advance_while_in(set))
    }

    fn single(&mut self, kind: RunKind) -> Option<RunToken<R::Index>> {
        Token::from_range(kind, self.reader.advance_and_get_range())
    }
}

impl<R: CharacterReader> Iterator for RunStream<R> {
    type Item = RunToken<R::Index>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.reader.is_at_end() {
            return None;
        }
        match classify(self.reader.current_character()) {
            CharacterKind::Digit => self.run(UnicodeSet::DecimalDigits, RunKind::NumberRun),
            CharacterKind::LowercaseLetter => {
                self.run(UnicodeSet::LowercaseLetters, RunKind::LowercaseRun)
            }
            CharacterKind::UppercaseLetter => {
                self.run(UnicodeSet::UppercaseLetters, RunKind::UppercaseRun)
            }
            kind => self.single(RunKind::from(kind)),
        }
    }
}

impl<R: CharacterReader> TokenStream for RunStream<R> {
    type Reader = R;

    fn reader(&self) -> &R {
        &self.reader
    }
}
