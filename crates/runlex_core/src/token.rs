//! Tokens: a kind paired with a half-open range.

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::ops::Range;

/// Common view over token types, used by the kind-set lookahead adapters.
pub trait LexToken {
    /// Token kind.
    type Kind: Copy + Eq + Hash + fmt::Debug;
    /// Position type of the token's range.
    type Index: Copy + Ord + fmt::Debug;

    /// The token's kind.
    fn kind(&self) -> Self::Kind;

    /// The token's half-open range.
    fn range(&self) -> Range<Self::Index>;

    /// Start of the range.
    fn start(&self) -> Self::Index {
        self.range().start
    }

    /// End of the range (exclusive).
    fn end(&self) -> Self::Index {
        self.range().end
    }
}

/// A classified, non-empty span of text.
///
/// Equality compares kind and range. Streams produce tokens in
/// non-decreasing start order; use [`Token::cmp_by_start`] to sort.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token<I, K> {
    pub range: Range<I>,
    pub kind: K,
}

impl<I: Copy + Ord + fmt::Debug, K> Token<I, K> {
    /// Create a token.
    ///
    /// Callers must pass a non-empty range.
    #[inline]
    pub fn new(kind: K, range: Range<I>) -> Self {
        debug_assert!(
            range.start < range.end,
            "empty token range {:?}..{:?}",
            range.start,
            range.end
        );
        Token { range, kind }
    }

    /// Create a token from an optional range, as returned by reader advances.
    #[inline]
    pub fn from_range(kind: K, range: Option<Range<I>>) -> Option<Self> {
        range.map(|range| Token::new(kind, range))
    }

    /// Create a token covering `first` through `last`.
    ///
    /// Returns `None` when `last` is `None`, which is what the `*_until`
    /// lookahead operations return when nothing was consumed.
    pub fn spanning<A, B>(kind: K, first: &Token<I, A>, last: Option<&Token<I, B>>) -> Option<Self> {
        let last = last?;
        Some(Token::new(kind, first.range.start..last.range.end))
    }

    /// Start of the range.
    #[inline]
    pub fn start(&self) -> I {
        self.range.start
    }

    /// End of the range (exclusive).
    #[inline]
    pub fn end(&self) -> I {
        self.range.end
    }

    /// Order two tokens by the start of their ranges.
    pub fn cmp_by_start(&self, other: &Self) -> Ordering {
        self.range.start.cmp(&other.range.start)
    }
}

impl<K> Token<usize, K> {
    /// The text this byte-indexed token covers, or `None` if the range does
    /// not fit `text`.
    pub fn slice<'t>(&self, text: &'t str) -> Option<&'t str> {
        text.get(self.range.clone())
    }
}

impl<I, K> LexToken for Token<I, K>
where
    I: Copy + Ord + fmt::Debug,
    K: Copy + Eq + Hash + fmt::Debug,
{
    type Kind = K;
    type Index = I;

    #[inline]
    fn kind(&self) -> K {
        self.kind
    }

    #[inline]
    fn range(&self) -> Range<I> {
        self.range.clone()
    }
}

impl<I: fmt::Debug, K: fmt::Debug> fmt::Debug for Token<I, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?}..{:?}", self.kind, self.range.start, self.range.end)
    }
}

impl<I: fmt::Debug, K: fmt::Debug> fmt::Display for Token<I, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{:?} {:?}..{:?}>", self.kind, self.range.start, self.range.end)
    }
}

#[cfg(test)]
mod tests;
