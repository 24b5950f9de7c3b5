//! Lookahead over token producers.
//!
//! [`LookAhead`] is the peeking protocol: an [`Iterator`] that can also
//! report upcoming items without consuming them. Distances are 1-based, so
//! `peek_at(1)` is exactly what the next call to `next()` will return.
//!
//! [`LookAheadBuffer`] implements the protocol for any iterator by holding
//! already-pulled items in a FIFO. `next()` always drains that FIFO before
//! pulling from the source, so consumption order equals production order.
//!
//! # Scan limits
//!
//! The `*_until` operations examine at most `limit` items. The plain forms
//! use [`LookAhead::scan_limit`], which for a buffer comes from its
//! [`ScanLimits`] (guarded by default); the `*_within` forms take an
//! explicit limit. Reaching the limit behaves like reaching end of input.

use std::collections::VecDeque;
use std::fmt;

use tracing::trace;

use crate::{LexToken, ScanLimits, SharedLookAhead, DEFAULT_SCAN_LIMIT};

/// An iterator that supports non-destructive lookahead.
pub trait LookAhead: Iterator {
    /// Look `distance` items ahead without consuming anything.
    ///
    /// `peek_at(1)` is the item the next `next()` returns. `peek_at(0)`
    /// returns the first already-buffered item without pulling new ones.
    /// Repeated calls with no intervening `next()` return equal items.
    fn peek_at(&mut self, distance: usize) -> Option<Self::Item>;

    /// Default limit for the `*_until` operations.
    fn scan_limit(&self) -> usize {
        DEFAULT_SCAN_LIMIT
    }

    /// The item the next `next()` returns.
    fn peek(&mut self) -> Option<Self::Item> {
        self.peek_at(1)
    }

    /// Peek at increasing distances until `predicate` holds.
    ///
    /// Returns `true` if a matching item was found. Nothing is consumed.
    fn peek_until(&mut self, predicate: impl FnMut(&Self::Item) -> bool) -> bool {
        let limit = self.scan_limit();
        self.peek_until_within(predicate, limit)
    }

    /// [`peek_until`](Self::peek_until) examining at most `limit` items.
    fn peek_until_within(
        &mut self,
        mut predicate: impl FnMut(&Self::Item) -> bool,
        limit: usize,
    ) -> bool {
        for distance in 1..=limit {
            match self.peek_at(distance) {
                None => return false,
                Some(item) if predicate(&item) => return true,
                Some(_) => {}
            }
        }
        false
    }

    /// Consume and return the next item only if `predicate` holds for it.
    fn next_if(&mut self, predicate: impl FnOnce(&Self::Item) -> bool) -> Option<Self::Item> {
        let item = self.peek()?;
        if predicate(&item) {
            self.next()
        } else {
            None
        }
    }

    /// Consume items until `predicate` holds for the next one.
    ///
    /// The matching item is left unconsumed. Returns the last item consumed,
    /// or `None` if nothing was consumed (including when the very next item
    /// already matches). If nothing matches, everything up to the scan limit
    /// or end of input is consumed.
    fn next_until(&mut self, predicate: impl FnMut(&Self::Item) -> bool) -> Option<Self::Item> {
        let limit = self.scan_limit();
        self.next_until_within(predicate, limit)
    }

    /// [`next_until`](Self::next_until) consuming at most `limit` items.
    fn next_until_within(
        &mut self,
        mut predicate: impl FnMut(&Self::Item) -> bool,
        limit: usize,
    ) -> Option<Self::Item> {
        let mut last = None;
        for _ in 0..limit {
            match self.peek() {
                None => break,
                Some(item) if predicate(&item) => break,
                Some(_) => last = self.next(),
            }
        }
        last
    }

    /// [`next_if`](Self::next_if), discarding the item.
    ///
    /// Returns `true` if an item was consumed.
    fn skip_if(&mut self, predicate: impl FnOnce(&Self::Item) -> bool) -> bool {
        self.next_if(predicate).is_some()
    }

    /// [`next_until`](Self::next_until), discarding the items.
    ///
    /// Returns `true` if at least one item was consumed.
    fn skip_until(&mut self, predicate: impl FnMut(&Self::Item) -> bool) -> bool {
        self.next_until(predicate).is_some()
    }

    /// [`skip_until`](Self::skip_until) consuming at most `limit` items.
    fn skip_until_within(
        &mut self,
        predicate: impl FnMut(&Self::Item) -> bool,
        limit: usize,
    ) -> bool {
        self.next_until_within(predicate, limit).is_some()
    }
}

/// Kind-set adapters for lookahead over [`LexToken`] items.
pub trait TokenLookAhead: LookAhead
where
    Self::Item: LexToken,
{
    /// Consume tokens until the next one has a kind in `kinds`.
    fn next_until_in(&mut self, kinds: &[<Self::Item as LexToken>::Kind]) -> Option<Self::Item> {
        self.next_until(|token| kinds.contains(&token.kind()))
    }

    /// Consume tokens until the next one has a kind not in `kinds`.
    fn next_until_not_in(
        &mut self,
        kinds: &[<Self::Item as LexToken>::Kind],
    ) -> Option<Self::Item> {
        self.next_until(|token| !kinds.contains(&token.kind()))
    }

    /// [`next_until_in`](Self::next_until_in), discarding the tokens.
    fn skip_until_in(&mut self, kinds: &[<Self::Item as LexToken>::Kind]) -> bool {
        self.next_until_in(kinds).is_some()
    }

    /// [`next_until_not_in`](Self::next_until_not_in), discarding the tokens.
    fn skip_until_not_in(&mut self, kinds: &[<Self::Item as LexToken>::Kind]) -> bool {
        self.next_until_not_in(kinds).is_some()
    }

    /// Consume the next token if it has kind `kind`.
    fn next_if_kind(&mut self, kind: <Self::Item as LexToken>::Kind) -> Option<Self::Item> {
        self.next_if(|token| token.kind() == kind)
    }
}

impl<L> TokenLookAhead for L
where
    L: LookAhead,
    L::Item: LexToken,
{
}

/// Peekable decorator over any iterator.
///
/// Cloning a buffer (when the source is `Clone`) yields an independent copy
/// that advances separately. Use [`shared`](Self::shared) to get aliasing
/// handles instead.
pub struct LookAheadBuffer<I: Iterator> {
    source: I,
    /// Pulled from `source` but not yet consumed, in production order.
    buffer: VecDeque<I::Item>,
    limits: ScanLimits,
}

impl<I: Iterator> LookAheadBuffer<I> {
    /// Wrap `source` with the default (guarded) scan limits.
    pub fn new(source: I) -> Self {
        LookAheadBuffer {
            source,
            buffer: VecDeque::new(),
            limits: ScanLimits::default(),
        }
    }

    /// Replace the scan limits used by the `*_until` operations.
    #[must_use]
    pub fn with_limits(mut self, limits: ScanLimits) -> Self {
        self.limits = limits;
        self
    }

    /// The scan limits in effect.
    pub fn limits(&self) -> ScanLimits {
        self.limits
    }

    /// The wrapped source.
    ///
    /// The source may be ahead of what has been consumed: buffered items have
    /// already been pulled from it.
    pub fn source(&self) -> &I {
        &self.source
    }

    /// Number of pulled but unconsumed items.
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    /// Split into the source and the pending items, front first.
    pub fn into_parts(self) -> (I, VecDeque<I::Item>) {
        (self.source, self.buffer)
    }

    /// Convert into a shared handle.
    pub fn shared(self) -> SharedLookAhead<I> {
        SharedLookAhead::new(self)
    }
}

impl<I: Iterator> Iterator for LookAheadBuffer<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        self.buffer.pop_front().or_else(|| self.source.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (low, high) = self.source.size_hint();
        let pending = self.buffer.len();
        (
            low.saturating_add(pending),
            high.and_then(|h| h.checked_add(pending)),
        )
    }
}

impl<I> LookAhead for LookAheadBuffer<I>
where
    I: Iterator,
    I::Item: Clone,
{
    fn peek_at(&mut self, distance: usize) -> Option<I::Item> {
        if distance == 0 {
            return self.buffer.front().cloned();
        }
        let missing = distance.saturating_sub(self.buffer.len());
        let mut pulled = 0;
        while pulled < missing {
            let Some(item) = self.source.next() else {
                break;
            };
            self.buffer.push_back(item);
            pulled += 1;
        }
        if pulled > 0 {
            trace!(distance, pulled, buffered = self.buffer.len(), "lookahead refill");
        }
        self.buffer.get(distance - 1).cloned()
    }

    #[inline]
    fn scan_limit(&self) -> usize {
        self.limits.until
    }
}

impl<I> Clone for LookAheadBuffer<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        LookAheadBuffer {
            source: self.source.clone(),
            buffer: self.buffer.clone(),
            limits: self.limits,
        }
    }
}

impl<I> fmt::Debug for LookAheadBuffer<I>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LookAheadBuffer")
            .field("source", &self.source)
            .field("buffer", &self.buffer)
            .field("limits", &self.limits)
            .finish()
    }
}

/// Wrap any iterator in a [`LookAheadBuffer`].
pub trait LookAheadExt: Iterator + Sized {
    /// Wrap `self` in a [`LookAheadBuffer`].
    fn look_ahead(self) -> LookAheadBuffer<Self> {
        LookAheadBuffer::new(self)
    }
}

impl<I: Iterator> LookAheadExt for I {}

#[cfg(test)]
mod tests;
