//! Shared handle over one lookahead buffer.
//!
//! [`LookAheadBuffer`] has value semantics: a clone advances on its own.
//! Grammars that hand the same token cursor to several sub-parsers need the
//! opposite, so [`SharedLookAhead`] wraps one buffer in `Rc<RefCell<_>>`.
//! Every clone of a handle aliases the same buffer; consuming through one
//! handle is visible through all of them.
//!
//! # Thread Safety
//!
//! The handle is `!Send` and `!Sync`. Access is single-threaded by
//! construction.
//!
//! # Re-entrancy
//!
//! Each operation borrows the buffer only for the duration of one `peek_at`
//! or `next`, so a predicate passed to `next_until` may itself inspect the
//! handle through a clone.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::{LookAhead, LookAheadBuffer, TokenStream};

/// Aliasing handle over a single [`LookAheadBuffer`].
#[repr(transparent)]
pub struct SharedLookAhead<I: Iterator>(Rc<RefCell<LookAheadBuffer<I>>>);

impl<I: Iterator> SharedLookAhead<I> {
    /// Take ownership of `buffer` behind a new handle.
    #[inline]
    pub fn new(buffer: LookAheadBuffer<I>) -> Self {
        SharedLookAhead(Rc::new(RefCell::new(buffer)))
    }

    /// Number of pulled but unconsumed items.
    pub fn buffered(&self) -> usize {
        self.0.borrow().buffered()
    }

    /// Number of live handles aliasing this buffer.
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.0)
    }

    /// Returns `true` if both handles alias the same buffer.
    pub fn same_buffer(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Run `f` with read access to the underlying buffer.
    ///
    /// # Panics
    ///
    /// The buffer stays borrowed while `f` runs, so advancing or peeking
    /// through any handle to the same buffer from inside `f` panics.
    pub fn with_buffer<T>(&self, f: impl FnOnce(&LookAheadBuffer<I>) -> T) -> T {
        f(&self.0.borrow())
    }
}

impl<S: TokenStream> SharedLookAhead<S> {
    /// `true` when no buffered tokens remain and the reader is exhausted.
    pub fn is_at_end(&self) -> bool {
        self.0.borrow().is_at_end()
    }
}

impl<I: Iterator> Clone for SharedLookAhead<I> {
    #[inline]
    fn clone(&self) -> Self {
        SharedLookAhead(Rc::clone(&self.0))
    }
}

impl<I> fmt::Debug for SharedLookAhead<I>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedLookAhead").field(&self.0).finish()
    }
}

impl<I: Iterator> Iterator for SharedLookAhead<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        self.0.borrow_mut().next()
    }
}

impl<I> LookAhead for SharedLookAhead<I>
where
    I: Iterator,
    I::Item: Clone,
{
    #[inline]
    fn peek_at(&mut self, distance: usize) -> Option<I::Item> {
        self.0.borrow_mut().peek_at(distance)
    }

    fn scan_limit(&self) -> usize {
        self.0.borrow().scan_limit()
    }
}

impl<I: Iterator> From<LookAheadBuffer<I>> for SharedLookAhead<I> {
    fn from(buffer: LookAheadBuffer<I>) -> Self {
        SharedLookAhead::new(buffer)
    }
}
