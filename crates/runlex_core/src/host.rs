//! Conversion between native ranges and host integer-offset ranges.
//!
//! Host text-editing platforms describe positions as zero-based UTF-16
//! code-unit offsets. Converting a host range into a native index space can
//! fail (out of bounds, reversed, or splitting a surrogate pair); the
//! reverse direction is total for ranges that came from a reader over the
//! same text.

use std::ops::Range;

use crate::{Token, Utf16Offset};

/// Why a host range has no native counterpart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HostRangeError {
    #[error("host range {start}..{end} is reversed")]
    Reversed { start: usize, end: usize },
    #[error("host offset {offset} is past the end of the text ({len} code units)")]
    OutOfBounds { offset: usize, len: usize },
    #[error("host offset {offset} falls inside a surrogate pair")]
    SplitsSurrogatePair { offset: usize },
}

/// A native index type that can be mapped to and from host UTF-16 offsets.
pub trait HostIndex: Copy + Ord {
    /// Map a host offset into this index space for `text`.
    fn from_host_offset(text: &str, offset: usize) -> Result<Self, HostRangeError>;

    /// Map this index to a host offset for `text`.
    fn to_host_offset(self, text: &str) -> usize;
}

/// UTF-8 byte offsets.
impl HostIndex for usize {
    fn from_host_offset(text: &str, offset: usize) -> Result<Self, HostRangeError> {
        let mut units = 0;
        for (byte, c) in text.char_indices() {
            if units == offset {
                return Ok(byte);
            }
            if units > offset {
                return Err(HostRangeError::SplitsSurrogatePair { offset });
            }
            units += c.len_utf16();
        }
        match units.cmp(&offset) {
            std::cmp::Ordering::Equal => Ok(text.len()),
            std::cmp::Ordering::Greater => Err(HostRangeError::SplitsSurrogatePair { offset }),
            std::cmp::Ordering::Less => Err(HostRangeError::OutOfBounds { offset, len: units }),
        }
    }

    fn to_host_offset(self, text: &str) -> usize {
        text.char_indices()
            .take_while(|&(byte, _)| byte < self)
            .map(|(_, c)| c.len_utf16())
            .sum()
    }
}

impl HostIndex for Utf16Offset {
    fn from_host_offset(text: &str, offset: usize) -> Result<Self, HostRangeError> {
        // Validate against the text; the offset value itself carries over.
        usize::from_host_offset(text, offset).map(|_| Utf16Offset(offset))
    }

    fn to_host_offset(self, _text: &str) -> usize {
        self.0
    }
}

/// Convert a host range into the native index space `I`.
pub fn try_native_range<I: HostIndex>(
    text: &str,
    range: Range<usize>,
) -> Result<Range<I>, HostRangeError> {
    if range.start > range.end {
        return Err(HostRangeError::Reversed {
            start: range.start,
            end: range.end,
        });
    }
    let start = I::from_host_offset(text, range.start)?;
    let end = I::from_host_offset(text, range.end)?;
    Ok(start..end)
}

/// Convert a host range into the native index space `I`, or `None` if it
/// does not correspond to valid positions in `text`.
pub fn native_range<I: HostIndex>(text: &str, range: Range<usize>) -> Option<Range<I>> {
    try_native_range(text, range).ok()
}

impl<I: HostIndex + std::fmt::Debug, K> Token<I, K> {
    /// Build a token from a host range over `text`.
    ///
    /// Returns `None` if the range is invalid for `text` or empty.
    pub fn from_host_range(kind: K, range: Range<usize>, text: &str) -> Option<Self> {
        let range = native_range::<I>(text, range)?;
        if range.start >= range.end {
            return None;
        }
        Some(Token::new(kind, range))
    }

    /// This token's range as a host range over `text`.
    pub fn host_range(&self, text: &str) -> Range<usize> {
        self.range.start.to_host_offset(text)..self.range.end.to_host_offset(text)
    }
}
