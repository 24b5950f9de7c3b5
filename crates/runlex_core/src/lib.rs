//! Runlex core - readers, classification and lookahead for hand-written lexers.
//!
//! This crate is the foundation downstream tokenizers build on. It has no
//! knowledge of any particular grammar; it provides:
//! - [`CharacterReader`]: forward-only cursors over `&str`, generic over the
//!   index space (UTF-8 bytes or UTF-16 code units)
//! - [`classify`]: a total mapping from one character to a [`CharacterKind`]
//! - [`CharacterStream`] and [`RunStream`]: lazy token producers, the latter
//!   compacting same-case letter runs and digit runs into single tokens
//! - [`LookAheadBuffer`]: a peekable decorator over any iterator
//! - [`SharedLookAhead`]: the aliasing handle over one buffer
//!
//! # Pipeline
//!
//! ```text
//! &str -> CharacterReader -> classify -> TokenStream -> LookAheadBuffer -> grammar
//! ```
//!
//! Everything here is single-threaded and synchronous. Scanning is bounded by
//! input length; the `*_until` lookahead operations additionally accept a
//! scan limit (see [`ScanLimits`]).

mod classify;
mod host;
mod limits;
mod lookahead;
mod reader;
mod shared;
mod stream;
mod token;
mod unicode_set;

pub use classify::{classify, classify_char, CharacterKind};
pub use host::{native_range, try_native_range, HostIndex, HostRangeError};
pub use limits::{ScanLimits, DEFAULT_SCAN_LIMIT, GUARDED_SCAN_LIMIT};
pub use lookahead::{LookAhead, LookAheadBuffer, LookAheadExt, TokenLookAhead};
pub use reader::{CharacterReader, ScalarReader, StrReader, Utf16Offset, Utf16Reader};
pub use shared::SharedLookAhead;
pub use stream::{
    CharacterLexer, CharacterStream, CharacterToken, RunKind, RunLexer, RunStream, RunToken,
    TokenStream,
};
pub use token::{LexToken, Token};
pub use unicode_set::UnicodeSet;
