//! Runlex words - a small word/number/symbol/whitespace tokenizer.
//!
//! Built only on the public surface of `runlex_core`: a character stream
//! wrapped in a lookahead buffer, grouped with the `next_until_*` adapters.
//! It doubles as a template for writing a grammar-specific lexer.

mod words;

pub use words::{words, WordKind, WordStream, WordToken};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debugging.
///
/// Call this once at the start of a program or test to enable tracing output.
/// Set `RUST_LOG=runlex_core=trace` to see lookahead refills.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
