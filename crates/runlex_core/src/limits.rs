//! Scan limits for the `*_until` lookahead operations.
//!
//! `peek_until`, `next_until` and `skip_until` examine at most a fixed number
//! of tokens before giving up. Hitting the limit behaves exactly like running
//! out of input. By default it is [`GUARDED_SCAN_LIMIT`], which keeps a
//! predicate that never holds over endless input from buffering without
//! bound. [`ScanLimits::unbounded`] opts out.

/// Finite guard on one `*_until` scan.
pub const GUARDED_SCAN_LIMIT: usize = 10_000;

/// Limit used when none is configured.
pub const DEFAULT_SCAN_LIMIT: usize = GUARDED_SCAN_LIMIT;

/// Configuration for lookahead scans.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScanLimits {
    /// Maximum number of tokens examined by one `*_until` call.
    pub until: usize,
}

impl Default for ScanLimits {
    fn default() -> Self {
        ScanLimits::guarded()
    }
}

impl ScanLimits {
    /// Scans stop only at end of input.
    pub const fn unbounded() -> Self {
        ScanLimits { until: usize::MAX }
    }

    /// Scans stop after [`GUARDED_SCAN_LIMIT`] tokens.
    pub const fn guarded() -> Self {
        ScanLimits {
            until: GUARDED_SCAN_LIMIT,
        }
    }

    /// Scans stop after `until` tokens.
    pub const fn with_until(until: usize) -> Self {
        ScanLimits { until }
    }
}
