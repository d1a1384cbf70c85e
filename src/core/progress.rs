// src/core/progress.rs

use log::{debug, info};
use num::BigInt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Observer for factorization progress events.
///
/// Implementations must be thread-safe: workers report from inside the
/// parallel scan. The factorizer functions correctly (though silently) with
/// `NoopProgress`, and never depends on any particular rendering mechanism.
pub trait ProgressObserver: Send + Sync {
    /// A worker finished testing a batch of candidates.
    fn candidates_tested(&self, _count: u64) {}

    /// A factor was divided out of the remaining value.
    fn factor_extracted(&self, _factor: &BigInt, _remaining: &BigInt) {}

    /// A scan phase completed; `divisor` is the smallest candidate in the
    /// phase's range that divided the current value, if any.
    fn phase_complete(&self, _phase: usize, _divisor: Option<&BigInt>) {}
}

/// Observer that discards every event.
pub struct NoopProgress;

impl ProgressObserver for NoopProgress {}

/// Observer that aggregates worker counts through an atomic counter and
/// emits through the `log` facade. Workers never touch a shared display
/// object directly.
pub struct LogProgress {
    tested: AtomicU64,
}

impl LogProgress {
    pub fn new() -> Self {
        LogProgress {
            tested: AtomicU64::new(0),
        }
    }

    pub fn total_tested(&self) -> u64 {
        self.tested.load(Ordering::Relaxed)
    }
}

impl Default for LogProgress {
    fn default() -> Self {
        LogProgress::new()
    }
}

impl ProgressObserver for LogProgress {
    fn candidates_tested(&self, count: u64) {
        self.tested.fetch_add(count, Ordering::Relaxed);
    }

    fn factor_extracted(&self, factor: &BigInt, remaining: &BigInt) {
        debug!("Extracted factor {} (remaining: {})", factor, remaining);
    }

    fn phase_complete(&self, phase: usize, divisor: Option<&BigInt>) {
        match divisor {
            Some(d) => info!(
                "Phase {} complete: smallest divisor {} ({} candidates tested so far)",
                phase,
                d,
                self.total_tested()
            ),
            None => info!(
                "Phase {} complete: no divisor in range ({} candidates tested so far)",
                phase,
                self.total_tested()
            ),
        }
    }
}
