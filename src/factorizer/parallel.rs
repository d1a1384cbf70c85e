// src/factorizer/parallel.rs
//
// Two-phase parallel trial division.
//
// Each phase partitions the current candidate range into contiguous chunks,
// one per worker. Workers perform a read-only divisibility scan of the
// current value and report the smallest dividing candidate in their chunk.
// The collect() join is the phase barrier: only after every worker has
// reported does the reduction step divide out the smallest divisor found,
// shrink the bound, and re-dispatch against the reduced value. Workers never
// mutate shared state; the remaining value changes only between phases.

use crate::config::FactorizerConfig;
use crate::core::cancellation_token::CancellationToken;
use crate::core::factorization::Factorization;
use crate::core::progress::ProgressObserver;
use crate::error::FactorError;
use crate::integer_math::candidate_range::CandidateRange;
use log::debug;
use num::{BigInt, Integer, One, ToPrimitive};
use rayon::prelude::*;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Candidates tested between checks of the abandon/cancel flags.
const FLAG_CHECK_MASK: u64 = 0xFFF;

/// Parallel trial division. Produces output identical to
/// [`factor_serial`](crate::factorizer::factor_serial) for every input.
///
/// The scan over candidate divisors is fanned out across a thread pool sized
/// by `config`; factor extraction itself stays serialized between phases, so
/// repeated prime powers are divided out completely and composite divisors
/// of the original value are never reported as factors.
pub fn factor_parallel(
    n: &BigInt,
    config: &FactorizerConfig,
    observer: &dyn ProgressObserver,
    cancel: &CancellationToken,
) -> Result<Factorization, FactorError> {
    crate::factorizer::validate(n)?;

    let threads = config.threads.unwrap_or_else(num_cpus::get).max(1);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|err| FactorError::Setup(err.to_string()))?;

    let mut result = Factorization::new(n);
    let mut remaining = n.clone();

    let two = BigInt::from(2);
    while remaining.is_even() {
        remaining /= &two;
        result.push(two.clone());
        observer.factor_extracted(&two, &remaining);
    }

    // Candidates below `next` were exhausted against an earlier, larger
    // remaining value. Any divisor of the reduced value also divides that
    // earlier value, so they can never divide again and each phase resumes
    // just above the last extracted prime.
    let mut next = BigInt::from(3);
    let mut phase = 0usize;

    while !remaining.is_one() {
        if cancel.is_cancellation_requested() {
            return Err(FactorError::Cancelled);
        }

        let bound = remaining.sqrt();
        if next > bound {
            result.push(remaining);
            break;
        }

        let chunks = CandidateRange::partition(&next, &bound, threads, config.min_chunk_size);
        debug!(
            "Phase {}: scanning [{}, {}] in {} chunks",
            phase + 1,
            next,
            bound,
            chunks.len()
        );

        // Lowest chunk index that found a divisor; higher-indexed chunks
        // abandon their scans once it is set.
        let winner = AtomicUsize::new(usize::MAX);
        let current = &remaining;
        let scan = catch_unwind(AssertUnwindSafe(|| {
            pool.install(|| {
                chunks
                    .par_iter()
                    .enumerate()
                    .map(|(index, (low, high))| {
                        scan_chunk(current, low, high, index, &winner, observer, cancel)
                    })
                    .collect::<Vec<Option<BigInt>>>()
            })
        }));
        // the collect above is the phase barrier: every worker has reported
        let hits = scan.map_err(|_| FactorError::WorkerPanic)?;
        if cancel.is_cancellation_requested() {
            return Err(FactorError::Cancelled);
        }
        phase += 1;

        // Chunks are disjoint and ascending, and the lowest reporting chunk
        // is never abandoned, so the minimum over all hits is the smallest
        // divisor in the whole range. The smallest divisor > 1 of any
        // integer is prime.
        match hits.into_iter().flatten().min() {
            Some(divisor) => {
                while remaining.is_multiple_of(&divisor) {
                    remaining /= &divisor;
                    result.push(divisor.clone());
                    observer.factor_extracted(&divisor, &remaining);
                }
                observer.phase_complete(phase, Some(&divisor));
                next = divisor + 2;
            }
            None => {
                observer.phase_complete(phase, None);
                result.push(remaining);
                break;
            }
        }
    }

    Ok(result)
}

/// Read-only divisibility scan of one chunk. Returns the smallest candidate
/// in [low, high] dividing `n`, or None if there is none or the chunk was
/// abandoned because a lower-indexed chunk already found a divisor.
fn scan_chunk(
    n: &BigInt,
    low: &BigInt,
    high: &BigInt,
    index: usize,
    winner: &AtomicUsize,
    observer: &dyn ProgressObserver,
    cancel: &CancellationToken,
) -> Option<BigInt> {
    if let (Some(low), Some(high)) = (low.to_u64(), high.to_u64()) {
        // fast path: native candidate arithmetic
        let mut candidate = low;
        let mut tested = 0u64;
        while candidate <= high {
            if n.is_multiple_of(&BigInt::from(candidate)) {
                winner.fetch_min(index, Ordering::SeqCst);
                observer.candidates_tested(tested + 1);
                return Some(BigInt::from(candidate));
            }
            candidate += 2;
            tested += 1;
            if tested & FLAG_CHECK_MASK == 0 && abandoned(index, winner, cancel) {
                observer.candidates_tested(tested);
                return None;
            }
        }
        observer.candidates_tested(tested);
        None
    } else {
        let mut candidate = low.clone();
        let mut tested = 0u64;
        while &candidate <= high {
            if n.is_multiple_of(&candidate) {
                winner.fetch_min(index, Ordering::SeqCst);
                observer.candidates_tested(tested + 1);
                return Some(candidate);
            }
            candidate += 2;
            tested += 1;
            if tested & FLAG_CHECK_MASK == 0 && abandoned(index, winner, cancel) {
                observer.candidates_tested(tested);
                return None;
            }
        }
        observer.candidates_tested(tested);
        None
    }
}

fn abandoned(index: usize, winner: &AtomicUsize, cancel: &CancellationToken) -> bool {
    cancel.is_cancellation_requested() || winner.load(Ordering::SeqCst) < index
}
