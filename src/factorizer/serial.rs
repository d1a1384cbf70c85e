// src/factorizer/serial.rs

use crate::core::cancellation_token::CancellationToken;
use crate::core::factorization::Factorization;
use crate::core::progress::ProgressObserver;
use crate::error::FactorError;
use log::debug;
use num::{BigInt, Integer, One, ToPrimitive};

/// Candidates tested between progress reports and cancellation checks.
const PROGRESS_BATCH: u64 = 1 << 16;

/// Single-threaded trial division, the reference semantics for this crate.
///
/// Divides out all factors of 2, then tests odd candidates in increasing
/// order, dividing each one out repeatedly and shrinking the search bound to
/// the square root of the reduced value. Whatever remains above 1 when the
/// candidates are exhausted must itself be prime and is appended last.
pub fn factor_serial(
    n: &BigInt,
    observer: &dyn ProgressObserver,
    cancel: &CancellationToken,
) -> Result<Factorization, FactorError> {
    crate::factorizer::validate(n)?;

    let mut result = Factorization::new(n);
    let mut remaining = n.clone();

    let two = BigInt::from(2);
    while remaining.is_even() {
        remaining /= &two;
        result.push(two.clone());
        observer.factor_extracted(&two, &remaining);
    }

    if !remaining.is_one() {
        if remaining.sqrt().to_u64().is_some() {
            scan_u64(&mut remaining, &mut result, observer, cancel)?;
        } else {
            scan_bigint(&mut remaining, &mut result, observer, cancel)?;
        }
    }

    if !remaining.is_one() {
        debug!("Residual {} is prime", remaining);
        result.push(remaining);
    }

    Ok(result)
}

// Fast path: the search bound fits in a u64, so candidates iterate with
// native arithmetic. The bound only shrinks, so it stays representable.
fn scan_u64(
    remaining: &mut BigInt,
    result: &mut Factorization,
    observer: &dyn ProgressObserver,
    cancel: &CancellationToken,
) -> Result<(), FactorError> {
    let mut bound = remaining.sqrt().to_u64().unwrap_or(u64::MAX);
    let mut candidate = 3u64;
    let mut tested = 0u64;

    while candidate <= bound && !remaining.is_one() {
        let divisor = BigInt::from(candidate);
        if remaining.is_multiple_of(&divisor) {
            while remaining.is_multiple_of(&divisor) {
                *remaining /= &divisor;
                result.push(divisor.clone());
                observer.factor_extracted(&divisor, remaining);
            }
            bound = remaining.sqrt().to_u64().unwrap_or(u64::MAX);
        }
        candidate += 2;
        tested += 1;
        if tested % PROGRESS_BATCH == 0 {
            observer.candidates_tested(PROGRESS_BATCH);
            if cancel.is_cancellation_requested() {
                return Err(FactorError::Cancelled);
            }
        }
    }
    observer.candidates_tested(tested % PROGRESS_BATCH);
    Ok(())
}

fn scan_bigint(
    remaining: &mut BigInt,
    result: &mut Factorization,
    observer: &dyn ProgressObserver,
    cancel: &CancellationToken,
) -> Result<(), FactorError> {
    let mut bound = remaining.sqrt();
    let mut divisor = BigInt::from(3);
    let mut tested = 0u64;

    while divisor <= bound && !remaining.is_one() {
        if remaining.is_multiple_of(&divisor) {
            while remaining.is_multiple_of(&divisor) {
                *remaining /= &divisor;
                result.push(divisor.clone());
                observer.factor_extracted(&divisor, remaining);
            }
            bound = remaining.sqrt();
        }
        divisor += 2;
        tested += 1;
        if tested % PROGRESS_BATCH == 0 {
            observer.candidates_tested(PROGRESS_BATCH);
            if cancel.is_cancellation_requested() {
                return Err(FactorError::Cancelled);
            }
        }
    }
    observer.candidates_tested(tested % PROGRESS_BATCH);
    Ok(())
}
