// src/factorizer/mod.rs
//
// Trial division with early termination and a shrinking search bound.
// Complexity: O(sqrt(n) / threads) per scan phase.
//
// Two implementations share the same output contract:
// - factor_serial: single-threaded reference algorithm
// - factor_parallel: two-phase scan/reduce protocol over a thread pool
//
// The public factor() entry point validates the input, short-circuits prime
// inputs, and picks an implementation by input size.

pub mod parallel;
pub mod serial;

pub use parallel::factor_parallel;
pub use serial::factor_serial;

use crate::config::FactorizerConfig;
use crate::core::cancellation_token::CancellationToken;
use crate::core::factorization::Factorization;
use crate::core::progress::{NoopProgress, ProgressObserver};
use crate::error::FactorError;
use crate::integer_math::primality::is_probable_prime;
use log::{debug, info};
use num::BigInt;

/// Inputs at or below this many bits have scans too short to be worth
/// fanning out across threads.
const PARALLEL_THRESHOLD_BITS: u64 = 48;

pub(crate) fn validate(n: &BigInt) -> Result<(), FactorError> {
    if n < &BigInt::from(2) {
        return Err(FactorError::InvalidInput(n.clone()));
    }
    Ok(())
}

/// Returns the complete prime factorization of `n` in non-decreasing order.
///
/// Fails with `InvalidInput` when n < 2. Each call is independent and
/// side-effect-free.
///
/// # Examples
/// ```
/// use num::BigInt;
/// use parallel_trial_division::factor;
///
/// let result = factor(&BigInt::from(45)).unwrap();
/// let expected: Vec<BigInt> = [3, 3, 5].iter().map(|&f| BigInt::from(f)).collect();
/// assert_eq!(result.factors, expected);
/// ```
pub fn factor(n: &BigInt) -> Result<Factorization, FactorError> {
    factor_with_observer(n, &NoopProgress, &CancellationToken::new())
}

/// Like [`factor`], with progress events routed to `observer` and
/// cooperative cancellation through `cancel`. Parallel runs use the default
/// configuration; use [`factor_with_config`] to supply one.
pub fn factor_with_observer(
    n: &BigInt,
    observer: &dyn ProgressObserver,
    cancel: &CancellationToken,
) -> Result<Factorization, FactorError> {
    factor_with_config(n, &FactorizerConfig::default(), observer, cancel)
}

/// Like [`factor_with_observer`], with the parallel path sized by `config`
/// so library consumers get configured thread counts and chunk sizes, not
/// just the binary.
pub fn factor_with_config(
    n: &BigInt,
    config: &FactorizerConfig,
    observer: &dyn ProgressObserver,
    cancel: &CancellationToken,
) -> Result<Factorization, FactorError> {
    validate(n)?;

    if is_probable_prime(n) {
        info!("{} is prime", n);
        let mut result = Factorization::new(n);
        result.push(n.clone());
        return Ok(result);
    }

    if n.bits() <= PARALLEL_THRESHOLD_BITS {
        debug!("{} bits: using serial trial division", n.bits());
        factor_serial(n, observer, cancel)
    } else {
        debug!("{} bits: using parallel trial division", n.bits());
        factor_parallel(n, config, observer, cancel)
    }
}
