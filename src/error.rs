// src/error.rs

use num::BigInt;
use std::fmt;

/// Errors reported by the factorizer. The algorithm itself is deterministic
/// and side-effect-free, so none of these are retryable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactorError {
    /// N < 2: no factorization is defined.
    InvalidInput(BigInt),
    /// The input could not be parsed as an exact integer.
    Unrepresentable(String),
    /// A worker thread panicked during a divisibility scan. Fatal to the
    /// whole run, never silently ignored.
    WorkerPanic,
    /// The run was cancelled through its cancellation token.
    Cancelled,
    /// The thread pool could not be constructed.
    Setup(String),
}

impl fmt::Display for FactorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactorError::InvalidInput(n) => {
                write!(f, "invalid input {}: factorization is only defined for integers >= 2", n)
            }
            FactorError::Unrepresentable(s) => {
                write!(f, "'{}' is not representable as an exact integer", s)
            }
            FactorError::WorkerPanic => write!(f, "a worker thread panicked during the divisibility scan"),
            FactorError::Cancelled => write!(f, "factorization cancelled"),
            FactorError::Setup(msg) => write!(f, "thread pool setup failed: {}", msg),
        }
    }
}

impl std::error::Error for FactorError {}

/// Parse an input string into a `BigInt` at the crate boundary.
///
/// Rejects anything that is not an exact base-10 integer with
/// `Unrepresentable`, so fixed-width or floating-point mishaps are caught
/// before any computation starts.
pub fn parse_input(s: &str) -> Result<BigInt, FactorError> {
    let trimmed = s.trim();
    BigInt::parse_bytes(trimmed.as_bytes(), 10)
        .ok_or_else(|| FactorError::Unrepresentable(trimmed.to_string()))
}
