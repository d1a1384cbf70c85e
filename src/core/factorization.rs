// src/core/factorization.rs

use num::{BigInt, One};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The complete prime factorization of a number: the original value plus an
/// append-only list of prime factors in non-decreasing order, with
/// repetition, whose product equals the original value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Factorization {
    pub number: BigInt,
    pub factors: Vec<BigInt>,
}

impl Factorization {
    pub fn new(number: &BigInt) -> Self {
        Factorization {
            number: number.clone(),
            factors: Vec::new(),
        }
    }

    /// Append the next extracted factor. Smallest-first extraction keeps the
    /// list sorted without ever re-ordering it.
    pub fn push(&mut self, factor: BigInt) {
        debug_assert!(
            self.factors.last().map_or(true, |last| last <= &factor),
            "factors must be appended in non-decreasing order"
        );
        self.factors.push(factor);
    }

    pub fn product(&self) -> BigInt {
        self.factors.iter().fold(BigInt::one(), |acc, f| acc * f)
    }

    /// product(factors) == number, the defining invariant.
    pub fn is_complete(&self) -> bool {
        self.product() == self.number
    }

    /// Collapse the factor list into a factor -> exponent map.
    pub fn to_exponent_map(&self) -> BTreeMap<BigInt, u32> {
        let mut map = BTreeMap::new();
        for factor in &self.factors {
            *map.entry(factor.clone()).or_insert(0u32) += 1;
        }
        map
    }

    pub fn format_as_factorization(&self) -> String {
        let parts: Vec<String> = self
            .to_exponent_map()
            .iter()
            .map(|(factor, exponent)| {
                if *exponent == 1 {
                    format!("{}", factor)
                } else {
                    format!("{}^{}", factor, exponent)
                }
            })
            .collect();
        parts.join(" * ")
    }
}

impl fmt::Display for Factorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.number, self.format_as_factorization())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factorization_of(n: i64, factors: &[i64]) -> Factorization {
        let mut result = Factorization::new(&BigInt::from(n));
        for &f in factors {
            result.push(BigInt::from(f));
        }
        result
    }

    #[test]
    fn test_product_and_completeness() {
        let result = factorization_of(45, &[3, 3, 5]);
        assert_eq!(result.product(), BigInt::from(45));
        assert!(result.is_complete());

        let partial = factorization_of(45, &[3, 3]);
        assert!(!partial.is_complete());
    }

    #[test]
    fn test_exponent_map() {
        let result = factorization_of(60, &[2, 2, 3, 5]);
        let map = result.to_exponent_map();
        assert_eq!(map[&BigInt::from(2)], 2);
        assert_eq!(map[&BigInt::from(3)], 1);
        assert_eq!(map[&BigInt::from(5)], 1);
    }

    #[test]
    fn test_display_formatting() {
        let result = factorization_of(60, &[2, 2, 3, 5]);
        assert_eq!(result.to_string(), "60 = 2^2 * 3 * 5");
    }

    #[test]
    fn test_serde_round_trip() {
        let result = factorization_of(45, &[3, 3, 5]);
        let json = serde_json::to_string(&result).unwrap();
        let back: Factorization = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
