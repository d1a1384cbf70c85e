// src/integer_math/primality.rs

use num::{BigInt, One, Zero};

const PRIME_CHECK_BASES: [i64; 15] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47];

/// Miller-Rabin probable-prime test over a fixed base set.
///
/// Deterministic for inputs below 3.3 * 10^24; probabilistic (with
/// negligible error) beyond that.
pub fn is_probable_prime(input: &BigInt) -> bool {
    if input == &BigInt::from(2) || input == &BigInt::from(3) {
        return true;
    }
    if input < &BigInt::from(2) || input % 2 == BigInt::zero() {
        return false;
    }

    let mut d = input - 1;
    let mut s = 0;
    while &d % 2 == BigInt::zero() {
        d /= 2;
        s += 1;
    }

    for &a in &PRIME_CHECK_BASES {
        if &BigInt::from(a) >= input {
            continue;
        }
        let mut x = BigInt::from(a).modpow(&d, input);
        if x == BigInt::one() || x == input - 1 {
            continue;
        }
        let mut r = 1;
        while r < s {
            x = x.modpow(&BigInt::from(2), input);
            if x == BigInt::one() {
                return false;
            }
            if x == input - 1 {
                break;
            }
            r += 1;
        }
        if x != input - 1 {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_primes() {
        for p in [2i64, 3, 5, 7, 11, 13, 8191, 131071] {
            assert!(is_probable_prime(&BigInt::from(p)), "{} should be prime", p);
        }
    }

    #[test]
    fn test_small_composites() {
        for c in [0i64, 1, 4, 9, 45, 8191 * 131071] {
            assert!(!is_probable_prime(&BigInt::from(c)), "{} should not be prime", c);
        }
    }

    #[test]
    fn test_carmichael_numbers_rejected() {
        // 561, 1105, 1729 fool the Fermat test but not Miller-Rabin
        for c in [561i64, 1105, 1729] {
            assert!(!is_probable_prime(&BigInt::from(c)), "{} should not be prime", c);
        }
    }

    #[test]
    fn test_large_mersenne_prime() {
        let m31 = BigInt::from((1u64 << 31) - 1);
        assert!(is_probable_prime(&m31));
    }
}
