//! Probable prime testing and generation.

use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::One;
use rand::{CryptoRng, RngCore};

use crate::error::MathError;

/// Miller-Rabin with `rounds` random witnesses. `rounds` is the caller's
/// certainty knob: a composite survives all of them with probability at most
/// `4^-rounds`.
pub fn is_probable_prime<R: RngCore + CryptoRng>(rng: &mut R, n: &BigUint, rounds: u32) -> bool {
    let two = BigUint::from(2u32);
    let three = BigUint::from(3u32);
    if n < &two {
        return false;
    }
    if n == &two || n == &three {
        return true;
    }
    if n.is_even() {
        return false;
    }

    // n - 1 = d * 2^s with d odd
    let n_minus_one = n - 1u32;
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;

    'witness: for _ in 0..rounds {
        let a = rng.gen_biguint_range(&two, &n_minus_one);
        let mut x = a.modpow(&d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = x.modpow(&two, n);
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

/// Rejection-samples `[lo, hi)` until a probable prime turns up. The attempt
/// count is bounded so a prime-free range terminates with
/// [`MathError::PrimeSearchExhausted`].
pub fn random_prime_in_range<R: RngCore + CryptoRng>(
    rng: &mut R,
    lo: &BigUint,
    hi: &BigUint,
    rounds: u32,
) -> Result<BigUint, MathError> {
    if lo >= hi {
        return Err(MathError::EmptyRange {
            lo: lo.clone(),
            hi: hi.clone(),
        });
    }
    let max_attempts = (64 * hi.bits()).max(512) as usize;
    for _ in 0..max_attempts {
        let candidate = rng.gen_biguint_range(lo, hi);
        if is_probable_prime(rng, &candidate, rounds) {
            return Ok(candidate);
        }
    }
    Err(MathError::PrimeSearchExhausted(max_attempts))
}
