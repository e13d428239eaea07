//! Uniform sampling over caller-supplied randomness.

use num_bigint::{BigUint, RandBigInt};
use num_traits::Zero;
use rand::{CryptoRng, RngCore};

use crate::error::MathError;

/// Uniform draw from `[0, bound)`.
pub fn random_below<R: RngCore + CryptoRng>(
    rng: &mut R,
    bound: &BigUint,
) -> Result<BigUint, MathError> {
    if bound.is_zero() {
        return Err(MathError::ZeroBound);
    }
    Ok(rng.gen_biguint_below(bound))
}

/// Uniform draw from `[lo, hi)`.
pub fn random_in_range<R: RngCore + CryptoRng>(
    rng: &mut R,
    lo: &BigUint,
    hi: &BigUint,
) -> Result<BigUint, MathError> {
    if lo >= hi {
        return Err(MathError::EmptyRange {
            lo: lo.clone(),
            hi: hi.clone(),
        });
    }
    Ok(rng.gen_biguint_range(lo, hi))
}
