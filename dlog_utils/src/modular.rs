//! Modular arithmetic over arbitrary precision integers.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::MathError;

/// Computes `base^exponent mod modulus`. The result lies in `[0, modulus)`.
pub fn power_mod(
    base: &BigUint,
    exponent: &BigUint,
    modulus: &BigUint,
) -> Result<BigUint, MathError> {
    if modulus.is_zero() {
        return Err(MathError::ZeroModulus);
    }
    Ok(base.modpow(exponent, modulus))
}

/// Computes `a * b mod modulus`.
pub fn mul_mod(a: &BigUint, b: &BigUint, modulus: &BigUint) -> Result<BigUint, MathError> {
    if modulus.is_zero() {
        return Err(MathError::ZeroModulus);
    }
    Ok((a * b) % modulus)
}
