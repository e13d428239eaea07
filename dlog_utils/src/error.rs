use num_bigint::BigUint;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    #[error("modulus must be positive")]
    ZeroModulus,
    #[error("sampling bound must be positive")]
    ZeroBound,
    #[error("empty range [{lo}, {hi})")]
    EmptyRange { lo: BigUint, hi: BigUint },
    #[error("no probable prime found in range after {0} attempts")]
    PrimeSearchExhausted(usize),
}
