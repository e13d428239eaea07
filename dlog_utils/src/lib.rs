//! Common arithmetic for the interactive discrete log proof of knowledge.
//!
//! Everything here works over [`num_bigint::BigUint`] so the protocol crates
//! can use a modulus generated at runtime. Randomness always comes from a
//! caller-supplied rng; sampling that feeds secrets or challenges requires a
//! [`rand::CryptoRng`] source.

pub mod error;
pub mod modular;
pub mod prime;
pub mod sampling;

pub use error::MathError;
