//! Shared setup for a proof session.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

/// The public values `(p, g, y)` both parties work from. The prover generates
/// them; the verifier only ever receives a copy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicParameters {
    /// Prime modulus.
    pub p: BigUint,
    /// Base of the exponentiation, in `[2, p)`.
    pub g: BigUint,
    /// `g^x mod p`, the public image of the secret.
    pub y: BigUint,
}

impl PublicParameters {
    /// Requires `2 <= g < p` and `p >= 5` so the nonce range `[0, p - 2)` is
    /// never empty.
    pub fn new(p: BigUint, g: BigUint, y: BigUint) -> Result<Self, ProtocolError> {
        if p < BigUint::from(5u32) {
            return Err(ProtocolError::ModulusTooSmall);
        }
        if g < BigUint::from(2u32) || g >= p {
            return Err(ProtocolError::GeneratorOutOfRange);
        }
        Ok(Self { p, g, y })
    }
}

/// Knobs for parameter generation and the round loop.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupConfig {
    /// Number of rounds a session runs.
    pub rounds: u32,
    /// The modulus is drawn from `[2^min_modulus_bits, 2^max_modulus_bits)`.
    pub min_modulus_bits: u32,
    pub max_modulus_bits: u32,
    /// Miller-Rabin witness count used while searching for the modulus.
    pub primality_rounds: u32,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            rounds: 10,
            min_modulus_bits: 20,
            max_modulus_bits: 21,
            primality_rounds: 25,
        }
    }
}

impl SetupConfig {
    pub fn validate(&self) -> Result<(), ProtocolError> {
        if self.rounds == 0 {
            return Err(ProtocolError::ZeroRounds);
        }
        if self.min_modulus_bits < 3 || self.min_modulus_bits >= self.max_modulus_bits {
            return Err(ProtocolError::InvalidBitRange(
                self.min_modulus_bits,
                self.max_modulus_bits,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_invariants_are_enforced() {
        let p = BigUint::from(1000003u32);
        assert!(PublicParameters::new(p.clone(), BigUint::from(5u32), BigUint::from(1u32)).is_ok());
        assert_eq!(
            PublicParameters::new(BigUint::from(4u32), BigUint::from(2u32), BigUint::from(1u32))
                .err(),
            Some(ProtocolError::ModulusTooSmall)
        );
        assert_eq!(
            PublicParameters::new(p.clone(), BigUint::from(1u32), BigUint::from(1u32)).err(),
            Some(ProtocolError::GeneratorOutOfRange)
        );
        assert_eq!(
            PublicParameters::new(p.clone(), p.clone(), BigUint::from(1u32)).err(),
            Some(ProtocolError::GeneratorOutOfRange)
        );
    }

    #[test]
    fn config_validation() {
        assert!(SetupConfig::default().validate().is_ok());
        let mut config = SetupConfig::default();
        config.rounds = 0;
        assert_eq!(config.validate().err(), Some(ProtocolError::ZeroRounds));
        let mut config = SetupConfig::default();
        config.min_modulus_bits = 21;
        assert_eq!(
            config.validate().err(),
            Some(ProtocolError::InvalidBitRange(21, 21))
        );
    }
}
