//! The party holding the secret exponent.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};
use tracing::info;
use zeroize::{Zeroize, ZeroizeOnDrop};

use dlog_utils::{
    modular::power_mod,
    prime::random_prime_in_range,
    sampling::{random_below, random_in_range},
};

use crate::{
    error::ProtocolError,
    setup::{PublicParameters, SetupConfig},
};

/// Nonce and commitment of the round in progress. The commitment is computed
/// once when the round opens; every later use reads this stored value.
struct RoundSecret {
    r: BigUint,
    commitment: BigUint,
}

/// Holds the secret `x` and answers one challenge per round. The secret and
/// any live nonce are cleared when the prover is dropped.
pub struct Prover {
    params: PublicParameters,
    x: BigUint,
    round: Option<RoundSecret>,
}

impl Prover {
    /// Runs the full setup: probable prime `p` from the configured bit range,
    /// base `g` uniform in `[2, p)`, secret `x` uniform in `[0, p - 1)` and
    /// `y = g^x mod p`.
    pub fn generate<R: RngCore + CryptoRng>(
        rng: &mut R,
        config: &SetupConfig,
    ) -> Result<Self, ProtocolError> {
        config.validate()?;
        let lo = BigUint::one() << config.min_modulus_bits;
        let hi = BigUint::one() << config.max_modulus_bits;
        let p = random_prime_in_range(rng, &lo, &hi, config.primality_rounds)?;
        let g = random_in_range(rng, &BigUint::from(2u32), &p)?;
        let x = random_below(rng, &(&p - 1u32))?;
        info!(bits = p.bits(), "generated proof parameters");
        Self::with_secret(p, g, x)
    }

    /// Builds a prover over fixed `(p, g)` and the given secret, deriving `y`.
    pub fn with_secret(p: BigUint, g: BigUint, x: BigUint) -> Result<Self, ProtocolError> {
        if p < BigUint::from(5u32) {
            return Err(ProtocolError::ModulusTooSmall);
        }
        if x >= &p - 1u32 {
            return Err(ProtocolError::SecretOutOfRange);
        }
        let y = power_mod(&g, &x, &p)?;
        let params = PublicParameters::new(p, g, y)?;
        Ok(Self {
            params,
            x,
            round: None,
        })
    }

    /// The shared public values. The verifier works from its own clone.
    pub fn params(&self) -> &PublicParameters {
        &self.params
    }

    /// Opens a round: samples a fresh nonce `r` in `[0, p - 2)`, stores
    /// `C = g^r mod p` and returns it. Calling this again before
    /// [`Self::respond`] is an error; the stored commitment is the only one
    /// this round will ever produce.
    pub fn begin_round<R: RngCore + CryptoRng>(
        &mut self,
        rng: &mut R,
    ) -> Result<BigUint, ProtocolError> {
        if self.round.is_some() {
            return Err(ProtocolError::RoundAlreadyOpen);
        }
        let r = random_below(rng, &(&self.params.p - 2u32))?;
        let commitment = power_mod(&self.params.g, &r, &self.params.p)?;
        self.round = Some(RoundSecret {
            r,
            commitment: commitment.clone(),
        });
        Ok(commitment)
    }

    /// The stored commitment of the open round, if any.
    pub fn commitment(&self) -> Option<&BigUint> {
        self.round.as_ref().map(|round| &round.commitment)
    }

    /// Answers the challenge and closes the round, consuming the nonce: `true`
    /// reveals `(x + r) mod (p - 1)`, `false` reveals `r`.
    pub fn respond(&mut self, challenge: bool) -> Result<BigUint, ProtocolError> {
        let mut round = self
            .round
            .take()
            .ok_or(ProtocolError::ResponseBeforeCommitment)?;
        let response = if challenge {
            (&self.x + &round.r) % (&self.params.p - 1u32)
        } else {
            round.r.clone()
        };
        round.r.set_zero();
        Ok(response)
    }
}

impl Zeroize for Prover {
    fn zeroize(&mut self) {
        self.x.set_zero();
        if let Some(round) = self.round.as_mut() {
            round.r.set_zero();
        }
        self.round = None;
    }
}

impl Drop for Prover {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for Prover {}
