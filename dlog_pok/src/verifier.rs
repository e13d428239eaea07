//! The party issuing challenges and checking responses.

use num_bigint::BigUint;
use rand::{CryptoRng, Rng, RngCore};
use tracing::warn;

use dlog_utils::modular::{mul_mod, power_mod};

use crate::{error::ProtocolError, setup::PublicParameters};

/// Holds a copy of the public parameters, the round's received commitment and
/// issued challenge, and the confidence accumulated across rounds.
pub struct Verifier {
    params: PublicParameters,
    commitment: Option<BigUint>,
    challenge: Option<bool>,
    confidence: f64,
}

impl Verifier {
    pub fn new(params: PublicParameters) -> Self {
        Self {
            params,
            commitment: None,
            challenge: None,
            confidence: 0.0,
        }
    }

    pub fn params(&self) -> &PublicParameters {
        &self.params
    }

    /// Records the prover's commitment for the round.
    pub fn receive_commitment(&mut self, commitment: BigUint) -> Result<(), ProtocolError> {
        if self.commitment.is_some() {
            return Err(ProtocolError::CommitmentAlreadyReceived);
        }
        self.commitment = Some(commitment);
        Ok(())
    }

    /// Draws the round's challenge bit. The bit must be unpredictable to the
    /// prover, hence the `CryptoRng` bound.
    pub fn issue_challenge<R: RngCore + CryptoRng>(
        &mut self,
        rng: &mut R,
    ) -> Result<bool, ProtocolError> {
        if self.commitment.is_none() {
            return Err(ProtocolError::ChallengeBeforeCommitment);
        }
        if self.challenge.is_some() {
            return Err(ProtocolError::ChallengeAlreadyIssued);
        }
        let bit = rng.gen::<bool>();
        self.challenge = Some(bit);
        Ok(bit)
    }

    /// Checks the response against the stored commitment and challenge bit,
    /// consuming both. A `true` challenge accepts iff
    /// `C * y mod p == g^response mod p`; a `false` challenge accepts iff
    /// `C == g^response mod p`.
    pub fn verify(&mut self, response: &BigUint) -> Result<bool, ProtocolError> {
        let challenge = self
            .challenge
            .take()
            .ok_or(ProtocolError::VerifyBeforeChallenge)?;
        let commitment = self
            .commitment
            .take()
            .ok_or(ProtocolError::ChallengeBeforeCommitment)?;
        let expected = power_mod(&self.params.g, response, &self.params.p)?;
        let verdict = if challenge {
            mul_mod(&commitment, &self.params.y, &self.params.p)? == expected
        } else {
            commitment == expected
        };
        Ok(verdict)
    }

    /// Folds a round verdict into the running confidence: `1 - 0.5^round` on a
    /// pass, 0 on a failure.
    pub fn update_confidence(&mut self, verdict: bool, round_number: u32) -> f64 {
        self.confidence = if verdict {
            1.0 - 0.5f64.powi(round_number as i32)
        } else {
            warn!(round = round_number, "verification failed");
            0.0
        };
        self.confidence
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }
}
