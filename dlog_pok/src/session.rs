//! Orchestration of the round loop between one prover and one verifier.

use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{error::ProtocolError, prover::Prover, verifier::Verifier};

/// Position inside the current round. Each round walks
/// `AwaitCommitment -> AwaitChallenge -> AwaitResponse`; the response
/// transition settles the round and either re-enters `AwaitCommitment` for the
/// next one or terminates the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStage {
    AwaitCommitment,
    AwaitChallenge,
    AwaitResponse,
    Terminated,
}

/// Everything exchanged in one completed round, for consumption by a
/// presentation layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round: u32,
    pub commitment: BigUint,
    pub challenge: bool,
    pub response: BigUint,
    pub verdict: bool,
    pub confidence: f64,
}

/// Terminal result of a session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SessionOutcome {
    Accepted { confidence: f64 },
    Rejected,
}

/// Drives the rounds, moving each message between the parties in order. The
/// prover and verifier share no state beyond the values passed here.
pub struct ProofSession {
    prover: Prover,
    verifier: Verifier,
    rounds: u32,
    round: u32,
    stage: SessionStage,
    pending_commitment: Option<BigUint>,
    pending_challenge: Option<bool>,
    records: Vec<RoundRecord>,
    outcome: Option<SessionOutcome>,
}

impl ProofSession {
    pub fn new(prover: Prover, verifier: Verifier, rounds: u32) -> Result<Self, ProtocolError> {
        if rounds == 0 {
            return Err(ProtocolError::ZeroRounds);
        }
        Ok(Self {
            prover,
            verifier,
            rounds,
            round: 1,
            stage: SessionStage::AwaitCommitment,
            pending_commitment: None,
            pending_challenge: None,
            records: Vec::with_capacity(rounds as usize),
            outcome: None,
        })
    }

    fn expect_stage(
        &self,
        operation: &'static str,
        stage: SessionStage,
    ) -> Result<(), ProtocolError> {
        if self.stage == stage {
            Ok(())
        } else {
            Err(ProtocolError::ProtocolViolation {
                operation,
                stage: self.stage,
            })
        }
    }

    /// Opens the round: obtains the prover's commitment and forwards it to the
    /// verifier.
    pub fn commit<R: RngCore + CryptoRng>(&mut self, rng: &mut R) -> Result<BigUint, ProtocolError> {
        self.expect_stage("commit", SessionStage::AwaitCommitment)?;
        let commitment = self.prover.begin_round(rng)?;
        self.verifier.receive_commitment(commitment.clone())?;
        debug!(round = self.round, "commitment forwarded to verifier");
        self.pending_commitment = Some(commitment.clone());
        self.stage = SessionStage::AwaitChallenge;
        Ok(commitment)
    }

    /// Obtains the verifier's challenge bit; [`Self::respond`] hands it to the
    /// prover.
    pub fn challenge<R: RngCore + CryptoRng>(&mut self, rng: &mut R) -> Result<bool, ProtocolError> {
        self.expect_stage("challenge", SessionStage::AwaitChallenge)?;
        let bit = self.verifier.issue_challenge(rng)?;
        debug!(round = self.round, challenge = bit, "challenge issued");
        self.pending_challenge = Some(bit);
        self.stage = SessionStage::AwaitResponse;
        Ok(bit)
    }

    /// Collects the prover's response, has the verifier check it and settles
    /// the round: a pass moves to the next round (or accepts after the final
    /// one), a failure terminates the session as rejected.
    pub fn respond(&mut self) -> Result<RoundRecord, ProtocolError> {
        self.expect_stage("respond", SessionStage::AwaitResponse)?;
        let challenge = self
            .pending_challenge
            .take()
            .ok_or(ProtocolError::VerifyBeforeChallenge)?;
        let commitment = self
            .pending_commitment
            .take()
            .ok_or(ProtocolError::ChallengeBeforeCommitment)?;
        let response = self.prover.respond(challenge)?;
        let verdict = self.verifier.verify(&response)?;
        let confidence = self.verifier.update_confidence(verdict, self.round);
        let record = RoundRecord {
            round: self.round,
            commitment,
            challenge,
            response,
            verdict,
            confidence,
        };
        self.records.push(record.clone());
        if !verdict {
            info!(round = self.round, "session rejected");
            self.outcome = Some(SessionOutcome::Rejected);
            self.stage = SessionStage::Terminated;
        } else if self.round == self.rounds {
            info!(round = self.round, confidence, "session accepted");
            self.outcome = Some(SessionOutcome::Accepted { confidence });
            self.stage = SessionStage::Terminated;
        } else {
            self.round += 1;
            self.stage = SessionStage::AwaitCommitment;
        }
        Ok(record)
    }

    /// Runs commit, challenge, respond in order until the session terminates.
    /// A terminated session cannot be re-run.
    pub fn run<R: RngCore + CryptoRng>(
        &mut self,
        rng: &mut R,
    ) -> Result<SessionOutcome, ProtocolError> {
        loop {
            self.commit(rng)?;
            self.challenge(rng)?;
            self.respond()?;
            if let Some(outcome) = &self.outcome {
                return Ok(outcome.clone());
            }
        }
    }

    /// Transcript of completed rounds.
    pub fn records(&self) -> &[RoundRecord] {
        &self.records
    }

    pub fn stage(&self) -> SessionStage {
        self.stage
    }

    /// 1-based index of the round in progress (or the last settled round once
    /// terminated).
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn outcome(&self) -> Option<&SessionOutcome> {
        self.outcome.as_ref()
    }
}
