use thiserror::Error;

use crate::session::SessionStage;
use dlog_utils::MathError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    #[error("round count must be positive")]
    ZeroRounds,
    #[error("modulus bit range {0}..{1} is invalid")]
    InvalidBitRange(u32, u32),
    #[error("modulus must be at least 5")]
    ModulusTooSmall,
    #[error("generator must lie in [2, p)")]
    GeneratorOutOfRange,
    #[error("secret must lie in [0, p - 1)")]
    SecretOutOfRange,
    #[error("a commitment was already generated for this round")]
    RoundAlreadyOpen,
    #[error("response requested before a commitment was generated")]
    ResponseBeforeCommitment,
    #[error("verifier already holds a commitment for this round")]
    CommitmentAlreadyReceived,
    #[error("challenge requested before receiving a commitment")]
    ChallengeBeforeCommitment,
    #[error("a challenge was already issued for this round")]
    ChallengeAlreadyIssued,
    #[error("verification requested before issuing a challenge")]
    VerifyBeforeChallenge,
    #[error("{operation} called while the session is in the {stage:?} stage")]
    ProtocolViolation {
        operation: &'static str,
        stage: SessionStage,
    },
    #[error(transparent)]
    Math(#[from] MathError),
}
