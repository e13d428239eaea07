//! Interactive zero knowledge proof of knowledge of a discrete log.
//!
//! A prover holding `x` with `y = g^x mod p` convinces a verifier that it
//! knows `x` without revealing it. Each round:
//! 1. Prover picks a fresh nonce `r` and sends the commitment `C = g^r mod p`.
//! 2. Verifier answers with one uniformly random challenge bit.
//! 3. On `false` the prover reveals `r`; on `true` it reveals
//!    `w = (x + r) mod (p - 1)`.
//! 4. Verifier checks `C == g^r mod p`, respectively
//!    `C * y mod p == g^w mod p`.
//!
//! A prover without `x` can prepare for only one of the two branches, so each
//! round catches it with probability 1/2 and `k` passed rounds leave the
//! verifier with confidence `1 - 2^-k`. A single failed round is definitive
//! and terminates the session as rejected.
//!
//! [`ProofSession`] wires one [`Prover`] to one [`Verifier`], enforces the
//! commit, challenge, respond order within each round and emits a
//! [`RoundRecord`] per completed round for whatever presentation layer sits on
//! top.
//!
//! `g` is used as received and is not checked to generate a large-order
//! subgroup of `Z_p^*`; the standard soundness argument assumes it does.

pub mod error;
pub mod prover;
pub mod session;
pub mod setup;
pub mod verifier;

pub use error::ProtocolError;
pub use prover::Prover;
pub use session::{ProofSession, RoundRecord, SessionOutcome, SessionStage};
pub use setup::{PublicParameters, SetupConfig};
pub use verifier::Verifier;
