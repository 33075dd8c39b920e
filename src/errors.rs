//! Error types for Sigma protocol execution.
//!
//! This module defines the [`Error`] enum, which enumerates the failure modes
//! of interactive and non-interactive Sigma protocol runs.
//!
//! The variants deliberately separate three situations that callers must be
//! able to tell apart:
//! - a statement that is simply false ([`Error::VerificationFailure`]),
//! - a counterparty that broke the protocol rules ([`Error::CheatAttempt`]),
//! - a transport problem ([`Error::Communication`]).

/// Represents an error encountered during the execution of a Sigma protocol.
///
/// This may occur during proof generation, response computation, or verification.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The proof is invalid: the transcript does not satisfy the relation.
    ///
    /// This is the ordinary negative outcome for an untrue statement. It is
    /// never raised for protocol-rule violations; those are [`Error::CheatAttempt`].
    #[error("verification failed")]
    VerificationFailure,

    /// A locally detectable caller mistake: wrong witness shape, arity
    /// mismatch in a composition, or mismatched soundness parameters.
    /// Not retryable without fixing the caller.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The counterparty deviated from the protocol: a challenge of the wrong
    /// length, a decommitment inconsistent with an earlier commitment, or a
    /// Fiat-Shamir challenge that does not match the oracle output.
    ///
    /// Callers may want to abort the whole session on this outcome rather
    /// than merely reject one statement.
    #[error("cheat attempt: {0}")]
    CheatAttempt(String),

    /// The channel failed. The in-progress proof is aborted and no partial
    /// acceptance state is retained.
    #[error("channel failure: {0}")]
    Communication(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Error::InvalidInput(message.into())
    }

    pub(crate) fn cheat(message: impl Into<String>) -> Self {
        Error::CheatAttempt(message.into())
    }
}
