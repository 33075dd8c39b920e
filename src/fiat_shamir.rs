//! Fiat-Shamir transformation for [`SigmaProtocol`]s.
//!
//! This module defines [`Nizk`], a generic non-interactive wrapper that
//! derives the challenge from a random oracle over the statement, the
//! prover's first message, and an optional context string, removing the
//! challenge round entirely.

use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::Shake128;
use subtle::ConstantTimeEq;

use crate::errors::Error;
use crate::messages::{Challenge, FiatShamirProof};
use crate::traits::SigmaProtocol;

/// A random oracle: a deterministic map from arbitrary input bytes to a
/// requested number of output bytes.
pub trait RandomOracle {
    fn compute(&self, input: &[u8], output_len: usize) -> Vec<u8>;
}

/// Shake128-based random oracle.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShakeRandomOracle;

impl RandomOracle for ShakeRandomOracle {
    fn compute(&self, input: &[u8], output_len: usize) -> Vec<u8> {
        let mut xof = Shake128::default();
        xof.update(input);
        let mut out = vec![0u8; output_len];
        xof.finalize_xof().read(&mut out);
        out
    }
}

/// A Fiat-Shamir transformation of a [`SigmaProtocol`] into a non-interactive
/// proof of knowledge.
///
/// The challenge is `oracle(statement || a || context)` truncated to the
/// protocol's `t` bits. `context` is an opaque domain-separation string; an
/// absent context is the zero-length string, not a missing hash input.
#[derive(Clone, Debug)]
pub struct Nizk<P, O = ShakeRandomOracle> {
    protocol: P,
    oracle: O,
    context: Vec<u8>,
}

impl<P: SigmaProtocol> Nizk<P> {
    /// Wraps `protocol` with the built-in Shake128 oracle.
    pub fn new(protocol: P, context: &[u8]) -> Self {
        Self::with_oracle(protocol, ShakeRandomOracle, context)
    }
}

impl<P: SigmaProtocol, O: RandomOracle> Nizk<P, O> {
    /// Wraps `protocol` with a caller-supplied random oracle.
    pub fn with_oracle(protocol: P, oracle: O, context: &[u8]) -> Self {
        Self {
            protocol,
            oracle,
            context: context.to_vec(),
        }
    }

    /// The wrapped interactive protocol.
    pub fn protocol(&self) -> &P {
        &self.protocol
    }

    fn derive_challenge(&self, commitment_bytes: &[u8]) -> Challenge {
        let label = self.protocol.instance_label();
        let mut input = Vec::new();
        input.extend_from_slice(&(label.len() as u32).to_be_bytes());
        input.extend_from_slice(&label);
        input.extend_from_slice(&(commitment_bytes.len() as u32).to_be_bytes());
        input.extend_from_slice(commitment_bytes);
        input.extend_from_slice(&(self.context.len() as u32).to_be_bytes());
        input.extend_from_slice(&self.context);
        let bytes = self
            .oracle
            .compute(&input, self.protocol.challenge_bits() / 8);
        Challenge::from_bytes(bytes)
    }

    /// Produces a self-contained proof. No message round trip takes place.
    pub fn prove<R: rand::Rng + rand::CryptoRng>(
        &self,
        witness: &P::Witness,
        rng: &mut R,
    ) -> Result<FiatShamirProof, Error> {
        let (commitment, state) = self.protocol.prover_commit(witness, rng)?;
        let commitment_message = self.protocol.commitment_to_message(&commitment);
        let challenge = self.derive_challenge(&commitment_message.canonical_bytes());
        let response = self.protocol.prover_response(state, &challenge)?;
        Ok(FiatShamirProof {
            commitment: commitment_message,
            challenge: challenge.as_bytes().to_vec(),
            response: self.protocol.response_to_message(&response),
        })
    }

    /// Verifies a self-contained proof.
    ///
    /// # Errors
    /// - [`Error::CheatAttempt`] if the embedded challenge does not equal the
    ///   recomputed oracle output (length checked first, contents compared in
    ///   constant time).
    /// - [`Error::VerificationFailure`] if the transcript does not satisfy
    ///   the underlying relation.
    pub fn verify(&self, proof: &FiatShamirProof) -> Result<(), Error> {
        let commitment = self.protocol.commitment_from_message(&proof.commitment)?;
        let response = self.protocol.response_from_message(&proof.response)?;

        let expected = self.derive_challenge(&proof.commitment.canonical_bytes());
        if proof.challenge.len() != expected.as_bytes().len() {
            return Err(Error::cheat("Fiat-Shamir challenge length mismatch"));
        }
        if proof.challenge.ct_eq(expected.as_bytes()).unwrap_u8() != 1 {
            return Err(Error::cheat(
                "Fiat-Shamir challenge does not match the oracle output",
            ));
        }

        self.protocol.verifier(&commitment, &expected, &response)
    }
}
