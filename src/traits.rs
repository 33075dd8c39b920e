//! Generic interface for 3-message Sigma protocols.
//!
//! This module defines the [`SigmaProtocol`] and [`SigmaProtocolSimulator`]
//! traits, used to describe interactive zero-knowledge proofs of knowledge
//! that follow the 3-message commitment/challenge/response structure.

use rand::{CryptoRng, Rng};

use crate::errors::Error;
use crate::messages::{Challenge, ProtocolMessage};

/// A trait defining the behavior of a generic Sigma protocol.
///
/// A Sigma protocol is a 3-message proof protocol where a prover can convince
/// a verifier of knowledge of a witness for a given public statement without
/// revealing the witness.
///
/// ## Associated Types
/// - `Commitment`: The prover's initial commitment (the "a" message).
/// - `ProverState`: The prover's internal state needed to compute a response.
/// - `Response`: The prover's response to a verifier's challenge (the "z" message).
/// - `Witness`: The prover's secret knowledge.
///
/// Challenges are byte strings of exactly `challenge_bits() / 8` bytes; the
/// soundness parameter is fixed per instance at construction time and must be
/// a positive multiple of 8.
///
/// `ProverState` is taken by value in [`SigmaProtocol::prover_response`], so
/// the randomness sampled in [`SigmaProtocol::prover_commit`] can be consumed
/// exactly once; reusing it across statements is a type-level impossibility.
///
/// ## Wire conversion
/// Implementors convert their commitment and response types to and from
/// [`ProtocolMessage`] so that generic transports and transforms can carry
/// them without knowing the concrete protocol.
pub trait SigmaProtocol {
    type Commitment;
    type ProverState;
    type Response;
    type Witness;

    /// The soundness parameter `t` in bits. Cheating probability is about `2^-t`.
    fn challenge_bits(&self) -> usize;

    /// First step of the protocol. Given the witness and RNG, this generates:
    /// - A public commitment to send to the verifier.
    /// - The internal state to use when computing the response.
    fn prover_commit<R: Rng + CryptoRng>(
        &self,
        witness: &Self::Witness,
        rng: &mut R,
    ) -> Result<(Self::Commitment, Self::ProverState), Error>;

    /// Computes the prover's response to a challenge based on the prover state.
    ///
    /// # Errors
    /// [`Error::CheatAttempt`] if the challenge length is not `challenge_bits() / 8` bytes.
    fn prover_response(
        &self,
        state: Self::ProverState,
        challenge: &Challenge,
    ) -> Result<Self::Response, Error>;

    /// Final step of the protocol: checks that the commitment, challenge, and
    /// response form a valid transcript.
    ///
    /// Returns `Ok(())` if the transcript is valid, and
    /// [`Error::VerificationFailure`] if the statement does not hold.
    fn verifier(
        &self,
        commitment: &Self::Commitment,
        challenge: &Challenge,
        response: &Self::Response,
    ) -> Result<(), Error>;

    /// Encodes a commitment as a wire message.
    fn commitment_to_message(&self, commitment: &Self::Commitment) -> ProtocolMessage;

    /// Decodes a commitment from a wire message.
    fn commitment_from_message(&self, message: &ProtocolMessage) -> Result<Self::Commitment, Error>;

    /// Encodes a response as a wire message.
    fn response_to_message(&self, response: &Self::Response) -> ProtocolMessage;

    /// Decodes a response from a wire message.
    fn response_from_message(&self, message: &ProtocolMessage) -> Result<Self::Response, Error>;

    /// Bytes binding this statement instance, used for Fiat-Shamir hashing.
    ///
    /// Two instances over different public inputs must produce different
    /// labels; the same instance must produce identical labels on the prover
    /// and verifier sides.
    fn instance_label(&self) -> Vec<u8>;
}

/// A trait defining the behavior of a Sigma protocol for which simulation of
/// transcripts is necessary.
///
/// Every Sigma protocol here can be simulated; this is what makes the
/// protocols honest-verifier zero knowledge, and OR composition requires
/// simulation during actual proof generation.
pub trait SigmaProtocolSimulator: SigmaProtocol {
    /// Generates a random response (e.g. for simulation or OR composition).
    fn simulate_response<R: Rng + CryptoRng>(&self, rng: &mut R) -> Self::Response;

    /// Computes the unique commitment for which `(commitment, challenge,
    /// response)` is a valid transcript.
    fn simulate_commitment(
        &self,
        challenge: &Challenge,
        response: &Self::Response,
    ) -> Result<Self::Commitment, Error>;

    /// Generates a full simulated transcript under a freshly sampled
    /// challenge, without knowledge of a witness.
    fn simulate_transcript<R: Rng + CryptoRng>(
        &self,
        rng: &mut R,
    ) -> Result<(Self::Commitment, Challenge, Self::Response), Error> {
        let challenge = Challenge::sample(self.challenge_bits(), rng)?;
        let response = self.simulate_response(rng);
        let commitment = self.simulate_commitment(&challenge, &response)?;
        Ok((commitment, challenge, response))
    }
}
