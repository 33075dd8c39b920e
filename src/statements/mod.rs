//! Statement reducers: adapters from concrete cryptographic relations to the
//! DH-tuple engine.
//!
//! Each reducer builds its canonical [`crate::dh_tuple::DhTupleStatement`]
//! once, at construction, as a deterministic function of the public statement
//! data, so prover, verifier, and simulator all derive byte-identical tuples.
//! Every protocol operation is forwarded to that engine; the reducers own an
//! engine instance, they are not engines themselves.

pub mod cramer_shoup;
pub mod elgamal;

pub use cramer_shoup::{CramerShoupCiphertext, CramerShoupPublicKey, CramerShoupStatement};
pub use elgamal::{ElGamalCiphertext, ElGamalCommitmentStatement, ElGamalEncryptionStatement};

/// Implements [`SigmaProtocol`] and [`SigmaProtocolSimulator`] for a reducer
/// struct with an `engine` field and a precomputed `label` field, forwarding
/// the 3-move logic wholesale to the engine.
macro_rules! delegate_to_engine {
    ($statement:ident) => {
        impl<G: $crate::group::PrimeOrderGroup> $crate::traits::SigmaProtocol for $statement<G> {
            type Commitment = Vec<G::Element>;
            type ProverState = $crate::dh_tuple::DhProverState;
            type Response = num_bigint::BigUint;
            type Witness = num_bigint::BigUint;

            fn challenge_bits(&self) -> usize {
                self.engine.challenge_bits()
            }

            fn prover_commit<R: rand::Rng + rand::CryptoRng>(
                &self,
                witness: &Self::Witness,
                rng: &mut R,
            ) -> Result<(Self::Commitment, Self::ProverState), $crate::errors::Error> {
                self.engine.prover_commit(witness, rng)
            }

            fn prover_response(
                &self,
                state: Self::ProverState,
                challenge: &$crate::messages::Challenge,
            ) -> Result<Self::Response, $crate::errors::Error> {
                self.engine.prover_response(state, challenge)
            }

            fn verifier(
                &self,
                commitment: &Self::Commitment,
                challenge: &$crate::messages::Challenge,
                response: &Self::Response,
            ) -> Result<(), $crate::errors::Error> {
                self.engine.verifier(commitment, challenge, response)
            }

            fn commitment_to_message(
                &self,
                commitment: &Self::Commitment,
            ) -> $crate::messages::ProtocolMessage {
                self.engine.commitment_to_message(commitment)
            }

            fn commitment_from_message(
                &self,
                message: &$crate::messages::ProtocolMessage,
            ) -> Result<Self::Commitment, $crate::errors::Error> {
                self.engine.commitment_from_message(message)
            }

            fn response_to_message(
                &self,
                response: &Self::Response,
            ) -> $crate::messages::ProtocolMessage {
                self.engine.response_to_message(response)
            }

            fn response_from_message(
                &self,
                message: &$crate::messages::ProtocolMessage,
            ) -> Result<Self::Response, $crate::errors::Error> {
                self.engine.response_from_message(message)
            }

            fn instance_label(&self) -> Vec<u8> {
                self.label.clone()
            }
        }

        impl<G: $crate::group::PrimeOrderGroup> $crate::traits::SigmaProtocolSimulator
            for $statement<G>
        {
            fn simulate_response<R: rand::Rng + rand::CryptoRng>(
                &self,
                rng: &mut R,
            ) -> Self::Response {
                self.engine.simulate_response(rng)
            }

            fn simulate_commitment(
                &self,
                challenge: &$crate::messages::Challenge,
                response: &Self::Response,
            ) -> Result<Self::Commitment, $crate::errors::Error> {
                self.engine.simulate_commitment(challenge, response)
            }
        }
    };
}

pub(crate) use delegate_to_engine;
