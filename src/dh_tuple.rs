//! The generalized Diffie-Hellman tuple engine.
//!
//! This module defines [`DhTupleStatement`], the generic 3-move protocol for
//! the relation "one hidden exponent `w` satisfies `h_i = g_i^w` for every
//! base/target pair `(g_i, h_i)`". Every statement reducer in
//! [`crate::statements`] rewrites its domain relation into this form and
//! delegates here; none of them re-implements the 3-move algebra.

use num_bigint::BigUint;
use rand::{CryptoRng, Rng};
use tracing::instrument;

use crate::errors::Error;
use crate::group::PrimeOrderGroup;
use crate::messages::{Challenge, ProtocolMessage};
use crate::traits::{SigmaProtocol, SigmaProtocolSimulator};

/// A generalized DH-tuple statement: bases `g_1..g_m`, targets `h_1..h_m`,
/// and a claim of knowledge of one `w` with `h_i = g_i^w` for all `i`.
#[derive(Clone, Debug)]
pub struct DhTupleStatement<G: PrimeOrderGroup> {
    group: G,
    bases: Vec<G::Element>,
    targets: Vec<G::Element>,
    challenge_bits: usize,
}

/// The single-use session state between the prover's two messages: the nonce
/// `r` sampled in `prover_commit` plus the witness, consumed by value in
/// `prover_response` so a nonce can never serve two challenges.
#[derive(Debug)]
pub struct DhProverState {
    nonce: BigUint,
    witness: BigUint,
}

impl<G: PrimeOrderGroup> DhTupleStatement<G> {
    /// Builds a statement over the given base/target pairs.
    ///
    /// # Errors
    /// [`Error::InvalidInput`] if the pair lists are empty or of unequal
    /// length, or if `challenge_bits` is zero or not a multiple of 8.
    pub fn new(
        group: G,
        bases: Vec<G::Element>,
        targets: Vec<G::Element>,
        challenge_bits: usize,
    ) -> Result<Self, Error> {
        if bases.is_empty() || bases.len() != targets.len() {
            return Err(Error::invalid_input(
                "a DH tuple needs equally many bases and targets, at least one pair",
            ));
        }
        if challenge_bits == 0 || challenge_bits % 8 != 0 {
            return Err(Error::invalid_input(
                "soundness parameter must be a positive multiple of 8 bits",
            ));
        }
        Ok(Self {
            group,
            bases,
            targets,
            challenge_bits,
        })
    }

    /// The underlying group.
    pub fn group(&self) -> &G {
        &self.group
    }

    /// The base elements `g_1..g_m`.
    pub fn bases(&self) -> &[G::Element] {
        &self.bases
    }

    /// The target elements `h_1..h_m`.
    pub fn targets(&self) -> &[G::Element] {
        &self.targets
    }

    fn check_challenge(&self, challenge: &Challenge) -> Result<(), Error> {
        if challenge.bit_len() != self.challenge_bits {
            return Err(Error::cheat(format!(
                "challenge is {} bits, protocol expects {}",
                challenge.bit_len(),
                self.challenge_bits
            )));
        }
        Ok(())
    }
}

impl<G: PrimeOrderGroup> SigmaProtocol for DhTupleStatement<G> {
    type Commitment = Vec<G::Element>;
    type ProverState = DhProverState;
    type Response = BigUint;
    type Witness = BigUint;

    fn challenge_bits(&self) -> usize {
        self.challenge_bits
    }

    /// Prover's first message: samples a nonce `r` uniformly from `[0, q)`
    /// and commits with `a_i = g_i^r` for every base.
    #[instrument(skip(self, witness, rng), fields(pairs = self.bases.len()))]
    fn prover_commit<R: Rng + CryptoRng>(
        &self,
        witness: &Self::Witness,
        rng: &mut R,
    ) -> Result<(Self::Commitment, Self::ProverState), Error> {
        if witness >= self.group.order() {
            return Err(Error::invalid_input("witness exponent not reduced modulo q"));
        }
        let nonce = self.group.random_scalar(rng);
        let commitment = self
            .bases
            .iter()
            .map(|base| self.group.exponentiate(base, &nonce))
            .collect();
        Ok((
            commitment,
            DhProverState {
                nonce,
                witness: witness.clone(),
            },
        ))
    }

    /// Prover's second message: `z = (r + e * w) mod q`, with the challenge
    /// interpreted as a big-endian integer.
    fn prover_response(
        &self,
        state: Self::ProverState,
        challenge: &Challenge,
    ) -> Result<Self::Response, Error> {
        self.check_challenge(challenge)?;
        let e = challenge.to_biguint();
        Ok((state.nonce + e * state.witness) % self.group.order())
    }

    /// Checks `a_i * h_i^e == g_i^z` for every pair; all must hold.
    #[instrument(skip_all, fields(pairs = self.bases.len()))]
    fn verifier(
        &self,
        commitment: &Self::Commitment,
        challenge: &Challenge,
        response: &Self::Response,
    ) -> Result<(), Error> {
        self.check_challenge(challenge)?;
        if commitment.len() != self.bases.len() {
            return Err(Error::invalid_input(format!(
                "commitment carries {} elements, statement has {} pairs",
                commitment.len(),
                self.bases.len()
            )));
        }
        let e = challenge.to_biguint();
        let all_hold = self
            .bases
            .iter()
            .zip(&self.targets)
            .zip(commitment)
            .all(|((base, target), a)| {
                let lhs = self.group.multiply(a, &self.group.exponentiate(target, &e));
                let rhs = self.group.exponentiate(base, response);
                lhs == rhs
            });
        if all_hold {
            Ok(())
        } else {
            Err(Error::VerificationFailure)
        }
    }

    fn commitment_to_message(&self, commitment: &Self::Commitment) -> ProtocolMessage {
        ProtocolMessage::First {
            elements: commitment
                .iter()
                .map(|element| self.group.element_to_bytes(element))
                .collect(),
        }
    }

    fn commitment_from_message(&self, message: &ProtocolMessage) -> Result<Self::Commitment, Error> {
        let ProtocolMessage::First { elements } = message else {
            return Err(Error::invalid_input("expected a first message"));
        };
        if elements.len() != self.bases.len() {
            return Err(Error::invalid_input(format!(
                "first message carries {} elements, statement has {} pairs",
                elements.len(),
                self.bases.len()
            )));
        }
        elements
            .iter()
            .map(|bytes| self.group.element_from_bytes(bytes))
            .collect()
    }

    fn response_to_message(&self, response: &Self::Response) -> ProtocolMessage {
        ProtocolMessage::Second {
            scalar: response.to_bytes_be(),
        }
    }

    fn response_from_message(&self, message: &ProtocolMessage) -> Result<Self::Response, Error> {
        let ProtocolMessage::Second { scalar } = message else {
            return Err(Error::invalid_input("expected a second message"));
        };
        let z = BigUint::from_bytes_be(scalar);
        // The scalar comes from the counterparty, so an out-of-range value is
        // a protocol violation, not a local mistake.
        if &z >= self.group.order() {
            return Err(Error::cheat("response scalar not reduced modulo q"));
        }
        Ok(z)
    }

    fn instance_label(&self) -> Vec<u8> {
        let mut label = Vec::new();
        label.extend_from_slice(b"dh-tuple");
        label.extend_from_slice(&(self.bases.len() as u32).to_be_bytes());
        for (base, target) in self.bases.iter().zip(&self.targets) {
            label.extend_from_slice(&self.group.element_to_bytes(base));
            label.extend_from_slice(&self.group.element_to_bytes(target));
        }
        label
    }
}

impl<G: PrimeOrderGroup> SigmaProtocolSimulator for DhTupleStatement<G> {
    /// A simulated response is a uniform scalar in `[0, q)`, matching the
    /// distribution of honest responses.
    fn simulate_response<R: Rng + CryptoRng>(&self, rng: &mut R) -> Self::Response {
        self.group.random_scalar(rng)
    }

    /// Solves the verification equation for the commitment:
    /// `a_i = g_i^z * h_i^(-e)`. This is what makes transcripts simulatable
    /// without the witness for any chosen challenge.
    fn simulate_commitment(
        &self,
        challenge: &Challenge,
        response: &Self::Response,
    ) -> Result<Self::Commitment, Error> {
        self.check_challenge(challenge)?;
        let e = challenge.to_biguint();
        let commitment = self
            .bases
            .iter()
            .zip(&self.targets)
            .map(|(base, target)| {
                let g_z = self.group.exponentiate(base, response);
                let h_e_inv = self.group.invert(&self.group.exponentiate(target, &e));
                self.group.multiply(&g_z, &h_e_inv)
            })
            .collect();
        Ok(commitment)
    }
}
