//! Protocol composition.
//!
//! [`AndComposition`] proves a conjunction of statements under one shared
//! challenge: the verifier's challenge is broadcast verbatim to every
//! sub-protocol, and the composite transcript verifies iff every component
//! transcript verifies. Reusing the identical challenge is what makes the
//! composite simulator sound; a per-component challenge would break it.
//!
//! [`OrComposition`] proves a disjunction of two statements with XOR
//! challenge sharing: the prover simulates the branch it has no witness for
//! under a random sub-challenge and answers the other branch honestly, fixing
//! the honest sub-challenge only after the verifier's challenge arrives.
//!
//! All composed sub-protocols must share one soundness parameter `t`; this is
//! checked at construction.

use rand::{CryptoRng, Rng};

use crate::errors::Error;
use crate::messages::{Challenge, ProtocolMessage};
use crate::traits::{SigmaProtocol, SigmaProtocolSimulator};

/// An ordered conjunction of Sigma protocols of matching soundness parameter.
#[derive(Clone, Debug)]
pub struct AndComposition<P: SigmaProtocol> {
    statements: Vec<P>,
    challenge_bits: usize,
}

impl<P: SigmaProtocol> AndComposition<P> {
    /// Composes the given statements.
    ///
    /// # Errors
    /// [`Error::InvalidInput`] if the list is empty or the statements do not
    /// all share the same soundness parameter.
    pub fn new(statements: Vec<P>) -> Result<Self, Error> {
        let challenge_bits = statements
            .first()
            .ok_or_else(|| Error::invalid_input("an AND composition needs at least one statement"))?
            .challenge_bits();
        if let Some(odd) = statements
            .iter()
            .find(|s| s.challenge_bits() != challenge_bits)
        {
            return Err(Error::invalid_input(format!(
                "mismatched soundness parameters in AND composition: {} vs {}",
                challenge_bits,
                odd.challenge_bits()
            )));
        }
        Ok(Self {
            statements,
            challenge_bits,
        })
    }

    /// The number of composed sub-statements.
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Whether the composition is empty (it never is; `new` rejects that).
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    fn check_arity<T>(&self, items: &[T], what: &str) -> Result<(), Error> {
        if items.len() != self.statements.len() {
            return Err(Error::invalid_input(format!(
                "{what} arity {} does not match composition arity {}",
                items.len(),
                self.statements.len()
            )));
        }
        Ok(())
    }

    fn composite_parts<'m>(
        &self,
        message: &'m ProtocolMessage,
    ) -> Result<&'m [ProtocolMessage], Error> {
        let ProtocolMessage::Composite { parts } = message else {
            return Err(Error::invalid_input("expected a composite message"));
        };
        self.check_arity(parts, "composite message")?;
        Ok(parts)
    }
}

impl<P: SigmaProtocol> SigmaProtocol for AndComposition<P> {
    type Commitment = Vec<P::Commitment>;
    type ProverState = Vec<P::ProverState>;
    type Response = Vec<P::Response>;
    type Witness = Vec<P::Witness>;

    fn challenge_bits(&self) -> usize {
        self.challenge_bits
    }

    fn prover_commit<R: Rng + CryptoRng>(
        &self,
        witness: &Self::Witness,
        rng: &mut R,
    ) -> Result<(Self::Commitment, Self::ProverState), Error> {
        self.check_arity(witness, "witness")?;
        let mut commitments = Vec::with_capacity(self.statements.len());
        let mut states = Vec::with_capacity(self.statements.len());
        for (statement, witness) in self.statements.iter().zip(witness) {
            let (commitment, state) = statement.prover_commit(witness, rng)?;
            commitments.push(commitment);
            states.push(state);
        }
        Ok((commitments, states))
    }

    /// Broadcasts the same challenge, unmodified, to every sub-prover.
    fn prover_response(
        &self,
        state: Self::ProverState,
        challenge: &Challenge,
    ) -> Result<Self::Response, Error> {
        self.check_arity(&state, "prover state")?;
        self.statements
            .iter()
            .zip(state)
            .map(|(statement, state)| statement.prover_response(state, challenge))
            .collect()
    }

    fn verifier(
        &self,
        commitment: &Self::Commitment,
        challenge: &Challenge,
        response: &Self::Response,
    ) -> Result<(), Error> {
        self.check_arity(commitment, "commitment")?;
        self.check_arity(response, "response")?;
        self.statements
            .iter()
            .zip(commitment)
            .zip(response)
            .try_for_each(|((statement, commitment), response)| {
                statement.verifier(commitment, challenge, response)
            })
    }

    fn commitment_to_message(&self, commitment: &Self::Commitment) -> ProtocolMessage {
        ProtocolMessage::Composite {
            parts: self
                .statements
                .iter()
                .zip(commitment)
                .map(|(statement, commitment)| statement.commitment_to_message(commitment))
                .collect(),
        }
    }

    fn commitment_from_message(&self, message: &ProtocolMessage) -> Result<Self::Commitment, Error> {
        let parts = self.composite_parts(message)?;
        self.statements
            .iter()
            .zip(parts)
            .map(|(statement, part)| statement.commitment_from_message(part))
            .collect()
    }

    fn response_to_message(&self, response: &Self::Response) -> ProtocolMessage {
        ProtocolMessage::Composite {
            parts: self
                .statements
                .iter()
                .zip(response)
                .map(|(statement, response)| statement.response_to_message(response))
                .collect(),
        }
    }

    fn response_from_message(&self, message: &ProtocolMessage) -> Result<Self::Response, Error> {
        let parts = self.composite_parts(message)?;
        self.statements
            .iter()
            .zip(parts)
            .map(|(statement, part)| statement.response_from_message(part))
            .collect()
    }

    fn instance_label(&self) -> Vec<u8> {
        let mut label = Vec::new();
        label.extend_from_slice(b"and");
        label.extend_from_slice(&(self.statements.len() as u32).to_be_bytes());
        for statement in &self.statements {
            let sub = statement.instance_label();
            label.extend_from_slice(&(sub.len() as u32).to_be_bytes());
            label.extend_from_slice(&sub);
        }
        label
    }
}

impl<P: SigmaProtocolSimulator> SigmaProtocolSimulator for AndComposition<P> {
    fn simulate_response<R: Rng + CryptoRng>(&self, rng: &mut R) -> Self::Response {
        self.statements
            .iter()
            .map(|statement| statement.simulate_response(rng))
            .collect()
    }

    /// Simulates every sub-statement under the identical challenge. The
    /// composite transcript is indistinguishable only because the challenge
    /// is reused verbatim by every sub-simulator.
    fn simulate_commitment(
        &self,
        challenge: &Challenge,
        response: &Self::Response,
    ) -> Result<Self::Commitment, Error> {
        self.check_arity(response, "response")?;
        self.statements
            .iter()
            .zip(response)
            .map(|(statement, response)| statement.simulate_commitment(challenge, response))
            .collect()
    }
}

/// Which branch of an [`OrComposition`] the prover actually knows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrBranch {
    Left,
    Right,
}

/// Witness for an [`OrComposition`]: the branch the prover knows and that
/// branch's witness.
#[derive(Clone, Debug)]
pub struct OrWitness<P: SigmaProtocol> {
    pub branch: OrBranch,
    pub witness: P::Witness,
}

/// Prover state for an [`OrComposition`]: the honest branch's session state
/// and the simulated transcript of the other branch.
pub struct OrProverState<P: SigmaProtocol> {
    branch: OrBranch,
    honest: P::ProverState,
    simulated_challenge: Challenge,
    simulated_response: P::Response,
}

/// Response of an [`OrComposition`]. Only the left sub-challenge travels;
/// the right one is recomputed as `e XOR left_challenge`.
#[derive(Clone, Debug)]
pub struct OrResponse<P: SigmaProtocol> {
    pub left_challenge: Challenge,
    pub left: P::Response,
    pub right: P::Response,
}

/// A disjunction of exactly two Sigma protocols with XOR challenge sharing.
#[derive(Clone, Debug)]
pub struct OrComposition<P: SigmaProtocolSimulator> {
    left: P,
    right: P,
    challenge_bits: usize,
}

impl<P: SigmaProtocolSimulator> OrComposition<P> {
    /// Composes two statements.
    ///
    /// # Errors
    /// [`Error::InvalidInput`] if the soundness parameters differ.
    pub fn new(left: P, right: P) -> Result<Self, Error> {
        if left.challenge_bits() != right.challenge_bits() {
            return Err(Error::invalid_input(format!(
                "mismatched soundness parameters in OR composition: {} vs {}",
                left.challenge_bits(),
                right.challenge_bits()
            )));
        }
        let challenge_bits = left.challenge_bits();
        Ok(Self {
            left,
            right,
            challenge_bits,
        })
    }
}

impl<P: SigmaProtocolSimulator> SigmaProtocol for OrComposition<P> {
    type Commitment = (P::Commitment, P::Commitment);
    type ProverState = OrProverState<P>;
    type Response = OrResponse<P>;
    type Witness = OrWitness<P>;

    fn challenge_bits(&self) -> usize {
        self.challenge_bits
    }

    fn prover_commit<R: Rng + CryptoRng>(
        &self,
        witness: &Self::Witness,
        rng: &mut R,
    ) -> Result<(Self::Commitment, Self::ProverState), Error> {
        match witness.branch {
            OrBranch::Left => {
                let (honest_commitment, honest) = self.left.prover_commit(&witness.witness, rng)?;
                let (sim_commitment, sim_challenge, sim_response) =
                    self.right.simulate_transcript(rng)?;
                Ok((
                    (honest_commitment, sim_commitment),
                    OrProverState {
                        branch: OrBranch::Left,
                        honest,
                        simulated_challenge: sim_challenge,
                        simulated_response: sim_response,
                    },
                ))
            }
            OrBranch::Right => {
                let (honest_commitment, honest) = self.right.prover_commit(&witness.witness, rng)?;
                let (sim_commitment, sim_challenge, sim_response) =
                    self.left.simulate_transcript(rng)?;
                Ok((
                    (sim_commitment, honest_commitment),
                    OrProverState {
                        branch: OrBranch::Right,
                        honest,
                        simulated_challenge: sim_challenge,
                        simulated_response: sim_response,
                    },
                ))
            }
        }
    }

    fn prover_response(
        &self,
        state: Self::ProverState,
        challenge: &Challenge,
    ) -> Result<Self::Response, Error> {
        if challenge.bit_len() != self.challenge_bits {
            return Err(Error::cheat(format!(
                "challenge is {} bits, protocol expects {}",
                challenge.bit_len(),
                self.challenge_bits
            )));
        }
        let honest_challenge = challenge.xor(&state.simulated_challenge)?;
        match state.branch {
            OrBranch::Left => {
                let left = self.left.prover_response(state.honest, &honest_challenge)?;
                Ok(OrResponse {
                    left_challenge: honest_challenge,
                    left,
                    right: state.simulated_response,
                })
            }
            OrBranch::Right => {
                let right = self.right.prover_response(state.honest, &honest_challenge)?;
                Ok(OrResponse {
                    left_challenge: state.simulated_challenge,
                    left: state.simulated_response,
                    right,
                })
            }
        }
    }

    fn verifier(
        &self,
        commitment: &Self::Commitment,
        challenge: &Challenge,
        response: &Self::Response,
    ) -> Result<(), Error> {
        let right_challenge = challenge.xor(&response.left_challenge)?;
        self.left
            .verifier(&commitment.0, &response.left_challenge, &response.left)?;
        self.right
            .verifier(&commitment.1, &right_challenge, &response.right)
    }

    fn commitment_to_message(&self, commitment: &Self::Commitment) -> ProtocolMessage {
        ProtocolMessage::Composite {
            parts: vec![
                self.left.commitment_to_message(&commitment.0),
                self.right.commitment_to_message(&commitment.1),
            ],
        }
    }

    fn commitment_from_message(&self, message: &ProtocolMessage) -> Result<Self::Commitment, Error> {
        let ProtocolMessage::Composite { parts } = message else {
            return Err(Error::invalid_input("expected a composite message"));
        };
        let [left, right] = parts.as_slice() else {
            return Err(Error::invalid_input(
                "an OR commitment carries exactly two parts",
            ));
        };
        Ok((
            self.left.commitment_from_message(left)?,
            self.right.commitment_from_message(right)?,
        ))
    }

    fn response_to_message(&self, response: &Self::Response) -> ProtocolMessage {
        ProtocolMessage::Composite {
            parts: vec![
                ProtocolMessage::Second {
                    scalar: response.left_challenge.as_bytes().to_vec(),
                },
                self.left.response_to_message(&response.left),
                self.right.response_to_message(&response.right),
            ],
        }
    }

    fn response_from_message(&self, message: &ProtocolMessage) -> Result<Self::Response, Error> {
        let ProtocolMessage::Composite { parts } = message else {
            return Err(Error::invalid_input("expected a composite message"));
        };
        let [challenge_part, left, right] = parts.as_slice() else {
            return Err(Error::invalid_input(
                "an OR response carries exactly three parts",
            ));
        };
        let ProtocolMessage::Second { scalar } = challenge_part else {
            return Err(Error::invalid_input(
                "an OR response starts with the left sub-challenge",
            ));
        };
        if scalar.len() * 8 != self.challenge_bits {
            return Err(Error::cheat(format!(
                "sub-challenge is {} bits, protocol expects {}",
                scalar.len() * 8,
                self.challenge_bits
            )));
        }
        Ok(OrResponse {
            left_challenge: Challenge::from_bytes(scalar.clone()),
            left: self.left.response_from_message(left)?,
            right: self.right.response_from_message(right)?,
        })
    }

    fn instance_label(&self) -> Vec<u8> {
        let mut label = Vec::new();
        label.extend_from_slice(b"or");
        for sub in [self.left.instance_label(), self.right.instance_label()] {
            label.extend_from_slice(&(sub.len() as u32).to_be_bytes());
            label.extend_from_slice(&sub);
        }
        label
    }
}

impl<P: SigmaProtocolSimulator> SigmaProtocolSimulator for OrComposition<P> {
    fn simulate_response<R: Rng + CryptoRng>(&self, rng: &mut R) -> Self::Response {
        let mut bytes = vec![0u8; self.challenge_bits / 8];
        rng.fill_bytes(&mut bytes);
        let left_challenge = Challenge::from_bytes(bytes);
        OrResponse {
            left_challenge,
            left: self.left.simulate_response(rng),
            right: self.right.simulate_response(rng),
        }
    }

    fn simulate_commitment(
        &self,
        challenge: &Challenge,
        response: &Self::Response,
    ) -> Result<Self::Commitment, Error> {
        let right_challenge = challenge.xor(&response.left_challenge)?;
        Ok((
            self.left
                .simulate_commitment(&response.left_challenge, &response.left)?,
            self.right
                .simulate_commitment(&right_challenge, &response.right)?,
        ))
    }
}
