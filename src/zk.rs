//! Interactive zero-knowledge transform.
//!
//! Wraps any Sigma protocol with a hiding-commitment exchange so the result
//! is zero knowledge against arbitrary verifiers, not only honest ones. The
//! five steps, each one blocking message exchange:
//!
//! 1. Verifier samples a `t`-bit challenge and sends a perfectly hiding
//!    commitment to it.
//! 2. Prover sends the Sigma first message `a`, chosen while the challenge
//!    is still hidden.
//! 3. Verifier decommits, revealing the challenge.
//! 4. Prover checks the decommitment and sends the response `z`.
//! 5. Verifier runs the underlying Sigma verification.
//!
//! A bad decommitment is a [`Error::CheatAttempt`], reported separately from
//! an ordinary "statement false" [`Error::VerificationFailure`].

use rand::{CryptoRng, Rng};
use tracing::instrument;

use crate::channel::{Channel, ChannelMessage};
use crate::commitment::CommitmentScheme;
use crate::errors::Error;
use crate::messages::Challenge;
use crate::traits::SigmaProtocol;

fn expect_commitment(message: ChannelMessage) -> Result<Vec<u8>, Error> {
    match message {
        ChannelMessage::Commitment(bytes) => Ok(bytes),
        other => Err(Error::cheat(format!(
            "expected a commitment message, got {other:?}"
        ))),
    }
}

fn expect_decommitment(message: ChannelMessage) -> Result<Vec<u8>, Error> {
    match message {
        ChannelMessage::Decommitment(bytes) => Ok(bytes),
        other => Err(Error::cheat(format!(
            "expected a decommitment message, got {other:?}"
        ))),
    }
}

fn expect_protocol(message: ChannelMessage) -> Result<crate::messages::ProtocolMessage, Error> {
    match message {
        ChannelMessage::Protocol(message) => Ok(message),
        other => Err(Error::cheat(format!(
            "expected a protocol message, got {other:?}"
        ))),
    }
}

/// Prover side of the commitment-based zero-knowledge transform.
pub struct ZkProver<P, S> {
    protocol: P,
    scheme: S,
}

impl<P: SigmaProtocol, S: CommitmentScheme> ZkProver<P, S> {
    pub fn new(protocol: P, scheme: S) -> Self {
        Self { protocol, scheme }
    }

    /// Runs one proof session over `channel`.
    #[instrument(skip_all)]
    pub fn prove<C: Channel, R: Rng + CryptoRng>(
        &self,
        channel: &mut C,
        witness: &P::Witness,
        rng: &mut R,
    ) -> Result<(), Error> {
        let commitment_bytes = expect_commitment(channel.receive()?)?;
        let challenge_commitment = self.scheme.commitment_from_bytes(&commitment_bytes)?;

        let (commitment, state) = self.protocol.prover_commit(witness, rng)?;
        channel.send(ChannelMessage::Protocol(
            self.protocol.commitment_to_message(&commitment),
        ))?;

        let opening_bytes = expect_decommitment(channel.receive()?)?;
        let opening = self.scheme.opening_from_bytes(&opening_bytes)?;
        let revealed = self.scheme.open(&challenge_commitment, &opening)?;
        let challenge = Challenge::from_bytes(revealed);
        if challenge.bit_len() != self.protocol.challenge_bits() {
            return Err(Error::cheat(format!(
                "revealed challenge is {} bits, protocol expects {}",
                challenge.bit_len(),
                self.protocol.challenge_bits()
            )));
        }

        let response = self.protocol.prover_response(state, &challenge)?;
        channel.send(ChannelMessage::Protocol(
            self.protocol.response_to_message(&response),
        ))?;
        Ok(())
    }
}

/// Verifier side of the commitment-based zero-knowledge transform.
pub struct ZkVerifier<P, S> {
    protocol: P,
    scheme: S,
}

impl<P: SigmaProtocol, S: CommitmentScheme> ZkVerifier<P, S> {
    pub fn new(protocol: P, scheme: S) -> Self {
        Self { protocol, scheme }
    }

    /// Runs one verification session over `channel`. `Ok(())` means the
    /// statement was accepted.
    #[instrument(skip_all)]
    pub fn verify<C: Channel, R: Rng + CryptoRng>(
        &self,
        channel: &mut C,
        rng: &mut R,
    ) -> Result<(), Error> {
        let challenge = Challenge::sample(self.protocol.challenge_bits(), rng)?;
        let (challenge_commitment, opening) = self.scheme.commit(challenge.as_bytes(), rng)?;
        channel.send(ChannelMessage::Commitment(
            self.scheme.commitment_to_bytes(&challenge_commitment),
        ))?;

        let commitment = self
            .protocol
            .commitment_from_message(&expect_protocol(channel.receive()?)?)?;

        channel.send(ChannelMessage::Decommitment(
            self.scheme.opening_to_bytes(&opening),
        ))?;

        let response = self
            .protocol
            .response_from_message(&expect_protocol(channel.receive()?)?)?;

        self.protocol.verifier(&commitment, &challenge, &response)
    }
}
