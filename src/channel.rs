//! Channel capability: blocking, ordered transport of one tagged message at
//! a time between prover and verifier.
//!
//! The core never retries: a failed send or receive aborts the proof run and
//! no partial acceptance state survives. Timeouts and retry policy belong to
//! the transport implementation.

use serde::{Deserialize, Serialize};

use crate::errors::Error;
use crate::messages::{FiatShamirProof, ProtocolMessage};

/// A tagged transport message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChannelMessage {
    /// A Sigma protocol message (first, second, or composite).
    Protocol(ProtocolMessage),
    /// An opaque commitment, encoded by the commitment scheme.
    Commitment(Vec<u8>),
    /// An opaque decommitment, encoded by the commitment scheme.
    Decommitment(Vec<u8>),
    /// A self-contained non-interactive proof.
    Proof(FiatShamirProof),
}

/// Blocking bidirectional transport. `receive` parks until the counterpart's
/// message arrives or the transport fails.
pub trait Channel {
    fn send(&mut self, message: ChannelMessage) -> Result<(), Error>;

    fn receive(&mut self) -> Result<ChannelMessage, Error>;
}
