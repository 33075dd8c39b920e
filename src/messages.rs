//! Protocol message shapes and the byte-string challenge type.
//!
//! Wire encoding proper is the transport's business; the types here derive
//! `serde` so any serializer can carry them. [`ProtocolMessage::canonical_bytes`]
//! exists because the Fiat-Shamir transform must hash a message into the same
//! bytes on both sides regardless of transport.

use num_bigint::BigUint;
use rand::{CryptoRng, Rng};
use serde::{Deserialize, Serialize};
use subtle::{Choice, ConstantTimeEq};

use crate::errors::Error;

/// A verifier challenge of exactly `t / 8` bytes, where `t` is the soundness
/// parameter of the protocol that consumes it.
///
/// The length invariant is enforced by the protocols: every protocol checks
/// incoming challenges against its own `t` and reports a mismatch as a
/// [`Error::CheatAttempt`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge(Vec<u8>);

impl Challenge {
    /// Wraps raw challenge bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Challenge(bytes.into())
    }

    /// Samples a uniform challenge of `bits / 8` bytes.
    ///
    /// # Errors
    /// [`Error::InvalidInput`] if `bits` is zero or not a multiple of 8.
    pub fn sample<R: Rng + CryptoRng>(bits: usize, rng: &mut R) -> Result<Self, Error> {
        if bits == 0 || bits % 8 != 0 {
            return Err(Error::invalid_input(
                "challenge bit length must be a positive multiple of 8",
            ));
        }
        let mut bytes = vec![0u8; bits / 8];
        rng.fill_bytes(&mut bytes);
        Ok(Challenge(bytes))
    }

    /// The challenge bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The challenge length in bits.
    pub fn bit_len(&self) -> usize {
        self.0.len() * 8
    }

    /// The challenge interpreted as a big-endian integer.
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.0)
    }

    /// Bytewise XOR of two equal-length challenges.
    ///
    /// # Errors
    /// [`Error::InvalidInput`] on length mismatch.
    pub fn xor(&self, other: &Challenge) -> Result<Challenge, Error> {
        if self.0.len() != other.0.len() {
            return Err(Error::invalid_input("cannot xor challenges of different lengths"));
        }
        Ok(Challenge(
            self.0
                .iter()
                .zip(&other.0)
                .map(|(a, b)| a ^ b)
                .collect(),
        ))
    }
}

impl ConstantTimeEq for Challenge {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

/// A tagged Sigma protocol message.
///
/// `First` carries the prover's commitment (a list of encoded group
/// elements), `Second` carries the response scalar, and `Composite` nests the
/// messages of composed sub-protocols in order. Composite arity always equals
/// the number of composed sub-statements; consumers check it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProtocolMessage {
    /// The "a" message: one encoded element per base/target pair.
    First { elements: Vec<Vec<u8>> },
    /// The "z" message: a big-endian scalar.
    Second { scalar: Vec<u8> },
    /// Ordered sub-messages of a composed protocol.
    Composite { parts: Vec<ProtocolMessage> },
}

impl ProtocolMessage {
    /// Deterministic encoding used for Fiat-Shamir hashing: a tag byte
    /// followed by u32-length-prefixed fields.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.write_canonical(&mut out);
        out
    }

    fn write_canonical(&self, out: &mut Vec<u8>) {
        match self {
            ProtocolMessage::First { elements } => {
                out.push(0);
                out.extend_from_slice(&(elements.len() as u32).to_be_bytes());
                for element in elements {
                    out.extend_from_slice(&(element.len() as u32).to_be_bytes());
                    out.extend_from_slice(element);
                }
            }
            ProtocolMessage::Second { scalar } => {
                out.push(1);
                out.extend_from_slice(&(scalar.len() as u32).to_be_bytes());
                out.extend_from_slice(scalar);
            }
            ProtocolMessage::Composite { parts } => {
                out.push(2);
                out.extend_from_slice(&(parts.len() as u32).to_be_bytes());
                for part in parts {
                    part.write_canonical(out);
                }
            }
        }
    }
}

/// A self-contained non-interactive proof: the commitment, the
/// oracle-derived challenge, and the response. No challenge round exists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiatShamirProof {
    pub commitment: ProtocolMessage,
    pub challenge: Vec<u8>,
    pub response: ProtocolMessage,
}
