//! Commitment scheme capability used by the interactive zero-knowledge
//! transform, plus a Pedersen implementation.
//!
//! The transform only needs the verifier to commit to its challenge before
//! seeing the prover's first message, and the prover to check the later
//! decommitment. The scheme must be perfectly hiding; binding may be merely
//! computational.

use num_bigint::BigUint;
use rand::{CryptoRng, Rng};
use sha3::{Digest, Sha3_256};

use crate::errors::Error;
use crate::group::PrimeOrderGroup;

/// An id-less commit/open scheme. `commit` returns the commitment to send
/// and the opening to reveal later; `open` is the receiver-side check and
/// yields the committed value.
pub trait CommitmentScheme {
    type Commitment;
    type Opening;

    /// Commits to `value`.
    fn commit<R: Rng + CryptoRng>(
        &self,
        value: &[u8],
        rng: &mut R,
    ) -> Result<(Self::Commitment, Self::Opening), Error>;

    /// Checks an opening against a commitment and returns the committed value.
    ///
    /// # Errors
    /// [`Error::CheatAttempt`] if the opening is inconsistent with the commitment.
    fn open(&self, commitment: &Self::Commitment, opening: &Self::Opening)
        -> Result<Vec<u8>, Error>;

    /// Opaque transport encoding of a commitment.
    fn commitment_to_bytes(&self, commitment: &Self::Commitment) -> Vec<u8>;

    /// Decodes a commitment from its transport encoding.
    fn commitment_from_bytes(&self, bytes: &[u8]) -> Result<Self::Commitment, Error>;

    /// Opaque transport encoding of an opening.
    fn opening_to_bytes(&self, opening: &Self::Opening) -> Vec<u8>;

    /// Decodes an opening from its transport encoding.
    fn opening_from_bytes(&self, bytes: &[u8]) -> Result<Self::Opening, Error>;
}

/// Pedersen commitment `g^(H(m)) * h^r` over a prime-order group: perfectly
/// hiding, computationally binding under the discrete log of `h` to base `g`
/// being unknown and the collision resistance of Sha3-256.
///
/// The committed bytes are hashed before reduction modulo `q`, so the
/// commitment binds the exact byte string: two distinct values in the same
/// residue class cannot open each other's commitments.
#[derive(Clone, Debug)]
pub struct PedersenCommitment<G: PrimeOrderGroup> {
    group: G,
    blinding_base: G::Element,
}

/// The opening of a Pedersen commitment: the committed bytes and the
/// blinding scalar.
#[derive(Clone, Debug)]
pub struct PedersenOpening {
    pub value: Vec<u8>,
    pub randomness: BigUint,
}

impl<G: PrimeOrderGroup> PedersenCommitment<G> {
    /// Creates a scheme over `group` with the given blinding base `h`.
    ///
    /// Binding holds only if nobody knows `log_g(h)`; pick `h` accordingly.
    pub fn new(group: G, blinding_base: G::Element) -> Self {
        Self {
            group,
            blinding_base,
        }
    }

    fn evaluate(&self, value: &[u8], randomness: &BigUint) -> G::Element {
        let m = BigUint::from_bytes_be(&Sha3_256::digest(value)) % self.group.order();
        let g_m = self.group.exponentiate(&self.group.generator(), &m);
        let h_r = self.group.exponentiate(&self.blinding_base, randomness);
        self.group.multiply(&g_m, &h_r)
    }
}

impl<G: PrimeOrderGroup> CommitmentScheme for PedersenCommitment<G> {
    type Commitment = G::Element;
    type Opening = PedersenOpening;

    fn commit<R: Rng + CryptoRng>(
        &self,
        value: &[u8],
        rng: &mut R,
    ) -> Result<(Self::Commitment, Self::Opening), Error> {
        let randomness = self.group.random_scalar(rng);
        let commitment = self.evaluate(value, &randomness);
        Ok((
            commitment,
            PedersenOpening {
                value: value.to_vec(),
                randomness,
            },
        ))
    }

    fn open(
        &self,
        commitment: &Self::Commitment,
        opening: &Self::Opening,
    ) -> Result<Vec<u8>, Error> {
        if &self.evaluate(&opening.value, &opening.randomness) != commitment {
            return Err(Error::cheat(
                "decommitment inconsistent with the earlier commitment",
            ));
        }
        Ok(opening.value.clone())
    }

    fn commitment_to_bytes(&self, commitment: &Self::Commitment) -> Vec<u8> {
        self.group.element_to_bytes(commitment)
    }

    fn commitment_from_bytes(&self, bytes: &[u8]) -> Result<Self::Commitment, Error> {
        self.group.element_from_bytes(bytes)
    }

    fn opening_to_bytes(&self, opening: &Self::Opening) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&(opening.value.len() as u32).to_be_bytes());
        bytes.extend_from_slice(&opening.value);
        bytes.extend_from_slice(&opening.randomness.to_bytes_be());
        bytes
    }

    fn opening_from_bytes(&self, bytes: &[u8]) -> Result<Self::Opening, Error> {
        if bytes.len() < 4 {
            return Err(Error::invalid_input("opening encoding too short"));
        }
        let value_len = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as usize;
        if bytes.len() < 4 + value_len {
            return Err(Error::invalid_input("opening encoding truncated"));
        }
        Ok(PedersenOpening {
            value: bytes[4..4 + value_len].to_vec(),
            randomness: BigUint::from_bytes_be(&bytes[4 + value_len..]),
        })
    }
}
