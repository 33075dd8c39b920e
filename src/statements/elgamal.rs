//! Reducers for ElGamal relations: "this ciphertext encrypts `x`" and "this
//! commitment commits to `x`".

use crate::dh_tuple::DhTupleStatement;
use crate::errors::Error;
use crate::group::PrimeOrderGroup;
use crate::statements::delegate_to_engine;

/// An ElGamal ciphertext `(c1, c2) = (g^r, pk^r * x)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElGamalCiphertext<G: PrimeOrderGroup> {
    pub c1: G::Element,
    pub c2: G::Element,
}

/// Proof that an ElGamal ciphertext encrypts a known plaintext `x`.
///
/// Two witness variants exist, and the variant is part of the public
/// statement (both sides must build the same tuple):
/// - the encryption randomness `r`: `(g, pk)` against `(c1, c2 * x^-1)`,
/// - the private key `sk` with `pk = g^sk`: `(g, c1)` against `(pk, c2 * x^-1)`.
#[derive(Clone, Debug)]
pub struct ElGamalEncryptionStatement<G: PrimeOrderGroup> {
    engine: DhTupleStatement<G>,
    label: Vec<u8>,
}

impl<G: PrimeOrderGroup> ElGamalEncryptionStatement<G> {
    /// Statement for a prover holding the encryption randomness `r`.
    pub fn with_randomness(
        group: G,
        public_key: &G::Element,
        ciphertext: &ElGamalCiphertext<G>,
        plaintext: &G::Element,
        challenge_bits: usize,
    ) -> Result<Self, Error> {
        let unblinded = group.multiply(&ciphertext.c2, &group.invert(plaintext));
        let label = Self::label(&group, 0, public_key, ciphertext, plaintext);
        let engine = DhTupleStatement::new(
            group.clone(),
            vec![group.generator(), public_key.clone()],
            vec![ciphertext.c1.clone(), unblinded],
            challenge_bits,
        )?;
        Ok(Self { engine, label })
    }

    /// Statement for a prover holding the private key `sk`.
    pub fn with_private_key(
        group: G,
        public_key: &G::Element,
        ciphertext: &ElGamalCiphertext<G>,
        plaintext: &G::Element,
        challenge_bits: usize,
    ) -> Result<Self, Error> {
        let unblinded = group.multiply(&ciphertext.c2, &group.invert(plaintext));
        let label = Self::label(&group, 1, public_key, ciphertext, plaintext);
        let engine = DhTupleStatement::new(
            group.clone(),
            vec![group.generator(), ciphertext.c1.clone()],
            vec![public_key.clone(), unblinded],
            challenge_bits,
        )?;
        Ok(Self { engine, label })
    }

    /// The canonical tuple this statement reduces to.
    pub fn engine(&self) -> &DhTupleStatement<G> {
        &self.engine
    }

    fn label(
        group: &G,
        variant: u8,
        public_key: &G::Element,
        ciphertext: &ElGamalCiphertext<G>,
        plaintext: &G::Element,
    ) -> Vec<u8> {
        let mut label = Vec::new();
        label.extend_from_slice(b"elgamal-encrypted-value");
        label.push(variant);
        label.extend_from_slice(&group.element_to_bytes(public_key));
        label.extend_from_slice(&group.element_to_bytes(&ciphertext.c1));
        label.extend_from_slice(&group.element_to_bytes(&ciphertext.c2));
        label.extend_from_slice(&group.element_to_bytes(plaintext));
        label
    }
}

delegate_to_engine!(ElGamalEncryptionStatement);

/// Proof that an ElGamal commitment `(c1, c2) = (g^r, h^r * x)` commits to a
/// known value `x`, with the commitment randomness `r` as witness.
#[derive(Clone, Debug)]
pub struct ElGamalCommitmentStatement<G: PrimeOrderGroup> {
    engine: DhTupleStatement<G>,
    label: Vec<u8>,
}

impl<G: PrimeOrderGroup> ElGamalCommitmentStatement<G> {
    pub fn new(
        group: G,
        blinding_base: &G::Element,
        commitment: &ElGamalCiphertext<G>,
        value: &G::Element,
        challenge_bits: usize,
    ) -> Result<Self, Error> {
        let unblinded = group.multiply(&commitment.c2, &group.invert(value));
        let mut label = Vec::new();
        label.extend_from_slice(b"elgamal-committed-value");
        label.extend_from_slice(&group.element_to_bytes(blinding_base));
        label.extend_from_slice(&group.element_to_bytes(&commitment.c1));
        label.extend_from_slice(&group.element_to_bytes(&commitment.c2));
        label.extend_from_slice(&group.element_to_bytes(value));
        let engine = DhTupleStatement::new(
            group.clone(),
            vec![group.generator(), blinding_base.clone()],
            vec![commitment.c1.clone(), unblinded],
            challenge_bits,
        )?;
        Ok(Self { engine, label })
    }

    /// The canonical tuple this statement reduces to.
    pub fn engine(&self) -> &DhTupleStatement<G> {
        &self.engine
    }
}

delegate_to_engine!(ElGamalCommitmentStatement);
