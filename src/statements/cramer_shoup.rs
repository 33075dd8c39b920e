//! Reducer for the Cramer-Shoup relation "this ciphertext encrypts `x`".

use num_bigint::BigUint;
use sha3::{Digest, Sha3_256};

use crate::dh_tuple::DhTupleStatement;
use crate::errors::Error;
use crate::group::PrimeOrderGroup;
use crate::statements::delegate_to_engine;

/// A Cramer-Shoup public key `(g1, g2, c, d, h)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CramerShoupPublicKey<G: PrimeOrderGroup> {
    pub g1: G::Element,
    pub g2: G::Element,
    pub c: G::Element,
    pub d: G::Element,
    pub h: G::Element,
}

/// A Cramer-Shoup ciphertext
/// `(u1, u2, e, v) = (g1^r, g2^r, h^r * x, (c * d^w)^r)` where
/// `w = Hash(u1 || u2 || e) mod q`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CramerShoupCiphertext<G: PrimeOrderGroup> {
    pub u1: G::Element,
    pub u2: G::Element,
    pub e: G::Element,
    pub v: G::Element,
}

impl<G: PrimeOrderGroup> CramerShoupCiphertext<G> {
    /// The binding scalar `w = Sha3-256(u1 || u2 || e) mod q`, computed from
    /// the canonical element encodings in that fixed concatenation order.
    ///
    /// Prover and verifier recompute this independently; the fixed-width
    /// encoding guarantees byte-identical hash inputs on both sides.
    pub fn binding_scalar(&self, group: &G) -> BigUint {
        let mut hasher = Sha3_256::new();
        hasher.update(group.element_to_bytes(&self.u1));
        hasher.update(group.element_to_bytes(&self.u2));
        hasher.update(group.element_to_bytes(&self.e));
        BigUint::from_bytes_be(&hasher.finalize()) % group.order()
    }
}

/// Proof that a Cramer-Shoup ciphertext encrypts a known plaintext `x`.
///
/// The witness variant is part of the public statement:
/// - encryption randomness `r`: the 4-tuple `(g1, g2, h, c * d^w)` against
///   `(u1, u2, e * x^-1, v)`,
/// - private key component `z` with `h = g1^z`: the 2-tuple `(g1, u1)`
///   against `(h, e * x^-1)`, the decryption relation for `x`.
#[derive(Clone, Debug)]
pub struct CramerShoupStatement<G: PrimeOrderGroup> {
    engine: DhTupleStatement<G>,
    label: Vec<u8>,
}

impl<G: PrimeOrderGroup> CramerShoupStatement<G> {
    /// Statement for a prover holding the encryption randomness `r`.
    pub fn with_randomness(
        group: G,
        public_key: &CramerShoupPublicKey<G>,
        ciphertext: &CramerShoupCiphertext<G>,
        plaintext: &G::Element,
        challenge_bits: usize,
    ) -> Result<Self, Error> {
        let w = ciphertext.binding_scalar(&group);
        let cd_w = group.multiply(&public_key.c, &group.exponentiate(&public_key.d, &w));
        let unblinded = group.multiply(&ciphertext.e, &group.invert(plaintext));
        let label = Self::label(&group, 0, public_key, ciphertext, plaintext);
        let engine = DhTupleStatement::new(
            group,
            vec![
                public_key.g1.clone(),
                public_key.g2.clone(),
                public_key.h.clone(),
                cd_w,
            ],
            vec![
                ciphertext.u1.clone(),
                ciphertext.u2.clone(),
                unblinded,
                ciphertext.v.clone(),
            ],
            challenge_bits,
        )?;
        Ok(Self { engine, label })
    }

    /// Statement for a prover holding the private key component `z`
    /// (`h = g1^z`, the exponent used for decryption).
    pub fn with_private_key(
        group: G,
        public_key: &CramerShoupPublicKey<G>,
        ciphertext: &CramerShoupCiphertext<G>,
        plaintext: &G::Element,
        challenge_bits: usize,
    ) -> Result<Self, Error> {
        let unblinded = group.multiply(&ciphertext.e, &group.invert(plaintext));
        let label = Self::label(&group, 1, public_key, ciphertext, plaintext);
        let engine = DhTupleStatement::new(
            group,
            vec![public_key.g1.clone(), ciphertext.u1.clone()],
            vec![public_key.h.clone(), unblinded],
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
        public_key: &CramerShoupPublicKey<G>,
        ciphertext: &CramerShoupCiphertext<G>,
        plaintext: &G::Element,
    ) -> Vec<u8> {
        let mut label = Vec::new();
        label.extend_from_slice(b"cramer-shoup-encrypted-value");
        label.push(variant);
        for element in [
            &public_key.g1,
            &public_key.g2,
            &public_key.c,
            &public_key.d,
            &public_key.h,
            &ciphertext.u1,
            &ciphertext.u2,
            &ciphertext.e,
            &ciphertext.v,
            plaintext,
        ] {
            label.extend_from_slice(&group.element_to_bytes(element));
        }
        label
    }
}

delegate_to_engine!(CramerShoupStatement);
