//! Definitions used in tests for this crate.

use std::sync::mpsc::{Receiver, Sender};

use num_bigint::BigUint;
use rand::{CryptoRng, Rng};

use crate::channel::{Channel, ChannelMessage};
use crate::errors::Error;
use crate::group::{PrimeOrderGroup, SchnorrGroup};
use crate::statements::{CramerShoupCiphertext, CramerShoupPublicKey, ElGamalCiphertext};

/// A small Schnorr group for tests: p = 10007, q = 5003 (both prime,
/// p = 2q + 1), generator 4 of the order-q subgroup of squares.
pub fn test_group() -> SchnorrGroup {
    SchnorrGroup::new(
        BigUint::from(10007u32),
        BigUint::from(5003u32),
        BigUint::from(4u32),
    )
    .unwrap()
}

/// The degenerate toy group from the classic worked example: arithmetic
/// modulo 23 with generator 5.
pub fn toy_group() -> SchnorrGroup {
    SchnorrGroup::new(
        BigUint::from(23u32),
        BigUint::from(23u32),
        BigUint::from(5u32),
    )
    .unwrap()
}

/// ElGamal-encrypts `plaintext` under `public_key`, returning the ciphertext
/// and the encryption randomness.
pub fn elgamal_encrypt<G: PrimeOrderGroup, R: Rng + CryptoRng>(
    group: &G,
    public_key: &G::Element,
    plaintext: &G::Element,
    rng: &mut R,
) -> (ElGamalCiphertext<G>, BigUint) {
    let r = group.random_scalar(rng);
    let c1 = group.exponentiate(&group.generator(), &r);
    let c2 = group.multiply(&group.exponentiate(public_key, &r), plaintext);
    (ElGamalCiphertext { c1, c2 }, r)
}

/// Generates a Cramer-Shoup key pair, returning the public key and the
/// private exponents `(x1, x2, y1, y2, z)`.
pub fn cramer_shoup_keygen<G: PrimeOrderGroup, R: Rng + CryptoRng>(
    group: &G,
    rng: &mut R,
) -> (CramerShoupPublicKey<G>, [BigUint; 5]) {
    let g1 = group.generator();
    let g2 = group.exponentiate(&g1, &group.random_scalar(rng));
    let x1 = group.random_scalar(rng);
    let x2 = group.random_scalar(rng);
    let y1 = group.random_scalar(rng);
    let y2 = group.random_scalar(rng);
    let z = group.random_scalar(rng);
    let c = group.multiply(&group.exponentiate(&g1, &x1), &group.exponentiate(&g2, &x2));
    let d = group.multiply(&group.exponentiate(&g1, &y1), &group.exponentiate(&g2, &y2));
    let h = group.exponentiate(&g1, &z);
    (
        CramerShoupPublicKey { g1, g2, c, d, h },
        [x1, x2, y1, y2, z],
    )
}

/// Cramer-Shoup-encrypts `plaintext`, returning the ciphertext and the
/// encryption randomness.
pub fn cramer_shoup_encrypt<G: PrimeOrderGroup, R: Rng + CryptoRng>(
    group: &G,
    public_key: &CramerShoupPublicKey<G>,
    plaintext: &G::Element,
    rng: &mut R,
) -> (CramerShoupCiphertext<G>, BigUint) {
    let r = group.random_scalar(rng);
    let u1 = group.exponentiate(&public_key.g1, &r);
    let u2 = group.exponentiate(&public_key.g2, &r);
    let e = group.multiply(&group.exponentiate(&public_key.h, &r), plaintext);
    let partial = CramerShoupCiphertext {
        u1: u1.clone(),
        u2: u2.clone(),
        e: e.clone(),
        // v is not part of the binding scalar; any placeholder works here.
        v: u1.clone(),
    };
    let w = partial.binding_scalar(group);
    let cd_w = group.multiply(&public_key.c, &group.exponentiate(&public_key.d, &w));
    let v = group.exponentiate(&cd_w, &r);
    (CramerShoupCiphertext { u1, u2, e, v }, r)
}

/// One endpoint of an in-process blocking channel pair.
pub struct LocalChannel {
    sender: Sender<ChannelMessage>,
    receiver: Receiver<ChannelMessage>,
}

impl LocalChannel {
    /// Creates two connected endpoints.
    pub fn pair() -> (LocalChannel, LocalChannel) {
        let (to_right, from_left) = std::sync::mpsc::channel();
        let (to_left, from_right) = std::sync::mpsc::channel();
        (
            LocalChannel {
                sender: to_right,
                receiver: from_right,
            },
            LocalChannel {
                sender: to_left,
                receiver: from_left,
            },
        )
    }
}

impl Channel for LocalChannel {
    fn send(&mut self, message: ChannelMessage) -> Result<(), Error> {
        self.sender.send(message).map_err(|_| {
            Error::Communication(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "channel peer hung up",
            ))
        })
    }

    fn receive(&mut self) -> Result<ChannelMessage, Error> {
        self.receiver.recv().map_err(|_| {
            Error::Communication(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "channel peer hung up",
            ))
        })
    }
}
