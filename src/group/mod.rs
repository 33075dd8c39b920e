//! Group abstraction consumed by the protocols in this crate.
//!
//! The protocols only need a handful of operations on a prime-order group:
//! exponentiation, multiplication, inversion, scalar sampling, and a
//! deterministic element encoding. [`PrimeOrderGroup`] captures exactly that
//! surface; concrete arithmetic lives behind it.
//!
//! The encoding contract matters: `element_to_bytes` must be a fixed-width,
//! canonical encoding, because statement reducers hash and compare element
//! bytes computed independently on the prover and verifier sides.

pub mod schnorr;

use core::fmt::Debug;

use num_bigint::BigUint;
use rand::{CryptoRng, Rng};

use crate::errors::Error;

pub use schnorr::SchnorrGroup;

/// A multiplicative group of prime order `q` with a fixed generator.
///
/// Scalars are arbitrary-precision integers reduced modulo `q`; elements are
/// opaque to the protocols, which manipulate them only through this trait.
pub trait PrimeOrderGroup: Clone + Debug {
    /// A group element.
    type Element: Clone + Debug + Eq + PartialEq;

    /// The prime order `q` of the group.
    fn order(&self) -> &BigUint;

    /// The fixed generator.
    fn generator(&self) -> Self::Element;

    /// Computes `base^exponent`. The exponent need not be reduced modulo `q`.
    fn exponentiate(&self, base: &Self::Element, exponent: &BigUint) -> Self::Element;

    /// Computes the group product `a * b`.
    fn multiply(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// Computes the group inverse of `a`.
    fn invert(&self, a: &Self::Element) -> Self::Element;

    /// Samples a scalar uniformly from `[0, q)`.
    fn random_scalar<R: Rng + CryptoRng>(&self, rng: &mut R) -> BigUint;

    /// Canonical fixed-width encoding of an element.
    fn element_to_bytes(&self, element: &Self::Element) -> Vec<u8>;

    /// Decodes an element from its canonical encoding.
    ///
    /// # Errors
    /// [`Error::InvalidInput`] if the bytes are not a valid encoding.
    fn element_from_bytes(&self, bytes: &[u8]) -> Result<Self::Element, Error>;
}
