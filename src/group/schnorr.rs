//! Prime-order subgroups of `Z_p^*` described by explicit `(p, q, g)` parameters.

use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::{CryptoRng, Rng};

use crate::errors::Error;
use crate::group::PrimeOrderGroup;

/// A Schnorr group: the order-`q` subgroup of `Z_p^*` generated by `g`.
///
/// The caller supplies the parameters; this type checks only basic shape
/// (`1 < g < p`, `q > 1`), not primality. Elements are residues modulo `p`,
/// encoded big-endian and zero-padded to the byte width of `p` so that the
/// encoding is canonical and fixed-width.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchnorrGroup {
    modulus: BigUint,
    order: BigUint,
    generator: BigUint,
    element_width: usize,
}

impl SchnorrGroup {
    /// Creates a group from explicit parameters.
    ///
    /// # Errors
    /// [`Error::InvalidInput`] if `g` is not in `(1, p)` or `q < 2`.
    pub fn new(modulus: BigUint, order: BigUint, generator: BigUint) -> Result<Self, Error> {
        if generator <= BigUint::one() || generator >= modulus {
            return Err(Error::invalid_input("generator must lie in (1, p)"));
        }
        if order <= BigUint::one() {
            return Err(Error::invalid_input("group order must be at least 2"));
        }
        let element_width = modulus.to_bytes_be().len();
        Ok(Self {
            modulus,
            order,
            generator,
            element_width,
        })
    }

    /// The modulus `p`.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }
}

impl PrimeOrderGroup for SchnorrGroup {
    type Element = BigUint;

    fn order(&self) -> &BigUint {
        &self.order
    }

    fn generator(&self) -> Self::Element {
        self.generator.clone()
    }

    fn exponentiate(&self, base: &Self::Element, exponent: &BigUint) -> Self::Element {
        base.modpow(exponent, &self.modulus)
    }

    fn multiply(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        (a * b) % &self.modulus
    }

    fn invert(&self, a: &Self::Element) -> Self::Element {
        // p is prime, so a^(p-2) is the inverse of a by Fermat.
        let exponent = &self.modulus - BigUint::from(2u8);
        a.modpow(&exponent, &self.modulus)
    }

    fn random_scalar<R: Rng + CryptoRng>(&self, rng: &mut R) -> BigUint {
        rng.gen_biguint_below(&self.order)
    }

    fn element_to_bytes(&self, element: &Self::Element) -> Vec<u8> {
        // Elements are plain BigUints, so callers can hand in an unreduced
        // residue; normalize before padding.
        let raw = (element % &self.modulus).to_bytes_be();
        let mut bytes = vec![0u8; self.element_width];
        let start = self.element_width - raw.len();
        bytes[start..].copy_from_slice(&raw);
        bytes
    }

    fn element_from_bytes(&self, bytes: &[u8]) -> Result<Self::Element, Error> {
        if bytes.len() != self.element_width {
            return Err(Error::invalid_input(format!(
                "expected a {}-byte element encoding, got {} bytes",
                self.element_width,
                bytes.len()
            )));
        }
        let element = BigUint::from_bytes_be(bytes);
        if element.is_zero() || element >= self.modulus {
            return Err(Error::invalid_input("element encoding out of range"));
        }
        Ok(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group() -> SchnorrGroup {
        // p = 10007, q = 5003 (both prime, p = 2q + 1), g = 4 generates the
        // order-q subgroup of squares.
        SchnorrGroup::new(
            BigUint::from(10007u32),
            BigUint::from(5003u32),
            BigUint::from(4u32),
        )
        .unwrap()
    }

    #[test]
    fn rejects_degenerate_generator() {
        assert!(SchnorrGroup::new(
            BigUint::from(23u32),
            BigUint::from(23u32),
            BigUint::one()
        )
        .is_err());
    }

    #[test]
    fn inverse_multiplies_to_identity() {
        let group = group();
        let x = group.exponentiate(&group.generator(), &BigUint::from(117u32));
        let inv = group.invert(&x);
        assert_eq!(group.multiply(&x, &inv), BigUint::one());
    }

    #[test]
    fn element_encoding_is_fixed_width_and_canonical() {
        let group = group();
        let x = BigUint::from(5u8);
        let bytes = group.element_to_bytes(&x);
        assert_eq!(bytes.len(), 2);
        assert_eq!(group.element_from_bytes(&bytes).unwrap(), x);
    }

    #[test]
    fn unreduced_element_encodes_like_its_residue() {
        let group = group();
        let unreduced = BigUint::from(10007u32 + 5);
        assert_eq!(
            group.element_to_bytes(&unreduced),
            group.element_to_bytes(&BigUint::from(5u32))
        );
    }

    #[test]
    fn out_of_range_encoding_rejected() {
        let group = group();
        assert!(group.element_from_bytes(&[0xff, 0xff]).is_err());
        assert!(group.element_from_bytes(&[0x00]).is_err());
    }
}
