//! Curve25519: `v² = u³ + 486662·u² + u` over GF(2²⁵⁵ - 19).
//!
//! The Montgomery-form member of the catalogue, carried here in its
//! birationally equivalent twisted Edwards form
//! `486664·x² + y² = 1 + 486660·x²·y²`. Cofactor 8; hashing by
//! Elligator-2 through the Montgomery coordinates.

use crypto_bigint::U256;

use crate::Result;
use crate::curve::{CurveParams, Elligator, Elligator2Params};
use crate::edwards::{edwards_to_montgomery, montgomery_to_edwards};
use crate::elligator::elligator2;
use crate::scratch::Scratchpad;

curve_field! {
    params: Curve25519FieldParams,
    element: Fe25519,
    uint: U256,
    modulus: "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffed",
    num_bits: 255,
    p_mod_8: 5,
    legendre_exp: "3ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff6",
    inv_exp: "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeb",
    sqrt_exp: "0ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe",
    inv_sqrt_exp: "0ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffd",
    sqrt_minus_one: "2b8324804fc1df0b2b4d00993dfbd7a72f431806ad2fe478c4ee1b274a0ea0b0",
    fe_doc: "An element of GF(2^255 - 19), the Curve25519 base field.",
}

/// The Curve25519 curve.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Curve25519;

impl Curve25519 {
    /// The RFC 7748 base point `u`-coordinate.
    pub const BASE_U: Fe25519 = Fe25519::from_u64(9);

    /// The RFC 7748 base point `v`-coordinate.
    pub const BASE_V: Fe25519 = Fe25519::from_be_hex(
        "20ae19a1b8a086b4e01edd2c7748d14c923d4d7e6d7c61b229e9c5a27eced3d9",
    );
}

impl CurveParams for Curve25519 {
    type FieldElement = Fe25519;

    const EDWARDS_A: Fe25519 = Fe25519::from_be_hex(
        "0000000000000000000000000000000000000000000000000000000000076d08",
    );
    const EDWARDS_D: Fe25519 = Fe25519::from_be_hex(
        "0000000000000000000000000000000000000000000000000000000000076d04",
    );
    const MONTGOMERY_A: Fe25519 = Fe25519::from_be_hex(
        "0000000000000000000000000000000000000000000000000000000000076d06",
    );
    const MONTGOMERY_B: Fe25519 = Fe25519::from_be_hex(
        "0000000000000000000000000000000000000000000000000000000000000001",
    );
    const A_PLUS_TWO_OVER_FOUR: Fe25519 = Fe25519::from_be_hex(
        "000000000000000000000000000000000000000000000000000000000001db42",
    );
    const GENERATOR: (Fe25519, Fe25519) = (
        Fe25519::from_be_hex(
            "547c4350219f5e19dd26a3d6668b74346a8eb726eb2396e1228cfa397ffe6bd4",
        ),
        Fe25519::from_be_hex(
            "6666666666666666666666666666666666666666666666666666666666666658",
        ),
    );
    const ORDER: Fe25519 = Fe25519::from_be_hex(
        "1000000000000000000000000000000014def9dea2f79cd65812631a5cf5d3ed",
    );
    const COFACTOR: u8 = 8;
}

impl Elligator2Params for Curve25519 {}

impl Elligator for Curve25519 {
    fn decode_hash(t: &Fe25519, scratch: &mut Scratchpad<Fe25519>) -> Result<(Fe25519, Fe25519)> {
        let (u, v) = elligator2::decode::<Self>(t, scratch)?;
        Ok(montgomery_to_edwards::<Self>(&u, &v))
    }

    fn encode_hash(x: &Fe25519, y: &Fe25519, scratch: &mut Scratchpad<Fe25519>) -> Result<Fe25519> {
        let (u, v) = edwards_to_montgomery::<Self>(x, y);
        elligator2::encode::<Self>(&u, &v, scratch)
    }

    fn can_encode(x: &Fe25519, y: &Fe25519, scratch: &mut Scratchpad<Fe25519>) -> bool {
        let (u, v) = edwards_to_montgomery::<Self>(x, y);
        elligator2::can_encode::<Self>(&u, &v, scratch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edwards::AffinePoint;
    use crate::montgomery::MontgomeryXPoint;
    use crate::scratch::Scratchpad;

    #[test]
    fn generator_matches_rfc7748_base_point() {
        let gen = AffinePoint::<Curve25519>::GENERATOR;
        assert!(bool::from(gen.is_on_curve()));
        let (u, v) = gen.to_montgomery().unwrap();
        assert_eq!(u, Curve25519::BASE_U);
        assert_eq!(v, Curve25519::BASE_V);
    }

    #[test]
    fn ladder_doubling_vectors() {
        let mut pad = Scratchpad::new();
        let g = MontgomeryXPoint::<Curve25519>(Curve25519::BASE_U);
        assert_eq!(
            g.mul_x(&Fe25519::from_u64(2), &mut pad),
            Fe25519::from_be_hex(
                "20d342d51873f1b7d9750c687d1571148f3f5ced1e350b5c5cae469cdd684efb",
            )
        );
        assert_eq!(
            g.mul_x(&Fe25519::from_u64(3), &mut pad),
            Fe25519::from_be_hex(
                "1c12bc1a6d57abe645534d91c21bba64f8824e67621c0859c00a03affb713c12",
            )
        );
    }

    #[test]
    fn hash_decode_vectors() {
        let mut pad = Scratchpad::new();
        let (x, y) = elligator2::decode::<Curve25519>(&Fe25519::from_u64(4), &mut pad).unwrap();
        assert_eq!(
            x,
            Fe25519::from_be_hex(
                "2aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa7109",
            )
        );
        assert_eq!(
            y,
            Fe25519::from_be_hex(
                "1531a9c3480b44b33d68a1d5673dd6a23e2f6c5f000695775aecc9d22210ea2b",
            )
        );
        // The matching preimage is the negative fold of 4.
        let r = elligator2::encode::<Curve25519>(&x, &y, &mut pad).unwrap();
        assert_eq!(r, -Fe25519::from_u64(4));

        let (x, y) = elligator2::decode::<Curve25519>(&Fe25519::from_u64(7), &mut pad).unwrap();
        let r = elligator2::encode::<Curve25519>(&x, &y, &mut pad).unwrap();
        assert_eq!(r, Fe25519::from_u64(7));
    }

    #[test]
    fn exceptional_set_is_empty_on_this_field() {
        // 1 + 2r² = 0 needs -1/2 to be a square. χ(2) = -1 on a
        // p ≡ 5 (mod 8) field while χ(-1) = 1, so no input ever hits the
        // exceptional set here; decode is total.
        let minus_half = -(Fe25519::TWO.invert());
        assert!(!bool::from(minus_half.is_square()));
    }
}
