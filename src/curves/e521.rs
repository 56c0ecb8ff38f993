//! E-521: `x² + y² = 1 - 376014·x²·y²` over GF(2⁵²¹ - 1).
//!
//! The Mersenne-prime member of the family, independently arrived at by
//! three groups. Cofactor 4, Decaf, Elligator-1.

use crypto_bigint::U576;

use crate::Result;
use crate::curve::{CurveParams, DecafParams, Elligator, Elligator1Params};
use crate::elligator::elligator1;
use crate::scratch::Scratchpad;

curve_field! {
    params: E521FieldParams,
    element: Fe521,
    uint: U576,
    modulus: "00000000000001ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
    num_bits: 521,
    p_mod_8: 7,
    legendre_exp: "00000000000000ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
    inv_exp: "00000000000001fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffd",
    sqrt_exp: "000000000000008000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
    inv_sqrt_exp: "000000000000007fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
    sqrt_minus_one: "000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
    fe_doc: "An element of GF(2^521 - 1), the E-521 base field.",
}

/// The E-521 curve.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct E521;

impl CurveParams for E521 {
    type FieldElement = Fe521;

    const EDWARDS_A: Fe521 = Fe521::from_be_hex(
        "000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000001",
    );
    const EDWARDS_D: Fe521 = Fe521::from_be_hex(
        "00000000000001fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffa4331",
    );
    const MONTGOMERY_A: Fe521 = Fe521::from_be_hex(
        "00000000000000033384122c2c57ea88f4b5bbd2db1e23560c1b3dba6f4d6d9557eee46af3b586aa3890702ac70c0aaef91d655be8c0504df666d8bc1eac278ce877fba324cf6319",
    );
    const MONTGOMERY_B: Fe521 = Fe521::from_be_hex(
        "00000000000000033384122c2c57ea88f4b5bbd2db1e23560c1b3dba6f4d6d9557eee46af3b586aa3890702ac70c0aaef91d655be8c0504df666d8bc1eac278ce877fba324cf631b",
    );
    const A_PLUS_TWO_OVER_FOUR: Fe521 = Fe521::from_be_hex(
        "0000000000000180cce1048b0b15faa23d2d6ef4b6c788d58306cf6e9bd35b6555fbb91abced61aa8e241c0ab1c302abbe475956fa3014137d99b62f07ab09e33a1dfee8c933d8c6",
    );
    const GENERATOR: (Fe521, Fe521) = (
        Fe521::from_be_hex(
            "00000000000000752cb45c48648b189df90cb2296b2878a3bfd9f42fc6c818ec8bf3c9c0c6203913f6ecc5ccc72434b1ae949d568fc99c6059d0fb13364838aa302a940a2f19ba6c",
        ),
        Fe521::from_be_hex(
            "00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000c",
        ),
    );
    const ORDER: Fe521 = Fe521::from_be_hex(
        "000000000000007ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffd15b6c64746fc85f736b8af5e7ec53f04fbd8c4569a8f1f4540ea2435f5180d6b",
    );
    const COFACTOR: u8 = 4;
}

impl DecafParams for E521 {}

impl Elligator1Params for E521 {
    const ELLIGATOR_C: Fe521 = Fe521::from_be_hex(
        "00000000000000d697cf160ee7d0394784b23ea56a644fc9d847a926dbfe57bcf1e4178cbcf51d5c94222e14b55bd82c91f701c7b3a11f1823410f67eaa1fbd18b37b7034606cf69",
    );
    const ELLIGATOR_S: Fe521 = Fe521::from_be_hex(
        "00000000000000f9c91c6bb4897201f09e007889e0acf4d85451c98e6f86ff4dd28872f2674e64b9f9ed3ea45a4ff09428599c14efe1e7ff9d0d1dbd1aa9ba162dfae6aed6f3720d",
    );
    const ELLIGATOR_R: Fe521 = Fe521::from_be_hex(
        "000000000000008a1fa1f2a08f3f01244994c3fd0b92c97f10f56f836f90555939d162ef383a96dbef962c134e3837471a847e3d31b32167a122df0dd7e048c9e3ce931befb7a2e0",
    );
}

impl Elligator for E521 {
    fn decode_hash(t: &Fe521, scratch: &mut Scratchpad<Fe521>) -> Result<(Fe521, Fe521)> {
        elligator1::decode::<Self>(t, scratch)
    }

    fn encode_hash(x: &Fe521, y: &Fe521, scratch: &mut Scratchpad<Fe521>) -> Result<Fe521> {
        elligator1::encode::<Self>(x, y, scratch)
    }

    fn can_encode(x: &Fe521, y: &Fe521, scratch: &mut Scratchpad<Fe521>) -> bool {
        elligator1::can_encode::<Self>(x, y, scratch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decaf::{CompressedDecaf, DecafPoint};
    use crate::edwards::AffinePoint;
    use crate::elligator::elligator1::{
        calculate_elligator_c, calculate_elligator_r, calculate_elligator_s,
    };

    #[test]
    fn generator_is_on_curve() {
        assert!(bool::from(AffinePoint::<E521>::GENERATOR.is_on_curve()));
        assert_eq!(AffinePoint::<E521>::GENERATOR.y, Fe521::from_u64(12));
    }

    #[test]
    fn elligator_parameters_match_derivation() {
        let c = calculate_elligator_c(&E521::EDWARDS_D);
        assert_eq!(c, E521::ELLIGATOR_C);
        assert_eq!(calculate_elligator_s(&c), E521::ELLIGATOR_S);
        assert_eq!(calculate_elligator_r(&c), E521::ELLIGATOR_R);
    }

    #[test]
    fn decaf_identity_is_the_zero_string() {
        // compress(0, 1) must be all zero bytes...
        let id = DecafPoint::<E521>::IDENTITY.compress();
        let mut bytes = [0xffu8; 66];
        id.write_be_bytes(&mut bytes);
        assert_eq!(bytes, [0u8; 66]);

        // ...and decompress(0) must return the identity.
        let zero = CompressedDecaf::<E521>::from_be_slice(&[0u8; 66]).unwrap();
        let p = zero.decompress().unwrap();
        assert!(bool::from(p.is_identity()));
    }

    #[test]
    fn decaf_generator_vector() {
        let s = DecafPoint::<E521>::generator().compress();
        assert_eq!(
            *s.as_field_element(),
            Fe521::from_be_hex(
                "0000000000000083d9dea6e21c4620cf787c11274956cefbd841df4ec2bcf17072f6e2234ae14273aee48956b9e900411e4939cb7c6d556c8713482a4f8f16be7f399f5cfb6fe054",
            )
        );
    }
}
