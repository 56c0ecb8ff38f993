//! E-382: `x² + y² = 1 - 67254·x²·y²` over GF(2³⁸² - 105).
//!
//! From Aranha, Barreto, Pereira and Ricardini, "A note on high-security
//! general-purpose elliptic curves". Cofactor 4, Decaf, Elligator-1.

use crypto_bigint::U384;

use crate::Result;
use crate::curve::{CurveParams, DecafParams, Elligator, Elligator1Params};
use crate::elligator::elligator1;
use crate::scratch::Scratchpad;

curve_field! {
    params: E382FieldParams,
    element: Fe382,
    uint: U384,
    modulus: "3fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff97",
    num_bits: 382,
    p_mod_8: 7,
    legendre_exp: "1fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffcb",
    inv_exp: "3fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff95",
    sqrt_exp: "0fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe6",
    inv_sqrt_exp: "0fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe5",
    sqrt_minus_one: "000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
    fe_doc: "An element of GF(2^382 - 105), the E-382 base field.",
}

/// The E-382 curve.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct E382;

impl CurveParams for E382 {
    type FieldElement = Fe382;

    const EDWARDS_A: Fe382 = Fe382::from_be_hex(
        "000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000001",
    );
    const EDWARDS_D: Fe382 = Fe382::from_be_hex(
        "3ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffef8e1",
    );
    const MONTGOMERY_A: Fe382 = Fe382::from_be_hex(
        "18c14631a88d33d8dada6f3efff73ae391e747fba53d7071f2da4844ba7fb09545a93c9a1174c8cf96172a71fc98d978",
    );
    const MONTGOMERY_B: Fe382 = Fe382::from_be_hex(
        "18c14631a88d33d8dada6f3efff73ae391e747fba53d7071f2da4844ba7fb09545a93c9a1174c8cf96172a71fc98d97a",
    );
    const A_PLUS_TWO_OVER_FOUR: Fe382 = Fe382::from_be_hex(
        "2630518c6a234cf636b69bcfbffdceb8e479d1fee94f5c1c7cb692112e9fec25516a4f26845d3233e585ca9c7f26362a",
    );
    const GENERATOR: (Fe382, Fe382) = (
        Fe382::from_be_hex(
            "196f8dd0eab20391e5f05be96e8d20ae68f840032b0b64352923bab85364841193517dbce8105398ebc0cc9470f79603",
        ),
        Fe382::from_be_hex(
            "000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000011",
        ),
    );
    const ORDER: Fe382 = Fe382::from_be_hex(
        "0fffffffffffffffffffffffffffffffffffffffffffffffd5fb21f21e95eee17c5e69281b102d2773e27e13fd3c9719",
    );
    const COFACTOR: u8 = 4;
}

impl DecafParams for E382 {}

impl Elligator1Params for E382 {
    const ELLIGATOR_C: Fe382 = Fe382::from_be_hex(
        "1e043db0f41f16738c8c7695882bd1871c0e875e41850cf671a5f62ce79f3a6f6410576df2104c6e86f8384e3d8d7180",
    );
    const ELLIGATOR_S: Fe382 = Fe382::from_be_hex(
        "1920c5dabfbfe01efce9614687e212c3d060d9b67d3868dd8a3e9d97f88894e59ed08f703402f94a34eb2d8d006f7857",
    );
    const ELLIGATOR_R: Fe382 = Fe382::from_be_hex(
        "121e3b3cb1eab4d1408a218cf97abbd246ac0061726b9475495b00a4af734003a77da25dff8d0339602dec002314b5fb",
    );
}

impl Elligator for E382 {
    fn decode_hash(t: &Fe382, scratch: &mut Scratchpad<Fe382>) -> Result<(Fe382, Fe382)> {
        elligator1::decode::<Self>(t, scratch)
    }

    fn encode_hash(x: &Fe382, y: &Fe382, scratch: &mut Scratchpad<Fe382>) -> Result<Fe382> {
        elligator1::encode::<Self>(x, y, scratch)
    }

    fn can_encode(x: &Fe382, y: &Fe382, scratch: &mut Scratchpad<Fe382>) -> bool {
        elligator1::can_encode::<Self>(x, y, scratch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edwards::AffinePoint;
    use crate::elligator::elligator1::{
        calculate_elligator_c, calculate_elligator_r, calculate_elligator_s,
    };

    #[test]
    fn generator_is_on_curve() {
        assert!(bool::from(AffinePoint::<E382>::GENERATOR.is_on_curve()));
        assert_eq!(AffinePoint::<E382>::GENERATOR.y, Fe382::from_u64(17));
    }

    #[test]
    fn elligator_parameters_match_derivation() {
        let c = calculate_elligator_c(&E382::EDWARDS_D);
        assert_eq!(c, E382::ELLIGATOR_C);
        assert_eq!(calculate_elligator_s(&c), E382::ELLIGATOR_S);
        assert_eq!(calculate_elligator_r(&c), E382::ELLIGATOR_R);
    }
}
