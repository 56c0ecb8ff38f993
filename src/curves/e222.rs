//! E-222: `x² + y² = 1 + 160102·x²·y²` over GF(2²²² - 117).
//!
//! From Aranha, Barreto, Pereira and Ricardini, "A note on high-security
//! general-purpose elliptic curves". Cofactor 4, Decaf, Elligator-1.

use crypto_bigint::U256;

use crate::Result;
use crate::curve::{CurveParams, DecafParams, Elligator, Elligator1Params};
use crate::elligator::elligator1;
use crate::scratch::Scratchpad;

curve_field! {
    params: E222FieldParams,
    element: Fe222,
    uint: U256,
    modulus: "000000003fffffffffffffffffffffffffffffffffffffffffffffffffffff8b",
    num_bits: 222,
    p_mod_8: 3,
    legendre_exp: "000000001fffffffffffffffffffffffffffffffffffffffffffffffffffffc5",
    inv_exp: "000000003fffffffffffffffffffffffffffffffffffffffffffffffffffff89",
    sqrt_exp: "000000000fffffffffffffffffffffffffffffffffffffffffffffffffffffe3",
    inv_sqrt_exp: "000000000fffffffffffffffffffffffffffffffffffffffffffffffffffffe2",
    sqrt_minus_one: "0000000000000000000000000000000000000000000000000000000000000000",
    fe_doc: "An element of GF(2^222 - 117), the E-222 base field.",
}

/// The E-222 curve.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct E222;

impl CurveParams for E222 {
    type FieldElement = Fe222;

    const EDWARDS_A: Fe222 = Fe222::from_be_hex(
        "0000000000000000000000000000000000000000000000000000000000000001",
    );
    const EDWARDS_D: Fe222 = Fe222::from_be_hex(
        "0000000000000000000000000000000000000000000000000000000000027166",
    );
    const MONTGOMERY_A: Fe222 = Fe222::from_be_hex(
        "000000000a0cd076aef89d404a65d89aa43ec033adebad44aa5b412012fbb405",
    );
    const MONTGOMERY_B: Fe222 = Fe222::from_be_hex(
        "000000000a0cd076aef89d404a65d89aa43ec033adebad44aa5b412012fbb407",
    );
    const A_PLUS_TWO_OVER_FOUR: Fe222 = Fe222::from_be_hex(
        "000000003283341dabbe275012997626a90fb00ceb7aeb512a96d04804beecaa",
    );
    const GENERATOR: (Fe222, Fe222) = (
        Fe222::from_be_hex(
            "0000000019b12bb156a389e55c9768c303316d07c23adab3736eb2bc3eb54e51",
        ),
        Fe222::from_be_hex(
            "000000000000000000000000000000000000000000000000000000000000001c",
        ),
    );
    const ORDER: Fe222 = Fe222::from_be_hex(
        "000000000ffffffffffffffffffffffffffff70cbc95e932f802f31423598cbf",
    );
    const COFACTOR: u8 = 4;
}

impl DecafParams for E222 {}

impl Elligator1Params for E222 {
    const ELLIGATOR_C: Fe222 = Fe222::from_be_hex(
        "0000000003ffaeb9cf66ff3e2dc4c0dbf5df127a449159bd9581a93fab21d7a1",
    );
    const ELLIGATOR_S: Fe222 = Fe222::from_be_hex(
        "000000002da870bd517292488b2d539972bc159cc5741b6f48d463bd7f8d7a88",
    );
    const ELLIGATOR_R: Fe222 = Fe222::from_be_hex(
        "000000002a8859c2835fe797e348510fb90175b9662819572a28f9a829825fc6",
    );
}

impl Elligator for E222 {
    fn decode_hash(t: &Fe222, scratch: &mut Scratchpad<Fe222>) -> Result<(Fe222, Fe222)> {
        elligator1::decode::<Self>(t, scratch)
    }

    fn encode_hash(x: &Fe222, y: &Fe222, scratch: &mut Scratchpad<Fe222>) -> Result<Fe222> {
        elligator1::encode::<Self>(x, y, scratch)
    }

    fn can_encode(x: &Fe222, y: &Fe222, scratch: &mut Scratchpad<Fe222>) -> bool {
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
        assert!(bool::from(AffinePoint::<E222>::GENERATOR.is_on_curve()));
        assert_eq!(AffinePoint::<E222>::GENERATOR.y, Fe222::from_u64(28));
    }

    #[test]
    fn elligator_parameters_match_derivation() {
        let c = calculate_elligator_c(&E222::EDWARDS_D);
        assert_eq!(c, E222::ELLIGATOR_C);
        assert_eq!(calculate_elligator_s(&c), E222::ELLIGATOR_S);
        assert_eq!(calculate_elligator_r(&c), E222::ELLIGATOR_R);
    }
}
