//! Curve1174: `x² + y² = 1 - 1174·x²·y²` over GF(2²⁵¹ - 9).
//!
//! Introduced by Bernstein, Hamburg, Krasnova and Lange in the Elligator
//! paper. Cofactor 4, with Decaf compression and the Elligator-1 map.

use crypto_bigint::U256;

use crate::Result;
use crate::curve::{CurveParams, DecafParams, Elligator, Elligator1Params};
use crate::elligator::elligator1;
use crate::scratch::Scratchpad;

curve_field! {
    params: Curve1174FieldParams,
    element: Fe1174,
    uint: U256,
    modulus: "07fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7",
    num_bits: 251,
    p_mod_8: 7,
    legendre_exp: "03fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffb",
    inv_exp: "07fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff5",
    sqrt_exp: "01fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe",
    inv_sqrt_exp: "01fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffd",
    sqrt_minus_one: "0000000000000000000000000000000000000000000000000000000000000000",
    fe_doc: "An element of GF(2^251 - 9), the Curve1174 base field.",
}

/// The Curve1174 curve.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Curve1174;

impl CurveParams for Curve1174 {
    type FieldElement = Fe1174;

    const EDWARDS_A: Fe1174 = Fe1174::from_be_hex(
        "0000000000000000000000000000000000000000000000000000000000000001",
    );
    const EDWARDS_D: Fe1174 = Fe1174::from_be_hex(
        "07fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffb61",
    );
    const MONTGOMERY_A: Fe1174 = Fe1174::from_be_hex(
        "073e87843f9e64a8328bdfc140b54510c6b3174ff58ac8e0d8211dd937fe41c2",
    );
    const MONTGOMERY_B: Fe1174 = Fe1174::from_be_hex(
        "073e87843f9e64a8328bdfc140b54510c6b3174ff58ac8e0d8211dd937fe41c4",
    );
    const A_PLUS_TWO_OVER_FOUR: Fe1174 = Fe1174::from_be_hex(
        "01cfa1e10fe7992a0ca2f7f0502d514431acc5d3fd62b238360847764dff9071",
    );
    const GENERATOR: (Fe1174, Fe1174) = (
        Fe1174::from_be_hex(
            "037fbb0cea308c479343aee7c029a190c021d96a492ecd6516123f27bce29eda",
        ),
        Fe1174::from_be_hex(
            "06b72f82d47fb7cc6656841169840e0c4fe2dee2af3f976ba4ccb1bf9b46360e",
        ),
    );
    const ORDER: Fe1174 = Fe1174::from_be_hex(
        "01fffffffffffffffffffffffffffffff77965c4dfd307348944d45fd166c971",
    );
    const COFACTOR: u8 = 4;
}

impl DecafParams for Curve1174 {}

impl Elligator1Params for Curve1174 {
    const ELLIGATOR_C: Fe1174 = Fe1174::from_be_hex(
        "04d1a3398ed42ceeb451d20824ca9cb49b69ef546bd7e6546aef19af1f9e49e1",
    );
    const ELLIGATOR_S: Fe1174 = Fe1174::from_be_hex(
        "03fe707f0d7004fd334ee813a5f1a74ab2449139c82c39d84a09ae74cc78c615",
    );
    const ELLIGATOR_R: Fe1174 = Fe1174::from_be_hex(
        "006006fbda7649c433816b286006fbda7649c433816b286006fbda7649c43383",
    );
}

impl Elligator for Curve1174 {
    fn decode_hash(t: &Fe1174, scratch: &mut Scratchpad<Fe1174>) -> Result<(Fe1174, Fe1174)> {
        elligator1::decode::<Self>(t, scratch)
    }

    fn encode_hash(x: &Fe1174, y: &Fe1174, scratch: &mut Scratchpad<Fe1174>) -> Result<Fe1174> {
        elligator1::encode::<Self>(x, y, scratch)
    }

    fn can_encode(x: &Fe1174, y: &Fe1174, scratch: &mut Scratchpad<Fe1174>) -> bool {
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
        assert!(bool::from(AffinePoint::<Curve1174>::GENERATOR.is_on_curve()));
    }

    #[test]
    fn elligator_parameters_match_derivation() {
        let c = calculate_elligator_c(&Curve1174::EDWARDS_D);
        assert_eq!(c, Curve1174::ELLIGATOR_C);
        assert_eq!(calculate_elligator_s(&c), Curve1174::ELLIGATOR_S);
        assert_eq!(calculate_elligator_r(&c), Curve1174::ELLIGATOR_R);
    }

    #[test]
    fn hash_decode_vectors() {
        let mut pad = Scratchpad::new();
        // The image of t = 0 under the register program.
        let (x, y) = elligator1::decode::<Curve1174>(&Fe1174::ZERO, &mut pad).unwrap();
        assert_eq!(
            x,
            Fe1174::from_be_hex(
                "05e19eca85e361b2b0cfb2903df32a222a8f1ed6404d1355f3db39ea2b68874e",
            )
        );
        assert_eq!(
            y,
            Fe1174::from_be_hex(
                "073d2571a3f4137c416f9acad9f974d6ebb700a7841ba0e655a5fd3cb5c43c2b",
            )
        );

        let (x, y) = elligator1::decode::<Curve1174>(&Fe1174::from_u64(5), &mut pad).unwrap();
        assert_eq!(
            x,
            Fe1174::from_be_hex(
                "0517b50e756750466c7bab70a5337d84524758f77ada1407d4442f99b7aebad3",
            )
        );
        assert_eq!(
            y,
            Fe1174::from_be_hex(
                "02bfe3b3f39eba9571a161b69abfe3b3f39eba9571a161b69abfe3b3f39eba92",
            )
        );
    }

    #[test]
    fn hash_decode_rejects_minus_one() {
        let mut pad = Scratchpad::new();
        assert_eq!(
            elligator1::decode::<Curve1174>(&-Fe1174::ONE, &mut pad),
            Err(crate::Error::InvalidHashInput)
        );
    }

    #[test]
    fn decaf_generator_vector() {
        let s = crate::decaf::DecafPoint::<Curve1174>::generator().compress();
        assert_eq!(
            *s.as_field_element(),
            Fe1174::from_be_hex(
                "03dfc8cc0f58b367e00dc67c89c72c024684800ebcc02e0317154b85bb260f51",
            )
        );
    }
}
