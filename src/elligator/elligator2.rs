//! Elligator-2: hashing to Montgomery curves over `p ≡ 5 (mod 8)`.
//!
//! Specialized to the curves in this crate's catalogue: `B = 1` and the
//! canonical non-square `u = 2` (which is a non-residue exactly when
//! `p ≡ 5 (mod 8)`).

use ff::Field;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::curve::Elligator2Params;
use crate::field::FieldOps;
use crate::scratch::Scratchpad;
use crate::{Error, Result};

/// Map a field element to Montgomery affine coordinates.
///
/// Inputs with `1 + 2r² = 0` are the map's exceptional set and are
/// rejected.
pub fn decode<C: Elligator2Params>(
    r: &C::FieldElement,
    scratch: &mut Scratchpad<C::FieldElement>,
) -> Result<(C::FieldElement, C::FieldElement)> {
    let one = C::FieldElement::ONE;
    scratch.r0 = C::MONTGOMERY_A;

    // 1 + 2r²
    scratch.r1 = r.square().double() + one;
    if scratch.r1.is_zero().into() {
        return Err(Error::InvalidHashInput);
    }

    // v = -A/(1 + 2r²)
    scratch.r2 = -scratch.r0 * scratch.r1.inv();

    // e = χ((v² + A·v + 1)·v)
    scratch.r1 = scratch.r0 * scratch.r2;
    scratch.r3 = (scratch.r2.square() + scratch.r1 + one) * scratch.r2;
    let e = scratch.r3.legendre();

    // x = e·v + (e - 1)·A/2
    let x = e * scratch.r2 + (e - one) * scratch.r0.div_small(2);

    // y = -e·√((x² + A·x + 1)·x)
    scratch.r1 = x.square() + scratch.r0 * x + one;
    let y = -e * (scratch.r1 * x).sqrt_unchecked();

    Ok((x, y))
}

/// Map Montgomery affine coordinates back to a field element preimage.
///
/// Refuses points outside the map's image. The two candidate preimages
/// `√(x/(-2(x+A)))` and `√(-(x+A)/(2x))` are both computed and combined by
/// a masked select on χ(y), keeping the choice constant-time.
pub fn encode<C: Elligator2Params>(
    x: &C::FieldElement,
    y: &C::FieldElement,
    scratch: &mut Scratchpad<C::FieldElement>,
) -> Result<C::FieldElement> {
    if !can_encode::<C>(x, y, scratch) {
        return Err(Error::EncodeRefused);
    }

    // r0 = -(x + A), r1 = 2·r0, r2 = 2x
    scratch.r0 = -(*x + C::MONTGOMERY_A);
    scratch.r1 = scratch.r0.double();
    scratch.r2 = x.double();

    // Candidate for non-square y: √(-(x + A)/(2x))
    scratch.r0 = (scratch.r0 * scratch.r2.inv()).sqrt_unchecked();
    // Candidate for square y: √(x/(-2(x + A)))
    scratch.r2 = (*x * scratch.r1.inv()).sqrt_unchecked();

    let y_is_square = y.legendre().ct_eq(&C::FieldElement::ONE);
    Ok(C::FieldElement::conditional_select(
        &scratch.r0,
        &scratch.r2,
        y_is_square,
    ))
}

/// Whether the point lies in the Elligator-2 image.
///
/// Besides the residuosity condition on `-2x(x + A)`, the sign of `y` must
/// match the root the decoder produces (`y = χ(y)·√(x³ + A·x² + x)`); on
/// these fields that check also constrains the quartic character, so
/// roughly a quarter of the curve is encodable.
pub fn can_encode<C: Elligator2Params>(
    x: &C::FieldElement,
    y: &C::FieldElement,
    scratch: &mut Scratchpad<C::FieldElement>,
) -> bool {
    let one = C::FieldElement::ONE;
    scratch.r0 = C::MONTGOMERY_A;

    let at_neg_a = x.ct_eq(&-scratch.r0);
    let zero_ok: Choice = !y.is_zero() | x.is_zero();

    let l0 = y.legendre();

    // -2·x·(x + A) must be a square.
    scratch.r0 = (*x + scratch.r0) * x;
    scratch.r1 = -scratch.r0.double();
    let square_ok = scratch.r1.legendre().ct_eq(&one);

    // y must be the root the decode direction would pick.
    scratch.r0 = ((scratch.r0 + one) * x).sqrt_unchecked() * l0;
    let sign_ok = y.ct_eq(&scratch.r0);

    (!at_neg_a & zero_ok & square_ok & sign_ok).into()
}
