//! Elligator-1: hashing to Edwards curves over `p ≡ 3 (mod 4)`.
//!
//! Bernstein, Hamburg, Krasnova, Lange, "Elligator: Elliptic-curve points
//! indistinguishable from uniform random strings", §3. The map is
//! parameterized by `(s, c, r)` derived from the Edwards `d`.

use ff::Field;
use subtle::{Choice, ConstantTimeEq};

use crate::curve::Elligator1Params;
use crate::field::FieldOps;
use crate::scratch::Scratchpad;
use crate::{Error, Result};

/// The Elligator-1 `c` parameter: `((-d)^½ - 1)/((-d)^½ + 1)`.
///
/// Well defined whenever `d` is a non-square (so `-d` is a square). The
/// curve tables precompute this; it is exposed for cross-checking.
pub fn calculate_elligator_c<F: FieldOps>(d: &F) -> F {
    let w = (-*d).sqrt_unchecked();
    (w - F::ONE) * (w + F::ONE).inv()
}

/// The Elligator-1 `s` parameter: `(2/c)^½`.
pub fn calculate_elligator_s<F: FieldOps>(c: &F) -> F {
    (F::TWO * c.inv()).sqrt_unchecked()
}

/// The Elligator-1 `r` parameter: `c + 1/c`.
pub fn calculate_elligator_r<F: FieldOps>(c: &F) -> F {
    *c + c.inv()
}

/// Map a field element to Edwards affine coordinates.
///
/// `t = -1` is the map's exceptional value and is rejected; every other
/// input lands on the curve.
pub fn decode<C: Elligator1Params>(
    t: &C::FieldElement,
    scratch: &mut Scratchpad<C::FieldElement>,
) -> Result<(C::FieldElement, C::FieldElement)> {
    let one = C::FieldElement::ONE;
    if t.ct_eq(&-one).into() {
        return Err(Error::InvalidHashInput);
    }

    // u = (1 - t)/(1 + t)
    scratch.r0 = one + t;
    scratch.r1 = (one - t) * scratch.r0.inv();
    // r0 = u²
    scratch.r0 = scratch.r1.square();

    // l2 = χ(u² + 1/c²)
    scratch.r2 = C::ELLIGATOR_C;
    scratch.r3 = scratch.r2.square().inv() + scratch.r0;
    let l2 = scratch.r3.legendre();

    // v = (u⁴ + (r² - 2)·u² + 1)·u
    scratch.r3 = C::ELLIGATOR_R;
    scratch.r4 = (scratch.r3.square() - C::FieldElement::TWO) * scratch.r0;
    scratch.r0 = (scratch.r0.square() + scratch.r4 + one) * scratch.r1;

    // Y = √(χ(v)·v)·χ(v)·l2,  X = χ(v)·u
    let l1 = scratch.r0.legendre();
    scratch.r4 = (l1 * scratch.r0).sqrt_unchecked() * l1 * l2;
    scratch.r1 *= l1;

    // x = (c - 1)·s·X·(1 + X)/Y
    scratch.r0 = one + scratch.r1;
    let x = (scratch.r2 - one) * C::ELLIGATOR_S * scratch.r1 * scratch.r0 * scratch.r4.inv();

    // y = (r·X - (1 + X)²)/(r·X + (1 + X)²)
    scratch.r0 = scratch.r0.square();
    scratch.r3 *= scratch.r1;
    let y = (scratch.r3 - scratch.r0) * (scratch.r3 + scratch.r0).inv();

    Ok((x, y))
}

/// Map Edwards affine coordinates back to a field element preimage.
///
/// Returns the non-negative representative of the ±t pair; refuses points
/// outside the map's image.
pub fn encode<C: Elligator1Params>(
    x: &C::FieldElement,
    y: &C::FieldElement,
    scratch: &mut Scratchpad<C::FieldElement>,
) -> Result<C::FieldElement> {
    if !can_encode::<C>(x, y, scratch) {
        return Err(Error::EncodeRefused);
    }
    let one = C::FieldElement::ONE;

    // e = (y - 1)/(2(y + 1))
    scratch.r0 = (*y + one).double();
    scratch.r1 = (*y - one) * scratch.r0.inv();

    // X = √((1 + e·r)² - 1) - (1 + e·r)
    scratch.r0 = C::ELLIGATOR_R * scratch.r1 + one;
    scratch.r1 = (scratch.r0.square() - one).sqrt_unchecked() - scratch.r0;

    // z = χ((c - 1)·s·X·(1 + X)·x·(X² + 1/c²))
    scratch.r2 = C::ELLIGATOR_C;
    scratch.r3 = one + scratch.r1;
    scratch.r4 = scratch.r1.square() + scratch.r2.square().inv();
    scratch.r0 = (scratch.r2 - one) * C::ELLIGATOR_S * scratch.r1 * scratch.r3 * x * scratch.r4;
    let z = scratch.r0.legendre();

    // t = |(1 - u)/(1 + u)| with u = z·X
    scratch.r0 = z * scratch.r1;
    scratch.r1 = one + scratch.r0;
    Ok(((one - scratch.r0) * scratch.r1.inv()).abs())
}

/// Whether the point lies in the Elligator-1 image.
pub fn can_encode<C: Elligator1Params>(
    x: &C::FieldElement,
    y: &C::FieldElement,
    scratch: &mut Scratchpad<C::FieldElement>,
) -> bool {
    let one = C::FieldElement::ONE;

    // y + 1 must not vanish.
    scratch.r1 = *y + one;
    let y_ok: Choice = !scratch.r1.is_zero();

    // (1 + e·r)² - 1 must be a non-zero square.
    scratch.r2 = scratch.r1.double();
    scratch.r3 = (*y - one) * scratch.r2.inv();
    scratch.r2 = scratch.r3 * C::ELLIGATOR_R;
    scratch.r3 = (one + scratch.r2).square() - one;
    let square_ok = scratch.r3.legendre().ct_eq(&one);

    // At e·r = -2 the map is only defined on one x value.
    scratch.r4 = C::ELLIGATOR_C;
    let l1 = scratch.r4.legendre();
    scratch.r4 = (scratch.r4 - one).double() * C::ELLIGATOR_S * l1 * C::ELLIGATOR_R.inv();
    let at_edge = scratch.r2.ct_eq(&-C::FieldElement::TWO);
    let edge_ok = !at_edge | scratch.r4.ct_eq(x);

    (y_ok & square_ok & edge_ok).into()
}
