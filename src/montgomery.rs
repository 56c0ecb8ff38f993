//! x-only Montgomery arithmetic and the Montgomery ladder.

#![allow(non_snake_case)]

use ff::Field;
use subtle::{Choice, ConditionallyNegatable, ConditionallySelectable, ConstantTimeEq};

use crate::curve::CurveParams;
use crate::edwards::AffinePoint;
use crate::field::FieldOps;
use crate::scratch::Scratchpad;
use crate::{Error, Result};

/// The Montgomery `u`-coordinate of a curve point, the ladder's input.
#[derive(Clone, Copy, Debug)]
pub struct MontgomeryXPoint<C: CurveParams>(
    /// The affine `u`-coordinate.
    pub C::FieldElement,
);

/// A point on the Montgomery form of the curve, `(U : W)` with `u = U/W`.
///
/// The `v` coordinate is dropped; differential addition keeps the ladder
/// closed over this representation. The point at infinity is `(1 : 0)`.
#[derive(Clone, Copy, Debug)]
pub struct ProjectiveMontgomeryXPoint<C: CurveParams> {
    pub(crate) U: C::FieldElement,
    pub(crate) W: C::FieldElement,
}

impl<C: CurveParams> MontgomeryXPoint<C> {
    /// The Montgomery `u`-coordinate of the prime-subgroup generator.
    pub fn generator() -> Result<Self> {
        let (u, _) = AffinePoint::<C>::GENERATOR.to_montgomery()?;
        Ok(Self(u))
    }

    /// Lift to the projective x-only representation.
    pub fn to_projective(&self) -> ProjectiveMontgomeryXPoint<C> {
        ProjectiveMontgomeryXPoint {
            U: self.0,
            W: C::FieldElement::ONE,
        }
    }

    /// `x(k·P)` by the Montgomery ladder, in constant time.
    ///
    /// `k` is consumed as its canonical integer value; the ladder always
    /// walks the field's full bit length regardless of the magnitude of
    /// `k`, and every swap is a masked select. Multiples of the group
    /// order land on the point at infinity, which scales to zero under the
    /// inverse-of-zero convention.
    pub fn mul_x(
        &self,
        k: &C::FieldElement,
        scratch: &mut Scratchpad<C::FieldElement>,
    ) -> C::FieldElement {
        let (x0, _) = self.ladder(k, scratch);
        x0.to_affine_x()
    }

    /// Run the ladder, returning `(k·P, (k+1)·P)` in x-only form.
    ///
    /// Register allocation: `r0/r1` hold R0, `r2/r3` hold R1, `r4` holds
    /// the fixed affine difference `x(P)`.
    pub(crate) fn ladder(
        &self,
        k: &C::FieldElement,
        scratch: &mut Scratchpad<C::FieldElement>,
    ) -> (
        ProjectiveMontgomeryXPoint<C>,
        ProjectiveMontgomeryXPoint<C>,
    ) {
        scratch.r0 = C::FieldElement::ONE;
        scratch.r1 = C::FieldElement::ZERO;
        scratch.r2 = self.0;
        scratch.r3 = C::FieldElement::ONE;
        scratch.r4 = self.0;

        let mut swap = Choice::from(0);
        let mut i = C::FieldElement::NUM_BITS;
        while i > 0 {
            i -= 1;
            let bit = k.bit(i);
            let choice = swap ^ bit;
            C::FieldElement::conditional_swap(&mut scratch.r0, &mut scratch.r2, choice);
            C::FieldElement::conditional_swap(&mut scratch.r1, &mut scratch.r3, choice);
            ladder_step::<C>(scratch);
            swap = bit;
        }
        // Undo the swap the lowest bit left pending.
        C::FieldElement::conditional_swap(&mut scratch.r0, &mut scratch.r2, swap);
        C::FieldElement::conditional_swap(&mut scratch.r1, &mut scratch.r3, swap);

        (
            ProjectiveMontgomeryXPoint {
                U: scratch.r0,
                W: scratch.r1,
            },
            ProjectiveMontgomeryXPoint {
                U: scratch.r2,
                W: scratch.r3,
            },
        )
    }
}

/// One ladder step: `(R0, R1) ← (2·R0, R0 + R1)` given the affine
/// difference `x(R1 - R0)` in `r4`.
///
/// Montgomery 1987, fifth and sixth displays, with common subexpressions
/// shared and `Z` of the difference fixed at 1.
fn ladder_step<C: CurveParams>(scratch: &mut Scratchpad<C::FieldElement>) {
    let t0 = scratch.r0 + scratch.r1; // U_P + W_P
    let t1 = scratch.r0 - scratch.r1; // U_P - W_P
    let t2 = scratch.r2 + scratch.r3; // U_Q + W_Q
    let t3 = scratch.r2 - scratch.r3; // U_Q - W_Q

    let t4 = t0.square();
    let t5 = t1.square();
    let t6 = t4 - t5; // 4 U_P W_P

    let t7 = t0 * t3;
    let t8 = t1 * t2;
    let t9 = t7 + t8; // 2 (U_P U_Q - W_P W_Q)
    let t10 = t7 - t8; // 2 (W_P U_Q - U_P W_Q)

    let t11 = t9.square();
    let t12 = t10.square();
    let t13 = C::A_PLUS_TWO_OVER_FOUR * t6;

    scratch.r0 = t4 * t5;
    scratch.r1 = t6 * (t5 + t13);
    scratch.r2 = t11;
    scratch.r3 = scratch.r4 * t12;
}

impl<C: CurveParams> ProjectiveMontgomeryXPoint<C> {
    /// The point at infinity.
    pub const IDENTITY: Self = Self {
        U: <C::FieldElement as ff::Field>::ONE,
        W: <C::FieldElement as ff::Field>::ZERO,
    };

    /// Double this point.
    pub fn double(&self) -> Self {
        let v1 = (self.U + self.W).square();
        let v2 = (self.U - self.W).square();
        let v3 = v1 - v2;
        let v4 = C::A_PLUS_TWO_OVER_FOUR * v3;
        Self {
            U: v1 * v2,
            W: v3 * (v2 + v4),
        }
    }

    /// The affine `u`-coordinate, `U/W`; zero for the point at infinity.
    pub fn to_affine_x(&self) -> C::FieldElement {
        self.U * self.W.inv()
    }

    /// Recover the full Montgomery point `(u, v)` with the requested sign
    /// of `v`, rejecting `u` values off the curve.
    pub fn to_affine(&self, v_is_negative: Choice) -> Result<(C::FieldElement, C::FieldElement)> {
        let u = self.to_affine_x();
        let uu = u.square();
        let vv = (uu * u + C::MONTGOMERY_A * uu + u) * C::MONTGOMERY_B.inv();
        if (!vv.is_square()).into() {
            return Err(Error::InvalidPoint);
        }
        let mut v = vv.sqrt_unchecked();
        v.conditional_negate(v.is_negative() ^ v_is_negative);
        Ok((u, v))
    }
}

impl<C: CurveParams> ConstantTimeEq for ProjectiveMontgomeryXPoint<C> {
    fn ct_eq(&self, other: &Self) -> Choice {
        (self.U * other.W).ct_eq(&(other.U * self.W))
    }
}

impl<C: CurveParams> ConditionallySelectable for ProjectiveMontgomeryXPoint<C> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            U: C::FieldElement::conditional_select(&a.U, &b.U, choice),
            W: C::FieldElement::conditional_select(&a.W, &b.W, choice),
        }
    }
}

impl<C: CurveParams> PartialEq for ProjectiveMontgomeryXPoint<C> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C: CurveParams> Eq for ProjectiveMontgomeryXPoint<C> {}
