//! Scaled (affine) Edwards points.

#![allow(non_snake_case)]

use ff::Field;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::curve::CurveParams;
use crate::edwards::{ExtendedPoint, ProjectivePoint, edwards_to_montgomery};
use crate::field::FieldOps;
use crate::{Error, Result};

/// A curve point in affine coordinates, i.e. scaled so `Z = 1`.
///
/// Scaling is what the projective representations' `to_affine` does once;
/// keeping the result as its own type makes repeated scaling free.
#[derive(Clone, Copy, Debug)]
pub struct AffinePoint<C: CurveParams> {
    /// Edwards x coordinate.
    pub x: C::FieldElement,
    /// Edwards y coordinate.
    pub y: C::FieldElement,
}

impl<C: CurveParams> AffinePoint<C> {
    /// The neutral element `(0, 1)`.
    pub const IDENTITY: Self = Self {
        x: <C::FieldElement as ff::Field>::ZERO,
        y: <C::FieldElement as ff::Field>::ONE,
    };

    /// The prime-subgroup generator.
    pub const GENERATOR: Self = Self {
        x: C::GENERATOR.0,
        y: C::GENERATOR.1,
    };

    /// Whether the coordinates satisfy the Edwards curve equation.
    pub fn is_on_curve(&self) -> Choice {
        let xx = self.x.square();
        let yy = self.y.square();
        (C::EDWARDS_A * xx + yy).ct_eq(&(C::FieldElement::ONE + C::EDWARDS_D * xx * yy))
    }

    /// Whether this is the neutral element.
    pub fn is_identity(&self) -> Choice {
        self.ct_eq(&Self::IDENTITY)
    }

    /// Lift into projective coordinates.
    pub fn to_projective(&self) -> ProjectivePoint<C> {
        ProjectivePoint {
            X: self.x,
            Y: self.y,
            Z: C::FieldElement::ONE,
        }
    }

    /// Lift into extended coordinates.
    pub fn to_extended(&self) -> ExtendedPoint<C> {
        ExtendedPoint {
            X: self.x,
            Y: self.y,
            Z: C::FieldElement::ONE,
            T: self.x * self.y,
        }
    }

    /// The corresponding Montgomery affine coordinates `(u, v)`.
    ///
    /// The 2-torsion elements (where `1 - y` or `x` vanishes) have no
    /// Montgomery image and yield [`Error::InvalidPoint`].
    pub fn to_montgomery(&self) -> Result<(C::FieldElement, C::FieldElement)> {
        let singular = (C::FieldElement::ONE - self.y).is_zero() | self.x.is_zero();
        if singular.into() {
            return Err(Error::InvalidPoint);
        }
        Ok(edwards_to_montgomery::<C>(&self.x, &self.y))
    }
}

impl<C: CurveParams> ConstantTimeEq for AffinePoint<C> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y)
    }
}

impl<C: CurveParams> ConditionallySelectable for AffinePoint<C> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: C::FieldElement::conditional_select(&a.x, &b.x, choice),
            y: C::FieldElement::conditional_select(&a.y, &b.y, choice),
        }
    }
}

impl<C: CurveParams> PartialEq for AffinePoint<C> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C: CurveParams> Eq for AffinePoint<C> {}

impl<C: CurveParams> Default for AffinePoint<C> {
    fn default() -> Self {
        Self::IDENTITY
    }
}
