//! Extended `(X:Y:Z:T)` Edwards points.

#![allow(non_snake_case)]

use ff::Field;
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::curve::CurveParams;
use crate::edwards::{AffinePoint, ProjectivePoint};
use crate::field::FieldOps;

/// A curve point in extended coordinates, with the auxiliary coordinate
/// `T = X·Y/Z`.
///
/// Every operation re-establishes the invariant `T·Z = X·Y`.
#[derive(Clone, Copy, Debug)]
pub struct ExtendedPoint<C: CurveParams> {
    pub(crate) X: C::FieldElement,
    pub(crate) Y: C::FieldElement,
    pub(crate) Z: C::FieldElement,
    pub(crate) T: C::FieldElement,
}

impl<C: CurveParams> ExtendedPoint<C> {
    /// The neutral element `(0 : 1 : 1 : 0)`.
    pub const IDENTITY: Self = Self {
        X: <C::FieldElement as ff::Field>::ZERO,
        Y: <C::FieldElement as ff::Field>::ONE,
        Z: <C::FieldElement as ff::Field>::ONE,
        T: <C::FieldElement as ff::Field>::ZERO,
    };

    /// The prime-subgroup generator.
    pub fn generator() -> Self {
        AffinePoint::<C>::GENERATOR.to_extended()
    }

    /// Double this point.
    ///
    /// `dbl-2008-hwcd` for a·x² + y² = 1 + d·x²·y².
    pub fn double(&self) -> Self {
        let A = self.X.square();
        let B = self.Y.square();
        let C_ = self.Z.square().double();
        let D = C::EDWARDS_A * A;
        let E = (self.X + self.Y).square() - A - B;
        let G = D + B;
        let F = G - C_;
        let H = D - B;
        Self {
            X: E * F,
            Y: G * H,
            Z: F * G,
            T: E * H,
        }
    }

    /// Whether the coordinates satisfy the curve equation and the
    /// extended-coordinate invariant.
    pub fn is_on_curve(&self) -> Choice {
        let lhs = C::EDWARDS_A * self.X.square() + self.Y.square();
        let rhs = self.Z.square() + C::EDWARDS_D * self.T.square();
        lhs.ct_eq(&rhs) & (self.X * self.Y).ct_eq(&(self.T * self.Z))
    }

    /// Whether this is the neutral element.
    pub fn is_identity(&self) -> Choice {
        self.X.is_zero() & self.Y.ct_eq(&self.Z)
    }

    /// Drop the `T` coordinate.
    pub fn to_projective(&self) -> ProjectivePoint<C> {
        ProjectivePoint {
            X: self.X,
            Y: self.Y,
            Z: self.Z,
        }
    }

    /// Scale to affine coordinates via one field inversion.
    pub fn to_affine(&self) -> AffinePoint<C> {
        let zinv = self.Z.inv();
        AffinePoint {
            x: self.X * zinv,
            y: self.Y * zinv,
        }
    }

    /// Constant-time scalar multiplication by the canonical value of `k`.
    pub fn mul_scalar(&self, k: &C::FieldElement) -> Self {
        let mut p = Self::IDENTITY;
        let mut i = C::FieldElement::NUM_BITS;
        while i > 0 {
            i -= 1;
            p = p.double();
            p.conditional_assign(&(p + self), k.bit(i));
        }
        p
    }
}

impl<C: CurveParams> Add<&ExtendedPoint<C>> for &ExtendedPoint<C> {
    type Output = ExtendedPoint<C>;

    /// `add-2008-hwcd` (asiacrypt 2008, §3.1) with general `a`.
    fn add(self, other: &ExtendedPoint<C>) -> ExtendedPoint<C> {
        let A = self.X * other.X;
        let B = self.Y * other.Y;
        let C_ = C::EDWARDS_D * self.T * other.T;
        let D = self.Z * other.Z;
        let E = (self.X + self.Y) * (other.X + other.Y) - A - B;
        let F = D - C_;
        let G = D + C_;
        let H = B - C::EDWARDS_A * A;
        ExtendedPoint {
            X: E * F,
            Y: G * H,
            Z: F * G,
            T: E * H,
        }
    }
}

define_add_variants!(
    LHS = ExtendedPoint<C>,
    RHS = ExtendedPoint<C>,
    Output = ExtendedPoint<C>
);

impl<C: CurveParams> AddAssign<&ExtendedPoint<C>> for ExtendedPoint<C> {
    fn add_assign(&mut self, rhs: &ExtendedPoint<C>) {
        *self = &*self + rhs;
    }
}

define_add_assign_variants!(LHS = ExtendedPoint<C>, RHS = ExtendedPoint<C>);

impl<C: CurveParams> Sub<&ExtendedPoint<C>> for &ExtendedPoint<C> {
    type Output = ExtendedPoint<C>;

    fn sub(self, other: &ExtendedPoint<C>) -> ExtendedPoint<C> {
        self + &-*other
    }
}

define_sub_variants!(
    LHS = ExtendedPoint<C>,
    RHS = ExtendedPoint<C>,
    Output = ExtendedPoint<C>
);

impl<C: CurveParams> SubAssign<&ExtendedPoint<C>> for ExtendedPoint<C> {
    fn sub_assign(&mut self, rhs: &ExtendedPoint<C>) {
        *self = &*self - rhs;
    }
}

define_sub_assign_variants!(LHS = ExtendedPoint<C>, RHS = ExtendedPoint<C>);

impl<C: CurveParams> Mul<&C::FieldElement> for &ExtendedPoint<C> {
    type Output = ExtendedPoint<C>;

    fn mul(self, scalar: &C::FieldElement) -> ExtendedPoint<C> {
        self.mul_scalar(scalar)
    }
}

impl<C: CurveParams> Mul<C::FieldElement> for ExtendedPoint<C> {
    type Output = Self;

    fn mul(self, scalar: C::FieldElement) -> Self {
        &self * &scalar
    }
}

impl<C: CurveParams> Neg for ExtendedPoint<C> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            X: -self.X,
            Y: self.Y,
            Z: self.Z,
            T: -self.T,
        }
    }
}

impl<C: CurveParams> Neg for &ExtendedPoint<C> {
    type Output = ExtendedPoint<C>;

    fn neg(self) -> ExtendedPoint<C> {
        -*self
    }
}

impl<C: CurveParams> ConstantTimeEq for ExtendedPoint<C> {
    fn ct_eq(&self, other: &Self) -> Choice {
        let XZ = self.X * other.Z;
        let ZX = self.Z * other.X;
        let YZ = self.Y * other.Z;
        let ZY = self.Z * other.Y;
        XZ.ct_eq(&ZX) & YZ.ct_eq(&ZY)
    }
}

impl<C: CurveParams> ConditionallySelectable for ExtendedPoint<C> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            X: C::FieldElement::conditional_select(&a.X, &b.X, choice),
            Y: C::FieldElement::conditional_select(&a.Y, &b.Y, choice),
            Z: C::FieldElement::conditional_select(&a.Z, &b.Z, choice),
            T: C::FieldElement::conditional_select(&a.T, &b.T, choice),
        }
    }
}

impl<C: CurveParams> PartialEq for ExtendedPoint<C> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C: CurveParams> Eq for ExtendedPoint<C> {}

impl<C: CurveParams> Default for ExtendedPoint<C> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<C: CurveParams> From<AffinePoint<C>> for ExtendedPoint<C> {
    fn from(p: AffinePoint<C>) -> Self {
        p.to_extended()
    }
}

impl<C: CurveParams> From<ProjectivePoint<C>> for ExtendedPoint<C> {
    fn from(p: ProjectivePoint<C>) -> Self {
        p.to_extended()
    }
}
