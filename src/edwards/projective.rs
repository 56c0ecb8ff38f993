//! Projective `(X:Y:Z)` Edwards points.

#![allow(non_snake_case)]

use ff::Field;
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::curve::CurveParams;
use crate::edwards::{AffinePoint, ExtendedPoint};
use crate::field::FieldOps;

/// A curve point in projective coordinates, affine `(X/Z, Y/Z)`, `Z ≠ 0`.
#[derive(Clone, Copy, Debug)]
pub struct ProjectivePoint<C: CurveParams> {
    pub(crate) X: C::FieldElement,
    pub(crate) Y: C::FieldElement,
    pub(crate) Z: C::FieldElement,
}

impl<C: CurveParams> ProjectivePoint<C> {
    /// The neutral element `(0 : 1 : 1)`.
    pub const IDENTITY: Self = Self {
        X: <C::FieldElement as ff::Field>::ZERO,
        Y: <C::FieldElement as ff::Field>::ONE,
        Z: <C::FieldElement as ff::Field>::ONE,
    };

    /// The prime-subgroup generator.
    pub const GENERATOR: Self = Self {
        X: C::GENERATOR.0,
        Y: C::GENERATOR.1,
        Z: <C::FieldElement as ff::Field>::ONE,
    };

    /// Double this point.
    ///
    /// `dbl-2008-bbjlp`: inversion-free doubling for a·x² + y² = 1 + d·x²·y².
    pub fn double(&self) -> Self {
        let B = (self.X + self.Y).square();
        let C_ = self.X.square();
        let D = self.Y.square();
        let E = C::EDWARDS_A * C_;
        let F = E + D;
        let H = self.Z.square();
        let J = F - H.double();
        Self {
            X: (B - C_ - D) * J,
            Y: F * (E - D),
            Z: F * J,
        }
    }

    /// Whether the coordinates satisfy the curve equation
    /// `(a·X² + Y²)·Z² = Z⁴ + d·X²·Y²`.
    pub fn is_on_curve(&self) -> Choice {
        let XX = self.X.square();
        let YY = self.Y.square();
        let ZZ = self.Z.square();
        let lhs = (C::EDWARDS_A * XX + YY) * ZZ;
        let rhs = ZZ.square() + C::EDWARDS_D * XX * YY;
        lhs.ct_eq(&rhs)
    }

    /// Whether this is the neutral element.
    pub fn is_identity(&self) -> Choice {
        self.X.is_zero() & self.Y.ct_eq(&self.Z)
    }

    /// Scale to affine coordinates via one field inversion. Idempotent by
    /// construction: affine points carry no projective factor to strip.
    pub fn to_affine(&self) -> AffinePoint<C> {
        let zinv = self.Z.inv();
        AffinePoint {
            x: self.X * zinv,
            y: self.Y * zinv,
        }
    }

    /// Convert to extended coordinates without an inversion: the point
    /// `(X·Z : Y·Z : Z² : X·Y)` represents the same element and satisfies
    /// `T·Z = X·Y`.
    pub fn to_extended(&self) -> ExtendedPoint<C> {
        ExtendedPoint {
            X: self.X * self.Z,
            Y: self.Y * self.Z,
            Z: self.Z.square(),
            T: self.X * self.Y,
        }
    }

    /// Constant-time scalar multiplication by the canonical value of `k`.
    ///
    /// Uniform double-and-add: the addend is folded in by conditional
    /// assignment on every one of the field's bit positions, so the trip
    /// count and memory traffic do not depend on `k`.
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

impl<C: CurveParams> Add<&ProjectivePoint<C>> for &ProjectivePoint<C> {
    type Output = ProjectivePoint<C>;

    /// `add-2008-bbjlp`: unified addition, valid for doubling as well.
    fn add(self, other: &ProjectivePoint<C>) -> ProjectivePoint<C> {
        let A = self.Z * other.Z;
        let B = A.square();
        let C_ = self.X * other.X;
        let D = self.Y * other.Y;
        let E = C::EDWARDS_D * C_ * D;
        let F = B - E;
        let G = B + E;
        ProjectivePoint {
            X: A * F * ((self.X + self.Y) * (other.X + other.Y) - C_ - D),
            Y: A * G * (D - C::EDWARDS_A * C_),
            Z: F * G,
        }
    }
}

define_add_variants!(
    LHS = ProjectivePoint<C>,
    RHS = ProjectivePoint<C>,
    Output = ProjectivePoint<C>
);

impl<C: CurveParams> AddAssign<&ProjectivePoint<C>> for ProjectivePoint<C> {
    fn add_assign(&mut self, rhs: &ProjectivePoint<C>) {
        *self = &*self + rhs;
    }
}

define_add_assign_variants!(LHS = ProjectivePoint<C>, RHS = ProjectivePoint<C>);

impl<C: CurveParams> Sub<&ProjectivePoint<C>> for &ProjectivePoint<C> {
    type Output = ProjectivePoint<C>;

    fn sub(self, other: &ProjectivePoint<C>) -> ProjectivePoint<C> {
        self + &-*other
    }
}

define_sub_variants!(
    LHS = ProjectivePoint<C>,
    RHS = ProjectivePoint<C>,
    Output = ProjectivePoint<C>
);

impl<C: CurveParams> SubAssign<&ProjectivePoint<C>> for ProjectivePoint<C> {
    fn sub_assign(&mut self, rhs: &ProjectivePoint<C>) {
        *self = &*self - rhs;
    }
}

define_sub_assign_variants!(LHS = ProjectivePoint<C>, RHS = ProjectivePoint<C>);

impl<C: CurveParams> Mul<&C::FieldElement> for &ProjectivePoint<C> {
    type Output = ProjectivePoint<C>;

    fn mul(self, scalar: &C::FieldElement) -> ProjectivePoint<C> {
        self.mul_scalar(scalar)
    }
}

impl<C: CurveParams> Mul<C::FieldElement> for ProjectivePoint<C> {
    type Output = Self;

    fn mul(self, scalar: C::FieldElement) -> Self {
        &self * &scalar
    }
}

impl<C: CurveParams> Neg for ProjectivePoint<C> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            X: -self.X,
            Y: self.Y,
            Z: self.Z,
        }
    }
}

impl<C: CurveParams> Neg for &ProjectivePoint<C> {
    type Output = ProjectivePoint<C>;

    fn neg(self) -> ProjectivePoint<C> {
        -*self
    }
}

impl<C: CurveParams> ConstantTimeEq for ProjectivePoint<C> {
    fn ct_eq(&self, other: &Self) -> Choice {
        let XZ = self.X * other.Z;
        let ZX = self.Z * other.X;
        let YZ = self.Y * other.Z;
        let ZY = self.Z * other.Y;
        XZ.ct_eq(&ZX) & YZ.ct_eq(&ZY)
    }
}

impl<C: CurveParams> ConditionallySelectable for ProjectivePoint<C> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            X: C::FieldElement::conditional_select(&a.X, &b.X, choice),
            Y: C::FieldElement::conditional_select(&a.Y, &b.Y, choice),
            Z: C::FieldElement::conditional_select(&a.Z, &b.Z, choice),
        }
    }
}

impl<C: CurveParams> PartialEq for ProjectivePoint<C> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C: CurveParams> Eq for ProjectivePoint<C> {}

impl<C: CurveParams> Default for ProjectivePoint<C> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<C: CurveParams> From<AffinePoint<C>> for ProjectivePoint<C> {
    fn from(p: AffinePoint<C>) -> Self {
        p.to_projective()
    }
}
