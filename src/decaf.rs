//! Decaf point compression for the cofactor-4 Edwards curves.
//!
//! A [`DecafPoint`] is an equivalence class of curve points: two
//! representatives are the same group element exactly when they differ by
//! a 4-torsion element. Compression emits one canonical field element per
//! class, so serialized points carry no cofactor component at all.
//!
//! The encoding walks the correspondence with the Jacobi quartic
//! `t² = s⁴ + 2(1 - 2d)s² + 1` (the curve's 2-isogeny partner, with
//! `x = 2s/(1 + s²)` and `y = (1 - s²)/t`). Three canonicalization steps
//! pick one representative per class, each implemented branchlessly:
//!
//! 1. a conditional 4-torsion rotation chosen by the Legendre symbol of
//!    `Z² - d·X²` (well defined because `a - d` is a non-square),
//! 2. quartic fold selection by the multiplicative invariant χ(s·t) = 1,
//! 3. the sign fold `s ← |s|`.

#![allow(non_snake_case)]

use ff::Field;
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::curve::{CurveParams, DecafParams};
use crate::edwards::ExtendedPoint;
use crate::field::FieldOps;
use crate::scratch::{Scratchpad, with_scratchpad};
use crate::{Error, Result};

/// A prime-order group element of a Decaf-capable curve.
///
/// Internally an extended-coordinates representative; equality, not the
/// coordinates, is what identifies the group element.
#[derive(Clone, Copy, Debug)]
pub struct DecafPoint<C: DecafParams>(pub(crate) ExtendedPoint<C>);

/// The canonical compressed form of a [`DecafPoint`]: a single
/// non-negative field element.
#[derive(Clone, Copy, Debug)]
pub struct CompressedDecaf<C: DecafParams>(pub(crate) C::FieldElement);

impl<C: DecafParams> DecafPoint<C> {
    /// The neutral element.
    pub const IDENTITY: Self = Self(ExtendedPoint::IDENTITY);

    /// The prime-subgroup generator.
    pub fn generator() -> Self {
        Self(ExtendedPoint::generator())
    }

    /// Whether this is the neutral element.
    pub fn is_identity(&self) -> Choice {
        self.ct_eq(&Self::IDENTITY)
    }

    /// The extended-coordinates representative this element carries.
    ///
    /// Any 4-torsion translate of it denotes the same group element.
    pub fn as_extended(&self) -> &ExtendedPoint<C> {
        &self.0
    }

    /// Double this point.
    pub fn double(&self) -> Self {
        Self(self.0.double())
    }

    /// Constant-time scalar multiplication.
    pub fn mul_scalar(&self, k: &C::FieldElement) -> Self {
        Self(self.0.mul_scalar(k))
    }

    /// Compress to the canonical class encoding.
    pub fn compress(&self) -> CompressedDecaf<C> {
        with_scratchpad(|scratch| self.compress_with(scratch))
    }

    /// Compress, reusing a caller-provided scratchpad.
    pub fn compress_with(&self, scratch: &mut Scratchpad<C::FieldElement>) -> CompressedDecaf<C> {
        let one = C::FieldElement::ONE;
        let (X, Y, Z) = (self.0.X, self.0.Y, self.0.Z);
        let ZZ = Z.square();

        // Rotate by the 4-torsion element (1, 0) unless Z² - d·X² is a
        // square; exactly one orientation passes, since their product is
        // the non-square (a - d) times a square.
        let d2x = ZZ - C::EDWARDS_D * X.square();
        let d2y = ZZ - C::EDWARDS_D * Y.square();
        let rot = d2x.legendre().ct_eq(&-one);
        let Xr = C::FieldElement::conditional_select(&X, &Y, rot);
        let Yr = C::FieldElement::conditional_select(&Y, &-X, rot);
        scratch.r0 = C::FieldElement::conditional_select(&d2x, &d2y, rot); // D2

        // r1 = ±1/(X·Z·√D2); zero when X is (the rotation of) zero, which
        // is exactly the identity class, making its encoding zero.
        scratch.r1 = (Xr.square() * ZZ * scratch.r0).inverse_square_root().0;
        // r2 = ±√D2
        scratch.r2 = scratch.r1 * Xr * Z * scratch.r0;
        // Pick the quartic fold with χ(s·t) = 1: flip the root by the
        // Legendre symbol of 2·√D2·X.
        scratch.r3 = (scratch.r2 * Xr).double().legendre();
        scratch.r2 *= scratch.r3;
        // r4 = exact 1/(X·Z), recovered multiplicatively.
        scratch.r4 = Xr * Z * scratch.r0 * scratch.r1.square();

        let s = (ZZ - Yr * scratch.r2) * scratch.r4;
        CompressedDecaf(s.abs())
    }
}

impl<C: DecafParams> CompressedDecaf<C> {
    /// The encoding of the neutral element.
    pub const IDENTITY: Self = Self(<C::FieldElement as ff::Field>::ZERO);

    /// Parse a compressed point from its fixed-length big-endian encoding.
    ///
    /// Rejects wrong lengths and non-canonical field encodings; the
    /// negativity and on-curve conditions are checked by
    /// [`CompressedDecaf::decompress`].
    pub fn from_be_slice(bytes: &[u8]) -> Result<Self> {
        C::FieldElement::from_be_slice(bytes)
            .map(Self)
            .ok_or(Error::InvalidPoint)
    }

    /// Write the fixed-length big-endian encoding.
    pub fn write_be_bytes(&self, out: &mut [u8]) {
        self.0.write_be_bytes(out)
    }

    /// The encoding as a field element.
    pub fn as_field_element(&self) -> &C::FieldElement {
        &self.0
    }

    /// Decompress into a class representative.
    ///
    /// Validation (failures are public events and may return early): the
    /// encoding must be non-negative, and `(1 + s²)² - 4·d·s²` must be a
    /// non-zero square so the quartic `t` exists.
    pub fn decompress(&self) -> Result<DecafPoint<C>> {
        with_scratchpad(|scratch| self.decompress_with(scratch))
    }

    /// Decompress, reusing a caller-provided scratchpad.
    pub fn decompress_with(
        &self,
        scratch: &mut Scratchpad<C::FieldElement>,
    ) -> Result<DecafPoint<C>> {
        let one = C::FieldElement::ONE;
        let s = self.0;
        if s.is_negative().into() {
            return Err(Error::InvalidPoint);
        }

        let ss = s.square();
        scratch.r0 = one + ss; // u1
        scratch.r1 = scratch.r0.square() - C::EDWARDS_D.mul_small(4) * ss; // u2
        let (ir, ok) = (scratch.r1 * scratch.r0.square()).inverse_square_root();
        if (!ok).into() {
            return Err(Error::InvalidPoint);
        }
        scratch.r2 = ir;

        // x = 2s/u1, reconstructed without a dedicated inversion.
        let x = s.double() * scratch.r0 * scratch.r1 * scratch.r2.square();
        // y = ±(1 - s²)/√u2; fix the sign so χ(s·t) = 1, keeping the
        // identity (s = 0, where the symbol vanishes) on y = +1.
        scratch.r3 = (one - ss) * scratch.r0 * scratch.r2;
        scratch.r4 = (s * (one - ss) * scratch.r3).legendre();
        scratch.r4 = C::FieldElement::conditional_select(&scratch.r4, &one, scratch.r4.is_zero());
        let y = scratch.r3 * scratch.r4;

        let point = ExtendedPoint {
            X: x,
            Y: y,
            Z: one,
            T: x * y,
        };
        debug_assert!(bool::from(point.is_on_curve()));
        Ok(DecafPoint(point))
    }
}

impl<C: DecafParams> ConstantTimeEq for DecafPoint<C> {
    /// Class equality: representatives are equal when they differ by a
    /// 4-torsion translate, i.e. `X₁·Y₂ = X₂·Y₁` or `X₁·X₂ = -Y₁·Y₂`.
    fn ct_eq(&self, other: &Self) -> Choice {
        let a = (self.0.X * other.0.Y).ct_eq(&(other.0.X * self.0.Y));
        let b = (self.0.X * other.0.X + self.0.Y * other.0.Y).is_zero();
        a | b
    }
}

impl<C: DecafParams> ConditionallySelectable for DecafPoint<C> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(ExtendedPoint::conditional_select(&a.0, &b.0, choice))
    }
}

impl<C: DecafParams> PartialEq for DecafPoint<C> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C: DecafParams> Eq for DecafPoint<C> {}

impl<C: DecafParams> Default for DecafPoint<C> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<C: DecafParams> ConstantTimeEq for CompressedDecaf<C> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl<C: DecafParams> PartialEq for CompressedDecaf<C> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C: DecafParams> Eq for CompressedDecaf<C> {}

impl<C: DecafParams> Add<&DecafPoint<C>> for &DecafPoint<C> {
    type Output = DecafPoint<C>;

    fn add(self, other: &DecafPoint<C>) -> DecafPoint<C> {
        DecafPoint(&self.0 + &other.0)
    }
}

impl<C: DecafParams> Sub<&DecafPoint<C>> for &DecafPoint<C> {
    type Output = DecafPoint<C>;

    fn sub(self, other: &DecafPoint<C>) -> DecafPoint<C> {
        DecafPoint(&self.0 - &other.0)
    }
}

impl<C: DecafParams> Mul<&C::FieldElement> for &DecafPoint<C> {
    type Output = DecafPoint<C>;

    fn mul(self, scalar: &C::FieldElement) -> DecafPoint<C> {
        self.mul_scalar(scalar)
    }
}

impl<C: DecafParams> Add for DecafPoint<C> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl<C: DecafParams> Add<&DecafPoint<C>> for DecafPoint<C> {
    type Output = Self;

    fn add(self, rhs: &Self) -> Self {
        &self + rhs
    }
}

impl<C: DecafParams> Sub for DecafPoint<C> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl<C: DecafParams> Mul<C::FieldElement> for DecafPoint<C> {
    type Output = Self;

    fn mul(self, scalar: C::FieldElement) -> Self {
        self.mul_scalar(&scalar)
    }
}

impl<C: DecafParams> Neg for DecafPoint<C> {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl<C: DecafParams> Neg for &DecafPoint<C> {
    type Output = DecafPoint<C>;

    fn neg(self) -> DecafPoint<C> {
        -*self
    }
}

impl<C: DecafParams> AddAssign<&DecafPoint<C>> for DecafPoint<C> {
    fn add_assign(&mut self, rhs: &DecafPoint<C>) {
        *self = &*self + rhs;
    }
}

impl<C: DecafParams> SubAssign<&DecafPoint<C>> for DecafPoint<C> {
    fn sub_assign(&mut self, rhs: &DecafPoint<C>) {
        *self = &*self - rhs;
    }
}
