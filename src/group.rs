//! Group facades: one curve bound to one point representation.
//!
//! The facade traits are implemented directly by the point types, so
//! `ProjectivePoint<Curve1174>`, `ExtendedPoint<E521>` or
//! `DecafPoint<E521>` *is* the bound group. Every constructor returns a
//! fresh owned value; nothing is shared with the caller.

use ff::Field;
use subtle::Choice;

use crate::curve::{CurveParams, DecafParams, Elligator};
use crate::decaf::{CompressedDecaf, DecafPoint};
use crate::edwards::{AffinePoint, ExtendedPoint, ProjectivePoint, montgomery_to_edwards,
                     on_montgomery_curve};
use crate::field::FieldOps;
use crate::scratch::{Scratchpad, with_scratchpad};
use crate::{Error, Result};

/// The operations every bound group exposes.
pub trait Group: Sized {
    /// The curve this group is bound to.
    type Curve: CurveParams;

    /// A fresh copy of the prime-subgroup generator.
    fn base_point() -> Self;

    /// A fresh copy of the neutral element.
    fn zero_point() -> Self;

    /// Construct a point from Edwards affine coordinates, validating the
    /// curve equation.
    fn from_edwards(
        x: <Self::Curve as CurveParams>::FieldElement,
        y: <Self::Curve as CurveParams>::FieldElement,
    ) -> Result<Self>;

    /// Construct a point from Montgomery affine coordinates, validating
    /// the curve equation; the 2-torsion singularities of the birational
    /// map are rejected.
    fn from_montgomery(
        u: <Self::Curve as CurveParams>::FieldElement,
        v: <Self::Curve as CurveParams>::FieldElement,
    ) -> Result<Self>;

    /// The order of the prime subgroup.
    fn prime_order() -> <Self::Curve as CurveParams>::FieldElement {
        <Self::Curve as CurveParams>::ORDER
    }

    /// The curve cofactor.
    fn cofactor() -> u8 {
        <Self::Curve as CurveParams>::COFACTOR
    }

    /// A scratchpad sized for this group's field.
    fn scratchpad() -> Scratchpad<<Self::Curve as CurveParams>::FieldElement> {
        Scratchpad::new()
    }
}

/// Groups reachable from a hash: Elligator in both directions.
pub trait HashGroup: Group
where
    Self::Curve: Elligator,
{
    /// Map a field element to a group element.
    fn from_hash(t: &<Self::Curve as CurveParams>::FieldElement) -> Result<Self> {
        with_scratchpad(|scratch| Self::from_hash_with(t, scratch))
    }

    /// Map a field element to a group element, reusing a scratchpad.
    fn from_hash_with(
        t: &<Self::Curve as CurveParams>::FieldElement,
        scratch: &mut Scratchpad<<Self::Curve as CurveParams>::FieldElement>,
    ) -> Result<Self>;

    /// Map this element back to a field element preimage.
    fn encode_hash(&self) -> Result<<Self::Curve as CurveParams>::FieldElement>
    where
        Self: Sized,
    {
        with_scratchpad(|scratch| self.encode_hash_with(scratch))
    }

    /// Map back to a preimage, reusing a scratchpad.
    fn encode_hash_with(
        &self,
        scratch: &mut Scratchpad<<Self::Curve as CurveParams>::FieldElement>,
    ) -> Result<<Self::Curve as CurveParams>::FieldElement>;

    /// Whether this element has an Elligator preimage.
    fn can_encode(&self) -> bool {
        with_scratchpad(|scratch| self.can_encode_with(scratch))
    }

    /// The `can_encode` predicate, reusing a scratchpad.
    fn can_encode_with(
        &self,
        scratch: &mut Scratchpad<<Self::Curve as CurveParams>::FieldElement>,
    ) -> bool;
}

/// Groups with a compressed wire form.
pub trait CompressedGroup: Group {
    /// Parse and decompress an untrusted encoding.
    fn from_compressed(bytes: &[u8]) -> Result<Self>;
}

fn affine_from_edwards<C: CurveParams>(
    x: C::FieldElement,
    y: C::FieldElement,
) -> Result<AffinePoint<C>> {
    let p = AffinePoint { x, y };
    if bool::from(p.is_on_curve()) {
        Ok(p)
    } else {
        Err(Error::InvalidPoint)
    }
}

fn affine_from_montgomery<C: CurveParams>(
    u: C::FieldElement,
    v: C::FieldElement,
) -> Result<AffinePoint<C>> {
    if !bool::from(on_montgomery_curve::<C>(&u, &v)) {
        return Err(Error::InvalidPoint);
    }
    // v = 0 and u = -1 are the 2-torsion singularities of the map.
    let singular: Choice = v.is_zero() | (u + C::FieldElement::ONE).is_zero();
    if singular.into() {
        return Err(Error::InvalidPoint);
    }
    let (x, y) = montgomery_to_edwards::<C>(&u, &v);
    Ok(AffinePoint { x, y })
}

impl<C: CurveParams> Group for ProjectivePoint<C> {
    type Curve = C;

    fn base_point() -> Self {
        Self::GENERATOR
    }

    fn zero_point() -> Self {
        Self::IDENTITY
    }

    fn from_edwards(x: C::FieldElement, y: C::FieldElement) -> Result<Self> {
        Ok(affine_from_edwards::<C>(x, y)?.to_projective())
    }

    fn from_montgomery(u: C::FieldElement, v: C::FieldElement) -> Result<Self> {
        Ok(affine_from_montgomery::<C>(u, v)?.to_projective())
    }
}

impl<C: CurveParams> Group for ExtendedPoint<C> {
    type Curve = C;

    fn base_point() -> Self {
        Self::generator()
    }

    fn zero_point() -> Self {
        Self::IDENTITY
    }

    fn from_edwards(x: C::FieldElement, y: C::FieldElement) -> Result<Self> {
        Ok(affine_from_edwards::<C>(x, y)?.to_extended())
    }

    fn from_montgomery(u: C::FieldElement, v: C::FieldElement) -> Result<Self> {
        Ok(affine_from_montgomery::<C>(u, v)?.to_extended())
    }
}

impl<C: DecafParams> Group for DecafPoint<C> {
    type Curve = C;

    fn base_point() -> Self {
        Self::generator()
    }

    fn zero_point() -> Self {
        Self::IDENTITY
    }

    fn from_edwards(x: C::FieldElement, y: C::FieldElement) -> Result<Self> {
        Ok(Self(affine_from_edwards::<C>(x, y)?.to_extended()))
    }

    fn from_montgomery(u: C::FieldElement, v: C::FieldElement) -> Result<Self> {
        Ok(Self(affine_from_montgomery::<C>(u, v)?.to_extended()))
    }
}

impl<C: Elligator> HashGroup for ProjectivePoint<C> {
    fn from_hash_with(
        t: &C::FieldElement,
        scratch: &mut Scratchpad<C::FieldElement>,
    ) -> Result<Self> {
        let (x, y) = C::decode_hash(t, scratch)?;
        Ok(AffinePoint { x, y }.to_projective())
    }

    fn encode_hash_with(
        &self,
        scratch: &mut Scratchpad<C::FieldElement>,
    ) -> Result<C::FieldElement> {
        let p = self.to_affine();
        C::encode_hash(&p.x, &p.y, scratch)
    }

    fn can_encode_with(&self, scratch: &mut Scratchpad<C::FieldElement>) -> bool {
        let p = self.to_affine();
        C::can_encode(&p.x, &p.y, scratch)
    }
}

impl<C: Elligator> HashGroup for ExtendedPoint<C> {
    fn from_hash_with(
        t: &C::FieldElement,
        scratch: &mut Scratchpad<C::FieldElement>,
    ) -> Result<Self> {
        let (x, y) = C::decode_hash(t, scratch)?;
        Ok(AffinePoint { x, y }.to_extended())
    }

    fn encode_hash_with(
        &self,
        scratch: &mut Scratchpad<C::FieldElement>,
    ) -> Result<C::FieldElement> {
        let p = self.to_affine();
        C::encode_hash(&p.x, &p.y, scratch)
    }

    fn can_encode_with(&self, scratch: &mut Scratchpad<C::FieldElement>) -> bool {
        let p = self.to_affine();
        C::can_encode(&p.x, &p.y, scratch)
    }
}

impl<C: DecafParams + Elligator> HashGroup for DecafPoint<C> {
    fn from_hash_with(
        t: &C::FieldElement,
        scratch: &mut Scratchpad<C::FieldElement>,
    ) -> Result<Self> {
        ExtendedPoint::from_hash_with(t, scratch).map(Self)
    }

    fn encode_hash_with(
        &self,
        scratch: &mut Scratchpad<C::FieldElement>,
    ) -> Result<C::FieldElement> {
        self.0.encode_hash_with(scratch)
    }

    fn can_encode_with(&self, scratch: &mut Scratchpad<C::FieldElement>) -> bool {
        self.0.can_encode_with(scratch)
    }
}

impl<C: DecafParams> CompressedGroup for DecafPoint<C> {
    fn from_compressed(bytes: &[u8]) -> Result<Self> {
        CompressedDecaf::<C>::from_be_slice(bytes)?.decompress()
    }
}
