//! Twisted Edwards point arithmetic.
//!
//! Two group element representations are provided: projective `(X:Y:Z)`
//! ([`ProjectivePoint`]) and extended `(X:Y:Z:T)` ([`ExtendedPoint`], which
//! maintains `T·Z = X·Y`). [`AffinePoint`] is the scaled form both reduce
//! to; conversion to it costs the one field inversion the others avoid.

pub mod affine;
pub mod extended;
pub mod projective;

pub use affine::AffinePoint;
pub use extended::ExtendedPoint;
pub use projective::ProjectivePoint;

use ff::Field;
use crate::curve::CurveParams;
use crate::field::FieldOps;

/// Map Montgomery affine coordinates to Edwards affine coordinates,
/// `x = u/v`, `y = (u - 1)/(u + 1)`, with the zero-inverse convention at
/// the 2-torsion singularities. Callers that must reject those use the
/// checked constructors instead.
pub(crate) fn montgomery_to_edwards<C: CurveParams>(
    u: &C::FieldElement,
    v: &C::FieldElement,
) -> (C::FieldElement, C::FieldElement) {
    let x = *u * v.inv();
    let y = (*u - C::FieldElement::ONE) * (*u + C::FieldElement::ONE).inv();
    (x, y)
}

/// Map Edwards affine coordinates to Montgomery affine coordinates,
/// `u = (1 + y)/(1 - y)`, `v = u/x`, with the zero-inverse convention.
pub(crate) fn edwards_to_montgomery<C: CurveParams>(
    x: &C::FieldElement,
    y: &C::FieldElement,
) -> (C::FieldElement, C::FieldElement) {
    let u = (C::FieldElement::ONE + y) * (C::FieldElement::ONE - y).inv();
    let v = u * x.inv();
    (u, v)
}

/// Whether `(u, v)` satisfies the Montgomery equation
/// `B·v² = u³ + A·u² + u`.
pub(crate) fn on_montgomery_curve<C: CurveParams>(
    u: &C::FieldElement,
    v: &C::FieldElement,
) -> subtle::Choice {
    use subtle::ConstantTimeEq;

    let uu = u.square();
    let rhs = uu * u + C::MONTGOMERY_A * uu + u;
    (C::MONTGOMERY_B * v.square()).ct_eq(&rhs)
}
