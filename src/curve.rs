//! Per-curve parameter traits.
//!
//! A curve is a zero-sized marker type implementing [`CurveParams`]: the
//! immutable record of its field, Edwards/Montgomery coefficients, base
//! point, subgroup order and cofactor. Capability subtraits mark which of
//! the optional surfaces (Decaf compression, the two Elligator maps) a
//! curve supports; generic point code monomorphizes over these, so nothing
//! is dispatched at run time.

use core::fmt::Debug;

use crate::Result;
use crate::field::FieldOps;
use crate::scratch::Scratchpad;

/// Constants of one curve, in both its twisted Edwards form
/// `a·x² + y² = 1 + d·x²·y²` and its birationally equivalent Montgomery
/// form `B·v² = u³ + A·u² + u`.
pub trait CurveParams: Copy + Clone + Debug + Default + Eq + Send + Sync + 'static {
    /// Element type of the curve's prime field.
    type FieldElement: FieldOps;

    /// Twisted Edwards coefficient `a`.
    const EDWARDS_A: Self::FieldElement;

    /// Twisted Edwards coefficient `d`.
    const EDWARDS_D: Self::FieldElement;

    /// Montgomery coefficient `A = 2(a + d)/(a - d)`.
    const MONTGOMERY_A: Self::FieldElement;

    /// Montgomery coefficient `B = 4/(a - d)`.
    const MONTGOMERY_B: Self::FieldElement;

    /// `(A + 2)/4`, the ladder-step constant.
    const A_PLUS_TWO_OVER_FOUR: Self::FieldElement;

    /// Generator of the prime-order subgroup, Edwards affine coordinates.
    const GENERATOR: (Self::FieldElement, Self::FieldElement);

    /// Order of the prime subgroup. Smaller than the field modulus, so it
    /// is carried (and consumed by the scalar multipliers) as a field
    /// element.
    const ORDER: Self::FieldElement;

    /// Cofactor `h` with `#E = h·n`.
    const COFACTOR: u8;
}

/// Curves supporting Decaf point compression: `a = 1`, cofactor 4, with
/// both `d` and `a - d` non-square.
pub trait DecafParams: CurveParams {}

/// Curves supporting the Elligator-1 map: Edwards curves (`a = 1`) over
/// primes `p ≡ 3 (mod 4)`.
pub trait Elligator1Params: CurveParams {
    /// The Elligator-1 `c` parameter, `((-d)^½ - 1)/((-d)^½ + 1)`.
    const ELLIGATOR_C: Self::FieldElement;

    /// The Elligator-1 `s` parameter, `(2/c)^½`.
    const ELLIGATOR_S: Self::FieldElement;

    /// The Elligator-1 `r` parameter, `c + 1/c`.
    const ELLIGATOR_R: Self::FieldElement;
}

/// Curves supporting the Elligator-2 map: Montgomery curves with `B = 1`
/// over primes `p ≡ 5 (mod 8)`, where `u = 2` is the canonical non-square.
pub trait Elligator2Params: CurveParams {}

/// The hash-to-point surface of a curve, in Edwards affine coordinates.
///
/// Each curve wires this to whichever Elligator variant its field shape
/// admits; Elligator-2 curves convert through the birational Montgomery
/// map. Group facades and points build `from_hash`/`encode_hash` on top.
pub trait Elligator: CurveParams {
    /// Map a field element to a point, `Err(InvalidHashInput)` on the
    /// map's exceptional set.
    fn decode_hash(
        t: &Self::FieldElement,
        scratch: &mut Scratchpad<Self::FieldElement>,
    ) -> Result<(Self::FieldElement, Self::FieldElement)>;

    /// Map a point back to a field element preimage,
    /// `Err(EncodeRefused)` when [`Elligator::can_encode`] is false.
    fn encode_hash(
        x: &Self::FieldElement,
        y: &Self::FieldElement,
        scratch: &mut Scratchpad<Self::FieldElement>,
    ) -> Result<Self::FieldElement>;

    /// Whether the point has an Elligator preimage.
    fn can_encode(
        x: &Self::FieldElement,
        y: &Self::FieldElement,
        scratch: &mut Scratchpad<Self::FieldElement>,
    ) -> bool;
}
