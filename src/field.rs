//! Constant-time prime field arithmetic.
//!
//! Every supported curve lives over a prime of the form `p = 2^k - c`. A
//! field is described by a [`FieldParams`] type (generated per curve by the
//! `curve_field!` macro) and its elements are [`FieldElement`]s: thin
//! wrappers around [`crypto_bigint`]'s Montgomery form residues.
//!
//! Inversion, square roots and Legendre symbols are fixed exponentiation
//! chains. The exponents are public per-curve constants, so the data flow
//! of every operation is independent of its (possibly secret) operands.

use core::fmt::{self, Debug, Display, Formatter, LowerHex};
use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crypto_bigint::{
    Encoding, Uint, Word,
    modular::{ConstMontyForm, ConstMontyParams},
};
use ff::Field;
use rand_core::RngCore;
use subtle::{Choice, ConditionallyNegatable, ConditionallySelectable, ConstantTimeEq, CtOption};
use zeroize::DefaultIsZeroes;

/// Parameters of one prime field, beyond the Montgomery constants supplied
/// by [`ConstMontyParams`].
pub trait FieldParams<const LIMBS: usize>: ConstMontyParams<LIMBS> {
    /// Bit length of the field modulus.
    const NUM_BITS: u32;

    /// Length of the canonical big-endian encoding: `⌈NUM_BITS / 8⌉`.
    const NUM_BYTES: usize;

    /// Residue of the modulus mod 8; selects the square root chain.
    const P_MOD_8: u8;

    /// `(p - 1) / 2`: the Euler criterion exponent. Also the largest
    /// "non-negative" canonical value.
    const LEGENDRE_EXP: Uint<LIMBS>;

    /// `(p - 2)`: the Fermat inversion exponent.
    const INV_EXP: Uint<LIMBS>;

    /// `(p + 1) / 4` when `p ≡ 3 (mod 4)`, else `(p + 3) / 8`.
    const SQRT_EXP: Uint<LIMBS>;

    /// `(p - 3) / 4` when `p ≡ 3 (mod 4)`, else `(p - 5) / 8`.
    const INV_SQRT_EXP: Uint<LIMBS>;

    /// `2^((p - 1) / 4)`, a square root of -1, for `p ≡ 5 (mod 8)` fields.
    /// Zero for `p ≡ 3 (mod 4)` fields, which never use it.
    const SQRT_MINUS_ONE: Uint<LIMBS>;
}

/// An element of the prime field selected by `P`.
///
/// Elements are value-like and `Copy`; canonical reduction is maintained by
/// the Montgomery representation, so equality and serialization always see
/// the reduced class representative.
pub struct FieldElement<P: FieldParams<LIMBS>, const LIMBS: usize>(
    pub(crate) ConstMontyForm<P, LIMBS>,
);

impl<P: FieldParams<LIMBS>, const LIMBS: usize> Clone for FieldElement<P, LIMBS> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> Copy for FieldElement<P, LIMBS> {}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> FieldElement<P, LIMBS> {
    /// Additive identity.
    pub const ZERO: Self = Self(ConstMontyForm::ZERO);

    /// Multiplicative identity.
    pub const ONE: Self = Self(ConstMontyForm::ONE);

    /// The constant two.
    pub const TWO: Self = Self(ConstMontyForm::new(&Uint::from_u64(2)));

    /// The constant minus one.
    pub const MINUS_ONE: Self = Self(ConstMontyForm::ZERO.sub(&ConstMontyForm::ONE));

    /// Parse a constant from a full-width big-endian hex string.
    ///
    /// Intended for defining curve constants; panics on malformed input.
    pub const fn from_be_hex(hex: &str) -> Self {
        Self(ConstMontyForm::new(&Uint::from_be_hex(hex)))
    }

    /// Convert a small integer into a field element.
    pub const fn from_u64(w: u64) -> Self {
        Self(ConstMontyForm::new(&Uint::from_u64(w)))
    }

    /// Square this element.
    pub fn square(&self) -> Self {
        Self(self.0.square())
    }

    /// Double this element.
    pub fn double(&self) -> Self {
        Self(self.0.add(&self.0))
    }

    /// Raise to a fixed public exponent.
    fn pow(&self, exp: &Uint<LIMBS>) -> Self {
        Self(self.0.pow(exp))
    }

    /// Multiplicative inverse via Fermat: `self^(p - 2)`.
    ///
    /// Zero inverts to zero by convention; callers that care must check.
    pub fn invert(&self) -> Self {
        self.pow(&P::INV_EXP)
    }

    /// Legendre symbol as a field element: `self^((p - 1) / 2)`, which is
    /// 0, 1 or -1. Returning the field value lets callers fold the symbol
    /// directly into products, as the hash-to-curve maps do.
    pub fn legendre(&self) -> Self {
        self.pow(&P::LEGENDRE_EXP)
    }

    /// Whether this element is a square (zero counts as square).
    pub fn is_square(&self) -> Choice {
        !self.legendre().ct_eq(&Self::MINUS_ONE)
    }

    /// A square root of this element, if one exists.
    ///
    /// For `p ≡ 3 (mod 4)` this is the single chain `self^((p + 1) / 4)`;
    /// for `p ≡ 5 (mod 8)` it is `self^((p + 3) / 8)` with a conditional
    /// multiplication by `√-1`. The result is unspecified when no root
    /// exists; callers must have established residuosity beforehand.
    pub fn sqrt_unchecked(&self) -> Self {
        let r = self.pow(&P::SQRT_EXP);
        if P::P_MOD_8 == 5 {
            let r_i = r * Self(ConstMontyForm::new(&P::SQRT_MINUS_ONE));
            let root_found = r.square().ct_eq(self);
            Self::conditional_select(&r_i, &r, root_found)
        } else {
            r
        }
    }

    /// `(1/√self, is_square)`. Returns `(0, false)` for zero input and an
    /// unspecified first component for non-residues.
    pub fn inverse_square_root(&self) -> (Self, Choice) {
        let mut r = self.pow(&P::INV_SQRT_EXP);
        if P::P_MOD_8 == 5 {
            // r² * self = self^((p-1)/4) = ±1 for residues.
            let c = r.square() * self;
            let r_i = r * Self(ConstMontyForm::new(&P::SQRT_MINUS_ONE));
            r = Self::conditional_select(&r, &r_i, c.ct_eq(&Self::MINUS_ONE));
        }
        let ok = (r.square() * self).ct_eq(&Self::ONE);
        (r, ok)
    }

    /// Whether this element is zero.
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }

    /// Whether the canonical value lies in the "negative" half
    /// `((p - 1) / 2, p)`.
    pub fn is_negative(&self) -> Choice {
        ct_gt_words(&self.0.retrieve().to_words(), &P::LEGENDRE_EXP.to_words())
    }

    /// The non-negative element of `{self, -self}`.
    pub fn abs(&self) -> Self {
        let mut r = *self;
        r.conditional_negate(self.is_negative());
        r
    }

    /// Multiply by a small public integer.
    pub fn mul_small(&self, k: u64) -> Self {
        *self * Self::from_u64(k)
    }

    /// Divide by a small public integer.
    pub fn div_small(&self, k: u64) -> Self {
        *self * Self::from_u64(k).invert()
    }

    /// Bit `index` of the canonical value, in constant time. Bits at or
    /// beyond the modulus width are zero.
    pub fn bit(&self, index: u32) -> Choice {
        let words = self.0.retrieve().to_words();
        let word_bits = Word::BITS;
        let limb = (index / word_bits) as usize;
        if limb >= LIMBS {
            return Choice::from(0);
        }
        Choice::from(((words[limb] >> (index % word_bits)) & 1) as u8)
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> FieldElement<P, LIMBS>
where
    Uint<LIMBS>: Encoding,
{
    /// Parse a canonical fixed-length big-endian encoding.
    ///
    /// `None` if the slice is not exactly `NUM_BYTES` long or the value is
    /// not fully reduced. Parse failures are public events.
    pub fn from_be_slice(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != P::NUM_BYTES {
            return None;
        }
        let mut repr = Uint::<LIMBS>::ZERO.to_be_bytes();
        let offset = repr.as_ref().len() - P::NUM_BYTES;
        repr.as_mut()[offset..].copy_from_slice(bytes);
        let uint = Uint::from_be_bytes(repr);
        let fe = Self(ConstMontyForm::new(&uint));
        // Canonical iff the monty round trip preserves the value.
        if fe.0.retrieve().ct_eq(&uint).into() {
            Some(fe)
        } else {
            None
        }
    }

    /// Write the canonical fixed-length big-endian encoding.
    ///
    /// Panics unless `out` is exactly `NUM_BYTES` long.
    pub fn write_be_bytes(&self, out: &mut [u8]) {
        assert_eq!(out.len(), P::NUM_BYTES);
        let repr = self.0.retrieve().to_be_bytes();
        let offset = repr.as_ref().len() - P::NUM_BYTES;
        out.copy_from_slice(&repr.as_ref()[offset..]);
    }
}

/// Constant-time `a > b` on little-endian word arrays of equal length.
fn ct_gt_words(a: &[Word], b: &[Word]) -> Choice {
    debug_assert_eq!(a.len(), b.len());
    // b - a underflows exactly when a > b.
    let mut borrow: u128 = 0;
    for (&aw, &bw) in a.iter().zip(b.iter()) {
        let d = (bw as u128).wrapping_sub(aw as u128).wrapping_sub(borrow);
        borrow = d >> 127;
    }
    Choice::from(borrow as u8)
}

//
// Trait plumbing
//

impl<P: FieldParams<LIMBS>, const LIMBS: usize> Default for FieldElement<P, LIMBS> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> DefaultIsZeroes for FieldElement<P, LIMBS> {}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> ConstantTimeEq for FieldElement<P, LIMBS> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> ConditionallySelectable for FieldElement<P, LIMBS> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(ConstMontyForm::conditional_select(&a.0, &b.0, choice))
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> PartialEq for FieldElement<P, LIMBS> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> Eq for FieldElement<P, LIMBS> {}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> Display for FieldElement<P, LIMBS> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0.retrieve())
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> Debug for FieldElement<P, LIMBS> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement({:x})", self.0.retrieve())
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> LowerHex for FieldElement<P, LIMBS> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0.retrieve())
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> Add<&FieldElement<P, LIMBS>>
    for &FieldElement<P, LIMBS>
{
    type Output = FieldElement<P, LIMBS>;

    fn add(self, rhs: &FieldElement<P, LIMBS>) -> FieldElement<P, LIMBS> {
        FieldElement(self.0.add(&rhs.0))
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> Sub<&FieldElement<P, LIMBS>>
    for &FieldElement<P, LIMBS>
{
    type Output = FieldElement<P, LIMBS>;

    fn sub(self, rhs: &FieldElement<P, LIMBS>) -> FieldElement<P, LIMBS> {
        FieldElement(self.0.sub(&rhs.0))
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> Mul<&FieldElement<P, LIMBS>>
    for &FieldElement<P, LIMBS>
{
    type Output = FieldElement<P, LIMBS>;

    fn mul(self, rhs: &FieldElement<P, LIMBS>) -> FieldElement<P, LIMBS> {
        FieldElement(self.0.mul(&rhs.0))
    }
}

/// Expand the `&op&` impl above into the owned/borrowed combinations plus
/// the assign forms.
macro_rules! field_op_variants {
    ($op:ident, $func:ident, $assign_op:ident, $assign_func:ident) => {
        impl<P: FieldParams<LIMBS>, const LIMBS: usize> $op for FieldElement<P, LIMBS> {
            type Output = Self;

            fn $func(self, rhs: Self) -> Self {
                (&self).$func(&rhs)
            }
        }

        impl<P: FieldParams<LIMBS>, const LIMBS: usize> $op<&Self> for FieldElement<P, LIMBS> {
            type Output = Self;

            fn $func(self, rhs: &Self) -> Self {
                (&self).$func(rhs)
            }
        }

        impl<P: FieldParams<LIMBS>, const LIMBS: usize> $op<FieldElement<P, LIMBS>>
            for &FieldElement<P, LIMBS>
        {
            type Output = FieldElement<P, LIMBS>;

            fn $func(self, rhs: FieldElement<P, LIMBS>) -> FieldElement<P, LIMBS> {
                self.$func(&rhs)
            }
        }

        impl<P: FieldParams<LIMBS>, const LIMBS: usize> $assign_op for FieldElement<P, LIMBS> {
            fn $assign_func(&mut self, rhs: Self) {
                *self = (&*self).$func(&rhs);
            }
        }

        impl<P: FieldParams<LIMBS>, const LIMBS: usize> $assign_op<&Self>
            for FieldElement<P, LIMBS>
        {
            fn $assign_func(&mut self, rhs: &Self) {
                *self = (&*self).$func(rhs);
            }
        }
    };
}

field_op_variants!(Add, add, AddAssign, add_assign);
field_op_variants!(Sub, sub, SubAssign, sub_assign);
field_op_variants!(Mul, mul, MulAssign, mul_assign);

impl<P: FieldParams<LIMBS>, const LIMBS: usize> Neg for FieldElement<P, LIMBS> {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.neg())
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> Neg for &FieldElement<P, LIMBS> {
    type Output = FieldElement<P, LIMBS>;

    fn neg(self) -> FieldElement<P, LIMBS> {
        -*self
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> Sum for FieldElement<P, LIMBS> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a, P: FieldParams<LIMBS>, const LIMBS: usize> Sum<&'a FieldElement<P, LIMBS>>
    for FieldElement<P, LIMBS>
{
    fn sum<I: Iterator<Item = &'a FieldElement<P, LIMBS>>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> Product for FieldElement<P, LIMBS> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, Mul::mul)
    }
}

impl<'a, P: FieldParams<LIMBS>, const LIMBS: usize> Product<&'a FieldElement<P, LIMBS>>
    for FieldElement<P, LIMBS>
{
    fn product<I: Iterator<Item = &'a FieldElement<P, LIMBS>>>(iter: I) -> Self {
        iter.copied().product()
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> Field for FieldElement<P, LIMBS>
where
    Uint<LIMBS>: Encoding,
{
    const ZERO: Self = Self::ZERO;
    const ONE: Self = Self::ONE;

    fn random(mut rng: impl RngCore) -> Self {
        let mut repr = Uint::<LIMBS>::ZERO.to_be_bytes();
        let offset = repr.as_ref().len() - P::NUM_BYTES;
        let top_mask = 0xffu8 >> (8 * P::NUM_BYTES as u32 - P::NUM_BITS);
        loop {
            rng.fill_bytes(&mut repr.as_mut()[offset..]);
            repr.as_mut()[offset] &= top_mask;
            if let Some(fe) = Self::from_be_slice(&repr.as_ref()[offset..]) {
                return fe;
            }
        }
    }

    fn square(&self) -> Self {
        self.square()
    }

    fn double(&self) -> Self {
        self.double()
    }

    fn invert(&self) -> CtOption<Self> {
        CtOption::new(self.invert(), !self.is_zero())
    }

    fn sqrt(&self) -> CtOption<Self> {
        let r = self.sqrt_unchecked();
        CtOption::new(r, r.square().ct_eq(self))
    }

    fn sqrt_ratio(num: &Self, div: &Self) -> (Choice, Self) {
        ff::helpers::sqrt_ratio_generic(num, div)
    }
}

/// The field operations generic curve code relies on.
///
/// Implemented once for every [`FieldElement`] instantiation; the methods
/// forward to the inherent impls above. Generic point, ladder, Decaf and
/// Elligator code is written against this trait.
pub trait FieldOps: Field + ConditionallyNegatable {
    /// Bit length of the field modulus.
    const NUM_BITS: u32;
    /// Length of the canonical big-endian encoding.
    const NUM_BYTES: usize;
    /// The constant two.
    const TWO: Self;

    /// Convert a small integer into a field element.
    fn from_u64(w: u64) -> Self;
    /// Parse a canonical fixed-length big-endian encoding.
    fn from_be_slice(bytes: &[u8]) -> Option<Self>;
    /// Write the canonical fixed-length big-endian encoding.
    fn write_be_bytes(&self, out: &mut [u8]);
    /// Fermat inverse; zero maps to zero.
    fn inv(&self) -> Self;
    /// Square root, unspecified for non-residues.
    fn sqrt_unchecked(&self) -> Self;
    /// `(1/√self, is_square)`; `(0, false)` for zero.
    fn inverse_square_root(&self) -> (Self, Choice);
    /// Legendre symbol as a field element (0, 1 or -1).
    fn legendre(&self) -> Self;
    /// Whether this element is a square (zero counts).
    fn is_square(&self) -> Choice;
    /// Whether the canonical value exceeds `(p - 1) / 2`.
    fn is_negative(&self) -> Choice;
    /// The non-negative element of `{self, -self}`.
    fn abs(&self) -> Self;
    /// Multiply by a small public integer.
    fn mul_small(&self, k: u64) -> Self;
    /// Divide by a small public integer.
    fn div_small(&self, k: u64) -> Self;
    /// Constant-time bit extraction from the canonical value.
    fn bit(&self, index: u32) -> Choice;
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> FieldOps for FieldElement<P, LIMBS>
where
    Uint<LIMBS>: Encoding,
{
    const NUM_BITS: u32 = P::NUM_BITS;
    const NUM_BYTES: usize = P::NUM_BYTES;
    const TWO: Self = Self::TWO;

    fn from_u64(w: u64) -> Self {
        Self::from_u64(w)
    }

    fn from_be_slice(bytes: &[u8]) -> Option<Self> {
        Self::from_be_slice(bytes)
    }

    fn write_be_bytes(&self, out: &mut [u8]) {
        self.write_be_bytes(out)
    }

    fn inv(&self) -> Self {
        self.invert()
    }

    fn sqrt_unchecked(&self) -> Self {
        self.sqrt_unchecked()
    }

    fn inverse_square_root(&self) -> (Self, Choice) {
        self.inverse_square_root()
    }

    fn legendre(&self) -> Self {
        self.legendre()
    }

    fn is_square(&self) -> Choice {
        self.is_square()
    }

    fn is_negative(&self) -> Choice {
        self.is_negative()
    }

    fn abs(&self) -> Self {
        self.abs()
    }

    fn mul_small(&self, k: u64) -> Self {
        self.mul_small(k)
    }

    fn div_small(&self, k: u64) -> Self {
        self.div_small(k)
    }

    fn bit(&self, index: u32) -> Choice {
        self.bit(index)
    }
}
