//! Internal macros.
//!
//! The operator-variant macros follow the `curve25519-dalek` convention of
//! implementing the borrow/non-borrow combinations in terms of the
//! reference-reference impl.

/// Define borrow and non-borrow variants of `Add`.
macro_rules! define_add_variants {
    (LHS = $lhs:ty, RHS = $rhs:ty, Output = $out:ty) => {
        impl<'b, C: CurveParams> Add<&'b $rhs> for $lhs {
            type Output = $out;

            fn add(self, rhs: &'b $rhs) -> $out {
                &self + rhs
            }
        }

        impl<'a, C: CurveParams> Add<$rhs> for &'a $lhs {
            type Output = $out;

            fn add(self, rhs: $rhs) -> $out {
                self + &rhs
            }
        }

        impl<C: CurveParams> Add<$rhs> for $lhs {
            type Output = $out;

            fn add(self, rhs: $rhs) -> $out {
                &self + &rhs
            }
        }
    };
}

/// Define borrow and non-borrow variants of `Sub`.
macro_rules! define_sub_variants {
    (LHS = $lhs:ty, RHS = $rhs:ty, Output = $out:ty) => {
        impl<'b, C: CurveParams> Sub<&'b $rhs> for $lhs {
            type Output = $out;

            fn sub(self, rhs: &'b $rhs) -> $out {
                &self - rhs
            }
        }

        impl<'a, C: CurveParams> Sub<$rhs> for &'a $lhs {
            type Output = $out;

            fn sub(self, rhs: $rhs) -> $out {
                self - &rhs
            }
        }

        impl<C: CurveParams> Sub<$rhs> for $lhs {
            type Output = $out;

            fn sub(self, rhs: $rhs) -> $out {
                &self - &rhs
            }
        }
    };
}

/// Define non-borrow variants of `AddAssign`.
macro_rules! define_add_assign_variants {
    (LHS = $lhs:ty, RHS = $rhs:ty) => {
        impl<C: CurveParams> AddAssign<$rhs> for $lhs {
            fn add_assign(&mut self, rhs: $rhs) {
                *self += &rhs;
            }
        }
    };
}

/// Define non-borrow variants of `SubAssign`.
macro_rules! define_sub_assign_variants {
    (LHS = $lhs:ty, RHS = $rhs:ty) => {
        impl<C: CurveParams> SubAssign<$rhs> for $lhs {
            fn sub_assign(&mut self, rhs: $rhs) {
                *self -= &rhs;
            }
        }
    };
}

/// Define borrow and non-borrow variants of `Mul`.
macro_rules! define_mul_variants {
    (LHS = $lhs:ty, RHS = $rhs:ty, Output = $out:ty) => {
        impl<'b, C: CurveParams> Mul<&'b $rhs> for $lhs {
            type Output = $out;

            fn mul(self, rhs: &'b $rhs) -> $out {
                &self * rhs
            }
        }

        impl<'a, C: CurveParams> Mul<$rhs> for &'a $lhs {
            type Output = $out;

            fn mul(self, rhs: $rhs) -> $out {
                self * &rhs
            }
        }

        impl<C: CurveParams> Mul<$rhs> for $lhs {
            type Output = $out;

            fn mul(self, rhs: $rhs) -> $out {
                &self * &rhs
            }
        }
    };
}

/// Define a field element type for one curve's prime `p = 2^k - c`.
///
/// Expands to a `crypto_bigint` modulus type, a [`FieldParams`] impl
/// carrying the curve's fixed exponent chains, and a public type alias for
/// the concrete [`FieldElement`].
///
/// [`FieldParams`]: crate::field::FieldParams
/// [`FieldElement`]: crate::field::FieldElement
macro_rules! curve_field {
    (
        params: $params:ident,
        element: $fe:ident,
        uint: $uint:ty,
        modulus: $modulus:expr,
        num_bits: $bits:expr,
        p_mod_8: $pm8:expr,
        legendre_exp: $legendre:expr,
        inv_exp: $inv:expr,
        sqrt_exp: $sqrt:expr,
        inv_sqrt_exp: $inv_sqrt:expr,
        sqrt_minus_one: $sqrt_m1:expr,
        fe_doc: $fe_doc:expr,
    ) => {
        use $crate::crypto_bigint::impl_modulus;
        impl_modulus!($params, $uint, $modulus);

        impl $crate::field::FieldParams<{ <$uint>::LIMBS }> for $params {
            const NUM_BITS: u32 = $bits;
            const NUM_BYTES: usize = ($bits as usize).div_ceil(8);
            const P_MOD_8: u8 = $pm8;
            const LEGENDRE_EXP: $uint = <$uint>::from_be_hex($legendre);
            const INV_EXP: $uint = <$uint>::from_be_hex($inv);
            const SQRT_EXP: $uint = <$uint>::from_be_hex($sqrt);
            const INV_SQRT_EXP: $uint = <$uint>::from_be_hex($inv_sqrt);
            const SQRT_MINUS_ONE: $uint = <$uint>::from_be_hex($sqrt_m1);
        }

        #[doc = $fe_doc]
        pub type $fe = $crate::field::FieldElement<$params, { <$uint>::LIMBS }>;
    };
}
