//! Decaf compression properties on the cofactor-4 curves.

mod common;

macro_rules! decaf_suite {
    ($name:ident, $curve:ty) => {
        mod $name {
            use ff::Field;
            use safecurves::curve::CurveParams;
            use safecurves::decaf::{CompressedDecaf, DecafPoint};
            use safecurves::edwards::ExtendedPoint;
            use safecurves::field::FieldOps;
            use safecurves::group::{CompressedGroup, Group};
            use safecurves::Error;

            use crate::common::TestRng;

            type Fe = <$curve as CurveParams>::FieldElement;

            fn sample_points(n: usize) -> Vec<DecafPoint<$curve>> {
                let mut rng = TestRng::new(0xdecaf);
                (0..n)
                    .map(|_| DecafPoint::<$curve>::generator().mul_scalar(&Fe::random(&mut rng)))
                    .collect()
            }

            #[test]
            fn round_trip() {
                for p in sample_points(8) {
                    let s = p.compress();
                    assert!(!bool::from(s.as_field_element().is_negative()));
                    let q = s.decompress().unwrap();
                    assert_eq!(q, p);
                    assert_eq!(q.compress(), s);
                }
            }

            #[test]
            fn compression_is_constant_on_torsion_cosets() {
                // The rational 4-torsion: (0, -1) of order 2, (±1, 0) of
                // order 4.
                let t2 = DecafPoint::<$curve>::from_edwards(Fe::ZERO, -Fe::ONE).unwrap();
                let t4 = DecafPoint::<$curve>::from_edwards(Fe::ONE, Fe::ZERO).unwrap();
                for p in sample_points(4) {
                    let s = p.compress();
                    assert_eq!((&p + &t2).compress(), s);
                    assert_eq!((&p + &t4).compress(), s);
                    assert_eq!((&p + &t4 + &t2).compress(), s);
                    // ...and the translates compare equal as group elements.
                    assert_eq!(&p + &t4, p);
                    assert_eq!(&p + &t2, p);
                }
            }

            #[test]
            fn compression_is_injective_on_distinct_elements() {
                let mut seen = Vec::new();
                for p in sample_points(8) {
                    let mut bytes = vec![0u8; Fe::NUM_BYTES];
                    p.compress().write_be_bytes(&mut bytes);
                    assert!(!seen.contains(&bytes));
                    seen.push(bytes);
                }
            }

            #[test]
            fn identity_compresses_to_zero() {
                let id = DecafPoint::<$curve>::IDENTITY;
                assert_eq!(id.compress(), CompressedDecaf::<$curve>::IDENTITY);
                assert!(bool::from(
                    CompressedDecaf::<$curve>::IDENTITY
                        .decompress()
                        .unwrap()
                        .is_identity()
                ));
            }

            #[test]
            fn negative_encodings_are_rejected() {
                let s = DecafPoint::<$curve>::generator().compress();
                let neg = -*s.as_field_element();
                let mut bytes = vec![0u8; Fe::NUM_BYTES];
                neg.write_be_bytes(&mut bytes);
                let parsed = CompressedDecaf::<$curve>::from_be_slice(&bytes).unwrap();
                assert_eq!(parsed.decompress().unwrap_err(), Error::InvalidPoint);
            }

            #[test]
            fn wire_round_trip_through_bytes() {
                let p = sample_points(1)[0];
                let mut bytes = vec![0u8; Fe::NUM_BYTES];
                p.compress().write_be_bytes(&mut bytes);
                let q = DecafPoint::<$curve>::from_compressed(&bytes).unwrap();
                assert_eq!(q, p);
                // Wrong lengths never parse.
                assert!(DecafPoint::<$curve>::from_compressed(&bytes[1..]).is_err());
            }

            #[test]
            fn scalar_arithmetic_descends_to_the_quotient() {
                let g = DecafPoint::<$curve>::generator();
                let five = g.mul_scalar(&Fe::from_u64(5));
                let two_three = &g.mul_scalar(&Fe::from_u64(2)) + &g.mul_scalar(&Fe::from_u64(3));
                assert_eq!(five, two_three);
                assert!(bool::from(g.mul_scalar(&<$curve>::ORDER).is_identity()));
            }

            #[test]
            fn decompressed_representative_is_on_curve() {
                for p in sample_points(3) {
                    let q = p.compress().decompress().unwrap();
                    let ext: &ExtendedPoint<$curve> = q.as_extended();
                    assert!(bool::from(ext.is_on_curve()));
                }
            }
        }
    };
}

decaf_suite!(curve1174, safecurves::Curve1174);
decaf_suite!(e222, safecurves::E222);
decaf_suite!(e382, safecurves::E382);
decaf_suite!(e521, safecurves::E521);

mod non_canonical {
    use safecurves::decaf::CompressedDecaf;
    use safecurves::Curve1174;
    use safecurves::Error;

    #[test]
    fn unreduced_field_encodings_are_rejected() {
        // The modulus itself: numerically ≡ 0, but not a canonical string.
        let p_bytes =
            hex_literal::hex!("07fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7");
        assert_eq!(
            CompressedDecaf::<Curve1174>::from_be_slice(&p_bytes).unwrap_err(),
            Error::InvalidPoint
        );

        // A value past (p-1)/2 fails decompression even though it parses.
        let high =
            hex_literal::hex!("07fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff0");
        let parsed = CompressedDecaf::<Curve1174>::from_be_slice(&high).unwrap();
        assert_eq!(parsed.decompress().unwrap_err(), Error::InvalidPoint);
    }
}
