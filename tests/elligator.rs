//! Elligator round-trip and domain-predicate properties.

mod common;

macro_rules! elligator1_suite {
    ($name:ident, $curve:ty) => {
        mod $name {
            use ff::Field;
            use safecurves::curve::{CurveParams, Elligator};
            use safecurves::edwards::{AffinePoint, ProjectivePoint};
            use safecurves::field::FieldOps;
            use safecurves::group::{Group, HashGroup};
            use safecurves::scratch::Scratchpad;
            use safecurves::Error;

            use crate::common::TestRng;

            type Fe = <$curve as CurveParams>::FieldElement;
            type Point = ProjectivePoint<$curve>;

            #[test]
            fn decode_lands_on_the_curve() {
                let mut pad = Scratchpad::new();
                let mut rng = TestRng::new(0xe11);
                for i in 0..24u64 {
                    let t = if i < 12 {
                        Fe::from_u64(i + 2)
                    } else {
                        Fe::random(&mut rng)
                    };
                    let (x, y) = <$curve>::decode_hash(&t, &mut pad).unwrap();
                    assert!(bool::from(AffinePoint::<$curve> { x, y }.is_on_curve()));
                }
            }

            #[test]
            fn encode_after_decode_returns_the_absolute_preimage() {
                let mut pad = Scratchpad::new();
                let mut rng = TestRng::new(0xe12);
                for i in 0..24u64 {
                    let t = if i < 12 {
                        Fe::from_u64(i + 2)
                    } else {
                        Fe::random(&mut rng)
                    };
                    let (x, y) = <$curve>::decode_hash(&t, &mut pad).unwrap();
                    // The image of decode is always encodable...
                    assert!(<$curve>::can_encode(&x, &y, &mut pad));
                    // ...and folds back onto |t|.
                    let t2 = <$curve>::encode_hash(&x, &y, &mut pad).unwrap();
                    assert_eq!(t2, t.abs());
                }
            }

            #[test]
            fn decode_after_encode_is_the_identity_where_defined() {
                let mut rng = TestRng::new(0xe13);
                let mut encodable = 0;
                for _ in 0..24 {
                    let p = Point::GENERATOR.mul_scalar(&Fe::random(&mut rng));
                    if !p.can_encode() {
                        assert_eq!(p.encode_hash().unwrap_err(), Error::EncodeRefused);
                        continue;
                    }
                    encodable += 1;
                    let t = p.encode_hash().unwrap();
                    assert!(!bool::from(t.is_negative()));
                    assert_eq!(Point::from_hash(&t).unwrap(), p);
                }
                // Roughly half the subgroup is encodable; just require the
                // sample saw both sides.
                assert!(encodable >= 4 && encodable <= 20);
            }

            #[test]
            fn exceptional_input_is_rejected() {
                assert_eq!(
                    Point::from_hash(&-Fe::ONE).unwrap_err(),
                    Error::InvalidHashInput
                );
            }

            #[test]
            fn identity_is_not_encodable() {
                assert!(!Point::zero_point().can_encode());
            }

            #[test]
            fn cofactor_multiples_land_in_the_prime_subgroup() {
                // Hash outputs cover the whole curve, not just the prime
                // subgroup; clearing the cofactor must always land inside.
                let mut rng = TestRng::new(0xc0f);
                let h = Fe::from_u64(u64::from(<$curve>::COFACTOR));
                for _ in 0..8 {
                    let p = Point::from_hash(&Fe::random(&mut rng)).unwrap();
                    let cleared = p.mul_scalar(&h);
                    assert!(bool::from(
                        cleared.mul_scalar(&<$curve>::ORDER).is_identity()
                    ));
                }
            }
        }
    };
}

elligator1_suite!(curve1174, safecurves::Curve1174);
elligator1_suite!(e222, safecurves::E222);
elligator1_suite!(e382, safecurves::E382);
elligator1_suite!(e521, safecurves::E521);

mod curve25519 {
    use ff::Field;
    use safecurves::curve::{CurveParams, Elligator};
    use safecurves::curves::Fe25519;
    use safecurves::edwards::ProjectivePoint;
    use safecurves::elligator::elligator2;
    use safecurves::field::FieldOps;
    use safecurves::group::{Group, HashGroup};
    use safecurves::scratch::Scratchpad;
    use safecurves::Curve25519;

    type Point = ProjectivePoint<Curve25519>;

    use crate::common::TestRng;

    #[test]
    fn decode_lands_on_the_montgomery_curve() {
        let mut pad = Scratchpad::new();
        for r in 1..24u64 {
            let (x, y) = elligator2::decode::<Curve25519>(&Fe25519::from_u64(r), &mut pad).unwrap();
            // B·v² = u³ + A·u² + u with B = 1.
            let xx = x.square();
            let rhs = xx * x + Curve25519::MONTGOMERY_A * xx + x;
            assert_eq!(y.square(), rhs);
        }
    }

    #[test]
    fn encode_after_decode_folds_onto_the_preimage_pair() {
        let mut pad = Scratchpad::new();
        let mut can = 0;
        for r in 1..40u64 {
            let r = Fe25519::from_u64(r);
            let (x, y) = elligator2::decode::<Curve25519>(&r, &mut pad).unwrap();
            if !elligator2::can_encode::<Curve25519>(&x, &y, &mut pad) {
                // Outside the image the preimage family disagrees.
                continue;
            }
            can += 1;
            let r2 = elligator2::encode::<Curve25519>(&x, &y, &mut pad).unwrap();
            assert!(r2 == r || r2 == -r);
        }
        // The residuosity conditions admit about a quarter of the inputs.
        assert!(can >= 5);
    }

    #[test]
    fn decode_after_encode_is_the_identity_where_defined() {
        let mut pad = Scratchpad::new();
        let mut rng = TestRng::new(0x255);
        let mut can = 0;
        for _ in 0..40 {
            let p = Point::GENERATOR.mul_scalar(&Fe25519::random(&mut rng));
            let a = p.to_affine();
            if !Curve25519::can_encode(&a.x, &a.y, &mut pad) {
                continue;
            }
            can += 1;
            let r = Curve25519::encode_hash(&a.x, &a.y, &mut pad).unwrap();
            let q = Point::from_hash_with(&r, &mut pad).unwrap();
            assert_eq!(q, p);
        }
        assert!(can >= 4);
    }

    #[test]
    fn facade_from_hash_matches_direct_decode() {
        let mut pad = Scratchpad::new();
        let r = Fe25519::from_u64(7);
        let p = Point::from_hash(&r).unwrap();
        let (u, v) = elligator2::decode::<Curve25519>(&r, &mut pad).unwrap();
        let q = Point::from_montgomery(u, v).unwrap();
        assert_eq!(p, q);
    }
}
