//! Group law and ladder properties, exercised on every curve in the
//! catalogue.

mod common;

macro_rules! group_laws {
    ($name:ident, $curve:ty) => {
        mod $name {
            use ff::Field;
            use safecurves::curve::CurveParams;
            use safecurves::edwards::{ExtendedPoint, ProjectivePoint};
            use safecurves::field::FieldOps;
            use safecurves::group::Group;
            use safecurves::montgomery::MontgomeryXPoint;
            use safecurves::scratch::Scratchpad;

            use crate::common::TestRng;

            type Fe = <$curve as CurveParams>::FieldElement;
            type Point = ProjectivePoint<$curve>;

            fn sample_scalars(n: usize) -> Vec<Fe> {
                let mut rng = TestRng::new(0x5afe);
                (0..n).map(|_| Fe::random(&mut rng)).collect()
            }

            fn sample_points(n: usize) -> Vec<Point> {
                sample_scalars(n)
                    .iter()
                    .map(|k| Point::GENERATOR.mul_scalar(k))
                    .collect()
            }

            #[test]
            fn closure() {
                let pts = sample_points(4);
                for p in &pts {
                    assert!(bool::from(p.is_on_curve()));
                    assert!(bool::from((p + p).is_on_curve()));
                    assert!(bool::from(p.double().is_on_curve()));
                    for q in &pts {
                        assert!(bool::from((p + q).is_on_curve()));
                    }
                }
            }

            #[test]
            fn neutral_element() {
                for p in sample_points(3) {
                    assert_eq!(p + Point::IDENTITY, p);
                    assert_eq!(Point::IDENTITY + p, p);
                }
            }

            #[test]
            fn inverse() {
                for p in sample_points(3) {
                    assert!(bool::from((p + (-p)).is_identity()));
                }
            }

            #[test]
            fn associativity_sampled() {
                let pts = sample_points(3);
                let (p, q, r) = (pts[0], pts[1], pts[2]);
                assert_eq!((p + q) + r, p + (q + r));
            }

            #[test]
            fn addition_agrees_with_doubling() {
                for p in sample_points(3) {
                    assert_eq!(p + p, p.double());
                }
            }

            #[test]
            fn scalar_identity() {
                let g = Point::GENERATOR;
                assert_eq!(g.mul_scalar(&Fe::ONE), g);
                assert!(bool::from(g.mul_scalar(&Fe::ZERO).is_identity()));
            }

            #[test]
            fn scalar_homomorphism() {
                // k = 2^100 + 3, m = 2^96 + 5: the integer product fits
                // below every catalogue order, so no reduction applies.
                let g = Point::GENERATOR;
                let k = Fe::from_u64(1 << 50).square() + Fe::from_u64(3);
                let m = Fe::from_u64(1 << 48).square() + Fe::from_u64(5);
                let km = k * m;
                assert_eq!(g.mul_scalar(&m).mul_scalar(&k), g.mul_scalar(&km));
            }

            #[test]
            fn prime_order_annihilates_base_point() {
                let g = Point::GENERATOR;
                assert!(bool::from(g.mul_scalar(&<$curve>::ORDER).is_identity()));
                // One past the order walks back onto the generator.
                let n_plus_1 = <$curve>::ORDER + Fe::ONE;
                assert_eq!(g.mul_scalar(&n_plus_1), g);
            }

            #[test]
            fn prime_order_annihilates_ladder_x() {
                let mut pad = Scratchpad::new();
                let g = MontgomeryXPoint::<$curve>::generator().unwrap();
                let zero_x = g.mul_x(&<$curve>::ORDER, &mut pad);
                // The point at infinity scales to zero, which is also the
                // Montgomery x the zero point maps to.
                assert_eq!(zero_x, Fe::ZERO);
            }

            #[test]
            fn ladder_matches_edwards_multiplication() {
                let mut pad = Scratchpad::new();
                let g = MontgomeryXPoint::<$curve>::generator().unwrap();
                for k in sample_scalars(4) {
                    let expected = Point::GENERATOR.mul_scalar(&k).to_affine().to_montgomery();
                    let got = g.mul_x(&k, &mut pad);
                    match expected {
                        Ok((u, _)) => assert_eq!(got, u),
                        // k·G was 2-torsion (identity): ladder says zero.
                        Err(_) => assert_eq!(got, Fe::ZERO),
                    }
                }
            }

            #[test]
            fn birational_round_trip() {
                for p in sample_points(4) {
                    let (u, v) = p.to_affine().to_montgomery().unwrap();
                    let back = Point::from_montgomery(u, v).unwrap();
                    assert_eq!(back, p);
                }
            }

            #[test]
            fn from_montgomery_rejects_off_curve_coordinates() {
                let (u, v) = Point::GENERATOR.to_affine().to_montgomery().unwrap();
                assert!(Point::from_montgomery(u, v + Fe::ONE).is_err());
            }

            #[test]
            fn from_edwards_rejects_off_curve_coordinates() {
                let g = Point::GENERATOR.to_affine();
                assert!(Point::from_edwards(g.x, g.y + Fe::ONE).is_err());
                assert!(Point::from_edwards(g.x, g.y).is_ok());
            }

            #[test]
            fn extended_representation_agrees() {
                let k = Fe::from_u64(0xfeed_beef);
                let ext = ExtendedPoint::<$curve>::generator();
                assert!(bool::from(ext.is_on_curve()));
                let a = ext.mul_scalar(&k);
                let b = Point::GENERATOR.mul_scalar(&k);
                assert!(bool::from(a.is_on_curve()));
                assert_eq!(a.to_projective(), b);
                assert_eq!(b.to_extended(), a);
                // Mixed addition paths land on the same element.
                assert_eq!((ext + a).to_projective(), Point::GENERATOR + b);
            }

            #[test]
            fn facade_surface() {
                assert_eq!(Point::cofactor(), <$curve>::COFACTOR);
                assert_eq!(Point::prime_order(), <$curve>::ORDER);
                assert_eq!(Point::base_point(), Point::GENERATOR);
                assert!(bool::from(Point::zero_point().is_identity()));

                // Facade pads are interchangeable with caller-built ones.
                let mut pad = Point::scratchpad();
                let g = MontgomeryXPoint::<$curve>::generator().unwrap();
                assert_eq!(
                    g.mul_x(&Fe::from_u64(2), &mut pad),
                    g.mul_x(&Fe::from_u64(2), &mut Scratchpad::new()),
                );
            }
        }
    };
}

group_laws!(curve1174, safecurves::Curve1174);
group_laws!(e222, safecurves::E222);
group_laws!(e382, safecurves::E382);
group_laws!(e521, safecurves::E521);
group_laws!(curve25519, safecurves::Curve25519);
