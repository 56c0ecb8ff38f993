//! The Elligator hash-to-point family.
//!
//! Both maps transport field elements to curve points and back. Their
//! images are proper subsets of the curve, so encoding is partial: the
//! `can_encode` predicates decide membership, and `encode` refuses points
//! outside the image.

pub mod elligator1;
pub mod elligator2;
