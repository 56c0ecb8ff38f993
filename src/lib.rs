#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![allow(non_snake_case)]
#![forbid(unsafe_code)]
#![warn(
    clippy::unwrap_used,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused,
    unused_attributes,
    unused_imports,
    unused_mut,
    unused_must_use,
    rust_2018_idioms,
    unused_qualifications
)]

#[cfg(feature = "std")]
extern crate std;

pub use crypto_bigint;
pub use ff;
pub use rand_core;
pub use subtle;
pub use zeroize;

// Internal macros. Must come first!
#[macro_use]
mod macros;

mod error;

pub mod curve;
pub mod curves;
pub mod decaf;
pub mod edwards;
pub mod elligator;
pub mod field;
pub mod group;
pub mod montgomery;
pub mod scratch;

pub use crate::curve::{CurveParams, DecafParams, Elligator, Elligator1Params, Elligator2Params};
pub use crate::curves::{Curve1174, Curve25519, E222, E382, E521};
pub use crate::decaf::{CompressedDecaf, DecafPoint};
pub use crate::edwards::{AffinePoint, ExtendedPoint, ProjectivePoint};
pub use crate::error::{Error, Result};
pub use crate::field::{FieldElement, FieldOps, FieldParams};
pub use crate::group::{CompressedGroup, Group, HashGroup};
pub use crate::montgomery::{MontgomeryXPoint, ProjectiveMontgomeryXPoint};
pub use crate::scratch::{Scratchpad, with_scratchpad};
