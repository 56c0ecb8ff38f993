//! The curve catalogue.
//!
//! Each module carries one curve's constant tables: its field parameters
//! (via `curve_field!`), the [`CurveParams`](crate::curve::CurveParams)
//! record, and the capability impls its shape admits.

pub mod curve1174;
pub mod curve25519;
pub mod e222;
pub mod e382;
pub mod e521;

pub use curve1174::{Curve1174, Fe1174};
pub use curve25519::{Curve25519, Fe25519};
pub use e222::{E222, Fe222};
pub use e382::{E382, Fe382};
pub use e521::{E521, Fe521};
