//! Error types.

use core::fmt;

/// Errors produced when parsing untrusted curve data.
///
/// Constant-time operations never fail; only the public-input parsers
/// (decompression, coordinate validation, Elligator decode/encode) surface
/// these, so returning early on them leaks nothing secret.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// Coordinates do not satisfy the curve equation, a compressed point is
    /// non-canonical or fails validation, or a birational conversion hit a
    /// 2-torsion singularity.
    InvalidPoint,

    /// An Elligator decode input lies in the map's exceptional set
    /// (`t = -1` for Elligator-1, `1 + 2r² = 0` for Elligator-2).
    InvalidHashInput,

    /// Elligator encode was asked to encode a point outside the image of
    /// the map (`can_encode` is false).
    EncodeRefused,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidPoint => write!(f, "invalid curve point"),
            Error::InvalidHashInput => write!(f, "hash input in exceptional set"),
            Error::EncodeRefused => write!(f, "point has no Elligator preimage"),
        }
    }
}

impl core::error::Error for Error {}

/// Result type with this crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
