use core::fmt;
use serde::Serialize;

/// Failure to decode a field element or curve point from its external representation
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum EncodingError {
    /// A byte string did not have the expected size
    InvalidLength { expected: usize, found: usize },
    /// A point was given with the wrong number of coordinate words
    InvalidWordCount { expected: usize, found: usize },
    /// The integer is not smaller than the field modulus
    NotInField,
    NotOnCurve,
    NotInSubgroup,
    /// The encoding denotes the point at infinity where a proper point is required
    PointAtInfinity,
    /// Unknown prefix byte of a SEC1 point
    InvalidPrefix(u8),
    InvalidHex,
}

impl fmt::Display for EncodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, found } => {
                write!(f, "expected {} bytes but found {}", expected, found)
            }
            Self::InvalidWordCount { expected, found } => {
                write!(f, "expected {} coordinate words but found {}", expected, found)
            }
            Self::NotInField => write!(f, "integer is not reduced modulo the field order"),
            Self::NotOnCurve => write!(f, "point is not on the curve"),
            Self::NotInSubgroup => write!(f, "point is not in the prime order subgroup"),
            Self::PointAtInfinity => write!(f, "unexpected point at infinity"),
            Self::InvalidPrefix(p) => write!(f, "invalid point prefix 0x{:02x}", p),
            Self::InvalidHex => write!(f, "invalid hex string"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EncodingError {}
