//! Error handling for curve and pairing operations

#[cfg(feature = "std")]
use std::fmt;

#[cfg(not(feature = "std"))]
use core::fmt;

/// The error type for curve and pairing operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Coordinates fail the curve-equation check on construction or decode
    InvalidPoint {
        /// Group in which the check failed
        group: &'static str,
    },

    /// Decoded buffer has the wrong byte length
    InvalidEncoding {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// A multi-pairing product did not evaluate to the identity
    InvalidPairing,
}

/// Result type for curve and pairing operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidPoint { group } => {
                write!(f, "point not on curve {}", group)
            }
            Error::InvalidEncoding {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "invalid encoding for {}: expected {} bytes, got {}",
                    context, expected, actual
                )
            }
            Error::InvalidPairing => write!(f, "pairing check failed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Validation utilities shared by decoders and constructors
pub mod validate {
    use super::{Error, Result};

    /// Validate a buffer length
    #[inline(always)]
    pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
        if actual != expected {
            return Err(Error::InvalidEncoding {
                context,
                expected,
                actual,
            });
        }
        Ok(())
    }

    /// Validate a curve-membership condition
    #[inline(always)]
    pub fn point(condition: bool, group: &'static str) -> Result<()> {
        if !condition {
            return Err(Error::InvalidPoint { group });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "std")]
    #[test]
    fn test_error_display() {
        let e = Error::InvalidEncoding {
            context: "G1 point",
            expected: 64,
            actual: 63,
        };
        let msg = format!("{}", e);
        assert!(msg.contains("64"));
        assert!(msg.contains("63"));

        let e = Error::InvalidPoint { group: "G2" };
        assert!(format!("{}", e).contains("G2"));
    }

    #[test]
    fn test_validate_length() {
        assert!(validate::length("buf", 64, 64).is_ok());
        assert_eq!(
            validate::length("buf", 63, 64),
            Err(Error::InvalidEncoding {
                context: "buf",
                expected: 64,
                actual: 63,
            })
        );
    }

    #[test]
    fn test_validate_point() {
        assert!(validate::point(true, "G1").is_ok());
        assert_eq!(
            validate::point(false, "G1"),
            Err(Error::InvalidPoint { group: "G1" })
        );
    }
}
