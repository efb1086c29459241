// ============================================================================
// Numeric Errors
// Error types for conversions out of the Num abstraction
// ============================================================================

use std::fmt;

/// Errors that can occur when a `Num` is converted to a primitive.
///
/// Arithmetic on `Num` is total and never produces one of these; only the
/// explicit conversion accessors and parsing can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumError {
    /// NaN has no representation in the requested integer width
    UnsupportedRepresentation(&'static str),
    /// Defined value does not fit in the requested integer width
    OutOfRange(&'static str),
    /// Input string is not a decimal literal
    InvalidInput,
}

impl fmt::Display for NumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumError::UnsupportedRepresentation(target) => {
                write!(f, "unsupported representation: no NaN representation for {}", target)
            },
            NumError::OutOfRange(target) => {
                write!(f, "out of range: value does not fit in {}", target)
            },
            NumError::InvalidInput => write!(f, "invalid input: could not parse value"),
        }
    }
}

impl std::error::Error for NumError {}

/// Result type alias for numeric conversions
pub type NumResult<T> = Result<T, NumError>;
