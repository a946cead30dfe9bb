// ============================================================================
// Numeric Errors
// Error types for fixed-decimal construction and arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur while building or combining fixed decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Value is NaN or infinite
    InvalidValue,
    /// Value lies outside [MIN_VALUE, MAX_VALUE]
    OutOfRange,
    /// Attempted division by zero
    DivisionByZero,
    /// Input string or tag is invalid
    InvalidInput,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidValue => {
                write!(f, "invalid value: number is not finite")
            },
            NumericError::OutOfRange => {
                write!(f, "value out of range: must be between -999999999 and 999999999")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::InvalidInput => {
                write!(f, "invalid input: could not parse value")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
