// ============================================================================
// Numeric Errors
// Error types for fixed-point arithmetic operations
// ============================================================================

use std::fmt;

/// Errors that can occur during fixed-point operations.
///
/// Arithmetic overflow is not an error: it wraps like native integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Attempted division (or remainder) by zero
    DivisionByZero,
    /// Input float is NaN or infinite, or text could not be parsed
    InvalidInput,
    /// Decimal value too large to scale
    Overflow,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::InvalidInput => {
                write!(f, "invalid input: not a finite number or decimal")
            },
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: value exceeded decimal range")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
