// ============================================================================
// Fixed-Point Arithmetic Library
// Binary fixed-point numbers over native integers with no wide intermediates
// ============================================================================

//! # qfixed
//!
//! Binary fixed-point arithmetic for targets where floating point is slow,
//! missing, or not bit-reproducible.
//!
//! ## Features
//!
//! - **Compile-time formats**: `FixedPoint<I, F>` stores `value × 2^F` in any
//!   native integer from `i8` to `u64`
//! - **Mixed-scale operators**: the right operand may use a different number
//!   of fractional bits; the result keeps the left operand's format
//! - **No widening**: multiplication and division never need an integer wider
//!   than the storage word
//! - **Deterministic float conversion**: floats are decomposed into mantissa
//!   and exponent and rounded with integer arithmetic
//!
//! ## Example
//!
//! ```rust
//! use qfixed::prelude::*;
//!
//! let price = I16F16::from_f64(2.5)?;
//! let qty = FixedPoint::<i32, 8>::from_int(4);
//!
//! // Mixed scales: the result is an I16F16
//! let total = price * qty;
//! assert_eq!(total, I16F16::from_int(10));
//!
//! // Division by zero is reported by the checked form
//! assert_eq!(total.checked_div(I16F16::ZERO), Err(NumericError::DivisionByZero));
//!
//! // Decimal text at the boundaries
//! let parsed: I16F16 = "-0.75".parse()?;
//! assert_eq!(parsed.to_string(), "-0.75");
//! assert!(parsed < total);
//! # Ok::<(), NumericError>(())
//! ```

pub mod bits;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::bits::Word;
    pub use crate::numeric::{
        FixedPoint, NumericError, NumericResult, I16F16, I32F32, I48F16, U16F16, U32F32, U48F16,
    };
}
