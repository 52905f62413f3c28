// ============================================================================
// Numeric Module
// Binary fixed-point arithmetic over native integer words
// ============================================================================
//
// This module provides:
// - FixedPoint<I, F>: fixed-point number with F fractional bits stored in I
// - Operators between values of different scales (result keeps the left scale)
// - Reciprocal division built from shifts and multiplies
// - NumericError: error types for fallible construction and division
// - Type aliases for common formats (I16F16, U32F32, ...)
//
// Design principles:
// - Integer-only arithmetic; floats appear only at conversion boundaries
// - Overflow wraps like native integers; only division by zero is an error
// - No intermediate wider than the storage word
// - Compile-time configurable precision via const generics

mod arith;
mod compare;
mod division;
mod errors;
mod fixed_point;

pub use errors::{NumericError, NumericResult};
pub use fixed_point::{FixedPoint, I16F16, I32F32, I48F16, U16F16, U32F32, U48F16};
