// ============================================================================
// Bits Module
// Bit-level primitives the fixed-point operators are built from
// ============================================================================
//
// This module provides:
// - Word: the storage integer abstraction (width, signedness, wrapping ops)
// - signed_shr / signed_shl: shifts by signed, possibly out-of-range amounts
// - count_leading_zeros: defined for zero (returns the width)
// - mul_shr: multiply-then-shift with no double-width intermediate
// - decompose / round_scaled: exact f64 split and round-to-nearest scaling
//
// Every shift amount, including negative and >= width, has a defined result.

mod float;
mod mul_shift;
mod shift;
mod word;

pub use float::{decompose, round_scaled, Decomposed};
pub use mul_shift::mul_shr;
pub use shift::{count_leading_zeros, signed_shl, signed_shr};
pub use word::Word;
