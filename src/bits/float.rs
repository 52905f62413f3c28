// ============================================================================
// IEEE-754 Decomposition
// Exact mantissa/exponent split and round-to-nearest scaling of f64 values
// ============================================================================

use super::shift::signed_shl;

const MANTISSA_BITS: u32 = 52;
const EXPONENT_MASK: u64 = 0x7ff;
const EXPONENT_BIAS: i32 = 1075;

/// A finite `f64` split so that `|value| = mantissa * 2^exponent` exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decomposed {
    pub negative: bool,
    pub mantissa: u64,
    pub exponent: i32,
}

/// Split a float into sign, integer mantissa and binary exponent.
///
/// Subnormals are handled; returns `None` for NaN and infinities.
///
/// # Example
/// ```
/// use qfixed::bits::decompose;
///
/// let d = decompose(-2.5).unwrap();
/// assert!(d.negative);
/// assert_eq!(d.mantissa as f64 * 2f64.powi(d.exponent), 2.5);
/// ```
pub fn decompose(value: f64) -> Option<Decomposed> {
    let bits = value.to_bits();
    let negative = bits >> 63 == 1;
    let biased = ((bits >> MANTISSA_BITS) & EXPONENT_MASK) as i32;
    let fraction = bits & ((1u64 << MANTISSA_BITS) - 1);

    match biased {
        0x7ff => None,
        // subnormal or zero: no implicit leading one
        0 => Some(Decomposed {
            negative,
            mantissa: fraction,
            exponent: 1 - EXPONENT_BIAS,
        }),
        _ => Some(Decomposed {
            negative,
            mantissa: fraction | (1u64 << MANTISSA_BITS),
            exponent: biased - EXPONENT_BIAS,
        }),
    }
}

/// Round `mantissa * 2^shift` to the nearest integer, ties away from zero.
///
/// Left shifts wrap modulo 2^64 (and vanish at 64 bits or more). Only
/// meaningful for mantissas below 2^63, which every [`decompose`] output is.
pub fn round_scaled(mantissa: u64, shift: i32) -> u64 {
    if shift >= 0 {
        return signed_shl(mantissa, shift);
    }
    let n = shift.unsigned_abs();
    if n >= u64::BITS {
        return 0;
    }
    let half = 1u64 << (n - 1);
    mantissa.wrapping_add(half) >> n
}
