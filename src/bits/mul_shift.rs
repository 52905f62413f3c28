// ============================================================================
// Multiply-Then-Shift
// Product of two words shifted right, without a double-width intermediate
// ============================================================================

use super::shift::signed_shr;
use super::word::Word;

/// Compute `(a * b) >> shift` without an intermediate wider than `T`.
///
/// Both operands are reduced to magnitudes and split into high and low
/// halves. Each of the four partial products fits in `T` and is shifted on
/// its own before summing, so bits of the full product below the shift are
/// truncated per partial product rather than once. High bits beyond the width
/// of `T` wrap. The result is negated when exactly one operand is negative.
///
/// `shift` may be negative (the product is shifted left).
///
/// # Example
/// ```
/// use qfixed::bits::mul_shr;
///
/// // 2.5 * 4.0 in 16.16
/// assert_eq!(mul_shr(0x2_8000i32, 0x4_0000, 16), 0xA_0000);
/// assert_eq!(mul_shr(-3i32, 5, 0), -15);
/// ```
pub fn mul_shr<T: Word>(a: T, b: T, shift: i32) -> T {
    let bits = T::BITS as i32;
    let half = T::BITS / 2;
    let one = <T::Unsigned as Word>::ONE;
    let low_mask = one.wrapping_shl(half).wrapping_sub(one);

    let a_abs = a.unsigned_abs();
    let b_abs = b.unsigned_abs();
    let (a_hi, a_lo) = (a_abs.wrapping_shr(half), a_abs & low_mask);
    let (b_hi, b_lo) = (b_abs.wrapping_shr(half), b_abs & low_mask);

    let cross_shift = shift.saturating_sub(half as i32);
    let magnitude = signed_shr(a_hi.wrapping_mul(b_hi), shift.saturating_sub(bits))
        .wrapping_add(signed_shr(a_hi.wrapping_mul(b_lo), cross_shift))
        .wrapping_add(signed_shr(a_lo.wrapping_mul(b_hi), cross_shift))
        .wrapping_add(signed_shr(a_lo.wrapping_mul(b_lo), shift));

    let result = T::from_unsigned(magnitude);
    if a.is_negative() != b.is_negative() {
        result.wrapping_neg()
    } else {
        result
    }
}
