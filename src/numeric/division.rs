// ============================================================================
// Reciprocal Division
// Division without a hardware divide, by Newton-Raphson reciprocal refinement
// ============================================================================

use super::errors::{NumericError, NumericResult};
use crate::bits::{count_leading_zeros, mul_shr, Word};

/// Divide two raw fixed-point values.
///
/// Computes `numerator × 2^denominator_frac_bits / denominator`, which is the
/// quotient expressed at the numerator's radix point, using only shifts,
/// multiplies and adds:
///
/// 1. Normalize `|denominator|` into `d ∈ [0.5, 1)` by shifting out its
///    leading zeros.
/// 2. Start from `r = 1` and `e = 1 - d ∈ [0, 0.5)`, then repeat
///    `r += r·e; e = e·e`. After `k` rounds `r = (1 - e^(2^k)) / d`, so the
///    number of correct bits doubles each round. Once `e` underflows to zero
///    `r` stops changing and the loop exits.
/// 3. Multiply `r` by `|numerator|`, folding the normalization shift into
///    the final shift amount.
///
/// `r` is held with `BITS - 1` fractional bits and `e` with `BITS + 1`, so
/// both use the full word. When `d` is exactly one half, `1 - d` wraps to
/// zero and `r` stays at one; the final shift is reduced by one bit to
/// produce the true reciprocal of two.
///
/// The result is truncated toward zero and accurate to a few units in the
/// last place. Overflowing quotients wrap.
///
/// # Errors
/// Returns `DivisionByZero` when `denominator` is zero.
pub(crate) fn reciprocal_div<I: Word>(
    numerator: I,
    denominator: I,
    denominator_frac_bits: u32,
) -> NumericResult<I> {
    if denominator == I::ZERO {
        tracing::trace!(%numerator, "fixed-point division by zero");
        return Err(NumericError::DivisionByZero);
    }

    let bits = I::BITS;
    let one = <I::Unsigned as Word>::ONE;
    let msb = one.wrapping_shl(bits - 1);

    let divisor = denominator.unsigned_abs();
    let lz = count_leading_zeros(divisor);
    let normalized = divisor.wrapping_shl(lz);

    let (reciprocal, _rounds) = refine_reciprocal(normalized);

    let boundary = i32::from(normalized == msb);
    let shift =
        (2 * bits - 1) as i32 - denominator_frac_bits as i32 - lz as i32 - boundary;
    let quotient = I::from_unsigned(mul_shr(reciprocal, numerator.unsigned_abs(), shift));

    Ok(if numerator.is_negative() != denominator.is_negative() {
        quotient.wrapping_neg()
    } else {
        quotient
    })
}

/// Refine `r ≈ 1 / d` for a normalized divisor `d ∈ [0.5, 1)`.
///
/// Returns the reciprocal with `BITS - 1` fractional bits and the number of
/// rounds run before the error term vanished.
fn refine_reciprocal<U: Word>(normalized: U) -> (U, u32) {
    let one = U::ONE;
    let e_frac_bits = (U::BITS + 1) as i32;
    let mut error = (!normalized).wrapping_add(one).wrapping_shl(1);
    let mut reciprocal = one.wrapping_shl(U::BITS - 1);

    let mut rounds = 0;
    while rounds < refinement_rounds::<U>() && error != U::ZERO {
        reciprocal = reciprocal.wrapping_add(mul_shr(reciprocal, error, e_frac_bits));
        error = mul_shr(error, error, e_frac_bits);
        rounds += 1;
    }
    (reciprocal, rounds)
}

/// Upper bound on refinement rounds for a word.
///
/// Convergence takes `log2(BITS)` rounds (3 for 8-bit words up to 6 for
/// 64-bit words); the loop exits early as soon as the error term vanishes.
#[inline]
pub(crate) const fn refinement_rounds<I: Word>() -> u32 {
    I::BITS - 1
}
