// ============================================================================
// Shifts and Leading Zeros
// Shift operations with fully defined results for any signed amount
// ============================================================================

use super::word::Word;

/// Number of leading zero bits of `x`, read as unsigned.
///
/// Returns the full width for zero.
#[inline]
pub fn count_leading_zeros<T: Word>(x: T) -> u32 {
    x.to_unsigned().leading_zeros()
}

/// Right shift by a signed amount.
///
/// A negative `shift` shifts left instead. Shifting by `BITS` or more in
/// either direction yields zero, including for negative signed values.
/// Right shifts of signed values are arithmetic.
///
/// # Example
/// ```
/// use qfixed::bits::signed_shr;
///
/// assert_eq!(signed_shr(0x100u32, 4), 0x10);
/// assert_eq!(signed_shr(0x100u32, -4), 0x1000);
/// assert_eq!(signed_shr(-1i32, 32), 0);
/// ```
#[inline]
pub fn signed_shr<T: Word>(x: T, shift: i32) -> T {
    let n = shift.unsigned_abs();
    if n >= T::BITS {
        T::ZERO
    } else if shift < 0 {
        x.wrapping_shl(n)
    } else {
        x.wrapping_shr(n)
    }
}

/// Left shift by a signed amount; mirror image of [`signed_shr`].
#[inline]
pub fn signed_shl<T: Word>(x: T, shift: i32) -> T {
    let n = shift.unsigned_abs();
    if n >= T::BITS {
        T::ZERO
    } else if shift < 0 {
        x.wrapping_shr(n)
    } else {
        x.wrapping_shl(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clz_examples() {
        assert_eq!(count_leading_zeros(0x0000_8000u32), 16);
        assert_eq!(count_leading_zeros(1u8), 7);
        assert_eq!(count_leading_zeros(u64::MAX), 0);
    }

    #[test]
    fn test_clz_of_zero_is_width() {
        assert_eq!(count_leading_zeros(0u8), 8);
        assert_eq!(count_leading_zeros(0i16), 16);
        assert_eq!(count_leading_zeros(0u32), 32);
        assert_eq!(count_leading_zeros(0i64), 64);
    }

    #[test]
    fn test_clz_reads_negative_as_unsigned() {
        assert_eq!(count_leading_zeros(-1i32), 0);
    }

    #[test]
    fn test_shr_direction() {
        assert_eq!(signed_shr(0b1000u8, 3), 1);
        assert_eq!(signed_shr(1u8, -3), 0b1000);
        assert_eq!(signed_shr(-8i32, 2), -2);
        assert_eq!(signed_shr(7i32, 0), 7);
    }

    #[test]
    fn test_shl_direction() {
        assert_eq!(signed_shl(1u16, 15), 0x8000);
        assert_eq!(signed_shl(0x8000u16, -15), 1);
        assert_eq!(signed_shl(-1i64, 63), i64::MIN);
    }

    #[test]
    fn test_out_of_range_shifts_are_zero() {
        assert_eq!(signed_shr(u32::MAX, 32), 0);
        assert_eq!(signed_shr(u32::MAX, -32), 0);
        assert_eq!(signed_shr(i8::MIN, 8), 0);
        assert_eq!(signed_shl(i8::MIN, -100), 0);
        assert_eq!(signed_shl(1u64, 64), 0);
        assert_eq!(signed_shr(-1i16, i32::MIN), 0);
        assert_eq!(signed_shl(-1i16, i32::MIN), 0);
    }
}
