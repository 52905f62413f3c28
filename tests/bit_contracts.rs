use qfixed::bits::{count_leading_zeros, mul_shr, signed_shl, signed_shr};
use quickcheck::{quickcheck, TestResult};

quickcheck! {
    // Shifting by the full width or more clears every bit, in either direction
    fn prop_shift_past_width_is_zero(x: i32, y: u64, extra: u8) -> bool {
        let s32 = 32 + i32::from(extra);
        let s64 = 64 + i32::from(extra);
        signed_shr(x, s32) == 0
            && signed_shr(x, -s32) == 0
            && signed_shl(x, s32) == 0
            && signed_shr(y, s64) == 0
            && signed_shl(y, -s64) == 0
    }

    // A negative amount shifts the other way
    fn prop_negative_shift_reverses(x: i64, n: u8) -> bool {
        let n = i32::from(n % 64);
        signed_shr(x, -n) == signed_shl(x, n) && signed_shl(x, -n) == signed_shr(x, n)
    }

    fn prop_signed_shr_is_floor_division(x: i32, n: u8) -> bool {
        let n = u32::from(n % 31);
        i64::from(signed_shr(x, n as i32)) == i64::from(x).div_euclid(1i64 << n)
    }

    fn prop_clz_power_of_two(k: u8) -> bool {
        let k32 = u32::from(k % 32);
        let k64 = u32::from(k % 64);
        let k8 = u32::from(k % 8);
        count_leading_zeros(1u32 << k32) == 32 - k32 - 1
            && count_leading_zeros(1u64 << k64) == 64 - k64 - 1
            && count_leading_zeros(1u8 << k8) == 8 - k8 - 1
    }

    fn prop_clz_matches_native(x: u32, y: i16) -> bool {
        count_leading_zeros(x) == x.leading_zeros() && count_leading_zeros(y) == y.leading_zeros()
    }

    // Four truncated partial products lose at most three units
    fn prop_mul_shr_close_to_wide_product(a: u32, b: u32, shift: u8) -> TestResult {
        let shift = u32::from(shift % 65);
        let exact = ((u128::from(a) * u128::from(b)) >> shift) as u32;
        let got = mul_shr(a, b, shift as i32);
        TestResult::from_bool(exact.wrapping_sub(got) <= 3)
    }

    fn prop_mul_shr_sign(a: i16, b: i16) -> TestResult {
        if a == i16::MIN || b == i16::MIN {
            return TestResult::discard();
        }
        let magnitude = mul_shr(a.unsigned_abs(), b.unsigned_abs(), 8);
        let signed = mul_shr(a, b, 8);
        let expected = if (a < 0) != (b < 0) {
            (magnitude as i16).wrapping_neg()
        } else {
            magnitude as i16
        };
        TestResult::from_bool(signed == expected)
    }
}

#[test]
fn test_clz_of_zero_is_width() {
    assert_eq!(count_leading_zeros(0u8), 8);
    assert_eq!(count_leading_zeros(0i32), 32);
    assert_eq!(count_leading_zeros(0u64), 64);
    assert_eq!(count_leading_zeros(0x0000_8000u32), 16);
}
