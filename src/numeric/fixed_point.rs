// ============================================================================
// Fixed-Point Value
// Binary fixed-point number with compile-time fractional bits
// ============================================================================

use super::errors::{NumericError, NumericResult};
use crate::bits::{decompose, round_scaled, signed_shl, signed_shr, Word};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Binary fixed-point number with compile-time precision.
///
/// Internally stores `value × 2^F` in the integer `I`.
///
/// # Type Parameters
/// - `I`: storage word (`i8`..`i64`, `u8`..`u64`); signed storage gives a
///   signed number.
/// - `F`: number of fractional bits. Must be below the width of `I` for
///   signed storage, at most the width for unsigned storage.
///
/// # Overflow
/// All arithmetic wraps modulo `2^BITS`, exactly like native integer
/// `wrapping_*` operations. Nothing saturates and nothing is reported.
///
/// # Example
/// ```
/// use qfixed::numeric::I16F16;
///
/// let a = I16F16::from_f64(2.5)?;
/// let b = I16F16::from_int(4);
/// assert_eq!(a * b, I16F16::from_int(10));
/// assert_eq!((I16F16::from_int(10) / b).to_f64(), 2.5);
/// # Ok::<(), qfixed::numeric::NumericError>(())
/// ```
///
/// A format whose fractional bits do not fit the word is rejected at compile
/// time, including when values are only built from raw integers:
/// ```compile_fail
/// use qfixed::numeric::FixedPoint;
///
/// let x = FixedPoint::<i8, 100>::from_raw(1);
/// assert_eq!(x.raw_value(), 1);
/// ```
/// ```compile_fail
/// use qfixed::numeric::FixedPoint;
///
/// let zero = FixedPoint::<u8, 9>::ZERO;
/// assert_eq!(zero.raw_value(), 0);
/// ```
#[derive(Clone, Copy)]
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct FixedPoint<I, const F: u32>(pub(crate) I);

impl<I: Word, const F: u32> FixedPoint<I, F> {
    /// Number of fractional bits. Fails to compile when `F` does not fit `I`.
    pub const FRAC_BITS: u32 = {
        assert!(
            if I::SIGNED { F < I::BITS } else { F <= I::BITS },
            "fractional bits do not fit the storage word"
        );
        F
    };

    /// Number of integer bits (including the sign bit for signed storage).
    pub const INT_BITS: u32 = I::BITS - Self::FRAC_BITS;

    /// Zero value
    pub const ZERO: Self = Self::from_raw(I::ZERO);

    /// Smallest positive increment, `2^-F`
    pub const DELTA: Self = Self::from_raw(I::ONE);

    /// Maximum representable value
    pub const MAX: Self = Self::from_raw(I::MAX);

    /// Minimum representable value
    pub const MIN: Self = Self::from_raw(I::MIN);

    /// One (1.0). Wraps to zero when there are no integer bits.
    #[inline]
    pub fn one() -> Self {
        Self::from_int(I::ONE)
    }

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from raw internal representation (`value × 2^F`).
    #[inline]
    pub const fn from_raw(raw: I) -> Self {
        // Evaluating FRAC_BITS runs the format check.
        let _frac_bits = Self::FRAC_BITS;
        Self(raw)
    }

    /// Create from an integer value; integer bits beyond the format wrap.
    #[inline]
    pub fn from_int(value: I) -> Self {
        Self(signed_shl(value, Self::FRAC_BITS as i32))
    }

    /// Create from a float, rounding to the nearest representable value with
    /// ties away from zero.
    ///
    /// The float is split into an integer mantissa and a binary exponent, and
    /// the mantissa is rescaled by `2^(exponent + F)` with integer rounding, so
    /// the result does not depend on the host's float rounding mode. Values
    /// outside the format's range wrap.
    ///
    /// # Errors
    /// Returns `InvalidInput` for NaN and infinities.
    pub fn from_f64(value: f64) -> NumericResult<Self> {
        let Some(parts) = decompose(value) else {
            tracing::debug!(value, "rejecting non-finite float");
            return Err(NumericError::InvalidInput);
        };

        let shift = parts.exponent.saturating_add(Self::FRAC_BITS as i32);
        let magnitude = I::wrapping_from_u64(round_scaled(parts.mantissa, shift));

        Ok(Self(if parts.negative {
            magnitude.wrapping_neg()
        } else {
            magnitude
        }))
    }

    /// Create from an `f32`; see [`from_f64`](Self::from_f64).
    #[inline]
    pub fn from_f32(value: f32) -> NumericResult<Self> {
        Self::from_f64(f64::from(value))
    }

    /// Convert from a value with a different number of fractional bits.
    ///
    /// Gaining fractional bits shifts left (integer bits beyond the format are
    /// lost); losing them shifts right, flooring toward negative infinity.
    #[inline]
    pub fn from_fixed<const FB: u32>(other: FixedPoint<I, FB>) -> Self {
        Self(Self::align(other))
    }

    /// Convert to a value with `G` fractional bits.
    #[inline]
    pub fn to_fixed<const G: u32>(self) -> FixedPoint<I, G> {
        FixedPoint::from_fixed(self)
    }

    /// Re-express another value's raw integer at this type's radix point.
    #[inline]
    pub(crate) fn align<const FB: u32>(other: FixedPoint<I, FB>) -> I {
        let shift = FixedPoint::<I, FB>::FRAC_BITS as i32 - Self::FRAC_BITS as i32;
        signed_shr(other.0, shift)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the raw internal value (scaled by `2^F`).
    #[inline]
    pub fn raw_value(self) -> I {
        self.0
    }

    /// Get the integer part, rounded toward negative infinity.
    #[inline]
    pub fn integer_part(self) -> I {
        signed_shr(self.0, Self::FRAC_BITS as i32)
    }

    /// Get the low `F` bits of the raw value.
    ///
    /// For negative values these are the bits above the floored integer part.
    #[inline]
    pub fn fractional_bits(self) -> I::Unsigned {
        let one = <I::Unsigned as Word>::ONE;
        let mask = signed_shl(one, Self::FRAC_BITS as i32).wrapping_sub(one);
        self.0.to_unsigned() & mask
    }

    /// Check if value is zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == I::ZERO
    }

    /// Check if value is positive.
    #[inline]
    pub fn is_positive(self) -> bool {
        !self.is_zero() && !self.0.is_negative()
    }

    /// Check if value is negative. Always false for unsigned storage.
    #[inline]
    pub fn is_negative(self) -> bool {
        self.0.is_negative()
    }

    // ========================================================================
    // Float Conversion
    // ========================================================================

    /// Convert to `f64` (`raw × 2^-F`).
    ///
    /// Exact while the raw value fits in 53 bits.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0.to_f64() * 2f64.powi(-(Self::FRAC_BITS as i32))
    }

    /// Convert to `f32`.
    #[inline]
    pub fn to_f32(self) -> f32 {
        self.to_f64() as f32
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<I: Word, const F: u32> Default for FixedPoint<I, F> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<I: Word, const F: u32> From<I> for FixedPoint<I, F> {
    #[inline]
    fn from(value: I) -> Self {
        Self::from_int(value)
    }
}

impl<I: Word, const F: u32> From<FixedPoint<I, F>> for f64 {
    #[inline]
    fn from(value: FixedPoint<I, F>) -> Self {
        value.to_f64()
    }
}

impl<I: Word, const F: u32> From<FixedPoint<I, F>> for f32 {
    #[inline]
    fn from(value: FixedPoint<I, F>) -> Self {
        value.to_f32()
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl<I: Word, const F: u32> fmt::Debug for FixedPoint<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedPoint<{}, {}>({}, raw={})", I::NAME, F, self, self.0)
    }
}

impl<I: Word, const F: u32> fmt::Display for FixedPoint<I, F> {
    /// Prints the decimal value without trailing zeros. A precision
    /// (`{:.3}`) rounds half away from zero to that many places.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut value = self.to_decimal().normalize();
        if let Some(places) = f.precision() {
            let places = places.min(MAX_DECIMAL_PLACES) as u32;
            value = value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
        }
        fmt::Display::fmt(&value, f)
    }
}

/// Largest scale a `Decimal` can carry.
const MAX_DECIMAL_PLACES: usize = 28;

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl<I: Word, const F: u32> FixedPoint<I, F> {
    fn decimal_scale() -> Decimal {
        Decimal::from_i128_with_scale(1i128 << Self::FRAC_BITS, 0)
    }

    /// Convert from `rust_decimal::Decimal`, rounding to the nearest
    /// representable value with ties away from zero.
    ///
    /// Values outside the format's range wrap.
    ///
    /// # Errors
    /// Returns `Overflow` if `value × 2^F` exceeds the decimal range.
    pub fn from_decimal(value: Decimal) -> NumericResult<Self> {
        let scaled = value.checked_mul(Self::decimal_scale()).ok_or_else(|| {
            tracing::debug!(%value, frac_bits = F, "decimal exceeds range once scaled");
            NumericError::Overflow
        })?;

        let rounded = scaled.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        let raw = rounded.to_i128().ok_or(NumericError::Overflow)?;

        // Two's-complement truncation to the storage width.
        Ok(Self(I::wrapping_from_u64(raw as u64)))
    }

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// Exact when the binary fraction has at most 28 significant decimal
    /// digits; otherwise rounded by the decimal division.
    pub fn to_decimal(self) -> Decimal {
        Decimal::from_i128_with_scale(self.0.to_i128(), 0) / Self::decimal_scale()
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl<I: Word, const F: u32> FromStr for FixedPoint<I, F> {
    type Err = NumericError;

    /// Parse from a decimal string, rounding to nearest.
    ///
    /// # Examples
    /// - "42" -> 42.0
    /// - "-0.25" -> -0.25
    /// - "1.5e2" -> 150.0
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parsed = if s.contains(['e', 'E']) {
            Decimal::from_scientific(s)
        } else {
            Decimal::from_str(s)
        };

        let value = parsed.map_err(|_| NumericError::InvalidInput)?;
        Self::from_decimal(value)
    }
}

// ============================================================================
// Type Aliases for Common Formats
// ============================================================================

/// Unsigned, 16 integer bits and 16 fractional bits in a `u32`
pub type U16F16 = FixedPoint<u32, 16>;

/// Unsigned, 32 integer bits and 32 fractional bits in a `u64`
pub type U32F32 = FixedPoint<u64, 32>;

/// Unsigned, 48 integer bits and 16 fractional bits in a `u64`
pub type U48F16 = FixedPoint<u64, 16>;

/// Signed, 16 integer bits and 16 fractional bits in an `i32`
pub type I16F16 = FixedPoint<i32, 16>;

/// Signed, 32 integer bits and 32 fractional bits in an `i64`
pub type I32F32 = FixedPoint<i64, 32>;

/// Signed, 48 integer bits and 16 fractional bits in an `i64`
pub type I48F16 = FixedPoint<i64, 16>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(I16F16::FRAC_BITS, 16);
        assert_eq!(I16F16::INT_BITS, 16);
        assert_eq!(U48F16::INT_BITS, 48);
        assert_eq!(I16F16::ZERO.raw_value(), 0);
        assert_eq!(I16F16::one().raw_value(), 65_536);
        assert_eq!(I32F32::one().raw_value(), 1i64 << 32);
        assert_eq!(I16F16::DELTA.raw_value(), 1);
        assert_eq!(I16F16::MAX.raw_value(), i32::MAX);
        assert_eq!(U16F16::MIN.raw_value(), 0);
    }

    #[test]
    fn test_pure_fraction_format() {
        type U0F8 = FixedPoint<u8, 8>;
        assert_eq!(U0F8::INT_BITS, 0);
        assert_eq!(U0F8::one(), U0F8::ZERO);
        assert_eq!(U0F8::from_f64(0.5).unwrap().raw_value(), 128);
    }

    #[test]
    fn test_from_int() {
        assert_eq!(I16F16::from_int(3).raw_value(), 3 << 16);
        assert_eq!(I16F16::from_int(-3).raw_value(), -3 << 16);
        assert_eq!(U32F32::from(7u64).raw_value(), 7u64 << 32);
        // Integer bits beyond the format wrap away.
        assert_eq!(FixedPoint::<i8, 4>::from_int(9).raw_value(), -112);
    }

    #[test]
    fn test_from_f64_exact_values() {
        assert_eq!(I16F16::from_f64(2.5).unwrap().raw_value(), 163_840);
        assert_eq!(I16F16::from_f64(-0.75).unwrap().raw_value(), -49_152);
        assert_eq!(I16F16::from_f64(0.0).unwrap(), I16F16::ZERO);
        assert_eq!(FixedPoint::<i8, 4>::from_f64(7.9375).unwrap().raw_value(), 127);
        assert_eq!(I32F32::from_f64(-1.0).unwrap().raw_value(), -(1i64 << 32));
    }

    #[test]
    fn test_from_f64_rounds_half_away_from_zero() {
        let half_ulp = 2f64.powi(-17);
        assert_eq!(I16F16::from_f64(half_ulp).unwrap().raw_value(), 1);
        assert_eq!(I16F16::from_f64(-half_ulp).unwrap().raw_value(), -1);
        assert_eq!(I16F16::from_f64(half_ulp * 0.99).unwrap().raw_value(), 0);
        assert_eq!(I16F16::from_f64(0.1).unwrap().raw_value(), 6_554);
    }

    #[test]
    fn test_from_f64_tiny_and_huge() {
        assert_eq!(I16F16::from_f64(1e-300).unwrap(), I16F16::ZERO);
        assert_eq!(I16F16::from_f64(f64::MIN_POSITIVE / 4.0).unwrap(), I16F16::ZERO);
        // 2^40 wraps to zero in a 32-bit word
        assert_eq!(I16F16::from_f64(2f64.powi(40)).unwrap(), I16F16::ZERO);
    }

    #[test]
    fn test_from_f64_rejects_non_finite() {
        assert_eq!(I16F16::from_f64(f64::NAN), Err(NumericError::InvalidInput));
        assert_eq!(U16F16::from_f64(f64::INFINITY), Err(NumericError::InvalidInput));
        assert_eq!(I16F16::from_f32(f32::NEG_INFINITY), Err(NumericError::InvalidInput));
    }

    #[test]
    fn test_negative_float_into_unsigned_wraps() {
        let x = U16F16::from_f64(-1.0).unwrap();
        assert_eq!(x.raw_value(), 0u32.wrapping_sub(1 << 16));
    }

    #[test]
    fn test_to_float() {
        assert_eq!(I16F16::from_raw(163_840).to_f64(), 2.5);
        assert_eq!(I48F16::from_int(-1_000_000).to_f64(), -1_000_000.0);
        assert_eq!(U32F32::from_raw(1).to_f64(), 2f64.powi(-32));
        assert_eq!(f32::from(I16F16::from_f64(-0.5).unwrap()), -0.5);
        assert_eq!(f64::from(U16F16::from_int(3)), 3.0);
    }

    #[test]
    fn test_cross_scale_conversion() {
        let x = I16F16::from_f64(1.75).unwrap();

        let wide: FixedPoint<i32, 24> = x.to_fixed();
        assert_eq!(wide.raw_value(), 7 << 22);

        let narrow: FixedPoint<i32, 1> = x.to_fixed();
        assert_eq!(narrow.raw_value(), 3); // 1.5, low bit lost

        let back = I16F16::from_fixed(wide);
        assert_eq!(back, x);

        let neg = I16F16::from_f64(-1.75).unwrap();
        let floored: FixedPoint<i32, 0> = neg.to_fixed();
        assert_eq!(floored.raw_value(), -2);
    }

    #[test]
    fn test_integer_and_fractional_parts() {
        let x = I16F16::from_f64(3.25).unwrap();
        assert_eq!(x.integer_part(), 3);
        assert_eq!(x.fractional_bits(), 1 << 14);

        let y = I16F16::from_f64(-1.5).unwrap();
        assert_eq!(y.integer_part(), -2);
        assert_eq!(y.fractional_bits(), 1 << 15);

        type U0F32 = FixedPoint<u32, 32>;
        assert_eq!(U0F32::from_raw(0xdead_beef).fractional_bits(), 0xdead_beef);
    }

    #[test]
    fn test_sign_predicates() {
        let neg = I16F16::from_int(-2);
        assert!(neg.is_negative());
        assert!(!neg.is_positive());
        assert!(I16F16::ZERO.is_zero());
        assert!(!I16F16::ZERO.is_positive());
        assert!(!U16F16::MAX.is_negative());
        assert!(U16F16::MAX.is_positive());
    }

    #[test]
    fn test_display() {
        assert_eq!(I16F16::from_f64(2.5).unwrap().to_string(), "2.5");
        assert_eq!(I16F16::from_int(-3).to_string(), "-3");
        assert_eq!(I16F16::ZERO.to_string(), "0");
        assert_eq!(U16F16::from_raw(1).to_string(), "0.0000152587890625");

        let tenth = I16F16::from_f64(0.1).unwrap();
        assert_eq!(tenth.to_string(), "0.100006103515625");
        assert_eq!(format!("{:.3}", tenth), "0.100");
        assert_eq!(format!("{:.2}", I16F16::from_f64(2.5).unwrap()), "2.50");
    }

    #[test]
    fn test_display_precision_rounds() {
        let x = I16F16::from_f64(2.999).unwrap();
        assert_eq!(format!("{:.2}", x), "3.00");
        assert_eq!(format!("{:.2}", x), format!("{:.2}", x.to_f64()));

        let two_thirds = I16F16::from_raw(43_691); // 0.66667175..
        assert_eq!(format!("{:.3}", two_thirds), "0.667");
        assert_eq!(format!("{:.3}", -two_thirds), "-0.667");

        // Ties round away from zero
        assert_eq!(format!("{:.0}", I16F16::from_f64(2.5).unwrap()), "3");
        assert_eq!(format!("{:.0}", I16F16::from_f64(-2.5).unwrap()), "-3");
        assert_eq!(format!("{:.1}", I16F16::from_f64(0.25).unwrap()), "0.3");
    }

    #[test]
    fn test_debug() {
        let x = I16F16::from_f64(2.5).unwrap();
        assert_eq!(format!("{:?}", x), "FixedPoint<i32, 16>(2.5, raw=163840)");
    }

    #[test]
    fn test_from_str() {
        let x: I16F16 = "2.5".parse().unwrap();
        assert_eq!(x.raw_value(), 163_840);

        let y: I16F16 = " -0.25 ".parse().unwrap();
        assert_eq!(y.raw_value(), -16_384);

        let z: U48F16 = "1.5e2".parse().unwrap();
        assert_eq!(z, U48F16::from_int(150));
    }

    #[test]
    fn test_from_str_invalid() {
        let result: Result<I16F16, _> = "not_a_number".parse();
        assert_eq!(result, Err(NumericError::InvalidInput));

        let result: Result<I16F16, _> = "".parse();
        assert_eq!(result, Err(NumericError::InvalidInput));
    }

    #[test]
    fn test_from_decimal() {
        let d = Decimal::new(12345, 2); // 123.45
        let x = I48F16::from_decimal(d).unwrap();
        assert_eq!(x.integer_part(), 123);
        assert_eq!(x.raw_value(), (123.45f64 * 65_536.0).round() as i64);

        // Exactly half an ulp rounds away from zero in both directions.
        let half_ulp = Decimal::new(762939453125, 17); // 2^-17
        assert_eq!(I16F16::from_decimal(half_ulp).unwrap().raw_value(), 1);
        assert_eq!(I16F16::from_decimal(-half_ulp).unwrap().raw_value(), -1);
    }

    #[test]
    fn test_from_decimal_overflow() {
        assert_eq!(I32F32::from_decimal(Decimal::MAX), Err(NumericError::Overflow));
    }

    #[test]
    fn test_to_decimal() {
        let x = I16F16::from_f64(-123.375).unwrap();
        assert_eq!(x.to_decimal(), Decimal::new(-123375, 3));
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(U32F32::default(), U32F32::ZERO);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_raw_integer() {
        let x = I16F16::from_f64(2.5).unwrap();
        let json = serde_json::to_string(&x).unwrap();
        assert_eq!(json, "163840");
        let back: I16F16 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, x);
    }
}
