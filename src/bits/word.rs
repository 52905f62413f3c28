// ============================================================================
// Storage Words
// Abstraction over the native integers a fixed-point value can live in
// ============================================================================

use std::fmt;
use std::hash::Hash;
use std::ops::{BitAnd, Not};

mod sealed {
    pub trait Sealed {}
}

/// A native fixed-width integer usable as fixed-point storage.
///
/// Implemented for `i8`, `i16`, `i32`, `i64`, `u8`, `u16`, `u32` and `u64`.
/// All arithmetic is wrapping; shift methods require `n < BITS` and callers
/// go through [`signed_shr`](super::signed_shr) for anything wider.
pub trait Word:
    sealed::Sealed
    + Copy
    + Default
    + Eq
    + Ord
    + Hash
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + 'static
    + BitAnd<Output = Self>
    + Not<Output = Self>
{
    /// Unsigned integer of the same width.
    type Unsigned: Word<Unsigned = Self::Unsigned>;

    /// Width in bits.
    const BITS: u32;
    /// Whether the top bit is a sign bit.
    const SIGNED: bool;
    const ZERO: Self;
    const ONE: Self;
    const MIN: Self;
    const MAX: Self;
    /// Primitive type name, used by `Debug` output.
    const NAME: &'static str;

    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;
    fn wrapping_mul(self, rhs: Self) -> Self;
    fn wrapping_neg(self) -> Self;
    /// Remainder that wraps on `MIN % -1` instead of panicking. Panics on zero.
    fn wrapping_rem(self, rhs: Self) -> Self;
    /// Left shift; `n` must be below `BITS`.
    fn wrapping_shl(self, n: u32) -> Self;
    /// Right shift (arithmetic for signed words); `n` must be below `BITS`.
    fn wrapping_shr(self, n: u32) -> Self;
    fn leading_zeros(self) -> u32;
    fn is_negative(self) -> bool;

    /// Reinterpret the bits as the unsigned word of the same width.
    fn to_unsigned(self) -> Self::Unsigned;
    /// Reinterpret unsigned bits as this word.
    fn from_unsigned(bits: Self::Unsigned) -> Self;
    /// Truncate a 64-bit pattern to this width.
    fn wrapping_from_u64(bits: u64) -> Self;

    fn to_f64(self) -> f64;
    fn to_i128(self) -> i128;

    /// Magnitude as an unsigned word. `MIN` maps to `2^(BITS-1)`.
    #[inline]
    fn unsigned_abs(self) -> Self::Unsigned {
        if self.is_negative() {
            self.wrapping_neg().to_unsigned()
        } else {
            self.to_unsigned()
        }
    }
}

macro_rules! impl_word {
    ($t:ty, $u:ty, $signed:expr, |$x:ident| $is_negative:expr) => {
        impl sealed::Sealed for $t {}

        impl Word for $t {
            type Unsigned = $u;

            const BITS: u32 = <$t>::BITS;
            const SIGNED: bool = $signed;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;
            const NAME: &'static str = stringify!($t);

            #[inline]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$t>::wrapping_add(self, rhs)
            }

            #[inline]
            fn wrapping_sub(self, rhs: Self) -> Self {
                <$t>::wrapping_sub(self, rhs)
            }

            #[inline]
            fn wrapping_mul(self, rhs: Self) -> Self {
                <$t>::wrapping_mul(self, rhs)
            }

            #[inline]
            fn wrapping_neg(self) -> Self {
                <$t>::wrapping_neg(self)
            }

            #[inline]
            fn wrapping_rem(self, rhs: Self) -> Self {
                <$t>::wrapping_rem(self, rhs)
            }

            #[inline]
            fn wrapping_shl(self, n: u32) -> Self {
                debug_assert!(n < Self::BITS);
                <$t>::wrapping_shl(self, n)
            }

            #[inline]
            fn wrapping_shr(self, n: u32) -> Self {
                debug_assert!(n < Self::BITS);
                <$t>::wrapping_shr(self, n)
            }

            #[inline]
            fn leading_zeros(self) -> u32 {
                <$t>::leading_zeros(self)
            }

            #[inline]
            fn is_negative(self) -> bool {
                let $x = self;
                $is_negative
            }

            #[inline]
            fn to_unsigned(self) -> $u {
                self as $u
            }

            #[inline]
            fn from_unsigned(bits: $u) -> Self {
                bits as $t
            }

            #[inline]
            fn wrapping_from_u64(bits: u64) -> Self {
                bits as $t
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn to_i128(self) -> i128 {
                self as i128
            }
        }
    };
}

impl_word!(u8, u8, false, |_x| false);
impl_word!(u16, u16, false, |_x| false);
impl_word!(u32, u32, false, |_x| false);
impl_word!(u64, u64, false, |_x| false);
impl_word!(i8, u8, true, |x| x < 0);
impl_word!(i16, u16, true, |x| x < 0);
impl_word!(i32, u32, true, |x| x < 0);
impl_word!(i64, u64, true, |x| x < 0);
