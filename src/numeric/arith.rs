// ============================================================================
// Arithmetic Operators
// Wrapping operators between fixed-point values of any scale
// ============================================================================
//
// Every binary operator takes a right operand with its own fractional bit
// count `FB` and produces a value in the left operand's format. Overflow
// wraps. Only division and remainder by zero fail.

use super::division::reciprocal_div;
use super::errors::{NumericError, NumericResult};
use super::fixed_point::FixedPoint;
use crate::bits::{mul_shr, Word};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

impl<I: Word, const F: u32> FixedPoint<I, F> {
    /// Checked division.
    ///
    /// The quotient is truncated and may sit a few units in the last place
    /// below the exact value; divisors that are powers of two are exact.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    #[inline]
    pub fn checked_div<const FB: u32>(self, rhs: FixedPoint<I, FB>) -> NumericResult<Self> {
        reciprocal_div(self.0, rhs.0, FixedPoint::<I, FB>::FRAC_BITS).map(Self)
    }

    /// Checked remainder, with the sign of `self`.
    ///
    /// `rhs` is first brought to this type's scale.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero at this scale.
    #[inline]
    pub fn checked_rem<const FB: u32>(self, rhs: FixedPoint<I, FB>) -> NumericResult<Self> {
        let divisor = Self::align(rhs);
        if divisor == I::ZERO {
            tracing::trace!(raw = %self.0, "fixed-point remainder by zero");
            return Err(NumericError::DivisionByZero);
        }
        Ok(Self(self.0.wrapping_rem(divisor)))
    }

    /// Absolute value. `MIN` wraps to itself; unsigned values are unchanged.
    #[inline]
    pub fn abs(self) -> Self {
        if self.is_negative() {
            -self
        } else {
            self
        }
    }
}

impl<I: Word, const F: u32> Neg for FixedPoint<I, F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(self.0.wrapping_neg())
    }
}

impl<I: Word, const F: u32, const FB: u32> Add<FixedPoint<I, FB>> for FixedPoint<I, F> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: FixedPoint<I, FB>) -> Self::Output {
        Self(self.0.wrapping_add(Self::align(rhs)))
    }
}

impl<I: Word, const F: u32, const FB: u32> Sub<FixedPoint<I, FB>> for FixedPoint<I, F> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: FixedPoint<I, FB>) -> Self::Output {
        Self(self.0.wrapping_sub(Self::align(rhs)))
    }
}

impl<I: Word, const F: u32, const FB: u32> Mul<FixedPoint<I, FB>> for FixedPoint<I, F> {
    type Output = Self;

    /// `(A / 2^F)(B / 2^FB) · 2^F = A·B / 2^FB`
    #[inline]
    fn mul(self, rhs: FixedPoint<I, FB>) -> Self::Output {
        Self(mul_shr(self.0, rhs.0, FixedPoint::<I, FB>::FRAC_BITS as i32))
    }
}

// Panics on a zero divisor like native integer division; use checked_div to
// get an error instead.
impl<I: Word, const F: u32, const FB: u32> Div<FixedPoint<I, FB>> for FixedPoint<I, F> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: FixedPoint<I, FB>) -> Self::Output {
        self.checked_div(rhs).expect("attempt to divide by zero")
    }
}

impl<I: Word, const F: u32, const FB: u32> Rem<FixedPoint<I, FB>> for FixedPoint<I, F> {
    type Output = Self;

    #[inline]
    fn rem(self, rhs: FixedPoint<I, FB>) -> Self::Output {
        self.checked_rem(rhs)
            .expect("attempt to calculate the remainder with a divisor of zero")
    }
}

macro_rules! impl_assign_op {
    ($assign:ident, $method:ident, $op:ident, $op_method:ident) => {
        impl<I: Word, const F: u32, const FB: u32> $assign<FixedPoint<I, FB>>
            for FixedPoint<I, F>
        {
            #[inline]
            fn $method(&mut self, rhs: FixedPoint<I, FB>) {
                *self = $op::$op_method(*self, rhs);
            }
        }
    };
}

impl_assign_op!(AddAssign, add_assign, Add, add);
impl_assign_op!(SubAssign, sub_assign, Sub, sub);
impl_assign_op!(MulAssign, mul_assign, Mul, mul);
impl_assign_op!(DivAssign, div_assign, Div, div);
impl_assign_op!(RemAssign, rem_assign, Rem, rem);
