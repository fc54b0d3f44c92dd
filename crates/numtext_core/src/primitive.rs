//! Primitive Numeric Widths
//!
//! The parsers are generic over the caller's destination type. These traits
//! expose the handful of per-type facts they need: the accumulator's upper
//! bound, signedness, and the largest representable base-10 exponent.
//!
//! Both traits are sealed. Overflow detection and exponent clamping rely on
//! the exact semantics of the built-in primitives.

use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width primitive integer the integer parser can accumulate into.
pub trait Integer: sealed::Sealed + Copy + PartialOrd + fmt::Debug + fmt::Display {
    const ZERO: Self;
    const MAX: Self;
    const SIGNED: bool;

    /// `MAX / radix`: the largest accumulator that may still be multiplied
    /// by `radix` without leaving the type's range.
    fn max_div(radix: u8) -> Self;

    /// `self * radix + digit`, or `None` if either step overflows.
    fn checked_mul_add(self, radix: u8, digit: u8) -> Option<Self>;

    /// Arithmetic negation. Unsigned types return `self` unchanged.
    ///
    /// Only called on accumulators bounded by `MAX`, so the negation of a
    /// signed value is always representable.
    #[must_use]
    fn negate(self) -> Self;
}

macro_rules! impl_signed {
    ($($ty:ty),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        #[allow(
            clippy::cast_possible_wrap,
            clippy::cast_possible_truncation,
            clippy::cast_lossless,
            reason = "radix and digit are at most 16, which fits every primitive"
        )]
        impl Integer for $ty {
            const ZERO: Self = 0;
            const MAX: Self = <$ty>::MAX;
            const SIGNED: bool = true;

            #[inline]
            fn max_div(radix: u8) -> Self {
                Self::MAX / radix as $ty
            }

            #[inline]
            fn checked_mul_add(self, radix: u8, digit: u8) -> Option<Self> {
                self.checked_mul(radix as $ty)?.checked_add(digit as $ty)
            }

            #[inline]
            fn negate(self) -> Self {
                -self
            }
        }
    )*};
}

macro_rules! impl_unsigned {
    ($($ty:ty),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        #[allow(
            clippy::cast_lossless,
            reason = "radix and digit are at most 16, which fits every primitive"
        )]
        impl Integer for $ty {
            const ZERO: Self = 0;
            const MAX: Self = <$ty>::MAX;
            const SIGNED: bool = false;

            #[inline]
            fn max_div(radix: u8) -> Self {
                Self::MAX / radix as $ty
            }

            #[inline]
            fn checked_mul_add(self, radix: u8, digit: u8) -> Option<Self> {
                self.checked_mul(radix as $ty)?.checked_add(digit as $ty)
            }

            #[inline]
            fn negate(self) -> Self {
                self
            }
        }
    )*};
}

impl_signed!(i8, i16, i32, i64, i128, isize);
impl_unsigned!(u8, u16, u32, u64, u128, usize);

/// A binary floating-point primitive the float parser can produce.
pub trait Float:
    sealed::Sealed + Copy + PartialEq + fmt::Debug + fmt::Display + FromStr + Neg<Output = Self>
{
    const ZERO: Self;

    /// Largest `n` such that `10^n` is a finite value of this type.
    const MAX_EXP10: u32;

    fn is_finite(self) -> bool;
}

impl sealed::Sealed for f32 {}

impl Float for f32 {
    const ZERO: Self = 0.0;
    #[allow(clippy::cast_sign_loss, reason = "MAX_10_EXP is positive")]
    const MAX_EXP10: u32 = f32::MAX_10_EXP as u32;

    #[inline]
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }
}

impl sealed::Sealed for f64 {}

impl Float for f64 {
    const ZERO: Self = 0.0;
    #[allow(clippy::cast_sign_loss, reason = "MAX_10_EXP is positive")]
    const MAX_EXP10: u32 = f64::MAX_10_EXP as u32;

    #[inline]
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
}
