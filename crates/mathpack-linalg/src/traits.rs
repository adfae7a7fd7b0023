//! Element traits for the generic fixed-size types.
//!
//! Integers get enough to build, index and multiply matrices exactly; the floating-point types
//! additionally implement [`Real`], which the norms, rotations and inverses require.

use std::ops::{Add, Div, Mul, Neg, Sub};

/// Additive identity.
pub trait Zero {
    const ZERO: Self;
}

/// Multiplicative identity.
pub trait One {
    const ONE: Self;
}

pub trait Sqrt {
    fn sqrt(self) -> Self;
}

pub trait Abs {
    fn abs(self) -> Self;
}

/// Angle functions, in radians.
pub trait Trig: Copy {
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    /// Four-quadrant arctangent of `self / x`.
    fn atan2(self, x: Self) -> Self;
    fn sin_cos(self) -> (Self, Self) {
        (self.sin(), self.cos())
    }
}

/// Ordering helpers usable on floats, where NaN defeats [`Ord`].
///
/// The float impls forward to [`f64::min`]/[`f64::max`], which return the non-NaN operand.
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;

    /// Limits `self` to `lo..=hi`.
    fn clamp(self, lo: Self, hi: Self) -> Self {
        self.max(lo).min(hi)
    }
}

/// Closed under the four arithmetic operations and negation.
pub trait Number:
    Zero
    + One
    + Copy
    + PartialEq
    + Neg<Output = Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
}

impl<T> Number for T where
    T: Zero
        + One
        + Copy
        + PartialEq
        + Neg<Output = T>
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
{
}

/// Real numbers: everything needed for rotations, norms and pivot searches.
///
/// Implemented for [`f32`] and [`f64`].
pub trait Real: Number + Sqrt + Trig + Abs + MinMax + PartialOrd {
    /// Converts an `f64` constant into this type.
    fn from_f64(value: f64) -> Self;
}

/// Forwards trait methods to the inherent methods of the same name on each listed type.
macro_rules! forward {
    ($tr:ident for $($t:ty),+ => $methods:tt) => {
        $(forward!(@impl $tr, $t, $methods);)+
    };
    (@impl $tr:ident, $t:ty, { $($method:ident($($arg:ident),*)),+ }) => {
        impl $tr for $t {
            $(
                #[inline]
                fn $method(self $(, $arg: Self)*) -> Self {
                    <$t>::$method(self $(, $arg)*)
                }
            )+
        }
    };
}

macro_rules! ord_min_max {
    ($($t:ty),+) => {
        $(
            impl MinMax for $t {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }
        )+
    };
}

macro_rules! identities {
    ($zero:literal, $one:literal => $($t:ty),+) => {
        $(
            impl Zero for $t {
                const ZERO: Self = $zero;
            }

            impl One for $t {
                const ONE: Self = $one;
            }
        )+
    };
}

identities!(0, 1 => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
identities!(0.0, 1.0 => f32, f64);

ord_min_max!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
forward!(MinMax for f32, f64 => { min(other), max(other) });
forward!(Abs for i8, i16, i32, i64, i128, isize, f32, f64 => { abs() });
forward!(Sqrt for f32, f64 => { sqrt() });
forward!(Trig for f32, f64 => { sin(), cos(), tan(), asin(), acos(), atan2(x) });

impl Real for f32 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl Real for f64 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generic_clamp<T: MinMax>(v: T, lo: T, hi: T) -> T {
        v.clamp(lo, hi)
    }

    #[test]
    fn clamp() {
        assert_eq!(generic_clamp(5, 0, 3), 3);
        assert_eq!(generic_clamp(-5, 0, 3), 0);
        assert_eq!(generic_clamp(0.5, 0.0, 1.0), 0.5);
        assert_eq!(MinMax::max(f64::NAN, 2.0), 2.0);
    }

    #[test]
    fn real_conversion() {
        assert_eq!(<f32 as Real>::from_f64(0.5), 0.5f32);
        assert_eq!(Abs::abs(-2.0f64), 2.0);
        assert_eq!(Abs::abs(-2i32), 2);
        let (s, c) = Trig::sin_cos(0.0f64);
        assert_eq!((s, c), (0.0, 1.0));
    }
}
