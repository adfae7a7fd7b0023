//! Scalar utilities and package-wide constants.

use std::mem;

use crate::{Abs, MinMax, Real, Zero};

pub const PI: f64 = std::f64::consts::PI;
pub const TAU: f64 = std::f64::consts::TAU;
pub const FRAC_PI_2: f64 = std::f64::consts::FRAC_PI_2;
pub const DEG_TO_RAD: f64 = PI / 180.0;
pub const RAD_TO_DEG: f64 = 180.0 / PI;

/// Magnitude below which a value is treated as zero by [`is_zero`].
pub const EPSILON: f64 = 1.0e-6;
/// Square of [`EPSILON`], for comparisons against squared norms.
pub const EPSILON2: f64 = 1.0e-12;

/// Field width used by the `Display` impls of all value types.
pub const DISPLAY_WIDTH: usize = 12;
/// Number of decimals used by the `Display` impls of all value types.
pub const PRECISION: usize = 6;

#[inline]
pub fn abs<T: Abs>(a: T) -> T {
    a.abs()
}

/// Cube root, defined for negative inputs.
#[inline]
pub fn cbrt(a: f64) -> f64 {
    a.cbrt()
}

/// Returns `true` if `|a| < EPSILON`.
///
/// # Examples
///
/// ```
/// # use mathpack_linalg::scalar::is_zero;
/// assert!(is_zero(1e-9));
/// assert!(!is_zero(1e-3));
/// ```
#[inline]
pub fn is_zero<T: Real>(a: T) -> bool {
    a.abs() < T::from_f64(EPSILON)
}

/// Returns the sign of `a`: `1`, `-1`, or `0`.
#[inline]
pub fn sgn<T: Zero + PartialOrd>(a: T) -> i32 {
    if a > T::ZERO {
        1
    } else if a < T::ZERO {
        -1
    } else {
        0
    }
}

/// Rounds to the nearest integer, halves away from zero.
#[inline]
pub fn round(a: f64) -> f64 {
    a.round()
}

#[inline]
pub fn floor(a: f64) -> f64 {
    a.floor()
}

#[inline]
pub fn ceil(a: f64) -> f64 {
    a.ceil()
}

/// Clips `a` to the closed range `[l, h]`.
///
/// # Examples
///
/// ```
/// # use mathpack_linalg::scalar::clip;
/// assert_eq!(clip(1.5, 0.0, 1.0), 1.0);
/// assert_eq!(clip(-3, 0, 10), 0);
/// ```
#[inline]
pub fn clip<T: MinMax>(a: T, l: T, h: T) -> T {
    a.clamp(l, h)
}

#[inline]
pub fn max<T: MinMax>(a: T, b: T) -> T {
    a.max(b)
}

#[inline]
pub fn min<T: MinMax>(a: T, b: T) -> T {
    a.min(b)
}

/// Exchanges the values behind `a` and `b`.
#[inline]
pub fn swap<T>(a: &mut T, b: &mut T) {
    mem::swap(a, b);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign() {
        assert_eq!(sgn(3.0), 1);
        assert_eq!(sgn(-0.1), -1);
        assert_eq!(sgn(0.0), 0);
        assert_eq!(sgn(-7i64), -1);
    }

    #[test]
    fn rounding() {
        assert_eq!(round(2.5), 3.0);
        assert_eq!(round(-2.5), -3.0);
        assert_eq!(floor(-0.5), -1.0);
        assert_eq!(ceil(-0.5), 0.0);
        assert!((cbrt(-27.0) + 3.0).abs() < 1e-12);
    }

    #[test]
    fn zero_check() {
        assert!(is_zero(0.0));
        assert!(is_zero(-9.9e-7));
        assert!(!is_zero(1.0e-6));
        assert!(is_zero(1e-7f32));
    }

    #[test]
    fn swapping() {
        let (mut a, mut b) = (1, 2);
        swap(&mut a, &mut b);
        assert_eq!((a, b), (2, 1));
        assert_eq!(max(1.0, 2.0), 2.0);
        assert_eq!(min(1, 2), 1);
        assert_eq!(abs(-4.0), 4.0);
    }
}
