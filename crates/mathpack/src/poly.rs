//! Real roots of quadratic and cubic polynomials.
//!
//! Coefficients are given in ascending powers, so `[c0, c1, c2]` is `c0 + c1·x + c2·x²`. Roots
//! are returned in ascending order; a repeated root is listed once per multiplicity found.

use mathpack_linalg::{scalar, VectorN};

/// Returns the real roots of `c[0] + c[1]·x + c[2]·x²`.
///
/// A zero `c[2]` solves the linear equation instead. A polynomial that is identically zero or
/// constant has no roots.
///
/// # Examples
///
/// ```
/// // x² - 3x + 2
/// let roots = mathpack::solve_quadratic([2.0, -3.0, 1.0]);
/// assert_eq!(roots, [1.0, 2.0]);
/// ```
pub fn solve_quadratic(c: [f64; 3]) -> VectorN {
    let [c0, c1, c2] = c;
    if c2 == 0.0 {
        if c1 == 0.0 {
            return VectorN::new();
        }
        return VectorN::from(vec![-c0 / c1]);
    }

    let disc = c1 * c1 - 4.0 * c2 * c0;
    if disc < 0.0 {
        return VectorN::new();
    }

    // Avoids cancellation between `c1` and the root of the discriminant.
    let q = -0.5 * (c1 + c1.signum() * disc.sqrt());
    let mut roots = if q == 0.0 {
        vec![0.0, 0.0]
    } else {
        vec![q / c2, c0 / q]
    };
    roots.sort_by(f64::total_cmp);
    VectorN::from(roots)
}

/// Returns the real roots of `c[0] + c[1]·x + c[2]·x² + c[3]·x³`.
///
/// A zero `c[3]` solves the quadratic instead.
///
/// # Examples
///
/// ```
/// // (x - 1)(x - 2)(x + 3)
/// let roots = mathpack::solve_cubic([6.0, -7.0, 0.0, 1.0]);
/// assert_eq!(roots.size(), 3);
/// assert!((roots[0] + 3.0).abs() < 1e-12);
/// ```
pub fn solve_cubic(c: [f64; 4]) -> VectorN {
    if c[3] == 0.0 {
        return solve_quadratic([c[0], c[1], c[2]]);
    }

    // Normalize to x³ + a·x² + b·x + k.
    let (a, b, k) = (c[2] / c[3], c[1] / c[3], c[0] / c[3]);
    let q = (a * a - 3.0 * b) / 9.0;
    let r = (2.0 * a * a * a - 9.0 * a * b + 27.0 * k) / 54.0;
    let shift = a / 3.0;

    let mut roots = if q > 0.0 && r * r <= q * q * q {
        let theta = scalar::clip(r / (q * q * q).sqrt(), -1.0, 1.0).acos();
        let m = -2.0 * q.sqrt();
        vec![
            m * (theta / 3.0).cos() - shift,
            m * ((theta + scalar::TAU) / 3.0).cos() - shift,
            m * ((theta - scalar::TAU) / 3.0).cos() - shift,
        ]
    } else {
        let big = -r.signum() * scalar::cbrt(r.abs() + (r * r - q * q * q).sqrt());
        let small = if big == 0.0 { 0.0 } else { q / big };
        vec![big + small - shift]
    };
    roots.sort_by(f64::total_cmp);
    VectorN::from(roots)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn quadratic() {
        assert_eq!(solve_quadratic([2.0, -3.0, 1.0]), [1.0, 2.0]);
        assert_eq!(solve_quadratic([1.0, 0.0, 1.0]).size(), 0);
        assert_eq!(solve_quadratic([0.0, 0.0, 2.0]), [0.0, 0.0]);
        assert_eq!(solve_quadratic([4.0, 2.0, 0.0]), [-2.0]);
        assert!(solve_quadratic([4.0, 0.0, 0.0]).is_empty());
    }

    #[test]
    fn quadratic_small_root() {
        // x² - 1e8·x + 1: the small root is lost to cancellation by the textbook formula.
        let roots = solve_quadratic([1.0, -1e8, 1.0]);
        assert_relative_eq!(roots[0], 1e-8, max_relative = 1e-12);
        assert_relative_eq!(roots[1], 1e8, max_relative = 1e-12);
    }

    #[test]
    fn cubic_three_roots() {
        let roots = solve_cubic([6.0, -7.0, 0.0, 1.0]);
        assert_relative_eq!(roots, VectorN::from(vec![-3.0, 1.0, 2.0]), epsilon = 1e-12);

        // 2(x - 1)²(x + 2) = 2x³ - 6x + 4
        let roots = solve_cubic([4.0, -6.0, 0.0, 2.0]);
        assert_relative_eq!(roots, VectorN::from(vec![-2.0, 1.0, 1.0]), epsilon = 1e-7);
    }

    #[test]
    fn cubic_one_root() {
        // (x - 2)(x² + 1)
        let roots = solve_cubic([-2.0, 1.0, -2.0, 1.0]);
        assert_relative_eq!(roots, VectorN::from(vec![2.0]), epsilon = 1e-12);

        // (x + 1)³
        let roots = solve_cubic([1.0, 3.0, 3.0, 1.0]);
        assert_relative_eq!(roots, VectorN::from(vec![-1.0]), epsilon = 1e-12);
    }

    #[test]
    fn degenerate_cubic() {
        assert_eq!(solve_cubic([2.0, -3.0, 1.0, 0.0]), [1.0, 2.0]);
    }
}
