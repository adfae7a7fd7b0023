//! Gaussian elimination solvers for square linear systems `A·X = B`.
//!
//! Both solvers accept any [`Dense`] operands, so a [`Mat3d`][crate::linalg::Mat3d] system with
//! a [`Vec3d`][crate::linalg::Vec3d] right-hand side works just like [`MatrixN`]s. `B` and `X`
//! may have any number of columns, one per right-hand side.

use mathpack_linalg::{access, Dense, DenseMut, MatrixN};

use crate::{Error, Result};

/// Solves `A·X = B` with Gauss-Jordan elimination and full pivoting, replacing `a` with its
/// inverse.
///
/// At every step the largest remaining element of `a` (by magnitude) is used as the pivot. When
/// several elements tie, the first one in row-major order wins.
///
/// Returns [`Error::Singular`] if no non-zero pivot remains. `a` and `x` are left partially
/// reduced in that case.
///
/// # Panics
///
/// Panics if `a` is not square, or if `b` and `x` do not both have `a.rows()` rows and the
/// same number of columns.
///
/// # Examples
///
/// ```
/// use mathpack::linalg::{Matrix, vec2, Vec2d};
///
/// let mut a = Matrix::from_rows([[2.0, 1.0], [1.0, 3.0]]);
/// let mut x = Vec2d::ZERO;
/// mathpack::gauss_jordan(&mut a, &vec2(3.0, 5.0), &mut x)?;
/// assert!((x.x - 0.8).abs() < 1e-12 && (x.y - 1.4).abs() < 1e-12);
/// # Ok::<(), mathpack::Error>(())
/// ```
pub fn gauss_jordan<A, B, X>(a: &mut A, b: &B, x: &mut X) -> Result<()>
where
    A: DenseMut + ?Sized,
    B: Dense + ?Sized,
    X: DenseMut + ?Sized,
{
    check_system("gauss_jordan", &*a, b, &*x);
    let n = a.rows();
    log::trace!("gauss_jordan: {n}x{n} system, {} right-hand sides", b.cols());
    x.elems_mut().copy_from_slice(b.elems());

    let mut used = vec![false; n];
    let mut pivot_rows = vec![0; n];
    let mut pivot_cols = vec![0; n];
    for step in 0..n {
        let mut big = 0.0;
        let (mut prow, mut pcol) = (0, 0);
        for row in (0..n).filter(|&r| !used[r]) {
            for col in (0..n).filter(|&c| !used[c]) {
                let mag = a.at(row, col).abs();
                if mag > big {
                    big = mag;
                    prow = row;
                    pcol = col;
                }
            }
        }
        if big == 0.0 {
            return Err(Error::Singular {
                routine: "gauss_jordan",
                step: step + 1,
            }
            .logged());
        }
        used[pcol] = true;

        // Move the pivot onto the diagonal.
        access::swap_rows(a, prow, pcol);
        access::swap_rows(x, prow, pcol);
        pivot_rows[step] = prow;
        pivot_cols[step] = pcol;

        let inv = 1.0 / a.at(pcol, pcol);
        *a.at_mut(pcol, pcol) = 1.0;
        scale_row(a, pcol, inv);
        scale_row(x, pcol, inv);

        for row in (0..n).filter(|&r| r != pcol) {
            let factor = a.at(row, pcol);
            *a.at_mut(row, pcol) = 0.0;
            sub_row(a, row, pcol, factor);
            sub_row(x, row, pcol, factor);
        }
    }

    for (&r, &c) in pivot_rows.iter().zip(&pivot_cols).rev() {
        access::swap_cols(a, r, c);
    }
    Ok(())
}

/// Solves `A·X = B` with Gaussian elimination and partial pivoting, followed by
/// back-substitution.
///
/// `a` is reduced to upper triangular form in place. Rows are only swapped when a lower row
/// holds a strictly larger pivot candidate.
///
/// Returns [`Error::Singular`] if a pivot is exactly zero.
///
/// # Panics
///
/// Panics under the same conditions as [`gauss_jordan`].
pub fn gauss_elimination<A, B, X>(a: &mut A, b: &B, x: &mut X) -> Result<()>
where
    A: DenseMut + ?Sized,
    B: Dense + ?Sized,
    X: DenseMut + ?Sized,
{
    check_system("gauss_elimination", &*a, b, &*x);
    let n = a.rows();
    log::trace!("gauss_elimination: {n}x{n} system, {} right-hand sides", b.cols());
    x.elems_mut().copy_from_slice(b.elems());

    for i in 0..n {
        let mut pivot = i;
        let mut big = a.at(i, i).abs();
        for row in i + 1..n {
            let mag = a.at(row, i).abs();
            if mag > big {
                big = mag;
                pivot = row;
            }
        }
        access::swap_rows(a, i, pivot);
        access::swap_rows(x, i, pivot);
        if a.at(i, i) == 0.0 {
            return Err(Error::Singular {
                routine: "gauss_elimination",
                step: i + 1,
            }
            .logged());
        }

        for row in i + 1..n {
            let factor = a.at(row, i) / a.at(i, i);
            sub_row(a, row, i, factor);
            *a.at_mut(row, i) = 0.0;
            sub_row(x, row, i, factor);
        }
    }

    for col in 0..x.cols() {
        for i in (0..n).rev() {
            let mut sum = x.at(i, col);
            for j in i + 1..n {
                sum -= a.at(i, j) * x.at(j, col);
            }
            *x.at_mut(i, col) = sum / a.at(i, i);
        }
    }
    Ok(())
}

/// Returns the inverse of the square matrix `a`, computed with [`gauss_jordan`].
///
/// # Panics
///
/// Panics if `a` is not square.
pub fn inverse(a: &MatrixN) -> Result<MatrixN> {
    let mut inv = a.clone();
    let n = a.rows();
    let no_rhs = MatrixN::zeros(n, 0);
    gauss_jordan(&mut inv, &no_rhs, &mut MatrixN::zeros(n, 0))?;
    Ok(inv)
}

fn check_system<A, B, X>(routine: &str, a: &A, b: &B, x: &X)
where
    A: Dense + ?Sized,
    B: Dense + ?Sized,
    X: Dense + ?Sized,
{
    let n = a.rows();
    assert_eq!(
        n,
        a.cols(),
        "{routine}: coefficient matrix must be square, got {}x{}",
        n,
        a.cols()
    );
    assert!(
        b.rows() == n && x.rows() == n && x.cols() == b.cols(),
        "{routine}: cannot solve a {n}x{n} system for a {}x{} right-hand side into a {}x{} solution",
        b.rows(),
        b.cols(),
        x.rows(),
        x.cols()
    );
}

fn scale_row<M: DenseMut + ?Sized>(m: &mut M, row: usize, factor: f64) {
    let cols = m.cols();
    for elem in &mut m.elems_mut()[row * cols..(row + 1) * cols] {
        *elem *= factor;
    }
}

/// `m[dst] -= factor * m[src]`
fn sub_row<M: DenseMut + ?Sized>(m: &mut M, dst: usize, src: usize, factor: f64) {
    let cols = m.cols();
    let elems = m.elems_mut();
    for c in 0..cols {
        elems[dst * cols + c] -= factor * elems[src * cols + c];
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use mathpack_linalg::{vec2, vec3, Mat3d, Matrix, Vec2d, Vec3d, VectorN};

    use super::*;

    #[test]
    fn two_by_two() {
        let mut a = Matrix::from_rows([[2.0, 1.0], [1.0, 3.0]]);
        let mut x = Vec2d::ZERO;
        gauss_jordan(&mut a, &vec2(3.0, 5.0), &mut x).unwrap();
        assert_relative_eq!(x, vec2(0.8, 1.4), epsilon = 1e-12);
        assert_relative_eq!(
            a,
            Matrix::from_rows([[0.6, -0.2], [-0.2, 0.4]]),
            epsilon = 1e-12
        );
    }

    #[test]
    fn jordan_needs_column_pivot() {
        // The only usable first pivot sits off the diagonal.
        let original = Mat3d::from_rows([[0.0, 2.0, 0.0], [0.0, 0.0, 3.0], [4.0, 0.0, 0.0]]);
        let mut a = original;
        let mut x = Vec3d::ZERO;
        gauss_jordan(&mut a, &vec3(2.0, 6.0, 4.0), &mut x).unwrap();
        assert_relative_eq!(x, vec3(1.0, 1.0, 2.0), epsilon = 1e-12);
        assert_relative_eq!(original * a, Mat3d::identity(), epsilon = 1e-12);
    }

    #[test]
    fn elimination_agrees_with_jordan() {
        let a = MatrixN::from_rows(&[
            [4.0, -2.0, 1.0, 0.5],
            [-2.0, 4.0, -2.0, 1.0],
            [1.0, -2.0, 4.0, -2.0],
            [0.5, 1.0, -2.0, 4.0],
        ]);
        let b = MatrixN::from_rows(&[[11.0, 1.0], [-16.0, 0.0], [17.0, 0.0], [-9.0, 1.0]]);

        let mut xj = MatrixN::zeros(4, 2);
        gauss_jordan(&mut a.clone(), &b, &mut xj).unwrap();
        let mut xe = MatrixN::zeros(4, 2);
        gauss_elimination(&mut a.clone(), &b, &mut xe).unwrap();

        assert_relative_eq!(xj, xe, epsilon = 1e-12);
        assert_relative_eq!(&a * &xj, b, epsilon = 1e-12);
    }

    #[test]
    fn singular() {
        let mut a = MatrixN::from_rows(&[[1.0, 2.0], [2.0, 4.0]]);
        let mut x = VectorN::zeros(2);
        let b = VectorN::from(vec![1.0, 1.0]);
        assert!(matches!(
            gauss_jordan(&mut a.clone(), &b, &mut x),
            Err(Error::Singular {
                routine: "gauss_jordan",
                step: 2
            })
        ));
        assert!(matches!(
            gauss_elimination(&mut a, &b, &mut x),
            Err(Error::Singular {
                routine: "gauss_elimination",
                step: 2
            })
        ));
    }

    #[test]
    fn zero_matrix_fails_first_step() {
        let mut a = MatrixN::zeros(3, 3);
        let mut x = VectorN::zeros(3);
        let err = gauss_jordan(&mut a, &VectorN::zeros(3), &mut x).unwrap_err();
        assert_eq!(err.info(), 1);
    }

    #[test]
    fn inverse_of_dynamic_matrix() {
        let a = MatrixN::from_rows(&[[1.0, 2.0, 0.0], [0.0, 1.0, 0.0], [2.0, 0.0, 1.0]]);
        let inv = inverse(&a).unwrap();
        assert_relative_eq!(&a * &inv, MatrixN::identity(3), epsilon = 1e-12);
        assert_relative_eq!(&inv * &a, MatrixN::identity(3), epsilon = 1e-12);
    }

    #[test]
    #[should_panic(expected = "must be square")]
    fn non_square() {
        let mut a = MatrixN::zeros(2, 3);
        let mut x = VectorN::zeros(2);
        let _ = gauss_jordan(&mut a, &VectorN::zeros(2), &mut x);
    }
}
