//! The shared matrix-multiply kernel.

use crate::{Dense, DenseMut};

/// Computes `c = a · b` for `a` (L×M), `b` (M×N) and `c` (L×N).
///
/// Every operand is row-major; vectors act as single-column matrices. Each output element is
/// accumulated in a local before being stored, so `c` is only written, never read.
///
/// # Panics
///
/// Panics if the operand shapes are incompatible.
///
/// # Examples
///
/// ```
/// # use mathpack_linalg::*;
/// let a = MatrixN::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
/// let x = vec2(1.0, -1.0);
/// let mut y = Vec2d::ZERO;
/// kernel::mat_mul(&a, &x, &mut y);
/// assert_eq!(y, vec2(-1.0, -1.0));
/// ```
pub fn mat_mul<A, B, C>(a: &A, b: &B, c: &mut C)
where
    A: Dense + ?Sized,
    B: Dense + ?Sized,
    C: DenseMut + ?Sized,
{
    let (l, m, n) = (a.rows(), a.cols(), b.cols());
    assert!(
        b.rows() == m && c.rows() == l && c.cols() == n,
        "cannot multiply {}x{} and {}x{} operands into {}x{}",
        l,
        m,
        b.rows(),
        n,
        c.rows(),
        c.cols(),
    );

    let (a, b) = (a.elems(), b.elems());
    let c = c.elems_mut();
    for i in 0..l {
        let a_row = &a[i * m..(i + 1) * m];
        for j in 0..n {
            let mut sum = 0.0;
            for (k, a_ik) in a_row.iter().enumerate() {
                sum += a_ik * b[k * n + j];
            }
            c[i * n + j] = sum;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Mat3d, Matrix, MatrixN, VectorN};

    use super::*;

    #[test]
    fn mixed_operands() {
        let a = Matrix::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let b = MatrixN::from_rows(&[[1.0], [0.0], [-1.0]]);
        let mut c = VectorN::zeros(2);
        mat_mul(&a, &b, &mut c);
        assert_eq!(c, [-2.0, -2.0]);
    }

    #[test]
    fn identity_is_neutral() {
        let a = Matrix::from_rows([[0.5, -1.0, 2.0], [3.0, 0.0, 1.0], [1.0, 1.0, 1.0]]);
        let mut c = Mat3d::ZERO;
        mat_mul(&a, &Mat3d::identity(), &mut c);
        assert_eq!(c, a);
    }

    #[test]
    #[should_panic(expected = "cannot multiply")]
    fn wrong_output_shape() {
        let a = MatrixN::zeros(2, 2);
        let mut c = MatrixN::zeros(3, 2);
        mat_mul(&a, &a, &mut c);
    }
}
