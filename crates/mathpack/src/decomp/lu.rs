use mathpack_linalg::{access, Dense, MatrixN};

use crate::{native, Error, Result};

use super::{from_col_major, leading_dim, to_col_major};

/// LU decomposition with partial pivoting, `P·A = L·U`.
#[derive(Debug, Clone)]
pub struct LuDecomposition {
    lu: MatrixN,
    pivots: Vec<usize>,
    parity: f64,
}

/// Runs `dgetrf` on a row-major matrix, returning the packed factors, the 0-based pivots and
/// the raw status code.
fn factor(a: &MatrixN) -> (MatrixN, Vec<usize>, i32) {
    let (m, n) = (a.rows(), a.cols());
    let lda = leading_dim(m);
    let mut buf = to_col_major(a);
    let mut ipiv = vec![0; m.min(n)];
    let info = native::dgetrf(m, n, &mut buf, lda, &mut ipiv);
    let pivots = ipiv.iter().map(|&p| (p.max(1) - 1) as usize).collect();
    (from_col_major(m, n, &buf, lda), pivots, info)
}

impl LuDecomposition {
    /// Factors the `m`×`n` matrix `a`.
    ///
    /// Returns [`Error::Singular`] if a diagonal element of `U` is exactly zero.
    pub fn new(a: &MatrixN) -> Result<Self> {
        log::trace!("LU decomposition of a {}x{} matrix", a.rows(), a.cols());
        let (lu, pivots, info) = factor(a);
        Error::check("dgetrf", info, |step| Error::Singular {
            routine: "dgetrf",
            step,
        })?;

        let swaps = pivots.iter().enumerate().filter(|&(i, &p)| i != p).count();
        let parity = if swaps % 2 == 0 { 1.0 } else { -1.0 };
        Ok(Self { lu, pivots, parity })
    }

    /// `L` strictly below the diagonal and `U` on and above it, in one matrix.
    pub fn packed(&self) -> &MatrixN {
        &self.lu
    }

    /// Row `i` was interchanged with row `pivots()[i]`, in order of increasing `i`.
    pub fn pivots(&self) -> &[usize] {
        &self.pivots
    }

    /// `1.0` for an even number of row interchanges, `-1.0` for an odd one.
    pub fn parity(&self) -> f64 {
        self.parity
    }

    /// The unit lower triangular factor (m×k).
    pub fn l(&self) -> MatrixN {
        let (m, n) = (self.lu.rows(), self.lu.cols());
        MatrixN::from_fn(m, m.min(n), |r, c| match r.cmp(&c) {
            std::cmp::Ordering::Greater => self.lu[(r, c)],
            std::cmp::Ordering::Equal => 1.0,
            std::cmp::Ordering::Less => 0.0,
        })
    }

    /// The upper triangular factor (k×n).
    pub fn u(&self) -> MatrixN {
        let (m, n) = (self.lu.rows(), self.lu.cols());
        MatrixN::from_fn(m.min(n), n, |r, c| if r <= c { self.lu[(r, c)] } else { 0.0 })
    }

    /// The permutation matrix `P` (m×m).
    pub fn permutation(&self) -> MatrixN {
        let mut p = MatrixN::identity(self.lu.rows());
        for (i, &j) in self.pivots.iter().enumerate() {
            access::swap_rows(&mut p, i, j);
        }
        p
    }

    /// # Panics
    ///
    /// Panics if the factored matrix is not square.
    pub fn determinant(&self) -> f64 {
        self.assert_square();
        (0..self.lu.rows()).fold(self.parity, |det, i| det * self.lu[(i, i)])
    }

    /// Solves `A·X = B` for every column of `b`.
    ///
    /// # Panics
    ///
    /// Panics if the factored matrix is not square or `b` has a different number of rows.
    pub fn solve<B: Dense + ?Sized>(&self, b: &B) -> MatrixN {
        self.assert_square();
        let n = self.lu.rows();
        assert_eq!(
            b.rows(),
            n,
            "right-hand side has {} rows, expected {n}",
            b.rows()
        );

        let mut x = MatrixN::from_fn(n, b.cols(), |r, c| b.at(r, c));
        for (i, &j) in self.pivots.iter().enumerate() {
            access::swap_rows(&mut x, i, j);
        }
        for c in 0..x.cols() {
            for i in 0..n {
                let mut sum = x[(i, c)];
                for j in 0..i {
                    sum -= self.lu[(i, j)] * x[(j, c)];
                }
                x[(i, c)] = sum;
            }
            for i in (0..n).rev() {
                let mut sum = x[(i, c)];
                for j in i + 1..n {
                    sum -= self.lu[(i, j)] * x[(j, c)];
                }
                x[(i, c)] = sum / self.lu[(i, i)];
            }
        }
        x
    }

    /// # Panics
    ///
    /// Panics if the factored matrix is not square.
    pub fn inverse(&self) -> MatrixN {
        self.solve(&MatrixN::identity(self.lu.rows()))
    }

    fn assert_square(&self) {
        assert!(
            self.lu.is_square(),
            "operation requires a square matrix, got {}x{}",
            self.lu.rows(),
            self.lu.cols()
        );
    }
}

/// Computes the determinant of the square matrix `a` from its LU decomposition.
///
/// A singular matrix has determinant `0.0`.
///
/// # Panics
///
/// Panics if `a` is not square.
///
/// # Examples
///
/// ```
/// # use mathpack::linalg::MatrixN;
/// let a = MatrixN::from_rows(&[[0.0, 2.0], [3.0, 1.0]]);
/// assert_eq!(mathpack::det(&a), -6.0);
/// ```
pub fn det(a: &MatrixN) -> f64 {
    assert!(
        a.is_square(),
        "determinant of a non-square {}x{} matrix",
        a.rows(),
        a.cols()
    );
    let (lu, pivots, info) = factor(a);
    if info != 0 {
        return 0.0;
    }
    let swaps = pivots.iter().enumerate().filter(|&(i, &p)| i != p).count();
    let sign = if swaps % 2 == 0 { 1.0 } else { -1.0 };
    (0..lu.rows()).fold(sign, |det, i| det * lu[(i, i)])
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use mathpack_linalg::{Mat3d, Mat4d, Matrix};

    use super::*;

    fn sample() -> MatrixN {
        MatrixN::from_rows(&[[2.0, 1.0, 1.0], [4.0, -6.0, 0.0], [-2.0, 7.0, 2.0]])
    }

    #[test]
    fn reconstructs_permuted_input() {
        let a = sample();
        let lu = LuDecomposition::new(&a).unwrap();
        assert_relative_eq!(&lu.permutation() * &a, &lu.l() * &lu.u(), epsilon = 1e-12);
        assert_eq!(lu.pivots()[0], 1);
    }

    #[test]
    fn parity_matches_cofactor_determinant() {
        let m3 = Mat3d::from_rows([[0.0, 1.0, 2.0], [3.0, 4.0, 5.0], [6.0, 7.0, 9.0]]);
        let lu = LuDecomposition::new(&MatrixN::from(m3)).unwrap();
        assert_relative_eq!(lu.determinant(), m3.determinant(), epsilon = 1e-12);

        let m4: Mat4d = Matrix::from_rows([
            [1.0, 0.0, 2.0, -1.0],
            [3.0, 0.0, 0.0, 5.0],
            [2.0, 1.0, 4.0, -3.0],
            [1.0, 0.0, 5.0, 0.0],
        ]);
        let lu = LuDecomposition::new(&MatrixN::from(m4)).unwrap();
        assert_relative_eq!(lu.determinant(), m4.determinant(), epsilon = 1e-10);
        assert_eq!(lu.determinant().signum(), 30f64.signum());
    }

    #[test]
    fn solve_and_inverse() {
        let a = sample();
        let lu = LuDecomposition::new(&a).unwrap();
        let b = MatrixN::from_rows(&[[5.0], [-2.0], [9.0]]);
        let x = lu.solve(&b);
        assert_relative_eq!(x, MatrixN::from_rows(&[[1.0], [1.0], [2.0]]), epsilon = 1e-12);
        assert_relative_eq!(&a * &lu.inverse(), MatrixN::identity(3), epsilon = 1e-12);
    }

    #[test]
    fn singular() {
        let a = MatrixN::from_rows(&[[1.0, 2.0], [2.0, 4.0]]);
        let err = LuDecomposition::new(&a).unwrap_err();
        assert_eq!(
            err,
            Error::Singular {
                routine: "dgetrf",
                step: 2
            }
        );
        assert_eq!(det(&a), 0.0);
    }

    #[test]
    fn rectangular() {
        let a = MatrixN::from_rows(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
        let lu = LuDecomposition::new(&a).unwrap();
        assert_eq!((lu.l().rows(), lu.l().cols()), (3, 2));
        assert_eq!((lu.u().rows(), lu.u().cols()), (2, 2));
        assert_relative_eq!(&lu.permutation() * &a, &lu.l() * &lu.u(), epsilon = 1e-12);
    }
}
