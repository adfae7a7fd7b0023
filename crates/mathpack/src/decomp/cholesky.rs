use mathpack_linalg::{Dense, MatrixN};

use crate::{native, Error, Result};

use super::{from_col_major, leading_dim, to_col_major};

/// Cholesky decomposition `A = Uᵀ·U` of a symmetric positive definite matrix.
#[derive(Debug, Clone)]
pub struct CholeskyDecomposition {
    u: MatrixN,
}

impl CholeskyDecomposition {
    /// Factors the symmetric matrix `a`. Only its upper triangle is read.
    ///
    /// Returns [`Error::NotPositiveDefinite`] with the order of the first leading minor that is
    /// not positive definite.
    ///
    /// # Panics
    ///
    /// Panics if `a` is not square.
    pub fn new(a: &MatrixN) -> Result<Self> {
        assert!(
            a.is_square(),
            "Cholesky decomposition of a non-square {}x{} matrix",
            a.rows(),
            a.cols()
        );
        let n = a.rows();
        log::trace!("Cholesky decomposition of a {n}x{n} matrix");

        let lda = leading_dim(n);
        let mut buf = to_col_major(a);
        let info = native::dpotrf(n, &mut buf, lda);
        Error::check("dpotrf", info, |order| Error::NotPositiveDefinite { order })?;

        Ok(Self {
            u: from_col_major(n, n, &buf, lda),
        })
    }

    /// The upper triangular factor.
    pub fn u(&self) -> &MatrixN {
        &self.u
    }

    pub fn into_u(self) -> MatrixN {
        self.u
    }

    /// Solves `A·X = B` for every column of `b`.
    ///
    /// # Panics
    ///
    /// Panics if `b` has a different number of rows than the factored matrix.
    pub fn solve<B: Dense + ?Sized>(&self, b: &B) -> MatrixN {
        let n = self.u.rows();
        assert_eq!(
            b.rows(),
            n,
            "right-hand side has {} rows, expected {n}",
            b.rows()
        );

        let u = &self.u;
        let mut x = MatrixN::from_fn(n, b.cols(), |r, c| b.at(r, c));
        for c in 0..x.cols() {
            // Uᵀ·y = b
            for i in 0..n {
                let mut sum = x[(i, c)];
                for k in 0..i {
                    sum -= u[(k, i)] * x[(k, c)];
                }
                x[(i, c)] = sum / u[(i, i)];
            }
            // U·x = y
            for i in (0..n).rev() {
                let mut sum = x[(i, c)];
                for k in i + 1..n {
                    sum -= u[(i, k)] * x[(k, c)];
                }
                x[(i, c)] = sum / u[(i, i)];
            }
        }
        x
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use mathpack_linalg::vec3;

    use super::*;

    fn spd() -> MatrixN {
        MatrixN::from_rows(&[[4.0, 12.0, -16.0], [12.0, 37.0, -43.0], [-16.0, -43.0, 98.0]])
    }

    #[test]
    fn known_factor() {
        let chol = CholeskyDecomposition::new(&spd()).unwrap();
        let expected =
            MatrixN::from_rows(&[[2.0, 6.0, -8.0], [0.0, 1.0, 5.0], [0.0, 0.0, 3.0]]);
        assert_relative_eq!(chol.u().clone(), expected, epsilon = 1e-12);
        assert_relative_eq!(&chol.u().transpose() * chol.u(), spd(), epsilon = 1e-12);
    }

    #[test]
    fn solve() {
        let chol = CholeskyDecomposition::new(&spd()).unwrap();
        let x = chol.solve(&vec3(1.0, 2.0, 3.0));
        let b = &spd() * &x;
        assert_relative_eq!(b, MatrixN::from_rows(&[[1.0], [2.0], [3.0]]), epsilon = 1e-10);
    }

    #[test]
    fn not_positive_definite() {
        let a = MatrixN::from_rows(&[[1.0, 2.0], [2.0, 1.0]]);
        let err = CholeskyDecomposition::new(&a).unwrap_err();
        assert_eq!(err, Error::NotPositiveDefinite { order: 2 });
        assert!(err.info() > 0);
    }
}
