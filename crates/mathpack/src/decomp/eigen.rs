use mathpack_linalg::{MatrixN, VectorN};

use crate::{config::IterationSettings, native, Error, Result};

use super::{from_col_major, leading_dim, to_col_major};

/// Eigendecomposition `A = V·diag(λ)·Vᵀ` of a real symmetric matrix.
#[derive(Debug, Clone)]
pub struct SymmetricEigen {
    values: VectorN,
    vectors: MatrixN,
}

impl SymmetricEigen {
    /// Decomposes the symmetric matrix `a` using the [`IterationSettings`] from the environment.
    /// Only the upper triangle of `a` is read.
    ///
    /// # Panics
    ///
    /// Panics if `a` is not square.
    pub fn new(a: &MatrixN) -> Result<Self> {
        Self::with_settings(a, IterationSettings::default())
    }

    pub fn with_settings(a: &MatrixN, settings: IterationSettings) -> Result<Self> {
        assert!(
            a.is_square(),
            "eigendecomposition of a non-square {}x{} matrix",
            a.rows(),
            a.cols()
        );
        let n = a.rows();
        log::trace!("eigendecomposition of a {n}x{n} matrix ({settings:?})");

        let lda = leading_dim(n);
        let mut buf = to_col_major(a);
        let mut values = VectorN::zeros(n);
        let info = native::dsyev(n, &mut buf, lda, values.as_mut_slice(), settings);
        Error::check("dsyev", info, |_| Error::NoConvergence { routine: "dsyev" })?;

        Ok(Self {
            values,
            vectors: from_col_major(n, n, &buf, lda),
        })
    }

    /// The eigenvalues in ascending order.
    pub fn eigenvalues(&self) -> &VectorN {
        &self.values
    }

    /// The unit eigenvectors as columns, in the order of [`eigenvalues`][Self::eigenvalues].
    pub fn eigenvectors(&self) -> &MatrixN {
        &self.vectors
    }

    /// Returns `(eigenvalues, eigenvectors)`.
    pub fn into_parts(self) -> (VectorN, MatrixN) {
        (self.values, self.vectors)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn eigenpairs() {
        let a = MatrixN::from_rows(&[[2.0, -1.0, 0.0], [-1.0, 2.0, -1.0], [0.0, -1.0, 2.0]]);
        let eigen = SymmetricEigen::new(&a).unwrap();
        let values = eigen.eigenvalues();
        let r2 = 2f64.sqrt();
        assert_relative_eq!(values[0], 2.0 - r2, epsilon = 1e-12);
        assert_relative_eq!(values[1], 2.0, epsilon = 1e-12);
        assert_relative_eq!(values[2], 2.0 + r2, epsilon = 1e-12);

        let v = eigen.eigenvectors();
        let av = &a * v;
        for col in 0..3 {
            for row in 0..3 {
                assert_relative_eq!(av[(row, col)], values[col] * v[(row, col)], epsilon = 1e-12);
            }
        }
        assert_relative_eq!(&v.transpose() * v, MatrixN::identity(3), epsilon = 1e-12);
    }

    #[test]
    fn iteration_limit() {
        let a = MatrixN::from_rows(&[[1.0, 0.5, 0.2], [0.5, 2.0, 0.3], [0.2, 0.3, 3.0]]);
        let settings = IterationSettings::default().with_max_iterations(1);
        let err = SymmetricEigen::with_settings(&a, settings).unwrap_err();
        assert_eq!(err, Error::NoConvergence { routine: "dsyev" });
    }
}
