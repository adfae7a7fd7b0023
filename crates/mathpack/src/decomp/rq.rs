use mathpack_linalg::MatrixN;

use crate::{native, Error, Result};

use super::{from_col_major, leading_dim, to_col_major};

/// RQ decomposition `A = R·Q`.
///
/// For an m×n input and `k = min(m, n)`, `R` is m×k and upper trapezoidal, and `Q` is k×n with
/// orthonormal rows.
#[derive(Debug, Clone)]
pub struct RqDecomposition {
    r: MatrixN,
    q: MatrixN,
}

impl RqDecomposition {
    pub fn new(a: &MatrixN) -> Result<Self> {
        let (m, n) = (a.rows(), a.cols());
        let k = m.min(n);
        log::trace!("RQ decomposition of a {m}x{n} matrix");

        let (lda, ldq) = (leading_dim(m), leading_dim(k));
        let mut buf = to_col_major(a);
        let mut q = vec![0.0; ldq * n];
        let info = native::dgerqf(m, n, &mut buf, lda, &mut q, ldq);
        Error::check_args("dgerqf", info)?;

        Ok(Self {
            r: from_col_major(m, k, &buf, lda),
            q: from_col_major(k, n, &q, ldq),
        })
    }

    pub fn r(&self) -> &MatrixN {
        &self.r
    }

    pub fn q(&self) -> &MatrixN {
        &self.q
    }

    /// Returns `(R, Q)`.
    pub fn into_parts(self) -> (MatrixN, MatrixN) {
        (self.r, self.q)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn camera_like() {
        // A 3x4 projection matrix, the usual customer of RQ.
        let a = MatrixN::from_rows(&[
            [800.0, 0.0, 320.0, 10.0],
            [0.0, 780.0, 240.0, -4.0],
            [0.0, 0.1, 1.0, 2.0],
        ]);
        let (r, q) = RqDecomposition::new(&a).unwrap().into_parts();
        assert_eq!((r.rows(), r.cols()), (3, 3));
        assert_eq!((q.rows(), q.cols()), (3, 4));
        for row in 0..3 {
            for col in 0..row {
                assert_eq!(r[(row, col)], 0.0);
            }
        }
        assert_relative_eq!(&r * &q, a, epsilon = 1e-9);
        assert_relative_eq!(&q * &q.transpose(), MatrixN::identity(3), epsilon = 1e-12);
    }

    #[test]
    fn tall() {
        let a = MatrixN::from_rows(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
        let rq = RqDecomposition::new(&a).unwrap();
        assert_eq!((rq.r().rows(), rq.r().cols()), (3, 2));
        assert_eq!(rq.r()[(2, 0)], 0.0);
        assert_relative_eq!(rq.r() * rq.q(), a, epsilon = 1e-12);
    }
}
