use mathpack_linalg::MatrixN;

use crate::{native, Error, Result};

use super::{from_col_major, leading_dim, to_col_major, Mode};

/// QR decomposition `A = Q·R` with orthonormal columns in `Q` and an upper trapezoidal `R`.
///
/// For an m×n input and `k = min(m, n)`, [`Mode::Economy`] produces an m×k `Q` and a k×n `R`;
/// [`Mode::Full`] produces an m×m `Q` and an m×n `R`.
#[derive(Debug, Clone)]
pub struct QrDecomposition {
    q: MatrixN,
    r: MatrixN,
}

impl QrDecomposition {
    pub fn new(a: &MatrixN, mode: Mode) -> Result<Self> {
        let (m, n) = (a.rows(), a.cols());
        log::trace!("QR decomposition of a {m}x{n} matrix ({mode:?})");
        let (qcols, rrows) = match mode {
            Mode::Economy => (m.min(n), m.min(n)),
            Mode::Full => (m, m),
        };

        let (lda, ldq) = (leading_dim(m), leading_dim(m));
        let mut buf = to_col_major(a);
        let mut q = vec![0.0; ldq * qcols];
        let info = native::dgeqrf(m, n, &mut buf, lda, &mut q, ldq, mode == Mode::Full);
        Error::check_args("dgeqrf", info)?;

        Ok(Self {
            q: from_col_major(m, qcols, &q, ldq),
            r: from_col_major(rrows, n, &buf, lda),
        })
    }

    pub fn q(&self) -> &MatrixN {
        &self.q
    }

    pub fn r(&self) -> &MatrixN {
        &self.r
    }

    /// Returns `(Q, R)`.
    pub fn into_parts(self) -> (MatrixN, MatrixN) {
        (self.q, self.r)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn tall() -> MatrixN {
        MatrixN::from_rows(&[
            [12.0, -51.0, 4.0],
            [6.0, 167.0, -68.0],
            [-4.0, 24.0, -41.0],
            [1.0, 1.0, 1.0],
        ])
    }

    fn assert_upper(r: &MatrixN) {
        for row in 0..r.rows() {
            for col in 0..row.min(r.cols()) {
                assert_eq!(r[(row, col)], 0.0, "R({row}, {col}) is not zero");
            }
        }
    }

    #[test]
    fn economy() {
        let a = tall();
        let qr = QrDecomposition::new(&a, Mode::Economy).unwrap();
        assert_eq!((qr.q().rows(), qr.q().cols()), (4, 3));
        assert_eq!((qr.r().rows(), qr.r().cols()), (3, 3));
        assert_upper(qr.r());
        assert_relative_eq!(qr.q() * qr.r(), a, epsilon = 1e-10);
        assert_relative_eq!(
            &qr.q().transpose() * qr.q(),
            MatrixN::identity(3),
            epsilon = 1e-12
        );
    }

    #[test]
    fn full() {
        let a = tall();
        let (q, r) = QrDecomposition::new(&a, Mode::Full).unwrap().into_parts();
        assert_eq!((q.rows(), q.cols()), (4, 4));
        assert_eq!((r.rows(), r.cols()), (4, 3));
        assert_upper(&r);
        assert_relative_eq!(&q * &r, a, epsilon = 1e-10);
        assert_relative_eq!(&q.transpose() * &q, MatrixN::identity(4), epsilon = 1e-12);
    }

    #[test]
    fn wide() {
        let a = tall().transpose();
        let qr = QrDecomposition::new(&a, Mode::Economy).unwrap();
        assert_eq!((qr.q().rows(), qr.q().cols()), (3, 3));
        assert_eq!((qr.r().rows(), qr.r().cols()), (3, 4));
        assert_relative_eq!(qr.q() * qr.r(), a, epsilon = 1e-10);
    }
}
