use mathpack_linalg::{MatrixN, VectorN};

use crate::{config::IterationSettings, native, Error, Result};

use super::{from_col_major, leading_dim, to_col_major, Mode};

/// Singular value decomposition `A = U·diag(S)·Vᵀ`.
///
/// For an m×n input and `k = min(m, n)`, there are `k` singular values, sorted in non-increasing
/// order. [`Mode::Economy`] produces an m×k `U` and an n×k `V`; [`Mode::Full`] produces square
/// `U` (m×m) and `V` (n×n).
#[derive(Debug, Clone)]
pub struct Svd {
    u: MatrixN,
    s: VectorN,
    v: MatrixN,
}

impl Svd {
    /// Decomposes `a` using the [`IterationSettings`] from the environment.
    pub fn new(a: &MatrixN, mode: Mode) -> Result<Self> {
        Self::with_settings(a, mode, IterationSettings::default())
    }

    pub fn with_settings(a: &MatrixN, mode: Mode, settings: IterationSettings) -> Result<Self> {
        let (ucols, k, vcols) = shape(a, mode);
        let mut svd = Self {
            u: MatrixN::zeros(a.rows(), ucols),
            s: VectorN::zeros(k),
            v: MatrixN::zeros(a.cols(), vcols),
        };
        svd_into_with(a, &mut svd.u, &mut svd.s, &mut svd.v, mode, settings)?;
        Ok(svd)
    }

    /// The left singular vectors, as columns.
    pub fn u(&self) -> &MatrixN {
        &self.u
    }

    pub fn singular_values(&self) -> &VectorN {
        &self.s
    }

    /// The right singular vectors, as columns.
    pub fn v(&self) -> &MatrixN {
        &self.v
    }

    /// Number of singular values larger than `tolerance`.
    pub fn rank(&self, tolerance: f64) -> usize {
        self.s.iter().filter(|&&s| s > tolerance).count()
    }

    /// Returns `(U, S, V)`.
    pub fn into_parts(self) -> (MatrixN, VectorN, MatrixN) {
        (self.u, self.s, self.v)
    }
}

/// Columns of `U`, number of singular values, and columns of `V`.
fn shape(a: &MatrixN, mode: Mode) -> (usize, usize, usize) {
    let (m, n) = (a.rows(), a.cols());
    let k = m.min(n);
    match mode {
        Mode::Economy => (k, k, k),
        Mode::Full => (m, k, n),
    }
}

/// Computes the SVD of `a` into caller-provided containers.
///
/// `s` must hold exactly `min(m, n)` elements, otherwise [`Error::ShapeMismatch`] is returned
/// and nothing is written.
///
/// # Panics
///
/// Panics if `u` or `v` do not have the shape documented on [`Svd`] for `mode`.
pub fn svd_into(
    a: &MatrixN,
    u: &mut MatrixN,
    s: &mut VectorN,
    v: &mut MatrixN,
    mode: Mode,
) -> Result<()> {
    svd_into_with(a, u, s, v, mode, IterationSettings::default())
}

fn svd_into_with(
    a: &MatrixN,
    u: &mut MatrixN,
    s: &mut VectorN,
    v: &mut MatrixN,
    mode: Mode,
    settings: IterationSettings,
) -> Result<()> {
    let (m, n) = (a.rows(), a.cols());
    let (ucols, k, vcols) = shape(a, mode);
    log::trace!("SVD of a {m}x{n} matrix ({mode:?}, {settings:?})");

    if s.size() != k {
        return Err(Error::ShapeMismatch {
            expected: k,
            got: s.size(),
        }
        .logged());
    }
    assert!(
        u.rows() == m && u.cols() == ucols,
        "U must be {m}x{ucols}, got {}x{}",
        u.rows(),
        u.cols()
    );
    assert!(
        v.rows() == n && v.cols() == vcols,
        "V must be {n}x{vcols}, got {}x{}",
        v.rows(),
        v.cols()
    );

    let (lda, ldu, ldvt) = (leading_dim(m), leading_dim(m), leading_dim(vcols));
    let buf = to_col_major(a);
    let mut u_buf = vec![0.0; ldu * ucols];
    let mut vt_buf = vec![0.0; ldvt * n];
    let info = native::dgesvd(
        mode == Mode::Full,
        m,
        n,
        &buf,
        lda,
        s.as_mut_slice(),
        &mut u_buf,
        ldu,
        &mut vt_buf,
        ldvt,
        settings,
    );
    Error::check("dgesvd", info, |_| Error::NoConvergence { routine: "dgesvd" })?;

    *u = from_col_major(m, ucols, &u_buf, ldu);
    // `vt_buf` holds Vᵀ, so V(r, c) = Vᵀ(c, r).
    *v = MatrixN::from_fn(n, vcols, |r, c| vt_buf[c + r * ldvt]);
    Ok(())
}
