//! LAPACK-style dense routines on column-major storage.
//!
//! Matrices are passed as column-major slices: element `(i, j)` of a matrix with leading
//! dimension `ld` lives at index `i + j * ld`. Every routine returns a status code in the LAPACK
//! convention:
//!
//! * `0` on success,
//! * `-i` if argument `i` (1-based) is invalid,
//! * a positive, routine-specific code on numerical failure.
//!
//! The factorizations themselves are computed by [`nalgebra`]. Each call copies its input into
//! freshly allocated `nalgebra` storage and copies the factors back out, so no scratch buffer
//! outlives a call.
//!
//! Most code should use the row-major wrappers such as [`LuDecomposition`] instead.
//!
//! [`LuDecomposition`]: crate::LuDecomposition

use nalgebra::{DMatrix, DVector};

use crate::config::IterationSettings;

/// Whether a slice of length `len` holds a `rows`×`cols` column-major matrix with leading
/// dimension `ld`.
fn holds(len: usize, rows: usize, cols: usize, ld: usize) -> bool {
    rows == 0 || cols == 0 || len >= ld * (cols - 1) + rows
}

fn load(rows: usize, cols: usize, a: &[f64], ld: usize) -> DMatrix<f64> {
    DMatrix::from_fn(rows, cols, |i, j| a[i + j * ld])
}

/// Loads the symmetric matrix whose upper triangle is stored in `a`.
fn load_upper(n: usize, a: &[f64], ld: usize) -> DMatrix<f64> {
    DMatrix::from_fn(n, n, |i, j| a[i.min(j) + i.max(j) * ld])
}

fn store(m: &DMatrix<f64>, a: &mut [f64], ld: usize) {
    for j in 0..m.ncols() {
        for i in 0..m.nrows() {
            a[i + j * ld] = m[(i, j)];
        }
    }
}

/// Extends the orthonormal columns of `basis` (m×k) to an orthonormal basis of the whole space.
///
/// The first `k` columns of the result are `basis` itself.
fn complete_basis(basis: &DMatrix<f64>) -> DMatrix<f64> {
    let (m, k) = basis.shape();
    let mut aug = DMatrix::zeros(m, k + m);
    aug.columns_mut(0, k).copy_from(basis);
    aug.columns_mut(k, m).fill_with_identity();
    let mut q = aug.qr().q();
    q.columns_mut(0, k).copy_from(basis);
    q
}

/// LU factorization with partial pivoting of the `m`×`n` matrix `a`.
///
/// On return, `a` holds `L` strictly below the diagonal (its unit diagonal is not stored) and `U`
/// on and above it, and row `i` was interchanged with row `ipiv[i]` (1-based) for
/// `i < min(m, n)`, so that `P·A = L·U`.
///
/// A positive status `i` means `U(i-1, i-1)` is exactly zero. The factorization is still
/// completed in that case.
pub fn dgetrf(m: usize, n: usize, a: &mut [f64], lda: usize, ipiv: &mut [i32]) -> i32 {
    if lda < m.max(1) {
        return -4;
    }
    if !holds(a.len(), m, n, lda) {
        return -3;
    }
    let k = m.min(n);
    if ipiv.len() < k {
        return -5;
    }
    log::trace!("dgetrf: {m}x{n}, lda={lda}");

    let lu = load(m, n, a, lda).lu();
    let (l, u) = (lu.l(), lu.u());

    // `order[i]` is the row of `A` that ends up in row `i` of `P·A`.
    let mut order = DVector::from_fn(m, |i, _| i);
    lu.p().permute_rows(&mut order);

    // Turn the permutation into a sequence of interchanges.
    let mut current: Vec<usize> = (0..m).collect();
    for i in 0..k {
        let j = (i..m).find(|&j| current[j] == order[i]).unwrap_or(i);
        current.swap(i, j);
        ipiv[i] = (j + 1) as i32;
    }

    for j in 0..n {
        for i in 0..m {
            a[i + j * lda] = if i > j { l[(i, j)] } else { u[(i, j)] };
        }
    }

    match (0..k).find(|&i| u[(i, i)] == 0.0) {
        Some(i) => (i + 1) as i32,
        None => 0,
    }
}

/// QR factorization of the `m`×`n` matrix `a`, forming `Q` explicitly.
///
/// With `full` set, `Q` is m×m and `R` is m×n. Otherwise `Q` is m×k and `R` is k×n, with
/// `k = min(m, n)`. `R` is written to the leading rows of `a`, and everything below it is
/// zeroed. `Q` is written to `q`.
pub fn dgeqrf(
    m: usize,
    n: usize,
    a: &mut [f64],
    lda: usize,
    q: &mut [f64],
    ldq: usize,
    full: bool,
) -> i32 {
    let qcols = if full { m } else { m.min(n) };
    if lda < m.max(1) {
        return -4;
    }
    if !holds(a.len(), m, n, lda) {
        return -3;
    }
    if ldq < m.max(1) {
        return -6;
    }
    if !holds(q.len(), m, qcols, ldq) {
        return -5;
    }
    log::trace!("dgeqrf: {m}x{n}, lda={lda}, full={full}");

    let a_mat = load(m, n, a, lda);
    let (q_mat, r_mat) = if full {
        // The QR factorization of `[A | I]` has a square `Q`, and the first `n` columns of its
        // `R` are `Qᵀ·A`.
        let mut aug = DMatrix::zeros(m, n + m);
        aug.columns_mut(0, n).copy_from(&a_mat);
        aug.columns_mut(n, m).fill_with_identity();
        let qr = aug.qr();
        (qr.q(), qr.r().columns(0, n).into_owned())
    } else {
        let qr = a_mat.qr();
        (qr.q(), qr.r())
    };

    for j in 0..n {
        for i in 0..m {
            a[i + j * lda] = if i < r_mat.nrows() {
                r_mat[(i, j)]
            } else {
                0.0
            };
        }
    }
    store(&q_mat, q, ldq);
    0
}

/// RQ factorization `A = R·Q` of the `m`×`n` matrix `a`, forming `Q` explicitly.
///
/// With `k = min(m, n)`, `R` is m×k and upper trapezoidal, `Q` is k×n with orthonormal rows.
/// `R` is written to the first `k` columns of `a` and the remaining columns are zeroed. `Q` is
/// written to `q`.
pub fn dgerqf(m: usize, n: usize, a: &mut [f64], lda: usize, q: &mut [f64], ldq: usize) -> i32 {
    let k = m.min(n);
    if lda < m.max(1) {
        return -4;
    }
    if !holds(a.len(), m, n, lda) {
        return -3;
    }
    if ldq < k.max(1) {
        return -6;
    }
    if !holds(q.len(), k, n, ldq) {
        return -5;
    }
    log::trace!("dgerqf: {m}x{n}, lda={lda}");

    // With `J` reversing the row order, `(J·A)ᵀ = Q̃·R̃` gives `A = (J·R̃ᵀ·J)·(J·Q̃ᵀ)`.
    let a_mat = load(m, n, a, lda);
    let b = DMatrix::from_fn(n, m, |i, j| a_mat[(m - 1 - j, i)]);
    let qr = b.qr();
    let (qt, rt) = (qr.q(), qr.r());

    for j in 0..n {
        for i in 0..m {
            a[i + j * lda] = if j < k {
                rt[(k - 1 - j, m - 1 - i)]
            } else {
                0.0
            };
        }
    }
    for j in 0..n {
        for i in 0..k {
            q[i + j * ldq] = qt[(j, k - 1 - i)];
        }
    }
    0
}

/// Cholesky factorization `A = Uᵀ·U` of the symmetric `n`×`n` matrix whose upper triangle is
/// stored in `a`.
///
/// On success, `U` replaces the upper triangle of `a` and the strict lower triangle is zeroed.
/// A positive status `i` means the leading minor of order `i` is not positive definite, and `a`
/// is left untouched.
pub fn dpotrf(n: usize, a: &mut [f64], lda: usize) -> i32 {
    if lda < n.max(1) {
        return -3;
    }
    if !holds(a.len(), n, n, lda) {
        return -2;
    }
    if n == 0 {
        return 0;
    }
    log::trace!("dpotrf: {n}x{n}, lda={lda}");

    let sym = load_upper(n, a, lda);
    match sym.clone().cholesky() {
        Some(chol) => {
            let l = chol.l();
            for j in 0..n {
                for i in 0..n {
                    a[i + j * lda] = if i <= j { l[(j, i)] } else { 0.0 };
                }
            }
            0
        }
        None => {
            // Every leading minor of a positive definite minor is positive definite, so the
            // smallest failing order can be bisected.
            let (mut lo, mut hi) = (1, n);
            while lo < hi {
                let mid = (lo + hi) / 2;
                let minor = sym.view((0, 0), (mid, mid)).into_owned();
                if minor.cholesky().is_some() {
                    lo = mid + 1;
                } else {
                    hi = mid;
                }
            }
            lo as i32
        }
    }
}

/// Singular value decomposition `A = U·Σ·Vᵀ` of the `m`×`n` matrix `a`.
///
/// With `k = min(m, n)`, the `k` singular values are written to `s` in non-increasing order.
/// With `full` set, `U` (m×m) is written to `u` and `Vᵀ` (n×n) to `vt`. Otherwise only the
/// leading `k` columns of `U` and rows of `Vᵀ` are produced. `a` is not modified.
///
/// A positive status means the iteration did not converge within
/// [`IterationSettings::max_iterations`].
#[allow(clippy::too_many_arguments)]
pub fn dgesvd(
    full: bool,
    m: usize,
    n: usize,
    a: &[f64],
    lda: usize,
    s: &mut [f64],
    u: &mut [f64],
    ldu: usize,
    vt: &mut [f64],
    ldvt: usize,
    settings: IterationSettings,
) -> i32 {
    let k = m.min(n);
    let (ucols, vtrows) = if full { (m, n) } else { (k, k) };
    if lda < m.max(1) {
        return -5;
    }
    if !holds(a.len(), m, n, lda) {
        return -4;
    }
    if s.len() < k {
        return -6;
    }
    if ldu < m.max(1) {
        return -8;
    }
    if !holds(u.len(), m, ucols, ldu) {
        return -7;
    }
    if ldvt < vtrows.max(1) {
        return -10;
    }
    if !holds(vt.len(), vtrows, n, ldvt) {
        return -9;
    }
    log::trace!("dgesvd: {m}x{n}, lda={lda}, full={full}");

    if k == 0 {
        store(&DMatrix::identity(m, ucols), u, ldu);
        store(&DMatrix::identity(vtrows, n), vt, ldvt);
        return 0;
    }

    let svd = match nalgebra::SVD::try_new(
        load(m, n, a, lda),
        true,
        true,
        settings.epsilon,
        settings.max_iterations,
    ) {
        Some(svd) => svd,
        None => return 1,
    };
    let (Some(mut u_thin), Some(v_t)) = (svd.u, svd.v_t) else {
        return 1;
    };
    let mut values = svd.singular_values;

    for i in 0..k {
        if values[i] < 0.0 {
            values[i] = -values[i];
            u_thin.column_mut(i).neg_mut();
        }
    }

    let mut order: Vec<usize> = (0..k).collect();
    order.sort_by(|&x, &y| values[y].total_cmp(&values[x]));
    for (i, &j) in order.iter().enumerate() {
        s[i] = values[j];
    }
    let u_sorted = DMatrix::from_fn(m, k, |i, j| u_thin[(i, order[j])]);
    let vt_sorted = DMatrix::from_fn(k, n, |i, j| v_t[(order[i], j)]);

    if full {
        store(&complete_basis(&u_sorted), u, ldu);
        store(&complete_basis(&vt_sorted.transpose()).transpose(), vt, ldvt);
    } else {
        store(&u_sorted, u, ldu);
        store(&vt_sorted, vt, ldvt);
    }
    0
}

/// Eigendecomposition of the symmetric `n`×`n` matrix whose upper triangle is stored in `a`.
///
/// The eigenvalues are written to `w` in ascending order, and the matching orthonormal
/// eigenvectors replace the columns of `a`.
///
/// A positive status means the iteration did not converge within
/// [`IterationSettings::max_iterations`]. `a` is left untouched in that case.
pub fn dsyev(n: usize, a: &mut [f64], lda: usize, w: &mut [f64], settings: IterationSettings) -> i32 {
    if lda < n.max(1) {
        return -3;
    }
    if !holds(a.len(), n, n, lda) {
        return -2;
    }
    if w.len() < n {
        return -4;
    }
    if n == 0 {
        return 0;
    }
    log::trace!("dsyev: {n}x{n}, lda={lda}");

    let Some(eigen) = nalgebra::SymmetricEigen::try_new(
        load_upper(n, a, lda),
        settings.epsilon,
        settings.max_iterations,
    ) else {
        return 1;
    };

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&x, &y| eigen.eigenvalues[x].total_cmp(&eigen.eigenvalues[y]));
    for (col, &j) in order.iter().enumerate() {
        w[col] = eigen.eigenvalues[j];
        for row in 0..n {
            a[row + col * lda] = eigen.eigenvectors[(row, j)];
        }
    }
    0
}
