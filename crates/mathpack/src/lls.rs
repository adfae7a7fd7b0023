use mathpack_linalg::{kernel, Dense, DenseMut, MatrixN};

use crate::{gauss_jordan, Result};

/// Solves the over-determined system `D·x ≈ b` in the least-squares sense.
///
/// The normal equations `(Dᵀ·D)·x = Dᵀ·b` are formed and handed to [`gauss_jordan`], so an
/// ill-conditioned `D` loses about twice as many digits as a QR-based solver would, and a
/// rank-deficient `D` is reported as [`Error::Singular`][crate::Error::Singular].
///
/// `b` and `x` may have several columns, one per right-hand side.
///
/// # Panics
///
/// Panics if `b` does not have `D.rows()` rows, or `x` is not `D.cols()`×`b.cols()`.
///
/// # Examples
///
/// Fitting a line `y = c0 + c1·t`:
///
/// ```
/// use mathpack::linalg::{MatrixN, VectorN, Vec2d};
///
/// let t = [0.0, 1.0, 2.0, 3.0];
/// let y = VectorN::from(vec![1.0, 3.1, 4.9, 7.0]);
/// let d = MatrixN::from_fn(4, 2, |r, c| if c == 0 { 1.0 } else { t[r] });
/// let mut coeffs = Vec2d::ZERO;
/// mathpack::lls(&d, &y, &mut coeffs)?;
/// assert!((coeffs.y - 1.98).abs() < 1e-9);
/// # Ok::<(), mathpack::Error>(())
/// ```
pub fn lls<D, B, X>(d: &D, b: &B, x: &mut X) -> Result<()>
where
    D: Dense + ?Sized,
    B: Dense + ?Sized,
    X: DenseMut + ?Sized,
{
    let (m, n) = (d.rows(), d.cols());
    assert_eq!(
        b.rows(),
        m,
        "right-hand side has {} rows for {m} equations",
        b.rows()
    );
    log::trace!("lls: {m} equations, {n} unknowns");

    let dt = MatrixN::from_fn(n, m, |r, c| d.at(c, r));
    let mut dtd = MatrixN::zeros(n, n);
    kernel::mat_mul(&dt, d, &mut dtd);
    let mut dtb = MatrixN::zeros(n, b.cols());
    kernel::mat_mul(&dt, b, &mut dtb);

    gauss_jordan(&mut dtd, &dtb, x)
}
