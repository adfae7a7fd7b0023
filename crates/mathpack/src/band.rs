use mathpack_linalg::{Dense, DenseMut};

use crate::{Error, Result};

/// Solves a tridiagonal system in linear time, overwriting `b` with the solution.
///
/// `a` holds the three bands of the n×n system row by row: `a(i, 0)` is the sub-diagonal,
/// `a(i, 1)` the diagonal and `a(i, 2)` the super-diagonal element of row `i`. `a(0, 0)` and
/// `a(n-1, 2)` are ignored.
///
/// No pivoting is done, so a zero pivot is reported as [`Error::Singular`] even when the system
/// is solvable. Diagonally dominant systems never hit one.
///
/// # Panics
///
/// Panics if `a` does not have 3 columns or `b` does not have one element per row of `a`.
///
/// # Examples
///
/// ```
/// use mathpack::linalg::{MatrixN, VectorN};
///
/// let bands = MatrixN::from_fn(4, 3, |_, c| [-1.0, 2.0, -1.0][c]);
/// let mut b = VectorN::from(vec![1.0, 0.0, 0.0, 1.0]);
/// mathpack::tridiagonal(&bands, &mut b)?;
/// for x in &b {
///     assert!((x - 1.0).abs() < 1e-12);
/// }
/// # Ok::<(), mathpack::Error>(())
/// ```
pub fn tridiagonal<A, B>(a: &A, b: &mut B) -> Result<()>
where
    A: Dense + ?Sized,
    B: DenseMut + ?Sized,
{
    let n = a.rows();
    assert_eq!(a.cols(), 3, "band matrix must have 3 columns, got {}", a.cols());
    assert_eq!(
        b.size(),
        n,
        "right-hand side has {} elements for {n} equations",
        b.size()
    );
    log::trace!("tridiagonal: {n} equations");
    if n == 0 {
        return Ok(());
    }

    let singular = |step| {
        Error::Singular {
            routine: "tridiagonal",
            step,
        }
        .logged()
    };

    let x = b.elems_mut();
    let mut pivot = a.at(0, 1);
    if pivot == 0.0 {
        return Err(singular(1));
    }
    // Scaled super-diagonal of the eliminated system.
    let mut gamma = vec![0.0; n];
    x[0] /= pivot;
    for i in 1..n {
        gamma[i] = a.at(i - 1, 2) / pivot;
        pivot = a.at(i, 1) - a.at(i, 0) * gamma[i];
        if pivot == 0.0 {
            return Err(singular(i + 1));
        }
        x[i] = (x[i] - a.at(i, 0) * x[i - 1]) / pivot;
    }
    for i in (0..n - 1).rev() {
        x[i] -= gamma[i + 1] * x[i + 1];
    }
    Ok(())
}
