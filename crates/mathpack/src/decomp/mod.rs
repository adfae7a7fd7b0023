//! Row-major matrix decompositions on top of [`native`][crate::native].
//!
//! Every decomposition copies its input into column-major order, calls the matching native
//! routine, translates the status code into a [`Result`][crate::Result], and copies the factors
//! back into row-major [`MatrixN`]s.

mod cholesky;
mod eigen;
mod lu;
mod qr;
mod rq;
mod svd;

pub use cholesky::*;
pub use eigen::*;
pub use lu::*;
pub use qr::*;
pub use rq::*;
pub use svd::*;

use mathpack_linalg::MatrixN;

/// How many orthogonal vectors a decomposition produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Only the first `min(rows, cols)` vectors.
    #[default]
    Economy,
    /// A complete orthonormal basis.
    Full,
}

/// Leading dimension used for a column-major copy of a matrix with `rows` rows.
fn leading_dim(rows: usize) -> usize {
    rows.max(1)
}

/// Copies `a` into column-major order with leading dimension `a.rows()`.
fn to_col_major(a: &MatrixN) -> Vec<f64> {
    a.transpose().into_vec()
}

fn from_col_major(rows: usize, cols: usize, data: &[f64], ld: usize) -> MatrixN {
    MatrixN::from_fn(rows, cols, |r, c| data[r + c * ld])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_round_trip() {
        let a = MatrixN::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let col_major = to_col_major(&a);
        assert_eq!(col_major, [1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
        assert_eq!(from_col_major(2, 3, &col_major, 2), a);
    }
}
