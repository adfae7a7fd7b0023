//! Row, column and diagonal copies between any matrix and any vector.
//!
//! These work across all [`Dense`] types, so a row of a [`MatrixN`][crate::MatrixN] can be
//! pulled into a [`Vec3d`][crate::Vec3d] and a [`VectorN`][crate::VectorN] written into the
//! diagonal of a [`Mat4d`][crate::Mat4d].
//!
//! The `get_*` functions fill the whole target: elements past the end of the source line are
//! zeroed. The `set_*` functions write only as many elements as fit into the target line.

use crate::{Dense, DenseMut};

/// Copies row `row` of `a` into `out`.
///
/// # Examples
///
/// ```
/// # use mathpack_linalg::*;
/// let m = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
/// let mut v = Vec3d::splat(9.0);
/// access::get_row(&m, 1, &mut v);
/// assert_eq!(v, vec3(3.0, 4.0, 0.0));
/// ```
pub fn get_row<A: Dense + ?Sized, V: DenseMut + ?Sized>(a: &A, row: usize, out: &mut V) {
    check_index("row", row, a.rows());
    let cols = a.cols();
    for (i, elem) in out.elems_mut().iter_mut().enumerate() {
        *elem = if i < cols { a.at(row, i) } else { 0.0 };
    }
}

/// Copies `u` into row `row` of `a`.
pub fn set_row<A: DenseMut + ?Sized, U: Dense + ?Sized>(a: &mut A, row: usize, u: &U) {
    check_index("row", row, a.rows());
    let n = u.size().min(a.cols());
    for i in 0..n {
        *a.at_mut(row, i) = u.at_linear(i);
    }
}

/// Copies column `col` of `a` into `out`.
pub fn get_col<A: Dense + ?Sized, V: DenseMut + ?Sized>(a: &A, col: usize, out: &mut V) {
    check_index("column", col, a.cols());
    let rows = a.rows();
    for (i, elem) in out.elems_mut().iter_mut().enumerate() {
        *elem = if i < rows { a.at(i, col) } else { 0.0 };
    }
}

/// Copies `u` into column `col` of `a`.
pub fn set_col<A: DenseMut + ?Sized, U: Dense + ?Sized>(a: &mut A, col: usize, u: &U) {
    check_index("column", col, a.cols());
    let n = u.size().min(a.rows());
    for i in 0..n {
        *a.at_mut(i, col) = u.at_linear(i);
    }
}

/// Position of the `k`-th element of the diagonal at `offset`, and the diagonal's length.
///
/// Offset `0` is the main diagonal; positive offsets move toward the last column, negative
/// offsets toward the last row.
fn diagonal(rows: usize, cols: usize, offset: isize) -> (usize, usize, usize) {
    let d = offset.unsigned_abs();
    let in_range = if offset >= 0 { d < cols } else { d < rows };
    assert!(
        in_range,
        "diagonal {offset} does not exist in a {rows}x{cols} matrix"
    );
    if offset >= 0 {
        (0, d, rows.min(cols - d))
    } else {
        (d, 0, (rows - d).min(cols))
    }
}

/// Copies the diagonal at `offset` of `a` into `out`.
///
/// # Panics
///
/// Panics if `a` has no diagonal at `offset`.
///
/// # Examples
///
/// ```
/// # use mathpack_linalg::*;
/// let m = MatrixN::from_fn(3, 4, |r, c| (r * 4 + c) as f64);
/// let mut v = VectorN::zeros(3);
/// access::get_diag(&m, 1, &mut v);
/// assert_eq!(v, [1.0, 6.0, 11.0]);
/// access::get_diag(&m, -2, &mut v);
/// assert_eq!(v, [8.0, 0.0, 0.0]);
/// ```
pub fn get_diag<A: Dense + ?Sized, V: DenseMut + ?Sized>(a: &A, offset: isize, out: &mut V) {
    let (row0, col0, len) = diagonal(a.rows(), a.cols(), offset);
    for (k, elem) in out.elems_mut().iter_mut().enumerate() {
        *elem = if k < len { a.at(row0 + k, col0 + k) } else { 0.0 };
    }
}

/// Copies `u` into the diagonal at `offset` of `a`.
///
/// # Panics
///
/// Panics if `a` has no diagonal at `offset`.
pub fn set_diag<A: DenseMut + ?Sized, U: Dense + ?Sized>(a: &mut A, offset: isize, u: &U) {
    let (row0, col0, len) = diagonal(a.rows(), a.cols(), offset);
    for k in 0..len.min(u.size()) {
        *a.at_mut(row0 + k, col0 + k) = u.at_linear(k);
    }
}

/// Exchanges rows `r1` and `r2` of `a`.
pub fn swap_rows<A: DenseMut + ?Sized>(a: &mut A, r1: usize, r2: usize) {
    check_index("row", r1, a.rows());
    check_index("row", r2, a.rows());
    if r1 == r2 {
        return;
    }
    let cols = a.cols();
    let elems = a.elems_mut();
    for c in 0..cols {
        elems.swap(r1 * cols + c, r2 * cols + c);
    }
}

/// Exchanges columns `c1` and `c2` of `a`.
pub fn swap_cols<A: DenseMut + ?Sized>(a: &mut A, c1: usize, c2: usize) {
    check_index("column", c1, a.cols());
    check_index("column", c2, a.cols());
    if c1 == c2 {
        return;
    }
    let cols = a.cols();
    let rows = a.rows();
    let elems = a.elems_mut();
    for r in 0..rows {
        elems.swap(r * cols + c1, r * cols + c2);
    }
}

fn check_index(what: &str, index: usize, len: usize) {
    assert!(index < len, "{what} {index} out of range for {len} {what}s");
}

#[cfg(test)]
mod tests {
    use crate::{vec2, vec4, Mat4d, Matrix, MatrixN, Vec2d, Vec4d, VectorN};

    use super::*;

    #[test]
    fn rows_and_columns() {
        let mut m = MatrixN::from_fn(3, 3, |r, c| (r * 3 + c) as f64);

        let mut v = Vec2d::ZERO;
        get_col(&m, 2, &mut v);
        assert_eq!(v, vec2(2.0, 5.0));

        set_row(&mut m, 0, &vec4(-1.0, -2.0, -3.0, -4.0));
        assert_eq!(m.row(0), &[-1.0, -2.0, -3.0]);

        set_col(&mut m, 1, &vec2(7.0, 7.0));
        assert_eq!(m.row(1), &[3.0, 7.0, 5.0]);
        assert_eq!(m[(2, 1)], 7.0);
    }

    #[test]
    fn diagonals() {
        let mut m = Mat4d::ZERO;
        set_diag(&mut m, 0, &vec4(1.0, 2.0, 3.0, 4.0));
        set_diag(&mut m, -3, &VectorN::from(vec![9.0, 9.0]));
        set_diag(&mut m, 2, &vec2(5.0, 6.0));

        let mut d = Vec4d::ZERO;
        get_diag(&m, 0, &mut d);
        assert_eq!(d, vec4(1.0, 2.0, 3.0, 4.0));
        assert_eq!(m[(3, 0)], 9.0);
        assert_eq!(m[(0, 2)], 5.0);
        assert_eq!(m[(1, 3)], 6.0);
    }

    #[test]
    #[should_panic(expected = "does not exist")]
    fn missing_diagonal() {
        let m = MatrixN::zeros(2, 3);
        let mut v = VectorN::zeros(1);
        get_diag(&m, -2, &mut v);
    }

    #[test]
    fn swapping() {
        let mut m = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        swap_rows(&mut m, 0, 1);
        assert_eq!(m, Matrix::from_rows([[3.0, 4.0], [1.0, 2.0]]));
        swap_cols(&mut m, 1, 0);
        assert_eq!(m, Matrix::from_rows([[4.0, 3.0], [2.0, 1.0]]));
        swap_cols(&mut m, 1, 1);
        assert_eq!(m, Matrix::from_rows([[4.0, 3.0], [2.0, 1.0]]));
    }
}
