use std::{
    fmt,
    ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign},
};

use crate::{kernel::mat_mul, render, Matrix, Vector, VectorN};

/// A heap-allocated, row-major matrix of `f64` whose shape is chosen at runtime.
///
/// The backing buffer can hold more elements than the current shape needs: [`MatrixN::reserve`]
/// grows the capacity without touching the shape, and [`MatrixN::resize`] only reallocates when
/// the new shape does not fit.
///
/// # Examples
///
/// ```
/// # use mathpack_linalg::*;
/// let a = MatrixN::from_row_slice(2, 2, &[
///     1.0, 2.0,
///     3.0, 4.0,
/// ]);
/// let b = MatrixN::identity(2);
/// assert_eq!(&a * &b, a);
/// assert_eq!(a[(1, 0)], 3.0);
/// assert_eq!(a[3], 4.0);
/// ```
#[derive(Clone, Default, PartialEq)]
pub struct MatrixN {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl MatrixN {
    /// Creates an empty 0×0 matrix.
    pub const fn new() -> Self {
        Self {
            rows: 0,
            cols: 0,
            data: Vec::new(),
        }
    }

    /// Creates a `rows`×`cols` matrix of zeroes.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Creates the `n`×`n` identity matrix.
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |row, col| if row == col { 1.0 } else { 0.0 })
    }

    /// Creates an empty 0×0 matrix able to hold `capacity` elements without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rows: 0,
            cols: 0,
            data: Vec::with_capacity(capacity),
        }
    }

    /// Creates a matrix by invoking `cb` with the row and column of each element.
    pub fn from_fn(rows: usize, cols: usize, mut cb: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                data.push(cb(row, col));
            }
        }
        Self { rows, cols, data }
    }

    /// Creates a matrix from its elements in row-major order.
    ///
    /// # Panics
    ///
    /// Panics if `elems.len()` is not `rows * cols`.
    pub fn from_row_slice(rows: usize, cols: usize, elems: &[f64]) -> Self {
        Self::from_vec(rows, cols, elems.to_vec())
    }

    /// Creates a matrix that takes ownership of its row-major elements.
    ///
    /// # Panics
    ///
    /// Panics if `data.len()` is not `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        assert_eq!(
            data.len(),
            rows * cols,
            "{} elements cannot form a {rows}x{cols} matrix",
            data.len(),
        );
        Self { rows, cols, data }
    }

    /// Creates a matrix from a slice of equally long rows.
    ///
    /// # Panics
    ///
    /// Panics if the rows differ in length.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Self {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            let row = row.as_ref();
            assert_eq!(row.len(), cols, "ragged rows");
            data.extend_from_slice(row);
        }
        Self {
            rows: rows.len(),
            cols,
            data,
        }
    }

    /// Creates a square matrix with `diag` on its diagonal.
    pub fn from_diagonal(diag: &[f64]) -> Self {
        let n = diag.len();
        Self::from_fn(n, n, |row, col| if row == col { diag[row] } else { 0.0 })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of elements, `rows * cols`.
    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Number of elements the buffer can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Returns the elements in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Returns row `row` as a slice.
    pub fn row(&self, row: usize) -> &[f64] {
        assert!(row < self.rows, "row {row} out of range for {} rows", self.rows);
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    pub fn row_mut(&mut self, row: usize) -> &mut [f64] {
        assert!(row < self.rows, "row {row} out of range for {} rows", self.rows);
        let cols = self.cols;
        &mut self.data[row * cols..(row + 1) * cols]
    }

    /// Sets every element to zero, keeping the shape.
    pub fn clear(&mut self) -> &mut Self {
        self.data.fill(0.0);
        self
    }

    /// Changes the shape to `rows`×`cols`. All elements are zero afterwards.
    ///
    /// The buffer is only reallocated if its capacity is too small.
    pub fn resize(&mut self, rows: usize, cols: usize) -> &mut Self {
        self.data.clear();
        self.data.resize(rows * cols, 0.0);
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Reserves room for at least `additional` more elements without changing the shape.
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Overwrites `self` with the identity matrix of the current shape.
    pub fn set_identity(&mut self) -> &mut Self {
        let cols = self.cols;
        for (i, elem) in self.data.iter_mut().enumerate() {
            *elem = if i / cols == i % cols { 1.0 } else { 0.0 };
        }
        self
    }

    pub fn transpose(&self) -> MatrixN {
        MatrixN::from_fn(self.cols, self.rows, |row, col| self[(col, row)])
    }

    /// Squared Frobenius norm.
    pub fn norm2(&self) -> f64 {
        self.data.iter().map(|elem| elem * elem).sum()
    }

    /// Frobenius norm.
    pub fn norm(&self) -> f64 {
        self.norm2().sqrt()
    }

    pub fn trace(&self) -> f64 {
        (0..self.rows.min(self.cols)).map(|i| self[(i, i)]).sum()
    }

    /// Scales every row to unit length. All-zero rows are left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathpack_linalg::*;
    /// let mut m = MatrixN::from_rows(&[[3.0, 4.0], [0.0, 0.0]]);
    /// m.normalize_rows();
    /// assert_eq!(m, MatrixN::from_rows(&[[0.6, 0.8], [0.0, 0.0]]));
    /// ```
    pub fn normalize_rows(&mut self) -> &mut Self {
        if self.cols == 0 {
            return self;
        }
        for row in self.data.chunks_mut(self.cols) {
            let norm = row.iter().map(|elem| elem * elem).sum::<f64>().sqrt();
            if norm != 0.0 {
                row.iter_mut().for_each(|elem| *elem /= norm);
            }
        }
        self
    }

    /// Copies the `rows`×`cols` block of `src` whose top-left corner is `src_at` into `self`,
    /// with its top-left corner at `dst_at`. Corners are `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the block does not fit into either matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathpack_linalg::*;
    /// let src = MatrixN::from_fn(3, 3, |r, c| (r * 3 + c) as f64);
    /// let mut dst = MatrixN::zeros(2, 4);
    /// dst.copy_block((0, 2), &src, (1, 1), (2, 2));
    /// assert_eq!(dst, MatrixN::from_rows(&[
    ///     [0.0, 0.0, 4.0, 5.0],
    ///     [0.0, 0.0, 7.0, 8.0],
    /// ]));
    /// ```
    pub fn copy_block(
        &mut self,
        dst_at: (usize, usize),
        src: &MatrixN,
        src_at: (usize, usize),
        (rows, cols): (usize, usize),
    ) -> &mut Self {
        assert!(
            src_at.0 + rows <= src.rows && src_at.1 + cols <= src.cols,
            "{rows}x{cols} block at {src_at:?} exceeds {}x{} source",
            src.rows,
            src.cols,
        );
        assert!(
            dst_at.0 + rows <= self.rows && dst_at.1 + cols <= self.cols,
            "{rows}x{cols} block at {dst_at:?} exceeds {}x{} destination",
            self.rows,
            self.cols,
        );

        for r in 0..rows {
            let s = (src_at.0 + r) * src.cols + src_at.1;
            let d = (dst_at.0 + r) * self.cols + dst_at.1;
            self.data[d..d + cols].copy_from_slice(&src.data[s..s + cols]);
        }
        self
    }

    fn assert_same_shape(&self, other: &MatrixN, what: &str) {
        assert!(
            self.rows == other.rows && self.cols == other.cols,
            "{what} of {}x{} and {}x{} matrices",
            self.rows,
            self.cols,
            other.rows,
            other.cols,
        );
    }
}

impl Index<(usize, usize)> for MatrixN {
    type Output = f64;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of range for {}x{} matrix",
            self.rows,
            self.cols,
        );
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for MatrixN {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of range for {}x{} matrix",
            self.rows,
            self.cols,
        );
        &mut self.data[row * self.cols + col]
    }
}

/// Row-major linear indexing.
impl Index<usize> for MatrixN {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &f64 {
        &self.data[index]
    }
}

impl IndexMut<usize> for MatrixN {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.data[index]
    }
}

impl Neg for MatrixN {
    type Output = MatrixN;

    fn neg(mut self) -> MatrixN {
        self.data.iter_mut().for_each(|elem| *elem = -*elem);
        self
    }
}

impl Neg for &MatrixN {
    type Output = MatrixN;

    fn neg(self) -> MatrixN {
        -self.clone()
    }
}

impl AddAssign<&MatrixN> for MatrixN {
    fn add_assign(&mut self, rhs: &MatrixN) {
        self.assert_same_shape(rhs, "sum");
        self.data.iter_mut().zip(&rhs.data).for_each(|(a, b)| *a += b);
    }
}

impl SubAssign<&MatrixN> for MatrixN {
    fn sub_assign(&mut self, rhs: &MatrixN) {
        self.assert_same_shape(rhs, "difference");
        self.data.iter_mut().zip(&rhs.data).for_each(|(a, b)| *a -= b);
    }
}

/// `A *= B` computes `A = A * B`.
impl MulAssign<&MatrixN> for MatrixN {
    fn mul_assign(&mut self, rhs: &MatrixN) {
        *self = &*self * rhs;
    }
}

impl MulAssign<f64> for MatrixN {
    fn mul_assign(&mut self, rhs: f64) {
        self.data.iter_mut().for_each(|elem| *elem *= rhs);
    }
}

impl DivAssign<f64> for MatrixN {
    fn div_assign(&mut self, rhs: f64) {
        self.data.iter_mut().for_each(|elem| *elem /= rhs);
    }
}

impl Add<&MatrixN> for MatrixN {
    type Output = MatrixN;

    fn add(mut self, rhs: &MatrixN) -> MatrixN {
        self += rhs;
        self
    }
}

impl Add<&MatrixN> for &MatrixN {
    type Output = MatrixN;

    fn add(self, rhs: &MatrixN) -> MatrixN {
        self.clone() + rhs
    }
}

impl Sub<&MatrixN> for MatrixN {
    type Output = MatrixN;

    fn sub(mut self, rhs: &MatrixN) -> MatrixN {
        self -= rhs;
        self
    }
}

impl Sub<&MatrixN> for &MatrixN {
    type Output = MatrixN;

    fn sub(self, rhs: &MatrixN) -> MatrixN {
        self.clone() - rhs
    }
}

/// Matrix * Matrix.
impl Mul<&MatrixN> for &MatrixN {
    type Output = MatrixN;

    fn mul(self, rhs: &MatrixN) -> MatrixN {
        let mut out = MatrixN::zeros(self.rows, rhs.cols);
        mat_mul(self, rhs, &mut out);
        out
    }
}

impl Mul<&MatrixN> for MatrixN {
    type Output = MatrixN;

    fn mul(self, rhs: &MatrixN) -> MatrixN {
        &self * rhs
    }
}

/// Matrix * Column Vector.
impl Mul<&VectorN> for &MatrixN {
    type Output = VectorN;

    fn mul(self, rhs: &VectorN) -> VectorN {
        let mut out = VectorN::zeros(self.rows);
        mat_mul(self, rhs, &mut out);
        out
    }
}

/// Row Vector * Matrix.
impl Mul<&MatrixN> for &VectorN {
    type Output = VectorN;

    fn mul(self, rhs: &MatrixN) -> VectorN {
        let mut out = MatrixN::zeros(1, rhs.cols);
        mat_mul(&self.transpose(), rhs, &mut out);
        VectorN::from(out.into_vec())
    }
}

/// Products with the fixed-size types; the result is always dynamic.
impl<const R: usize, const C: usize> Mul<Matrix<f64, R, C>> for &MatrixN {
    type Output = MatrixN;

    fn mul(self, rhs: Matrix<f64, R, C>) -> MatrixN {
        let mut out = MatrixN::zeros(self.rows, C);
        mat_mul(self, &rhs, &mut out);
        out
    }
}

impl<const R: usize, const C: usize> Mul<&MatrixN> for Matrix<f64, R, C> {
    type Output = MatrixN;

    fn mul(self, rhs: &MatrixN) -> MatrixN {
        let mut out = MatrixN::zeros(R, rhs.cols);
        mat_mul(&self, rhs, &mut out);
        out
    }
}

impl<const N: usize> Mul<Vector<f64, N>> for &MatrixN {
    type Output = VectorN;

    fn mul(self, rhs: Vector<f64, N>) -> VectorN {
        let mut out = VectorN::zeros(self.rows);
        mat_mul(self, &rhs, &mut out);
        out
    }
}

impl<const N: usize> Mul<&MatrixN> for Vector<f64, N> {
    type Output = VectorN;

    fn mul(self, rhs: &MatrixN) -> VectorN {
        &VectorN::from(self) * rhs
    }
}

impl Mul<f64> for MatrixN {
    type Output = MatrixN;

    fn mul(mut self, rhs: f64) -> MatrixN {
        self *= rhs;
        self
    }
}

impl Mul<f64> for &MatrixN {
    type Output = MatrixN;

    fn mul(self, rhs: f64) -> MatrixN {
        self.clone() * rhs
    }
}

impl Mul<MatrixN> for f64 {
    type Output = MatrixN;

    fn mul(self, rhs: MatrixN) -> MatrixN {
        rhs * self
    }
}

impl Mul<&MatrixN> for f64 {
    type Output = MatrixN;

    fn mul(self, rhs: &MatrixN) -> MatrixN {
        rhs * self
    }
}

impl Div<f64> for MatrixN {
    type Output = MatrixN;

    fn div(mut self, rhs: f64) -> MatrixN {
        self /= rhs;
        self
    }
}

impl Div<f64> for &MatrixN {
    type Output = MatrixN;

    fn div(self, rhs: f64) -> MatrixN {
        self.clone() / rhs
    }
}

impl fmt::Debug for MatrixN {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        if self.cols > 0 {
            for row in self.data.chunks(self.cols) {
                list.entry(&row);
            }
        }
        list.finish()
    }
}

/// Renders one row per line, each element in a fixed-width field.
impl fmt::Display for MatrixN {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::write_rows(f, &self.data, self.cols)
    }
}
