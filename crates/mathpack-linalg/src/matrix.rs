use std::{array, fmt};

use crate::{render, Number, One, Sqrt, Vector, Zero};

mod ops;

/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 3x3 matrix with [`f64`] elements.
pub type Mat3d = Mat3<f64>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4, 4>;
/// A 4x4 matrix with [`f64`] elements.
pub type Mat4d = Mat4<f64>;

/// A fixed-size `R`×`C` matrix stored inline in row-major order.
///
/// The shape is part of the type, so shape mismatches between fixed-size operands are compile
/// errors. For shapes only known at run time use [`MatrixN`][crate::MatrixN].
///
/// # Construction
///
/// - [`Matrix::from_rows`] takes an array of rows (arrays or [`Vector`]s), and
///   [`Matrix::from_columns`] an array of columns.
/// - [`Matrix::from_fn`] calls a closure with the `(row, col)` position of every element.
/// - Square matrices can be built from their diagonal with [`Matrix::from_diagonal`].
/// - [`Matrix::ZERO`] and [`Matrix::identity`] are the usual constants.
///
/// # Element Access
///
/// A `(row, col)` tuple indexes a single element, 0-based:
///
/// ```
/// # use mathpack_linalg::*;
/// let mut m = Mat3d::identity();
/// m[(2, 0)] = -1.5;
/// assert_eq!(m.row(2), vec3(-1.5, 0.0, 1.0));
/// ```
///
/// A plain `usize` walks the storage order, so `m[i]` is `m[(i / C, i % C)]`:
///
/// ```
/// # use mathpack_linalg::*;
/// let m = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
/// assert_eq!(m[3], 4.0);
/// assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
/// ```
///
/// Both forms panic when out of bounds; [`Matrix::get`] and [`Matrix::get_mut`] are the checked
/// variants.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; C]; R]);

#[rustfmt::skip]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T: Zero + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([[T::ZERO; C]; R]);
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Builds a matrix from `R` rows of `C` elements each.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathpack_linalg::*;
    /// let m = Matrix::from_rows([vec2(1.0, -1.0), vec2(0.5, 2.0)]);
    /// assert_eq!(m, Matrix::from_columns([[1.0, 0.5], [-1.0, 2.0]]));
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self {
        Self(rows.map(|row| row.into().into_array()))
    }

    /// Builds a matrix from `C` columns of `R` elements each.
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self
    where
        T: Copy,
    {
        Matrix::<T, C, R>::from_rows(columns).transpose()
    }

    /// Builds a matrix by calling `elem(row, col)` for every position, row by row.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathpack_linalg::*;
    /// // The 3×3 Hilbert matrix.
    /// let h: Mat3d = Matrix::from_fn(|r, c| 1.0 / (r + c + 1) as f64);
    /// assert_eq!(h[(1, 2)], 0.25);
    /// assert_eq!(h, h.transpose());
    /// ```
    pub fn from_fn<F>(mut elem: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|r| array::from_fn(|c| elem(r, c))))
    }

    /// Returns a matrix of the same shape holding `f(elem)` for every element.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Matrix<U, R, C> {
        Matrix(self.0.map(|row| row.map(&mut f)))
    }

    /// Number of elements (`R * C`).
    #[inline]
    pub const fn size(&self) -> usize {
        R * C
    }

    #[inline]
    pub const fn rows(&self) -> usize {
        R
    }

    #[inline]
    pub const fn cols(&self) -> usize {
        C
    }

    /// Returns the elements in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.0.as_flattened()
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.0.as_flattened_mut()
    }

    /// Converts this [`Matrix`] into an array of rows.
    #[inline]
    pub fn into_rows(self) -> [[T; C]; R] {
        self.0
    }

    /// Returns the `C`×`R` transpose.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathpack_linalg::*;
    /// let m = Matrix::from_rows([[1.0, 2.0, 3.0]]);
    /// assert_eq!(m.transpose(), Matrix::from_columns([[1.0, 2.0, 3.0]]));
    /// assert_eq!(m.transpose().transpose(), m);
    /// ```
    pub fn transpose(&self) -> Matrix<T, C, R>
    where
        T: Copy,
    {
        Matrix::from_fn(|row, col| self.0[col][row])
    }

    /// Returns row `row` as a vector.
    pub fn row(&self, row: usize) -> Vector<T, C>
    where
        T: Copy,
    {
        self.0[row].into()
    }

    /// Returns column `col` as a vector.
    pub fn col(&self, col: usize) -> Vector<T, R>
    where
        T: Copy,
    {
        Vector::from_fn(|row| self.0[row][col])
    }

    /// Checked element access.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathpack_linalg::*;
    /// let m = Mat4d::identity();
    /// assert_eq!(m.get(3, 3), Some(&1.0));
    /// assert_eq!(m.get(0, 4), None);
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(row).and_then(|r| r.get(col))
    }

    /// Checked mutable element access.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(row).and_then(|r| r.get_mut(col))
    }

    /// Sets every element to zero.
    pub fn clear(&mut self) -> &mut Self
    where
        T: Zero,
    {
        self.as_mut_slice().iter_mut().for_each(|elem| *elem = T::ZERO);
        self
    }

    /// Returns the squared Frobenius norm (sum of all squared elements).
    pub fn norm2(&self) -> T
    where
        T: Number,
    {
        self.as_slice()
            .iter()
            .fold(T::ZERO, |acc, &elem| acc + elem * elem)
    }

    /// Returns the Frobenius norm.
    pub fn norm(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.norm2().sqrt()
    }

    /// Copies the overlapping top-left block into an `R2`×`C2` matrix.
    ///
    /// Positions outside `self` are zero; rows and columns past `R2`/`C2` are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathpack_linalg::*;
    /// let m = Mat3d::from_diagonal([2.0, 3.0, 4.0]);
    /// assert_eq!(m.resize::<2, 4>(), Matrix::from_rows([
    ///     [2.0, 0.0, 0.0, 0.0],
    ///     [0.0, 3.0, 0.0, 0.0],
    /// ]));
    /// ```
    pub fn resize<const R2: usize, const C2: usize>(&self) -> Matrix<T, R2, C2>
    where
        T: Zero + Copy,
    {
        Matrix::from_fn(|row, col| {
            if row < R && col < C {
                self.0[row][col]
            } else {
                T::ZERO
            }
        })
    }

    /// Computes the determinant of the 3×3 sub-matrix selected by `rows` and `cols`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathpack_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [2, 0, 0, 9],
    ///     [0, 3, 0, 9],
    ///     [9, 9, 9, 9],
    ///     [0, 0, 4, 9],
    /// ]);
    /// assert_eq!(mat.det3([0, 1, 3], [0, 1, 2]), 24);
    /// ```
    pub fn det3(&self, rows: [usize; 3], cols: [usize; 3]) -> T
    where
        T: Number,
    {
        let [r1, r2, r3] = rows;
        let [c1, c2, c3] = cols;
        let m = |r: usize, c: usize| self.0[r][c];

        m(r1, c1) * (m(r2, c2) * m(r3, c3) - m(r2, c3) * m(r3, c2))
            - m(r1, c2) * (m(r2, c1) * m(r3, c3) - m(r2, c3) * m(r3, c1))
            + m(r1, c3) * (m(r2, c1) * m(r3, c2) - m(r2, c2) * m(r3, c1))
    }
}

impl<T: Zero + One, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Ones on the main diagonal, zeros elsewhere. Non-square shapes get a truncated diagonal.
    pub fn identity() -> Self {
        Self::from_fn(|row, col| if row == col { T::ONE } else { T::ZERO })
    }

    /// Overwrites `self` with the identity matrix.
    pub fn set_identity(&mut self) -> &mut Self {
        *self = Self::identity();
        self
    }
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// The main diagonal.
    pub fn diagonal(&self) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|i| self.0[i][i])
    }

    /// A square matrix with `diag` on the main diagonal and zero elsewhere.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathpack_linalg::*;
    /// let d = Mat3d::from_diagonal(vec3(1.0, -2.0, 0.5));
    /// assert_eq!(d * vec3(4.0, 4.0, 4.0), vec3(4.0, -8.0, 2.0));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: Zero + Copy,
    {
        let diag = diag.into();
        Self::from_fn(|row, col| if row == col { diag[row] } else { T::ZERO })
    }

    /// Sum of the diagonal.
    ///
    /// ```
    /// # use mathpack_linalg::*;
    /// assert_eq!(Mat4d::identity().trace(), 4.0);
    /// ```
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        (0..N).fold(T::ZERO, |acc, i| acc + self.0[i][i])
    }

    /// Resizes this square matrix to `M`×`M`, writing 1 on the diagonal of every added
    /// dimension.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathpack_linalg::*;
    /// let m = Mat3d::from_diagonal([2.0, 2.0, 2.0]).resize_homogeneous::<4>();
    /// assert_eq!(m.diagonal(), vec4(2.0, 2.0, 2.0, 1.0));
    /// ```
    pub fn resize_homogeneous<const M: usize>(&self) -> Matrix<T, M, M>
    where
        T: Zero + One + Copy,
    {
        Matrix::from_fn(|row, col| {
            if row < N && col < N {
                self.0[row][col]
            } else if row == col {
                T::ONE
            } else {
                T::ZERO
            }
        })
    }
}

impl<T: Number> Matrix<T, 3, 3> {
    /// Determinant by the rule of Sarrus.
    pub fn determinant(&self) -> T {
        self.det3([0, 1, 2], [0, 1, 2])
    }

    /// Inverse via the adjugate: its columns are cross products of pairs of rows.
    ///
    /// # Panics
    ///
    /// Panics when the determinant is exactly zero; see [`Matrix::try_invert`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathpack_linalg::*;
    /// assert_eq!(Mat3::<f64>::identity().invert(), Mat3::identity());
    /// ```
    pub fn invert(&self) -> Self {
        match self.try_invert() {
            Some(inv) => inv,
            None => panic!("attempt to invert a non-invertible matrix"),
        }
    }

    /// Inverts this 3x3 matrix, returning [`None`] if its determinant is zero.
    pub fn try_invert(&self) -> Option<Self> {
        let det = self.determinant();
        if det == T::ZERO {
            return None;
        }

        let [r0, r1, r2] = self.0.map(Vector::from);
        Some(Matrix::from_columns([r1.cross(r2), r2.cross(r0), r0.cross(r1)]) * (T::ONE / det))
    }
}

/// The three indices in `0..4` other than `skip`.
fn others(skip: usize) -> [usize; 3] {
    array::from_fn(|k| if k < skip { k } else { k + 1 })
}

impl<T: Number> Matrix<T, 4, 4> {
    /// Determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> T {
        (0..4).fold(T::ZERO, |acc, col| {
            let term = self.0[0][col] * self.det3([1, 2, 3], others(col));
            if col % 2 == 0 {
                acc + term
            } else {
                acc - term
            }
        })
    }

    /// Inverse via the adjugate of signed 3×3 minors.
    ///
    /// # Panics
    ///
    /// Panics when the determinant is exactly zero; see [`Matrix::try_invert`].
    pub fn invert(&self) -> Self {
        match self.try_invert() {
            Some(inv) => inv,
            None => panic!("attempt to invert a non-invertible matrix"),
        }
    }

    /// Inverts this 4x4 matrix, returning [`None`] if its determinant is zero.
    pub fn try_invert(&self) -> Option<Self> {
        let det = self.determinant();
        if det == T::ZERO {
            return None;
        }

        let adjugate: Self = Matrix::from_fn(|row, col| {
            let minor = self.det3(others(col), others(row));
            if (row + col) % 2 == 0 {
                minor
            } else {
                -minor
            }
        });
        Some(adjugate * (T::ONE / det))
    }
}

impl<T: Default, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    fn default() -> Self {
        Self(array::from_fn(|_| array::from_fn(|_| T::default())))
    }
}

impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T, R, C> {
    #[inline]
    fn from(rows: [[T; C]; R]) -> Self {
        Self(rows)
    }
}

/// Prints nested rows, `[[a, b], [c, d]]`.
impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

/// Renders one row per line, each element in a fixed-width field.
impl<T: fmt::Display, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::write_rows(f, self.as_slice(), C)
    }
}
