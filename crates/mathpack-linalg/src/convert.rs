//! Conversions between the fixed-size and heap-allocated types.
//!
//! Widening into [`VectorN`] and [`MatrixN`] never loses data and is offered through [`From`].
//! Conversions back to the fixed-size types are named methods that truncate or zero-pad.

use crate::{Matrix, MatrixN, Quat, Vector, VectorN};

impl<const N: usize> From<Vector<f64, N>> for VectorN {
    fn from(v: Vector<f64, N>) -> Self {
        VectorN::from_slice(v.as_slice())
    }
}

/// A vector becomes a single-column matrix.
impl<const N: usize> From<Vector<f64, N>> for MatrixN {
    fn from(v: Vector<f64, N>) -> Self {
        MatrixN::from_row_slice(N, 1, v.as_slice())
    }
}

impl<const R: usize, const C: usize> From<Matrix<f64, R, C>> for MatrixN {
    fn from(m: Matrix<f64, R, C>) -> Self {
        MatrixN::from_row_slice(R, C, m.as_slice())
    }
}

/// A vector becomes a single-column matrix.
impl From<VectorN> for MatrixN {
    fn from(v: VectorN) -> Self {
        let n = v.size();
        MatrixN::from_vec(n, 1, v.into_vec())
    }
}

impl From<&VectorN> for MatrixN {
    fn from(v: &VectorN) -> Self {
        MatrixN::from_row_slice(v.size(), 1, v.as_slice())
    }
}

/// The homogeneous 4×4 rotation matrix of the normalized quaternion.
impl From<Quat<f64>> for MatrixN {
    fn from(q: Quat<f64>) -> Self {
        q.to_mat4().into()
    }
}

impl<const N: usize> Vector<f64, N> {
    /// Returns this column vector as a 1×N row matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathpack_linalg::*;
    /// let row = vec3(1.0, 2.0, 3.0).transpose();
    /// assert_eq!((row.rows(), row.cols()), (1, 3));
    /// ```
    pub fn transpose(&self) -> MatrixN {
        MatrixN::from_row_slice(1, N, self.as_slice())
    }
}

impl VectorN {
    /// Returns a fixed-size copy, dropping surplus elements and zero-padding missing ones.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathpack_linalg::*;
    /// let v = VectorN::from(vec![1.0, 2.0, 3.0]);
    /// assert_eq!(v.to_vector::<2>(), vec2(1.0, 2.0));
    /// assert_eq!(v.to_vector::<4>(), vec4(1.0, 2.0, 3.0, 0.0));
    /// ```
    pub fn to_vector<const N: usize>(&self) -> Vector<f64, N> {
        Vector::from_fn(|i| self.as_slice().get(i).copied().unwrap_or(0.0))
    }
}

impl MatrixN {
    /// Returns a fixed-size copy of the top-left `R`×`C` block, zero-padding rows and columns
    /// that do not exist in `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathpack_linalg::*;
    /// let m = MatrixN::identity(2).to_matrix::<3, 3>();
    /// assert_eq!(m, Mat3d::from_diagonal([1.0, 1.0, 0.0]));
    /// ```
    pub fn to_matrix<const R: usize, const C: usize>(&self) -> Matrix<f64, R, C> {
        Matrix::from_fn(|row, col| {
            if row < self.rows() && col < self.cols() {
                self[(row, col)]
            } else {
                0.0
            }
        })
    }

    /// Returns the elements in row-major order as a vector. An N×1 matrix yields its column.
    pub fn to_vector_n(&self) -> VectorN {
        VectorN::from_slice(self.as_slice())
    }
}

impl Quat<f64> {
    /// Extracts the rotation of the upper-left 3×3 block of `m`.
    ///
    /// # Panics
    ///
    /// Panics if `m` is smaller than 3×3.
    pub fn from_matrix_n(m: &MatrixN) -> Self {
        assert!(
            m.rows() >= 3 && m.cols() >= 3,
            "a {}x{} matrix holds no 3x3 rotation",
            m.rows(),
            m.cols(),
        );
        Quat::from_rotation_matrix(|row, col| m[(row, col)])
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::{vec3, Mat3d, Mat4d, Quat, Vec3d};

    use super::*;

    #[test]
    fn widening_is_lossless() {
        let m = Mat3d::from_diagonal([1.0, 2.0, 3.0]);
        let dynamic = MatrixN::from(m);
        assert_eq!(dynamic.to_matrix::<3, 3>(), m);

        let v = vec3(1.0, 2.0, 3.0);
        assert_eq!(VectorN::from(v).to_vector::<3>(), v);
        assert_eq!(MatrixN::from(v).to_vector_n(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn column_matrix_round_trip() {
        let v = VectorN::from(vec![4.0, 5.0]);
        let m = MatrixN::from(&v);
        assert_eq!((m.rows(), m.cols()), (2, 1));
        assert_eq!(m.to_vector_n(), v);
    }

    #[test]
    fn quaternion_interop() {
        let q = Quat::from_axis_angle(vec3(1.0, 1.0, 1.0), 2.0);
        let m = MatrixN::from(q);
        assert_eq!((m.rows(), m.cols()), (4, 4));
        assert_eq!(m.to_matrix::<4, 4>(), q.to_mat4());
        assert_relative_eq!(Quat::from_matrix_n(&m), q, epsilon = 1e-12);
        assert_eq!(Mat4d::identity(), MatrixN::identity(4).to_matrix::<4, 4>());
        assert_eq!(Vec3d::X.transpose().to_vector_n(), [1.0, 0.0, 0.0]);
    }
}
