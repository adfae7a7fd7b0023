//! Shape and element access shared by every `f64` vector and matrix type.
//!
//! Vectors are treated as single-column matrices. Linear indices are row-major
//! (`row * cols + col`).

use crate::{Matrix, MatrixN, Vector, VectorN};

/// Read access to a dense, row-major collection of `f64` elements.
pub trait Dense {
    fn rows(&self) -> usize;
    fn cols(&self) -> usize;

    /// Number of elements, `rows() * cols()`.
    fn size(&self) -> usize {
        self.rows() * self.cols()
    }

    /// Returns the elements in row-major order.
    fn elems(&self) -> &[f64];

    /// Returns the element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of range.
    fn at(&self, row: usize, col: usize) -> f64 {
        assert!(
            row < self.rows() && col < self.cols(),
            "index ({row}, {col}) out of range for {}x{} operand",
            self.rows(),
            self.cols(),
        );
        self.elems()[row * self.cols() + col]
    }

    /// Returns the element at row-major linear index `i`.
    fn at_linear(&self, i: usize) -> f64 {
        self.elems()[i]
    }
}

/// Write access to a dense, row-major collection of `f64` elements.
pub trait DenseMut: Dense {
    fn elems_mut(&mut self) -> &mut [f64];

    fn at_mut(&mut self, row: usize, col: usize) -> &mut f64 {
        let (rows, cols) = (self.rows(), self.cols());
        assert!(
            row < rows && col < cols,
            "index ({row}, {col}) out of range for {rows}x{cols} operand",
        );
        &mut self.elems_mut()[row * cols + col]
    }

    fn at_linear_mut(&mut self, i: usize) -> &mut f64 {
        &mut self.elems_mut()[i]
    }
}

impl<const N: usize> Dense for Vector<f64, N> {
    fn rows(&self) -> usize {
        N
    }

    fn cols(&self) -> usize {
        1
    }

    fn elems(&self) -> &[f64] {
        self.as_slice()
    }
}

impl<const N: usize> DenseMut for Vector<f64, N> {
    fn elems_mut(&mut self) -> &mut [f64] {
        self.as_mut_slice()
    }
}

impl<const R: usize, const C: usize> Dense for Matrix<f64, R, C> {
    fn rows(&self) -> usize {
        R
    }

    fn cols(&self) -> usize {
        C
    }

    fn elems(&self) -> &[f64] {
        self.as_slice()
    }
}

impl<const R: usize, const C: usize> DenseMut for Matrix<f64, R, C> {
    fn elems_mut(&mut self) -> &mut [f64] {
        self.as_mut_slice()
    }
}

impl Dense for VectorN {
    fn rows(&self) -> usize {
        self.size()
    }

    fn cols(&self) -> usize {
        1
    }

    fn elems(&self) -> &[f64] {
        self.as_slice()
    }
}

impl DenseMut for VectorN {
    fn elems_mut(&mut self) -> &mut [f64] {
        self.as_mut_slice()
    }
}

impl Dense for MatrixN {
    fn rows(&self) -> usize {
        MatrixN::rows(self)
    }

    fn cols(&self) -> usize {
        MatrixN::cols(self)
    }

    fn elems(&self) -> &[f64] {
        self.as_slice()
    }
}

impl DenseMut for MatrixN {
    fn elems_mut(&mut self) -> &mut [f64] {
        self.as_mut_slice()
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec3, Mat3d};

    use super::*;

    fn shape(d: &impl Dense) -> (usize, usize, usize) {
        (d.rows(), d.cols(), d.size())
    }

    #[test]
    fn shapes() {
        assert_eq!(shape(&vec3(1.0, 2.0, 3.0)), (3, 1, 3));
        assert_eq!(shape(&Mat3d::identity()), (3, 3, 9));
        assert_eq!(shape(&VectorN::zeros(5)), (5, 1, 5));
        assert_eq!(shape(&MatrixN::zeros(2, 7)), (2, 7, 14));
    }

    #[test]
    fn element_access() {
        let mut m = MatrixN::zeros(2, 3);
        *m.at_mut(1, 2) = 5.0;
        *m.at_linear_mut(1) = 2.0;
        assert_eq!(m.at(1, 2), 5.0);
        assert_eq!(m.at_linear(5), 5.0);
        assert_eq!(m.at(0, 1), 2.0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn out_of_range() {
        let m = MatrixN::zeros(2, 3);
        m.at(0, 3);
    }
}
