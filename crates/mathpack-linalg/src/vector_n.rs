use std::{
    fmt,
    ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign},
};

use crate::{render, MatrixN};

/// A heap-allocated column vector of `f64` whose length is chosen at runtime.
///
/// # Examples
///
/// ```
/// # use mathpack_linalg::*;
/// let mut v = VectorN::from(vec![3.0, 0.0, 4.0]);
/// assert_eq!(v.size(), 3);
/// assert_eq!(v.norm(), 5.0);
/// v *= 2.0;
/// assert_eq!(v, [6.0, 0.0, 8.0]);
/// ```
#[derive(Clone, Default, PartialEq)]
pub struct VectorN {
    data: Vec<f64>,
}

impl VectorN {
    /// Creates an empty vector.
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates a vector of `n` zeroes.
    pub fn zeros(n: usize) -> Self {
        Self { data: vec![0.0; n] }
    }

    /// Creates a vector of `n` elements by invoking `cb` with the index of each element.
    pub fn from_fn(n: usize, cb: impl FnMut(usize) -> f64) -> Self {
        Self {
            data: (0..n).map(cb).collect(),
        }
    }

    pub fn from_slice(elems: &[f64]) -> Self {
        Self {
            data: elems.to_vec(),
        }
    }

    /// Creates an empty vector able to hold `capacity` elements without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        1
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

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

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.data.iter()
    }

    /// Sets every element to zero, keeping the size.
    pub fn clear(&mut self) -> &mut Self {
        self.data.fill(0.0);
        self
    }

    /// Changes the size to `n`. All elements, old and new, are zero afterwards.
    pub fn resize(&mut self, n: usize) -> &mut Self {
        self.data.clear();
        self.data.resize(n, 0.0);
        self
    }

    /// Reserves room for at least `additional` more elements without changing the size.
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    pub fn norm2(&self) -> f64 {
        self.dot(self)
    }

    pub fn norm(&self) -> f64 {
        self.norm2().sqrt()
    }

    /// Scales `self` to unit length; a zero vector is left unchanged.
    pub fn normalize(&mut self) -> &mut Self {
        let norm = self.norm();
        if norm != 0.0 {
            *self /= norm;
        }
        self
    }

    /// Computes the dot product.
    ///
    /// # Panics
    ///
    /// Panics if the sizes differ.
    pub fn dot(&self, other: &VectorN) -> f64 {
        self.assert_same_size(other, "dot product");
        self.data.iter().zip(&other.data).map(|(a, b)| a * b).sum()
    }

    /// Computes the outer product `self · otherᵀ`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathpack_linalg::*;
    /// let m = VectorN::from(vec![1.0, 2.0]).outer(&VectorN::from(vec![3.0, 4.0, 5.0]));
    /// assert_eq!((m.rows(), m.cols()), (2, 3));
    /// assert_eq!(m[(1, 2)], 10.0);
    /// ```
    pub fn outer(&self, other: &VectorN) -> MatrixN {
        MatrixN::from_fn(self.size(), other.size(), |row, col| {
            self.data[row] * other.data[col]
        })
    }

    /// Returns this column vector as a 1×N row matrix.
    pub fn transpose(&self) -> MatrixN {
        MatrixN::from_row_slice(1, self.size(), &self.data)
    }

    fn assert_same_size(&self, other: &VectorN, what: &str) {
        assert_eq!(
            self.size(),
            other.size(),
            "{what} of vectors with sizes {} and {}",
            self.size(),
            other.size(),
        );
    }
}

impl From<Vec<f64>> for VectorN {
    fn from(data: Vec<f64>) -> Self {
        Self { data }
    }
}

impl From<&[f64]> for VectorN {
    fn from(elems: &[f64]) -> Self {
        Self::from_slice(elems)
    }
}

impl FromIterator<f64> for VectorN {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a VectorN {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl AsRef<[f64]> for VectorN {
    fn as_ref(&self) -> &[f64] {
        &self.data
    }
}

impl Index<usize> for VectorN {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &f64 {
        &self.data[index]
    }
}

impl IndexMut<usize> for VectorN {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.data[index]
    }
}

impl<const N: usize> PartialEq<[f64; N]> for VectorN {
    fn eq(&self, other: &[f64; N]) -> bool {
        self.data == other
    }
}

impl PartialEq<[f64]> for VectorN {
    fn eq(&self, other: &[f64]) -> bool {
        self.data == other
    }
}

impl Neg for VectorN {
    type Output = VectorN;

    fn neg(mut self) -> VectorN {
        self.data.iter_mut().for_each(|elem| *elem = -*elem);
        self
    }
}

impl Neg for &VectorN {
    type Output = VectorN;

    fn neg(self) -> VectorN {
        -self.clone()
    }
}

impl AddAssign<&VectorN> for VectorN {
    fn add_assign(&mut self, rhs: &VectorN) {
        self.assert_same_size(rhs, "sum");
        self.data.iter_mut().zip(&rhs.data).for_each(|(a, b)| *a += b);
    }
}

impl SubAssign<&VectorN> for VectorN {
    fn sub_assign(&mut self, rhs: &VectorN) {
        self.assert_same_size(rhs, "difference");
        self.data.iter_mut().zip(&rhs.data).for_each(|(a, b)| *a -= b);
    }
}

impl MulAssign<f64> for VectorN {
    fn mul_assign(&mut self, rhs: f64) {
        self.data.iter_mut().for_each(|elem| *elem *= rhs);
    }
}

impl DivAssign<f64> for VectorN {
    fn div_assign(&mut self, rhs: f64) {
        self.data.iter_mut().for_each(|elem| *elem /= rhs);
    }
}

// Binary operators are implemented for owned and borrowed left-hand sides; the owned forms
// reuse the left-hand buffer.

impl Add<&VectorN> for VectorN {
    type Output = VectorN;

    fn add(mut self, rhs: &VectorN) -> VectorN {
        self += rhs;
        self
    }
}

impl Add<&VectorN> for &VectorN {
    type Output = VectorN;

    fn add(self, rhs: &VectorN) -> VectorN {
        self.clone() + rhs
    }
}

impl Sub<&VectorN> for VectorN {
    type Output = VectorN;

    fn sub(mut self, rhs: &VectorN) -> VectorN {
        self -= rhs;
        self
    }
}

impl Sub<&VectorN> for &VectorN {
    type Output = VectorN;

    fn sub(self, rhs: &VectorN) -> VectorN {
        self.clone() - rhs
    }
}

impl Mul<f64> for VectorN {
    type Output = VectorN;

    fn mul(mut self, rhs: f64) -> VectorN {
        self *= rhs;
        self
    }
}

impl Mul<f64> for &VectorN {
    type Output = VectorN;

    fn mul(self, rhs: f64) -> VectorN {
        self.clone() * rhs
    }
}

impl Mul<VectorN> for f64 {
    type Output = VectorN;

    fn mul(self, rhs: VectorN) -> VectorN {
        rhs * self
    }
}

impl Mul<&VectorN> for f64 {
    type Output = VectorN;

    fn mul(self, rhs: &VectorN) -> VectorN {
        rhs * self
    }
}

impl Div<f64> for VectorN {
    type Output = VectorN;

    fn div(mut self, rhs: f64) -> VectorN {
        self /= rhs;
        self
    }
}

impl Div<f64> for &VectorN {
    type Output = VectorN;

    fn div(self, rhs: f64) -> VectorN {
        self.clone() / rhs
    }
}

impl fmt::Debug for VectorN {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.data {
            tup.field(elem);
        }
        tup.finish()
    }
}

/// Renders all elements on one line, each in a fixed-width field.
impl fmt::Display for VectorN {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::write_row(f, &self.data)
    }
}
