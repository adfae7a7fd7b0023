use std::{array, fmt};

use crate::{
    render,
    traits::{Number, Sqrt},
    Matrix, One, Zero,
};

mod ops;
mod view;

/// Two elements, fields `x` and `y`.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f64`] elements.
pub type Vec2d = Vec2<f64>;
/// Three elements, fields `x`, `y` and `z`.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f64`] elements.
pub type Vec3d = Vec3<f64>;
/// Four elements, fields `x`, `y`, `z` and `w`.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f64`] elements.
pub type Vec4d = Vec4<f64>;

/// A fixed-size column vector of `N` elements.
///
/// Vectors act as `N`×1 matrices in products: `matrix * vector` multiplies by a column,
/// `vector * matrix` by the transposed row.
///
/// Build one with [`vec2`], [`vec3`] or [`vec4`], from an array via [`From`], element by
/// element with [`Vector::from_fn`], or as a constant: [`Vector::ZERO`] and the unit vectors
/// `X`, `Y`, `Z`, `W` of the 2- to 4-element types.
///
/// Elements are read by index (`v[i]`, panicking out of range) and, for 2 to 4 elements, by
/// field name (`v.x`). [`Vector::as_slice`] and [`Vector::into_array`] expose the storage.
///
/// The element count only changes explicitly: [`Vector::resize`] zero-pads or truncates,
/// `extend`/`truncate` add or drop the last element. [`VectorN`][crate::VectorN] and
/// [`MatrixN`][crate::MatrixN] convert from any `Vector` without loss.
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// All elements zero.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

// Unit vectors along each axis.
impl<T: Zero + One> Vector<T, 2> {
    pub const X: Self = Self([T::ONE, T::ZERO]);
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// A vector with every element equal to `elem`.
    ///
    /// ```
    /// # use mathpack_linalg::*;
    /// assert_eq!(Vec4d::splat(0.25).norm(), 0.5);
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Builds a vector by calling `elem(i)` for each index in order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathpack_linalg::*;
    /// let v = Vector::from_fn(|i| i as f64 * 0.5);
    /// assert_eq!(v, vec3(0.0, 0.5, 1.0));
    /// ```
    pub fn from_fn(elem: impl FnMut(usize) -> T) -> Self {
        Self(array::from_fn(elem))
    }

    /// Returns a vector holding `f(elem)` for every element.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Vector<U, N> {
        Vector(self.0.map(f))
    }

    /// Pairs up the elements of `self` and `other` by index.
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut rhs = other.0.into_iter();
        self.map(|l| match rhs.next() {
            Some(r) => (l, r),
            None => unreachable!("both sides have N elements"),
        })
    }

    /// Number of elements (`N`).
    #[inline]
    pub const fn size(&self) -> usize {
        N
    }

    /// Number of rows; a vector is a column, so this equals [`Vector::size`].
    #[inline]
    pub const fn rows(&self) -> usize {
        N
    }

    /// Number of columns; always 1.
    #[inline]
    pub const fn cols(&self) -> usize {
        1
    }

    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Sets every element to zero.
    pub fn clear(&mut self) -> &mut Self
    where
        T: Zero,
    {
        self.0.iter_mut().for_each(|elem| *elem = T::ZERO);
        self
    }

    /// Returns the squared length (squared Euclidean norm) of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathpack_linalg::*;
    /// assert_eq!(vec2(4, 0).norm2(), 16);
    /// ```
    pub fn norm2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Returns the length (Euclidean norm) of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathpack_linalg::*;
    /// assert_eq!(vec2(3.0, 4.0).norm(), 5.0);
    /// ```
    pub fn norm(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.norm2().sqrt()
    }

    /// Scales `self` to unit length. The zero vector has no direction and is returned as is.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathpack_linalg::*;
    /// assert_eq!(vec2(-3.0, 4.0).normalize(), vec2(-0.6, 0.8));
    /// assert_eq!(Vec3d::ZERO.normalize(), Vec3d::ZERO);
    /// ```
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        let norm = self.norm();
        if norm == T::ZERO {
            return self;
        }
        self / norm
    }

    /// Inner product `selfᵀ · other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathpack_linalg::*;
    /// assert_eq!(vec4(1, 0, 2, -1).dot(vec4(5, 9, 1, 3)), 4);
    /// assert_eq!(Vec3d::X.dot(Vec3d::Z), 0.0);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.zip(other)
            .into_array()
            .into_iter()
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Computes the outer product `self · otherᵀ`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathpack_linalg::*;
    /// let m = vec2(1, 2).outer(vec3(1, 0, -1));
    /// assert_eq!(m, Matrix::from_rows([
    ///     [1, 0, -1],
    ///     [2, 0, -2],
    /// ]));
    /// ```
    pub fn outer<const M: usize>(self, other: Vector<T, M>) -> Matrix<T, N, M>
    where
        T: Number,
    {
        Matrix::from_fn(|row, col| self[row] * other[col])
    }

    /// Returns a vector with `M` elements: extra elements are zero, surplus elements are
    /// dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathpack_linalg::*;
    /// assert_eq!(vec4(1, 2, 3, 4).resize::<2>(), vec2(1, 2));
    /// assert_eq!(vec2(1, 2).resize::<4>(), vec4(1, 2, 0, 0));
    /// ```
    pub fn resize<const M: usize>(self) -> Vector<T, M>
    where
        T: Zero + Copy,
    {
        Vector::from_fn(|i| if i < N { self.0[i] } else { T::ZERO })
    }
}

impl<T> Vector<T, 2> {
    /// Appends `z`.
    pub fn extend(self, z: T) -> Vector<T, 3> {
        let [x, y] = self.0;
        vec3(x, y, z)
    }
}

impl<T> Vector<T, 3> {
    /// Drops `z`.
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, _] = self.0;
        vec2(x, y)
    }

    /// Appends `w`, typically 1 for a point and 0 for a direction in homogeneous coordinates.
    ///
    /// ```
    /// # use mathpack_linalg::*;
    /// let p = vec3(-1.0, 2.0, 3.5).extend(1.0);
    /// assert_eq!(p.truncate(), vec3(-1.0, 2.0, 3.5));
    /// ```
    pub fn extend(self, w: T) -> Vector<T, 4> {
        let [x, y, z] = self.0;
        vec4(x, y, z, w)
    }

    /// Right-handed cross product `self × other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathpack_linalg::*;
    /// assert_eq!(Vec3d::X.cross(Vec3d::Y), Vec3d::Z);
    /// assert_eq!(Vec3d::Y.cross(Vec3d::X), -Vec3d::Z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [ax, ay, az] = self.0;
        let [bx, by, bz] = other.0;
        vec3(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }
}

impl<T> Vector<T, 4> {
    /// Drops `w`.
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, _] = self.0;
        vec3(x, y, z)
    }

    /// Computes the 4D cross product of `self`, `b` and `c`: the vector orthogonal to all
    /// three inputs.
    ///
    /// This is the cofactor expansion of the 4×4 determinant whose first row holds the basis
    /// vectors and whose remaining rows are `self`, `b` and `c`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathpack_linalg::*;
    /// assert_eq!(Vec4d::X.cross3(Vec4d::Y, Vec4d::Z), -Vec4d::W);
    /// ```
    pub fn cross3(self, b: Self, c: Self) -> Self
    where
        T: Number,
    {
        let m = Matrix::from_rows([self, b, c, Vector::ZERO]);
        Vector::from_fn(|col| {
            let sel = array::from_fn(|k| if k < col { k } else { k + 1 });
            let minor = m.det3([0, 1, 2], sel);
            if col % 2 == 0 {
                minor
            } else {
                -minor
            }
        })
    }
}

impl<T: Default, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self(array::from_fn(|_| T::default()))
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(elems: [T; N]) -> Self {
        Self(elems)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(v: Vector<T, N>) -> Self {
        v.0
    }
}

/// Prints as a tuple, `(x, y, z)`.
impl<T: fmt::Debug, const N: usize> fmt::Debug for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0
            .iter()
            .fold(&mut f.debug_tuple(""), |tup, elem| tup.field(elem))
            .finish()
    }
}

/// Renders all elements on one line, each in a fixed-width field.
impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::write_row(f, &self.0)
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access() {
        assert_eq!(Vec3d::X.x, 1.0);
        assert_eq!(Vec3d::X[0], 1.0);
        assert_eq!(Vec3d::X[1], 0.0);
        assert_eq!(Vec3d::Y.y, 1.0);
        assert_eq!(Vec4d::W.w, 1.0);

        let mut v = vec2(-4, 6);
        v.x += 10;
        assert_eq!(v[0], 6);
        v[1] = v.x * 2;
        assert_eq!(v.y, 12);
        assert_eq!((v.size(), v.rows(), v.cols()), (2, 2, 1));
    }

    #[test]
    #[should_panic]
    fn index_out_of_range() {
        let v = Vec3d::ZERO;
        let i = v.size();
        let _ = v[i];
    }

    #[test]
    fn fmt() {
        assert_eq!(
            format!("{}", vec2(1.0, -0.5)),
            "    1.000000   -0.500000"
        );
        assert_eq!(format!("{:8.2}", vec2(1.0, 2.0)), "    1.00    2.00");
        assert_eq!(format!("{:?}", Vec4d::W), "(0.0, 0.0, 0.0, 1.0)");
    }

    #[test]
    fn in_place_arithmetic() {
        let mut v = vec3(1.0, 2.0, 3.0);
        v += vec3(1.0, 1.0, 1.0);
        assert_eq!(v, vec3(2.0, 3.0, 4.0));
        v -= vec3(2.0, 2.0, 2.0);
        assert_eq!(v, vec3(0.0, 1.0, 2.0));
        v *= 2.0;
        assert_eq!(v, vec3(0.0, 2.0, 4.0));
        v /= 4.0;
        assert_eq!(v, vec3(0.0, 0.5, 1.0));
        v.clear();
        assert_eq!(v, Vec3d::ZERO);
    }

    #[test]
    fn norms() {
        assert_eq!(vec3(1.0, 2.0, 2.0).norm2(), 9.0);
        assert_eq!(vec3(1.0, 2.0, 2.0).norm(), 3.0);
        assert_eq!(2.0 * vec2(1.0, 2.0), vec2(2.0, 4.0));
    }

    #[test]
    fn resizing() {
        let v = vec4(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.truncate(), vec3(1.0, 2.0, 3.0));
        assert_eq!(v.truncate().truncate(), vec2(1.0, 2.0));
        assert_eq!(v.resize::<2>().resize::<4>(), vec4(1.0, 2.0, 0.0, 0.0));
        assert_eq!(vec2(1.0, 2.0).extend(3.0).extend(4.0), v);
    }

    #[test]
    fn cross3_is_orthogonal() {
        let a = vec4(1.0, 2.0, 0.5, -1.0);
        let b = vec4(0.0, -1.0, 3.0, 2.0);
        let c = vec4(2.0, 0.0, 1.0, 1.0);
        let d: Vector<f64, 4> = a.cross3(b, c);
        assert!(d.dot(a).abs() < 1e-12);
        assert!(d.dot(b).abs() < 1e-12);
        assert!(d.dot(c).abs() < 1e-12);
        assert!(d.norm() > 0.0);
    }
}
