mod ops;

use std::fmt;

use crate::{
    render,
    scalar::{EPSILON, EPSILON2},
    vec3, vec4, Mat3, Mat4, Matrix, Number, One, Real, Sqrt, Vec3, Vector, Zero,
};

/// A quaternion consisting of 3 imaginary numbers and a real number.
///
/// Unit-length quaternions ("*versors*") are commonly used to represent rotations in 3D space.
///
/// Quaternions are represented similar to a 4-dimensional vector, with an `x`, `y`, `z` and `w`
/// component. Prefer [`Quat::axis`] and [`Quat::angle`] over reading the components directly.
///
/// # Examples
///
/// ```
/// # use mathpack_linalg::*;
/// # use approx::assert_relative_eq;
/// let q = Quat::from_axis_angle(Vec3d::Z, scalar::FRAC_PI_2);
/// assert_relative_eq!(q.rotate(Vec3d::X), Vec3d::Y, epsilon = 1e-12);
/// assert_relative_eq!(q.angle(), scalar::FRAC_PI_2, epsilon = 1e-12);
/// ```
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Quat<T> {
    vec: Vector<T, 4>,
}

/// A quaternion with [`f64`] components.
pub type Quatd = Quat<f64>;

impl<T: Zero + One> Quat<T> {
    /// The multiplicative identity.
    ///
    /// This is a unit quaternion that will not change a vector it is multiplied with.
    pub const IDENTITY: Self = Self {
        vec: vec4(T::ZERO, T::ZERO, T::ZERO, T::ONE),
    };
}

impl<T> Quat<T> {
    /// Creates a quaternion from a 4-dimensional [`Vector`].
    ///
    /// The `x`, `y`, and `z` coordinates correspond to the `i`, `j`, and `k` imaginary parts, while
    /// the `w` component corresponds to the real number part of the quaternion.
    pub fn from_vec(vec: Vector<T, 4>) -> Self {
        Self { vec }
    }

    pub fn from_components(x: T, y: T, z: T, w: T) -> Self {
        Self {
            vec: [x, y, z, w].into(),
        }
    }

    /// Returns the components as a `(x, y, z, w)` vector.
    pub fn into_vec(self) -> Vector<T, 4> {
        self.vec
    }

    pub fn as_vec(&self) -> &Vector<T, 4> {
        &self.vec
    }

    /// Resets this quaternion to all-zeroes.
    pub fn clear(&mut self) -> &mut Self
    where
        T: Zero,
    {
        self.vec.clear();
        self
    }

    /// Resets this quaternion to [`Quat::IDENTITY`].
    pub fn set_identity(&mut self)
    where
        T: Zero + One,
    {
        *self = Self::IDENTITY;
    }
}

impl<T: Real> Quat<T> {
    fn two() -> T {
        T::ONE + T::ONE
    }

    /// Creates a quaternion rotating by `radians` around `axis`.
    ///
    /// The axis does not need to be normalized.
    pub fn from_axis_angle(axis: Vec3<T>, radians: T) -> Self {
        let (sin, cos) = (radians / Self::two()).sin_cos();
        let axis = axis.normalize() * sin;
        Self::from_components(axis.x, axis.y, axis.z, cos)
    }

    pub fn from_rotation_x(radians: T) -> Self {
        Self::from_axis_angle(Vec3::X, radians)
    }

    pub fn from_rotation_y(radians: T) -> Self {
        Self::from_axis_angle(Vec3::Y, radians)
    }

    pub fn from_rotation_z(radians: T) -> Self {
        Self::from_axis_angle(Vec3::Z, radians)
    }

    /// Creates the shortest-arc rotation taking the direction of `from` onto the direction of `to`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathpack_linalg::*;
    /// # use approx::assert_relative_eq;
    /// let q = Quat::from_vectors(vec3(1.0, 1.0, 0.0), vec3(0.0, 0.0, 3.0));
    /// let v = q.rotate(vec3(1.0, 1.0, 0.0).normalize());
    /// assert_relative_eq!(v, Vec3d::Z, epsilon = 1e-12);
    /// ```
    pub fn from_vectors(from: Vec3<T>, to: Vec3<T>) -> Self {
        let (a, b) = (from.normalize(), to.normalize());
        let d = a.dot(b);
        let eps = T::from_f64(EPSILON);

        if d >= T::ONE - eps {
            return Self::IDENTITY;
        }
        if d <= eps - T::ONE {
            // Antiparallel: rotate by half a turn around any axis orthogonal to `a`.
            let mut axis = Vec3::X.cross(a);
            if axis.norm2() < T::from_f64(EPSILON2) {
                axis = Vec3::Y.cross(a);
            }
            let axis = axis.normalize();
            return Self::from_components(axis.x, axis.y, axis.z, T::ZERO);
        }

        let axis = a.cross(b);
        Self::from_components(axis.x, axis.y, axis.z, T::ONE + d).normalize()
    }

    /// Extracts the rotation of a 3x3 rotation matrix.
    pub fn from_mat3(mat: &Mat3<T>) -> Self {
        Self::from_rotation_matrix(|row, col| mat[(row, col)])
    }

    /// Extracts the rotation of the upper-left 3x3 block of a 4x4 matrix.
    pub fn from_mat4(mat: &Mat4<T>) -> Self {
        Self::from_rotation_matrix(|row, col| mat[(row, col)])
    }

    /// Picks the numerically largest of the four candidate components and derives the other
    /// three from the off-diagonal terms.
    pub(crate) fn from_rotation_matrix(m: impl Fn(usize, usize) -> T) -> Self {
        let (d0, d1, d2) = (m(0, 0), m(1, 1), m(2, 2));
        let xx = T::ONE + d0 - d1 - d2;
        let yy = T::ONE - d0 + d1 - d2;
        let zz = T::ONE - d0 - d1 + d2;
        let ww = T::ONE + d0 + d1 + d2;
        let max = ww.max(xx).max(yy).max(zz);
        let four = Self::two() * Self::two();

        if ww == max {
            let w4 = (ww * four).sqrt();
            Self::from_components(
                (m(2, 1) - m(1, 2)) / w4,
                (m(0, 2) - m(2, 0)) / w4,
                (m(1, 0) - m(0, 1)) / w4,
                w4 / four,
            )
        } else if xx == max {
            let x4 = (xx * four).sqrt();
            Self::from_components(
                x4 / four,
                (m(1, 0) + m(0, 1)) / x4,
                (m(2, 0) + m(0, 2)) / x4,
                (m(2, 1) - m(1, 2)) / x4,
            )
        } else if yy == max {
            let y4 = (yy * four).sqrt();
            Self::from_components(
                (m(1, 0) + m(0, 1)) / y4,
                y4 / four,
                (m(2, 1) + m(1, 2)) / y4,
                (m(0, 2) - m(2, 0)) / y4,
            )
        } else {
            let z4 = (zz * four).sqrt();
            Self::from_components(
                (m(2, 0) + m(0, 2)) / z4,
                (m(2, 1) + m(1, 2)) / z4,
                z4 / four,
                (m(1, 0) - m(0, 1)) / z4,
            )
        }
    }

    /// Returns the 3x3 rotation matrix of the normalized quaternion.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathpack_linalg::*;
    /// # use approx::assert_relative_eq;
    /// let q = Quat::from_rotation_x(0.3);
    /// let m = q.to_mat3();
    /// assert_relative_eq!(m * Vec3d::Y, q.rotate(Vec3d::Y), epsilon = 1e-12);
    /// assert_relative_eq!(Quat::from_mat3(&m), q, epsilon = 1e-12);
    /// ```
    pub fn to_mat3(&self) -> Mat3<T> {
        let Self { vec } = self.normalize();
        let [x, y, z, w] = vec.into_array();
        let two = Self::two();

        Matrix::from_rows([
            [
                w * w + x * x - y * y - z * z,
                two * (x * y - w * z),
                two * (x * z + w * y),
            ],
            [
                two * (x * y + w * z),
                w * w - x * x + y * y - z * z,
                two * (y * z - w * x),
            ],
            [
                two * (x * z - w * y),
                two * (y * z + w * x),
                w * w - x * x - y * y + z * z,
            ],
        ])
    }

    /// Returns the homogeneous 4x4 rotation matrix of the normalized quaternion.
    pub fn to_mat4(&self) -> Mat4<T> {
        self.to_mat3().resize_homogeneous()
    }

    /// Returns the squared norm of this quaternion.
    pub fn norm2(&self) -> T {
        self.vec.norm2()
    }

    /// Returns the norm (length) of this quaternion.
    ///
    /// If the norm is not equal to one, multiplying a vector with this quaternion will scale the
    /// vector in addition to rotating it.
    #[doc(alias = "length", alias = "magnitude")]
    pub fn norm(&self) -> T
    where
        T: Sqrt,
    {
        self.vec.norm()
    }

    /// Returns a normalized copy of this quaternion (whose norm equals one).
    pub fn normalize(self) -> Self {
        Self {
            vec: self.vec.normalize(),
        }
    }

    /// Returns `(-x, -y, -z, w)`.
    pub fn conjugate(self) -> Self {
        let [x, y, z, w] = self.vec.into_array();
        Self::from_components(-x, -y, -z, w)
    }

    /// Returns the multiplicative inverse (the conjugate divided by the squared norm).
    ///
    /// The zero quaternion is returned unchanged.
    pub fn inverse(self) -> Self {
        let n2 = self.norm2();
        if n2 == T::ZERO {
            return self;
        }
        self.conjugate() / n2
    }

    /// Four-dimensional dot product of the components.
    pub fn dot(self, other: Self) -> T {
        self.vec.dot(other.vec)
    }

    /// Returns the normalized rotation axis.
    ///
    /// For a rotation by (almost) zero the axis is undefined and the X axis is returned.
    pub fn axis(&self) -> Vec3<T> {
        let [x, y, z, w] = self.normalize().vec.into_array();
        let s2 = T::ONE - w * w;
        if s2 < T::from_f64(EPSILON2) {
            return Vec3::X;
        }
        vec3(x, y, z) / s2.sqrt()
    }

    /// Returns the rotation angle in radians, in `[0, 2π]`.
    pub fn angle(&self) -> T {
        let w = self.normalize().vec[3];
        Self::two() * w.clamp(-T::ONE, T::ONE).acos()
    }

    /// Rotates `v` by the normalized quaternion.
    pub fn rotate(&self, v: Vec3<T>) -> Vec3<T> {
        let [x, y, z, w] = self.normalize().vec.into_array();
        let u = vec3(x, y, z);
        let t = u.cross(v) * Self::two();
        v + t * w + u.cross(t)
    }

    /// Angle of the rotation that takes `self` onto `other`, in `[0, π]`.
    ///
    /// Quaternions `q` and `-q` describe the same rotation and have a distance of zero.
    pub fn distance(self, other: Self) -> T {
        let d = self.normalize().dot(other.normalize()).abs();
        Self::two() * d.min(T::ONE).acos()
    }

    /// Spherical linear interpolation from `self` (at `t = 0`) to `other` (at `t = 1`) along the
    /// shorter arc.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathpack_linalg::*;
    /// # use approx::assert_relative_eq;
    /// let a = Quat::IDENTITY;
    /// let b = Quat::from_rotation_z(1.0);
    /// assert_relative_eq!(a.slerp(b, 0.5), Quat::from_rotation_z(0.5), epsilon = 1e-12);
    /// ```
    pub fn slerp(self, other: Self, t: T) -> Self {
        let a = self.normalize();
        let mut b = other.normalize();
        let mut cos = a.dot(b);
        if cos < T::ZERO {
            b = -b;
            cos = -cos;
        }

        if cos > T::ONE - T::from_f64(EPSILON) {
            // Nearly parallel: fall back to normalized linear interpolation.
            return (a * (T::ONE - t) + b * t).normalize();
        }

        let theta = cos.acos();
        let sin = theta.sin();
        let wa = ((T::ONE - t) * theta).sin() / sin;
        let wb = (t * theta).sin() / sin;
        a * wa + b * wb
    }

    /// Returns the `(roll, pitch, yaw)` Euler angles of the rotation, applied about the X, Y
    /// and Z axes in that order.
    pub fn euler_angles(&self) -> Vec3<T> {
        let [x, y, z, w] = self.normalize().vec.into_array();
        let two = Self::two();

        let roll = (two * (w * x + y * z)).atan2(T::ONE - two * (x * x + y * y));
        let pitch = (two * (w * y - z * x)).clamp(-T::ONE, T::ONE).asin();
        let yaw = (two * (w * z + x * y)).atan2(T::ONE - two * (y * y + z * z));
        vec3(roll, pitch, yaw)
    }

    /// Creates a quaternion from `(roll, pitch, yaw)` Euler angles; the inverse of
    /// [`Quat::euler_angles`].
    #[doc(alias = "euler")]
    pub fn from_euler_angles(roll: T, pitch: T, yaw: T) -> Self {
        Self::from_rotation_z(yaw) * Self::from_rotation_y(pitch) * Self::from_rotation_x(roll)
    }
}

impl<T: Zero + One> Default for Quat<T> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T: fmt::Debug> fmt::Debug for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Quat").field(&self.vec).finish()
    }
}

/// Renders `x y z w` on one line, each component in a fixed-width field.
impl<T: fmt::Display> fmt::Display for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::write_row(f, self.vec.as_slice())
    }
}

impl<T: Number> From<Quat<T>> for Vector<T, 4> {
    fn from(q: Quat<T>) -> Self {
        q.vec
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::{scalar::FRAC_PI_2, scalar::PI, Vec3d};

    use super::*;

    #[test]
    fn fields() {
        let mut q = Quat::from_components(1.0, 2.0, 3.0, 4.0);
        assert_eq!((q.x, q.y, q.z, q.w), (1.0, 2.0, 3.0, 4.0));
        q.w = 0.5;
        assert_eq!(q[3], 0.5);
        assert_eq!(Quatd::default(), Quat::IDENTITY);
    }

    #[test]
    fn hamilton_product() {
        let i = Quat::from_components(1.0, 0.0, 0.0, 0.0);
        let j = Quat::from_components(0.0, 1.0, 0.0, 0.0);
        let k = Quat::from_components(0.0, 0.0, 1.0, 0.0);
        assert_eq!(i * j, k);
        assert_eq!(j * i, -k);
        assert_eq!(i * i, -Quatd::IDENTITY);
        assert_eq!(k * Quat::IDENTITY, k);
    }

    #[test]
    fn composition_matches_matrices() {
        let a = Quat::from_axis_angle(vec3(1.0, 2.0, 0.5), 0.7);
        let b = Quat::from_axis_angle(vec3(-1.0, 0.0, 1.0), 1.9);
        let v = vec3(0.3, -1.2, 2.0);
        assert_relative_eq!((a * b).rotate(v), a.rotate(b.rotate(v)), epsilon = 1e-12);
        assert_relative_eq!(
            (a * b).to_mat3(),
            a.to_mat3() * b.to_mat3(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn matrix_round_trip_all_branches() {
        // Rotations by π about each axis exercise every branch of the extraction.
        for q in [
            Quat::from_rotation_x(0.4),
            Quat::from_rotation_x(PI),
            Quat::from_rotation_y(PI),
            Quat::from_rotation_z(PI),
        ] {
            let back = Quat::from_mat4(&q.to_mat4());
            assert_relative_eq!(back.distance(q), 0.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn inverse_and_conjugate() {
        let q = Quat::from_components(1.0, -2.0, 0.5, 3.0);
        assert_relative_eq!(q * q.inverse(), Quat::IDENTITY, epsilon = 1e-12);
        assert_eq!(q.conjugate().conjugate(), q);
        let u = q.normalize();
        assert_relative_eq!(u.inverse(), u.conjugate(), epsilon = 1e-12);
    }

    #[test]
    fn axis_angle_round_trip() {
        let axis = vec3(0.0, 3.0, 4.0);
        let q = Quat::from_axis_angle(axis, 1.2);
        assert_relative_eq!(q.axis(), axis.normalize(), epsilon = 1e-12);
        assert_relative_eq!(q.angle(), 1.2, epsilon = 1e-12);
        assert_eq!(Quatd::IDENTITY.axis(), Vec3d::X);
    }

    #[test]
    fn antiparallel_vectors() {
        let q = Quat::from_vectors(Vec3d::X, -Vec3d::X);
        assert_relative_eq!(q.rotate(Vec3d::X), -Vec3d::X, epsilon = 1e-12);
        assert_relative_eq!(q.angle(), PI, epsilon = 1e-12);
    }

    #[test]
    fn euler() {
        let q = Quat::from_euler_angles(0.1, -0.4, 1.3);
        assert_relative_eq!(q.euler_angles(), vec3(0.1, -0.4, 1.3), epsilon = 1e-12);
        assert_relative_eq!(
            Quat::from_rotation_y(FRAC_PI_2).euler_angles().y,
            FRAC_PI_2,
            epsilon = 1e-6
        );
    }

    #[test]
    fn distance_ignores_sign() {
        let q = Quat::from_rotation_z(0.3);
        assert_relative_eq!(q.distance(-q), 0.0, epsilon = 1e-6);
        assert_relative_eq!(q.distance(Quat::IDENTITY), 0.3, epsilon = 1e-12);
    }

    #[test]
    fn slerp_endpoints() {
        let a = Quat::from_rotation_x(0.2);
        let b = Quat::from_rotation_y(1.1);
        assert_relative_eq!(a.slerp(b, 0.0), a, epsilon = 1e-12);
        assert_relative_eq!(a.slerp(b, 1.0), b, epsilon = 1e-12);
        assert_relative_eq!(a.slerp(a, 0.5), a, epsilon = 1e-12);
    }
}
