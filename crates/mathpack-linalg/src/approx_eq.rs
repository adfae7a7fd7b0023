//! Approximate equality via the [`approx`] traits.
//!
//! Compound values are considered equal if all of their elements are. The heap-allocated types
//! additionally require equal shapes.
//!
//! ```
//! # use mathpack_linalg::*;
//! use approx::{assert_relative_eq, assert_abs_diff_ne};
//!
//! let third = vec3(1.0, 1.0, 1.0) / 3.0;
//! assert_relative_eq!(third * 3.0, vec3(1.0, 1.0, 1.0));
//! assert_abs_diff_ne!(MatrixN::zeros(2, 2), MatrixN::zeros(1, 4));
//! ```

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{Matrix, MatrixN, Quat, Vector, VectorN};

fn all_abs_diff_eq<T: AbsDiffEq>(a: &[T], b: &[T], epsilon: T::Epsilon) -> bool
where
    T::Epsilon: Clone,
{
    a.len() == b.len()
        && a.iter()
            .zip(b)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon.clone()))
}

fn all_relative_eq<T: RelativeEq>(
    a: &[T],
    b: &[T],
    epsilon: T::Epsilon,
    max_relative: T::Epsilon,
) -> bool
where
    T::Epsilon: Clone,
{
    a.len() == b.len()
        && a.iter()
            .zip(b)
            .all(|(a, b)| a.relative_eq(b, epsilon.clone(), max_relative.clone()))
}

fn all_ulps_eq<T: UlpsEq>(a: &[T], b: &[T], epsilon: T::Epsilon, max_ulps: u32) -> bool
where
    T::Epsilon: Clone,
{
    a.len() == b.len()
        && a.iter()
            .zip(b)
            .all(|(a, b)| a.ulps_eq(b, epsilon.clone(), max_ulps))
}

/// Implements the three `approx` traits for a type whose elements are reachable as a slice.
macro_rules! approx_impls {
    (
        impl[$($generics:tt)*] $ty:ty where $elem:ty;
        |$this:ident, $other:ident| $slices:expr, $same_shape:expr
    ) => {
        impl<$($generics)*> AbsDiffEq for $ty
        where
            $elem: AbsDiffEq,
            <$elem as AbsDiffEq>::Epsilon: Clone,
        {
            type Epsilon = <$elem as AbsDiffEq>::Epsilon;

            fn default_epsilon() -> Self::Epsilon {
                <$elem>::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                let ($this, $other) = (self, other);
                let (a, b) = $slices;
                $same_shape && all_abs_diff_eq(a, b, epsilon)
            }
        }

        impl<$($generics)*> RelativeEq for $ty
        where
            $elem: RelativeEq,
            <$elem as AbsDiffEq>::Epsilon: Clone,
        {
            fn default_max_relative() -> Self::Epsilon {
                <$elem>::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                let ($this, $other) = (self, other);
                let (a, b) = $slices;
                $same_shape && all_relative_eq(a, b, epsilon, max_relative)
            }
        }

        impl<$($generics)*> UlpsEq for $ty
        where
            $elem: UlpsEq,
            <$elem as AbsDiffEq>::Epsilon: Clone,
        {
            fn default_max_ulps() -> u32 {
                <$elem>::default_max_ulps()
            }

            fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
                let ($this, $other) = (self, other);
                let (a, b) = $slices;
                $same_shape && all_ulps_eq(a, b, epsilon, max_ulps)
            }
        }
    };
}

approx_impls!(
    impl[T, const N: usize] Vector<T, N> where T;
    |a, b| (a.as_slice(), b.as_slice()), true
);
approx_impls!(
    impl[T, const R: usize, const C: usize] Matrix<T, R, C> where T;
    |a, b| (a.as_slice(), b.as_slice()), true
);
approx_impls!(
    impl[T] Quat<T> where T;
    |a, b| (a.as_vec().as_slice(), b.as_vec().as_slice()), true
);
approx_impls!(
    impl[] VectorN where f64;
    |a, b| (a.as_slice(), b.as_slice()), true
);
approx_impls!(
    impl[] MatrixN where f64;
    |a, b| (a.as_slice(), b.as_slice()), a.rows() == b.rows() && a.cols() == b.cols()
);

#[cfg(test)]
mod tests {
    use approx::{abs_diff_eq, assert_abs_diff_eq, assert_relative_eq, assert_ulps_eq};

    use crate::{vec2, Mat3d, Quat};

    use super::*;

    #[test]
    fn fixed_types() {
        assert_abs_diff_eq!(vec2(1.0, 2.0), vec2(1.05, 2.0), epsilon = 0.1);
        assert!(!abs_diff_eq!(vec2(1.0, 2.0), vec2(1.2, 2.0), epsilon = 0.1));
        assert_relative_eq!(Mat3d::identity() * 1.0000000000000002, Mat3d::identity());
        assert_ulps_eq!(Quat::<f64>::IDENTITY, Quat::IDENTITY);
    }

    #[test]
    fn dynamic_shapes_must_match() {
        let row = MatrixN::zeros(1, 4);
        let square = MatrixN::zeros(2, 2);
        assert!(!abs_diff_eq!(row, square));
        assert!(!abs_diff_eq!(VectorN::zeros(2), VectorN::zeros(3)));
        assert_abs_diff_eq!(VectorN::zeros(3), VectorN::zeros(3));
    }
}
