//! Indexing, comparison and arithmetic operators for [`Vector`].
//!
//! Addition and subtraction act element-wise, `*` and `/` scale by a scalar. There is no
//! element-wise vector product: use [`Vector::dot`], [`Vector::cross`] or [`Vector::outer`].

use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.as_slice()[i]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.as_mut_slice()[i]
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N> {
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, const N: usize> Eq for Vector<T, N> {}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for Vector<T, N> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == &other[..]
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<Vector<U, N>> for [T; N] {
    fn eq(&self, other: &Vector<U, N>) -> bool {
        &self[..] == other.as_slice()
    }
}

/// A slice of a different length is never equal.
impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U]> for Vector<T, N> {
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T: Neg, const N: usize> Neg for Vector<T, N> {
    type Output = Vector<T::Output, N>;

    fn neg(self) -> Self::Output {
        self.map(Neg::neg)
    }
}

macro_rules! elementwise {
    ($($op:ident $method:ident $assign_op:ident $assign_method:ident),+) => {
        $(
            impl<T: $op, const N: usize> $op for Vector<T, N> {
                type Output = Vector<T::Output, N>;

                fn $method(self, rhs: Self) -> Self::Output {
                    self.zip(rhs).map(|(l, r)| l.$method(r))
                }
            }

            impl<T: $op + Copy, const N: usize> $op<&Vector<T, N>> for &Vector<T, N> {
                type Output = Vector<T::Output, N>;

                fn $method(self, rhs: &Vector<T, N>) -> Self::Output {
                    (*self).$method(*rhs)
                }
            }

            impl<T: $assign_op, const N: usize> $assign_op for Vector<T, N> {
                fn $assign_method(&mut self, rhs: Self) {
                    for (l, r) in self.as_mut_slice().iter_mut().zip(rhs.into_array()) {
                        l.$assign_method(r);
                    }
                }
            }
        )+
    };
}

elementwise!(Add add AddAssign add_assign, Sub sub SubAssign sub_assign);

macro_rules! scaling {
    ($($op:ident $method:ident $assign_op:ident $assign_method:ident),+) => {
        $(
            impl<T: $op + Copy, const N: usize> $op<T> for Vector<T, N> {
                type Output = Vector<T::Output, N>;

                fn $method(self, s: T) -> Self::Output {
                    self.map(|elem| elem.$method(s))
                }
            }

            impl<T: $assign_op + Copy, const N: usize> $assign_op<T> for Vector<T, N> {
                fn $assign_method(&mut self, s: T) {
                    for elem in self.as_mut_slice() {
                        elem.$assign_method(s);
                    }
                }
            }
        )+
    };
}

scaling!(Mul mul MulAssign mul_assign, Div div DivAssign div_assign);

macro_rules! scalar_lhs_mul {
    ($($t:ty),+) => {
        $(
            impl<const N: usize> Mul<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                fn mul(self, v: Vector<$t, N>) -> Vector<$t, N> {
                    v * self
                }
            }
        )+
    };
}

scalar_lhs_mul!(f32, f64);

#[cfg(test)]
mod tests {
    use crate::{vec3, Vec3d};

    #[test]
    fn arithmetic() {
        let a = vec3(1.0, 2.0, 3.0);
        let b = vec3(0.5, -1.0, 2.0);
        assert_eq!(a + b, [1.5, 1.0, 5.0]);
        assert_eq!(&a - &b, [0.5, 3.0, 1.0]);
        assert_eq!(-a, [-1.0, -2.0, -3.0]);
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(a / 2.0, [0.5, 1.0, 1.5]);

        let mut c = a;
        c += b;
        c -= a;
        assert_eq!(c, b);
        c *= 4.0;
        c /= 2.0;
        assert_eq!(c, b + b);
    }

    #[test]
    fn comparisons() {
        let v = vec3(1.0, 2.0, 3.0);
        assert_eq!(v, [1.0, 2.0, 3.0]);
        assert_eq!([1.0, 2.0, 3.0], v);
        assert!(v == [1.0, 2.0, 3.0][..]);
        assert!(v != [1.0, 2.0][..]);
        assert_ne!(v, Vec3d::ZERO);
    }
}
