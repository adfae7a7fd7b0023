use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::{traits::Number, Matrix, Vector};

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (r, c): (usize, usize)) -> &T {
        &self.0[r][c]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut T {
        &mut self.0[r][c]
    }
}

/// Linear indexing in storage order, `row * C + col`.
impl<T, const R: usize, const C: usize> Index<usize> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.as_slice()[i]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<usize> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.as_mut_slice()[i]
    }
}

impl<T: PartialEq<U>, U, const R: usize, const C: usize> PartialEq<Matrix<U, R, C>>
    for Matrix<T, R, C>
{
    fn eq(&self, other: &Matrix<U, R, C>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, const R: usize, const C: usize> Eq for Matrix<T, R, C> {}

impl<T: Number, const R: usize, const C: usize> Neg for Matrix<T, R, C> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(Neg::neg)
    }
}

macro_rules! elementwise {
    ($($op:ident $method:ident $assign_op:ident $assign_method:ident),+) => {
        $(
            impl<T: Number, const R: usize, const C: usize> $op for Matrix<T, R, C> {
                type Output = Self;

                fn $method(self, rhs: Self) -> Self {
                    Matrix::from_fn(|r, c| self.0[r][c].$method(rhs.0[r][c]))
                }
            }

            impl<T: Number, const R: usize, const C: usize> $assign_op for Matrix<T, R, C> {
                fn $assign_method(&mut self, rhs: Self) {
                    *self = (*self).$method(rhs);
                }
            }
        )+
    };
}

elementwise!(Add add AddAssign add_assign, Sub sub SubAssign sub_assign);

macro_rules! scaling {
    ($($op:ident $method:ident $assign_op:ident $assign_method:ident),+) => {
        $(
            impl<T: Number, const R: usize, const C: usize> $op<T> for Matrix<T, R, C> {
                type Output = Self;

                fn $method(self, s: T) -> Self {
                    self.map(|elem| elem.$method(s))
                }
            }

            impl<T: Number, const R: usize, const C: usize> $assign_op<T> for Matrix<T, R, C> {
                fn $assign_method(&mut self, s: T) {
                    *self = (*self).$method(s);
                }
            }
        )+
    };
}

scaling!(Mul mul MulAssign mul_assign, Div div DivAssign div_assign);

/// `A · x`, with `x` as a column.
impl<T: Number, const R: usize, const C: usize> Mul<Vector<T, C>> for Matrix<T, R, C> {
    type Output = Vector<T, R>;

    fn mul(self, x: Vector<T, C>) -> Vector<T, R> {
        Vector::from_fn(|r| self.row(r).dot(x))
    }
}

/// `xᵀ · A`, with `x` as a row.
impl<T: Number, const R: usize, const C: usize> Mul<Matrix<T, R, C>> for Vector<T, R> {
    type Output = Vector<T, C>;

    fn mul(self, a: Matrix<T, R, C>) -> Vector<T, C> {
        Vector::from_fn(|c| self.dot(a.col(c)))
    }
}

/// Homogeneous transforms: an `N×N` matrix applied to an `(N-1)`-element point.
///
/// The point is extended with `w = 1`, multiplied, and the result divided by its last
/// component. A result with `w = 0` (a point at infinity) yields non-finite components.
macro_rules! homogeneous {
    ($($n:literal => $p:literal),+) => {
        $(
            impl<T: Number> Mul<Vector<T, $p>> for Matrix<T, $n, $n> {
                type Output = Vector<T, $p>;

                fn mul(self, point: Vector<T, $p>) -> Vector<T, $p> {
                    let h = self * point.extend(T::ONE);
                    h.truncate() / h[$p]
                }
            }

            impl<T: Number> Mul<Matrix<T, $n, $n>> for Vector<T, $p> {
                type Output = Vector<T, $p>;

                fn mul(self, a: Matrix<T, $n, $n>) -> Vector<T, $p> {
                    let h = self.extend(T::ONE) * a;
                    h.truncate() / h[$p]
                }
            }
        )+
    };
}

homogeneous!(3 => 2, 4 => 3);

impl<T: Number, const M: usize, const K: usize, const N: usize> Mul<Matrix<T, K, N>>
    for Matrix<T, M, K>
{
    type Output = Matrix<T, M, N>;

    fn mul(self, rhs: Matrix<T, K, N>) -> Matrix<T, M, N> {
        Matrix::from_fn(|r, c| self.row(r).dot(rhs.col(c)))
    }
}

/// `A *= B` is `A = A · B`; the shape of `A` is preserved, so `B` must be square.
impl<T: Number, const R: usize, const C: usize> MulAssign<Matrix<T, C, C>> for Matrix<T, R, C> {
    fn mul_assign(&mut self, rhs: Matrix<T, C, C>) {
        *self = *self * rhs;
    }
}

macro_rules! scalar_lhs_mul {
    ($($t:ty),+) => {
        $(
            impl<const R: usize, const C: usize> Mul<Matrix<$t, R, C>> for $t {
                type Output = Matrix<$t, R, C>;

                fn mul(self, m: Matrix<$t, R, C>) -> Matrix<$t, R, C> {
                    m * self
                }
            }
        )+
    };
}

scalar_lhs_mul!(f32, f64);
