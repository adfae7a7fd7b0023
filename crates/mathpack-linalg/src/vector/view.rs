//! Named-field access (`v.x`, `v.y`, ...) for small vectors and quaternions.

use std::ops::{Deref, DerefMut};

use crate::{Quat, Vector};

#[repr(C)]
pub struct XY<T> {
    pub x: T,
    pub y: T,
    _sealed: (),
}

#[repr(C)]
pub struct XYZ<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    _sealed: (),
}

#[repr(C)]
pub struct XYZW<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
    _sealed: (),
}

// Every source type is `repr(transparent)` over `[T; N]`, which has the same layout as the
// `repr(C)` view with `N` fields of type `T` and a trailing ZST.
macro_rules! view {
    ($($src:ty => $view:ident),+ $(,)?) => {
        $(
            impl<T> Deref for $src {
                type Target = $view<T>;

                #[inline]
                fn deref(&self) -> &$view<T> {
                    unsafe { &*(self as *const Self).cast::<$view<T>>() }
                }
            }

            impl<T> DerefMut for $src {
                #[inline]
                fn deref_mut(&mut self) -> &mut $view<T> {
                    unsafe { &mut *(self as *mut Self).cast::<$view<T>>() }
                }
            }
        )+
    };
}

view!(
    Vector<T, 2> => XY,
    Vector<T, 3> => XYZ,
    Vector<T, 4> => XYZW,
    Quat<T> => XYZW,
);
