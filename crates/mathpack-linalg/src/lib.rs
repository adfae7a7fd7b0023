//! Vector, matrix and quaternion value types for the mathpack solvers.
//!
//! # Overview
//!
//! - [`Vector`] and [`Matrix`] are small, `Copy`, const-generic types stored inline. They are
//!   generic over the element type; the solvers in `mathpack` use them with [`f64`].
//! - [`VectorN`] and [`MatrixN`] own heap buffers whose shape is chosen at runtime.
//! - [`Quat`] represents 3D rotations and converts to and from [`Mat3`], [`Mat4`] and
//!   [`MatrixN`].
//! - [`Dense`] and [`DenseMut`] give every `f64` type a common row-major view, which the
//!   [`access`] functions and the [`kernel`] build on.
//!
//! # Layout
//!
//! All matrices are row-major: the element at `(row, col)` lives at linear index
//! `row * cols + col`. Vectors are columns.
//!
//! # Conversions
//!
//! Changing the number of elements is never implicit. Widening into the heap-allocated types
//! uses [`From`]; everything else goes through named methods such as [`Vector::truncate`],
//! [`Vector::resize`], [`Matrix::resize_homogeneous`] and [`MatrixN::to_matrix`].
//!
//! # Display
//!
//! The [`Display`][std::fmt::Display] impls print each element right-aligned in a
//! [`DISPLAY_WIDTH`][scalar::DISPLAY_WIDTH]-wide field with
//! [`PRECISION`][scalar::PRECISION] decimals, one matrix row per line. A width or precision
//! given in the format string takes precedence.

pub mod access;
mod approx_eq;
mod convert;
mod dense;
pub mod kernel;
mod matrix;
mod matrix_n;
mod quat;
mod render;
pub mod scalar;
mod traits;
mod vector;
mod vector_n;

pub use dense::*;
pub use matrix::*;
pub use matrix_n::*;
pub use quat::*;
pub use traits::*;
pub use vector::*;
pub use vector_n::*;
