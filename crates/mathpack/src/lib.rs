//! Dense linear system solvers and matrix decompositions.
//!
//! The value types live in [`mathpack_linalg`], re-exported here as [`linalg`]. This crate adds
//! the algorithms operating on them:
//!
//! * [`gauss_jordan`], [`gauss_elimination`] and [`tridiagonal`] solve linear systems directly.
//! * [`lls`] fits over-determined systems in the least-squares sense.
//! * [`LuDecomposition`], [`QrDecomposition`], [`RqDecomposition`], [`CholeskyDecomposition`],
//!   [`Svd`] and [`SymmetricEigen`] factor a [`MatrixN`][linalg::MatrixN] through the
//!   column-major routines in [`native`].
//! * [`solve_quadratic`] and [`solve_cubic`] find the real roots of small polynomials.
//!
//! Numerical failures (singular or indefinite matrices, non-convergence) are returned as an
//! [`Error`] and logged. Malformed calls, such as operands of incompatible shapes, panic.
//!
//! # Environment Variables
//!
//! The iterative routines ([`Svd`] and [`SymmetricEigen`]) read their defaults from the
//! environment the first time they are used:
//!
//! * `MATHPACK_MAX_ITERATIONS`: maximum number of iterations before giving up with
//!   [`Error::NoConvergence`]. `0`, the default, iterates until convergence.
//! * `MATHPACK_EPSILON`: convergence tolerance. Defaults to [`f64::EPSILON`].
//!
//! Invalid values are logged and ignored. Use [`IterationSettings`] to override them per call.

use log::LevelFilter;

pub use mathpack_linalg as linalg;

mod band;
pub mod config;
mod decomp;
mod error;
mod gauss;
mod lls;
pub mod native;
mod poly;

pub use band::*;
pub use config::IterationSettings;
pub use decomp::*;
pub use error::*;
pub use gauss::*;
pub use lls::*;
pub use poly::*;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = LevelFilter::Debug;
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_PKG_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// The calling crate and mathpack will log at *debug* level. `RUST_LOG` is honored and takes
/// precedence.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
