//! Error types for the solvers and decompositions.

use thiserror::Error;

/// Result type used by the fallible routines in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of an [`Error`], for callers that only need to branch on the kind of
/// failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The routine was called with malformed arguments.
    IllegalArgument,
    /// The matrix is singular or not positive definite.
    Singular,
    /// An iterative routine did not converge.
    NonConvergent,
}

/// Failure reported by a solver or decomposition.
///
/// When a routine fails, any output it was asked to write is left in an unspecified state.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A backend routine rejected its argument at (1-based) `position`.
    #[error("{routine}: argument {position} has an illegal value")]
    IllegalArgument {
        routine: &'static str,
        position: i32,
    },

    /// No usable pivot was found at (1-based) elimination `step`.
    #[error("{routine}: matrix is singular (zero pivot at step {step})")]
    Singular { routine: &'static str, step: usize },

    /// The leading minor of order `order` is not positive definite.
    #[error("matrix is not positive definite (leading minor of order {order})")]
    NotPositiveDefinite { order: usize },

    #[error("{routine}: iteration did not converge")]
    NoConvergence { routine: &'static str },

    /// An output container has the wrong number of elements.
    #[error("output holds {got} elements, expected {expected}")]
    ShapeMismatch { expected: usize, got: usize },
}

impl Error {
    pub fn status(&self) -> Status {
        match self {
            Error::IllegalArgument { .. } | Error::ShapeMismatch { .. } => Status::IllegalArgument,
            Error::Singular { .. } | Error::NotPositiveDefinite { .. } => Status::Singular,
            Error::NoConvergence { .. } => Status::NonConvergent,
        }
    }

    /// Returns the equivalent LAPACK-style status code.
    ///
    /// Argument errors are negative, numerical failures are positive. A
    /// [`ShapeMismatch`][Error::ShapeMismatch] maps to `-1`.
    pub fn info(&self) -> i32 {
        match *self {
            Error::IllegalArgument { position, .. } => -position,
            Error::ShapeMismatch { .. } => -1,
            Error::Singular { step, .. } => step as i32,
            Error::NotPositiveDefinite { order } => order as i32,
            Error::NoConvergence { .. } => 1,
        }
    }

    /// Translates the status code returned by a routine in [`native`][crate::native].
    ///
    /// `failure` builds the routine-specific error for a positive code.
    pub(crate) fn check(
        routine: &'static str,
        info: i32,
        failure: impl FnOnce(usize) -> Error,
    ) -> Result<()> {
        match info {
            0 => Ok(()),
            i if i < 0 => Err(Error::IllegalArgument {
                routine,
                position: -i,
            }
            .logged()),
            i => Err(failure(i as usize).logged()),
        }
    }

    /// Like [`check`][Self::check], for routines without numerical failure modes.
    pub(crate) fn check_args(routine: &'static str, info: i32) -> Result<()> {
        Self::check(routine, info, |position| Error::IllegalArgument {
            routine,
            position: position as i32,
        })
    }

    /// Writes the error to the log and returns it.
    pub(crate) fn logged(self) -> Self {
        match self.status() {
            Status::IllegalArgument => log::error!("{self}"),
            Status::Singular | Status::NonConvergent => log::warn!("{self}"),
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        let err = Error::IllegalArgument {
            routine: "dgetrf",
            position: 4,
        };
        assert_eq!(err.status(), Status::IllegalArgument);
        assert_eq!(err.info(), -4);

        let err = Error::NotPositiveDefinite { order: 2 };
        assert_eq!(err.status(), Status::Singular);
        assert_eq!(err.info(), 2);

        let err = Error::NoConvergence { routine: "dsyev" };
        assert_eq!(err.status(), Status::NonConvergent);
        assert!(err.info() > 0);
    }

    #[test]
    fn check_info() {
        assert_eq!(Error::check("dgetrf", 0, |_| unreachable!()), Ok(()));
        assert_eq!(
            Error::check("dgetrf", -3, |_| unreachable!()),
            Err(Error::IllegalArgument {
                routine: "dgetrf",
                position: 3
            })
        );
        assert_eq!(
            Error::check("dgetrf", 2, |step| Error::Singular {
                routine: "dgetrf",
                step
            }),
            Err(Error::Singular {
                routine: "dgetrf",
                step: 2
            })
        );
    }

    #[test]
    fn messages() {
        let err = Error::Singular {
            routine: "gauss_jordan",
            step: 3,
        };
        assert_eq!(
            err.to_string(),
            "gauss_jordan: matrix is singular (zero pivot at step 3)"
        );
    }
}
