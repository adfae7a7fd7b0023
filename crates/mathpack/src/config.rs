//! Process-wide defaults read from environment variables.

use std::env::{self, VarError};

use once_cell::sync::Lazy;

const DEFAULT_MAX_ITERATIONS: usize = 0;
const DEFAULT_EPSILON: f64 = f64::EPSILON;

static MAX_ITERATIONS: Lazy<usize> = Lazy::new(|| match env::var("MATHPACK_MAX_ITERATIONS") {
    Ok(v) => match v.trim().parse() {
        Ok(n) => {
            log::debug!("MATHPACK_MAX_ITERATIONS={n}");
            n
        }
        Err(e) => {
            log::warn!("invalid value set for `MATHPACK_MAX_ITERATIONS` variable: '{v}' ({e}); using {DEFAULT_MAX_ITERATIONS}");
            DEFAULT_MAX_ITERATIONS
        }
    },
    Err(VarError::NotPresent) => DEFAULT_MAX_ITERATIONS,
    Err(VarError::NotUnicode(s)) => {
        log::warn!(
            "invalid value set for `MATHPACK_MAX_ITERATIONS` variable: {}; using {DEFAULT_MAX_ITERATIONS}",
            s.to_string_lossy()
        );
        DEFAULT_MAX_ITERATIONS
    }
});

static EPSILON: Lazy<f64> = Lazy::new(|| match env::var("MATHPACK_EPSILON") {
    Ok(v) => match v.trim().parse::<f64>() {
        Ok(eps) if eps.is_finite() && eps > 0.0 => {
            log::debug!("MATHPACK_EPSILON={eps}");
            eps
        }
        _ => {
            log::warn!("invalid value set for `MATHPACK_EPSILON` variable: '{v}'; using {DEFAULT_EPSILON}");
            DEFAULT_EPSILON
        }
    },
    Err(VarError::NotPresent) => DEFAULT_EPSILON,
    Err(VarError::NotUnicode(s)) => {
        log::warn!(
            "invalid value set for `MATHPACK_EPSILON` variable: {}; using {DEFAULT_EPSILON}",
            s.to_string_lossy()
        );
        DEFAULT_EPSILON
    }
});

/// Convergence settings of the iterative decompositions.
///
/// [`Default`] reads `MATHPACK_MAX_ITERATIONS` and `MATHPACK_EPSILON`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationSettings {
    /// Maximum number of iterations. `0` means no limit.
    pub max_iterations: usize,
    /// Tolerance below which an off-diagonal element counts as zero.
    pub epsilon: f64,
}

impl IterationSettings {
    /// Settings from the environment.
    pub fn from_env() -> Self {
        Self {
            max_iterations: *MAX_ITERATIONS,
            epsilon: *EPSILON,
        }
    }

    pub fn with_max_iterations(self, max_iterations: usize) -> Self {
        Self {
            max_iterations,
            ..self
        }
    }

    pub fn with_epsilon(self, epsilon: f64) -> Self {
        Self { epsilon, ..self }
    }
}

impl Default for IterationSettings {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders() {
        let settings = IterationSettings::default()
            .with_max_iterations(50)
            .with_epsilon(1e-10);
        assert_eq!(settings.max_iterations, 50);
        assert_eq!(settings.epsilon, 1e-10);
    }
}
