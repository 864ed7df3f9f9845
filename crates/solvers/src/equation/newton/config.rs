use thiserror::Error;

/// Default convergence threshold on `|f(x)|`.
pub const DEFAULT_TOL: f64 = 1e-6;

/// Default iteration bound for the bounded solver.
pub const DEFAULT_MAX_ITERS: usize = 100_000;

/// Configuration for the Newton solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    tol: f64,
}

/// Errors that can occur when validating a Newton solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tol must be finite and positive")]
    Tol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: DEFAULT_MAX_ITERS,
            tol: DEFAULT_TOL,
        }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance.
    ///
    /// A `max_iters` of zero is allowed; the bounded solver then fails
    /// without taking a step.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is non-finite, zero, or negative.
    pub fn new(max_iters: usize, tol: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            max_iters,
            tol: validate_tol(tol)?,
        })
    }

    /// Returns a copy with a different tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is non-finite, zero, or negative.
    pub fn with_tol(self, tol: f64) -> Result<Self, ConfigError> {
        Self::new(self.max_iters, tol)
    }

    /// Returns a copy with a different iteration bound.
    #[must_use]
    pub fn with_max_iters(self, max_iters: usize) -> Self {
        Self { max_iters, ..self }
    }

    /// Returns the maximum number of Newton updates.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the convergence threshold on `|f(x)|`.
    #[must_use]
    pub fn tol(&self) -> f64 {
        self.tol
    }
}

pub(super) fn validate_tol(tol: f64) -> Result<f64, ConfigError> {
    if tol.is_finite() && tol > 0.0 {
        Ok(tol)
    } else {
        Err(ConfigError::Tol)
    }
}
