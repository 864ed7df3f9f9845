use thiserror::Error;

use super::ConfigError;

/// Errors that can occur during Newton solving.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// The iteration bound was reached without `|f(x)| < tol`.
    ///
    /// Carries the last iterate so callers can retry from it with a larger
    /// bound or pick a different starting point.
    #[error("failed to converge in {max_iters} iterations (x = {x}, f(x) = {value})")]
    IterationLimitExceeded { max_iters: usize, x: f64, value: f64 },
}
