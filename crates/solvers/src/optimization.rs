//! Solvers for optimization problems — minimizing a scalar objective.
//!
//! A smooth objective has zero slope at its minimum, so minimization here is
//! root-finding on the derivative. Solvers take a [`TwiceDifferentiable`]
//! function and search for `x` with `f'(x) = 0`.
//!
//! # Solvers
//!
//! - [`newton`] — Newton iteration `x ← x − f'(x)/f''(x)`
//!
//! [`TwiceDifferentiable`]: tangent_core::TwiceDifferentiable

pub mod newton;
