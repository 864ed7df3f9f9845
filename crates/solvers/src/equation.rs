//! Solvers for equation problems — finding roots of scalar functions.
//!
//! A root is an `x` with `f(x) = 0`. Solvers in this module take a
//! [`Differentiable`] function and drive `|f(x)|` below a tolerance.
//!
//! # Solvers
//!
//! - [`newton`] — tangent-line iteration `x ← x − f(x)/f'(x)`
//!
//! [`Differentiable`]: tangent_core::Differentiable

pub mod newton;
