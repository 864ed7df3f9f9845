//! Core traits and types for Tangent.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Differentiable`] — a scalar function paired with its derivative
//! - [`TwiceDifferentiable`] — a scalar function with first and second
//!   derivatives
//! - [`WithDerivative`], [`WithSecondDerivative`] — closure-backed
//!   implementations of the function traits
//! - [`Gradient`] — views the derivative of a function as a function in its
//!   own right, turning minimization into root-finding
//! - [`Observer`] — receives solver events and optionally returns control actions

mod function;
mod gradient;
mod observer;

pub use function::{Differentiable, TwiceDifferentiable, WithDerivative, WithSecondDerivative};
pub use gradient::Gradient;
pub use observer::Observer;
