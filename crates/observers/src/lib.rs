//! Reusable observers for Tangent's Newton solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the root-finding and minimization solvers.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasIterate`], [`HasResidual`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`History`] — records every iterate, with helpers for measuring the
//!   empirical order of convergence
//! - [`DivergenceGuard`] — stops a solve when the iterate becomes non-finite
//!   or leaves a bounded region
//!
//! [`Observer`]: tangent_core::Observer
//! [`HasIterate`]: traits::HasIterate
//! [`HasResidual`]: traits::HasResidual
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod guard;
mod history;

pub use guard::DivergenceGuard;
pub use history::{History, Record};
