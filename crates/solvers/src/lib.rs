//! Newton solvers for scalar functions.
//!
//! - [`equation::newton`] — root-finding with Newton's method, in a bounded
//!   (`solve`) and an unbounded (`solve_unbounded`) variant
//! - [`optimization::newton`] — minimization by Newton iteration on the
//!   derivative

pub mod equation;
pub mod optimization;
