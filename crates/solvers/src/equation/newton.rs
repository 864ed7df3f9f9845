//! Newton's method for scalar root-finding.
//!
//! # Algorithm
//!
//! Newton's method replaces `f` by its tangent line at the current iterate
//! and jumps to where that line crosses zero:
//!
//! ```text
//! x_{n+1} = x_n - f(x_n) / f'(x_n)
//! ```
//!
//! The tangent line is the first-order Taylor expansion of `f`, so near a
//! simple root the error roughly squares on every step (quadratic
//! convergence).
//!
//! # Variants
//!
//! - [`solve`] / [`solve_unobserved`] — bounded: performs at most
//!   [`Config::max_iters`] updates and stops as soon as `|f(x)| < tol`.
//!   Fails with [`Error::IterationLimitExceeded`] otherwise.
//! - [`solve_unbounded`] — iterates while `|f(x)| > tol` with no bound.
//!
//! The comparisons differ at the boundary: when `|f(x)|` equals `tol`
//! exactly, the unbounded variant stops and the bounded variant keeps going.
//!
//! # Limitations
//!
//! - **Local**: convergence depends on starting near a root.
//! - **No root, no stop**: if `f` has no root near `x0`, the sequence
//!   wanders or diverges. The bounded variant reports this as an error; the
//!   unbounded variant never returns.
//! - **Zero derivative**: `f'(x) == 0` is not guarded. The division yields
//!   `±inf` or `NaN` and the non-finite value flows through the iteration.
//!   In the bounded variant `|NaN| < tol` is false, so the solve runs out of
//!   iterations. In the unbounded variant `|NaN| > tol` is also false, so the
//!   loop exits and the non-finite iterate is returned. Attach an observer
//!   that checks [`Event::is_finite`] to stop at the first bad step.
//!
//! # Observer Events
//!
//! The bounded solver emits one [`Event`] after every update, before the
//! convergence check. Observers can return [`Action::StopEarly`] to halt and
//! receive the current iterate with [`Status::StoppedByObserver`].

mod action;
mod config;
mod error;
mod event;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError, DEFAULT_MAX_ITERS, DEFAULT_TOL};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use tangent_core::{Differentiable, Observer};

/// Finds a root of `function` starting from `x0`, with at most
/// `config.max_iters()` updates.
///
/// Each iteration updates `x ← x − f(x)/f'(x)` and returns as soon as
/// `|f(x)| < tol`. The starting point itself is never tested, so at least
/// one update is always taken when `max_iters > 0`.
///
/// # Errors
///
/// Returns [`Error::IterationLimitExceeded`] if the bound is reached without
/// convergence, including immediately when `max_iters` is zero.
pub fn solve<F, Obs>(
    function: &F,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Differentiable + ?Sized,
    Obs: Observer<Event, Action>,
{
    let tol = config.tol();

    let mut x = x0;
    let mut value = function.value(x);

    for iter in 1..=config.max_iters() {
        let x_prev = x;
        let derivative = function.derivative(x_prev);
        let step = value / derivative;

        x = x_prev - step;
        value = function.value(x);

        let event = Event {
            iter,
            x_prev,
            derivative,
            step,
            x,
            value,
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                x,
                value,
                iters: iter,
            });
        }

        if value.abs() < tol {
            return Ok(Solution {
                status: Status::Converged,
                x,
                value,
                iters: iter,
            });
        }
    }

    Err(Error::IterationLimitExceeded {
        max_iters: config.max_iters(),
        x,
        value,
    })
}

/// Finds a root without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns [`Error::IterationLimitExceeded`] if the bound is reached without
/// convergence.
pub fn solve_unobserved<F>(function: &F, x0: f64, config: &Config) -> Result<Solution, Error>
where
    F: Differentiable + ?Sized,
{
    solve(function, x0, config, ())
}

/// Finds a root of `function` with no iteration bound.
///
/// Iterates `x ← x − f(x)/f'(x)` while `|f(x)| > tol`. A starting point that
/// already satisfies the tolerance is returned with zero iterations.
///
/// This call only returns if the sequence reaches the tolerance (or becomes
/// `NaN`, see the [module docs](self)). Callers must know a root lies within
/// reach of `x0`; otherwise use [`solve`] with a large `max_iters`.
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] if `tol` is non-finite, zero, or negative.
pub fn solve_unbounded<F>(function: &F, x0: f64, tol: f64) -> Result<Solution, Error>
where
    F: Differentiable + ?Sized,
{
    let tol = config::validate_tol(tol)?;

    let mut x = x0;
    let mut value = function.value(x);
    let mut iters = 0;

    while value.abs() > tol {
        x -= value / function.derivative(x);
        value = function.value(x);
        iters += 1;
    }

    Ok(Solution {
        status: Status::Converged,
        x,
        value,
        iters,
    })
}
