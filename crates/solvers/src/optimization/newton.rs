//! Newton's method for scalar minimization.
//!
//! # Algorithm
//!
//! A second-order Taylor expansion of `f` around `x_n` is a parabola whose
//! vertex sits at
//!
//! ```text
//! x_{n+1} = x_n - f'(x_n) / f''(x_n)
//! ```
//!
//! which is exactly Newton root-finding applied to `f'`. This module runs
//! [`equation::newton::solve`] on [`Gradient`] and reports the objective,
//! slope, and curvature at the stationary point it finds.
//!
//! # Limitations
//!
//! - **Stationary, not minimal**: the iteration seeks `f'(x) = 0` and is
//!   equally happy to land on a maximum or an inflection point. Check
//!   [`Solution::is_minimum`].
//! - **Divergence**: far from the optimum the local parabola can point the
//!   wrong way or be nearly flat, and the steps grow instead of shrinking.
//!   The iteration bound turns this into [`Error::IterationLimitExceeded`].
//!
//! Configuration, events, actions, and errors are shared with the root
//! solver; the tolerance applies to `|f'(x)|`.
//!
//! [`equation::newton::solve`]: crate::equation::newton::solve

pub use crate::equation::newton::{Action, Config, ConfigError, Error, Event, Status};

use tangent_core::{Gradient, Observer, TwiceDifferentiable};

use crate::equation::newton;

/// The result of a Newton minimization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Final iterate.
    pub x: f64,

    /// Objective value `f(x)`.
    pub objective: f64,

    /// Slope `f'(x)`.
    pub gradient: f64,

    /// Curvature `f''(x)`.
    pub curvature: f64,

    /// Number of Newton updates performed.
    pub iters: usize,
}

impl Solution {
    /// Returns true if the curvature at `x` is positive.
    ///
    /// A converged point with positive curvature is a local minimum.
    #[must_use]
    pub fn is_minimum(&self) -> bool {
        self.curvature > 0.0
    }
}

/// Finds a local minimum of `function` starting from `x0`.
///
/// The observer receives an [`Event`] after each update, where `value` is
/// the slope `f'(x)` and `derivative` the curvature at the previous iterate.
///
/// # Errors
///
/// Returns [`Error::IterationLimitExceeded`] if `|f'(x)| < tol` is not reached
/// within `config.max_iters()` updates.
pub fn minimize<F, Obs>(
    function: &F,
    x0: f64,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: TwiceDifferentiable + ?Sized,
    Obs: Observer<Event, Action>,
{
    let root = newton::solve(&Gradient(function), x0, config, observer)?;

    Ok(Solution {
        status: root.status,
        x: root.x,
        objective: function.value(root.x),
        gradient: root.value,
        curvature: function.second_derivative(root.x),
        iters: root.iters,
    })
}

/// Finds a local minimum without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns [`Error::IterationLimitExceeded`] if the bound is reached without
/// convergence.
pub fn minimize_unobserved<F>(function: &F, x0: f64, config: &Config) -> Result<Solution, Error>
where
    F: TwiceDifferentiable + ?Sized,
{
    minimize(function, x0, config, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use tangent_core::{Differentiable, WithSecondDerivative};

    /// f(x) = (x - 3)² - 9, minimized at x = 3.
    fn shifted_parabola() -> impl TwiceDifferentiable {
        WithSecondDerivative::new(
            |x: f64| (x - 3.0).powi(2) - 9.0,
            |x: f64| 2.0 * (x - 3.0),
            |_x: f64| 2.0,
        )
    }

    /// f(x) = x·atan(x) - ½·ln(1 + x²), whose slope is atan(x).
    ///
    /// Newton on atan only converges for starting points within about 1.39
    /// of the origin; further out each step overshoots by more than the last.
    fn arctan_bowl() -> impl TwiceDifferentiable {
        WithSecondDerivative::new(
            |x: f64| x * x.atan() - 0.5 * x.mul_add(x, 1.0).ln(),
            |x: f64| x.atan(),
            |x: f64| 1.0 / x.mul_add(x, 1.0),
        )
    }

    #[test]
    fn finds_parabola_minimum_in_one_step() {
        let f = shifted_parabola();

        let solution = minimize_unobserved(&f, 0.1, &Config::default()).expect("should converge");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 1);
        assert_relative_eq!(solution.x, 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(solution.gradient, 0.0, epsilon = 1e-12);
        assert_relative_eq!(solution.objective, -9.0, epsilon = 1e-12);
        assert!(solution.is_minimum());
    }

    #[test]
    fn lands_on_maximum_without_complaint() {
        let f = WithSecondDerivative::new(
            |x: f64| -(x - 1.0).powi(2),
            |x: f64| -2.0 * (x - 1.0),
            |_x: f64| -2.0,
        );

        let solution = minimize_unobserved(&f, 4.0, &Config::default()).expect("should converge");

        assert_relative_eq!(solution.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(solution.curvature, -2.0);
        assert!(!solution.is_minimum());
    }

    #[test]
    fn converges_inside_basin() {
        let f = arctan_bowl();

        // 1 → -0.571 → 0.117 → -1.06e-3 → 7.96e-10
        let solution = minimize_unobserved(&f, 1.0, &Config::default()).expect("should converge");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 4);
        assert_abs_diff_eq!(solution.x, 0.0, epsilon = 1e-8);
        assert!(solution.is_minimum());
    }

    #[test]
    fn diverges_outside_basin() {
        let f = arctan_bowl();

        let mut distances = Vec::new();
        let observer = |event: &Event| {
            distances.push(event.x.abs());
            None
        };

        let result = minimize(&f, 2.0, &Config::default().with_max_iters(50), observer);

        assert!(matches!(
            result,
            Err(Error::IterationLimitExceeded { max_iters: 50, x, .. }) if x.is_nan()
        ));
        assert!(distances[..5].windows(2).all(|pair| pair[1] > pair[0]));
    }

    #[test]
    fn events_report_slope_and_curvature() {
        let f = shifted_parabola();

        let mut events = Vec::new();
        let observer = |event: &Event| {
            events.push(*event);
            None
        };

        minimize(&f, 0.1, &Config::default(), observer).expect("should converge");

        assert_eq!(events.len(), 1);
        assert_relative_eq!(events[0].derivative, 2.0);
        assert_relative_eq!(events[0].step, f.derivative(0.1) / 2.0);
    }
}
