use tangent_core::Observer;

use crate::traits::{CanStopEarly, HasIterate, HasResidual};

/// An observer that stops a solve once it has clearly gone astray.
///
/// The guard trips when the iterate or its residual is non-finite (the
/// signature of a zero derivative), or when `|x|` exceeds a bound (the
/// signature of divergence). It records the iteration at which it tripped.
///
/// Pass `&mut DivergenceGuard` to keep access to [`tripped_at`] afterwards.
///
/// [`tripped_at`]: DivergenceGuard::tripped_at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DivergenceGuard {
    bound: f64,
    tripped_at: Option<usize>,
}

impl DivergenceGuard {
    /// Creates a guard that trips when `|x| > bound` or on non-finite values.
    #[must_use]
    pub fn new(bound: f64) -> Self {
        Self {
            bound,
            tripped_at: None,
        }
    }

    /// Creates a guard that trips only on non-finite values.
    #[must_use]
    pub fn non_finite() -> Self {
        Self::new(f64::INFINITY)
    }

    /// Returns the iteration at which the guard stopped the solve, if it did.
    #[must_use]
    pub fn tripped_at(&self) -> Option<usize> {
        self.tripped_at
    }

    fn is_astray(&self, x: f64, residual: f64) -> bool {
        !x.is_finite() || !residual.is_finite() || x.abs() > self.bound
    }
}

impl<E, A> Observer<E, A> for DivergenceGuard
where
    E: HasIterate + HasResidual,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if self.is_astray(event.x(), event.residual()) {
            self.tripped_at = Some(event.iter());
            return Some(A::stop_early());
        }
        None
    }
}

impl<E, A> Observer<E, A> for &mut DivergenceGuard
where
    E: HasIterate + HasResidual,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
