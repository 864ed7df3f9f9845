use crate::{Differentiable, TwiceDifferentiable};

/// Adapter that treats the derivative of a function as the function itself.
///
/// Stationary points of `f` are roots of `f'`, so a minimizer can run a
/// root-finder on `Gradient(f)`: its value is `f'(x)` and its derivative is
/// `f''(x)`.
pub struct Gradient<T>(pub T);

impl<T> Differentiable for Gradient<T>
where
    T: TwiceDifferentiable,
{
    fn value(&self, x: f64) -> f64 {
        self.0.derivative(x)
    }

    fn derivative(&self, x: f64) -> f64 {
        self.0.second_derivative(x)
    }
}
