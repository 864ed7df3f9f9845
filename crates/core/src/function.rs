/// A scalar function `f: ℝ → ℝ` together with its derivative.
///
/// This is the function handle Newton iteration works with. Implementations
/// hold no iteration state; solvers only borrow them for the duration of a
/// call, so the same function can be reused across solves or handed to other
/// routines.
///
/// Closures are paired into a `Differentiable` with [`WithDerivative`].
pub trait Differentiable {
    /// Evaluates `f(x)`.
    fn value(&self, x: f64) -> f64;

    /// Evaluates `f'(x)`.
    fn derivative(&self, x: f64) -> f64;
}

/// A [`Differentiable`] function that also provides its second derivative.
///
/// Newton minimization needs `f''` to step along the derivative.
pub trait TwiceDifferentiable: Differentiable {
    /// Evaluates `f''(x)`.
    fn second_derivative(&self, x: f64) -> f64;
}

impl<T: Differentiable + ?Sized> Differentiable for &T {
    fn value(&self, x: f64) -> f64 {
        (**self).value(x)
    }

    fn derivative(&self, x: f64) -> f64 {
        (**self).derivative(x)
    }
}

impl<T: TwiceDifferentiable + ?Sized> TwiceDifferentiable for &T {
    fn second_derivative(&self, x: f64) -> f64 {
        (**self).second_derivative(x)
    }
}

/// A function built from a pair of closures: `f` and `f'`.
///
/// # Example
///
/// ```
/// use tangent_core::{Differentiable, WithDerivative};
///
/// let parabola = WithDerivative::new(|x: f64| x * x - 4.0, |x: f64| 2.0 * x);
///
/// assert_eq!(parabola.value(2.0), 0.0);
/// assert_eq!(parabola.derivative(2.0), 4.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WithDerivative<F, D> {
    f: F,
    df: D,
}

impl<F, D> WithDerivative<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    /// Pairs a function with its derivative.
    pub fn new(f: F, df: D) -> Self {
        Self { f, df }
    }

    /// Adds a second derivative, producing a [`TwiceDifferentiable`] function.
    pub fn with_second<D2>(self, d2f: D2) -> WithSecondDerivative<F, D, D2>
    where
        D2: Fn(f64) -> f64,
    {
        WithSecondDerivative {
            f: self.f,
            df: self.df,
            d2f,
        }
    }
}

impl<F, D> Differentiable for WithDerivative<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    fn value(&self, x: f64) -> f64 {
        (self.f)(x)
    }

    fn derivative(&self, x: f64) -> f64 {
        (self.df)(x)
    }
}

/// A function built from three closures: `f`, `f'` and `f''`.
#[derive(Debug, Clone, Copy)]
pub struct WithSecondDerivative<F, D, D2> {
    f: F,
    df: D,
    d2f: D2,
}

impl<F, D, D2> WithSecondDerivative<F, D, D2>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
    D2: Fn(f64) -> f64,
{
    /// Bundles a function with its first and second derivatives.
    pub fn new(f: F, df: D, d2f: D2) -> Self {
        Self { f, df, d2f }
    }
}

impl<F, D, D2> Differentiable for WithSecondDerivative<F, D, D2>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
    D2: Fn(f64) -> f64,
{
    fn value(&self, x: f64) -> f64 {
        (self.f)(x)
    }

    fn derivative(&self, x: f64) -> f64 {
        (self.df)(x)
    }
}

impl<F, D, D2> TwiceDifferentiable for WithSecondDerivative<F, D, D2>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
    D2: Fn(f64) -> f64,
{
    fn second_derivative(&self, x: f64) -> f64 {
        (self.d2f)(x)
    }
}
