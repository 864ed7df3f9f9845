use tangent_core::Observer;

use crate::traits::{HasIterate, HasResidual};

/// One recorded iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub iter: usize,
    pub x: f64,
    pub residual: f64,
}

/// An observer that records the trajectory of a solve.
///
/// Pass `&mut History` as the solver observer so the history can be
/// inspected after the solve returns. It never requests an action.
///
/// Newton's method converges quadratically near a simple root, so the ratios
/// `|e_{t+1}| / |e_t|²` settle to a constant. [`History::convergence_ratios`]
/// computes them for any assumed order.
///
/// # Example
///
/// ```
/// use tangent_core::WithDerivative;
/// use tangent_observers::History;
/// use tangent_solvers::equation::newton;
///
/// let f = WithDerivative::new(|x: f64| x * x - 2.0, |x: f64| 2.0 * x);
/// let mut history = History::new();
///
/// let solution = newton::solve(&f, 1.0, &newton::Config::default(), &mut history).unwrap();
///
/// assert_eq!(history.len(), solution.iters);
/// assert_eq!(history.records()[0].x, 1.5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct History {
    records: Vec<Record>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record.
    pub fn record(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Returns the recorded iterations in order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the number of recorded iterations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the iterates in order.
    pub fn iterates(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(|record| record.x)
    }

    /// Returns `|x_t - root|` for every recorded iterate.
    #[must_use]
    pub fn errors(&self, root: f64) -> Vec<f64> {
        self.iterates().map(|x| (x - root).abs()).collect()
    }

    /// Returns `|e_{t+1}| / |e_t|^order` for consecutive iterates.
    ///
    /// Ratios stop at the first zero error, after which they are undefined.
    #[must_use]
    pub fn convergence_ratios(&self, root: f64, order: f64) -> Vec<f64> {
        self.errors(root)
            .windows(2)
            .take_while(|pair| pair[0] > 0.0)
            .map(|pair| pair[1] / pair[0].powf(order))
            .collect()
    }
}

impl<E, A> Observer<E, A> for History
where
    E: HasIterate + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(Record {
            iter: event.iter(),
            x: event.x(),
            residual: event.residual(),
        });
        None
    }
}

/// Allows `&mut History` to be passed to solvers that take an observer by
/// value, so the records can be read after the solve completes.
impl<E, A> Observer<E, A> for &mut History
where
    E: HasIterate + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use tangent_core::WithDerivative;
    use tangent_solvers::equation::newton;

    #[derive(Clone, Copy)]
    struct Event {
        iter: usize,
        x: f64,
    }

    impl HasIterate for Event {
        fn iter(&self) -> usize {
            self.iter
        }

        fn x(&self) -> f64 {
            self.x
        }
    }

    impl HasResidual for Event {
        fn residual(&self) -> f64 {
            self.x * 10.0
        }
    }

    // Helper to call observe without needing to specify the action type at each call site.
    fn feed(history: &mut History, iter: usize, x: f64) {
        let _: Option<()> = history.observe(&Event { iter, x });
    }

    #[test]
    fn records_events_in_order() {
        let mut history = History::new();
        feed(&mut history, 1, 0.5);
        feed(&mut history, 2, 0.25);

        assert_eq!(
            history.records(),
            [
                Record {
                    iter: 1,
                    x: 0.5,
                    residual: 5.0
                },
                Record {
                    iter: 2,
                    x: 0.25,
                    residual: 2.5
                },
            ]
        );
        assert_eq!(history.iterates().collect::<Vec<_>>(), vec![0.5, 0.25]);
    }

    #[test]
    fn never_returns_an_action() {
        let mut history = History::new();
        let action: Option<()> = history.observe(&Event { iter: 1, x: 1.0 });
        assert!(action.is_none());
    }

    #[test]
    fn linear_sequence_has_constant_first_order_ratio() {
        let mut history = History::new();
        for (i, x) in [1.5, 1.25, 1.125, 1.0625].into_iter().enumerate() {
            feed(&mut history, i + 1, x);
        }

        assert_eq!(history.errors(1.0), vec![0.5, 0.25, 0.125, 0.0625]);
        assert_eq!(history.convergence_ratios(1.0, 1.0), vec![0.5, 0.5, 0.5]);
    }

    #[test]
    fn ratios_stop_at_exact_root() {
        let mut history = History::new();
        feed(&mut history, 1, 0.5);
        feed(&mut history, 2, 0.0);
        feed(&mut history, 3, 0.0);

        assert_eq!(history.convergence_ratios(0.0, 2.0), vec![0.0]);
    }

    #[test]
    fn newton_is_second_order() {
        let f = WithDerivative::new(|x: f64| x.exp() - 2.0, |x: f64| x.exp());
        let root = 2.0_f64.ln();
        let config = newton::Config::default().with_tol(1e-14).expect("valid tol");

        let mut history = History::new();
        newton::solve(&f, 1.0, &config, &mut history).expect("should converge");

        // e_{t+1} / e_t² → f''(r) / 2f'(r) = 1/2 for exp(x) - 2.
        let ratios = history.convergence_ratios(root, 2.0);
        assert!(ratios.len() >= 3);
        assert_relative_eq!(ratios[2], 0.5, epsilon = 0.05);
    }
}
