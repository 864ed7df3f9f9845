/// Event emitted by the Newton solver after each update.
///
/// The update that produced this event is
/// `x = x_prev - step`, with `step = f(x_prev) / derivative`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// Iterate before the update.
    pub x_prev: f64,

    /// Derivative evaluated at `x_prev`.
    pub derivative: f64,

    /// Newton step that was subtracted from `x_prev`.
    pub step: f64,

    /// Iterate after the update.
    pub x: f64,

    /// Function value at the new iterate.
    pub value: f64,
}

impl Event {
    /// Returns true if the new iterate and its value are both finite.
    ///
    /// A zero derivative or a diverging sequence shows up here first.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.value.is_finite()
    }
}
