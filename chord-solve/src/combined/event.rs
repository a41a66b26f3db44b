use super::{Endpoint, Interval};

/// Control actions supported by the combined-method solver.
pub enum Action {
    /// Stop the solver early and report the current midpoint.
    StopEarly,
}

/// Iteration event emitted after each tangent step.
pub struct Event<'a> {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Endpoint the tangent step advanced from.
    pub endpoint: Endpoint,
    /// Value of that endpoint.
    pub x: f64,
    /// The tangent iterate `x - f(x) / f'(x)`.
    pub c: f64,
    /// The interval before the sign-narrowing step.
    pub interval: &'a Interval,
}
