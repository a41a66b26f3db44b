/// How a solving pass reached its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// An iterate evaluated to exactly zero.
    ExactRoot,
    /// The interval width dropped below `epsilon`; the midpoint is the
    /// answer.
    ToleranceMet,
    /// Stopped early by an observer decision.
    StoppedByObserver,
}

/// The result of solving one sign-changing interval.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,
    /// The reported root.
    pub x: f64,
    /// Iterations performed.
    pub iters: usize,
    /// Step-by-step account of the pass: the interval-found message, one
    /// entry per completed iteration, and a final answer message.
    pub steps: Vec<String>,
}
