/// Configuration for the combined-method solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Interval width below which the midpoint is accepted as the root.
    pub epsilon: f64,
    /// Safety cap on iterations per interval.
    ///
    /// The width check alone does not bound the loop: when only one
    /// endpoint ever moves, the width can stay above `epsilon` while the
    /// iterates converge without hitting an exact zero. Exceeding the cap
    /// is an error, not a degraded answer.
    pub max_iters: usize,
}

impl Config {
    pub const DEFAULT_MAX_ITERS: usize = 10_000;

    /// Creates a config with the given tolerance and the default
    /// iteration cap.
    #[must_use]
    pub fn new(epsilon: f64) -> Self {
        Self {
            epsilon,
            max_iters: Self::DEFAULT_MAX_ITERS,
        }
    }

    /// Validates the tolerance and iteration cap.
    ///
    /// # Errors
    ///
    /// Returns a reason if `epsilon` is non-finite or not positive, or if
    /// the iteration cap is zero.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err("epsilon must be finite and positive");
        }
        if self.max_iters == 0 {
            return Err("max_iters must be at least 1");
        }
        Ok(())
    }
}
