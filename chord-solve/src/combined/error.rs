use std::error::Error as StdError;

use thiserror::Error;

use super::IntervalError;

/// Errors that can occur during a combined-method run.
///
/// None of these are retried; a failure surfaces immediately and aborts
/// the interval being processed.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error(transparent)]
    Interval(#[from] IntervalError),

    #[error("no sign change on [{a}, {b}]: f(a) = {fa}, f(b) = {fb}")]
    NoSignChange { a: f64, b: f64, fa: f64, fb: f64 },

    #[error("no interval to solve: none supplied and the scan found no sign change")]
    MissingInterval,

    #[error("no terminal state after {limit} iterations")]
    IterationLimit { limit: usize },

    #[error("tangent step from x = {x} is not finite (f'(x) = {derivative})")]
    NonFiniteIterate { x: f64, derivative: f64 },

    #[error("function evaluation failed at x = {x}")]
    Function {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}
