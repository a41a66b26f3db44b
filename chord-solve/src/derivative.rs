//! Central finite-difference derivative estimation.
//!
//! Each call computes one derivative value and appends one formatted
//! derivation trace to the session logs, in call order. Function samples
//! are rounded to a configured number of decimals *before* they are
//! combined, and the result is rounded again; rounding only at the end
//! would produce different values, so the order is part of the contract.

use chord_core::{Function, round};

/// Configuration for the finite-difference engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Finite-difference step.
    pub h: f64,
    /// Decimal places kept when rounding samples and results.
    pub round_count: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            h: 1e-5,
            round_count: 10,
        }
    }
}

impl Config {
    /// Validates the step size.
    ///
    /// # Errors
    ///
    /// Returns a reason if `h` is non-finite or not positive.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.h.is_finite() || self.h <= 0.0 {
            return Err("h must be finite and positive");
        }
        Ok(())
    }
}

/// A derivative session: finite-difference estimates plus derivation logs.
///
/// The session does not own the function; both methods borrow it per call,
/// so one session can serve several solving passes while its logs stay in
/// one place. Each successful call appends exactly one trace string and one
/// value. The `&mut` receivers make the session single-owner by
/// construction; it is not meant for shared access.
#[derive(Debug, Clone, Default)]
pub struct Differentiator {
    config: Config,
    traces: Vec<String>,
    values: Vec<f64>,
}

impl Differentiator {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            traces: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Estimates `f'(x)` as `(f(x+h) - f(x-h)) / 2h`.
    ///
    /// # Errors
    ///
    /// Propagates any evaluation error from `f` unmodified; nothing is
    /// logged for a failed call.
    pub fn first<F: Function>(&mut self, f: &F, x: f64) -> Result<f64, F::Error> {
        let Config { h, round_count } = self.config;
        let x_fwd = x + h;
        let x_back = x - h;
        let dx = 2.0 * h;

        let f_fwd = round::to_decimals(f.eval(x_fwd)?, round_count);
        let f_back = round::to_decimals(f.eval(x_back)?, round_count);
        let value = round::to_decimals((f_fwd - f_back) / dx, round_count);

        self.traces.push(format!(
            "first derivative of {label} at x = {x}\n  \
             x + h = {x} + {h} = {x_fwd}\n  \
             x - h = {x} - {h} = {x_back}\n  \
             f(x + h) = {f_fwd}\n  \
             f(x - h) = {f_back}\n  \
             f'(x) = ({f_fwd} - {f_back}) / {dx} = {value}",
            label = f.label(),
        ));
        self.values.push(value);

        Ok(value)
    }

    /// Estimates `f''(x)` as `(f(x+2h) - 2 f(x) + f(x-2h)) / (2h)^2`.
    ///
    /// # Errors
    ///
    /// Propagates any evaluation error from `f` unmodified; nothing is
    /// logged for a failed call.
    pub fn second<F: Function>(&mut self, f: &F, x: f64) -> Result<f64, F::Error> {
        let Config { h, round_count } = self.config;
        let x_fwd = x + 2.0 * h;
        let x_back = x - 2.0 * h;
        let dx = 2.0 * h;

        let f_mid = round::to_decimals(f.eval(x)?, round_count);
        let f_fwd = round::to_decimals(f.eval(x_fwd)?, round_count);
        let f_back = round::to_decimals(f.eval(x_back)?, round_count);
        let value = round::to_decimals((f_fwd - 2.0 * f_mid + f_back) / (dx * dx), round_count);

        self.traces.push(format!(
            "second derivative of {label} at x = {x}\n  \
             x + 2h = {x} + 2 * {h} = {x_fwd}\n  \
             x - 2h = {x} - 2 * {h} = {x_back}\n  \
             f(x + 2h) = {f_fwd}\n  \
             f(x) = {f_mid}\n  \
             f(x - 2h) = {f_back}\n  \
             f''(x) = ({f_fwd} - 2 * {f_mid} + {f_back}) / {dx2} = {value}",
            label = f.label(),
            dx2 = dx * dx,
        ));
        self.values.push(value);

        Ok(value)
    }

    /// Ordered derivation traces, one per successful call.
    #[must_use]
    pub fn traces(&self) -> &[String] {
        &self.traces
    }

    /// Ordered derivative values, one per successful call.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use thiserror::Error;

    fn square(x: f64) -> f64 {
        x * x
    }

    #[test]
    fn central_difference_of_a_parabola() {
        let mut engine = Differentiator::default();

        let first = engine.first(&square, 3.0).unwrap();
        let second = engine.second(&square, 3.0).unwrap();

        assert_relative_eq!(first, 6.0, epsilon = 1e-6);
        assert_relative_eq!(second, 2.0, epsilon = 1e-6);
    }

    #[test]
    fn repeated_calls_are_idempotent_but_logged_separately() {
        let mut engine = Differentiator::default();

        let one = engine.first(&square, 1.5).unwrap();
        let two = engine.first(&square, 1.5).unwrap();

        assert_relative_eq!(one, two);
        assert_eq!(engine.values(), [one, two].as_slice());
        assert_eq!(engine.traces().len(), 2);
        assert_eq!(engine.traces()[0], engine.traces()[1]);
    }

    #[test]
    fn samples_are_rounded_before_combining() {
        // At round_count = 4 both samples of x^2 near 1 collapse to 1.0,
        // so the quotient is exactly zero. Rounding only the final result
        // would give ~2 instead.
        let mut engine = Differentiator::new(Config {
            h: 1e-5,
            round_count: 4,
        });

        let value = engine.first(&square, 1.0).unwrap();

        assert_relative_eq!(value, 0.0);
    }

    #[test]
    fn traces_name_the_function_and_the_point() {
        let f = chord_core::Labeled::new(square, "x^2");
        let mut engine = Differentiator::default();

        engine.first(&f, 2.0).unwrap();

        let trace = &engine.traces()[0];
        assert!(trace.contains("first derivative of x^2 at x = 2"));
        assert!(trace.contains("f'(x)"));
    }

    #[derive(Debug, Error)]
    #[error("negative input")]
    struct NegativeInput;

    struct SqrtFn;

    impl Function for SqrtFn {
        type Error = NegativeInput;

        fn eval(&self, x: f64) -> Result<f64, NegativeInput> {
            if x < 0.0 {
                return Err(NegativeInput);
            }
            Ok(x.sqrt())
        }
    }

    #[test]
    fn evaluation_errors_propagate_without_logging() {
        let mut engine = Differentiator::default();

        // x - h is negative, so the backward sample fails.
        let result = engine.first(&SqrtFn, 0.0);

        assert!(result.is_err());
        assert!(engine.traces().is_empty());
        assert!(engine.values().is_empty());
    }

    #[test]
    fn invalid_step_is_rejected() {
        let config = Config {
            h: 0.0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
