//! Uniform scanning for sign-changing intervals.
//!
//! The scanner is a collaborator of the solver, not part of the numerical
//! core: it walks a fixed grid and collects every step pair on which the
//! function changes sign, in the order found.

use chord_core::Function;

use crate::combined::{Error, Interval, eval};

/// Configuration for the uniform interval scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanConfig {
    /// Distance between consecutive sample points.
    pub step: f64,
    /// Last sample point.
    pub max_iterations: i64,
    /// First sample point; defaults to `-max_iterations`.
    pub start_iterations: Option<i64>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            step: 1.0,
            max_iterations: 100_000,
            start_iterations: None,
        }
    }
}

impl ScanConfig {
    /// Validates the scan bounds and step.
    ///
    /// # Errors
    ///
    /// Returns a reason if the step is non-finite or not positive, or if
    /// the scan range is empty.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err("step must be finite and positive");
        }
        if self.start() >= self.max_iterations {
            return Err("scan start must be below max_iterations");
        }
        Ok(())
    }

    fn start(&self) -> i64 {
        self.start_iterations.unwrap_or(-self.max_iterations)
    }
}

/// Collects every `(x, x + step)` pair on which `f` changes sign.
///
/// The sign-change test is strict: a grid point that hits a root exactly
/// gives a zero product and both adjacent pairs are skipped.
///
/// # Errors
///
/// Returns an error if the config is invalid or `f` fails to evaluate.
#[allow(clippy::cast_precision_loss)]
pub fn find_intervals<F: Function>(
    function: &F,
    config: &ScanConfig,
) -> Result<Vec<Interval>, Error> {
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let end = config.max_iterations as f64;
    let mut intervals = Vec::new();
    let mut x = config.start() as f64;
    let mut fx = eval(function, x)?;

    while x < end {
        let next = x + config.step;
        let f_next = eval(function, next)?;
        if fx * f_next < 0.0 {
            intervals.push(Interval::new([x, next])?);
        }
        x = next;
        fx = f_next;
    }

    Ok(intervals)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn small_range() -> ScanConfig {
        ScanConfig {
            max_iterations: 10,
            ..ScanConfig::default()
        }
    }

    #[test]
    fn finds_both_sign_changes_of_a_parabola() {
        let f = |x: f64| x * x - 5.0;

        let intervals = find_intervals(&f, &small_range()).expect("should scan");

        assert_eq!(intervals.len(), 2);
        assert_relative_eq!(intervals[0].a(), -3.0);
        assert_relative_eq!(intervals[0].b(), -2.0);
        assert_relative_eq!(intervals[1].a(), 2.0);
        assert_relative_eq!(intervals[1].b(), 3.0);
    }

    #[test]
    fn roots_on_grid_points_are_skipped() {
        // f(-2) = f(2) = 0: zero products fail the strict test on every
        // adjacent pair, so the scan reports nothing.
        let f = |x: f64| x * x - 4.0;

        let intervals = find_intervals(&f, &small_range()).expect("should scan");

        assert!(intervals.is_empty());
    }

    #[test]
    fn rejects_a_non_positive_step() {
        let f = |x: f64| x;
        let config = ScanConfig {
            step: 0.0,
            ..small_range()
        };

        let result = find_intervals(&f, &config);

        assert!(matches!(result, Err(Error::InvalidConfig { .. })));
    }

    #[test]
    fn honors_an_explicit_start() {
        // Only the positive root is inside [0, 10].
        let f = |x: f64| x * x - 5.0;
        let config = ScanConfig {
            start_iterations: Some(0),
            ..small_range()
        };

        let intervals = find_intervals(&f, &config).expect("should scan");

        assert_eq!(intervals.len(), 1);
        assert_relative_eq!(intervals[0].a(), 2.0);
    }
}
