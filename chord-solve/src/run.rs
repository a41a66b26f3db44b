//! Multi-interval solving runs.
//!
//! A run resolves its intervals (an explicit pair, or whatever the scan
//! finds), drives the combined-method solver over each one with a single
//! derivative session, and collects the roots alongside their step logs.

use chord_core::Function;

use crate::{
    combined::{self, Error, Interval, Solution},
    derivative::{self, Differentiator},
    scan::{self, ScanConfig},
};

/// Configuration for a full solving run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Per-interval solver settings.
    pub solver: combined::Config,
    /// Explicit sign-changing interval; when `None` the scan supplies
    /// candidates.
    pub interval: Option<[f64; 2]>,
    /// Interval discovery settings, used when no interval is supplied.
    pub scan: ScanConfig,
    /// Finite-difference engine settings.
    pub derivative: derivative::Config,
}

impl Config {
    /// Creates a run config with the given tolerance and default
    /// collaborators.
    #[must_use]
    pub fn new(epsilon: f64) -> Self {
        Self {
            solver: combined::Config::new(epsilon),
            interval: None,
            scan: ScanConfig::default(),
            derivative: derivative::Config::default(),
        }
    }
}

/// The record of a full solving run.
///
/// `solutions` and `steps` are parallel: one entry each per interval that
/// was processed.
#[derive(Debug, Clone, Default)]
pub struct Report {
    /// Intervals processed, in order.
    pub intervals: Vec<Interval>,
    /// One root per processed interval.
    pub solutions: Vec<f64>,
    /// Per-interval step logs.
    pub steps: Vec<Vec<String>>,
    /// Derivation traces from the run's derivative session, in call order.
    pub derivative_traces: Vec<String>,
}

/// Solves every available sign-changing interval.
///
/// Uses the explicit interval when one is configured, otherwise scans for
/// candidates. Intervals are processed in order with one derivative
/// session for the whole run; a failure on any interval aborts the run.
///
/// # Errors
///
/// Returns [`Error::MissingInterval`] when no interval is available, or
/// the first solver error encountered.
pub fn solve_all<F: Function>(function: &F, config: &Config) -> Result<Report, Error> {
    config
        .derivative
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let intervals = match config.interval {
        Some(bounds) => vec![Interval::new(bounds)?],
        None => scan::find_intervals(function, &config.scan)?,
    };
    if intervals.is_empty() {
        return Err(Error::MissingInterval);
    }

    let mut engine = Differentiator::new(config.derivative);
    let mut report = Report::default();

    for interval in intervals {
        let Solution { x, steps, .. } =
            combined::solve_unobserved(function, &mut engine, interval, &config.solver)?;
        report.intervals.push(interval);
        report.solutions.push(x);
        report.steps.push(steps);
    }

    report.derivative_traces = engine.traces().to_vec();
    Ok(report)
}
