//! Exact solving through an external symbolic collaborator.
//!
//! The collaborator owns the symbolic form of the equation; this crate
//! never inspects source code or expressions itself. Exact mode replaces
//! the iterative result entirely and leaves the step logs empty.

use std::error::Error as StdError;

use thiserror::Error;

use crate::run::Report;

/// An external solver that yields the exact roots of an equation in one
/// variable.
pub trait SymbolicSolver {
    type Error: StdError + Send + Sync + 'static;

    /// Returns every exact root the collaborator can produce.
    ///
    /// # Errors
    ///
    /// Returns an error if the expression cannot be solved.
    fn roots(&self) -> Result<Vec<f64>, Self::Error>;
}

/// Errors from the exact solving mode.
#[derive(Debug, Error)]
pub enum SymbolicError {
    #[error("expression could not be solved exactly")]
    Unsolvable {
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

/// Replaces an iterative run with the collaborator's exact roots.
///
/// The returned report carries no intervals or step logs: exact mode
/// bypasses the iteration entirely.
///
/// # Errors
///
/// Returns [`SymbolicError::Unsolvable`] if the collaborator fails.
pub fn solve_exact<S: SymbolicSolver>(solver: &S) -> Result<Report, SymbolicError> {
    let roots = solver
        .roots()
        .map_err(|e| SymbolicError::Unsolvable {
            source: Box::new(e),
        })?;

    Ok(Report {
        solutions: roots,
        ..Report::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use thiserror::Error;

    struct FixedRoots;

    impl SymbolicSolver for FixedRoots {
        type Error = std::convert::Infallible;

        fn roots(&self) -> Result<Vec<f64>, Self::Error> {
            Ok(vec![-2.0, 2.0])
        }
    }

    #[derive(Debug, Error)]
    #[error("no closed form")]
    struct NoClosedForm;

    struct Stumped;

    impl SymbolicSolver for Stumped {
        type Error = NoClosedForm;

        fn roots(&self) -> Result<Vec<f64>, Self::Error> {
            Err(NoClosedForm)
        }
    }

    #[test]
    fn exact_mode_returns_roots_without_traces() {
        let report = solve_exact(&FixedRoots).expect("should solve");

        assert_eq!(report.solutions, vec![-2.0, 2.0]);
        assert!(report.intervals.is_empty());
        assert!(report.steps.is_empty());
        assert!(report.derivative_traces.is_empty());
    }

    #[test]
    fn collaborator_failures_surface_as_unsolvable() {
        let result = solve_exact(&Stumped);

        assert!(matches!(result, Err(SymbolicError::Unsolvable { .. })));
    }
}
