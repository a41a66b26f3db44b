use thiserror::Error;

/// Errors that can occur when creating an [`Interval`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IntervalError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s)")]
    NonFinite,
    /// Endpoints are equal, giving zero width.
    #[error("zero width")]
    ZeroWidth,
}

/// A candidate sign-changing interval `(a, b)`.
///
/// Endpoint order is preserved as supplied: the `a` and `b` roles are
/// asymmetric in the endpoint tie-break, so the interval is never
/// normalized. The sign-change precondition `f(a) * f(b) < 0` is checked
/// when a solving pass begins, since it needs function evaluations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    a: f64,
    b: f64,
}

impl Interval {
    /// Creates a validated interval.
    ///
    /// # Errors
    ///
    /// Returns an error if an endpoint is non-finite or the width is zero.
    pub fn new(bounds: [f64; 2]) -> Result<Self, IntervalError> {
        let [a, b] = bounds;

        if !a.is_finite() || !b.is_finite() {
            return Err(IntervalError::NonFinite);
        }

        #[allow(clippy::float_cmp)]
        if a == b {
            return Err(IntervalError::ZeroWidth);
        }

        Ok(Self { a, b })
    }

    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Returns the absolute interval width.
    #[must_use]
    pub fn width(&self) -> f64 {
        (self.b - self.a).abs()
    }

    /// Returns the midpoint, the accepted answer once the width drops
    /// below tolerance.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.a + self.b)
    }

    /// Replaces one endpoint with a new approximation.
    pub(super) fn replace(&mut self, endpoint: Endpoint, x: f64) {
        match endpoint {
            Endpoint::A => self.a = x,
            Endpoint::B => self.b = x,
        }
    }
}

/// The explicit choice of which endpoint a tangent step advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Update from `a`.
    A,
    /// Update from `b`.
    B,
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn keeps_the_supplied_orientation() {
        let interval = Interval::new([3.0, -2.0]).expect("valid interval");
        assert_relative_eq!(interval.a(), 3.0);
        assert_relative_eq!(interval.b(), -2.0);
        assert_relative_eq!(interval.width(), 5.0);
        assert_relative_eq!(interval.midpoint(), 0.5);
    }

    #[test]
    fn rejects_non_finite_endpoints() {
        assert!(matches!(
            Interval::new([f64::NAN, 1.0]),
            Err(IntervalError::NonFinite)
        ));
        assert!(matches!(
            Interval::new([0.0, f64::INFINITY]),
            Err(IntervalError::NonFinite)
        ));
    }

    #[test]
    fn rejects_zero_width() {
        assert!(matches!(
            Interval::new([2.0, 2.0]),
            Err(IntervalError::ZeroWidth)
        ));
    }

    #[test]
    fn replace_moves_a_single_endpoint() {
        let mut interval = Interval::new([0.0, 2.0]).expect("valid interval");

        interval.replace(Endpoint::B, 1.0);
        assert_relative_eq!(interval.b(), 1.0);

        interval.replace(Endpoint::A, 0.5);
        assert_relative_eq!(interval.a(), 0.5);
        assert_relative_eq!(interval.width(), 0.5);
    }
}
