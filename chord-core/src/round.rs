//! Decimal rounding used by the derivative engine.

/// Rounds `value` to `decimals` decimal places, half away from zero.
///
/// Ties follow [`f64::round`], not banker's half-to-even; an exact decimal
/// tie at ten places is essentially unreachable from real samples, so the
/// two conventions are indistinguishable in practice.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn to_decimals(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn rounds_to_the_requested_precision() {
        assert_relative_eq!(to_decimals(1.23456, 2), 1.23);
        assert_relative_eq!(to_decimals(1.23556, 2), 1.24);
        assert_relative_eq!(to_decimals(-1.23556, 2), -1.24);
    }

    #[test]
    fn ties_round_away_from_zero() {
        assert_relative_eq!(to_decimals(0.5, 0), 1.0);
        assert_relative_eq!(to_decimals(-0.5, 0), -1.0);
    }

    #[test]
    fn high_precision_keeps_typical_samples_intact() {
        assert_relative_eq!(to_decimals(1.0000200001, 10), 1.0000200001);
    }
}
