use std::convert::Infallible;

/// A scalar function whose real roots are sought.
///
/// Implementations must be pure and deterministic: the solver evaluates
/// the function at arbitrary points, often more than once per point, and
/// assumes every call at the same `x` returns the same value.
pub trait Function {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if `x` lies outside the function's domain.
    fn eval(&self, x: f64) -> Result<f64, Self::Error>;

    /// Display name used in derivation traces.
    fn label(&self) -> &str {
        "f(x)"
    }
}

/// Blanket implementation for plain closures, which cannot fail.
impl<F> Function for F
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn eval(&self, x: f64) -> Result<f64, Infallible> {
        Ok(self(x))
    }
}

/// Attaches a caller-supplied display name to a function.
///
/// Traces name the function through [`Function::label`]; wrapping a
/// closure in `Labeled` is how a formula like `"x^2 - 4"` shows up in
/// the derivation output.
#[derive(Debug, Clone)]
pub struct Labeled<F> {
    function: F,
    label: String,
}

impl<F: Function> Labeled<F> {
    pub fn new(function: F, label: impl Into<String>) -> Self {
        Self {
            function,
            label: label.into(),
        }
    }
}

impl<F: Function> Function for Labeled<F> {
    type Error = F::Error;

    fn eval(&self, x: f64) -> Result<f64, Self::Error> {
        self.function.eval(x)
    }

    fn label(&self) -> &str {
        &self.label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn closures_are_functions() {
        let f = |x: f64| x * x - 4.0;
        assert_relative_eq!(f.eval(3.0).unwrap(), 5.0);
        assert_eq!(f.label(), "f(x)");
    }

    #[test]
    fn labeled_overrides_the_display_name() {
        let f = Labeled::new(|x: f64| x * x - 4.0, "x^2 - 4");
        assert_eq!(f.label(), "x^2 - 4");
        assert_relative_eq!(f.eval(2.0).unwrap(), 0.0);
    }
}
