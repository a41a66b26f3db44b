//! The combined chord/tangent root-finding method.
//!
//! Each iteration advances one interval endpoint with a tangent step
//! `c = x - f(x) / f'(x)` and then narrows the interval with a sign check,
//! so the root stays bracketed. The concavity of `f` at `a` decides which
//! endpoint moves: `a` when `f(a) * f''(a) > 0` or once `a` has already
//! been replaced, otherwise `b`. Derivatives come from the finite-difference
//! engine, which logs a derivation per call.

mod config;
mod error;
mod event;
mod interval;
mod solution;
mod trace;

pub use config::Config;
pub use error::Error;
pub use event::{Action, Event};
pub use interval::{Endpoint, Interval, IntervalError};
pub use solution::{Solution, Status};

use chord_core::{Function, Observer};

use crate::derivative::Differentiator;

use trace::{Kept, Step};

/// Finds a root of `f` on a sign-changing interval.
/// Observers see each tangent step before the interval is narrowed.
///
/// Termination is exact-equality aware: an iterate with `f(c) == 0.0` ends
/// the pass immediately as [`Status::ExactRoot`]. This is deliberate
/// floating-point equality, not a tolerance check, and it fires in practice
/// because the iterates of the rounded finite-difference tangent step land
/// on exact double zeros.
///
/// # Errors
///
/// Returns an error if the config is invalid, the interval lacks a sign
/// change, the iteration cap is reached, a tangent step is non-finite, or
/// the function fails to evaluate.
pub fn solve<F, Obs>(
    function: &F,
    engine: &mut Differentiator,
    interval: Interval,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let fa = eval(function, interval.a())?;
    let fb = eval(function, interval.b())?;
    if fa * fb >= 0.0 {
        return Err(Error::NoSignChange {
            a: interval.a(),
            b: interval.b(),
            fa,
            fb,
        });
    }

    let mut steps = vec![trace::interval_found(&interval)];
    let mut interval = interval;
    let mut a_moved = false;
    let mut iter = 0;

    while interval.width() >= config.epsilon {
        iter += 1;
        if iter > config.max_iters {
            return Err(Error::IterationLimit {
                limit: config.max_iters,
            });
        }

        let fa = eval(function, interval.a())?;
        let concavity = derive(engine.second(function, interval.a()), interval.a())?;

        let endpoint = if fa * concavity > 0.0 || a_moved {
            Endpoint::A
        } else {
            Endpoint::B
        };
        let x = match endpoint {
            Endpoint::A => interval.a(),
            Endpoint::B => interval.b(),
        };
        let fx = match endpoint {
            Endpoint::A => fa,
            Endpoint::B => eval(function, interval.b())?,
        };

        let derivative = derive(engine.first(function, x), x)?;
        let c = x - fx / derivative;
        if !c.is_finite() {
            return Err(Error::NonFiniteIterate { x, derivative });
        }
        let fc = eval(function, c)?;

        let event = Event {
            iter,
            endpoint,
            x,
            c,
            interval: &interval,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            let answer = interval.midpoint();
            steps.push(trace::stopped(answer));
            return Ok(Solution {
                status: Status::StoppedByObserver,
                x: answer,
                iters: iter,
                steps,
            });
        }

        #[allow(clippy::float_cmp)]
        if fc == 0.0 {
            steps.push(trace::exact_root(c));
            return Ok(Solution {
                status: Status::ExactRoot,
                x: c,
                iters: iter,
                steps,
            });
        }

        let old = interval;
        let f_old_b = match endpoint {
            Endpoint::B => fx,
            Endpoint::A => eval(function, old.b())?,
        };
        let kept = if fc * fa < 0.0 {
            interval.replace(Endpoint::B, c);
            Kept::Left
        } else {
            interval.replace(Endpoint::A, c);
            a_moved = true;
            Kept::Right
        };

        steps.push(trace::step(&Step {
            iter,
            endpoint,
            x,
            fx,
            derivative,
            c,
            concavity: (iter == 1).then_some((old.a(), fa * concavity)),
            old,
            fa,
            fc,
            fb: f_old_b,
            kept,
        }));
    }

    let answer = interval.midpoint();
    steps.push(trace::tolerance_met(&interval, answer));
    Ok(Solution {
        status: Status::ToleranceMet,
        x: answer,
        iters: iter,
        steps,
    })
}

/// Runs the solver without observation.
///
/// # Errors
///
/// Same conditions as [`solve`].
pub fn solve_unobserved<F: Function>(
    function: &F,
    engine: &mut Differentiator,
    interval: Interval,
    config: &Config,
) -> Result<Solution, Error> {
    solve(function, engine, interval, config, ())
}

pub(crate) fn eval<F: Function>(function: &F, x: f64) -> Result<f64, Error> {
    function.eval(x).map_err(|e| Error::Function {
        x,
        source: Box::new(e),
    })
}

fn derive<E>(result: Result<f64, E>, x: f64) -> Result<f64, Error>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.map_err(|e| Error::Function {
        x,
        source: Box::new(e),
    })
}
