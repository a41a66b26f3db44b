//! Rendering of the per-interval step log.
//!
//! The log is explanatory output, not part of the numerical contract, but
//! its content is reproducible: each step records the chosen endpoint, the
//! tangent quotient, and the sign vector of `f` at the endpoints of both
//! candidate subintervals.

use super::{Endpoint, Interval};

/// Which candidate subinterval the sign check kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Kept {
    /// `[old_a, c]` still brackets the root.
    Left,
    /// `[c, old_b]` still brackets the root.
    Right,
}

/// Everything one completed iteration contributes to the step log.
pub(super) struct Step {
    pub iter: usize,
    pub endpoint: Endpoint,
    /// Value of the chosen endpoint and `f` there.
    pub x: f64,
    pub fx: f64,
    /// First derivative used by the tangent step.
    pub derivative: f64,
    /// The tangent iterate.
    pub c: f64,
    /// Sample point and `f(x) * f''(x)` product, logged on the first
    /// iteration only.
    pub concavity: Option<(f64, f64)>,
    /// Interval before narrowing, with `f` at its endpoints and at `c`.
    pub old: Interval,
    pub fa: f64,
    pub fc: f64,
    pub fb: f64,
    pub kept: Kept,
}

/// Sign marker: `-`, `+`, or empty for an exact zero.
fn sign(value: f64) -> &'static str {
    if value < 0.0 {
        "-"
    } else if value > 0.0 {
        "+"
    } else {
        ""
    }
}

fn signs(lhs: f64, rhs: f64) -> String {
    format!("({}, {})", sign(lhs), sign(rhs))
}

pub(super) fn interval_found(interval: &Interval) -> String {
    format!(
        "sign change found on [{}, {}]",
        interval.a(),
        interval.b()
    )
}

pub(super) fn step(record: &Step) -> String {
    let Step {
        iter,
        endpoint,
        x,
        fx,
        derivative,
        c,
        concavity,
        old,
        fa,
        fc,
        fb,
        kept,
    } = record;

    let name = match endpoint {
        Endpoint::A => "a",
        Endpoint::B => "b",
    };

    let mut out = String::new();
    if let Some((at, product)) = concavity {
        out.push_str(&format!(
            "initial endpoint chosen by the sign of f(x) * f''(x): \
             f({at}) * f''({at}) = {product}\n",
        ));
    }
    out.push_str(&format!(
        "step {iter}: c = {name} - f({name}) / f'({name}) = \
         {x} - ({fx}) / ({derivative}) = {c}\n",
    ));

    let left = format!("{} [{}, {c}]", signs(*fa, *fc), old.a());
    let right = format!("{} [{c}, {}]", signs(*fc, *fb), old.b());
    match kept {
        Kept::Left => out.push_str(&format!("  kept {left} | dropped {right}")),
        Kept::Right => out.push_str(&format!("  dropped {left} | kept {right}")),
    }

    out
}

pub(super) fn exact_root(c: f64) -> String {
    format!("x = {c}: exact root, f(c) = 0")
}

pub(super) fn tolerance_met(interval: &Interval, x: f64) -> String {
    format!(
        "x = (a + b) / 2 = ({} + {}) / 2 = {x}: |b - a| < epsilon",
        interval.a(),
        interval.b()
    )
}

pub(super) fn stopped(x: f64) -> String {
    format!("stopped by observer at x = {x}")
}
