//! Combined-method root finding with explanatory step traces.
//!
//! The solver narrows a sign-changing interval with tangent steps and sign
//! checks while a finite-difference engine supplies the first and second
//! derivatives it needs. Every computation leaves a human-readable record:
//! the derivative session logs each derivation and the solver logs each
//! narrowing step, so a run can be replayed as a worked example.

pub mod combined;
pub mod derivative;
pub mod run;
pub mod scan;
pub mod symbolic;
