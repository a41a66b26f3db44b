//! Core abstractions shared by the chord solver crates.

mod function;
mod observe;

pub mod round;

pub use function::{Function, Labeled};
pub use observe::Observer;
