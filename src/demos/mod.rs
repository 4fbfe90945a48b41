//! Standalone demonstrations: summation, sets, short-circuit evaluation.

pub mod aggregate;
pub mod sets;

pub use aggregate::{sum, total, Complex};
pub use sets::{and_value, or_value, DemoSet, Truthy};
