//! Small control-flow helpers: scope-exit guards and checked early returns.

pub mod check;
pub mod defer;

pub use defer::Defer;
