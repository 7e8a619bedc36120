//! Stimulus handling and expected-value computation.

/// Reads input transactions from JSON stimulus files.
pub mod loader;

/// Floating-point model of the ideal CORDIC result.
pub mod reference;
