//! Shared test infrastructure.

/// Clock/reset driver for the CORDIC engine.
pub mod harness;
