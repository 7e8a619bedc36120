//! Integration tests driving the hardware units through their ports.

mod common;

/// Adder/subtractor parity against full-precision integer arithmetic.
mod alu_comprehensive;
