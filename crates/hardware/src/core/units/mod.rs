//! Execution units.
//!
//! - [`alu`]: combinational 16-bit adder/subtractor.
//! - [`cordic`]: multi-cycle CORDIC rotation/vectoring engine.

pub mod alu;
pub mod cordic;
