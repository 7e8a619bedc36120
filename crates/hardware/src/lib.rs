//! Cycle-accurate behavioral model of a fixed-point arithmetic block.
//!
//! The crate models two hardware units:
//! - an adder/subtractor over 16-bit two's-complement values, and
//! - an iterative CORDIC engine supporting circular and hyperbolic
//!   rotation and vectoring, with a valid/ready streaming handshake.
//!
//! Both units are driven one clock edge at a time. Arithmetic follows the
//! hardware exactly: fixed register widths, arithmetic shifts, and silent
//! two's-complement wraparound on overflow.

/// Numeric formats, constants, and error types shared by every unit.
pub mod common;

/// Simulator configuration.
pub mod config;

/// Hardware units.
pub mod core;

/// Stimulus loading and the floating-point reference model.
pub mod sim;

/// Simulation statistics.
pub mod stats;

pub use crate::common::error::SimError;
pub use crate::common::fixed::Fixed;
pub use crate::config::Config;
pub use crate::core::units::alu::{AdderSubtractor, Direction, FixedPointAlu};
pub use crate::core::units::cordic::{
    CordicEngine, CordicInputs, CordicOutput, CordicSample, EngineState, Mode, RotationType,
};
