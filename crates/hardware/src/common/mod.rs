//! Shared definitions used across the hardware units.

/// Register widths, binary-point positions, and pipeline depth.
pub mod constants;

/// Error type for the fallible edges of the simulator.
pub mod error;

/// The 16-bit Q4.12 fixed-point value seen on every port.
pub mod fixed;

pub use self::error::{Result, SimError};
pub use self::fixed::Fixed;
