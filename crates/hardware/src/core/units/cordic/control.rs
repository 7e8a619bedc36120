//! Per-sample control word.
//!
//! `mode` and `rot_type` are sampled together with the data on the
//! accepting edge and held for the whole iteration run.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::SimError;

/// Convergence target of the iteration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Drive `z` toward zero while rotating `(x, y)`.
    #[default]
    Rotation,
    /// Drive `y` toward zero while accumulating the angle into `z`.
    Vectoring,
}

/// Micro-rotation update rule and angle ROM.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationType {
    #[default]
    Circular,
    Hyperbolic,
}

impl Mode {
    /// Decodes the `control_mode` port (0 = rotation, 1 = vectoring).
    pub const fn from_bit(bit: bool) -> Self {
        if bit { Self::Vectoring } else { Self::Rotation }
    }

    pub const fn bit(self) -> bool {
        matches!(self, Self::Vectoring)
    }
}

impl RotationType {
    /// Decodes the `control_rotType` port (0 = circular, 1 = hyperbolic).
    pub const fn from_bit(bit: bool) -> Self {
        if bit { Self::Hyperbolic } else { Self::Circular }
    }

    pub const fn bit(self) -> bool {
        matches!(self, Self::Hyperbolic)
    }
}

impl FromStr for Mode {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, SimError> {
        match s.to_ascii_lowercase().as_str() {
            "rotation" | "rot" | "0" => Ok(Self::Rotation),
            "vectoring" | "vec" | "1" => Ok(Self::Vectoring),
            _ => Err(SimError::InvalidControl(s.to_string())),
        }
    }
}

impl FromStr for RotationType {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, SimError> {
        match s.to_ascii_lowercase().as_str() {
            "circular" | "circ" | "0" => Ok(Self::Circular),
            "hyperbolic" | "hyper" | "1" => Ok(Self::Hyperbolic),
            _ => Err(SimError::InvalidControl(s.to_string())),
        }
    }
}

/// Control word latched alongside each accepted sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Control {
    pub mode: Mode,
    pub rot_type: RotationType,
}

impl Control {
    pub const fn new(mode: Mode, rot_type: RotationType) -> Self {
        Self { mode, rot_type }
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = match self.mode {
            Mode::Rotation => "rot",
            Mode::Vectoring => "vec",
        };
        let rot = match self.rot_type {
            RotationType::Circular => "circ",
            RotationType::Hyperbolic => "hyper",
        };
        write!(f, "{rot}/{mode}")
    }
}
