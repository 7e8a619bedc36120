//! Fixed-point adder/subtractor.
//!
//! The unit is purely combinational: `S = A + B` when `D == 0` and
//! `S = A - B` when `D == 1`. Results are truncated to the port width, so
//! overflow wraps instead of faulting. The same [`FixedPointAlu`] contract
//! is implemented by the CORDIC datapath over its wider registers.

use serde::{Deserialize, Serialize};

use crate::common::Fixed;

/// Operation selected by the single-bit `D` port.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Add,
    Subtract,
}

impl Direction {
    /// Decodes the `D` port (`false` = add, `true` = subtract).
    #[inline(always)]
    pub const fn from_bit(bit: bool) -> Self {
        if bit { Self::Subtract } else { Self::Add }
    }

    /// Encodes the direction as the `D` port level.
    #[inline(always)]
    pub const fn bit(self) -> bool {
        matches!(self, Self::Subtract)
    }
}

/// Signed add/subtract over a fixed-width two's-complement word.
pub trait FixedPointAlu {
    /// Register type the unit operates on.
    type Word: Copy;

    /// `a + b`, wrapped to the word width.
    fn add(&self, a: Self::Word, b: Self::Word) -> Self::Word;

    /// `a - b`, wrapped to the word width.
    fn subtract(&self, a: Self::Word, b: Self::Word) -> Self::Word;

    /// Performs the operation selected by `dir`.
    fn execute(&self, a: Self::Word, b: Self::Word, dir: Direction) -> Self::Word {
        match dir {
            Direction::Add => self.add(a, b),
            Direction::Subtract => self.subtract(a, b),
        }
    }
}

/// Input ports of the adder/subtractor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AdderIo {
    pub a: Fixed,
    pub b: Fixed,
    pub d: Direction,
}

/// The 16-bit adder/subtractor unit.
#[derive(Clone, Copy, Debug, Default)]
pub struct AdderSubtractor;

impl AdderSubtractor {
    pub fn new() -> Self {
        Self
    }

    /// Drives the input ports and returns the settled `S` output.
    pub fn evaluate(&self, io: &AdderIo) -> Fixed {
        self.execute(io.a, io.b, io.d)
    }
}

impl FixedPointAlu for AdderSubtractor {
    type Word = Fixed;

    fn add(&self, a: Fixed, b: Fixed) -> Fixed {
        a.wrapping_add(b)
    }

    fn subtract(&self, a: Fixed, b: Fixed) -> Fixed {
        a.wrapping_sub(b)
    }
}
