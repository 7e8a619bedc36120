//! CORDIC register word and the micro-rotation step.
//!
//! The x/y/z registers are [`DATAPATH_WIDTH`] bits wide: the 16-bit port
//! value plus [`GUARD_BITS`] fraction bits that never leave the engine.
//! Every add and subtract wraps at the register width, and shifts are
//! arithmetic, so the model matches the RTL bit for bit.

use crate::common::Fixed;
use crate::common::constants::{DATAPATH_WIDTH, GUARD_BITS};
use crate::core::units::alu::{Direction, FixedPointAlu};

use super::control::{Control, Mode, RotationType};
use super::table::MicroRotation;

/// A signed `DATAPATH_WIDTH`-bit register value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word(i32);

impl Word {
    pub const ZERO: Self = Self(0);

    const UNUSED_BITS: u32 = i32::BITS - DATAPATH_WIDTH;

    /// Truncates `raw` to the register width, sign-extending bit 19.
    #[inline(always)]
    pub const fn new(raw: i32) -> Self {
        Self((raw << Self::UNUSED_BITS) >> Self::UNUSED_BITS)
    }

    #[inline(always)]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Register contents as an unsigned `DATAPATH_WIDTH`-bit pattern.
    #[inline(always)]
    pub const fn bits(self) -> u32 {
        (self.0 as u32) & ((1u32 << DATAPATH_WIDTH) - 1)
    }

    /// Widens a port value by appending zero guard bits. Exact.
    #[inline(always)]
    pub const fn from_port(value: Fixed) -> Self {
        Self((value.raw() as i32) << GUARD_BITS)
    }

    /// Drops the guard bits (arithmetic shift, i.e. truncation toward -inf).
    #[inline(always)]
    pub const fn to_port(self) -> Fixed {
        Fixed::from_raw((self.0 >> GUARD_BITS) as i16)
    }

    /// Arithmetic right shift.
    #[inline(always)]
    pub const fn shr(self, shift: u32) -> Self {
        Self(self.0 >> shift)
    }

    #[inline(always)]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }
}

/// The three add/subtract lanes of the CORDIC datapath.
#[derive(Clone, Copy, Debug, Default)]
pub struct DatapathAlu;

impl FixedPointAlu for DatapathAlu {
    type Word = Word;

    #[inline(always)]
    fn add(&self, a: Word, b: Word) -> Word {
        Word::new(a.0.wrapping_add(b.0))
    }

    #[inline(always)]
    fn subtract(&self, a: Word, b: Word) -> Word {
        Word::new(a.0.wrapping_sub(b.0))
    }
}

/// Coordinates carried between iteration steps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Vector {
    pub x: Word,
    pub y: Word,
    pub z: Word,
}

/// Rotation direction `d` for one step: `true` is `d = +1`.
///
/// Rotation mode follows the sign of `z` (zero counts as positive);
/// vectoring mode rotates against the sign of `y`.
#[inline(always)]
pub fn direction_positive(v: &Vector, mode: Mode) -> bool {
    match mode {
        Mode::Rotation => !v.z.is_negative(),
        Mode::Vectoring => v.y.is_negative(),
    }
}

/// Performs one micro-rotation.
///
/// With `d = ±1` and `s = step.shift`:
/// - circular:   `x' = x - d*(y >> s)`
/// - hyperbolic: `x' = x + d*(y >> s)`
/// - both:       `y' = y + d*(x >> s)`, `z' = z - d*angle`
///
/// `d` only ever selects between add and subtract.
pub fn micro_rotate<A>(alu: &A, v: Vector, control: Control, step: MicroRotation) -> Vector
where
    A: FixedPointAlu<Word = Word>,
{
    let positive = direction_positive(&v, control.mode);
    let toward = if positive { Direction::Add } else { Direction::Subtract };
    let against = if positive { Direction::Subtract } else { Direction::Add };

    let x_dir = match control.rot_type {
        RotationType::Circular => against,
        RotationType::Hyperbolic => toward,
    };

    let x_shifted = v.x.shr(step.shift);
    let y_shifted = v.y.shr(step.shift);

    Vector {
        x: alu.execute(v.x, y_shifted, x_dir),
        y: alu.execute(v.y, x_shifted, toward),
        z: alu.execute(v.z, step.angle, against),
    }
}
