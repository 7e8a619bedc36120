//! Angle ROM and iteration schedule.
//!
//! Each step of the iteration is a `(shift, angle)` pair. The circular
//! schedule shifts by the step index; the hyperbolic schedule starts at
//! shift 1 and executes shifts 4, 13, 40, ... twice, which is required for
//! hyperbolic convergence. The shift is therefore always read from the
//! table and never derived from the step counter.
//!
//! Tables are generated once per process and never mutated.

use std::sync::LazyLock;

use crate::common::constants::{
    DATAPATH_FRAC_BITS, HYPERBOLIC_FIRST_REPEAT, HYPERBOLIC_FIRST_SHIFT, ITERATIONS,
};
use crate::common::{Fixed, Result};

use super::control::RotationType;
use super::datapath::Word;

/// One ROM entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MicroRotation {
    /// Arithmetic right-shift applied to the cross terms.
    pub shift: u32,
    /// `atan(2^-shift)` or `atanh(2^-shift)` in datapath units.
    pub angle: Word,
}

/// Precomputed schedule for one rotation type.
#[derive(Clone, Debug)]
pub struct AngleTable {
    rot_type: RotationType,
    steps: [MicroRotation; ITERATIONS],
    gain: f64,
    convergence_limit: f64,
}

static CIRCULAR: LazyLock<AngleTable> =
    LazyLock::new(|| AngleTable::build(RotationType::Circular));

static HYPERBOLIC: LazyLock<AngleTable> =
    LazyLock::new(|| AngleTable::build(RotationType::Hyperbolic));

/// Shift amounts for every step of `rot_type`.
pub fn shift_schedule(rot_type: RotationType) -> [u32; ITERATIONS] {
    let mut shifts = [0u32; ITERATIONS];
    match rot_type {
        RotationType::Circular => {
            for (i, s) in shifts.iter_mut().enumerate() {
                *s = i as u32;
            }
        }
        RotationType::Hyperbolic => {
            let mut shift = HYPERBOLIC_FIRST_SHIFT;
            let mut next_repeat = HYPERBOLIC_FIRST_REPEAT;
            let mut repeated = false;
            for s in shifts.iter_mut() {
                *s = shift;
                if shift == next_repeat && !repeated {
                    repeated = true;
                } else {
                    if shift == next_repeat {
                        next_repeat = 3 * next_repeat + 1;
                    }
                    repeated = false;
                    shift += 1;
                }
            }
        }
    }
    shifts
}

impl AngleTable {
    fn build(rot_type: RotationType) -> Self {
        let scale = (1u64 << DATAPATH_FRAC_BITS) as f64;
        let shifts = shift_schedule(rot_type);

        let mut steps = [MicroRotation::default(); ITERATIONS];
        let mut gain = 1.0f64;
        let mut convergence_limit = 0.0f64;

        for (entry, &shift) in steps.iter_mut().zip(shifts.iter()) {
            let t = (-(shift as f64)).exp2();
            let (angle, stretch) = match rot_type {
                RotationType::Circular => (t.atan(), (1.0 + t * t).sqrt()),
                RotationType::Hyperbolic => (t.atanh(), (1.0 - t * t).sqrt()),
            };
            gain *= stretch;
            convergence_limit += angle;
            *entry = MicroRotation {
                shift,
                angle: Word::new((angle * scale).round() as i32),
            };
        }

        Self {
            rot_type,
            steps,
            gain,
            convergence_limit,
        }
    }

    /// Returns the process-wide table for `rot_type`.
    pub fn get(rot_type: RotationType) -> &'static AngleTable {
        match rot_type {
            RotationType::Circular => &*CIRCULAR,
            RotationType::Hyperbolic => &*HYPERBOLIC,
        }
    }

    pub fn rot_type(&self) -> RotationType {
        self.rot_type
    }

    /// ROM entry for iteration step `step` (`0..ITERATIONS`).
    #[inline(always)]
    pub fn step(&self, step: usize) -> MicroRotation {
        self.steps[step]
    }

    pub fn steps(&self) -> &[MicroRotation] {
        &self.steps
    }

    /// Magnitude growth over the full schedule (`K`).
    pub fn gain(&self) -> f64 {
        self.gain
    }

    /// Largest |angle| in radians the schedule can absorb, i.e. the sum of
    /// all ROM angles.
    pub fn convergence_limit(&self) -> f64 {
        self.convergence_limit
    }
}

impl RotationType {
    pub fn table(self) -> &'static AngleTable {
        AngleTable::get(self)
    }

    /// CORDIC gain of the schedule: ~1.6468 circular, ~0.8282 hyperbolic.
    pub fn gain(self) -> f64 {
        self.table().gain()
    }

    /// Divides `magnitude` by the gain so the engine output comes out
    /// unscaled. The engine never multiplies; callers fold the correction
    /// into the initial `x`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SimError::OutOfRange`] if the scaled value does not
    /// fit the port format.
    pub fn prescale(self, magnitude: f64) -> Result<Fixed> {
        Fixed::from_f64(magnitude / self.gain())
    }
}
