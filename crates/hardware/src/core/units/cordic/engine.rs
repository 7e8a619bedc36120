//! Clocked CORDIC engine.
//!
//! The engine holds at most one sample. A sample is accepted on an edge
//! where `in_valid` is high and the engine is idle, iterates for
//! [`ITERATIONS`] edges, and is then presented on the output port with
//! `out_valid` high.
//!
//! ```text
//!   Idle --in_valid--> Iterating(0) -> ... -> Iterating(N-1) --> Done
//!    ^                                                           |
//!    +---------------- out_ready (or one cycle, SinglePulse) ----+
//! ```
//!
//! `reset` on an edge overrides every other input and clears all registers.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::common::Fixed;
use crate::common::constants::{ITERATIONS, LATENCY};
use crate::common::error::{Result, SimError};
use crate::config::{Config, OutputPolicy};
use crate::stats::SimStats;

use super::control::{Control, Mode, RotationType};
use super::datapath::{DatapathAlu, Vector, Word, micro_rotate};

/// Payload of one input transaction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CordicSample {
    pub x: Fixed,
    pub y: Fixed,
    pub z: Fixed,
    #[serde(default)]
    pub mode: Mode,
    #[serde(default, alias = "rotType")]
    pub rot_type: RotationType,
}

impl CordicSample {
    pub fn new(x: Fixed, y: Fixed, z: Fixed, mode: Mode, rot_type: RotationType) -> Self {
        Self {
            x,
            y,
            z,
            mode,
            rot_type,
        }
    }

    /// Builds a sample from raw 16-bit port values.
    pub fn from_raw(x: i16, y: i16, z: i16, mode: Mode, rot_type: RotationType) -> Self {
        Self::new(
            Fixed::from_raw(x),
            Fixed::from_raw(y),
            Fixed::from_raw(z),
            mode,
            rot_type,
        )
    }

    pub fn control(&self) -> Control {
        Control::new(self.mode, self.rot_type)
    }
}

/// Payload of one output transaction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CordicOutput {
    pub x: Fixed,
    pub y: Fixed,
    pub z: Fixed,
}

/// Input port levels sampled on a rising edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CordicInputs {
    pub reset: bool,
    pub in_valid: bool,
    pub in_bits: CordicSample,
    pub out_ready: bool,
}

impl CordicInputs {
    /// All inputs low.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Only `reset` asserted.
    pub fn reset() -> Self {
        Self {
            reset: true,
            ..Self::default()
        }
    }

    /// Presents `sample` with `in_valid` asserted.
    pub fn offer(sample: CordicSample) -> Self {
        Self {
            in_valid: true,
            in_bits: sample,
            ..Self::default()
        }
    }

    pub fn with_ready(mut self, ready: bool) -> Self {
        self.out_ready = ready;
        self
    }
}

/// Top-level state of the controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EngineState {
    #[default]
    Idle,
    Iterating,
    Done,
}

/// Registers of the in-flight computation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CordicState {
    pub vector: Vector,
    /// Index of the next micro-rotation (`0..ITERATIONS`).
    pub step: usize,
    pub control: Control,
}

impl CordicState {
    fn load(sample: &CordicSample) -> Self {
        Self {
            vector: Vector {
                x: Word::from_port(sample.x),
                y: Word::from_port(sample.y),
                z: Word::from_port(sample.z),
            },
            step: 0,
            control: sample.control(),
        }
    }

    fn output(&self) -> CordicOutput {
        CordicOutput {
            x: self.vector.x.to_port(),
            y: self.vector.y.to_port(),
            z: self.vector.z.to_port(),
        }
    }
}

/// The CORDIC rotation/vectoring unit.
pub struct CordicEngine {
    state: EngineState,
    regs: CordicState,
    out: CordicOutput,
    policy: OutputPolicy,
    trace: bool,
    alu: DatapathAlu,
    stats: SimStats,
}

impl CordicEngine {
    pub fn new(config: &Config) -> Self {
        Self {
            state: EngineState::Idle,
            regs: CordicState::default(),
            out: CordicOutput::default(),
            policy: config.engine.output_policy,
            trace: config.trace_enabled(),
            alu: DatapathAlu,
            stats: SimStats::default(),
        }
    }

    /// `in_ready`: a new sample is accepted on the next edge.
    #[inline(always)]
    pub fn in_ready(&self) -> bool {
        self.state == EngineState::Idle
    }

    /// `out_valid`: `out_bits` holds a finished result.
    #[inline(always)]
    pub fn out_valid(&self) -> bool {
        self.state == EngineState::Done
    }

    /// Output register. Holds the last latched result (zero after reset);
    /// only meaningful while [`Self::out_valid`] is high.
    #[inline(always)]
    pub fn out_bits(&self) -> CordicOutput {
        self.out
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn registers(&self) -> &CordicState {
        &self.regs
    }

    pub fn policy(&self) -> OutputPolicy {
        self.policy
    }

    pub fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// One edge with only `reset` asserted.
    pub fn reset(&mut self) {
        self.tick(&CordicInputs::reset());
    }

    /// Advances the engine by one rising clock edge.
    pub fn tick(&mut self, io: &CordicInputs) {
        self.stats.cycles += 1;

        if io.reset {
            self.state = EngineState::Idle;
            self.regs = CordicState::default();
            self.out = CordicOutput::default();
            self.stats.resets += 1;
            debug!("cordic: reset");
            return;
        }

        match self.state {
            EngineState::Idle => {
                if io.in_valid {
                    self.regs = CordicState::load(&io.in_bits);
                    self.state = EngineState::Iterating;
                    self.stats.accepted += 1;
                    debug!(
                        "cordic: accept {} x={} y={} z={}",
                        self.regs.control, io.in_bits.x, io.in_bits.y, io.in_bits.z
                    );
                }
            }
            EngineState::Iterating => self.iterate(),
            EngineState::Done => {
                if io.out_ready {
                    self.stats.consumed += 1;
                    debug!("cordic: result consumed");
                }
                if io.out_ready || self.policy == OutputPolicy::SinglePulse {
                    self.state = EngineState::Idle;
                } else {
                    self.stats.backpressure_cycles += 1;
                }
            }
        }
    }

    fn iterate(&mut self) {
        let step = self.regs.step;
        let rom = self.regs.control.rot_type.table().step(step);

        self.regs.vector = micro_rotate(&self.alu, self.regs.vector, self.regs.control, rom);
        self.regs.step = step + 1;

        if self.trace {
            let v = &self.regs.vector;
            trace!(
                "cordic: step {:>2} shift={:>2} x={:#07x} y={:#07x} z={:#07x}",
                step,
                rom.shift,
                v.x.bits(),
                v.y.bits(),
                v.z.bits()
            );
        }

        if self.regs.step == ITERATIONS {
            self.out = self.regs.output();
            self.state = EngineState::Done;
            self.stats.completed += 1;
            debug!(
                "cordic: done x={} y={} z={}",
                self.out.x, self.out.y, self.out.z
            );
        }
    }

    /// Runs one complete transaction: offers `sample`, clocks until the
    /// result is valid, and consumes it.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::EngineBusy`] if a sample is already in flight or
    /// a result is waiting to be consumed.
    pub fn process(&mut self, sample: CordicSample) -> Result<CordicOutput> {
        if !self.in_ready() {
            return Err(SimError::EngineBusy { state: self.state });
        }

        self.tick(&CordicInputs::offer(sample));

        for _ in 0..=LATENCY {
            if self.out_valid() {
                let result = self.out_bits();
                self.tick(&CordicInputs::idle().with_ready(true));
                return Ok(result);
            }
            self.tick(&CordicInputs::idle());
        }

        Err(SimError::Timeout(LATENCY as u64 + 1))
    }
}

impl Default for CordicEngine {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
