//! Iterative fixed-point CORDIC engine.
//!
//! Computes circular and hyperbolic rotations and vectoring using only
//! shifts, additions, and subtractions. See [`engine`] for the clocked
//! interface and [`datapath`] for the per-step arithmetic.

pub mod control;
pub mod datapath;
pub mod engine;
pub mod table;

pub use self::control::{Control, Mode, RotationType};
pub use self::datapath::{DatapathAlu, Vector, Word, micro_rotate};
pub use self::engine::{
    CordicEngine, CordicInputs, CordicOutput, CordicSample, CordicState, EngineState,
};
pub use self::table::{AngleTable, MicroRotation, shift_schedule};
