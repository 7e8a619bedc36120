//! Simulator error types.
//!
//! The arithmetic units themselves never fail: every representable input
//! produces a result and overflow wraps silently. Errors only arise at the
//! edges of the model, when parsing stimulus or configuration, or when a
//! caller misuses the transaction-level driver.

use thiserror::Error;

use crate::core::units::cordic::EngineState;

/// Errors raised outside the clocked datapath.
#[derive(Debug, Error)]
pub enum SimError {
    /// A raw literal could not be parsed as a 16-bit value.
    #[error("invalid fixed-point literal '{0}' (expected decimal, 0x.. or 0b.. within 16 bits)")]
    InvalidLiteral(String),

    /// A mode or rotation-type name was not recognized.
    #[error("unknown control value '{0}'")]
    InvalidControl(String),

    /// A real value does not fit the Q4.12 port format.
    #[error("value {value} is outside the Q4.12 range [-8.0, 8.0)")]
    OutOfRange {
        /// The rejected value.
        value: f64,
    },

    /// `process` was called while a computation was still in flight.
    #[error("engine is busy ({state:?}); a new sample can only be accepted when idle")]
    EngineBusy {
        /// The state the engine was in.
        state: EngineState,
    },

    /// The engine did not raise `out_valid` within the expected latency.
    #[error("no result after {0} cycles")]
    Timeout(u64),

    /// A file could not be read.
    #[error("failed to read '{path}': {source}")]
    Io {
        /// Path of the file.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A JSON document could not be decoded.
    #[error("failed to parse {what}: {source}")]
    Json {
        /// What was being parsed.
        what: &'static str,
        /// Underlying decoder error.
        #[source]
        source: serde_json::Error,
    },
}

/// Result alias used by the fallible simulator entry points.
pub type Result<T> = std::result::Result<T, SimError>;
