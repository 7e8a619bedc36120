//! Simulator configuration.
//!
//! Only behavior that the hardware exposes as a build-time option lives
//! here. Register widths and the iteration depth are fixed in
//! [`crate::common::constants`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::{Result, SimError};

/// How long a finished result stays on the output port.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputPolicy {
    /// `out_valid` stays high until a cycle with `out_ready` consumes it.
    #[default]
    HoldUntilAccepted,
    /// `out_valid` is high for exactly one cycle, whether or not the
    /// consumer is ready.
    SinglePulse,
}

/// CORDIC engine options.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub output_policy: OutputPolicy,
}

/// Top-level simulator configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub engine: EngineConfig,
    /// Log every micro-rotation at `trace` level.
    pub trace: bool,
}

impl Config {
    /// Parses a JSON configuration document. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Json`] on malformed input or unknown fields.
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|source| SimError::Json {
            what: "configuration",
            source,
        })
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] if the file cannot be read, or
    /// [`SimError::Json`] if it cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Whether per-step tracing is on, either from the config or because
    /// the crate was built with `always-trace`.
    pub fn trace_enabled(&self) -> bool {
        cfg!(feature = "always-trace") || self.trace
    }
}
