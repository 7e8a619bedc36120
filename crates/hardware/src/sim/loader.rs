//! JSON stimulus files.
//!
//! A stimulus file is an array of input samples, replayed in order by the
//! CLI `batch` command.

use std::fs;
use std::path::Path;

use log::debug;

use crate::common::{Result, SimError};
use crate::core::units::cordic::CordicSample;

/// Parses a JSON array of input samples.
///
/// ```json
/// [
///   { "x": "0b0000100110110010", "y": 0, "z": 0, "mode": "rotation", "rot_type": "circular" },
///   { "x": "0x1000", "y": "0xCDBD", "z": 0, "mode": "vectoring" }
/// ]
/// ```
///
/// `mode` and `rot_type` default to rotation and circular.
pub fn parse_stimulus(text: &str) -> Result<Vec<CordicSample>> {
    serde_json::from_str(text).map_err(|source| SimError::Json {
        what: "stimulus",
        source,
    })
}

pub fn load_stimulus(path: impl AsRef<Path>) -> Result<Vec<CordicSample>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let samples = parse_stimulus(&text)?;
    debug!("loader: {} samples from {}", samples.len(), path.display());
    Ok(samples)
}
