//! Python-to-Rust value conversion.

use cordic_sim::{Config, Fixed, RotationType, SimError};
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

/// Maps a simulator error onto the matching Python exception.
pub fn to_py_err(err: SimError) -> PyErr {
    match err {
        SimError::EngineBusy { .. } | SimError::Timeout(_) => {
            PyRuntimeError::new_err(err.to_string())
        }
        _ => PyValueError::new_err(err.to_string()),
    }
}

/// Builds a [`Config`] from an optional Python dict.
///
/// The dict is round-tripped through `json.dumps` so it goes through the
/// same decoder as configuration files; `None` yields the defaults.
pub fn py_dict_to_config(py: Python<'_>, obj: Option<&Bound<'_, PyAny>>) -> PyResult<Config> {
    let Some(obj) = obj.filter(|o| !o.is_none()) else {
        return Ok(Config::default());
    };
    let text: String = py
        .import("json")?
        .call_method1("dumps", (obj,))?
        .extract()?;
    Config::from_json_str(&text).map_err(to_py_err)
}

/// Interprets a Python int as a 16-bit port value.
///
/// Both signed values (`-4505`) and unsigned bit patterns (`0xEE67`) are
/// accepted, the way cocotb writes to a signal.
pub fn port_value(value: i64) -> PyResult<Fixed> {
    if let Ok(raw) = i16::try_from(value) {
        Ok(Fixed::from_raw(raw))
    } else if let Ok(bits) = u16::try_from(value) {
        Ok(Fixed::from_bits(bits))
    } else {
        Err(PyValueError::new_err(format!(
            "{value} does not fit in a 16-bit port"
        )))
    }
}

pub fn prescale(rot_type: RotationType, magnitude: f64) -> PyResult<i16> {
    rot_type
        .prescale(magnitude)
        .map(Fixed::raw)
        .map_err(to_py_err)
}
