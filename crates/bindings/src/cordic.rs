//! CORDIC engine Python binding.
//!
//! Mirrors the RTL ports so a test bench can drive the model one clock
//! edge at a time, plus a `process` shortcut for whole transactions.

use crate::conversion::{port_value, py_dict_to_config, to_py_err};
use crate::stats::PyStats;
use cordic_sim::{CordicEngine, CordicInputs, CordicSample, EngineState, Mode, RotationType};
use pyo3::prelude::*;

/// Python-exposed CORDIC engine.
#[pyclass(name = "Cordic")]
pub struct PyCordic {
    pub inner: CordicEngine,
}

fn sample(x: i64, y: i64, z: i64, mode: Mode, rot_type: RotationType) -> PyResult<CordicSample> {
    Ok(CordicSample::new(
        port_value(x)?,
        port_value(y)?,
        port_value(z)?,
        mode,
        rot_type,
    ))
}

#[pymethods]
impl PyCordic {
    /// Creates an engine in the idle state.
    ///
    /// `config` is an optional dict with the same shape as a JSON
    /// configuration file, e.g. `{"engine": {"output_policy": "single_pulse"}}`.
    #[new]
    #[pyo3(signature = (config=None))]
    fn new(py: Python<'_>, config: Option<&Bound<'_, PyAny>>) -> PyResult<Self> {
        let config = py_dict_to_config(py, config)?;
        Ok(Self {
            inner: CordicEngine::new(&config),
        })
    }

    /// Applies one rising clock edge with the given input port levels.
    ///
    /// `mode` and `rot_type` are the single-bit control ports
    /// (`control_mode`, `control_rotType`).
    #[pyo3(signature = (
        reset=false, in_valid=false, x=0, y=0, z=0, mode=0, rot_type=0, out_ready=false
    ))]
    #[allow(clippy::too_many_arguments)]
    pub fn tick(
        &mut self,
        reset: bool,
        in_valid: bool,
        x: i64,
        y: i64,
        z: i64,
        mode: u8,
        rot_type: u8,
        out_ready: bool,
    ) -> PyResult<()> {
        let io = CordicInputs {
            reset,
            in_valid,
            in_bits: sample(
                x,
                y,
                z,
                Mode::from_bit(mode != 0),
                RotationType::from_bit(rot_type != 0),
            )?,
            out_ready,
        };
        self.inner.tick(&io);
        Ok(())
    }

    /// One edge with only `reset` asserted.
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    #[getter]
    pub fn in_ready(&self) -> bool {
        self.inner.in_ready()
    }

    #[getter]
    pub fn out_valid(&self) -> bool {
        self.inner.out_valid()
    }

    /// Current `(x, y, z)` on the output port as signed raw values.
    pub fn out_bits(&self) -> (i16, i16, i16) {
        let out = self.inner.out_bits();
        (out.x.raw(), out.y.raw(), out.z.raw())
    }

    #[getter]
    pub fn state(&self) -> &'static str {
        match self.inner.state() {
            EngineState::Idle => "idle",
            EngineState::Iterating => "iterating",
            EngineState::Done => "done",
        }
    }

    /// Runs one full transaction and returns the raw `(x, y, z)` result.
    ///
    /// # Errors
    /// Raises `RuntimeError` if the engine is not idle, and `ValueError`
    /// for unknown mode or rotation-type names.
    #[pyo3(signature = (x, y, z, mode="rotation", rot_type="circular"))]
    pub fn process(
        &mut self,
        x: i64,
        y: i64,
        z: i64,
        mode: &str,
        rot_type: &str,
    ) -> PyResult<(i16, i16, i16)> {
        let mode: Mode = mode.parse().map_err(to_py_err)?;
        let rot_type: RotationType = rot_type.parse().map_err(to_py_err)?;
        let out = self
            .inner
            .process(sample(x, y, z, mode, rot_type)?)
            .map_err(to_py_err)?;
        Ok((out.x.raw(), out.y.raw(), out.z.raw()))
    }

    /// Returns a snapshot of the engine counters.
    pub fn get_stats(&self) -> PyStats {
        PyStats::from(self.inner.stats().clone())
    }
}
