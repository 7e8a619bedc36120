//! Statistics snapshot exposed to Python.

use cordic_sim::stats::SimStats;
use pyo3::prelude::*;
use pyo3::types::PyDict;

/// Read-only copy of the engine counters.
#[pyclass(name = "Stats", frozen)]
#[derive(Clone, Debug)]
pub struct PyStats {
    #[pyo3(get)]
    pub cycles: u64,
    #[pyo3(get)]
    pub accepted: u64,
    #[pyo3(get)]
    pub completed: u64,
    #[pyo3(get)]
    pub consumed: u64,
    #[pyo3(get)]
    pub backpressure_cycles: u64,
    #[pyo3(get)]
    pub resets: u64,
}

impl From<SimStats> for PyStats {
    fn from(s: SimStats) -> Self {
        Self {
            cycles: s.cycles,
            accepted: s.accepted,
            completed: s.completed,
            consumed: s.consumed,
            backpressure_cycles: s.backpressure_cycles,
            resets: s.resets,
        }
    }
}

#[pymethods]
impl PyStats {
    /// Returns the counters as a plain dict.
    pub fn to_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let d = PyDict::new(py);
        d.set_item("cycles", self.cycles)?;
        d.set_item("accepted", self.accepted)?;
        d.set_item("completed", self.completed)?;
        d.set_item("consumed", self.consumed)?;
        d.set_item("backpressure_cycles", self.backpressure_cycles)?;
        d.set_item("resets", self.resets)?;
        Ok(d)
    }

    fn __repr__(&self) -> String {
        format!(
            "Stats(cycles={}, accepted={}, completed={}, consumed={})",
            self.cycles, self.accepted, self.completed, self.consumed
        )
    }
}
