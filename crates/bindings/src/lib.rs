//! Python bindings for the cordic-sim hardware model.
//!
//! The compiled module is importable as `cordic_sim._core`. It exposes the
//! clocked CORDIC engine, the adder/subtractor, and the gain pre-scaling
//! helpers so Python test benches can drive the model port by port.

mod alu;
mod conversion;
mod cordic;
mod stats;

use pyo3::prelude::*;

pub use crate::alu::PyAdderSubtractor;
pub use crate::cordic::PyCordic;
pub use crate::stats::PyStats;

/// Divides `magnitude` by the circular gain and returns the raw port value.
#[pyfunction]
fn prescale_circular(magnitude: f64) -> PyResult<i16> {
    conversion::prescale(cordic_sim::RotationType::Circular, magnitude)
}

/// Divides `magnitude` by the hyperbolic gain and returns the raw port value.
#[pyfunction]
fn prescale_hyperbolic(magnitude: f64) -> PyResult<i16> {
    conversion::prescale(cordic_sim::RotationType::Hyperbolic, magnitude)
}

/// Adds every class and function to `m`.
///
/// Shared by the `#[pymodule]` entry point and by the CLI, which injects
/// the module into an embedded interpreter.
pub fn register_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCordic>()?;
    m.add_class::<PyAdderSubtractor>()?;
    m.add_class::<PyStats>()?;
    m.add_function(wrap_pyfunction!(prescale_circular, m)?)?;
    m.add_function(wrap_pyfunction!(prescale_hyperbolic, m)?)?;
    m.add("FRAC_BITS", cordic_sim::common::constants::FRAC_BITS)?;
    m.add("LATENCY", cordic_sim::common::constants::LATENCY)?;
    Ok(())
}

#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    register_module(m)
}
