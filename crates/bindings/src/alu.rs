//! Adder/subtractor Python binding.

use crate::conversion::port_value;
use cordic_sim::core::units::alu::AdderIo;
use cordic_sim::{AdderSubtractor, Direction};
use pyo3::prelude::*;

/// Combinational 16-bit adder/subtractor.
#[pyclass(name = "AdderSubtractor")]
#[derive(Default)]
pub struct PyAdderSubtractor {
    inner: AdderSubtractor,
}

#[pymethods]
impl PyAdderSubtractor {
    #[new]
    fn new() -> Self {
        Self::default()
    }

    /// Drives `A`, `B` and `D` and returns the settled `S` port as a
    /// signed value.
    ///
    /// `d` is 0 for addition and anything else for subtraction.
    pub fn evaluate(&self, a: i64, b: i64, d: u8) -> PyResult<i16> {
        let io = AdderIo {
            a: port_value(a)?,
            b: port_value(b)?,
            d: Direction::from_bit(d != 0),
        };
        Ok(self.inner.evaluate(&io).raw())
    }
}
