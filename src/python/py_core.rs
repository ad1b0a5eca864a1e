//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::core::{GameError, Rgb};

/// Convert an engine error into a Python `ValueError`.
pub(crate) fn value_error(err: GameError) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
}

/// Python wrapper for Rgb.
#[pyclass(name = "Rgb")]
#[derive(Clone, Debug)]
pub struct PyRgb(pub Rgb);

#[pymethods]
impl PyRgb {
    #[new]
    fn new(r: u8, g: u8, b: u8) -> Self {
        Self(Rgb::new(r, g, b))
    }

    /// Parse an `rgb(R, G, B)` code.
    #[staticmethod]
    fn parse(code: &str) -> PyResult<Self> {
        code.parse::<Rgb>().map(Self).map_err(value_error)
    }

    #[getter]
    fn r(&self) -> u8 {
        self.0.r
    }

    #[getter]
    fn g(&self) -> u8 {
        self.0.g
    }

    #[getter]
    fn b(&self) -> u8 {
        self.0.b
    }

    /// The `rgb(R, G, B)` text code.
    fn code(&self) -> String {
        self.0.code()
    }

    fn __repr__(&self) -> String {
        format!("Rgb({}, {}, {})", self.0.r, self.0.g, self.0.b)
    }

    fn __str__(&self) -> String {
        self.0.code()
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
