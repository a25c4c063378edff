//! Move token bindings for Python.

use pyo3::prelude::*;

use crate::core::Move;

/// Python wrapper for Move.
#[pyclass(name = "Move")]
#[derive(Clone, Debug)]
pub struct PyMove(pub Move);

#[pymethods]
impl PyMove {
    /// Parse a move token such as `"R"` or `"U'"`.
    #[new]
    fn new(token: &str) -> PyResult<Self> {
        Ok(Self(token.parse::<Move>()?))
    }

    /// All twelve moves.
    #[staticmethod]
    fn all() -> Vec<PyMove> {
        Move::ALL.into_iter().map(PyMove).collect()
    }

    /// The move that undoes this one.
    fn inverse(&self) -> PyMove {
        PyMove(self.0.inverse())
    }

    /// Face letter (`U R F D L B`).
    #[getter]
    fn face(&self) -> String {
        self.0.face().to_string()
    }

    /// True for counter-clockwise moves.
    #[getter]
    fn is_prime(&self) -> bool {
        self.0.is_prime()
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!("Move({:?})", self.0.to_string())
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut hasher = DefaultHasher::new();
        self.0.hash(&mut hasher);
        hasher.finish()
    }
}
