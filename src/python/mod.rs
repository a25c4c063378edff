//! Python bindings for the rust-cube engine.
//!
//! # Quick Start
//!
//! ```python
//! import rust_cube as rc
//!
//! cube = rc.Cube()
//! moves = cube.scramble(20, seed=42)
//!
//! # Undo the scramble
//! for token in reversed(moves):
//!     cube.apply(str(rc.Move(token).inverse()))
//! assert cube.is_solved()
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::CubeError;

mod py_core;
mod py_cube;

pub use py_core::*;
pub use py_cube::*;

impl From<CubeError> for PyErr {
    fn from(err: CubeError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// rust-cube: a 3x3x3 cube model and move engine.
///
/// This module provides:
/// - `Cube`: facelet state, moves, scrambles, facelet string
/// - `Move`: the twelve quarter-turn tokens
/// - `Scrambler`: seeded scramble streams
#[pymodule]
fn rust_cube(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMove>()?;
    m.add_class::<PyCube>()?;
    m.add_class::<PyScrambler>()?;

    Ok(())
}
