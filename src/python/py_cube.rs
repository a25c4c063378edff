//! Cube and scrambler bindings for Python.

use numpy::PyArray1;
use pyo3::prelude::*;

use crate::core::{format_sequence, parse_sequence, CubeState, Move, ScrambleConfig};
use crate::scramble::Scrambler;

/// Python wrapper for CubeState.
#[pyclass(name = "Cube")]
#[derive(Clone, Debug)]
pub struct PyCube(pub CubeState);

#[pymethods]
impl PyCube {
    /// Create a solved cube, or one read from a 54-symbol facelet string.
    #[new]
    #[pyo3(signature = (color_string=None))]
    fn new(color_string: Option<&str>) -> PyResult<Self> {
        let state = match color_string {
            Some(s) => CubeState::from_color_string(s)?,
            None => CubeState::new(),
        };
        Ok(Self(state))
    }

    /// Apply one move token.
    fn apply(&mut self, token: &str) -> PyResult<()> {
        let mv: Move = token.parse()?;
        self.0.apply(mv);
        Ok(())
    }

    /// Apply whitespace-separated moves. Nothing is applied if any token
    /// is invalid.
    fn apply_sequence(&mut self, moves: &str) -> PyResult<()> {
        let moves = parse_sequence(moves)?;
        self.0.apply_sequence(&moves);
        Ok(())
    }

    /// Scramble with `n` random moves and return them.
    #[pyo3(signature = (n=20, seed=None))]
    fn scramble(&mut self, n: usize, seed: Option<u64>) -> Vec<String> {
        let config = ScrambleConfig::default().with_length(n);
        let config = match seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        };
        let moves = Scrambler::new(config).scramble(&mut self.0);
        moves.iter().map(ToString::to_string).collect()
    }

    fn is_solved(&self) -> bool {
        self.0.is_solved()
    }

    /// Facelet string in Up, Right, Front, Down, Left, Back order.
    fn color_string(&self) -> String {
        self.0.to_color_string()
    }

    /// Applied moves as tokens, oldest first.
    fn history(&self) -> Vec<String> {
        self.0.move_history().iter().map(ToString::to_string).collect()
    }

    fn reset(&mut self) {
        self.0.reset();
    }

    /// Independent copy.
    fn copy(&self) -> Self {
        self.clone()
    }

    /// Facelet color indices (0..6) as a numpy array of 54 entries.
    fn to_array<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<u8>> {
        let indices: Vec<u8> = self
            .0
            .facelets()
            .iter()
            .map(|c| c.index() as u8)
            .collect();
        PyArray1::from_vec_bound(py, indices)
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "Cube(solved={}, history={:?})",
            self.0.is_solved(),
            format_sequence(&self.0.move_history().iter().copied().collect::<Vec<_>>())
        )
    }

    /// True if both cubes show the same facelets.
    ///
    /// Compares configuration only: color scheme and move history are
    /// ignored, so two cubes reached by different move sequences are equal.
    fn __eq__(&self, other: &Self) -> bool {
        self.0.facelets() == other.0.facelets()
    }
}

/// Python wrapper for Scrambler.
#[pyclass(name = "Scrambler")]
#[derive(Clone, Debug)]
pub struct PyScrambler(pub Scrambler);

#[pymethods]
impl PyScrambler {
    #[new]
    #[pyo3(signature = (length=20, seed=None))]
    fn new(length: usize, seed: Option<u64>) -> Self {
        let config = ScrambleConfig { length, seed };
        Self(Scrambler::new(config))
    }

    /// Scramble `cube` in place and return the moves drawn.
    fn scramble(&mut self, mut cube: PyRefMut<'_, PyCube>) -> Vec<String> {
        let moves = self.0.scramble(&mut cube.0);
        moves.iter().map(ToString::to_string).collect()
    }

    #[getter]
    fn seed(&self) -> u64 {
        self.0.seed()
    }

    fn __repr__(&self) -> String {
        format!(
            "Scrambler(length={}, seed={})",
            self.0.config().length,
            self.0.seed()
        )
    }
}
