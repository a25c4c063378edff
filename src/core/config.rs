//! Configuration types.
//!
//! - `ColorScheme`: which color identifies each face of a solved cube
//! - `ScrambleConfig`: scramble length and seed

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::color::Color;
use super::error::CubeError;
use super::face::FaceId;

/// Assignment of an identity color to each face.
///
/// The default scheme is Front white, Back yellow, Left green,
/// Right blue, Up red, Down orange.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorScheme {
    pub up: Color,
    pub right: Color,
    pub front: Color,
    pub down: Color,
    pub left: Color,
    pub back: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            up: Color::Red,
            right: Color::Blue,
            front: Color::White,
            down: Color::Orange,
            left: Color::Green,
            back: Color::Yellow,
        }
    }
}

impl ColorScheme {
    /// The color assigned to `face`.
    #[must_use]
    pub const fn color(&self, face: FaceId) -> Color {
        match face {
            FaceId::Up => self.up,
            FaceId::Right => self.right,
            FaceId::Front => self.front,
            FaceId::Down => self.down,
            FaceId::Left => self.left,
            FaceId::Back => self.back,
        }
    }

    /// Return a scheme with `face` recolored.
    #[must_use]
    pub fn with(mut self, face: FaceId, color: Color) -> Self {
        match face {
            FaceId::Up => self.up = color,
            FaceId::Right => self.right = color,
            FaceId::Front => self.front = color,
            FaceId::Down => self.down = color,
            FaceId::Left => self.left = color,
            FaceId::Back => self.back = color,
        }
        self
    }

    /// The face identified by `color`, if any.
    #[must_use]
    pub fn face_of(&self, color: Color) -> Option<FaceId> {
        FaceId::ALL.into_iter().find(|&face| self.color(face) == color)
    }

    /// Check that all six faces have distinct colors.
    pub fn validate(&self) -> Result<(), CubeError> {
        let mut seen = FxHashSet::default();
        for face in FaceId::ALL {
            let color = self.color(face);
            if !seen.insert(color) {
                return Err(CubeError::DuplicateColor(color));
            }
        }
        Ok(())
    }
}

/// Scramble parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrambleConfig {
    /// Number of moves drawn per scramble (default: 20).
    pub length: usize,

    /// RNG seed. `None` seeds from system entropy.
    pub seed: Option<u64>,
}

impl Default for ScrambleConfig {
    fn default() -> Self {
        Self {
            length: 20,
            seed: None,
        }
    }
}

impl ScrambleConfig {
    /// Create a new config with a custom scramble length.
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Create a new config with a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
