//! Core cube types: colors, faces, moves, state, RNG, configuration.
//!
//! Nothing in this module mutates facelets apart from `CubeState::reset`;
//! turning faces is the job of [`crate::engine`].

pub mod color;
pub mod config;
pub mod error;
pub mod face;
pub mod moves;
pub mod rng;
pub mod state;

pub use color::Color;
pub use config::{ColorScheme, ScrambleConfig};
pub use error::CubeError;
pub use face::{Face, FaceId, FaceletPos};
pub use moves::{format_sequence, invert_sequence, parse_sequence, Direction, Move, MoveSequence};
pub use rng::{CubeRng, CubeRngState};
pub use state::{CubeState, Facelets, FACELET_COUNT};
