//! # rust-cube
//!
//! A 3x3x3 cube state model and quarter-turn move engine.
//!
//! ## Design Principles
//!
//! 1. **One Mutator**: Only the move engine changes facelets. Callers hold
//!    a `CubeState` and hand it to `apply`; nothing else writes stickers.
//!
//! 2. **Named Faces**: Faces are stored as named fields and addressed via
//!    exhaustive matches on `FaceId`, never by raw index.
//!
//! 3. **Table-Driven Turns**: Each face turn is a quarter rotation of the
//!    face plus a one-strip shift of a fixed ring of twelve neighbouring
//!    facelets. The rings are data, checked by closure and inverse tests.
//!
//! ## Architecture
//!
//! - **Owned State**: No global cube. Every session owns its `CubeState`;
//!   `Clone` gives an independent copy that can move to another thread.
//!
//! - **Boundary Validation**: Move tokens and facelet strings are parsed
//!   into typed values at the edge. The engine itself cannot fail.
//!
//! ## Modules
//!
//! - `core`: Colors, faces, moves, cube state, RNG, configuration, errors
//! - `engine`: Strip geometry and move application
//! - `scramble`: Random scrambles
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod engine;
pub mod scramble;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Color, ColorScheme, CubeError, CubeRng, CubeRngState, CubeState, Direction, Face, FaceId,
    FaceletPos, Facelets, Move, MoveSequence, ScrambleConfig, FACELET_COUNT,
};
pub use crate::core::{format_sequence, invert_sequence, parse_sequence};

pub use crate::engine::{apply, apply_sequence, touched_facelets};

pub use crate::scramble::{scramble, Scrambler};
