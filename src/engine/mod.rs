//! Move engine: the only code that turns faces.
//!
//! - `strips`: which twelve neighbouring facelets each face turn cycles
//! - `turn`: applying single moves and sequences
//!
//! ```
//! use rust_cube::core::{CubeState, Move};
//!
//! let mut cube = CubeState::new();
//! cube.apply(Move::R);
//! assert!(!cube.is_solved());
//! cube.apply(Move::R_PRIME);
//! assert!(cube.is_solved());
//! ```

pub mod strips;
pub mod turn;

pub use strips::{ring, touched_facelets, Ring, Strip};
pub use turn::{apply, apply_sequence};
