//! Boundary errors.
//!
//! The move engine is total over its inputs and never fails. Errors only
//! arise where external text enters the crate: move tokens, facelet
//! strings, and user-supplied color schemes.

use thiserror::Error;

use super::color::Color;

/// Contract violations detected at the crate boundary.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CubeError {
    /// A move token outside `F B L R U D` and their primes.
    #[error("invalid move token {0:?} (expected one of F B L R U D, optionally followed by ')")]
    InvalidMove(String),

    /// A facelet symbol outside `w y r o b g`.
    #[error("invalid color symbol {symbol:?} at index {index}")]
    InvalidColor { symbol: char, index: usize },

    /// A facelet string that is not exactly 54 symbols long.
    #[error("facelet string has {0} symbols, expected 54")]
    WrongLength(usize),

    /// A color that does not cover exactly nine facelets.
    #[error("color {color} appears {count} times, expected 9")]
    ColorCount { color: Color, count: usize },

    /// Two faces were assigned the same identity color.
    #[error("color {0} is assigned to more than one face")]
    DuplicateColor(Color),
}
