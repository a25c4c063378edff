//! Scramble driver: the only place randomness touches a cube.

pub mod scrambler;

pub use scrambler::{scramble, Scrambler};
