//! Move tokens: a face plus a quarter-turn direction.
//!
//! Only twelve moves exist, `F B L R U D` and their primes. There are no
//! half turns, slice turns or wide turns. Directions are as seen from
//! outside the turning face.
//!
//! ```
//! use rust_cube::core::{parse_sequence, format_sequence, invert_sequence, Move};
//!
//! let moves = parse_sequence("R U R' U'").unwrap();
//! assert_eq!(moves[0], Move::R);
//! assert_eq!(format_sequence(&invert_sequence(&moves)), "U R U' R'");
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::CubeError;
use super::face::FaceId;

/// Quarter-turn direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// The opposite direction.
    #[must_use]
    pub const fn inverse(self) -> Direction {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// A sequence of moves.
/// SmallVec keeps typical scramble lengths off the heap.
pub type MoveSequence = SmallVec<[Move; 24]>;

/// A single quarter turn of one face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    face: FaceId,
    direction: Direction,
}

impl Move {
    pub const F: Move = Move::new(FaceId::Front, Direction::Clockwise);
    pub const B: Move = Move::new(FaceId::Back, Direction::Clockwise);
    pub const L: Move = Move::new(FaceId::Left, Direction::Clockwise);
    pub const R: Move = Move::new(FaceId::Right, Direction::Clockwise);
    pub const U: Move = Move::new(FaceId::Up, Direction::Clockwise);
    pub const D: Move = Move::new(FaceId::Down, Direction::Clockwise);
    pub const F_PRIME: Move = Move::new(FaceId::Front, Direction::CounterClockwise);
    pub const B_PRIME: Move = Move::new(FaceId::Back, Direction::CounterClockwise);
    pub const L_PRIME: Move = Move::new(FaceId::Left, Direction::CounterClockwise);
    pub const R_PRIME: Move = Move::new(FaceId::Right, Direction::CounterClockwise);
    pub const U_PRIME: Move = Move::new(FaceId::Up, Direction::CounterClockwise);
    pub const D_PRIME: Move = Move::new(FaceId::Down, Direction::CounterClockwise);

    /// Every valid move token.
    pub const ALL: [Move; 12] = [
        Move::F,
        Move::B,
        Move::L,
        Move::R,
        Move::U,
        Move::D,
        Move::F_PRIME,
        Move::B_PRIME,
        Move::L_PRIME,
        Move::R_PRIME,
        Move::U_PRIME,
        Move::D_PRIME,
    ];

    /// Create a move.
    #[must_use]
    pub const fn new(face: FaceId, direction: Direction) -> Self {
        Self { face, direction }
    }

    /// The turning face.
    #[must_use]
    pub const fn face(self) -> FaceId {
        self.face
    }

    /// The turn direction.
    #[must_use]
    pub const fn direction(self) -> Direction {
        self.direction
    }

    /// True for counter-clockwise (primed) moves.
    #[must_use]
    pub const fn is_prime(self) -> bool {
        matches!(self.direction, Direction::CounterClockwise)
    }

    /// The move that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Move {
        Move::new(self.face, self.direction.inverse())
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_prime() {
            write!(f, "{}'", self.face)
        } else {
            write!(f, "{}", self.face)
        }
    }
}

impl FromStr for Move {
    type Err = CubeError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let (letter, direction) = match token.strip_suffix('\'') {
            Some(letter) => (letter, Direction::CounterClockwise),
            None => (token, Direction::Clockwise),
        };

        let face = match letter {
            "F" => FaceId::Front,
            "B" => FaceId::Back,
            "L" => FaceId::Left,
            "R" => FaceId::Right,
            "U" => FaceId::Up,
            "D" => FaceId::Down,
            _ => return Err(CubeError::InvalidMove(token.to_string())),
        };

        Ok(Move::new(face, direction))
    }
}

/// Parse whitespace-separated move tokens.
///
/// Fails on the first token outside the twelve-move vocabulary.
pub fn parse_sequence(input: &str) -> Result<MoveSequence, CubeError> {
    input.split_whitespace().map(str::parse::<Move>).collect()
}

/// Format moves as space-separated tokens.
#[must_use]
pub fn format_sequence(moves: &[Move]) -> String {
    moves
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The sequence that undoes `moves`: reversed, each move inverted.
#[must_use]
pub fn invert_sequence(moves: &[Move]) -> MoveSequence {
    moves.iter().rev().map(|m| m.inverse()).collect()
}
