//! Faces and facelet addressing.
//!
//! ## FaceId
//!
//! The six fixed sides of the cube. Their declaration order is the order
//! faces appear in the facelet string: Up, Right, Front, Down, Left, Back.
//!
//! ## Face
//!
//! A 3×3 grid of colors addressed by `(row, col)`, both in `0..3`, as seen
//! from outside the cube. Cell `(1, 1)` is the center.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::moves::Direction;

/// Identifier for one of the six faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FaceId {
    Up,
    Right,
    Front,
    Down,
    Left,
    Back,
}

impl FaceId {
    /// All faces, in facelet string order.
    pub const ALL: [FaceId; 6] = [
        FaceId::Up,
        FaceId::Right,
        FaceId::Front,
        FaceId::Down,
        FaceId::Left,
        FaceId::Back,
    ];

    /// The face on the other side of the cube.
    #[must_use]
    pub const fn opposite(self) -> FaceId {
        match self {
            FaceId::Up => FaceId::Down,
            FaceId::Down => FaceId::Up,
            FaceId::Front => FaceId::Back,
            FaceId::Back => FaceId::Front,
            FaceId::Left => FaceId::Right,
            FaceId::Right => FaceId::Left,
        }
    }

    /// Move-notation letter for this face.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            FaceId::Up => 'U',
            FaceId::Right => 'R',
            FaceId::Front => 'F',
            FaceId::Down => 'D',
            FaceId::Left => 'L',
            FaceId::Back => 'B',
        }
    }

    /// Position in [`FaceId::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for FaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Address of a single facelet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FaceletPos {
    pub face: FaceId,
    pub row: usize,
    pub col: usize,
}

impl FaceletPos {
    #[must_use]
    pub const fn new(face: FaceId, row: usize, col: usize) -> Self {
        Self { face, row, col }
    }
}

/// A 3×3 grid of facelet colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Face {
    cells: [[Color; 3]; 3],
}

impl Face {
    /// A face with every cell set to `color`.
    #[must_use]
    pub const fn uniform(color: Color) -> Self {
        Self {
            cells: [[color; 3]; 3],
        }
    }

    /// Build a face from explicit rows.
    #[must_use]
    pub const fn from_rows(cells: [[Color; 3]; 3]) -> Self {
        Self { cells }
    }

    /// Color at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in `0..3`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Color {
        self.cells[row][col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, color: Color) {
        self.cells[row][col] = color;
    }

    /// The center color, which identifies the face.
    #[must_use]
    pub fn center(&self) -> Color {
        self.cells[1][1]
    }

    /// Rows, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[[Color; 3]; 3] {
        &self.cells
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// True if all nine cells match the center.
    #[must_use]
    pub fn is_uniform(&self) -> bool {
        let center = self.center();
        self.iter().all(|c| c == center)
    }

    /// Rotate the grid a quarter turn in place.
    ///
    /// Clockwise sends `(r, c)` to `(c, 2 - r)`; counter-clockwise is the
    /// inverse. The center never moves.
    pub(crate) fn rotate(&mut self, direction: Direction) {
        let old = self.cells;
        for (r, row) in old.iter().enumerate() {
            for (c, &color) in row.iter().enumerate() {
                match direction {
                    Direction::Clockwise => self.cells[c][2 - r] = color,
                    Direction::CounterClockwise => self.cells[2 - c][r] = color,
                }
            }
        }
    }
}
