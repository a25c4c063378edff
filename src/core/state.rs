//! Cube state: six faces plus move history.
//!
//! ## Facelets
//!
//! The 54 stickers, stored as one named [`Face`] per side. Two cubes are
//! in the same configuration exactly when their `Facelets` are equal.
//!
//! ## CubeState
//!
//! Facelets, the color scheme the cube was built with, and the ordered
//! history of applied moves. Facelets are only ever changed by the move
//! engine; everything public here is read-only apart from `reset`.
//!
//! The facelet string lists faces in the order Up, Right, Front, Down,
//! Left, Back, each face row-major, for 54 symbols in total.

use im::Vector;
use log::debug;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::color::Color;
use super::config::ColorScheme;
use super::error::CubeError;
use super::face::{Face, FaceId, FaceletPos};
use super::moves::Move;

/// Number of facelets on a cube.
pub const FACELET_COUNT: usize = 54;

/// The six faces of a cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Facelets {
    up: Face,
    right: Face,
    front: Face,
    down: Face,
    left: Face,
    back: Face,
}

impl Facelets {
    /// Solved facelets for `scheme`.
    #[must_use]
    pub fn solved(scheme: &ColorScheme) -> Self {
        Self {
            up: Face::uniform(scheme.up),
            right: Face::uniform(scheme.right),
            front: Face::uniform(scheme.front),
            down: Face::uniform(scheme.down),
            left: Face::uniform(scheme.left),
            back: Face::uniform(scheme.back),
        }
    }

    /// Get a face.
    #[must_use]
    pub fn face(&self, id: FaceId) -> &Face {
        match id {
            FaceId::Up => &self.up,
            FaceId::Right => &self.right,
            FaceId::Front => &self.front,
            FaceId::Down => &self.down,
            FaceId::Left => &self.left,
            FaceId::Back => &self.back,
        }
    }

    pub(crate) fn face_mut(&mut self, id: FaceId) -> &mut Face {
        match id {
            FaceId::Up => &mut self.up,
            FaceId::Right => &mut self.right,
            FaceId::Front => &mut self.front,
            FaceId::Down => &mut self.down,
            FaceId::Left => &mut self.left,
            FaceId::Back => &mut self.back,
        }
    }

    /// Color at a position.
    #[must_use]
    pub fn get(&self, pos: FaceletPos) -> Color {
        self.face(pos.face).get(pos.row, pos.col)
    }

    pub(crate) fn set(&mut self, pos: FaceletPos, color: Color) {
        self.face_mut(pos.face).set(pos.row, pos.col, color);
    }

    /// All 54 colors in facelet string order.
    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        FaceId::ALL.into_iter().flat_map(move |id| self.face(id).iter())
    }

    /// True if every face is uniformly its center color.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        FaceId::ALL.into_iter().all(|id| self.face(id).is_uniform())
    }
}

/// A cube: facelets, color scheme, and move history.
///
/// `Clone` produces a fully independent copy. Faces are plain arrays and
/// the history is a persistent vector, so no mutable storage is shared.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CubeState {
    facelets: Facelets,
    scheme: ColorScheme,
    history: Vector<Move>,
}

impl Default for CubeState {
    fn default() -> Self {
        Self::new()
    }
}

impl CubeState {
    /// A solved cube with the default color scheme.
    #[must_use]
    pub fn new() -> Self {
        let scheme = ColorScheme::default();
        Self {
            facelets: Facelets::solved(&scheme),
            scheme,
            history: Vector::new(),
        }
    }

    /// A solved cube with a custom color scheme.
    ///
    /// Fails if two faces share a color.
    pub fn with_scheme(scheme: ColorScheme) -> Result<Self, CubeError> {
        scheme.validate()?;
        Ok(Self {
            facelets: Facelets::solved(&scheme),
            scheme,
            history: Vector::new(),
        })
    }

    /// Build a cube from a 54-symbol facelet string.
    ///
    /// The string must use the documented face order with each color
    /// appearing nine times and six distinct centers. The color scheme is
    /// read from the centers; history starts empty.
    ///
    /// ```
    /// use rust_cube::core::CubeState;
    ///
    /// let solved = CubeState::new();
    /// let parsed = CubeState::from_color_string(&solved.to_color_string()).unwrap();
    /// assert!(parsed.is_solved());
    /// assert!(CubeState::from_color_string("rrr").is_err());
    /// ```
    pub fn from_color_string(input: &str) -> Result<Self, CubeError> {
        let colors =
            parse_colors(input).inspect_err(|e| debug!("rejected facelet string: {e}"))?;

        let mut facelets = Facelets::solved(&ColorScheme::default());
        for (i, color) in colors.iter().enumerate() {
            let face = FaceId::ALL[i / 9];
            let cell = i % 9;
            facelets.set(FaceletPos::new(face, cell / 3, cell % 3), *color);
        }

        let scheme = ColorScheme {
            up: facelets.up.center(),
            right: facelets.right.center(),
            front: facelets.front.center(),
            down: facelets.down.center(),
            left: facelets.left.center(),
            back: facelets.back.center(),
        };
        scheme.validate()?;

        Ok(Self {
            facelets,
            scheme,
            history: Vector::new(),
        })
    }

    // === Queries ===

    /// All facelets.
    #[must_use]
    pub fn facelets(&self) -> &Facelets {
        &self.facelets
    }

    pub(crate) fn facelets_mut(&mut self) -> &mut Facelets {
        &mut self.facelets
    }

    /// Get a face.
    #[must_use]
    pub fn face(&self, id: FaceId) -> &Face {
        self.facelets.face(id)
    }

    /// Color of one facelet.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in `0..3`.
    #[must_use]
    pub fn facelet(&self, face: FaceId, row: usize, col: usize) -> Color {
        self.facelets.face(face).get(row, col)
    }

    /// The scheme this cube was created with.
    #[must_use]
    pub fn scheme(&self) -> &ColorScheme {
        &self.scheme
    }

    /// True if every face matches its center.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.facelets.is_solved()
    }

    /// True if a single face matches its center.
    #[must_use]
    pub fn is_face_solved(&self, id: FaceId) -> bool {
        self.facelets.face(id).is_uniform()
    }

    /// Serialize all 54 facelets as color symbols.
    #[must_use]
    pub fn to_color_string(&self) -> String {
        self.facelets.iter().map(Color::symbol).collect()
    }

    // === History ===

    /// Applied moves, oldest first.
    #[must_use]
    pub fn move_history(&self) -> &Vector<Move> {
        &self.history
    }

    /// Number of applied moves.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Most recently applied move.
    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.history.back().copied()
    }

    pub(crate) fn record(&mut self, mv: Move) {
        self.history.push_back(mv);
    }

    // === Lifecycle ===

    /// Restore the solved configuration and clear history.
    pub fn reset(&mut self) {
        debug!("reset after {} moves", self.history.len());
        self.facelets = Facelets::solved(&self.scheme);
        self.history.clear();
    }
}

/// Length is checked before any colors are collected, so an oversized
/// input never allocates.
fn parse_colors(input: &str) -> Result<Vec<Color>, CubeError> {
    let len = input.chars().count();
    if len != FACELET_COUNT {
        return Err(CubeError::WrongLength(len));
    }

    let colors = input
        .chars()
        .enumerate()
        .map(|(index, symbol)| {
            Color::from_symbol(symbol).ok_or(CubeError::InvalidColor { symbol, index })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut counts: FxHashMap<Color, usize> = FxHashMap::default();
    for &color in &colors {
        *counts.entry(color).or_default() += 1;
    }
    for color in Color::ALL {
        let count = counts.get(&color).copied().unwrap_or(0);
        if count != 9 {
            return Err(CubeError::ColorCount { color, count });
        }
    }

    Ok(colors)
}

/// Text net for diagnostics:
///
/// ```text
///     U
///   L F R B
///     D
/// ```
impl std::fmt::Display for CubeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let row = |id: FaceId, r: usize| -> String {
            self.face(id).rows()[r].iter().map(|c| c.symbol()).collect()
        };

        for r in 0..3 {
            writeln!(f, "    {}", row(FaceId::Up, r))?;
        }
        for r in 0..3 {
            writeln!(
                f,
                "{} {} {} {}",
                row(FaceId::Left, r),
                row(FaceId::Front, r),
                row(FaceId::Right, r),
                row(FaceId::Back, r)
            )?;
        }
        for r in 0..3 {
            writeln!(f, "    {}", row(FaceId::Down, r))?;
        }
        Ok(())
    }
}
