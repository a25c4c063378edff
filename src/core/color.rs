//! Facelet colors.
//!
//! Exactly six colors exist. Each has a single-character symbol used by
//! the facelet string consumed by renderers.

use serde::{Deserialize, Serialize};

/// One of the six sticker colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    White,
    Yellow,
    Red,
    Orange,
    Blue,
    Green,
}

impl Color {
    /// All colors, in symbol order `w y r o b g`.
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Yellow,
        Color::Red,
        Color::Orange,
        Color::Blue,
        Color::Green,
    ];

    /// The single-character symbol for this color.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Color::White => 'w',
            Color::Yellow => 'y',
            Color::Red => 'r',
            Color::Orange => 'o',
            Color::Blue => 'b',
            Color::Green => 'g',
        }
    }

    /// Look up a color by its symbol.
    ///
    /// ```
    /// use rust_cube::core::Color;
    ///
    /// assert_eq!(Color::from_symbol('g'), Some(Color::Green));
    /// assert_eq!(Color::from_symbol('G'), None);
    /// ```
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Color> {
        match symbol {
            'w' => Some(Color::White),
            'y' => Some(Color::Yellow),
            'r' => Some(Color::Red),
            'o' => Some(Color::Orange),
            'b' => Some(Color::Blue),
            'g' => Some(Color::Green),
            _ => None,
        }
    }

    /// Dense index in `0..6`, matching the position in [`Color::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
