//! Board presets offered by the visualizer menu.

use std::fmt;
use std::str::FromStr;

use crate::grid::Grid;

/// A preset board shape.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BoardSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl BoardSize {
    /// All presets, smallest first.
    pub const ALL: [BoardSize; 3] = [Self::Small, Self::Medium, Self::Large];

    /// Board shape as `(rows, cols)`. Both are odd so recursive-division
    /// mazes get a closed border on every side.
    pub const fn dims(self) -> (usize, usize) {
        match self {
            Self::Small => (23, 33),
            Self::Medium => (41, 51),
            Self::Large => (65, 79),
        }
    }

    /// An empty grid of this size.
    pub fn grid(self) -> Grid {
        let (rows, cols) = self.dims();
        Grid::new(rows, cols)
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }

    /// Folder that saved boards of this size live in: the lowercase name.
    pub const fn folder(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a board size name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBoardSize(pub String);

impl fmt::Display for UnknownBoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown board size \u{201c}{}\u{201d}", self.0)
    }
}

impl std::error::Error for UnknownBoardSize {}

impl FromStr for BoardSize {
    type Err = UnknownBoardSize;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownBoardSize(s.to_string()))
    }
}
