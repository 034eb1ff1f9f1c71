//! The [`Cell`] type — the state of one board position.

use crate::grid::GridError;

/// One board position.
///
/// The persisted integer encoding is `Empty = 0`, `Wall = 1`, `Start = 2`,
/// `End = 3`. Searches only care whether a cell is a [`Wall`](Cell::Wall).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub enum Cell {
    #[default]
    Empty,
    Wall,
    Start,
    End,
}

impl Cell {
    /// The persisted integer value of this cell.
    #[inline]
    pub const fn value(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Wall => 1,
            Self::Start => 2,
            Self::End => 3,
        }
    }

    /// Whether a search may step onto this cell.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Wall)
    }

    /// The cell as written by the board saver: markers become plain floor.
    #[inline]
    pub const fn normalized(self) -> Self {
        match self {
            Self::Wall => Self::Wall,
            _ => Self::Empty,
        }
    }
}

impl TryFrom<u8> for Cell {
    type Error = GridError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(Self::Empty),
            1 => Ok(Self::Wall),
            2 => Ok(Self::Start),
            3 => Ok(Self::End),
            value => Err(GridError::UnknownCell { value, pos: None }),
        }
    }
}

impl From<Cell> for u8 {
    fn from(c: Cell) -> Self {
        c.value()
    }
}
