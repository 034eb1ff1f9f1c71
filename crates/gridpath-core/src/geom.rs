//! Board coordinates: [`Coord`].
//!
//! Coordinates are `(row, col)` pairs, 0-indexed, with rows growing down and
//! columns growing right. They order row-major, which is also the order used
//! to break ties between equally promising cells during search.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A 2D integer board position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Axis offsets in neighbour order: north, south, west, east.
    pub const DIRS_4: [Coord; 4] = [
        Coord::new(-1, 0),
        Coord::new(1, 0),
        Coord::new(0, -1),
        Coord::new(0, 1),
    ];

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four axis neighbours, in north, south, west, east order.
    ///
    /// Every search breaks ties through this order, so it must not change.
    #[inline]
    pub fn neighbors_4(self) -> [Coord; 4] {
        Self::DIRS_4.map(|d| self + d)
    }

    /// Whether `other` is exactly one row or one column away.
    #[inline]
    pub fn is_adjacent(self, other: Coord) -> bool {
        let d = self - other;
        d.row.abs() + d.col.abs() == 1
    }

    /// Row-major flat index on a board `cols` wide.
    ///
    /// Returns `None` for negative coordinates or a column outside `cols`.
    #[inline]
    pub fn index(self, cols: usize) -> Option<usize> {
        if self.row < 0 || self.col < 0 || self.col as usize >= cols {
            return None;
        }
        Some(self.row as usize * cols + self.col as usize)
    }

    /// Inverse of [`index`](Coord::index).
    #[inline]
    pub fn from_index(idx: usize, cols: usize) -> Self {
        Self::new((idx / cols) as i32, (idx % cols) as i32)
    }
}

// --- trait impls for Coord ---

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coord> for (i32, i32) {
    fn from(c: Coord) -> Self {
        (c.row, c.col)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}
