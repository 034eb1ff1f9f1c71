//! The [`Grid`] type — a fixed-size 2D board of [`Cell`]s.
//!
//! Unlike a shared render buffer, a `Grid` is a plain owned value: cloning it
//! copies the cells, and it can be sent to another thread. Searches borrow
//! it immutably.

use std::fmt;

use crate::cell::Cell;
use crate::geom::Coord;

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A `rows × cols` board of [`Cell`]s stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vec<Cell>>", into = "Vec<Vec<Cell>>")
)]
pub struct Grid {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Create a new grid of the given dimensions, filled with empty cells.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, Cell::Empty)
    }

    /// Create a new grid with every cell set to `cell`.
    pub fn filled(rows: usize, cols: usize, cell: Cell) -> Self {
        Self {
            cells: vec![cell; rows * cols],
            rows,
            cols,
        }
    }

    /// Build a grid from nested integer rows (the persisted board shape).
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, GridError> {
        let mut cells = Vec::with_capacity(rows.len() * rows.first().map_or(0, Vec::len));
        let cols = rows.first().map_or(0, Vec::len);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::Ragged {
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
            for (c, &value) in row.iter().enumerate() {
                let cell = Cell::try_from(value).map_err(|_| GridError::UnknownCell {
                    value,
                    pos: Some(Coord::new(r as i32, c as i32)),
                })?;
                cells.push(cell);
            }
        }
        Ok(Self {
            cells,
            rows: rows.len(),
            cols,
        })
    }

    /// Nested integer rows in the raw encoding (markers preserved).
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        if self.cols == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.cells
            .chunks(self.cols.max(1))
            .take(self.rows)
            .map(|row| row.iter().map(|c| c.value()).collect())
            .collect()
    }

    /// A copy of this grid with start and end markers cleared to floor.
    pub fn normalized(&self) -> Grid {
        Grid {
            cells: self.cells.iter().map(|c| c.normalized()).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` lies inside the board.
    #[inline]
    pub fn contains(&self, p: Coord) -> bool {
        p.row >= 0 && p.col >= 0 && (p.row as usize) < self.rows && (p.col as usize) < self.cols
    }

    /// Flat row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Coord) -> Option<usize> {
        if self.contains(p) {
            p.index(self.cols)
        } else {
            None
        }
    }

    /// Coordinate of a flat index.
    #[inline]
    pub fn coord(&self, idx: usize) -> Coord {
        Coord::from_index(idx, self.cols.max(1))
    }

    /// Get the cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Coord) -> Option<Cell> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Set the cell at `p`. No-op if `p` is out of bounds.
    pub fn set(&mut self, p: Coord, cell: Cell) {
        if let Some(i) = self.index(p) {
            self.cells[i] = cell;
        }
    }

    /// Fill every cell with `cell`.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Whether `p` is in bounds and not a wall.
    #[inline]
    pub fn passable(&self, p: Coord) -> bool {
        self.at(p).is_some_and(Cell::is_passable)
    }

    /// Append the passable axis neighbours of `p` to `buf`, in north,
    /// south, west, east order.
    pub fn neighbors(&self, p: Coord, buf: &mut Vec<Coord>) {
        for n in p.neighbors_4() {
            if self.passable(n) {
                buf.push(n);
            }
        }
    }

    /// Count cells equal to `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// First coordinate (row-major) holding `cell`.
    pub fn find(&self, cell: Cell) -> Option<Coord> {
        self.cells
            .iter()
            .position(|&c| c == cell)
            .map(|i| self.coord(i))
    }

    /// Location of the start marker, if one is placed.
    pub fn start(&self) -> Option<Coord> {
        self.find(Cell::Start)
    }

    /// Location of the end marker, if one is placed.
    pub fn end(&self) -> Option<Coord> {
        self.find(Cell::End)
    }

    /// Row-major iterator over `(Coord, Cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &c)| (self.coord(i), c))
    }
}

impl TryFrom<Vec<Vec<Cell>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<Cell>>) -> Result<Self, Self::Error> {
        let cols = rows.first().map_or(0, Vec::len);
        let nrows = rows.len();
        let mut cells = Vec::with_capacity(nrows * cols);
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::Ragged {
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend(row);
        }
        Ok(Self {
            cells,
            rows: nrows,
            cols,
        })
    }
}

/// Persisted form: nested rows with markers normalized away.
impl From<Grid> for Vec<Vec<Cell>> {
    fn from(g: Grid) -> Self {
        g.cells
            .chunks(g.cols.max(1))
            .take(g.rows)
            .map(|row| row.iter().map(|c| c.normalized()).collect())
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 && i % self.cols == 0 {
                writeln!(f)?;
            }
            let ch = match cell {
                Cell::Empty => '.',
                Cell::Wall => '#',
                Cell::Start => 'S',
                Cell::End => 'E',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// GridError
// ---------------------------------------------------------------------------

/// Errors that can occur when building a grid from integer rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A row's length differs from the first row's.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// An integer outside the cell encoding was found.
    UnknownCell { value: u8, pos: Option<Coord> },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has {found} cells, expected {expected}"
            ),
            Self::UnknownCell { value, pos: Some(p) } => {
                write!(f, "grid: unknown cell value {value} at {p}")
            }
            Self::UnknownCell { value, pos: None } => {
                write!(f, "grid: unknown cell value {value}")
            }
        }
    }
}

impl std::error::Error for GridError {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn saves_as_nested_integers_without_markers() {
        let g = Grid::from_rows(vec![vec![1, 2, 0], vec![0, 3, 1]]).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, "[[1,0,0],[0,0,1]]");
    }

    #[test]
    fn loads_nested_integers() {
        let g: Grid = serde_json::from_str("[[0,1],[1,0]]").unwrap();
        assert_eq!(g.rows(), 2);
        assert_eq!(g.at(Coord::new(0, 1)), Some(Cell::Wall));
        assert!(serde_json::from_str::<Grid>("[[0,1],[1]]").is_err());
        assert!(serde_json::from_str::<Grid>("[[0,9]]").is_err());
    }
}
