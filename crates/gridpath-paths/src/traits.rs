use gridpath_core::{Coord, Grid};

/// Minimal pathfinding interface shared by every search.
///
/// Implementors describe a `rows × cols` board and which axis neighbours
/// of a cell can be entered.
pub trait Pather {
    /// Board shape as `(rows, cols)`.
    fn size(&self) -> (usize, usize);

    /// Append the enterable neighbours of `p` into `buf`, in north, south,
    /// west, east order. The caller clears `buf` before calling.
    fn neighbors(&self, p: Coord, buf: &mut Vec<Coord>);

    /// Whether `p` lies inside the board.
    fn contains(&self, p: Coord) -> bool {
        let (rows, cols) = self.size();
        p.row >= 0 && p.col >= 0 && (p.row as usize) < rows && (p.col as usize) < cols
    }
}

impl Pather for Grid {
    fn size(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    fn neighbors(&self, p: Coord, buf: &mut Vec<Coord>) {
        Grid::neighbors(self, p, buf);
    }

    fn contains(&self, p: Coord) -> bool {
        Grid::contains(self, p)
    }
}
