//! Recursive division maze generation.
//!
//! The board starts as a solid border around an open interior. Each region
//! is then cut by a wall with a single hole, and both halves are cut again
//! until they are too thin to hold another wall. Walls sit on even offsets
//! and holes on odd offsets, so a later wall never covers an earlier hole
//! and every open cell stays reachable.
//!
//! Every carved cell is appended to the maze history in the order it was
//! carved, for animated playback.

use std::cmp::Ordering;

use gridpath_core::{BoardSize, Cell, Coord, Grid};
use rand::{Rng, RngExt};

/// Regions whose cut dimension is below this are left open.
pub const MIN_DIVIDE: usize = 5;

/// A generated maze and its carving history.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Maze {
    pub grid: Grid,
    /// Every carved cell, wall or hole, in carve order.
    pub history: Vec<Coord>,
}

impl Maze {
    /// Number of holes left in dividing walls.
    pub fn holes(&self) -> usize {
        self.history
            .iter()
            .filter(|&&p| self.grid.at(p) == Some(Cell::Empty))
            .count()
    }
}

/// A rectangular sub-region under subdivision. Its outer ring is wall.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Region {
    x: usize,
    y: usize,
    width: usize,
    height: usize,
}

/// Maze generator owning the random source used for every cut.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a new generator drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a maze on one of the preset board sizes.
    pub fn generate_size(&mut self, size: BoardSize) -> Maze {
        let (rows, cols) = size.dims();
        self.generate(rows, cols)
    }

    /// Generate a `rows × cols` recursive division maze.
    pub fn generate(&mut self, rows: usize, cols: usize) -> Maze {
        let mut grid = Grid::filled(rows, cols, Cell::Wall);
        for r in 1..rows.saturating_sub(1) {
            for c in 1..cols.saturating_sub(1) {
                grid.set(Coord::new(r as i32, c as i32), Cell::Empty);
            }
        }

        let mut history = border(rows, cols);
        let mut dividers = 0usize;

        // Depth-first over regions: the first half is finished before the
        // second one is touched.
        let mut stack = vec![Region {
            x: 0,
            y: 0,
            width: cols,
            height: rows,
        }];
        while let Some(region) = stack.pop() {
            let Some((first, second)) = self.divide(&mut grid, &mut history, region) else {
                continue;
            };
            dividers += 1;
            stack.push(second);
            stack.push(first);
        }

        log::debug!(
            "maze {rows}x{cols}: {dividers} dividers, {} cells carved",
            history.len()
        );
        Maze { grid, history }
    }

    /// Cut `region` with one wall, returning the two halves. Both halves
    /// include the new wall as their shared edge.
    fn divide(
        &mut self,
        grid: &mut Grid,
        history: &mut Vec<Coord>,
        region: Region,
    ) -> Option<(Region, Region)> {
        let Region {
            x,
            y,
            width,
            height,
        } = region;

        let horizontal = match width.cmp(&height) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => self.rng.random_bool(0.5),
        };

        // (size across the cut, size along it)
        let (across, along) = if horizontal {
            (height, width)
        } else {
            (width, height)
        };
        if across < MIN_DIVIDE || along < 3 {
            return None;
        }

        let wall = 2 * self.rng.random_range(1..=(across - 3) / 2);
        let hole = 2 * self.rng.random_range(0..=(along - 3) / 2) + 1;

        // Map (offset across, offset along) to a board coordinate.
        let origin = Coord::new(y as i32, x as i32);
        let at = |a: usize, b: usize| {
            let (a, b) = (a as i32, b as i32);
            if horizontal {
                origin.shift(a, b)
            } else {
                origin.shift(b, a)
            }
        };

        for b in (1..along - 1).filter(|&b| b != hole) {
            let p = at(wall, b);
            grid.set(p, Cell::Wall);
            history.push(p);
        }
        history.push(at(wall, hole));

        log::trace!(
            "divide {}x{} at ({y}, {x}): {} wall at {}, hole at {}",
            height,
            width,
            if horizontal { "horizontal" } else { "vertical" },
            at(wall, 0),
            at(wall, hole)
        );

        Some(if horizontal {
            (
                Region {
                    x,
                    y,
                    width,
                    height: wall + 1,
                },
                Region {
                    x,
                    y: y + wall,
                    width,
                    height: height - wall,
                },
            )
        } else {
            (
                Region {
                    x,
                    y,
                    width: wall + 1,
                    height,
                },
                Region {
                    x: x + wall,
                    y,
                    width: width - wall,
                    height,
                },
            )
        })
    }
}

/// The outer ring traced clockwise from the top-left corner: top row left
/// to right, right column downwards, bottom row right to left, left column
/// upwards. Each cell appears once.
fn border(rows: usize, cols: usize) -> Vec<Coord> {
    let mut ring = Vec::new();
    if rows == 0 || cols == 0 {
        return ring;
    }
    let (last_r, last_c) = (rows as i32 - 1, cols as i32 - 1);

    ring.extend((0..=last_c).map(|c| Coord::new(0, c)));
    ring.extend((1..=last_r).map(|r| Coord::new(r, last_c)));
    if last_r > 0 {
        ring.extend((0..last_c).rev().map(|c| Coord::new(last_r, c)));
    }
    if last_c > 0 {
        ring.extend((1..last_r).rev().map(|r| Coord::new(r, 0)));
    }
    ring
}
