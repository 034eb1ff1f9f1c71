//! Shortest-path and exploration searches over gridpath boards.
//!
//! Three interchangeable algorithms share one contract: given a board, a
//! start and an end, return the cells settled during exploration (in order,
//! for step-by-step playback) and the path from start to end as row-major
//! flat indices.
//!
//! - **Dijkstra** uniform-cost search ([`dijkstra`])
//! - **A\*** with the Manhattan heuristic ([`astar`])
//! - **Depth-first search**, which returns the first path it finds ([`dfs`])
//!
//! Every search allocates its own distance table and visited set, so
//! independent calls never share state.
//!
//! ```
//! use gridpath_core::{Coord, Grid};
//! use gridpath_paths::Algorithm;
//!
//! let grid = Grid::new(5, 5);
//! let found = Algorithm::AStar
//!     .run(&grid, Some(Coord::new(0, 0)), Some(Coord::new(4, 4)))
//!     .unwrap();
//! assert_eq!(found.path.len(), 9);
//! ```

mod astar;
mod dfs;
mod dijkstra;
mod distance;
mod frontier;
mod search;
mod traits;

use gridpath_core::Coord;

pub use distance::manhattan;
pub use frontier::UNREACHABLE;
pub use search::{Algorithm, ErrorKind, Search, SearchError, UnknownAlgorithm};
pub use traits::Pather;

/// Uniform-cost search. See [`Algorithm::Dijkstra`].
pub fn dijkstra<P: Pather>(
    pather: &P,
    start: Option<Coord>,
    end: Option<Coord>,
) -> Result<Search, SearchError> {
    Algorithm::Dijkstra.run(pather, start, end)
}

/// A* search. See [`Algorithm::AStar`].
pub fn astar<P: Pather>(
    pather: &P,
    start: Option<Coord>,
    end: Option<Coord>,
) -> Result<Search, SearchError> {
    Algorithm::AStar.run(pather, start, end)
}

/// Depth-first search. See [`Algorithm::Dfs`].
pub fn dfs<P: Pather>(
    pather: &P,
    start: Option<Coord>,
    end: Option<Coord>,
) -> Result<Search, SearchError> {
    Algorithm::Dfs.run(pather, start, end)
}
