//! Maze generation for gridpath boards.
//!
//! [`MazeGen`] builds recursive division mazes: a solid border, then walls
//! with one hole each, carved until the regions are too thin to cut. The
//! generator owns a single random source threaded through every cut, so a
//! seeded generator reproduces the same maze and the same carving history.
//!
//! ```
//! use gridpath_maze::MazeGen;
//! use rand::SeedableRng;
//!
//! let mut mg = MazeGen::new(rand::rngs::StdRng::seed_from_u64(7));
//! let maze = mg.generate(21, 31);
//! assert_eq!(maze.grid.rows(), 21);
//! assert!(!maze.history.is_empty());
//! ```

pub mod division;

pub use division::{MIN_DIVIDE, Maze, MazeGen};
