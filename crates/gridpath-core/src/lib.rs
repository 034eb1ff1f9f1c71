//! **gridpath-core** — grid model shared by the gridpath crates.
//!
//! This crate provides the board every other gridpath crate works on:
//! coordinates, cell states, the [`Grid`] itself, and the preset board
//! sizes. Grids convert to and from the nested-integer shape used for
//! saved boards.

pub mod cell;
pub mod config;
pub mod geom;
pub mod grid;

pub use cell::Cell;
pub use config::{BoardSize, UnknownBoardSize};
pub use geom::Coord;
pub use grid::{Grid, GridError};
