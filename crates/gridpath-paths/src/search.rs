//! The shared search contract: [`Algorithm`], [`Search`] and [`SearchError`].

use std::fmt;
use std::str::FromStr;

use gridpath_core::Coord;

use crate::traits::Pather;
use crate::{astar, dfs, dijkstra};

// ---------------------------------------------------------------------------
// Search result
// ---------------------------------------------------------------------------

/// Outcome of a successful search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Search {
    /// Cells settled during exploration, in the order they were settled.
    pub visited: Vec<Coord>,
    /// Row-major flat indices from start to end inclusive.
    pub path: Vec<usize>,
}

impl Search {
    /// The path un-flattened back into coordinates on a board `cols` wide.
    pub fn path_coords(&self, cols: usize) -> Vec<Coord> {
        self.path
            .iter()
            .map(|&i| Coord::from_index(i, cols.max(1)))
            .collect()
    }

    /// Number of moves along the path.
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Broad failure category, for callers that only need to pick a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The search could not start.
    InvalidInput,
    /// Every reachable cell was explored without meeting the end.
    NoPath,
}

/// Errors returned by every search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// No start cell was placed.
    MissingStart,
    /// No end cell was placed.
    MissingEnd,
    /// The start or end lies outside the board.
    OutOfBounds(Coord),
    /// The end is not reachable from the start.
    NoPath,
}

impl SearchError {
    /// The category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingStart | Self::MissingEnd | Self::OutOfBounds(_) => ErrorKind::InvalidInput,
            Self::NoPath => ErrorKind::NoPath,
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStart => f.write_str("start point not found"),
            Self::MissingEnd => f.write_str("end point not found"),
            Self::OutOfBounds(p) => write!(f, "point {p} is outside the board"),
            Self::NoPath => f.write_str("no path found"),
        }
    }
}

impl std::error::Error for SearchError {}

/// Validate the endpoints of a search.
pub(crate) fn endpoints<P: Pather>(
    pather: &P,
    start: Option<Coord>,
    end: Option<Coord>,
) -> Result<(Coord, Coord), SearchError> {
    let start = start.ok_or(SearchError::MissingStart)?;
    let end = end.ok_or(SearchError::MissingEnd)?;
    for p in [start, end] {
        if !pather.contains(p) {
            return Err(SearchError::OutOfBounds(p));
        }
    }
    Ok((start, end))
}

// ---------------------------------------------------------------------------
// Algorithm
// ---------------------------------------------------------------------------

/// The interchangeable search strategies.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    /// Uniform-cost search.
    #[default]
    Dijkstra,
    /// Uniform-cost search guided by the Manhattan heuristic.
    AStar,
    /// Exhaustive depth-first search; finds *a* path, not the shortest.
    Dfs,
}

impl Algorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [Algorithm; 3] = [Self::Dijkstra, Self::AStar, Self::Dfs];

    /// The name shown in the algorithm picker.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dijkstra => "Dijkstra's Algorithm",
            Self::AStar => "A* Search",
            Self::Dfs => "Depth-First Search",
        }
    }

    /// Short identifier, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dijkstra => "dijkstra",
            Self::AStar => "astar",
            Self::Dfs => "dfs",
        }
    }

    /// Whether the returned path is guaranteed to be a shortest one.
    pub const fn is_optimal(self) -> bool {
        !matches!(self, Self::Dfs)
    }

    /// Search from `start` to `end` on `pather`.
    ///
    /// Fails with [`SearchError::MissingStart`] / [`SearchError::MissingEnd`]
    /// when a marker is unset, and with [`SearchError::NoPath`] when `end`
    /// cannot be reached.
    pub fn run<P: Pather>(
        self,
        pather: &P,
        start: Option<Coord>,
        end: Option<Coord>,
    ) -> Result<Search, SearchError> {
        let result = endpoints(pather, start, end).and_then(|(start, end)| match self {
            Self::Dijkstra => dijkstra::search(pather, start, end),
            Self::AStar => astar::search(pather, start, end),
            Self::Dfs => dfs::search(pather, start, end),
        });
        match &result {
            Ok(s) => log::debug!(
                "{}: settled {} cells, path of {} steps",
                self.name(),
                s.visited.len(),
                s.steps()
            ),
            Err(e) => log::debug!("{}: {e}", self.name()),
        }
        result
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when an algorithm name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown algorithm \u{201c}{}\u{201d}", self.0)
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        match key.to_ascii_lowercase().as_str() {
            "dijkstra" | "ucs" => Ok(Self::Dijkstra),
            "astar" | "a*" | "a-star" => Ok(Self::AStar),
            "dfs" | "depth-first" => Ok(Self::Dfs),
            _ => Self::ALL
                .into_iter()
                .find(|a| a.label().eq_ignore_ascii_case(key))
                .ok_or_else(|| UnknownAlgorithm(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::Grid;

    #[test]
    fn parse_names_and_labels() {
        assert_eq!("dijkstra".parse::<Algorithm>(), Ok(Algorithm::Dijkstra));
        assert_eq!("A*".parse::<Algorithm>(), Ok(Algorithm::AStar));
        assert_eq!("DFS".parse::<Algorithm>(), Ok(Algorithm::Dfs));
        assert_eq!("A* Search".parse::<Algorithm>(), Ok(Algorithm::AStar));
        assert_eq!(
            "depth-first search".parse::<Algorithm>(),
            Ok(Algorithm::Dfs)
        );
        assert!("bogo".parse::<Algorithm>().is_err());
        for a in Algorithm::ALL {
            assert_eq!(a.name().parse::<Algorithm>(), Ok(a));
        }
    }

    #[test]
    fn missing_markers_are_invalid_input() {
        let g = Grid::new(3, 3);
        for a in Algorithm::ALL {
            let err = a.run(&g, None, Some(Coord::new(2, 2))).unwrap_err();
            assert_eq!(err, SearchError::MissingStart);
            assert_eq!(err.kind(), ErrorKind::InvalidInput);

            let err = a.run(&g, Some(Coord::new(0, 0)), None).unwrap_err();
            assert_eq!(err, SearchError::MissingEnd);
            assert_eq!(err.kind(), ErrorKind::InvalidInput);
        }
    }

    #[test]
    fn out_of_bounds_is_invalid_input() {
        let g = Grid::new(3, 3);
        let err = Algorithm::Dijkstra
            .run(&g, Some(Coord::new(0, 0)), Some(Coord::new(3, 0)))
            .unwrap_err();
        assert_eq!(err, SearchError::OutOfBounds(Coord::new(3, 0)));
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn error_messages() {
        assert_eq!(SearchError::NoPath.to_string(), "no path found");
        assert_eq!(SearchError::NoPath.kind(), ErrorKind::NoPath);
        assert_eq!(
            SearchError::OutOfBounds(Coord::new(-1, 2)).to_string(),
            "point (-1, 2) is outside the board"
        );
    }

    #[test]
    fn path_helpers() {
        let s = Search {
            visited: vec![],
            path: vec![0, 1, 6],
        };
        assert_eq!(s.steps(), 2);
        assert_eq!(
            s.path_coords(5),
            vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 1)]
        );
        assert_eq!(Search::default().steps(), 0);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn search_round_trip() {
        let s = Search {
            visited: vec![Coord::new(0, 0), Coord::new(0, 1)],
            path: vec![0, 1, 2],
        };
        let json = serde_json::to_string(&s).unwrap();
        let back: Search = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }

    #[test]
    fn algorithm_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Algorithm::AStar).unwrap(), "\"astar\"");
    }
}
