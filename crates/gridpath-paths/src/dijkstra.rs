use std::collections::BinaryHeap;

use gridpath_core::Coord;

use crate::frontier::{Layout, NodeRef, UNREACHABLE, walk_back};
use crate::search::{Search, SearchError};
use crate::traits::Pather;

/// State left behind by a best-first exploration.
pub(crate) struct Explored {
    pub(crate) layout: Layout,
    pub(crate) dist: Vec<u32>,
    pub(crate) settled: Vec<bool>,
    pub(crate) visited: Vec<Coord>,
    pub(crate) found: bool,
}

/// Best-first exploration from `start` until `goal` is popped.
///
/// Queue priority is `distance + estimate(cell)`; a zero estimate gives
/// uniform-cost search. Ties are broken by coordinate, row-major. The goal
/// itself is never recorded as settled.
pub(crate) fn explore<P: Pather>(
    pather: &P,
    start: Coord,
    goal: Coord,
    estimate: impl Fn(Coord) -> u32,
) -> Explored {
    let layout = Layout::of(pather);
    let mut dist = vec![UNREACHABLE; layout.len()];
    let mut settled = vec![false; layout.len()];
    let mut visited = Vec::new();

    let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
    if let Some(si) = layout.idx(start) {
        dist[si] = 0;
        open.push(NodeRef { pos: start, key: 0 });
    }

    let mut nbuf = Vec::with_capacity(4);

    let found = 'search: loop {
        let Some(current) = open.pop() else {
            break 'search false;
        };
        let Some(ci) = layout.idx(current.pos) else {
            continue;
        };

        // Skip stale entries.
        if settled[ci] {
            continue;
        }

        if current.pos == goal {
            break 'search true;
        }

        settled[ci] = true;
        visited.push(current.pos);
        let tentative = dist[ci] + 1;

        nbuf.clear();
        pather.neighbors(current.pos, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = layout.idx(np) else {
                continue;
            };
            if tentative >= dist[ni] {
                continue;
            }
            dist[ni] = tentative;
            open.push(NodeRef {
                pos: np,
                key: tentative + estimate(np),
            });
        }
    };

    Explored {
        layout,
        dist,
        settled,
        visited,
        found,
    }
}

/// Uniform-cost search from `start` to `goal`.
///
/// With unit edge costs this settles cells in breadth-first order. The path
/// is rebuilt by walking back from `goal`, at each step taking the first
/// neighbour one unit closer to the start.
pub(crate) fn search<P: Pather>(
    pather: &P,
    start: Coord,
    goal: Coord,
) -> Result<Search, SearchError> {
    let ex = explore(pather, start, goal, |_| 0);
    if !ex.found {
        return Err(SearchError::NoPath);
    }
    let path = walk_back(ex.layout, &ex.dist, start, goal, |_| true)
        .ok_or(SearchError::NoPath)?;
    Ok(Search {
        visited: ex.visited,
        path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::{Cell, Grid};

    fn idx(g: &Grid, row: i32, col: i32) -> usize {
        g.index(Coord::new(row, col)).unwrap()
    }

    #[test]
    fn open_grid_path_is_manhattan() {
        let g = Grid::new(5, 5);
        let s = search(&g, Coord::new(0, 0), Coord::new(4, 4)).unwrap();
        assert_eq!(s.path.len(), 9);
        assert_eq!(s.path[0], 0);
        assert_eq!(s.path[8], 24);
    }

    #[test]
    fn start_equals_goal() {
        let g = Grid::new(5, 5);
        let s = search(&g, Coord::new(2, 3), Coord::new(2, 3)).unwrap();
        assert_eq!(s.path, vec![13]);
        assert!(s.visited.is_empty());
    }

    #[test]
    fn settles_in_breadth_first_order() {
        let g = Grid::new(3, 3);
        let s = search(&g, Coord::new(1, 1), Coord::new(2, 2)).unwrap();
        // Start, then its four neighbours in row-major order, then the
        // distance-2 cells that sort before the goal.
        assert_eq!(
            s.visited,
            vec![
                Coord::new(1, 1),
                Coord::new(0, 1),
                Coord::new(1, 0),
                Coord::new(1, 2),
                Coord::new(2, 1),
                Coord::new(0, 0),
                Coord::new(0, 2),
                Coord::new(2, 0),
            ]
        );
        assert!(!s.visited.contains(&Coord::new(2, 2)));
    }

    #[test]
    fn each_cell_settled_once() {
        let g = Grid::new(6, 6);
        let s = search(&g, Coord::new(0, 0), Coord::new(5, 5)).unwrap();
        let mut seen = s.visited.clone();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), s.visited.len());
    }

    #[test]
    fn reconstruction_prefers_north_then_south_west_east() {
        // Walking back from (2, 2) tries north first, so the path hugs the
        // top row and the right column.
        let g = Grid::new(3, 3);
        let s = search(&g, Coord::new(0, 0), Coord::new(2, 2)).unwrap();
        assert_eq!(
            s.path,
            vec![
                idx(&g, 0, 0),
                idx(&g, 0, 1),
                idx(&g, 0, 2),
                idx(&g, 1, 2),
                idx(&g, 2, 2),
            ]
        );
    }

    #[test]
    fn routes_around_walls() {
        let g = Grid::from_rows(vec![
            vec![0, 0, 0, 0],
            vec![1, 1, 1, 0],
            vec![0, 0, 0, 0],
        ])
        .unwrap();
        let s = search(&g, Coord::new(2, 0), Coord::new(0, 0)).unwrap();
        assert_eq!(s.path.len(), 9);
        assert_eq!(s.path[0], idx(&g, 2, 0));
        assert_eq!(*s.path.last().unwrap(), idx(&g, 0, 0));
    }

    #[test]
    fn enclosed_start_has_no_path() {
        let mut g = Grid::new(5, 5);
        for p in Coord::new(2, 2).neighbors_4() {
            g.set(p, Cell::Wall);
        }
        let err = search(&g, Coord::new(2, 2), Coord::new(0, 0)).unwrap_err();
        assert_eq!(err, SearchError::NoPath);
    }

    #[test]
    fn walled_goal_has_no_path() {
        let mut g = Grid::new(3, 3);
        g.set(Coord::new(2, 2), Cell::Wall);
        let err = search(&g, Coord::new(0, 0), Coord::new(2, 2)).unwrap_err();
        assert_eq!(err, SearchError::NoPath);
    }
}
