use gridpath_core::Coord;

use crate::dijkstra::explore;
use crate::distance::manhattan;
use crate::frontier::walk_back;
use crate::search::{Search, SearchError};
use crate::traits::Pather;

/// A* search from `start` to `goal` with the Manhattan heuristic.
///
/// The heuristic is admissible and consistent on a 4-connected unit-cost
/// board, so the result is a shortest path. Reconstruction only steps onto
/// settled cells: a cell that was queued but never expanded may carry a
/// distance that matches yet was not finalised.
pub(crate) fn search<P: Pather>(
    pather: &P,
    start: Coord,
    goal: Coord,
) -> Result<Search, SearchError> {
    let ex = explore(pather, start, goal, |p| manhattan(p, goal));
    if !ex.found {
        return Err(SearchError::NoPath);
    }
    let settled = &ex.settled;
    let path = walk_back(ex.layout, &ex.dist, start, goal, |i| settled[i])
        .ok_or(SearchError::NoPath)?;
    Ok(Search {
        visited: ex.visited,
        path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dijkstra;
    use gridpath_core::{Cell, Grid};

    #[test]
    fn open_grid_path_is_manhattan() {
        let g = Grid::new(5, 5);
        let s = search(&g, Coord::new(0, 0), Coord::new(4, 4)).unwrap();
        assert_eq!(s.path.len(), 9);
        assert_eq!(s.path[0], 0);
        assert_eq!(s.path[8], 24);
    }

    #[test]
    fn heads_straight_for_the_goal() {
        let g = Grid::new(7, 7);
        let s = search(&g, Coord::new(3, 0), Coord::new(3, 6)).unwrap();
        let row: Vec<Coord> = (0..6).map(|c| Coord::new(3, c)).collect();
        assert_eq!(s.visited, row);
        assert_eq!(s.path, (21..28).collect::<Vec<_>>());
    }

    #[test]
    fn explores_no_more_than_uniform_cost() {
        let g = Grid::from_rows(vec![
            vec![0, 0, 0, 0, 0, 0, 0],
            vec![0, 1, 1, 1, 1, 1, 0],
            vec![0, 0, 0, 0, 0, 1, 0],
            vec![1, 1, 1, 1, 0, 1, 0],
            vec![0, 0, 0, 0, 0, 0, 0],
        ])
        .unwrap();
        let (start, goal) = (Coord::new(2, 0), Coord::new(4, 0));
        let a = search(&g, start, goal).unwrap();
        let d = dijkstra::search(&g, start, goal).unwrap();
        assert_eq!(a.path.len(), d.path.len());
        assert!(a.visited.len() <= d.visited.len());
    }

    #[test]
    fn path_only_crosses_settled_cells() {
        let g = Grid::new(6, 8);
        let s = search(&g, Coord::new(5, 0), Coord::new(0, 7)).unwrap();
        for &i in &s.path[..s.path.len() - 1] {
            assert!(s.visited.contains(&g.coord(i)));
        }
    }

    #[test]
    fn start_equals_goal() {
        let g = Grid::new(3, 3);
        let s = search(&g, Coord::new(0, 0), Coord::new(0, 0)).unwrap();
        assert_eq!(s.path, vec![0]);
        assert!(s.visited.is_empty());
    }

    #[test]
    fn enclosed_goal_has_no_path() {
        let mut g = Grid::new(5, 5);
        for p in Coord::new(4, 4).neighbors_4() {
            g.set(p, Cell::Wall);
        }
        let err = search(&g, Coord::new(0, 0), Coord::new(4, 4)).unwrap_err();
        assert_eq!(err, SearchError::NoPath);
    }
}
