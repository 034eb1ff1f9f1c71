use gridpath_core::Coord;

use crate::frontier::Layout;
use crate::search::{Search, SearchError};
use crate::traits::Pather;

const NO_PARENT: usize = usize::MAX;

/// Depth-first search from `start` to `goal`.
///
/// Neighbours are pushed in north, south, west, east order, so east is
/// explored first. The first path that reaches `goal` is returned; it is a
/// valid path but usually not a shortest one. The explicit stack keeps
/// memory on the heap, so board size is not limited by call depth.
pub(crate) fn search<P: Pather>(
    pather: &P,
    start: Coord,
    goal: Coord,
) -> Result<Search, SearchError> {
    let layout = Layout::of(pather);
    let mut parent = vec![NO_PARENT; layout.len()];
    let mut seen = vec![false; layout.len()];
    let mut visited = Vec::new();

    // Frames are (cell, index of the cell it was pushed from).
    let mut stack: Vec<(Coord, usize)> = vec![(start, NO_PARENT)];
    let mut nbuf = Vec::with_capacity(4);

    let found = 'search: loop {
        let Some((node, from)) = stack.pop() else {
            break 'search None;
        };
        let Some(ni) = layout.idx(node) else {
            continue;
        };
        if seen[ni] {
            continue;
        }
        parent[ni] = from;

        if node == goal {
            break 'search Some(ni);
        }

        seen[ni] = true;
        visited.push(node);

        nbuf.clear();
        pather.neighbors(node, &mut nbuf);
        for &np in nbuf.iter() {
            if layout.idx(np).is_some_and(|i| !seen[i]) {
                stack.push((np, ni));
            }
        }
    };

    let Some(goal_idx) = found else {
        return Err(SearchError::NoPath);
    };

    let mut path = Vec::new();
    let mut ci = goal_idx;
    while ci != NO_PARENT {
        path.push(ci);
        ci = parent[ci];
    }
    path.reverse();

    Ok(Search { visited, path })
}
