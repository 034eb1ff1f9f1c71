use gridpath_core::Coord;

use crate::traits::Pather;

/// Sentinel distance meaning "not reached yet".
pub const UNREACHABLE: u32 = u32::MAX;

// ---------------------------------------------------------------------------
// Priority-queue entry
// ---------------------------------------------------------------------------

/// Heap entry ordered by `key`, then by coordinate (row-major).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) pos: Coord,
    pub(crate) key: u32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest (key, pos) first.
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.pos.cmp(&self.pos))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Flat-index bookkeeping for one search invocation.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Layout {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
}

impl Layout {
    pub(crate) fn of<P: Pather>(pather: &P) -> Self {
        let (rows, cols) = pather.size();
        Self { rows, cols }
    }

    #[inline]
    pub(crate) fn len(self) -> usize {
        self.rows * self.cols
    }

    /// Convert a `Coord` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(self, p: Coord) -> Option<usize> {
        if p.row < 0 || (p.row as usize) >= self.rows {
            return None;
        }
        p.index(self.cols)
    }
}

/// Walk back from `goal` to `start` over a distance table.
///
/// At each step the first neighbour (north, south, west, east) whose
/// distance is exactly one less than the current one is taken, provided
/// `eligible` accepts its index. Returns flat indices from start to goal,
/// or `None` if the table has no such chain.
pub(crate) fn walk_back(
    layout: Layout,
    dist: &[u32],
    start: Coord,
    goal: Coord,
    eligible: impl Fn(usize) -> bool,
) -> Option<Vec<usize>> {
    let mut path = Vec::new();
    let mut current = goal;
    while current != start {
        let ci = layout.idx(current)?;
        path.push(ci);
        let want = dist[ci].checked_sub(1)?;
        current = current.neighbors_4().into_iter().find(|&n| {
            layout
                .idx(n)
                .is_some_and(|ni| dist[ni] == want && eligible(ni))
        })?;
    }
    path.push(layout.idx(start)?);
    path.reverse();
    Some(path)
}
