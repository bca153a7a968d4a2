use gridpath_core::{Coord, Dims};

/// Sentinel cost meaning "unreachable" in BFS distance maps.
pub const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// Internal node for the A* search
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Frontier entry: a node index paired with its estimated total cost `f`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct FrontierRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
}

impl Ord for FrontierRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (a max-heap) pops the smallest f first.
        // Equal f resolves to the smallest row-major index, which makes
        // tied expansions, and therefore output paths, deterministic.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for FrontierRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// Shortest-path search engine for a grid of fixed dimensions.
///
/// `PathFinder` owns all internal caches (the A* node array, BFS distance
/// map, scratch buffers) so that repeated queries incur no allocations
/// after the first use. A generation counter lazily invalidates the node
/// array between searches, so each call behaves as if its bookkeeping
/// started from scratch: a node not touched in the current generation has
/// a conceptually infinite cost-from-start.
///
/// The engine never mutates the grids it searches, so independent
/// `PathFinder`s on separate threads can share one grid.
pub struct PathFinder {
    pub(crate) dims: Dims,
    pub(crate) width: usize,
    // A* caches
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    // BFS distance map
    pub(crate) bfs_map: Vec<i32>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Coord>,
}

impl PathFinder {
    /// Create a new `PathFinder` for grids of the given dimensions.
    pub fn new(dims: Dims) -> Self {
        let len = dims.len();
        Self {
            dims,
            width: dims.cols.max(0) as usize,
            nodes: vec![Node::default(); len],
            generation: 0,
            bfs_map: vec![UNREACHABLE; len],
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Change the grid dimensions, reallocating caches as needed.
    ///
    /// If the new size fits within existing capacity, caches are kept and
    /// only the generation counter is bumped so stale entries are ignored.
    pub fn resize(&mut self, dims: Dims) {
        let new_len = dims.len();
        let capacity = self.nodes.len();
        self.dims = dims;
        self.width = dims.cols.max(0) as usize;

        if new_len <= capacity {
            self.generation = self.generation.wrapping_add(1);
            return;
        }

        self.nodes.clear();
        self.nodes.resize(new_len, Node::default());
        self.generation = 0;

        self.bfs_map.clear();
        self.bfs_map.resize(new_len, UNREACHABLE);
    }

    /// The grid dimensions this engine is sized for.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Coord` to a flat row-major index. `None` if out of bounds.
    #[inline]
    pub(crate) fn idx(&self, c: Coord) -> Option<usize> {
        if !self.dims.contains(c) {
            return None;
        }
        Some((c.row as usize) * self.width + c.col as usize)
    }

    /// Convert a flat index back to a `Coord`.
    #[inline]
    pub(crate) fn coord(&self, idx: usize) -> Coord {
        Coord::new((idx / self.width) as i32, (idx % self.width) as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_smaller_preserves_capacity() {
        let mut pf = PathFinder::new(Dims::new(20, 20));
        let cap = pf.nodes.len(); // 400

        pf.resize(Dims::new(5, 5));
        assert_eq!(pf.dims(), Dims::new(5, 5));
        assert_eq!(pf.nodes.len(), cap); // still 400
        assert_eq!(pf.width, 5);
        assert!(pf.generation > 0);
    }

    #[test]
    fn resize_larger_reallocates() {
        let mut pf = PathFinder::new(Dims::new(5, 5));
        let old_cap = pf.nodes.len(); // 25

        pf.resize(Dims::new(20, 20));
        assert_eq!(pf.dims(), Dims::new(20, 20));
        assert!(pf.nodes.len() > old_cap);
        assert_eq!(pf.nodes.len(), 400);
        assert_eq!(pf.bfs_map.len(), 400);
    }

    #[test]
    fn idx_round_trip() {
        let pf = PathFinder::new(Dims::new(4, 7));
        for c in pf.dims().iter() {
            let i = pf.idx(c).unwrap();
            assert_eq!(pf.coord(i), c);
        }
        assert_eq!(pf.idx(Coord::new(4, 0)), None);
        assert_eq!(pf.idx(Coord::new(0, 7)), None);
        assert_eq!(pf.idx(Coord::new(-1, 3)), None);
    }

    #[test]
    fn frontier_orders_by_f_then_index() {
        use std::collections::BinaryHeap;

        let mut heap = BinaryHeap::new();
        heap.push(FrontierRef { idx: 9, f: 4 });
        heap.push(FrontierRef { idx: 2, f: 4 });
        heap.push(FrontierRef { idx: 0, f: 7 });
        heap.push(FrontierRef { idx: 5, f: 4 });

        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|n| n.idx)).collect();
        assert_eq!(order, vec![2, 5, 9, 0]);
    }
}
