use gridpath_core::{Coord, GridMap};

/// Neighbor enumeration seam for searches.
///
/// Searches only need to know which cells are reachable in one step from
/// a given cell; everything else (costs, heuristic) is fixed by the
/// unit-cost 4-connected movement model.
pub trait Pather {
    /// Append the traversable neighbors of `c` into `buf`. The caller
    /// clears `buf` before calling.
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>);
}

impl Pather for GridMap {
    /// In-bounds, free cardinal neighbors of `c`, in row-major order.
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>) {
        for n in c.neighbors4() {
            if self.is_free(n) {
                buf.push(n);
            }
        }
    }
}
