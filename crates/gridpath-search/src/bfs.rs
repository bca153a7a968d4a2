use std::collections::VecDeque;

use gridpath_core::Coord;

use crate::PathFinder;
use crate::pathfinder::UNREACHABLE;
use crate::traits::Pather;

impl PathFinder {
    /// Fill the distance map with breadth-first distances from `source`.
    ///
    /// Every step costs 1, so the map holds true shortest 4-connected
    /// distances; the A* tests check `solve` against it. Returns the
    /// number of reached cells, including the source itself. Query
    /// individual distances afterwards with [`bfs_at`](Self::bfs_at).
    pub fn bfs_map<P: Pather>(&mut self, pather: &P, source: Coord) -> usize {
        for v in self.bfs_map.iter_mut() {
            *v = UNREACHABLE;
        }

        let Some(si) = self.idx(source) else {
            return 0;
        };
        self.bfs_map[si] = 0;

        let mut reached = 1usize;
        let mut queue = VecDeque::from([si]);
        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(ci) = queue.pop_front() {
            let next_dist = self.bfs_map[ci] + 1;

            nbuf.clear();
            pather.neighbors(self.coord(ci), &mut nbuf);

            for &nc in nbuf.iter() {
                let Some(ni) = self.idx(nc) else {
                    continue;
                };
                if self.bfs_map[ni] == UNREACHABLE {
                    self.bfs_map[ni] = next_dist;
                    queue.push_back(ni);
                    reached += 1;
                }
            }
        }

        self.nbuf = nbuf;
        reached
    }

    /// The BFS distance at `c` from the last [`bfs_map`](Self::bfs_map)
    /// call.
    ///
    /// Returns [`UNREACHABLE`] if the coordinate is out of bounds or was
    /// not reached.
    pub fn bfs_at(&self, c: Coord) -> i32 {
        match self.idx(c) {
            Some(i) => self.bfs_map[i],
            None => UNREACHABLE,
        }
    }
}
