use std::collections::BinaryHeap;

use gridpath_core::{Coord, GridMap, InputError};

use crate::PathFinder;
use crate::distance::manhattan;
use crate::pathfinder::FrontierRef;
use crate::traits::Pather;

impl PathFinder {
    /// Compute a shortest 4-connected path of free cells from `start` to
    /// `goal` on `grid`.
    ///
    /// Endpoints are validated up front: a start or goal outside the grid
    /// bounds or on a blocked cell is rejected with [`InputError`]. An
    /// unreachable goal is a normal negative result, reported as
    /// `Ok(None)`, never as an error.
    ///
    /// On success the path runs from `start` to `goal` inclusive, with
    /// consecutive entries one cardinal step apart. `start == goal`
    /// yields the single-element path `[start]`.
    ///
    /// If the grid's dimensions differ from the engine's, the internal
    /// caches are resized first.
    pub fn solve(
        &mut self,
        grid: &GridMap,
        start: Coord,
        goal: Coord,
    ) -> Result<Option<Vec<Coord>>, InputError> {
        for endpoint in [start, goal] {
            if !grid.contains(endpoint) {
                return Err(InputError::OutOfBounds {
                    coord: endpoint,
                    dims: grid.dims(),
                });
            }
            if !grid.is_free(endpoint) {
                return Err(InputError::BlockedEndpoint { coord: endpoint });
            }
        }

        if self.dims != grid.dims() {
            self.resize(grid.dims());
        }

        Ok(self.astar_path(grid, start, goal))
    }

    /// Compute the shortest path from `from` to `to` using A* with the
    /// Manhattan heuristic and unit step costs.
    ///
    /// Returns the full path (including both endpoints) or `None` if no
    /// path exists. Unlike [`solve`](Self::solve), endpoints are not
    /// validated; out-of-range coordinates simply yield `None`.
    pub fn astar_path<P: Pather>(
        &mut self,
        pather: &P,
        from: Coord,
        to: Coord,
    ) -> Option<Vec<Coord>> {
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to)?;

        if start_idx == goal_idx {
            return Some(vec![from]);
        }

        // Bump generation to lazily invalidate all nodes: anything not
        // stamped with the current generation has infinite cost.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut frontier: BinaryHeap<FrontierRef> = BinaryHeap::new();
        frontier.push(FrontierRef {
            idx: start_idx,
            f: manhattan(from, to),
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = frontier.pop() else {
                // Frontier exhausted: the goal is unreachable. Expected
                // termination, not an error.
                break 'search false;
            };

            let ci = current.idx;

            // A node may sit in the frontier more than once if a better
            // path to it was found after it was pushed. Later pops of the
            // superseded entries are skipped here.
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }

            if ci == goal_idx {
                break 'search true;
            }

            self.nodes[ci].open = false;
            let current_g = self.nodes[ci].g;
            let current_coord = self.coord(ci);

            nbuf.clear();
            pather.neighbors(current_coord, &mut nbuf);

            for &nc in nbuf.iter() {
                let Some(ni) = self.idx(nc) else {
                    continue;
                };
                let tentative_g = current_g + 1;

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen && tentative_g >= n.g {
                    continue;
                }

                n.g = tentative_g;
                n.parent = ci;
                n.generation = cur_gen;
                n.open = true;

                frontier.push(FrontierRef {
                    idx: ni,
                    f: tentative_g + manhattan(nc, to),
                });
            }
        };

        self.nbuf = nbuf;

        if !found {
            return None;
        }

        // Walk the parent chain back from the goal, then reverse.
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            path.push(self.coord(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UNREACHABLE;
    use gridpath_core::{CellState, Dims};
    use rand::{RngExt, SeedableRng, rngs::StdRng};

    fn solve_on(text: &str, start: Coord, goal: Coord) -> Result<Option<Vec<Coord>>, InputError> {
        let grid = GridMap::parse(text).unwrap();
        let mut pf = PathFinder::new(grid.dims());
        pf.solve(&grid, start, goal)
    }

    /// Every consecutive pair is one cardinal step apart, every cell is
    /// free and in bounds, and the endpoints match.
    fn assert_valid_path(grid: &GridMap, path: &[Coord], start: Coord, goal: Coord) {
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&goal));
        for c in path {
            assert!(grid.is_free(*c), "path enters non-free cell {c}");
        }
        for pair in path.windows(2) {
            let d = pair[1] - pair[0];
            assert_eq!(d.row.abs() + d.col.abs(), 1, "non-cardinal step at {}", pair[0]);
        }
    }

    #[test]
    fn detour_around_obstacles() {
        // Direct diagonal progress is cut off by the two blocked cells,
        // so the shortest route threads between them.
        let grid = GridMap::parse(
            "..#
             #..
             ...",
        )
        .unwrap();
        let mut pf = PathFinder::new(grid.dims());
        let path = pf
            .solve(&grid, Coord::new(0, 0), Coord::new(2, 2))
            .unwrap()
            .unwrap();
        assert_eq!(path.len(), 5);
        assert_valid_path(&grid, &path, Coord::new(0, 0), Coord::new(2, 2));
    }

    #[test]
    fn tie_break_is_row_major() {
        // All routes on an open grid have equal cost; the row-major
        // tie-break commits to the lexicographically smallest frontier
        // entry at every tie, which keeps the exact path stable.
        let path = solve_on("..\n..", Coord::new(0, 0), Coord::new(1, 1))
            .unwrap()
            .unwrap();
        assert_eq!(
            path,
            vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 1)]
        );

        let path = solve_on(
            "..#
             #..
             ...",
            Coord::new(0, 0),
            Coord::new(2, 2),
        )
        .unwrap()
        .unwrap();
        assert_eq!(
            path,
            vec![
                Coord::new(0, 0),
                Coord::new(0, 1),
                Coord::new(1, 1),
                Coord::new(1, 2),
                Coord::new(2, 2),
            ]
        );
    }

    #[test]
    fn open_two_by_two() {
        let path = solve_on("..\n..", Coord::new(0, 0), Coord::new(1, 1))
            .unwrap()
            .unwrap();
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn isolated_goal_is_unreachable() {
        let result = solve_on(".#\n#.", Coord::new(0, 0), Coord::new(1, 1)).unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn start_equals_goal() {
        let result = solve_on(".", Coord::new(0, 0), Coord::new(0, 0)).unwrap();
        assert_eq!(result, Some(vec![Coord::new(0, 0)]));
    }

    #[test]
    fn out_of_bounds_endpoints_rejected() {
        let err = solve_on("..\n..", Coord::new(0, 0), Coord::new(2, 0)).unwrap_err();
        assert_eq!(
            err,
            InputError::OutOfBounds {
                coord: Coord::new(2, 0),
                dims: Dims::new(2, 2),
            }
        );

        let err = solve_on("..\n..", Coord::new(-1, 0), Coord::new(1, 1)).unwrap_err();
        assert!(matches!(err, InputError::OutOfBounds { .. }));
    }

    #[test]
    fn blocked_endpoints_rejected() {
        let err = solve_on("#.\n..", Coord::new(0, 0), Coord::new(1, 1)).unwrap_err();
        assert_eq!(
            err,
            InputError::BlockedEndpoint {
                coord: Coord::new(0, 0)
            }
        );

        let err = solve_on(".#\n..", Coord::new(0, 0), Coord::new(0, 1)).unwrap_err();
        assert_eq!(
            err,
            InputError::BlockedEndpoint {
                coord: Coord::new(0, 1)
            }
        );
    }

    #[test]
    fn repeated_solves_are_deterministic() {
        let grid = GridMap::parse(
            ".....
             .##..
             ...#.
             .#...
             .....",
        )
        .unwrap();
        let start = Coord::new(0, 0);
        let goal = Coord::new(4, 4);

        let mut pf = PathFinder::new(grid.dims());
        let first = pf.solve(&grid, start, goal).unwrap().unwrap();
        // Same engine (warm caches) and a fresh engine must agree.
        let again = pf.solve(&grid, start, goal).unwrap().unwrap();
        let fresh = PathFinder::new(grid.dims())
            .solve(&grid, start, goal)
            .unwrap()
            .unwrap();
        assert_eq!(first, again);
        assert_eq!(first, fresh);
    }

    #[test]
    fn matches_bfs_oracle_on_random_grids() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let dims = Dims::new(12, 12);
        let start = Coord::new(0, 0);
        let goal = Coord::new(11, 11);

        for _ in 0..50 {
            let mut grid = GridMap::new(dims);
            for c in dims.iter() {
                if rng.random::<f64>() < 0.35 {
                    grid.set(c, CellState::Blocked);
                }
            }
            grid.set(start, CellState::Free);
            grid.set(goal, CellState::Free);

            let mut pf = PathFinder::new(dims);
            let result = pf.solve(&grid, start, goal).unwrap();

            let mut oracle = PathFinder::new(dims);
            oracle.bfs_map(&grid, start);
            let true_dist = oracle.bfs_at(goal);

            match result {
                Some(path) => {
                    assert_valid_path(&grid, &path, start, goal);
                    assert_eq!(path.len() as i32 - 1, true_dist, "suboptimal path:\n{grid}");
                }
                None => {
                    assert_eq!(true_dist, UNREACHABLE, "missed existing path:\n{grid}");
                }
            }
        }
    }

    #[test]
    fn reused_engine_resizes_to_grid() {
        let mut pf = PathFinder::new(Dims::new(2, 2));
        let grid = GridMap::parse(
            "....
             ....
             ....",
        )
        .unwrap();
        let path = pf
            .solve(&grid, Coord::new(0, 0), Coord::new(2, 3))
            .unwrap()
            .unwrap();
        assert_eq!(pf.dims(), grid.dims());
        assert_eq!(path.len(), 6);
    }
}
