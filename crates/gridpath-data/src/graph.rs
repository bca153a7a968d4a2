//! Grid-to-graph conversion for downstream model consumption.
//!
//! Free cells become graph nodes; 4-adjacency between free cells becomes
//! directed edges (one per direction). Node features carry normalized
//! coordinates plus start/goal indicator flags.

use gridpath_core::{Coord, Dims, GridMap};
use serde::{Deserialize, Serialize};

/// Per-node feature vector: `[row/rows, col/cols, is_start, is_goal]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeFeatures {
    pub row: f32,
    pub col: f32,
    pub is_start: f32,
    pub is_goal: f32,
}

/// A graph over the free cells of a grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridGraph {
    dims: Dims,
    /// Flat row-major cell-to-node lookup; `-1` for blocked cells.
    node_index: Vec<i32>,
    /// Coordinate of each node, indexed by node id.
    node_coords: Vec<Coord>,
    /// Feature vector of each node, indexed by node id.
    pub features: Vec<NodeFeatures>,
    /// Directed `(source, target)` node-id pairs.
    pub edges: Vec<(u32, u32)>,
}

impl GridGraph {
    /// Build the graph for `grid` with the given start/goal markers.
    ///
    /// Node ids are assigned to free cells in row-major order. Edges are
    /// emitted in row-major source order, each with its reverse
    /// counterpart emitted from the other endpoint, matching an
    /// undirected adjacency expressed as directed pairs.
    pub fn from_grid(grid: &GridMap, start: Coord, goal: Coord) -> Self {
        let dims = grid.dims();
        let rows = dims.rows as f32;
        let cols = dims.cols as f32;

        let mut node_index = vec![-1i32; dims.len()];
        let mut node_coords = Vec::new();
        let mut features = Vec::new();

        for (i, c) in dims.iter().enumerate() {
            if !grid.is_free(c) {
                continue;
            }
            node_index[i] = node_coords.len() as i32;
            node_coords.push(c);
            features.push(NodeFeatures {
                row: c.row as f32 / rows,
                col: c.col as f32 / cols,
                is_start: if c == start { 1.0 } else { 0.0 },
                is_goal: if c == goal { 1.0 } else { 0.0 },
            });
        }

        let at = |c: Coord| -> i32 {
            if !dims.contains(c) {
                return -1;
            }
            node_index[(c.row as usize) * (dims.cols as usize) + c.col as usize]
        };

        let mut edges = Vec::new();
        for &c in &node_coords {
            let src = at(c);
            for n in c.neighbors4() {
                let tgt = at(n);
                if tgt >= 0 {
                    edges.push((src as u32, tgt as u32));
                }
            }
        }

        Self {
            dims,
            node_index,
            node_coords,
            features,
            edges,
        }
    }

    /// Number of nodes (free cells).
    #[inline]
    pub fn node_count(&self) -> usize {
        self.node_coords.len()
    }

    /// Number of directed edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The node id at `c`, or `None` if `c` is blocked or out of bounds.
    pub fn node_at(&self, c: Coord) -> Option<usize> {
        if !self.dims.contains(c) {
            return None;
        }
        let i = (c.row as usize) * (self.dims.cols as usize) + c.col as usize;
        let id = self.node_index[i];
        if id < 0 { None } else { Some(id as usize) }
    }

    /// The coordinate of a node id.
    pub fn coord_of(&self, node: usize) -> Option<Coord> {
        self.node_coords.get(node).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_graph() -> GridGraph {
        let grid = GridMap::parse(
            "..#
             #..
             ...",
        )
        .unwrap();
        GridGraph::from_grid(&grid, Coord::new(0, 0), Coord::new(2, 2))
    }

    #[test]
    fn node_and_edge_counts() {
        let g = scenario_graph();
        assert_eq!(g.node_count(), 7);
        assert_eq!(g.features.len(), 7);
        // 7 adjacent free pairs, one directed edge each way.
        assert_eq!(g.edge_count(), 14);
    }

    #[test]
    fn blocked_cells_have_no_node() {
        let g = scenario_graph();
        assert_eq!(g.node_at(Coord::new(0, 2)), None);
        assert_eq!(g.node_at(Coord::new(1, 0)), None);
        assert_eq!(g.node_at(Coord::new(5, 5)), None);
        // Free cells get row-major ids.
        assert_eq!(g.node_at(Coord::new(0, 0)), Some(0));
        assert_eq!(g.node_at(Coord::new(0, 1)), Some(1));
        assert_eq!(g.node_at(Coord::new(1, 1)), Some(2));
        assert_eq!(g.coord_of(2), Some(Coord::new(1, 1)));
    }

    #[test]
    fn start_and_goal_flags() {
        let g = scenario_graph();
        let start = g.features[g.node_at(Coord::new(0, 0)).unwrap()];
        assert_eq!((start.is_start, start.is_goal), (1.0, 0.0));
        assert_eq!((start.row, start.col), (0.0, 0.0));

        let goal = g.features[g.node_at(Coord::new(2, 2)).unwrap()];
        assert_eq!((goal.is_start, goal.is_goal), (0.0, 1.0));
        assert!((goal.row - 2.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn edges_are_symmetric() {
        let g = scenario_graph();
        for &(s, t) in &g.edges {
            assert!(g.edges.contains(&(t, s)), "missing reverse of ({s}, {t})");
        }
    }

    #[test]
    fn json_round_trip() {
        let g = scenario_graph();
        let json = serde_json::to_string(&g).unwrap();
        let back: GridGraph = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }
}
