//! Shortest-path search over 2D occupancy grids.
//!
//! This crate implements:
//!
//! - **A\*** shortest-path search with the Manhattan heuristic
//!   ([`PathFinder::solve`], [`PathFinder::astar_path`])
//! - a **BFS** distance map ([`PathFinder::bfs_map`]), the exhaustive
//!   shortest-distance oracle the A* tests check against
//!
//! Movement is 4-directional with unit edge costs. All searches operate
//! through [`PathFinder`], which owns and reuses internal caches so that
//! repeated queries incur zero allocations after warm-up. When two
//! frontier entries share the same estimated total cost, the one whose
//! coordinate comes first in row-major order wins, so paths are
//! deterministic across runs and across implementations.

mod astar;
mod bfs;
mod distance;
mod pathfinder;
mod traits;

pub use distance::manhattan;
pub use pathfinder::{PathFinder, UNREACHABLE};
pub use traits::Pather;
