//! Random occupancy-map generation.

use gridpath_core::{CellState, Coord, Dims, GridMap};
use rand::{Rng, RngExt};

/// Parameters for random map generation.
#[derive(Debug, Clone, Copy)]
pub struct MapGenConfig {
    /// Side length of the (square) map.
    pub size: i32,
    /// Independent probability that a cell is an obstacle.
    pub obstacle_prob: f64,
}

impl Default for MapGenConfig {
    fn default() -> Self {
        Self {
            size: 20,
            obstacle_prob: 0.3,
        }
    }
}

impl MapGenConfig {
    /// The map dimensions.
    #[inline]
    pub fn dims(&self) -> Dims {
        Dims::square(self.size)
    }

    /// The canonical start corner, `(0, 0)`.
    #[inline]
    pub fn start(&self) -> Coord {
        Coord::ZERO
    }

    /// The canonical goal corner, `(size-1, size-1)`.
    #[inline]
    pub fn goal(&self) -> Coord {
        Coord::new(self.size - 1, self.size - 1)
    }
}

/// Random map generator.
pub struct MapGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MapGen<R> {
    /// Create a new generator using the given RNG.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a random occupancy map.
    ///
    /// Each cell is independently `Blocked` with probability
    /// `cfg.obstacle_prob`. The start and goal corners are always forced
    /// `Free`, so corner-to-corner endpoints are valid on every map this
    /// produces (the map may still be unsolvable).
    pub fn random_map(&mut self, cfg: &MapGenConfig) -> GridMap {
        let mut grid = GridMap::new(cfg.dims());
        for c in cfg.dims().iter() {
            let r: f64 = self.rng.random();
            if r < cfg.obstacle_prob {
                grid.set(c, CellState::Blocked);
            }
        }
        grid.set(cfg.start(), CellState::Free);
        grid.set(cfg.goal(), CellState::Free);
        grid
    }
}
