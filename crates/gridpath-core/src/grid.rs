//! The [`GridMap`] type — a rectangular occupancy grid of free/blocked cells.
//!
//! A `GridMap` owns its storage outright. The search engine only ever reads
//! it, and owned storage keeps the type `Send + Sync` so independent
//! searches can run on shared grids across threads.

use std::fmt;

use crate::coord::{Coord, Dims};

/// The occupancy state of a single grid cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// Traversable cell.
    #[default]
    Free,
    /// Obstacle cell.
    Blocked,
}

/// A rectangular 2D occupancy grid, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridMap {
    dims: Dims,
    cells: Vec<CellState>,
}

impl GridMap {
    /// Create a new grid of the given dimensions with every cell `Free`.
    pub fn new(dims: Dims) -> Self {
        Self {
            dims,
            cells: vec![CellState::Free; dims.len()],
        }
    }

    /// Parse a grid from a text map: `.` is free, `#` is blocked.
    ///
    /// Leading/trailing blank lines are ignored. All rows must have the
    /// same width.
    pub fn parse(text: &str) -> Result<Self, ParseMapError> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let rows = lines.len() as i32;
        let cols = lines.first().map_or(0, |l| l.chars().count()) as i32;
        let dims = Dims::new(rows, cols);
        let mut grid = GridMap::new(dims);
        for (r, line) in lines.iter().enumerate() {
            if line.chars().count() as i32 != cols {
                return Err(ParseMapError::InconsistentWidth { row: r as i32 });
            }
            for (c, ch) in line.chars().enumerate() {
                let coord = Coord::new(r as i32, c as i32);
                match ch {
                    '.' => grid.set(coord, CellState::Free),
                    '#' => grid.set(coord, CellState::Blocked),
                    _ => return Err(ParseMapError::InvalidChar { ch, coord }),
                }
            }
        }
        Ok(grid)
    }

    /// The grid dimensions.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.dims.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.dims.cols
    }

    /// Whether `c` is inside the grid bounds.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.dims.contains(c)
    }

    /// The cell state at `c`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<CellState> {
        self.idx(c).map(|i| self.cells[i])
    }

    /// Whether `c` is in bounds and free.
    #[inline]
    pub fn is_free(&self, c: Coord) -> bool {
        self.at(c) == Some(CellState::Free)
    }

    /// Set the cell state at `c`. No-op if `c` is out of bounds.
    #[inline]
    pub fn set(&mut self, c: Coord, state: CellState) {
        if let Some(i) = self.idx(c) {
            self.cells[i] = state;
        }
    }

    /// Count the cells with the given state.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }

    /// Row-major iterator over `(Coord, CellState)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, CellState)> + '_ {
        // Both the coordinate iterator and the storage are row-major.
        self.dims.iter().zip(self.cells.iter().copied())
    }

    #[inline]
    fn idx(&self, c: Coord) -> Option<usize> {
        if !self.dims.contains(c) {
            return None;
        }
        Some((c.row as usize) * (self.dims.cols as usize) + c.col as usize)
    }
}

impl fmt::Display for GridMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.dims.rows {
            for c in 0..self.dims.cols {
                let ch = match self.at(Coord::new(r, c)) {
                    Some(CellState::Blocked) => '#',
                    _ => '.',
                };
                write!(f, "{ch}")?;
            }
            if r < self.dims.rows - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Errors that can occur when parsing a text map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseMapError {
    /// A row's width differs from the first row's.
    InconsistentWidth { row: i32 },
    /// A character other than `.` or `#` was found.
    InvalidChar { ch: char, coord: Coord },
}

impl fmt::Display for ParseMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentWidth { row } => {
                write!(f, "map row {row} has inconsistent width")
            }
            Self::InvalidChar { ch, coord } => {
                write!(f, "map contains invalid character {ch:?} at {coord}")
            }
        }
    }
}

impl std::error::Error for ParseMapError {}
