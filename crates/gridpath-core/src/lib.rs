//! **gridpath-core** — occupancy-grid model and geometry.
//!
//! This crate provides the foundational types used across the *gridpath*
//! workspace: grid coordinates and dimensions, the free/blocked occupancy
//! grid itself, and the input-validation error type shared by the search
//! engine.

pub mod coord;
pub mod error;
pub mod grid;

pub use coord::{Coord, Dims};
pub use error::InputError;
pub use grid::{CellState, GridMap, ParseMapError};
