//! Dataset tooling around the gridpath search engine.
//!
//! Everything here is a collaborator of the engine, not part of it:
//!
//! - [`mapgen`] — random occupancy-map generation.
//! - [`dataset`] — assembling and persisting solvable map/path samples.
//! - [`graph`] — converting a grid into node/edge features for model
//!   consumption.

pub mod dataset;
pub mod graph;
pub mod mapgen;

pub use dataset::{DatasetError, Sample, generate_samples, load_samples, save_samples};
pub use graph::{GridGraph, NodeFeatures};
pub use mapgen::{MapGen, MapGenConfig};
