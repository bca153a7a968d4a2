//! Assembling and persisting solvable map/path samples.

use std::fmt;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use gridpath_core::{Coord, GridMap};
use gridpath_search::PathFinder;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::mapgen::{MapGen, MapGenConfig};

/// One dataset record: a solvable map together with its shortest path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub grid: GridMap,
    pub start: Coord,
    pub goal: Coord,
    pub path: Vec<Coord>,
}

/// Generate `num_samples` solvable map/path samples.
///
/// Maps are generated from `cfg` and solved corner to corner. Unsolvable
/// maps are discarded and regenerated, so the output is biased toward
/// solvable maps by construction; with a high `obstacle_prob` this loop
/// can take many attempts per accepted sample.
pub fn generate_samples<R: Rng>(cfg: &MapGenConfig, num_samples: usize, rng: R) -> Vec<Sample> {
    let mut mapgen = MapGen::new(rng);
    let mut finder = PathFinder::new(cfg.dims());
    let mut samples = Vec::with_capacity(num_samples);
    let mut attempts = 0usize;

    log::info!(
        "generating {num_samples} samples ({} map, p = {})",
        cfg.dims(),
        cfg.obstacle_prob
    );

    while samples.len() < num_samples {
        attempts += 1;
        let grid = mapgen.random_map(cfg);
        // The generator guarantees free corner endpoints, so solve cannot
        // reject the inputs.
        match finder.solve(&grid, cfg.start(), cfg.goal()) {
            Ok(Some(path)) => {
                samples.push(Sample {
                    grid,
                    start: cfg.start(),
                    goal: cfg.goal(),
                    path,
                });
                if samples.len() % 100 == 0 {
                    log::info!("{}/{num_samples} samples", samples.len());
                }
            }
            Ok(None) => {
                log::debug!("discarding unsolvable map (attempt {attempts})");
            }
            Err(e) => {
                // Not possible for maps from `random_map`, but don't panic
                // on behalf of the caller if the invariant ever breaks.
                log::warn!("generated map rejected: {e}");
            }
        }
    }

    log::info!("done: {num_samples} samples from {attempts} maps");
    samples
}

/// Save samples as JSON, creating parent directories as needed.
pub fn save_samples(path: &Path, samples: &[Sample]) -> Result<(), DatasetError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    serde_json::to_writer(BufWriter::new(file), samples)?;
    Ok(())
}

/// Load samples previously written by [`save_samples`].
pub fn load_samples(path: &Path) -> Result<Vec<Sample>, DatasetError> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

/// Errors that can occur when persisting or loading a dataset.
#[derive(Debug)]
pub enum DatasetError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "dataset i/o error: {e}"),
            Self::Json(e) => write!(f, "dataset encoding error: {e}"),
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for DatasetError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
