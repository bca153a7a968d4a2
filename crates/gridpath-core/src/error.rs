//! Input-validation errors for search endpoints.

use std::fmt;

use crate::coord::{Coord, Dims};

/// Errors for invalid `start`/`goal` inputs to a search.
///
/// An unreachable goal is *not* an error; searches report it as a normal
/// negative result. These variants cover inputs the engine refuses to
/// search from at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// The coordinate lies outside the grid bounds.
    OutOfBounds { coord: Coord, dims: Dims },
    /// The coordinate sits on a blocked cell.
    BlockedEndpoint { coord: Coord },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { coord, dims } => {
                write!(f, "coordinate {coord} is outside the {dims} grid")
            }
            Self::BlockedEndpoint { coord } => {
                write!(f, "coordinate {coord} is on a blocked cell")
            }
        }
    }
}

impl std::error::Error for InputError {}
