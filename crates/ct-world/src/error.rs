//! World-subsystem error type.

use thiserror::Error;

use ct_core::{CoreError, LocationId};

/// Errors produced by `ct-world`.  All of them are configuration errors:
/// they are raised while the location set is assembled, never mid-run.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("location name {0:?} is used twice")]
    DuplicateName(String),

    #[error("location {0} not found")]
    LocationNotFound(LocationId),

    #[error("location {name:?}: contamination probability {value} is outside [0, 1]")]
    InvalidProbability { name: String, value: f64 },

    #[error("location {0:?}: capacity must be at least 1")]
    ZeroCapacity(String),

    #[error("location parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type WorldResult<T> = Result<T, WorldError>;
