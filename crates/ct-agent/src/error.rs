use thiserror::Error;

use ct_core::{LocationId, LocationKind};
use ct_world::WorldError;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("resident {resident:?}: unknown location {name:?}")]
    UnknownLocation { resident: String, name: String },

    #[error("resident {resident:?}: {location} is a {found}, expected a {expected}")]
    WrongKind {
        resident: String,
        location: LocationId,
        expected: LocationKind,
        found:    LocationKind,
    },

    #[error("population config error: {0}")]
    Config(String),

    #[error(transparent)]
    World(#[from] WorldError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AgentResult<T> = Result<T, AgentError>;
