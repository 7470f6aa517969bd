use thiserror::Error;

use ct_agent::AgentError;
use ct_behavior::BehaviorError;
use ct_core::CoreError;
use ct_mobility::MobilityError;
use ct_world::WorldError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Behavior(#[from] BehaviorError),

    #[error(transparent)]
    Agent(#[from] AgentError),

    #[error(transparent)]
    World(#[from] WorldError),

    /// Only the non-recoverable variants reach this point; a missing
    /// destination sends the agent home instead.
    #[error("mobility error: {0}")]
    Mobility(#[from] MobilityError),
}

pub type SimResult<T> = Result<T, SimError>;
