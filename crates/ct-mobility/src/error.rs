use ct_core::LocationKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MobilityError {
    /// Neither an unvisited nor a visited location of this category is
    /// available.  Recoverable: the caller sends the agent home.
    #[error("no {0} destination available")]
    NoDestination(LocationKind),

    /// Households and workplaces are fixed per agent and never selected.
    #[error("{0} is not a mobility category")]
    NotAMobilityCategory(LocationKind),
}

impl MobilityError {
    /// `true` for errors the simulation can absorb by keeping the agent home.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, MobilityError::NoDestination(_))
    }
}

pub type MobilityResult<T> = Result<T, MobilityError>;
