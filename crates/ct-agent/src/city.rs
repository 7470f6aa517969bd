//! `City` — the locations and the population that moves between them.

use ct_core::{AgentId, Event, LocationId};
use ct_world::LocationStore;

use crate::AgentStore;

pub struct City {
    pub locations: LocationStore,
    pub agents:    AgentStore,
}

impl City {
    pub fn new(locations: LocationStore, agents: AgentStore) -> Self {
        Self { locations, agents }
    }

    /// Every agent's event log, concatenated in agent order.
    pub fn events(&self) -> Vec<Event> {
        self.agents.events().cloned().collect()
    }

    /// Where `agent` currently is.
    #[inline]
    pub fn location_of(&self, agent: AgentId) -> LocationId {
        self.agents.location[agent.index()]
    }
}
