//! `ContagionEngine` — encounter logging and transmission on entry.

use std::ops::Range;

use log::debug;

use ct_agent::City;
use ct_core::{AgentId, AgentRng, Event, EventPayload, LocationId, SimClock};

/// Evaluates contacts and transmission when an agent enters a location.
#[derive(Clone, Debug)]
pub struct ContagionEngine {
    /// Range of the coarse contact distance, in centimetres.
    pub distance_cm: Range<u32>,
}

impl Default for ContagionEngine {
    fn default() -> Self {
        Self { distance_cm: 50..1_000 }
    }
}

impl ContagionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// `agent` has just entered `location` (it is already among the
    /// occupants and its stay interval is set).
    ///
    /// Logs encounters with every co-occupant (except in households), then
    /// draws transmission if the agent is healthy and the location's
    /// contamination probability is positive.  Returns copies of every event
    /// logged, in log order.
    pub fn on_enter(
        &self,
        agent:    AgentId,
        location: LocationId,
        clock:    &SimClock,
        city:     &mut City,
        rng:      &mut AgentRng,
    ) -> Vec<Event> {
        let now = clock.current_tick;
        let unix_secs = clock.current_unix_secs();
        let loc = city.locations.get(location);
        let agents = &mut city.agents;
        let mut logged = Vec::new();

        if loc.kind.logs_encounters() {
            let (start_a, until_a) = (agents.stay_start[agent.index()], agents.stay_until[agent.index()]);
            for &other in loc.occupants() {
                if other == agent {
                    continue;
                }
                let start = start_a.max(agents.stay_start[other.index()]);
                let until = until_a.min(agents.stay_until[other.index()]);
                let payload = |with: AgentId, distance_cm: u32| EventPayload::Encounter {
                    other:            with,
                    duration_minutes: clock.minutes_for_ticks(until.since(start)),
                    distance_cm,
                    lat:              loc.point.lat,
                    lon:              loc.point.lon,
                };
                let distance = rng.gen_range(self.distance_cm.clone());
                let pair = [
                    Event::new(agent, now, unix_secs, payload(other, distance)),
                    Event::new(other, now, unix_secs, payload(agent, distance)),
                ];
                for e in pair {
                    agents.log(e.clone());
                    logged.push(e);
                }
            }
        }

        if !agents.is_sick(agent) {
            let p = loc.contamination_probability_for(agent, |o| agents.is_contagious(o));
            if p > 0.0 && rng.random::<f64>() < p {
                agents.set_infected(agent, now);
                debug!("{agent} contaminated at {} ({}) {now}", loc.name, loc.kind);
                let e = Event::new(agent, now, unix_secs, EventPayload::Contamination { location });
                agents.log(e.clone());
                logged.push(e);
            }
        }

        logged
    }
}
