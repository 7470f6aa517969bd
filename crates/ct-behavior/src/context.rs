//! Read-only simulation state passed to every decision.

use ct_agent::AgentStore;
use ct_core::{AgentId, Calendar, SimClock, Tick};

use crate::BehaviorConfig;

/// A read-only snapshot passed to [`BehaviorModel::decide`][crate::BehaviorModel::decide].
///
/// Built by ct-sim each time an agent reaches a decision point.
pub struct DecisionContext<'a> {
    /// Current simulation tick.
    pub tick: Tick,

    /// Calendar fields of `tick`.
    pub calendar: Calendar,

    pub clock: &'a SimClock,

    /// Read-only view of every agent's SoA state arrays.
    pub agents: &'a AgentStore,

    pub config: &'a BehaviorConfig,
}

impl<'a> DecisionContext<'a> {
    #[inline]
    pub fn new(
        tick:   Tick,
        clock:  &'a SimClock,
        agents: &'a AgentStore,
        config: &'a BehaviorConfig,
    ) -> Self {
        Self { tick, calendar: clock.calendar_at(tick), clock, agents, config }
    }

    #[inline]
    pub fn is_weekend(&self) -> bool {
        self.clock.is_weekend_day(self.calendar.weekday)
    }

    /// `true` once strictly more than `days` have passed since infection.
    pub fn infected_longer_than(&self, agent: AgentId, days: u64) -> bool {
        self.agents
            .ticks_since_infection(agent, self.tick)
            .is_some_and(|elapsed| elapsed > self.clock.ticks_for_days(days))
    }

    /// Between the end of incubation and the end of peak illness (inclusive),
    /// or past incubation for agents that never recover.
    pub fn in_peak_illness(&self, agent: AgentId) -> bool {
        let Some(elapsed) = self.agents.ticks_since_infection(agent, self.tick) else {
            return false;
        };
        let start = self.clock.ticks_for_days(self.config.incubation_days);
        let end = self.clock.ticks_for_days(self.config.incubation_days + self.config.days_sick);
        elapsed >= start && (elapsed <= end || self.agents.never_recovers[agent.index()])
    }

    /// Severely symptomatic agents in peak illness skip every optional
    /// outing (shopping, exercise, trips).
    pub fn too_sick_to_go_out(&self, agent: AgentId) -> bool {
        self.agents.severe[agent.index()] && self.in_peak_illness(agent)
    }
}
