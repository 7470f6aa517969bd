//! Core agent storage: `AgentStore` (SoA data) and `AgentRngs` (per-agent RNG).
//!
//! # Why two structs?
//!
//! Each step of an agent's process needs `&mut AgentRng` for that agent while
//! also reading (and sometimes writing) other agents' state, e.g. the stay
//! intervals of co-occupants when logging encounters.  Keeping RNGs in a
//! separate `AgentRngs` lets the simulator hold both borrows at once:
//!
//! ```ignore
//! let rng = sim.rngs.get_mut(agent);
//! contagion.on_enter(agent, loc, &clock, &mut city, rng);
//! ```

use ct_core::{AgentId, AgentRng, Event, LocationId, Tick};
use ct_mobility::{MobilityParams, Preferences, VisitHistory};

use crate::{Activity, Habits};

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, separated from [`AgentStore`].
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one agent's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for all agent state.
///
/// Every `Vec` field has exactly `count` elements; the `AgentId` value is the
/// index into all of them.
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    // ── Identity ──────────────────────────────────────────────────────────
    pub name: Vec<String>,
    pub home: Vec<LocationId>,
    pub work: Vec<LocationId>,

    /// Where the agent currently is.  Starts at `home`.
    pub location: Vec<LocationId>,

    // ── Health ────────────────────────────────────────────────────────────
    /// Tick of infection.  Set once by [`set_infected`](Self::set_infected),
    /// never cleared.
    infected_at: Vec<Option<Tick>>,

    /// Will become severely symptomatic during peak illness.
    pub severe: Vec<bool>,

    /// Stays in peak illness indefinitely.
    pub never_recovers: Vec<bool>,

    /// Whether a `symptom_start` event has been logged.
    pub symptoms_logged: Vec<bool>,

    // ── Habits and mobility ───────────────────────────────────────────────
    pub habits:   Vec<Habits>,
    pub mobility: Vec<MobilityParams>,
    pub prefs:    Vec<Preferences>,
    pub visits:   Vec<VisitHistory>,

    // ── Current stay ──────────────────────────────────────────────────────
    /// Tick the current stay started.
    pub stay_start: Vec<Tick>,
    /// Tick the current stay ends.
    pub stay_until: Vec<Tick>,
    pub activity:   Vec<Activity>,

    // ── Event log ─────────────────────────────────────────────────────────
    events: Vec<Vec<Event>>,
}

impl AgentStore {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    // ── Health ────────────────────────────────────────────────────────────

    #[inline]
    pub fn infected_at(&self, agent: AgentId) -> Option<Tick> {
        self.infected_at[agent.index()]
    }

    #[inline]
    pub fn is_sick(&self, agent: AgentId) -> bool {
        self.infected_at[agent.index()].is_some()
    }

    /// Contagious from the moment of infection; there is no recovery.
    #[inline]
    pub fn is_contagious(&self, agent: AgentId) -> bool {
        self.is_sick(agent)
    }

    /// Record an infection at `tick`.  Returns `false` (and changes nothing)
    /// if the agent was already infected.
    pub fn set_infected(&mut self, agent: AgentId, tick: Tick) -> bool {
        let slot = &mut self.infected_at[agent.index()];
        if slot.is_some() {
            return false;
        }
        *slot = Some(tick);
        true
    }

    /// Ticks elapsed since infection, or `None` if healthy.
    pub fn ticks_since_infection(&self, agent: AgentId, now: Tick) -> Option<u64> {
        self.infected_at(agent).map(|t| now.since(t))
    }

    /// Number of agents infected so far.
    pub fn infected_count(&self) -> usize {
        self.infected_at.iter().filter(|t| t.is_some()).count()
    }

    // ── Event log ─────────────────────────────────────────────────────────

    /// Append `event` to its agent's log.
    pub fn log(&mut self, event: Event) {
        self.events[event.agent.index()].push(event);
    }

    /// One agent's events, in the order they were logged.
    pub fn events_of(&self, agent: AgentId) -> &[Event] {
        &self.events[agent.index()]
    }

    /// Every agent's events, concatenated in agent order.
    pub fn events(&self) -> impl Iterator<Item = &Event> + '_ {
        self.events.iter().flatten()
    }

    pub fn event_count(&self) -> usize {
        self.events.iter().map(Vec::len).sum()
    }

    // ── Package-private constructor used by PopulationBuilder ─────────────

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        name:           Vec<String>,
        home:           Vec<LocationId>,
        work:           Vec<LocationId>,
        infected_at:    Vec<Option<Tick>>,
        severe:         Vec<bool>,
        never_recovers: Vec<bool>,
        habits:         Vec<Habits>,
        mobility:       Vec<MobilityParams>,
        prefs:          Vec<Preferences>,
    ) -> Self {
        let count = name.len();
        Self {
            count,
            location: home.clone(),
            name,
            home,
            work,
            infected_at,
            severe,
            never_recovers,
            symptoms_logged: vec![false; count],
            habits,
            mobility,
            prefs,
            visits: vec![VisitHistory::default(); count],
            stay_start: vec![Tick::ZERO; count],
            stay_until: vec![Tick::ZERO; count],
            activity: vec![Activity::AtHome; count],
            events: vec![Vec::new(); count],
        }
    }
}
