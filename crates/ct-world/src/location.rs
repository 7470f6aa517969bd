//! `SharedLocation` — a named place that doubles as a capacity resource.
//!
//! # Slots vs. presence
//!
//! A location tracks two agent lists:
//!
//! - **holders** — agents that hold one of the `capacity` slots.  A slot is
//!   granted by [`request`](SharedLocation::request) (immediately, or later
//!   by a [`release`](SharedLocation::release) that hands it to the head of
//!   the FIFO wait queue) and returned by `release`.
//! - **present** — agents physically inside, used for encounter logging and
//!   the contagion check.  An agent is added by [`enter`](SharedLocation::enter)
//!   when its process actually resumes and removed by
//!   [`leave`](SharedLocation::leave).
//!
//! `present ⊆ holders` at all times, so `present.len() <= capacity`.  An agent
//! that has been handed a slot but whose process has not yet resumed is not
//! visible to co-occupants until it enters.

use std::collections::VecDeque;

use ct_core::{AgentId, GeoPoint, LocationId, LocationKind};

// ── Capacity ──────────────────────────────────────────────────────────────────

/// Maximum number of concurrent slot holders.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Capacity {
    #[default]
    Unbounded,
    Limited(u32),
}

impl Capacity {
    /// `true` if `holders` slots already exhaust the capacity.
    #[inline]
    pub fn is_exhausted(self, holders: usize) -> bool {
        match self {
            Capacity::Unbounded  => false,
            Capacity::Limited(n) => holders >= n as usize,
        }
    }

    /// `None` for unbounded locations.
    #[inline]
    pub fn limit(self) -> Option<u32> {
        match self {
            Capacity::Unbounded  => None,
            Capacity::Limited(n) => Some(n),
        }
    }
}

// ── Admission ─────────────────────────────────────────────────────────────────

/// Outcome of [`SharedLocation::request`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Admission {
    /// A slot was granted; the agent may enter now.
    Admitted,
    /// The location is full; the agent was appended to the wait queue and
    /// will be handed a slot by a later `release`.
    Queued,
}

// ── SharedLocation ────────────────────────────────────────────────────────────

/// A place agents visit: household, workplace, store, park or misc venue.
#[derive(Clone, Debug)]
pub struct SharedLocation {
    pub id:                        LocationId,
    pub name:                      String,
    pub kind:                      LocationKind,
    pub point:                     GeoPoint,
    pub capacity:                  Capacity,
    /// Per-entry chance that a susceptible visitor is infected, applied only
    /// while someone contagious is present.
    pub contamination_probability: f64,

    holders: Vec<AgentId>,
    waiting: VecDeque<AgentId>,
    present: Vec<AgentId>,
}

impl SharedLocation {
    pub(crate) fn new(
        id:                        LocationId,
        name:                      String,
        kind:                      LocationKind,
        point:                     GeoPoint,
        capacity:                  Capacity,
        contamination_probability: f64,
    ) -> Self {
        Self {
            id,
            name,
            kind,
            point,
            capacity,
            contamination_probability,
            holders: Vec::new(),
            waiting: VecDeque::new(),
            present: Vec::new(),
        }
    }

    // ── Capacity resource ─────────────────────────────────────────────────

    /// Ask for a slot.  Never blocks an unbounded location.
    pub fn request(&mut self, agent: AgentId) -> Admission {
        if self.capacity.is_exhausted(self.holders.len()) {
            self.waiting.push_back(agent);
            Admission::Queued
        } else {
            self.holders.push(agent);
            Admission::Admitted
        }
    }

    /// Return `agent`'s slot.  If someone is waiting, the slot goes straight
    /// to the longest waiter, which is returned so the caller can resume it.
    pub fn release(&mut self, agent: AgentId) -> Option<AgentId> {
        if let Some(pos) = self.holders.iter().position(|&a| a == agent) {
            self.holders.remove(pos);
        }
        if self.capacity.is_exhausted(self.holders.len()) {
            return None;
        }
        let next = self.waiting.pop_front()?;
        self.holders.push(next);
        Some(next)
    }

    /// Mark `agent` as physically present.  Idempotent.
    pub fn enter(&mut self, agent: AgentId) {
        if !self.present.contains(&agent) {
            self.present.push(agent);
        }
    }

    /// Remove `agent` from the present set.
    pub fn leave(&mut self, agent: AgentId) {
        if let Some(pos) = self.present.iter().position(|&a| a == agent) {
            self.present.remove(pos);
        }
    }

    // ── Contagion ─────────────────────────────────────────────────────────

    /// The configured probability if at least one present agent other than
    /// `asking` is contagious, else zero.
    pub fn contamination_probability_for<F>(&self, asking: AgentId, is_contagious: F) -> f64
    where
        F: Fn(AgentId) -> bool,
    {
        let exposed = self
            .present
            .iter()
            .any(|&other| other != asking && is_contagious(other));
        if exposed { self.contamination_probability } else { 0.0 }
    }

    // ── Read access ───────────────────────────────────────────────────────

    /// Agents currently inside, in entry order.
    pub fn occupants(&self) -> &[AgentId] {
        &self.present
    }

    /// Number of agents currently inside.
    #[inline]
    pub fn occupancy(&self) -> usize {
        self.present.len()
    }

    /// Number of slots currently granted.
    #[inline]
    pub fn slots_in_use(&self) -> usize {
        self.holders.len()
    }

    /// Agents blocked on this location, longest-waiting first.
    pub fn waiting(&self) -> impl ExactSizeIterator<Item = AgentId> + '_ {
        self.waiting.iter().copied()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.capacity.is_exhausted(self.holders.len())
    }

    /// `true` if `agent` currently holds a slot.
    pub fn is_holder(&self, agent: AgentId) -> bool {
        self.holders.contains(&agent)
    }
}
