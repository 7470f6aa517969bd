//! `WakeQueue` — the scheduler's pending-resumption priority queue.
//!
//! Only agents with something to do are in the queue: an agent staying
//! somewhere for three hours is touched once when the stay ends, not on
//! every tick in between.  The clock jumps straight to
//! [`next_tick`](WakeQueue::next_tick).
//!
//! `BTreeMap` gives O(log W) push and pop where W is the number of distinct
//! pending ticks.  Within one tick agents resume in push order, which is
//! what makes a run reproducible for a fixed seed.

use std::collections::{BTreeMap, VecDeque};

use ct_core::{AgentId, Tick};

/// Maps future ticks to the agents that resume at that tick.
#[derive(Default)]
pub struct WakeQueue {
    inner: BTreeMap<Tick, VecDeque<AgentId>>,
    /// Cached total entry count for O(1) `len()`.
    total: usize,
}

impl WakeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `agent` to resume at `tick`, behind anyone already queued
    /// for that tick.
    pub fn push(&mut self, tick: Tick, agent: AgentId) {
        self.inner.entry(tick).or_default().push_back(agent);
        self.total += 1;
    }

    /// Remove and return the earliest pending resumption.
    pub fn pop_next(&mut self) -> Option<(Tick, AgentId)> {
        let mut entry = self.inner.first_entry()?;
        let tick = *entry.key();
        let agent = entry.get_mut().pop_front();
        if entry.get().is_empty() {
            entry.remove();
        }
        let agent = agent?;
        self.total -= 1;
        Some((tick, agent))
    }

    /// The earliest tick with at least one queued agent, or `None` if empty.
    pub fn next_tick(&self) -> Option<Tick> {
        self.inner.keys().next().copied()
    }

    /// Total number of (tick, agent) entries across all future ticks.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct future ticks that have at least one queued agent.
    pub fn tick_count(&self) -> usize {
        self.inner.len()
    }
}
