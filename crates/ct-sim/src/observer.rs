//! Simulation observer trait for progress reporting and data collection.

use ct_agent::City;
use ct_core::{AgentId, Event, Tick};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — daily progress printer
///
/// ```rust,ignore
/// struct DailyProgress { last_day: u64 }
///
/// impl SimObserver for DailyProgress {
///     fn on_resume(&mut self, tick: Tick, _agent: AgentId, city: &City) {
///         let day = tick.0 / (24 * 60);
///         if day > self.last_day {
///             self.last_day = day;
///             println!("day {day}: {} infected", city.agents.infected_count());
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after one agent process has been resumed and run until it
    /// suspended again.
    fn on_resume(&mut self, _tick: Tick, _agent: AgentId, _city: &City) {}

    /// Called for every event logged, in log order.
    fn on_event(&mut self, _event: &Event) {}

    /// Called once when the run stops.
    fn on_sim_end(&mut self, _final_tick: Tick, _city: &City) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
