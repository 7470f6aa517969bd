//! Per-day event counts for the final report.
//!
//! Rows are keyed by the tick each callback carries, not by callback order:
//! `Sim::step` reports a resumption's events before the resumption itself,
//! so the first events of a new day must open that day's row on their own.

use ct_agent::City;
use ct_core::{AgentId, Event, EventKind, Tick};
use ct_sim::SimObserver;

pub struct DayRow {
    pub day:      u64,
    /// Infected residents at the end of the day.
    pub infected: usize,
    /// Counts indexed by [`kind_index`].
    pub events:   [usize; 4],
}

impl DayRow {
    fn empty(day: u64, infected: usize) -> Self {
        Self { day, infected, events: [0; 4] }
    }
}

fn kind_index(kind: EventKind) -> usize {
    match kind {
        EventKind::Test          => 0,
        EventKind::Encounter     => 1,
        EventKind::SymptomStart  => 2,
        EventKind::Contamination => 3,
    }
}

/// Counts events by kind and closes one row per simulated day, including
/// days on which nobody resumed.
pub struct DailyTable {
    ticks_per_day: u64,
    days:          u64,
    current:       DayRow,
    pub rows:      Vec<DayRow>,
}

impl DailyTable {
    /// `days` is the length of the run; the finished table has at least
    /// that many rows.
    pub fn new(ticks_per_day: u64, days: u64) -> Self {
        Self {
            ticks_per_day: ticks_per_day.max(1),
            days,
            current:       DayRow::empty(0, 0),
            rows:          Vec::new(),
        }
    }

    fn day_of(&self, tick: Tick) -> u64 {
        tick.0 / self.ticks_per_day
    }

    /// Close every day before `day`.  Skipped days carry the last known
    /// infected count forward.
    fn roll_to(&mut self, day: u64) {
        while self.current.day < day {
            let next = DayRow::empty(self.current.day + 1, self.current.infected);
            self.rows.push(std::mem::replace(&mut self.current, next));
        }
    }
}

impl SimObserver for DailyTable {
    fn on_resume(&mut self, tick: Tick, _agent: AgentId, city: &City) {
        self.roll_to(self.day_of(tick));
        self.current.infected = city.agents.infected_count();
    }

    fn on_event(&mut self, event: &Event) {
        self.roll_to(self.day_of(event.tick));
        self.current.events[kind_index(event.kind())] += 1;
    }

    fn on_sim_end(&mut self, _final_tick: Tick, city: &City) {
        self.current.infected = city.agents.infected_count();
        let end = self.days.max(self.current.day + 1);
        self.roll_to(end);
    }
}
