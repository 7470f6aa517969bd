//! Timestamped per-agent event records.
//!
//! Events are a side channel: the simulation appends them to each agent's
//! log and never reads them back for control flow.  Summaries (infection
//! counts, contact matrices) are derived by external reporting code.

use crate::{AgentId, LocationId, Tick};

/// The four event types the simulator emits.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EventKind {
    Test,
    Encounter,
    SymptomStart,
    Contamination,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Test          => "test",
            EventKind::Encounter     => "encounter",
            EventKind::SymptomStart  => "symptom_start",
            EventKind::Contamination => "contamination",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type-specific event data.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "event_type", rename_all = "snake_case"))]
pub enum EventPayload {
    Test {
        positive: bool,
    },
    Encounter {
        /// The counterpart of this record.
        other:            AgentId,
        /// Overlap of both agents' stay intervals, in minutes.
        duration_minutes: u64,
        /// Coarse contact distance in centimetres.
        distance_cm:      u32,
        lat:              f64,
        lon:              f64,
    },
    SymptomStart {
        covid: bool,
    },
    Contamination {
        location: LocationId,
    },
}

/// One immutable record in an agent's event log.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    pub agent:     AgentId,
    pub tick:      Tick,
    /// Wall-clock timestamp of `tick` (Unix seconds).
    pub unix_secs: i64,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub payload:   EventPayload,
}

impl Event {
    pub fn new(agent: AgentId, tick: Tick, unix_secs: i64, payload: EventPayload) -> Self {
        Self { agent, tick, unix_secs, payload }
    }

    pub fn kind(&self) -> EventKind {
        match self.payload {
            EventPayload::Test { .. }          => EventKind::Test,
            EventPayload::Encounter { .. }     => EventKind::Encounter,
            EventPayload::SymptomStart { .. }  => EventKind::SymptomStart,
            EventPayload::Contamination { .. } => EventKind::Contamination,
        }
    }

    /// The counterpart agent of an encounter record.
    pub fn counterpart(&self) -> Option<AgentId> {
        match self.payload {
            EventPayload::Encounter { other, .. } => Some(other),
            _ => None,
        }
    }
}
