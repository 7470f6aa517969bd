//! Per-agent process state.
//!
//! An agent's routine is an explicit state machine.  Each time the agent is
//! popped from the wake queue the simulator advances it until it suspends
//! again, either on a timed stay or on a full location.

use ct_agent::Activity;
use ct_core::LocationId;

/// What a stay is for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Leg {
    Home,
    Work,
    Shop,
    Exercise,
    /// Stop number `stops` (counting from 1) of a trip.
    TripStop { stops: usize },
}

impl Leg {
    pub fn activity(self) -> Activity {
        match self {
            Leg::Home             => Activity::AtHome,
            Leg::Work             => Activity::AtWork,
            Leg::Shop             => Activity::Shopping,
            Leg::Exercise         => Activity::Exercising,
            Leg::TripStop { .. }  => Activity::OnTrip,
        }
    }
}

/// A stay of `ticks` ticks (at least one) for `leg`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Stay {
    pub leg:   Leg,
    pub ticks: u64,
}

impl Stay {
    pub fn new(leg: Leg, ticks: u64) -> Self {
        Self { leg, ticks: ticks.max(1) }
    }
}

/// Where an agent's process is suspended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Process {
    /// Next resumption makes a decision.
    Ready,
    /// Queued on a full location; resumed by the release that hands it a
    /// slot.
    Waiting { location: LocationId, stay: Stay },
    /// Inside `location` until the stay ends.
    Staying { location: LocationId, stay: Stay },
    /// Tested; the process has ended.
    Removed,
}

impl Process {
    #[inline]
    pub fn is_removed(&self) -> bool {
        matches!(self, Process::Removed)
    }

    #[inline]
    pub fn is_waiting(&self) -> bool {
        matches!(self, Process::Waiting { .. })
    }
}
