//! Decisions — what an agent chooses to do at a decision point.

/// The outcome of one [`BehaviorModel::decide`][crate::BehaviorModel::decide]
/// call.
///
/// Every decision except `Test` is followed by the default home stay before
/// the agent decides again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Take a test and leave the simulation, whatever the result.
    Test { positive: bool },

    /// Spend `minutes` at the workplace.
    Work { minutes: u64 },

    /// Visit a store for `minutes`.
    Shop { minutes: u64 },

    /// Visit a park for `minutes`.
    Exercise { minutes: u64 },

    /// Chain of misc stops; the simulator draws each stop's duration and
    /// whether to continue.
    Trip,

    /// Log the start of symptoms and stay home.
    SymptomOnset,

    /// Nothing scheduled this hour.
    StayHome,
}
