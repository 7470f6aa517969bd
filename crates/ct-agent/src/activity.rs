//! What an agent is currently doing.

use std::fmt;

/// Behavior state of one agent.
///
/// `TestedAndRemoved` is terminal: the agent's process ends and it produces
/// no further events.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Activity {
    #[default]
    AtHome,
    AtWork,
    Shopping,
    Exercising,
    OnTrip,
    TestedAndRemoved,
}

impl Activity {
    #[inline]
    pub fn is_terminal(self) -> bool {
        self == Activity::TestedAndRemoved
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Activity::AtHome           => "at_home",
            Activity::AtWork           => "at_work",
            Activity::Shopping         => "shopping",
            Activity::Exercising       => "exercising",
            Activity::OnTrip           => "on_trip",
            Activity::TestedAndRemoved => "tested_and_removed",
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
