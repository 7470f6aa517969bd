//! Behavior parameters shared by every agent.

use crate::{BehaviorError, BehaviorResult};

/// Disease timeline and routine parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BehaviorConfig {
    /// Days from infection until the agent gets tested.
    pub incubation_days:           u64,
    /// Days from infection until symptoms are logged.
    pub symptom_days:              u64,
    /// Length of peak illness after incubation, in days.
    pub days_sick:                 u64,
    /// Chance a test comes back positive.
    pub test_positive_probability: f64,
    /// Whether agents past incubation get tested at all.
    pub test_after_incubation:     bool,
    /// Per-decision chance of a trip on a weekend day.
    pub weekend_trip_probability:  f64,
    /// Length of the home stay between two decisions.
    pub home_stay_minutes:         u64,
    /// Lockdown switch: nobody commutes.
    pub work_from_home:            bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            incubation_days:           14,
            symptom_days:              5,
            days_sick:                 10,
            test_positive_probability: 0.2,
            test_after_incubation:     true,
            weekend_trip_probability:  0.05,
            home_stay_minutes:         60,
            work_from_home:            false,
        }
    }
}

impl BehaviorConfig {
    pub fn validate(&self) -> BehaviorResult<()> {
        for (name, p) in [
            ("test_positive_probability", self.test_positive_probability),
            ("weekend_trip_probability", self.weekend_trip_probability),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(BehaviorError::Config(format!("{name} {p} is outside [0, 1]")));
            }
        }
        if self.home_stay_minutes == 0 {
            return Err(BehaviorError::Config("home_stay_minutes must be > 0".into()));
        }
        Ok(())
    }
}
