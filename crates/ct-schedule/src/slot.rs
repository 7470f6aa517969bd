//! `WeeklySlot` — the recurring weekday/hour of a habitual activity.

use std::fmt;

use ct_core::Calendar;

use crate::{ScheduleError, ScheduleResult};

const WEEKDAY_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// One hour in the week, Monday = 0.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeeklySlot {
    pub weekday: u8,
    pub hour:    u8,
}

impl WeeklySlot {
    pub fn new(weekday: u8, hour: u8) -> ScheduleResult<Self> {
        if weekday > 6 || hour > 23 {
            return Err(ScheduleError::InvalidSlot { weekday, hour });
        }
        Ok(Self { weekday, hour })
    }

    /// `true` during the whole hour the slot names.
    #[inline]
    pub fn matches(&self, cal: &Calendar) -> bool {
        cal.weekday == self.weekday && cal.hour == self.hour
    }
}

impl fmt::Display for WeeklySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:02}:00", WEEKDAY_NAMES[self.weekday as usize % 7], self.hour)
    }
}
