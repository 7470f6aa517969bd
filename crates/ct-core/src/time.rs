//! Simulation time model.
//!
//! # Design
//!
//! Time is represented as a monotonically increasing `Tick` counter.  The
//! mapping to calendar time is held in `SimClock`:
//!
//!   wall_time = start_unix_secs + tick * tick_minutes * 60
//!
//! Using an integer tick as the canonical time unit means all stay and
//! incubation arithmetic is exact and comparisons are O(1).  Calendar fields
//! (hour of day, weekday) are derived on demand without a datetime library:
//! the Unix epoch fell on a Thursday, so `weekday = (days + 3) mod 7` with
//! Monday = 0.

use std::fmt;

use crate::{CoreError, CoreResult};

const SECS_PER_DAY: i64 = 86_400;
/// Weekday index of 1970-01-01 (Thursday) with Monday = 0.
const EPOCH_WEEKDAY: i64 = 3;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── Calendar ──────────────────────────────────────────────────────────────────

/// Calendar fields of one instant.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Calendar {
    /// Whole days elapsed since the simulation start.
    pub day: u64,
    /// Day of week, Monday = 0 … Sunday = 6.
    pub weekday: u8,
    /// Hour of day, 0–23.
    pub hour: u8,
    /// Minute of hour, 0–59.
    pub minute: u8,
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Converts between tick counts and calendar time.
///
/// `SimClock` is cheap to copy and holds no heap data.  Unlike a fixed-step
/// clock it jumps: the scheduler calls [`advance_to`](Self::advance_to) with
/// the tick of the next pending resumption.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Unix timestamp (seconds since epoch) of tick 0.
    pub start_unix_secs: i64,
    /// Simulated minutes per tick.
    pub tick_minutes: u32,
    /// The two weekday indices (Monday = 0) treated as the weekend.
    pub weekend_days: [u8; 2],
    /// The current tick.
    pub current_tick: Tick,
}

impl SimClock {
    /// Create a clock starting at `start_unix_secs` with a Saturday/Sunday
    /// weekend.
    pub fn new(start_unix_secs: i64, tick_minutes: u32) -> Self {
        Self {
            start_unix_secs,
            tick_minutes,
            weekend_days: [5, 6],
            current_tick: Tick::ZERO,
        }
    }

    /// Override the weekend day pair.
    pub fn with_weekend(mut self, weekend_days: [u8; 2]) -> Self {
        self.weekend_days = weekend_days;
        self
    }

    /// Jump forward to `tick`.  Moving backwards is ignored.
    #[inline]
    pub fn advance_to(&mut self, tick: Tick) {
        if tick > self.current_tick {
            self.current_tick = tick;
        }
    }

    /// Unix timestamp corresponding to `tick`.
    #[inline]
    pub fn unix_secs_at(&self, tick: Tick) -> i64 {
        self.start_unix_secs + tick.0 as i64 * self.tick_minutes as i64 * 60
    }

    /// Current Unix timestamp.
    #[inline]
    pub fn current_unix_secs(&self) -> i64 {
        self.unix_secs_at(self.current_tick)
    }

    /// Calendar fields at an arbitrary tick.
    pub fn calendar_at(&self, tick: Tick) -> Calendar {
        let secs = self.unix_secs_at(tick);
        let days = secs.div_euclid(SECS_PER_DAY);
        let secs_of_day = secs.rem_euclid(SECS_PER_DAY);
        let elapsed = secs - self.start_unix_secs;
        Calendar {
            day:     (elapsed.max(0) / SECS_PER_DAY) as u64,
            weekday: (days + EPOCH_WEEKDAY).rem_euclid(7) as u8,
            hour:    (secs_of_day / 3_600) as u8,
            minute:  ((secs_of_day % 3_600) / 60) as u8,
        }
    }

    /// Calendar fields at the current tick.
    #[inline]
    pub fn calendar(&self) -> Calendar {
        self.calendar_at(self.current_tick)
    }

    #[inline]
    pub fn minute_of_hour(&self) -> u8 {
        self.calendar().minute
    }

    #[inline]
    pub fn hour_of_day(&self) -> u8 {
        self.calendar().hour
    }

    #[inline]
    pub fn weekday(&self) -> u8 {
        self.calendar().weekday
    }

    /// `true` if `weekday` is one of the configured weekend days.
    #[inline]
    pub fn is_weekend_day(&self, weekday: u8) -> bool {
        self.weekend_days.contains(&weekday)
    }

    #[inline]
    pub fn is_weekend(&self) -> bool {
        self.is_weekend_day(self.weekday())
    }

    // ── Tick-count helpers ────────────────────────────────────────────────

    /// How many ticks span `minutes`? (rounds up — a stay is never cut short)
    #[inline]
    pub fn ticks_for_minutes(&self, minutes: u64) -> u64 {
        minutes.div_ceil(self.tick_minutes.max(1) as u64)
    }

    #[inline]
    pub fn ticks_for_hours(&self, hours: u64) -> u64 {
        self.ticks_for_minutes(hours * 60)
    }

    #[inline]
    pub fn ticks_for_days(&self, days: u64) -> u64 {
        self.ticks_for_minutes(days * 24 * 60)
    }

    /// Simulated minutes spanned by `ticks`.
    #[inline]
    pub fn minutes_for_ticks(&self, ticks: u64) -> u64 {
        ticks * self.tick_minutes as u64
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.calendar();
        write!(
            f,
            "{} (day {} wd{} {:02}:{:02})",
            self.current_tick, c.day, c.weekday, c.hour, c.minute
        )
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically loaded from a JSON file by the application crate and passed to
/// the simulation builder.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Unix timestamp for tick 0.  The default is Monday 2020-03-09 00:00 UTC.
    pub start_unix_secs: i64,

    /// Simulated minutes per tick.
    pub tick_minutes: u32,

    /// Simulation horizon: no process resumes at or after this tick.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Weekday indices (Monday = 0) treated as the weekend.
    pub weekend_days: [u8; 2],
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            start_unix_secs: 1_583_712_000,
            tick_minutes:    1,
            total_ticks:     14 * 24 * 60,
            seed:            0,
            weekend_days:    [5, 6],
        }
    }
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.start_unix_secs, self.tick_minutes).with_weekend(self.weekend_days)
    }

    /// Reject configurations the clock cannot represent.
    pub fn validate(&self) -> CoreResult<()> {
        if self.tick_minutes == 0 {
            return Err(CoreError::Config("tick_minutes must be > 0".into()));
        }
        if self.weekend_days.iter().any(|&d| d > 6) {
            return Err(CoreError::Config(format!(
                "weekend_days {:?} must be weekday indices 0-6",
                self.weekend_days
            )));
        }
        Ok(())
    }
}
