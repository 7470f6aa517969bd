//! Per-agent habits and the population-level parameters they are drawn from.
//!
//! Every habitual duration is a two-level discretized Gaussian: at creation
//! each agent draws its own average and spread from the population
//! parameters, and each activity instance then draws its duration from the
//! agent's own `(avg, scale)`.

use ct_core::AgentRng;
use ct_mobility::MobilityParams;
use ct_schedule::WeeklySlot;

use crate::{AgentError, AgentResult};

/// Hours of the day (half-open) in which shopping and exercise slots fall.
const SLOT_HOURS: std::ops::Range<u8> = 7..20;
/// Hours of the day (half-open) in which the working day may start.
const WORK_START_HOURS: std::ops::Range<u8> = 7..12;

// ── HabitParams ───────────────────────────────────────────────────────────────

/// Population-level parameters of one habitual duration.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HabitParams {
    /// Mean and spread of the per-agent average.
    pub avg_mean:    f64,
    pub avg_scale:   f64,
    /// Mean and spread of the per-agent spread.
    pub scale_mean:  f64,
    pub scale_scale: f64,
}

impl HabitParams {
    pub const fn new(avg_mean: f64, avg_scale: f64, scale_mean: f64, scale_scale: f64) -> Self {
        Self { avg_mean, avg_scale, scale_mean, scale_scale }
    }

    /// Draw one agent's personal `(avg, scale)`.
    pub fn draw(&self, rng: &mut AgentRng) -> Habit {
        Habit {
            avg:   rng.discrete_gaussian(self.avg_mean, self.avg_scale),
            scale: rng.discrete_gaussian(self.scale_mean, self.scale_scale),
        }
    }

    fn validate(&self, what: &str) -> AgentResult<()> {
        let all = [self.avg_mean, self.avg_scale, self.scale_mean, self.scale_scale];
        if all.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(AgentError::Config(format!(
                "{what}: habit parameters must be finite and non-negative, got {self:?}"
            )));
        }
        Ok(())
    }
}

/// One agent's personal duration habit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Habit {
    pub avg:   u32,
    pub scale: u32,
}

impl Habit {
    /// Draw the duration of one activity instance.
    #[inline]
    pub fn sample(&self, rng: &mut AgentRng) -> u32 {
        rng.discrete_gaussian(self.avg as f64, self.scale as f64)
    }
}

// ── HabitConfig ───────────────────────────────────────────────────────────────

/// Population-level habit and severity parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HabitConfig {
    /// Minutes per shopping trip.
    pub shopping_minutes:           HabitParams,
    /// Minutes per park visit.
    pub exercise_minutes:           HabitParams,
    /// Hours per working day.
    pub working_hours:              HabitParams,
    /// Minutes per misc trip stop.
    pub misc_minutes:               HabitParams,
    /// Chance an agent will become severely symptomatic once infected.
    pub severe_probability:         f64,
    /// Chance an agent never recovers from peak illness.
    pub never_recovers_probability: f64,
    /// Exploration parameters given to every agent.
    pub mobility:                   MobilityParams,
}

impl Default for HabitConfig {
    fn default() -> Self {
        Self {
            shopping_minutes:           HabitParams::new(30.0, 15.0, 5.0, 5.0),
            exercise_minutes:           HabitParams::new(45.0, 15.0, 10.0, 5.0),
            working_hours:              HabitParams::new(8.0, 1.0, 1.0, 0.5),
            misc_minutes:               HabitParams::new(60.0, 30.0, 15.0, 5.0),
            severe_probability:         0.1,
            never_recovers_probability: 0.01,
            mobility:                   MobilityParams::default(),
        }
    }
}

impl HabitConfig {
    pub fn validate(&self) -> AgentResult<()> {
        self.shopping_minutes.validate("shopping_minutes")?;
        self.exercise_minutes.validate("exercise_minutes")?;
        self.working_hours.validate("working_hours")?;
        self.misc_minutes.validate("misc_minutes")?;
        for (name, p) in [
            ("severe_probability", self.severe_probability),
            ("never_recovers_probability", self.never_recovers_probability),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(AgentError::Config(format!("{name} {p} is outside [0, 1]")));
            }
        }
        let m = self.mobility;
        if !(m.rho.is_finite() && m.rho >= 0.0 && m.gamma.is_finite() && m.gamma >= 0.0) {
            return Err(AgentError::Config(format!(
                "mobility rho {} / gamma {} must be finite and non-negative",
                m.rho, m.gamma
            )));
        }
        Ok(())
    }
}

// ── Habits ────────────────────────────────────────────────────────────────────

/// Everything habitual about one agent, drawn once at creation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Habits {
    pub shopping:        Habit,
    pub exercise:        Habit,
    /// In hours; converted to minutes when a working day is drawn.
    pub working_hours:   Habit,
    pub misc:            Habit,
    pub shopping_slot:   WeeklySlot,
    pub exercise_slot:   WeeklySlot,
    pub work_start_hour: u8,
}

impl Habits {
    pub fn draw(cfg: &HabitConfig, rng: &mut AgentRng) -> Self {
        let shopping = cfg.shopping_minutes.draw(rng);
        let exercise = cfg.exercise_minutes.draw(rng);
        let working_hours = cfg.working_hours.draw(rng);
        let misc = cfg.misc_minutes.draw(rng);
        let shopping_slot = random_slot(rng);
        let exercise_slot = random_slot(rng);
        let work_start_hour = rng.gen_range(WORK_START_HOURS);
        Self {
            shopping,
            exercise,
            working_hours,
            misc,
            shopping_slot,
            exercise_slot,
            work_start_hour,
        }
    }

    /// Length of one working day, in minutes.
    pub fn sample_work_minutes(&self, rng: &mut AgentRng) -> u64 {
        self.working_hours.sample(rng) as u64 * 60
    }
}

fn random_slot(rng: &mut AgentRng) -> WeeklySlot {
    WeeklySlot {
        weekday: rng.gen_range(0..7),
        hour:    rng.gen_range(SLOT_HOURS),
    }
}
