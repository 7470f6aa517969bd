//! Unit tests for ct-behavior.

use ct_agent::{AgentStore, PopulationBuilder, ResidentSpec};
use ct_core::{AgentId, AgentRng, GeoPoint, LocationKind, SimClock, Tick};
use ct_schedule::WeeklySlot;
use ct_world::{LocationSpec, LocationStore};

use crate::{BehaviorConfig, BehaviorModel, Decision, DecisionContext, HumanBehavior};

// ── Helpers ───────────────────────────────────────────────────────────────────

const DAY: u64 = 24 * 60;
const HOUR: u64 = 60;

/// One agent: works from 09:00, shops Wednesday 15:00, exercises Thursday
/// 16:00.  One-minute ticks starting Monday 00:00.
fn setup() -> (AgentStore, SimClock) {
    let mut w = LocationStore::new();
    let home = w.add(LocationSpec::new("home", LocationKind::Household, GeoPoint::new(0.0, 0.0))).unwrap();
    let job = w.add(LocationSpec::new("job", LocationKind::Workplace, GeoPoint::new(1.0, 1.0))).unwrap();
    let (mut agents, _) = PopulationBuilder::new(0)
        .resident(ResidentSpec::new("pat", home, job))
        .build(&w)
        .unwrap();
    let h = &mut agents.habits[0];
    h.work_start_hour = 9;
    h.shopping_slot = WeeklySlot::new(2, 15).unwrap();
    h.exercise_slot = WeeklySlot::new(3, 16).unwrap();
    agents.severe[0] = false;
    agents.never_recovers[0] = false;
    (agents, SimClock::new(1_583_712_000, 1))
}

fn decide(agents: &AgentStore, clock: &SimClock, cfg: &BehaviorConfig, tick: u64) -> Decision {
    let ctx = DecisionContext::new(Tick(tick), clock, agents, cfg);
    let mut rng = AgentRng::new(1, AgentId(0));
    HumanBehavior.decide(AgentId(0), &ctx, &mut rng)
}

// ── Routine ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod routine {
    use super::*;

    #[test]
    fn works_at_start_hour_on_weekdays() {
        let (agents, clock) = setup();
        let cfg = BehaviorConfig::default();
        assert!(matches!(decide(&agents, &clock, &cfg, 9 * HOUR + 10), Decision::Work { .. }));
        assert_eq!(decide(&agents, &clock, &cfg, 10 * HOUR), Decision::StayHome);
        // Saturday 09:00.
        let sat = 5 * DAY + 9 * HOUR;
        assert!(!matches!(decide(&agents, &clock, &cfg, sat), Decision::Work { .. }));
    }

    #[test]
    fn work_from_home_never_commutes() {
        let (agents, clock) = setup();
        let cfg = BehaviorConfig { work_from_home: true, ..BehaviorConfig::default() };
        assert_eq!(decide(&agents, &clock, &cfg, 9 * HOUR), Decision::StayHome);
    }

    #[test]
    fn shops_and_exercises_in_their_slots() {
        let (agents, clock) = setup();
        let cfg = BehaviorConfig::default();
        assert!(matches!(decide(&agents, &clock, &cfg, 2 * DAY + 15 * HOUR + 30), Decision::Shop { .. }));
        assert!(matches!(decide(&agents, &clock, &cfg, 3 * DAY + 16 * HOUR), Decision::Exercise { .. }));
        assert_eq!(decide(&agents, &clock, &cfg, 2 * DAY + 16 * HOUR), Decision::StayHome);
    }

    #[test]
    fn work_wins_over_shopping_slot() {
        let (mut agents, clock) = setup();
        agents.habits[0].shopping_slot = WeeklySlot::new(0, 9).unwrap();
        let cfg = BehaviorConfig::default();
        assert!(matches!(decide(&agents, &clock, &cfg, 9 * HOUR), Decision::Work { .. }));
    }

    #[test]
    fn trips_only_on_weekends() {
        let (agents, clock) = setup();
        let cfg = BehaviorConfig { weekend_trip_probability: 1.0, ..BehaviorConfig::default() };
        assert_eq!(decide(&agents, &clock, &cfg, 6 * DAY + 13 * HOUR), Decision::Trip);
        assert_eq!(decide(&agents, &clock, &cfg, DAY + 13 * HOUR), Decision::StayHome);
    }
}

// ── Disease timeline ──────────────────────────────────────────────────────────

#[cfg(test)]
mod timeline {
    use super::*;
    use crate::StayHomeBehavior;

    #[test]
    fn tested_after_incubation() {
        let (mut agents, clock) = setup();
        agents.set_infected(AgentId(0), Tick(0));
        let cfg = BehaviorConfig { test_positive_probability: 1.0, ..BehaviorConfig::default() };
        assert!(!matches!(decide(&agents, &clock, &cfg, 14 * DAY), Decision::Test { .. }));
        assert_eq!(decide(&agents, &clock, &cfg, 14 * DAY + 1), Decision::Test { positive: true });

        let cfg = BehaviorConfig { test_positive_probability: 0.0, ..cfg };
        assert_eq!(decide(&agents, &clock, &cfg, 14 * DAY + 1), Decision::Test { positive: false });
    }

    #[test]
    fn test_overrides_work() {
        let (mut agents, clock) = setup();
        agents.set_infected(AgentId(0), Tick(0));
        let cfg = BehaviorConfig::default();
        let tick = 15 * DAY + 9 * HOUR; // Tuesday of week 3, work hour
        assert!(matches!(decide(&agents, &clock, &cfg, tick), Decision::Test { .. }));
    }

    #[test]
    fn symptom_onset_reported_once() {
        let (mut agents, clock) = setup();
        agents.set_infected(AgentId(0), Tick(0));
        let cfg = BehaviorConfig::default();
        let tick = 5 * DAY + 13 * HOUR;
        assert_eq!(decide(&agents, &clock, &cfg, tick), Decision::SymptomOnset);
        agents.symptoms_logged[0] = true;
        assert_eq!(decide(&agents, &clock, &cfg, tick), Decision::StayHome);
        // Not yet past the delay.
        agents.symptoms_logged[0] = false;
        assert_eq!(decide(&agents, &clock, &cfg, 4 * DAY), Decision::StayHome);
    }

    #[test]
    fn severely_sick_skip_outings_during_peak() {
        let (mut agents, clock) = setup();
        agents.set_infected(AgentId(0), Tick(0));
        agents.severe[0] = true;
        agents.symptoms_logged[0] = true;
        let cfg = BehaviorConfig { test_after_incubation: false, ..BehaviorConfig::default() };
        // Wednesday of week 3, shopping slot, inside peak illness.
        let shop_peak = 16 * DAY + 15 * HOUR;
        assert_eq!(decide(&agents, &clock, &cfg, shop_peak), Decision::StayHome);
        // Same slot after recovery (incubation 14 + 10 sick days → day 24).
        let shop_later = 30 * DAY + 15 * HOUR;
        assert!(matches!(decide(&agents, &clock, &cfg, shop_later), Decision::Shop { .. }));

        agents.never_recovers[0] = true;
        assert_eq!(decide(&agents, &clock, &cfg, shop_later), Decision::StayHome);
    }

    #[test]
    fn peak_illness_window() {
        let (mut agents, clock) = setup();
        let cfg = BehaviorConfig::default();
        let ctx = DecisionContext::new(Tick(15 * DAY), &clock, &agents, &cfg);
        assert!(!ctx.in_peak_illness(AgentId(0)));
        agents.set_infected(AgentId(0), Tick(0));
        for (tick, expected) in [(13 * DAY, false), (14 * DAY, true), (24 * DAY, true), (24 * DAY + 1, false)] {
            let ctx = DecisionContext::new(Tick(tick), &clock, &agents, &cfg);
            assert_eq!(ctx.in_peak_illness(AgentId(0)), expected, "tick {tick}");
        }
    }

    #[test]
    fn stay_home_model_only_tests() {
        let (mut agents, clock) = setup();
        let cfg = BehaviorConfig::default();
        let mut rng = AgentRng::new(0, AgentId(0));
        let ctx = DecisionContext::new(Tick(9 * HOUR), &clock, &agents, &cfg);
        assert_eq!(StayHomeBehavior.decide(AgentId(0), &ctx, &mut rng), Decision::StayHome);

        agents.set_infected(AgentId(0), Tick(0));
        let ctx = DecisionContext::new(Tick(20 * DAY), &clock, &agents, &cfg);
        assert!(matches!(StayHomeBehavior.decide(AgentId(0), &ctx, &mut rng), Decision::Test { .. }));
    }
}

// ── Config ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod config {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(BehaviorConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_bad_probability_and_zero_stay() {
        let cfg = BehaviorConfig { weekend_trip_probability: -0.1, ..BehaviorConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = BehaviorConfig { home_stay_minutes: 0, ..BehaviorConfig::default() };
        assert!(cfg.validate().is_err());
    }
}
