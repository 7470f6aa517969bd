//! Unit tests for ct-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, LocationId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn out_of_range_rejected() {
        assert!(LocationId::try_from(u32::MAX as usize + 1).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "agent#7");
        assert_eq!(LocationId(3).to_string(), "loc#3");
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn planar_distance_is_euclidean_in_degrees() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(3.0, 4.0);
        assert!((a.planar_distance(b) - 5.0).abs() < 1e-12);
        assert_eq!(a.planar_distance(a), 0.0);
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimConfig, Tick};

    /// Monday 2020-03-09 00:00 UTC.
    const MONDAY: i64 = 1_583_712_000;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(3).since(Tick(10)), 0);
    }

    #[test]
    fn calendar_at_start_is_monday_midnight() {
        let clock = SimClock::new(MONDAY, 1);
        let c = clock.calendar();
        assert_eq!((c.day, c.weekday, c.hour, c.minute), (0, 0, 0, 0));
        assert!(!clock.is_weekend());
    }

    #[test]
    fn calendar_advances_with_tick_minutes() {
        let mut clock = SimClock::new(MONDAY, 5);
        // 5 days, 7 hours and 35 minutes = 7_655 minutes = 1_531 ticks.
        clock.advance_to(Tick(1_531));
        let c = clock.calendar();
        assert_eq!(c.day, 5);
        assert_eq!(c.weekday, 5); // Saturday
        assert_eq!(c.hour, 7);
        assert_eq!(c.minute, 35);
        assert!(clock.is_weekend());
    }

    #[test]
    fn custom_weekend_pair() {
        // Monday + Sunday weekend.
        let clock = SimClock::new(MONDAY, 60).with_weekend([0, 6]);
        assert!(clock.is_weekend());
        assert!(!clock.is_weekend_day(5));
        assert!(clock.is_weekend_day(6));
    }

    #[test]
    fn advance_to_never_moves_backwards() {
        let mut clock = SimClock::new(MONDAY, 1);
        clock.advance_to(Tick(100));
        clock.advance_to(Tick(50));
        assert_eq!(clock.current_tick, Tick(100));
    }

    #[test]
    fn ticks_for_duration_rounds_up() {
        let clock = SimClock::new(0, 15);
        assert_eq!(clock.ticks_for_minutes(60), 4);
        assert_eq!(clock.ticks_for_minutes(61), 5);
        assert_eq!(clock.ticks_for_hours(2), 8);
        assert_eq!(clock.ticks_for_days(1), 96);
        assert_eq!(clock.minutes_for_ticks(4), 60);
    }

    #[test]
    fn unix_secs_at_tick() {
        let clock = SimClock::new(MONDAY, 2);
        assert_eq!(clock.unix_secs_at(Tick(30)), MONDAY + 3_600);
    }

    #[test]
    fn sim_config_defaults_validate() {
        let cfg = SimConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.end_tick(), Tick(14 * 24 * 60));
        assert_eq!(cfg.make_clock().weekday(), 0);
    }

    #[test]
    fn sim_config_rejects_zero_tick_minutes() {
        let cfg = SimConfig { tick_minutes: 0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn sim_config_rejects_bad_weekend() {
        let cfg = SimConfig { weekend_days: [5, 7], ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, AgentId(0));
        let mut r2 = AgentRng::new(12345, AgentId(0));
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut r0 = AgentRng::new(1, AgentId(0));
        let mut r1 = AgentRng::new(1, AgentId(1));
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b, "seeds for adjacent agents should diverge");
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = AgentRng::new(0, AgentId(0));
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
        assert!(rng.gen_bool(7.0)); // clamped
    }

    #[test]
    fn discrete_gaussian_zero_scale_is_rounded_mean() {
        let mut rng = AgentRng::new(0, AgentId(0));
        assert_eq!(rng.discrete_gaussian(29.6, 0.0), 30);
        assert_eq!(rng.discrete_gaussian(-4.0, 0.0), 0);
    }

    #[test]
    fn discrete_gaussian_never_negative() {
        let mut rng = AgentRng::new(9, AgentId(3));
        let draws: Vec<u32> = (0..1_000).map(|_| rng.discrete_gaussian(1.0, 10.0)).collect();
        assert!(draws.iter().any(|&d| d == 0), "left tail should clamp to zero");
        let mean = draws.iter().map(|&d| d as f64).sum::<f64>() / draws.len() as f64;
        assert!(mean > 1.0, "clamping shifts the mean upwards, got {mean}");
    }
}

#[cfg(test)]
mod kind {
    use crate::LocationKind;

    #[test]
    fn parse_known_labels() {
        assert_eq!("store".parse::<LocationKind>().unwrap(), LocationKind::Store);
        assert_eq!("Parks".parse::<LocationKind>().unwrap(), LocationKind::Park);
        assert_eq!(" miscs ".parse::<LocationKind>().unwrap(), LocationKind::Misc);
        assert_eq!("household".parse::<LocationKind>().unwrap(), LocationKind::Household);
    }

    #[test]
    fn unknown_label_is_rejected() {
        assert!("casino".parse::<LocationKind>().is_err());
    }

    #[test]
    fn mobility_categories() {
        assert!(LocationKind::Store.is_mobility_category());
        assert!(LocationKind::Park.is_mobility_category());
        assert!(LocationKind::Misc.is_mobility_category());
        assert!(!LocationKind::Household.is_mobility_category());
        assert!(!LocationKind::Workplace.is_mobility_category());
    }

    #[test]
    fn only_households_skip_encounters() {
        for kind in LocationKind::ALL {
            assert_eq!(kind.logs_encounters(), kind != LocationKind::Household);
        }
    }
}

#[cfg(test)]
mod event {
    use crate::{AgentId, Event, EventKind, EventPayload, LocationId, Tick};

    #[test]
    fn kind_follows_payload() {
        let e = Event::new(AgentId(1), Tick(5), 0, EventPayload::Contamination { location: LocationId(2) });
        assert_eq!(e.kind(), EventKind::Contamination);
        assert_eq!(e.counterpart(), None);
    }

    #[test]
    fn encounter_counterpart() {
        let e = Event::new(
            AgentId(1),
            Tick(5),
            0,
            EventPayload::Encounter {
                other:            AgentId(4),
                duration_minutes: 12,
                distance_cm:      300,
                lat:              0.0,
                lon:              0.0,
            },
        );
        assert_eq!(e.kind().to_string(), "encounter");
        assert_eq!(e.counterpart(), Some(AgentId(4)));
    }
}
