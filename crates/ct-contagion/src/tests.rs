//! Unit tests for ct-contagion.

use ct_agent::{City, PopulationBuilder, ResidentSpec};
use ct_core::{AgentId, AgentRng, EventKind, EventPayload, GeoPoint, LocationId, LocationKind, SimClock, Tick};
use ct_world::{LocationSpec, LocationStore};

use crate::ContagionEngine;

// ── Helpers ───────────────────────────────────────────────────────────────────

struct Fixture {
    city:  City,
    home:  LocationId,
    cafe:  LocationId,
    clock: SimClock,
}

/// Three residents of one household; a cafe with contamination `p_cafe`
/// and a household with contamination `p_home`.  Clock at tick 10.
fn fixture(p_cafe: f64, p_home: f64) -> Fixture {
    let mut w = LocationStore::new();
    let home = w
        .add(LocationSpec::new("home", LocationKind::Household, GeoPoint::new(1.0, 2.0)).contamination(p_home))
        .unwrap();
    let job = w.add(LocationSpec::new("job", LocationKind::Workplace, GeoPoint::new(0.0, 0.0))).unwrap();
    let cafe = w
        .add(LocationSpec::new("cafe", LocationKind::Misc, GeoPoint::new(45.5, -73.6)).contamination(p_cafe))
        .unwrap();
    let (agents, _) = PopulationBuilder::new(0)
        .residents((0..3).map(|i| ResidentSpec::new(format!("r{i}"), home, job)))
        .build(&w)
        .unwrap();
    let mut clock = SimClock::new(0, 1);
    clock.advance_to(Tick(10));
    Fixture { city: City::new(w, agents), home, cafe, clock }
}

/// Put `agent` inside `loc` for `[start, until)`.
fn place(city: &mut City, agent: u32, loc: LocationId, start: u64, until: u64) {
    let a = AgentId(agent);
    city.agents.stay_start[a.index()] = Tick(start);
    city.agents.stay_until[a.index()] = Tick(until);
    city.agents.location[a.index()] = loc;
    city.locations.get_mut(loc).enter(a);
}

// ── Encounters ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod encounters {
    use super::*;

    #[test]
    fn logged_in_symmetric_pairs() {
        let mut f = fixture(0.0, 0.0);
        place(&mut f.city, 0, f.cafe, 0, 60);
        place(&mut f.city, 1, f.cafe, 10, 40);
        let mut rng = AgentRng::new(0, AgentId(1));
        let logged = ContagionEngine::new().on_enter(AgentId(1), f.cafe, &f.clock, &mut f.city, &mut rng);

        assert_eq!(logged.len(), 2);
        let a = f.city.agents.events_of(AgentId(0));
        let b = f.city.agents.events_of(AgentId(1));
        assert_eq!((a.len(), b.len()), (1, 1));
        assert_eq!(a[0].counterpart(), Some(AgentId(1)));
        assert_eq!(b[0].counterpart(), Some(AgentId(0)));
        assert_eq!(a[0].tick, b[0].tick);
        match (&a[0].payload, &b[0].payload) {
            (
                EventPayload::Encounter { duration_minutes: da, distance_cm: xa, lat, lon, .. },
                EventPayload::Encounter { duration_minutes: db, distance_cm: xb, .. },
            ) => {
                assert_eq!(*da, 30);
                assert_eq!(da, db);
                assert_eq!(xa, xb);
                assert!((50..1_000).contains(xa));
                assert_eq!((*lat, *lon), (45.5, -73.6));
            }
            other => panic!("expected encounters, got {other:?}"),
        }
    }

    #[test]
    fn one_pair_per_co_occupant() {
        let mut f = fixture(0.0, 0.0);
        place(&mut f.city, 0, f.cafe, 0, 60);
        place(&mut f.city, 1, f.cafe, 5, 60);
        place(&mut f.city, 2, f.cafe, 10, 20);
        let mut rng = AgentRng::new(0, AgentId(2));
        let logged = ContagionEngine::new().on_enter(AgentId(2), f.cafe, &f.clock, &mut f.city, &mut rng);
        assert_eq!(logged.len(), 4);
        assert_eq!(f.city.agents.events_of(AgentId(2)).len(), 2);
        assert!(logged.iter().all(|e| e.kind() == EventKind::Encounter));
    }

    #[test]
    fn households_log_no_encounters() {
        let mut f = fixture(0.0, 0.0);
        place(&mut f.city, 0, f.home, 0, 60);
        place(&mut f.city, 1, f.home, 10, 70);
        let mut rng = AgentRng::new(0, AgentId(1));
        let logged = ContagionEngine::new().on_enter(AgentId(1), f.home, &f.clock, &mut f.city, &mut rng);
        assert!(logged.is_empty());
        assert_eq!(f.city.agents.event_count(), 0);
    }
}

// ── Transmission ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod transmission {
    use super::*;

    #[test]
    fn no_draw_without_contagious_occupant() {
        let mut f = fixture(0.5, 0.5);
        place(&mut f.city, 0, f.home, 0, 60);
        place(&mut f.city, 1, f.home, 10, 70);
        let mut rng = AgentRng::new(3, AgentId(1));
        let mut untouched = AgentRng::new(3, AgentId(1));
        ContagionEngine::new().on_enter(AgentId(1), f.home, &f.clock, &mut f.city, &mut rng);

        assert_eq!(f.city.agents.infected_at(AgentId(1)), None);
        assert_eq!(f.city.agents.event_count(), 0);
        let a: u64 = rng.random();
        let b: u64 = untouched.random();
        assert_eq!(a, b, "no random draw may happen");
    }

    #[test]
    fn certain_contamination_infects_now() {
        let mut f = fixture(1.0, 0.0);
        f.city.agents.set_infected(AgentId(0), Tick(0));
        place(&mut f.city, 0, f.cafe, 0, 60);
        place(&mut f.city, 1, f.cafe, 10, 40);
        let mut rng = AgentRng::new(0, AgentId(1));
        let logged = ContagionEngine::new().on_enter(AgentId(1), f.cafe, &f.clock, &mut f.city, &mut rng);

        assert_eq!(f.city.agents.infected_at(AgentId(1)), Some(Tick(10)));
        let last = logged.last().unwrap();
        assert_eq!(last.agent, AgentId(1));
        assert_eq!(last.payload, EventPayload::Contamination { location: f.cafe });
    }

    #[test]
    fn households_transmit() {
        let mut f = fixture(0.0, 1.0);
        f.city.agents.set_infected(AgentId(0), Tick(0));
        place(&mut f.city, 0, f.home, 0, 60);
        place(&mut f.city, 1, f.home, 10, 70);
        let mut rng = AgentRng::new(0, AgentId(1));
        let logged = ContagionEngine::new().on_enter(AgentId(1), f.home, &f.clock, &mut f.city, &mut rng);
        assert_eq!(logged.len(), 1);
        assert_eq!(logged[0].kind(), EventKind::Contamination);
    }

    #[test]
    fn infection_tick_never_overwritten() {
        let mut f = fixture(1.0, 0.0);
        f.city.agents.set_infected(AgentId(0), Tick(0));
        f.city.agents.set_infected(AgentId(1), Tick(3));
        place(&mut f.city, 0, f.cafe, 0, 60);
        place(&mut f.city, 1, f.cafe, 10, 40);
        let mut rng = AgentRng::new(0, AgentId(1));
        let logged = ContagionEngine::new().on_enter(AgentId(1), f.cafe, &f.clock, &mut f.city, &mut rng);
        assert_eq!(f.city.agents.infected_at(AgentId(1)), Some(Tick(3)));
        assert!(logged.iter().all(|e| e.kind() == EventKind::Encounter));
    }
}
