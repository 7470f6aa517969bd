//! Unit tests for ct-world.

use ct_core::{AgentId, GeoPoint, LocationKind};

use crate::{Capacity, LocationSpec, LocationStore};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn origin() -> GeoPoint {
    GeoPoint::new(0.0, 0.0)
}

/// A store with one household, one 1-slot store and one unbounded park.
fn small_world() -> LocationStore {
    let mut store = LocationStore::new();
    store.add(LocationSpec::new("home", LocationKind::Household, origin())).unwrap();
    store
        .add(
            LocationSpec::new("corner-shop", LocationKind::Store, origin())
                .capacity(Capacity::Limited(1))
                .contamination(0.5),
        )
        .unwrap();
    store.add(LocationSpec::new("green", LocationKind::Park, origin())).unwrap();
    store
}

// ── Capacity resource ─────────────────────────────────────────────────────────

#[cfg(test)]
mod capacity {
    use super::*;
    use crate::Admission;

    #[test]
    fn full_location_queues_second_requester() {
        let mut world = small_world();
        let shop = world.find("corner-shop").unwrap();
        let loc = world.get_mut(shop);

        assert_eq!(loc.request(AgentId(0)), Admission::Admitted);
        loc.enter(AgentId(0));
        assert_eq!(loc.request(AgentId(1)), Admission::Queued);
        assert!(loc.is_full());
        assert_eq!(loc.occupancy(), 1);
        assert_eq!(loc.waiting().collect::<Vec<_>>(), vec![AgentId(1)]);
    }

    #[test]
    fn release_hands_slot_to_longest_waiter() {
        let mut world = small_world();
        let shop = world.find("corner-shop").unwrap();
        let loc = world.get_mut(shop);

        loc.request(AgentId(0));
        loc.request(AgentId(1));
        loc.request(AgentId(2));

        loc.leave(AgentId(0));
        assert_eq!(loc.release(AgentId(0)), Some(AgentId(1)));
        assert!(loc.is_holder(AgentId(1)));
        // Handed a slot but not yet inside.
        assert_eq!(loc.occupancy(), 0);
        assert_eq!(loc.slots_in_use(), 1);

        assert_eq!(loc.release(AgentId(1)), Some(AgentId(2)));
        assert_eq!(loc.release(AgentId(2)), None);
        assert_eq!(loc.slots_in_use(), 0);
    }

    #[test]
    fn unbounded_never_blocks() {
        let mut world = small_world();
        let park = world.find("green").unwrap();
        let loc = world.get_mut(park);
        for i in 0..1_000 {
            assert_eq!(loc.request(AgentId(i)), Admission::Admitted);
            loc.enter(AgentId(i));
        }
        assert_eq!(loc.occupancy(), 1_000);
        assert_eq!(loc.waiting().len(), 0);
        assert!(!loc.is_full());
    }

    #[test]
    fn enter_is_idempotent_and_leave_removes() {
        let mut world = small_world();
        let park = world.find("green").unwrap();
        let loc = world.get_mut(park);
        loc.enter(AgentId(3));
        loc.enter(AgentId(3));
        assert_eq!(loc.occupants(), &[AgentId(3)]);
        loc.leave(AgentId(3));
        assert!(loc.occupants().is_empty());
    }

    #[test]
    fn capacity_helpers() {
        assert!(!Capacity::Unbounded.is_exhausted(usize::MAX));
        assert!(Capacity::Limited(2).is_exhausted(2));
        assert!(!Capacity::Limited(2).is_exhausted(1));
        assert_eq!(Capacity::Limited(7).limit(), Some(7));
        assert_eq!(Capacity::Unbounded.limit(), None);
    }
}

// ── Contamination probability ─────────────────────────────────────────────────

#[cfg(test)]
mod contamination {
    use super::*;

    #[test]
    fn zero_without_contagious_occupant() {
        let mut world = small_world();
        let shop = world.find("corner-shop").unwrap();
        let loc = world.get_mut(shop);
        loc.enter(AgentId(0));
        assert_eq!(loc.contamination_probability_for(AgentId(1), |_| false), 0.0);
    }

    #[test]
    fn configured_value_with_contagious_occupant() {
        let mut world = small_world();
        let shop = world.find("corner-shop").unwrap();
        let loc = world.get_mut(shop);
        loc.enter(AgentId(0));
        loc.enter(AgentId(1));
        let p = loc.contamination_probability_for(AgentId(1), |a| a == AgentId(0));
        assert_eq!(p, 0.5);
    }

    #[test]
    fn asking_agent_does_not_expose_itself() {
        let mut world = small_world();
        let shop = world.find("corner-shop").unwrap();
        let loc = world.get_mut(shop);
        loc.enter(AgentId(0));
        assert_eq!(loc.contamination_probability_for(AgentId(0), |_| true), 0.0);
    }
}

// ── LocationStore ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod store {
    use super::*;
    use crate::WorldError;

    #[test]
    fn ids_are_dense_and_grouped_by_kind() {
        let world = small_world();
        assert_eq!(world.len(), 3);
        assert_eq!(world.ids_of(LocationKind::Store).len(), 1);
        assert_eq!(world.ids_of(LocationKind::Workplace).len(), 0);
        let park = world.ids_of(LocationKind::Park)[0];
        assert_eq!(world.get(park).name, "green");
        assert_eq!(park.index(), 2);
    }

    #[test]
    fn households_are_forced_unbounded() {
        let mut world = LocationStore::new();
        let id = world
            .add(
                LocationSpec::new("flat", LocationKind::Household, origin())
                    .capacity(Capacity::Limited(2)),
            )
            .unwrap();
        assert_eq!(world.get(id).capacity, Capacity::Unbounded);
    }

    #[test]
    fn duplicate_name_rejected() {
        let mut world = small_world();
        let err = world.add(LocationSpec::new("green", LocationKind::Misc, origin()));
        assert!(matches!(err, Err(WorldError::DuplicateName(n)) if n == "green"));
    }

    #[test]
    fn out_of_range_probability_rejected() {
        let mut world = LocationStore::new();
        let err = world.add(
            LocationSpec::new("bar", LocationKind::Misc, origin()).contamination(1.5),
        );
        assert!(matches!(err, Err(WorldError::InvalidProbability { .. })));
    }

    #[test]
    fn zero_capacity_rejected() {
        let mut world = LocationStore::new();
        let err = world.add(
            LocationSpec::new("closet", LocationKind::Store, origin())
                .capacity(Capacity::Limited(0)),
        );
        assert!(matches!(err, Err(WorldError::ZeroCapacity(_))));
    }

    #[test]
    fn try_get_unknown_id() {
        let world = small_world();
        assert!(world.try_get(ct_core::LocationId(99)).is_err());
        assert!(world.try_get(ct_core::LocationId(0)).is_ok());
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::{Cursor, Write};

    use super::*;
    use crate::{load_locations_csv, load_locations_reader};

    const CSV: &str = "\
name,kind,lat,lon,capacity,contamination_probability
house-0,household,45.501,-73.567,,0.1
acme,workplace,45.510,-73.560,200,0.02
safeway,stores,45.505,-73.570,25,0.05
mount-royal,park,45.507,-73.587,inf,0.0
";

    #[test]
    fn parses_all_rows() {
        let world = load_locations_reader(Cursor::new(CSV)).unwrap();
        assert_eq!(world.len(), 4);
        let shop = world.find("safeway").unwrap();
        assert_eq!(world.get(shop).kind, LocationKind::Store);
        assert_eq!(world.get(shop).capacity, Capacity::Limited(25));
        let park = world.find("mount-royal").unwrap();
        assert_eq!(world.get(park).capacity, Capacity::Unbounded);
    }

    #[test]
    fn unknown_kind_fails() {
        let csv = "name,kind,lat,lon,capacity,contamination_probability\nx,casino,0,0,,0\n";
        assert!(load_locations_reader(Cursor::new(csv)).is_err());
    }

    #[test]
    fn bad_capacity_fails() {
        let csv = "name,kind,lat,lon,capacity,contamination_probability\nx,store,0,0,lots,0\n";
        assert!(load_locations_reader(Cursor::new(csv)).is_err());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(CSV.as_bytes()).expect("write csv");
        let world = load_locations_csv(file.path()).unwrap();
        assert_eq!(world.ids_of(LocationKind::Household).len(), 1);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_locations_csv(std::path::Path::new("/nonexistent/locations.csv"));
        assert!(matches!(err, Err(crate::WorldError::Io(_))));
    }
}
