//! Synthetic town used when no CSV inputs are given.
//!
//! A few blocks of a Montréal-like neighbourhood: households on a jittered
//! grid, three residents per household, and a handful of workplaces, stores,
//! parks and misc venues with tight enough capacities that queues form at
//! peak hours.

use anyhow::Result;

use ct_agent::ResidentSpec;
use ct_core::{GeoPoint, LocationId, LocationKind, SimRng, Tick};
use ct_world::{Capacity, LocationSpec, LocationStore};

const CENTRE_LAT:     f64   = 45.508;
const CENTRE_LON:     f64   = -73.587;
/// Half-width of the neighbourhood, in degrees.
const SPAN:           f64   = 0.02;
const PER_HOUSEHOLD:  usize = 3;

/// `(kind, count, capacity, contamination probability)` for the shared
/// venues.
const VENUES: [(LocationKind, usize, u32, f64); 4] = [
    (LocationKind::Workplace, 4, 40, 0.01),
    (LocationKind::Store,     3, 4,  0.03),
    (LocationKind::Park,      2, 15, 0.005),
    (LocationKind::Misc,      5, 6,  0.02),
];

fn jittered(rng: &mut SimRng) -> GeoPoint {
    GeoPoint::new(
        CENTRE_LAT + rng.gen_range(-SPAN..SPAN),
        CENTRE_LON + rng.gen_range(-SPAN..SPAN),
    )
}

/// Build the town's locations and `population` residents.  The first
/// `infected` residents are infected at tick 0.
pub fn build_town(
    population: usize,
    infected:   usize,
    rng:        &mut SimRng,
) -> Result<(LocationStore, Vec<ResidentSpec>)> {
    let mut locations = LocationStore::new();

    let household_count = population.div_ceil(PER_HOUSEHOLD).max(1);
    let side = (household_count as f64).sqrt().ceil() as usize;
    let mut households = Vec::with_capacity(household_count);
    for h in 0..household_count {
        let (row, col) = (h / side, h % side);
        let point = GeoPoint::new(
            CENTRE_LAT - SPAN + 2.0 * SPAN * (row as f64 + rng.gen_range(0.2..0.8)) / side as f64,
            CENTRE_LON - SPAN + 2.0 * SPAN * (col as f64 + rng.gen_range(0.2..0.8)) / side as f64,
        );
        households.push(locations.add(LocationSpec::new(format!("house-{h}"), LocationKind::Household, point))?);
    }

    let mut workplaces: Vec<LocationId> = Vec::new();
    for (kind, count, capacity, contamination) in VENUES {
        for i in 0..count {
            let spec = LocationSpec::new(format!("{kind}-{i}"), kind, jittered(rng))
                .capacity(Capacity::Limited(capacity))
                .contamination(contamination);
            let id = locations.add(spec)?;
            if kind == LocationKind::Workplace {
                workplaces.push(id);
            }
        }
    }

    let residents = (0..population)
        .map(|i| {
            let workplace = workplaces[rng.gen_range(0..workplaces.len())];
            let spec = ResidentSpec::new(format!("resident-{i}"), households[i / PER_HOUSEHOLD], workplace);
            if i < infected { spec.infected_at(Tick::ZERO) } else { spec }
        })
        .collect();

    Ok((locations, residents))
}
