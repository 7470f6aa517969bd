//! Inverse-distance preference weights.

use ct_core::{GeoPoint, LocationId, LocationKind};
use ct_world::LocationStore;

/// Added to every distance so a location at zero distance gets a finite
/// weight.
const DISTANCE_OFFSET: f64 = 0.1;

/// `1 / (d + 0.1)` with `d` the planar distance in degrees.
#[inline]
pub fn preference_weight(from: GeoPoint, to: GeoPoint) -> f64 {
    1.0 / (from.planar_distance(to) + DISTANCE_OFFSET)
}

/// Per-agent preference weights against every store and every park,
/// computed once from the agent's home.
///
/// Each vector is parallel to `LocationStore::ids_of(kind)`.  Misc venues
/// are not cached: their weights depend on where the agent currently is
/// (see [`misc_candidates`]).
#[derive(Clone, Debug, Default)]
pub struct Preferences {
    stores: Vec<f64>,
    parks:  Vec<f64>,
}

impl Preferences {
    pub fn from_home(home: GeoPoint, locations: &LocationStore) -> Self {
        let weights = |kind| -> Vec<f64> {
            locations
                .ids_of(kind)
                .iter()
                .map(|&id| preference_weight(home, locations.get(id).point))
                .collect()
        };
        Self {
            stores: weights(LocationKind::Store),
            parks:  weights(LocationKind::Park),
        }
    }

    /// Cached weights for `kind`, parallel to `ids_of(kind)`.  Empty for
    /// kinds that are not cached.
    pub fn weights(&self, kind: LocationKind) -> &[f64] {
        match kind {
            LocationKind::Store => &self.stores,
            LocationKind::Park  => &self.parks,
            _ => &[],
        }
    }
}

/// Candidate `(location, weight)` pairs for `kind`.
///
/// Stores and parks use the agent's cached home-based weights.  Misc venues
/// are weighted from `current` and exclude it.
pub fn candidates(
    kind:      LocationKind,
    prefs:     &Preferences,
    current:   LocationId,
    locations: &LocationStore,
) -> Vec<(LocationId, f64)> {
    match kind {
        LocationKind::Misc => misc_candidates(current, locations),
        _ => locations
            .ids_of(kind)
            .iter()
            .copied()
            .zip(prefs.weights(kind).iter().copied())
            .collect(),
    }
}

/// Misc venues weighted by distance from `current`, excluding `current`.
pub fn misc_candidates(current: LocationId, locations: &LocationStore) -> Vec<(LocationId, f64)> {
    let here = match locations.try_get(current) {
        Ok(loc) => loc.point,
        Err(_)  => return Vec::new(),
    };
    locations
        .ids_of(LocationKind::Misc)
        .iter()
        .filter(|&&id| id != current)
        .map(|&id| (id, preference_weight(here, locations.get(id).point)))
        .collect()
}
