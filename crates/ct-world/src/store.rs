//! `LocationStore` — every shared location, indexed by id, kind and name.

use rustc_hash::FxHashMap;

use ct_core::{GeoPoint, LocationId, LocationKind};

use crate::{Capacity, SharedLocation, WorldError, WorldResult};

/// Input description of one location, validated by [`LocationStore::add`].
#[derive(Clone, Debug)]
pub struct LocationSpec {
    pub name:                      String,
    pub kind:                      LocationKind,
    pub point:                     GeoPoint,
    pub capacity:                  Capacity,
    pub contamination_probability: f64,
}

impl LocationSpec {
    /// An unbounded location with zero contamination probability.
    pub fn new(name: impl Into<String>, kind: LocationKind, point: GeoPoint) -> Self {
        Self {
            name: name.into(),
            kind,
            point,
            capacity: Capacity::Unbounded,
            contamination_probability: 0.0,
        }
    }

    pub fn capacity(mut self, capacity: Capacity) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn contamination(mut self, probability: f64) -> Self {
        self.contamination_probability = probability;
        self
    }
}

/// Owns all [`SharedLocation`]s.  `LocationId`s are dense indices in
/// insertion order.
#[derive(Clone, Default)]
pub struct LocationStore {
    locations: Vec<SharedLocation>,
    /// Per-kind id lists in insertion order, indexed by `LocationKind::index`.
    by_kind:   [Vec<LocationId>; 5],
    by_name:   FxHashMap<String, LocationId>,
}

impl LocationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `spec` and append it.
    ///
    /// Households are always unbounded: whatever capacity the spec carries is
    /// ignored for them.
    pub fn add(&mut self, spec: LocationSpec) -> WorldResult<LocationId> {
        if self.by_name.contains_key(&spec.name) {
            return Err(WorldError::DuplicateName(spec.name));
        }
        let p = spec.contamination_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(WorldError::InvalidProbability { name: spec.name, value: p });
        }
        let capacity = match (spec.kind, spec.capacity) {
            (LocationKind::Household, _) => Capacity::Unbounded,
            (_, Capacity::Limited(0))    => return Err(WorldError::ZeroCapacity(spec.name)),
            (_, c)                       => c,
        };

        let id = LocationId::try_from(self.locations.len())
            .map_err(|_| WorldError::Parse("too many locations".into()))?;
        self.by_kind[spec.kind.index()].push(id);
        self.by_name.insert(spec.name.clone(), id);
        self.locations.push(SharedLocation::new(id, spec.name, spec.kind, spec.point, capacity, p));
        Ok(id)
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    #[inline]
    pub fn get(&self, id: LocationId) -> &SharedLocation {
        &self.locations[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: LocationId) -> &mut SharedLocation {
        &mut self.locations[id.index()]
    }

    /// Checked lookup for ids that come from outside the store.
    pub fn try_get(&self, id: LocationId) -> WorldResult<&SharedLocation> {
        self.locations.get(id.index()).ok_or(WorldError::LocationNotFound(id))
    }

    /// Resolve a location by name.
    pub fn find(&self, name: &str) -> Option<LocationId> {
        self.by_name.get(name).copied()
    }

    /// All ids of one category, in insertion order.
    pub fn ids_of(&self, kind: LocationKind) -> &[LocationId] {
        &self.by_kind[kind.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &SharedLocation> {
        self.locations.iter()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}
