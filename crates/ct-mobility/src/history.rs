//! `VisitHistory` — per-agent visit counters for each mobility category.

use std::collections::BTreeMap;

use ct_core::{LocationId, LocationKind};

/// Visit counts keyed by location, one map per mobility category.
///
/// `BTreeMap` keeps iteration in id order so exploit draws are reproducible.
#[derive(Clone, Debug, Default)]
pub struct VisitHistory {
    stores: BTreeMap<LocationId, u32>,
    parks:  BTreeMap<LocationId, u32>,
    miscs:  BTreeMap<LocationId, u32>,
}

impl VisitHistory {
    pub fn new() -> Self {
        Self::default()
    }

    fn map(&self, kind: LocationKind) -> Option<&BTreeMap<LocationId, u32>> {
        match kind {
            LocationKind::Store => Some(&self.stores),
            LocationKind::Park  => Some(&self.parks),
            LocationKind::Misc  => Some(&self.miscs),
            _ => None,
        }
    }

    fn map_mut(&mut self, kind: LocationKind) -> Option<&mut BTreeMap<LocationId, u32>> {
        match kind {
            LocationKind::Store => Some(&mut self.stores),
            LocationKind::Park  => Some(&mut self.parks),
            LocationKind::Misc  => Some(&mut self.miscs),
            _ => None,
        }
    }

    /// Number of distinct locations of `kind` visited at least once (S).
    pub fn distinct(&self, kind: LocationKind) -> usize {
        self.map(kind).map_or(0, BTreeMap::len)
    }

    /// Visits to `id` so far.
    pub fn count(&self, kind: LocationKind, id: LocationId) -> u32 {
        self.map(kind).and_then(|m| m.get(&id)).copied().unwrap_or(0)
    }

    pub fn has_visited(&self, kind: LocationKind, id: LocationId) -> bool {
        self.count(kind, id) > 0
    }

    /// Increment the counter for `id`.  Ignored for non-mobility kinds.
    pub fn record(&mut self, kind: LocationKind, id: LocationId) {
        if let Some(m) = self.map_mut(kind) {
            *m.entry(id).or_insert(0) += 1;
        }
    }

    /// `(location, count)` pairs of `kind`, in id order.
    pub fn visited(&self, kind: LocationKind) -> impl Iterator<Item = (LocationId, u32)> + '_ {
        self.map(kind).into_iter().flat_map(|m| m.iter().map(|(&id, &n)| (id, n)))
    }

    /// Sum of all counters of `kind`.
    pub fn total_visits(&self, kind: LocationKind) -> u64 {
        self.visited(kind).map(|(_, n)| n as u64).sum()
    }
}
