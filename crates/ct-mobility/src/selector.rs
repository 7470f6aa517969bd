//! `MobilitySelector` — exploration/exploitation destination choice.
//!
//! With `S` the number of distinct locations of a category the agent has
//! already visited:
//!
//! ```text
//! p_explore = 1                  if S == 0
//!           = rho * S^(-gamma)   otherwise
//! ```
//!
//! A uniform draw below `p_explore` (and at least one unvisited location
//! left) explores: an unvisited location is drawn weighted by distance
//! preference.  Otherwise the agent exploits: a visited location is drawn
//! weighted by visit count.  The chosen location's counter is incremented
//! either way.

use log::trace;
use rand::distributions::{Distribution, WeightedIndex};

use ct_core::{AgentRng, LocationId, LocationKind};
use ct_world::LocationStore;

use crate::{MobilityError, MobilityResult, Preferences, VisitHistory, preferences};

// ── MobilityParams ────────────────────────────────────────────────────────────

/// Per-agent exploration parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MobilityParams {
    pub rho:   f64,
    pub gamma: f64,
}

impl Default for MobilityParams {
    fn default() -> Self {
        Self { rho: 0.3, gamma: 0.21 }
    }
}

impl MobilityParams {
    /// `1` for `s == 0`, else `rho * s^(-gamma)`.
    #[inline]
    pub fn exploration_probability(&self, s: usize) -> f64 {
        if s == 0 { 1.0 } else { self.rho * (s as f64).powf(-self.gamma) }
    }

    /// Whether a trip that already made `stops_taken` stops goes on to
    /// another one.  The first stop is always taken.
    pub fn continue_trip(&self, stops_taken: usize, rng: &mut AgentRng) -> bool {
        if stops_taken == 0 {
            return true;
        }
        let u: f64 = rng.random();
        u <= self.exploration_probability(stops_taken)
    }
}

// ── Selection ─────────────────────────────────────────────────────────────────

/// Result of one [`MobilitySelector::select`] call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub location: LocationId,
    /// `true` if the location was drawn from the unvisited pool.
    pub explored: bool,
}

// ── MobilitySelector ──────────────────────────────────────────────────────────

/// Chooses mobility destinations against one location set.
pub struct MobilitySelector<'w> {
    locations: &'w LocationStore,
}

impl<'w> MobilitySelector<'w> {
    pub fn new(locations: &'w LocationStore) -> Self {
        Self { locations }
    }

    /// Choose a `kind` destination for an agent currently at `current`.
    ///
    /// # Errors
    ///
    /// - [`MobilityError::NotAMobilityCategory`] for households and workplaces.
    /// - [`MobilityError::NoDestination`] when neither pool has a candidate.
    pub fn select(
        &self,
        kind:    LocationKind,
        current: LocationId,
        params:  MobilityParams,
        prefs:   &Preferences,
        history: &mut VisitHistory,
        rng:     &mut AgentRng,
    ) -> MobilityResult<Selection> {
        if !kind.is_mobility_category() {
            return Err(MobilityError::NotAMobilityCategory(kind));
        }

        let total = self.locations.ids_of(kind).len();
        let s = history.distinct(kind);
        let p_explore = params.exploration_probability(s);
        let r: f64 = rng.random();
        let wants_explore = r < p_explore && s != total;

        let explore_pool: Vec<(LocationId, f64)> =
            preferences::candidates(kind, prefs, current, self.locations)
                .into_iter()
                .filter(|&(id, _)| !history.has_visited(kind, id))
                .collect();
        let exploit_pool: Vec<(LocationId, f64)> =
            history.visited(kind).map(|(id, n)| (id, n as f64)).collect();

        let (pool, explored) = match (wants_explore, explore_pool.is_empty(), exploit_pool.is_empty()) {
            (true, false, _)     => (&explore_pool, true),
            (_, _, false)        => (&exploit_pool, false),
            (false, false, true) => (&explore_pool, true),
            _ => return Err(MobilityError::NoDestination(kind)),
        };

        let location = weighted_choice(pool, rng).ok_or(MobilityError::NoDestination(kind))?;
        history.record(kind, location);
        trace!(
            "{kind}: S={s} p_explore={p_explore:.3} r={r:.3} → {location} ({})",
            if explored { "explore" } else { "exploit" }
        );
        Ok(Selection { location, explored })
    }
}

/// Draw one id with probability proportional to its (normalized) score.
///
/// Negative or non-finite scores count as zero; if nothing positive remains
/// the draw is uniform.  `None` only for an empty pool.
pub fn weighted_choice(pool: &[(LocationId, f64)], rng: &mut AgentRng) -> Option<LocationId> {
    if pool.is_empty() {
        return None;
    }
    let clean = |w: f64| if w.is_finite() && w > 0.0 { w } else { 0.0 };
    let total: f64 = pool.iter().map(|&(_, w)| clean(w)).sum();
    if total > 0.0 && total.is_finite() {
        let normalized = pool.iter().map(|&(_, w)| clean(w) / total);
        if let Ok(dist) = WeightedIndex::new(normalized) {
            return Some(pool[dist.sample(rng.inner())].0);
        }
    }
    rng.choose(pool).map(|&(id, _)| id)
}
