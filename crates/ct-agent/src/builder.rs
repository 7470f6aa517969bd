//! Population assembly: residents in, `AgentStore` + `AgentRngs` out.
//!
//! # Usage
//!
//! ```ignore
//! let (agents, rngs) = PopulationBuilder::new(/*seed=*/ 42)
//!     .habits(HabitConfig::default())
//!     .resident(ResidentSpec::new("alice", home, office))
//!     .resident(ResidentSpec::new("bob", home, office).infected_at(Tick(0)))
//!     .build(&locations)?;
//! ```
//!
//! Every per-agent draw (habits, severity flags) comes from that agent's own
//! `AgentRng`, so adding a resident never changes anyone else's habits.

use log::info;

use ct_core::{AgentId, LocationId, LocationKind, Tick};
use ct_mobility::Preferences;
use ct_world::LocationStore;

use crate::{AgentError, AgentResult, AgentRngs, AgentStore, HabitConfig, Habits};

/// Input description of one resident.
#[derive(Clone, Debug, PartialEq)]
pub struct ResidentSpec {
    pub name:        String,
    pub household:   LocationId,
    pub workplace:   LocationId,
    /// Infection tick for initially infected residents.  Only
    /// `Tick::ZERO` is accepted: seeded infections start with the run.
    pub infected_at: Option<Tick>,
}

impl ResidentSpec {
    pub fn new(name: impl Into<String>, household: LocationId, workplace: LocationId) -> Self {
        Self { name: name.into(), household, workplace, infected_at: None }
    }

    pub fn infected_at(mut self, tick: Tick) -> Self {
        self.infected_at = Some(tick);
        self
    }
}

/// Fluent builder for [`AgentStore`] + [`AgentRngs`].
pub struct PopulationBuilder {
    seed:      u64,
    habits:    HabitConfig,
    residents: Vec<ResidentSpec>,
}

impl PopulationBuilder {
    /// `seed` is the global RNG seed; it must match the simulation's seed for
    /// a run to be reproducible.
    pub fn new(seed: u64) -> Self {
        Self { seed, habits: HabitConfig::default(), residents: Vec::new() }
    }

    pub fn habits(mut self, habits: HabitConfig) -> Self {
        self.habits = habits;
        self
    }

    pub fn resident(mut self, spec: ResidentSpec) -> Self {
        self.residents.push(spec);
        self
    }

    pub fn residents(mut self, specs: impl IntoIterator<Item = ResidentSpec>) -> Self {
        self.residents.extend(specs);
        self
    }

    /// Validate every resident against `locations` and draw per-agent state.
    ///
    /// # Errors
    ///
    /// - [`AgentError::Config`] for invalid habit parameters, or a resident
    ///   seeded with an infection tick after `Tick::ZERO`.
    /// - [`AgentError::World`] for ids not in `locations`.
    /// - [`AgentError::WrongKind`] if a household is not a household or a
    ///   workplace is not a workplace.
    pub fn build(self, locations: &LocationStore) -> AgentResult<(AgentStore, AgentRngs)> {
        self.habits.validate()?;
        let n = self.residents.len();
        AgentId::try_from(n).map_err(|_| AgentError::Config(format!("{n} residents exceed the id space")))?;

        let mut rngs = AgentRngs::new(n, self.seed);

        let mut name = Vec::with_capacity(n);
        let mut home = Vec::with_capacity(n);
        let mut work = Vec::with_capacity(n);
        let mut infected_at = Vec::with_capacity(n);
        let mut severe = Vec::with_capacity(n);
        let mut never_recovers = Vec::with_capacity(n);
        let mut habits = Vec::with_capacity(n);
        let mut mobility = Vec::with_capacity(n);
        let mut prefs = Vec::with_capacity(n);

        for (i, spec) in self.residents.into_iter().enumerate() {
            expect_kind(&spec.name, spec.household, LocationKind::Household, locations)?;
            expect_kind(&spec.name, spec.workplace, LocationKind::Workplace, locations)?;
            if let Some(tick) = spec.infected_at.filter(|&t| t != Tick::ZERO) {
                return Err(AgentError::Config(format!(
                    "resident {:?}: infected_at {tick} is in the future; only tick 0 can be seeded",
                    spec.name
                )));
            }

            let rng = &mut rngs.inner[i];
            severe.push(rng.gen_bool(self.habits.severe_probability));
            never_recovers.push(rng.gen_bool(self.habits.never_recovers_probability));
            habits.push(Habits::draw(&self.habits, rng));
            mobility.push(self.habits.mobility);
            prefs.push(Preferences::from_home(locations.get(spec.household).point, locations));

            name.push(spec.name);
            home.push(spec.household);
            work.push(spec.workplace);
            infected_at.push(spec.infected_at);
        }

        let store = AgentStore::new(
            name, home, work, infected_at, severe, never_recovers, habits, mobility, prefs,
        );
        info!(
            "assembled {} agents ({} initially infected)",
            store.count,
            store.infected_count()
        );
        Ok((store, rngs))
    }
}

fn expect_kind(
    resident:  &str,
    id:        LocationId,
    expected:  LocationKind,
    locations: &LocationStore,
) -> AgentResult<()> {
    let found = locations.try_get(id)?.kind;
    if found != expected {
        return Err(AgentError::WrongKind {
            resident: resident.to_owned(),
            location: id,
            expected,
            found,
        });
    }
    Ok(())
}
