//! Fluent builder for constructing a [`Sim`].

use ct_agent::{AgentRngs, City};
use ct_behavior::{BehaviorConfig, BehaviorModel};
use ct_contagion::ContagionEngine;
use ct_core::SimConfig;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<B>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — tick length, horizon, seed, weekend days
/// - [`City`] + [`AgentRngs`] — from [`ct_agent::PopulationBuilder`]
/// - `B: BehaviorModel` — e.g. [`ct_behavior::HumanBehavior`]
///
/// # Optional inputs (have defaults)
///
/// | Method                  | Default                        |
/// |-------------------------|--------------------------------|
/// | `.behavior_config(c)`   | `BehaviorConfig::default()`    |
/// | `.contagion(e)`         | `ContagionEngine::default()`   |
///
/// # Example
///
/// ```rust,ignore
/// let (agents, rngs) = PopulationBuilder::new(seed).residents(specs).build(&locations)?;
/// let mut sim = SimBuilder::new(config, City::new(locations, agents), rngs, HumanBehavior)
///     .behavior_config(behavior_config)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<B: BehaviorModel> {
    config:          SimConfig,
    city:            City,
    rngs:            AgentRngs,
    behavior:        B,
    behavior_config: Option<BehaviorConfig>,
    contagion:       Option<ContagionEngine>,
}

impl<B: BehaviorModel> SimBuilder<B> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, city: City, rngs: AgentRngs, behavior: B) -> Self {
        Self {
            config,
            city,
            rngs,
            behavior,
            behavior_config: None,
            contagion:       None,
        }
    }

    /// Disease timeline and routine parameters.
    pub fn behavior_config(mut self, config: BehaviorConfig) -> Self {
        self.behavior_config = Some(config);
        self
    }

    /// Replace the contagion engine (e.g. to change the encounter distance
    /// range).
    pub fn contagion(mut self, engine: ContagionEngine) -> Self {
        self.contagion = Some(engine);
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`] with every agent
    /// scheduled to make its first decision at tick 0.
    pub fn build(self) -> SimResult<Sim<B>> {
        self.config.validate()?;
        let behavior_config = self.behavior_config.unwrap_or_default();
        behavior_config.validate()?;

        let agent_count = self.city.agents.count;
        if self.rngs.len() != agent_count {
            return Err(SimError::AgentCountMismatch {
                expected: agent_count,
                got:      self.rngs.len(),
                what:     "agent RNGs",
            });
        }

        let contagion = self.contagion.unwrap_or_default();
        if contagion.distance_cm.is_empty() {
            return Err(SimError::Config(format!(
                "encounter distance range {:?} is empty",
                contagion.distance_cm
            )));
        }

        Ok(Sim::new(
            self.config,
            behavior_config,
            self.city,
            self.rngs,
            self.behavior,
            contagion,
        ))
    }
}
