//! The `BehaviorModel` trait — the main extension point for user code.

use ct_core::{AgentId, AgentRng};

use crate::{Decision, DecisionContext};

/// Pluggable agent behavior.
///
/// `decide` is called each time an agent finishes its home stay.  It reads
/// state through the [`DecisionContext`] and draws from the agent's own
/// [`AgentRng`]; the simulator carries the decision out.
///
/// State that varies per agent must live in `AgentStore`, not in the model.
///
/// # Example
///
/// ```rust,ignore
/// struct AlwaysShop;
///
/// impl BehaviorModel for AlwaysShop {
///     fn decide(&self, agent: AgentId, ctx: &DecisionContext<'_>, rng: &mut AgentRng) -> Decision {
///         let minutes = ctx.agents.habits[agent.index()].shopping.sample(rng) as u64;
///         Decision::Shop { minutes }
///     }
/// }
/// ```
pub trait BehaviorModel: Send + Sync + 'static {
    fn decide(&self, agent: AgentId, ctx: &DecisionContext<'_>, rng: &mut AgentRng) -> Decision;
}

/// Test an agent whose infection is older than the incubation period.
///
/// Shared by every model: testing overrides any routine.
pub fn test_due(agent: AgentId, ctx: &DecisionContext<'_>, rng: &mut AgentRng) -> Option<Decision> {
    if !ctx.config.test_after_incubation || !ctx.infected_longer_than(agent, ctx.config.incubation_days) {
        return None;
    }
    Some(Decision::Test { positive: rng.gen_bool(ctx.config.test_positive_probability) })
}

/// Symptom onset is reported once, the first free hour past the symptom
/// delay.
pub fn symptoms_due(agent: AgentId, ctx: &DecisionContext<'_>) -> bool {
    !ctx.agents.symptoms_logged[agent.index()]
        && ctx.infected_longer_than(agent, ctx.config.symptom_days)
}
