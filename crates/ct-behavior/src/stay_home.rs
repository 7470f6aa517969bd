//! `StayHomeBehavior` — strict lockdown.

use ct_core::{AgentId, AgentRng};

use crate::model::test_due;
use crate::{BehaviorModel, Decision, DecisionContext};

/// Agents never leave their household.  Testing still happens, so infected
/// agents are removed as under [`HumanBehavior`][crate::HumanBehavior].
pub struct StayHomeBehavior;

impl BehaviorModel for StayHomeBehavior {
    fn decide(&self, agent: AgentId, ctx: &DecisionContext<'_>, rng: &mut AgentRng) -> Decision {
        test_due(agent, ctx, rng).unwrap_or(Decision::StayHome)
    }
}
