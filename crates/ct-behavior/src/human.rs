//! `HumanBehavior` — the daily routine of a working adult.

use ct_core::{AgentId, AgentRng};

use crate::model::{symptoms_due, test_due};
use crate::{BehaviorModel, Decision, DecisionContext};

/// First matching rule wins:
///
/// | # | Condition                                            | Decision       |
/// |---|------------------------------------------------------|----------------|
/// | 1 | infected longer than the incubation period           | `Test`         |
/// | 2 | work-start hour on a weekday, not working from home  | `Work`         |
/// | 3 | shopping slot                                        | `Shop`         |
/// | 4 | exercise slot                                        | `Exercise`     |
/// | 5 | weekend and the trip draw fires                      | `Trip`         |
/// | 6 | past the symptom delay, not yet reported             | `SymptomOnset` |
/// | 7 | otherwise                                            | `StayHome`     |
///
/// Rules 3–5 are skipped while the agent is too sick to go out.
pub struct HumanBehavior;

impl BehaviorModel for HumanBehavior {
    fn decide(&self, agent: AgentId, ctx: &DecisionContext<'_>, rng: &mut AgentRng) -> Decision {
        if let Some(test) = test_due(agent, ctx, rng) {
            return test;
        }

        let habits = &ctx.agents.habits[agent.index()];
        let cal = &ctx.calendar;

        if cal.hour == habits.work_start_hour && !ctx.is_weekend() && !ctx.config.work_from_home {
            return Decision::Work { minutes: habits.sample_work_minutes(rng) };
        }

        if !ctx.too_sick_to_go_out(agent) {
            if habits.shopping_slot.matches(cal) {
                return Decision::Shop { minutes: habits.shopping.sample(rng) as u64 };
            }
            if habits.exercise_slot.matches(cal) {
                return Decision::Exercise { minutes: habits.exercise.sample(rng) as u64 };
            }
            if ctx.is_weekend() && rng.gen_bool(ctx.config.weekend_trip_probability) {
                return Decision::Trip;
            }
        }

        if symptoms_due(agent, ctx) {
            return Decision::SymptomOnset;
        }
        Decision::StayHome
    }
}
