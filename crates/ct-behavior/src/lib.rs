//! `ct-behavior` — agent decision model trait and decision types.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                          |
//! |---------------|-------------------------------------------------------------------|
//! | [`decision`]  | `Decision` enum (`Test`, `Work`, `Shop`, `Exercise`, `Trip`, ...) |
//! | [`context`]   | `DecisionContext<'a>`: read-only snapshot for one decision        |
//! | [`config`]    | `BehaviorConfig`: disease timeline and routine parameters         |
//! | [`model`]     | `BehaviorModel` trait, shared testing/symptom rules               |
//! | [`human`]     | `HumanBehavior`: work, shop, exercise, weekend trips              |
//! | [`stay_home`] | `StayHomeBehavior`: lockdown, only tests                          |
//! | [`error`]     | `BehaviorError`, `BehaviorResult<T>`                              |
//!
//! # Decision points
//!
//! A model is asked for a [`Decision`] each time an agent finishes its home
//! stay.  ct-sim carries the decision out (requests the location, stays,
//! logs events) and then puts the agent back home for
//! `BehaviorConfig::home_stay_minutes` before the next decision.

pub mod config;
pub mod context;
pub mod decision;
pub mod error;
pub mod human;
pub mod model;
pub mod stay_home;

#[cfg(test)]
mod tests;

pub use ct_agent::Activity;

pub use config::BehaviorConfig;
pub use context::DecisionContext;
pub use decision::Decision;
pub use error::{BehaviorError, BehaviorResult};
pub use human::HumanBehavior;
pub use model::BehaviorModel;
pub use stay_home::StayHomeBehavior;
