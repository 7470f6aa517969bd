//! `ct-core` — foundational types for the `rust_contagion` simulator.
//!
//! This crate is a dependency of every other `ct-*` crate.  It intentionally
//! has no `ct-*` dependencies and minimal external ones (`rand`,
//! `rand_distr` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `LocationId`                               |
//! | [`geo`]         | `GeoPoint`, planar degree-space distance              |
//! | [`time`]        | `Tick`, `SimClock`, `Calendar`, `SimConfig`           |
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (global)             |
//! | [`kind`]        | `LocationKind` closed category enum                   |
//! | [`event`]       | `Event`, `EventKind`, `EventPayload`                  |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod event;
pub mod geo;
pub mod ids;
pub mod kind;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use event::{Event, EventKind, EventPayload};
pub use geo::GeoPoint;
pub use ids::{AgentId, LocationId};
pub use kind::LocationKind;
pub use rng::{AgentRng, SimRng};
pub use time::{Calendar, SimClock, SimConfig, Tick};
