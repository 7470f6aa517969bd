//! `ct-agent` — Structure-of-Arrays agent storage for `rust_contagion`.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`store`]    | `AgentStore` (SoA arrays + event logs), `AgentRngs`         |
//! | [`habits`]   | `HabitConfig`, `HabitParams`, per-agent `Habits`            |
//! | [`activity`] | `Activity` behavior state                                   |
//! | [`builder`]  | `PopulationBuilder`, `ResidentSpec`                         |
//! | [`loader`]   | `load_residents_csv`, `load_residents_reader`               |
//! | [`city`]     | `City` (locations + agents)                                 |
//! | [`error`]    | `AgentError`, `AgentResult<T>`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                         |
//! |---------|----------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `HabitConfig`, `Activity`. |

pub mod activity;
pub mod builder;
pub mod city;
pub mod error;
pub mod habits;
pub mod loader;
pub mod store;


pub use activity::Activity;
pub use builder::{PopulationBuilder, ResidentSpec};
pub use city::City;
pub use error::{AgentError, AgentResult};
pub use habits::{Habit, HabitConfig, HabitParams, Habits};
pub use loader::{load_residents_csv, load_residents_reader};
pub use store::{AgentRngs, AgentStore};
