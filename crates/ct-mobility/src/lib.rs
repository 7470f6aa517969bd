//! `ct-mobility` — where agents go when they leave home.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                      |
//! |-----------------|---------------------------------------------------------------|
//! | [`preferences`] | `Preferences`, `preference_weight`, misc candidate weighting  |
//! | [`history`]     | `VisitHistory` — per-agent visit counters per category        |
//! | [`selector`]    | `MobilitySelector`, `MobilityParams`, `Selection`             |
//! | [`error`]       | `MobilityError`, `MobilityResult<T>`                          |
//!
//! # Ownership
//!
//! `Preferences` and `VisitHistory` are per-agent values stored in the agent
//! SoA arrays.  The selector only borrows the location set; it holds no
//! per-agent state of its own.

pub mod error;
pub mod history;
pub mod preferences;
pub mod selector;


pub use error::{MobilityError, MobilityResult};
pub use history::VisitHistory;
pub use preferences::{Preferences, preference_weight};
pub use selector::{MobilityParams, MobilitySelector, Selection, weighted_choice};
