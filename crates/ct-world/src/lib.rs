//! `ct-world` — shared locations and the capacity resource model.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`location`] | `SharedLocation`, `Capacity`, `Admission`                  |
//! | [`store`]    | `LocationStore`, `LocationSpec`                            |
//! | [`loader`]   | `load_locations_csv`, `load_locations_reader`              |
//! | [`error`]    | `WorldError`, `WorldResult<T>`                             |
//!
//! # Resource model (summary)
//!
//! ```text
//! request(a)  → Admitted            (slot free, or unbounded)
//!             → Queued              (full; a joins the FIFO wait queue)
//! release(a)  → Some(next waiter)   (slot handed over, resume it now)
//!             → None
//! ```
//!
//! The simulator is single-threaded, so none of this needs locking.

pub mod error;
pub mod loader;
pub mod location;
pub mod store;

#[cfg(test)]
mod tests;

pub use error::{WorldError, WorldResult};
pub use loader::{load_locations_csv, load_locations_reader};
pub use location::{Admission, Capacity, SharedLocation};
pub use store::{LocationSpec, LocationStore};
