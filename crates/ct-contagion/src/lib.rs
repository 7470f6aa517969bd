//! `ct-contagion` — what happens when an agent walks into a location.
//!
//! # Crate layout
//!
//! | Module     | Contents                                            |
//! |------------|-----------------------------------------------------|
//! | [`engine`] | `ContagionEngine` — encounters + transmission       |
//!
//! # Entry model (summary)
//!
//! ```text
//! on_enter(a, loc):
//!   unless loc is a household:
//!     for every other occupant b: log encounter(a, b) and encounter(b, a)
//!   if a is healthy:
//!     p = loc.contamination_probability (0 unless someone contagious is in)
//!     if p > 0 and draw < p: infect a now, log contamination
//! ```
//!
//! Evaluated exactly once per location entry.

pub mod engine;

#[cfg(test)]
mod tests;

pub use engine::ContagionEngine;
