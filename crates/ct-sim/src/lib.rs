//! `ct-sim` — cooperative discrete-event scheduler for the rust_contagion
//! simulator.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`sim`]      | `Sim<B>` — wake queue, process resumption, the run loop   |
//! | [`builder`]  | `SimBuilder<B>` — validation and initial scheduling       |
//! | [`process`]  | `Process`, `Stay`, `Leg` — per-agent suspension state     |
//! | [`observer`] | `SimObserver` callbacks, `NoopObserver`                   |
//! | [`error`]    | `SimError`, `SimResult<T>`                                |
//!
//! # Agent process
//!
//! ```text
//! Ready ── decide ──► request slot at destination
//!                       ├─ admitted ─► Staying{loc, stay}  (woken at stay end)
//!                       └─ full     ─► Waiting{loc, stay}  (woken by release)
//! Staying ── stay over ──► leave + release (first waiter woken at now)
//!                           ├─ home leg      ─► Ready, decide again
//!                           ├─ outing leg    ─► go home
//!                           └─ trip stop     ─► next stop or home
//! Test ──► Removed (never resumed again)
//! ```
//!
//! Exactly one agent runs at a time; ties at one tick are resumed in the
//! order they were scheduled, so a run is fully determined by its seed and
//! inputs.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ct_agent::{City, PopulationBuilder};
//! use ct_behavior::HumanBehavior;
//! use ct_core::SimConfig;
//! use ct_sim::{NoopObserver, SimBuilder};
//!
//! let (agents, rngs) = PopulationBuilder::new(42).residents(specs).build(&locations)?;
//! let mut sim = SimBuilder::new(config, City::new(locations, agents), rngs, HumanBehavior)
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! let events = sim.events();
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod process;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use process::{Leg, Process, Stay};
pub use sim::Sim;
