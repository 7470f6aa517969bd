//! `ct-schedule` — pending resumptions and weekly time slots.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                 |
//! |----------------|----------------------------------------------------------|
//! | [`wake_queue`] | `WakeQueue` (`BTreeMap<Tick, VecDeque<AgentId>>`)        |
//! | [`slot`]       | `WeeklySlot` (weekday + hour of a recurring activity)    |
//! | [`error`]      | `ScheduleError`, `ScheduleResult<T>`                     |
//!
//! # Resumption model (summary)
//!
//! Each agent process suspends either on a timed stay or on a full location.
//! A timed stay pushes `(until, agent)`; a blocked request pushes nothing and
//! is later pushed at the current tick by the release that frees its slot.
//!
//! ```text
//! pop_next() → earliest (tick, agent), FIFO among equal ticks
//! ```

pub mod error;
pub mod slot;
pub mod wake_queue;


pub use error::{ScheduleError, ScheduleResult};
pub use slot::WeeklySlot;
pub use wake_queue::WakeQueue;
