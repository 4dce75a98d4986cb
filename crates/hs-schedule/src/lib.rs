//! `hs-schedule` — haul events and the event queue.
//!
//! # Crate layout
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`event`]       | `Event`, `EventKind`                                  |
//! | [`event_queue`] | `EventQueue` (`BinaryHeap` keyed by `(time, seq)`)    |
//!
//! # Haul cycle (summary)
//!
//! ```text
//! FinishMining ──travel──▶ ArriveStation ──queue──▶ BeginUnload
//!      ▲                                                 │ unload
//!      └──────── travel + next mining draw ◀──── FinishUnload
//! ```
//!
//! Each truck has exactly one of these events pending at any time.

pub mod event;
pub mod event_queue;


pub use event::{Event, EventKind};
pub use event_queue::EventQueue;
