//! `hs-fleet` — truck and station state for the `haul_sim` workspace.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`truck`]     | `Truck` counters, `TruckPhase`                            |
//! | [`station`]   | `Station` (busy flag, FIFO queue, busy-time accounting)   |
//! | [`store`]     | `Fleet` (owned `Vec<Truck>` + `Vec<Station>`)             |
//!
//! The state types own their bookkeeping: each transition method updates the
//! counters it affects, so `hs-sim` handlers only decide *which* transition
//! happens and what to schedule next.

pub mod station;
pub mod store;
pub mod truck;

#[cfg(test)]
mod tests;

pub use station::Station;
pub use store::Fleet;
pub use truck::{Truck, TruckPhase};
