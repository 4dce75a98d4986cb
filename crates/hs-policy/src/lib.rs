//! `hs-policy` — station-selection policies.
//!
//! # Crate layout
//!
//! | Module             | Contents                                         |
//! |--------------------|--------------------------------------------------|
//! | [`selector`]       | `StationSelector` trait                          |
//! | [`shortest_queue`] | `ShortestQueue`: fewest trucks, lowest id wins   |
//!
//! The policy only reads station state; `hs-sim` applies its decision.

pub mod selector;
pub mod shortest_queue;

#[cfg(test)]
mod tests;

pub use selector::StationSelector;
pub use shortest_queue::ShortestQueue;
