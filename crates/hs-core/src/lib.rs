//! `hs-core` — foundational types for the `haul_sim` workspace.
//!
//! This crate is a dependency of every other `hs-*` crate.  It has no `hs-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `TruckId`, `StationId`                                |
//! | [`time`]        | `SimTime`, `SimClock`                                 |
//! | [`config`]      | `SimConfig` and the default haul constants            |
//! | [`rng`]         | `SimRng` (owned, seedable)                            |
//! | [`error`]       | `HsError`, `HsResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids, time and config.    |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{HsError, HsResult};
pub use ids::{StationId, TruckId};
pub use rng::SimRng;
pub use time::{SimClock, SimTime};
