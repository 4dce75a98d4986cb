//! `hs-sim` — event loop orchestrator for the haul_sim workspace.
//!
//! # Event loop
//!
//! ```text
//! seed: one FinishMining per truck at t = mining draw
//! loop:
//!   pop earliest event (time, then push order)
//!   time > horizon?  → drop it, stop
//!   clock ← event.time
//!   FinishMining(k)     → travel;  ArriveStation at now + travel
//!   ArriveStation(k)    → pick station, join queue; idle → BeginUnload at now
//!   BeginUnload(k, s)   → book wait; FinishUnload at now + unload
//!   FinishUnload(k, s)  → next in queue → BeginUnload at now;
//!                         FinishMining at now + travel + mining draw
//! finalize: drop busy time past the horizon
//! ```
//!
//! The loop is single-threaded; trucks only appear to act concurrently when
//! several events share a timestamp.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use hs_core::SimConfig;
//! use hs_sim::{NoopObserver, Sim};
//!
//! let mut sim = Sim::new(10, 3, SimConfig::default().with_seed(42))?;
//! sim.run(&mut NoopObserver);
//! let report = sim.report();
//! ```

pub mod builder;
pub mod dispatch;
pub mod error;
pub mod observer;
pub mod report;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use report::{SimReport, StationStats, TruckStats};
pub use sim::Sim;
