//! Run configuration.
//!
//! Every timing constant of the haul cycle is a named field here.  The
//! `Default` impl carries the reference scenario: 1–5 h mining, 30 min each
//! way between site and stations, 5 min unloads, a 72 h horizon.

use crate::{HsError, HsResult, SimTime};

/// Minimum mining duration of the reference scenario (1 h).
pub const DEFAULT_MINING_MIN: u64 = 60;
/// Maximum mining duration of the reference scenario (5 h).
pub const DEFAULT_MINING_MAX: u64 = 300;
/// One-way travel between the mining site and any station.
pub const DEFAULT_TRAVEL_TIME: u64 = 30;
/// Time a station spends unloading one truck.
pub const DEFAULT_UNLOAD_TIME: u64 = 5;
/// 72 hours.
pub const DEFAULT_HORIZON: u64 = 72 * 60;

/// Top-level simulation configuration.  All durations are in minutes.
///
/// Typically built with `..SimConfig::default()` in code, or loaded from a
/// JSON file by the demo binary (with the `serde` feature).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Shortest mining cycle (inclusive).
    pub mining_min: u64,

    /// Longest mining cycle (inclusive).
    pub mining_max: u64,

    /// One-way travel time site ↔ station.
    pub travel_time: u64,

    /// Unload (service) duration at a station.
    pub unload_time: u64,

    /// Events later than this are never dispatched.
    pub horizon: u64,

    /// Master RNG seed.  `None` seeds from entropy, so runs differ.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            mining_min:  DEFAULT_MINING_MIN,
            mining_max:  DEFAULT_MINING_MAX,
            travel_time: DEFAULT_TRAVEL_TIME,
            unload_time: DEFAULT_UNLOAD_TIME,
            horizon:     DEFAULT_HORIZON,
            seed:        None,
        }
    }
}

impl SimConfig {
    /// Same configuration with a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The horizon as an absolute time.
    #[inline]
    pub fn end_time(&self) -> SimTime {
        SimTime(self.horizon)
    }

    /// Reject configurations the engine cannot sample from, or whose event
    /// times could overflow.
    ///
    /// The latest time ever scheduled is a `FinishMining` pushed by an
    /// unload finishing at the horizon: `horizon + 2 * travel_time +
    /// unload_time + mining_max` must fit in a `u64`.
    pub fn validate(&self) -> HsResult<()> {
        if self.mining_min > self.mining_max {
            return Err(HsError::Config(format!(
                "mining_min ({}) exceeds mining_max ({})",
                self.mining_min, self.mining_max
            )));
        }
        let latest = self
            .horizon
            .checked_add(self.travel_time)
            .and_then(|t| t.checked_add(self.travel_time))
            .and_then(|t| t.checked_add(self.unload_time))
            .and_then(|t| t.checked_add(self.mining_max));
        if latest.is_none() {
            return Err(HsError::Config(format!(
                "horizon {} plus one full haul cycle overflows virtual time",
                self.horizon
            )));
        }
        Ok(())
    }
}
