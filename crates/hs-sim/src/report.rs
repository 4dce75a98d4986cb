//! Read-only statistics extracted from a finished (or paused) run.

use hs_core::{SimTime, StationId, TruckId};
use hs_fleet::{Fleet, Station, Truck};

/// Per-truck counters, in minutes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TruckStats {
    pub id:              TruckId,
    pub loads_delivered: u64,
    pub total_wait:      u64,
    pub total_travel:    u64,
    pub total_mining:    u64,
    pub total_unload:    u64,
}

impl From<&Truck> for TruckStats {
    fn from(t: &Truck) -> Self {
        Self {
            id:              t.id,
            loads_delivered: t.loads_delivered,
            total_wait:      t.total_wait,
            total_travel:    t.total_travel,
            total_mining:    t.total_mining,
            total_unload:    t.total_unload,
        }
    }
}

/// Per-station busy time and its share of the horizon.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StationStats {
    pub id:              StationId,
    pub total_busy:      u64,
    /// `total_busy / horizon * 100`, in `[0, 100]`.
    pub utilization_pct: f64,
}

impl StationStats {
    fn new(s: &Station, horizon: SimTime) -> Self {
        Self {
            id:              s.id,
            total_busy:      s.total_busy,
            utilization_pct: s.utilization(horizon),
        }
    }
}

/// Snapshot of every counter a run produced.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimReport {
    pub horizon:           SimTime,
    /// Timestamp of the last dispatched event.
    pub final_time:        SimTime,
    pub events_dispatched: u64,
    pub trucks:            Vec<TruckStats>,
    pub stations:          Vec<StationStats>,
}

impl SimReport {
    pub fn from_fleet(
        fleet:             &Fleet,
        horizon:           SimTime,
        final_time:        SimTime,
        events_dispatched: u64,
    ) -> Self {
        Self {
            horizon,
            final_time,
            events_dispatched,
            trucks:   fleet.trucks.iter().map(TruckStats::from).collect(),
            stations: fleet.stations.iter().map(|s| StationStats::new(s, horizon)).collect(),
        }
    }

    /// Loads delivered by the whole fleet.
    pub fn total_loads(&self) -> u64 {
        self.trucks.iter().map(|t| t.loads_delivered).sum()
    }

    /// Mean station utilization, or 0 with no stations.
    pub fn mean_utilization(&self) -> f64 {
        if self.stations.is_empty() {
            return 0.0;
        }
        self.stations.iter().map(|s| s.utilization_pct).sum::<f64>() / self.stations.len() as f64
    }
}
