//! Plain data row types written by output backends.

use hs_schedule::Event;
use hs_sim::{StationStats, TruckStats};

/// One dispatched event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventRow {
    /// Virtual minutes since the start of the run.
    pub time:    u64,
    pub seq:     u64,
    pub kind:    &'static str,
    pub truck:   u32,
    /// `None` for mining and arrival events.
    pub station: Option<u32>,
}

impl From<&Event> for EventRow {
    fn from(e: &Event) -> Self {
        Self {
            time:    e.time.0,
            seq:     e.seq,
            kind:    e.kind.as_str(),
            truck:   e.truck.0,
            station: e.station.map(|s| s.0),
        }
    }
}

/// Final counters of one truck, in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruckStatsRow {
    pub truck:           u32,
    pub loads_delivered: u64,
    pub total_wait:      u64,
    pub total_travel:    u64,
    pub total_mining:    u64,
    pub total_unload:    u64,
}

impl From<&TruckStats> for TruckStatsRow {
    fn from(t: &TruckStats) -> Self {
        Self {
            truck:           t.id.0,
            loads_delivered: t.loads_delivered,
            total_wait:      t.total_wait,
            total_travel:    t.total_travel,
            total_mining:    t.total_mining,
            total_unload:    t.total_unload,
        }
    }
}

/// Final busy time of one station.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationStatsRow {
    pub station:         u32,
    pub total_busy:      u64,
    pub utilization_pct: f64,
}

impl From<&StationStats> for StationStatsRow {
    fn from(s: &StationStats) -> Self {
        Self {
            station:         s.id.0,
            total_busy:      s.total_busy,
            utilization_pct: s.utilization_pct,
        }
    }
}
