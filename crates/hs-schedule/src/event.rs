//! The four haul events.

use std::cmp::Ordering;
use std::fmt;

use hs_core::{SimTime, StationId, TruckId};

/// What happens to a truck at an event's timestamp.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// The truck finishes a mining cycle at the site and leaves for a station.
    FinishMining,
    /// The truck reaches the stations and joins a queue.
    ArriveStation,
    /// The truck at the head of a station's queue starts unloading.
    BeginUnload,
    /// The truck finishes unloading and heads back to the site.
    FinishUnload,
}

impl EventKind {
    /// Stable snake_case label used by logs and output files.
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::FinishMining => "finish_mining",
            EventKind::ArriveStation => "arrive_station",
            EventKind::BeginUnload => "begin_unload",
            EventKind::FinishUnload => "finish_unload",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scheduled event.
///
/// `seq` is assigned by [`EventQueue::push`][crate::EventQueue::push] and
/// breaks ties between equal timestamps: earlier pushes pop first.
/// `station` is `None` until the truck has been bound to a station.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    pub time:    SimTime,
    pub seq:     u64,
    pub kind:    EventKind,
    pub truck:   TruckId,
    pub station: Option<StationId>,
}

impl Ord for Event {
    fn cmp(&self, other: &Self) -> Ordering {
        self.time
            .cmp(&other.time)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for Event {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} #{} {} {}", self.time, self.seq, self.kind, self.truck)?;
        if let Some(station) = self.station {
            write!(f, " @ {station}")?;
        }
        Ok(())
    }
}
