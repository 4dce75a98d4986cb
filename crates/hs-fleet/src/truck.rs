//! Per-truck counters and the truck phase machine.

use hs_core::{SimTime, StationId, TruckId};

/// Where a truck is in its haul cycle.
///
/// The phase names exactly one pending event, which is how the simulation
/// guarantees a truck never has two outstanding events:
///
/// | Phase        | Pending event    |
/// |--------------|------------------|
/// | `Mining`     | `FinishMining`   |
/// | `ToStation`  | `ArriveStation`  |
/// | `Queued`     | `BeginUnload` (once the truck reaches the queue head) |
/// | `Unloading`  | `FinishUnload`   |
/// | `Stranded`   | none             |
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TruckPhase {
    /// Mining at the site until `until`.  Includes the drive back from a
    /// station, which precedes the mining itself.
    Mining { until: SimTime },
    /// Driving from the site to the stations.
    ToStation,
    /// In `station`'s queue since `joined`.
    Queued { station: StationId, joined: SimTime },
    /// Being unloaded at `station`.
    Unloading { station: StationId },
    /// Arrived when no station exists; waits out the rest of the run.
    Stranded,
}

/// One haul truck: identity, cumulative statistics and current phase.
///
/// All counters are in minutes (except `loads_delivered`) and only ever grow.
#[derive(Clone, Debug)]
pub struct Truck {
    pub id: TruckId,
    pub loads_delivered: u64,
    pub total_wait: u64,
    pub total_travel: u64,
    pub total_mining: u64,
    pub total_unload: u64,
    phase: TruckPhase,
}

impl Truck {
    /// A fresh truck.  Its first mining cycle is set by
    /// [`start_first_cycle`][Self::start_first_cycle].
    pub fn new(id: TruckId) -> Self {
        Self {
            id,
            loads_delivered: 0,
            total_wait: 0,
            total_travel: 0,
            total_mining: 0,
            total_unload: 0,
            phase: TruckPhase::Mining { until: SimTime::ZERO },
        }
    }

    #[inline]
    pub fn phase(&self) -> TruckPhase {
        self.phase
    }

    /// Sum of all time counters.
    pub fn accounted_minutes(&self) -> u64 {
        self.total_wait + self.total_travel + self.total_mining + self.total_unload
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// The run's opening mining cycle, ending at `until`.
    ///
    /// Not credited to `total_mining`: only cycles drawn after an unload
    /// are.
    pub fn start_first_cycle(&mut self, until: SimTime) {
        debug_assert_eq!(self.loads_delivered, 0, "{}", self.id);
        self.phase = TruckPhase::Mining { until };
    }

    /// Mining done at `now`: book the outbound leg.
    pub fn finish_mining(&mut self, now: SimTime, travel: u64) {
        debug_assert_eq!(self.phase, TruckPhase::Mining { until: now }, "{}", self.id);
        self.total_travel += travel;
        self.phase = TruckPhase::ToStation;
    }

    /// Arrived with no station to go to: charge the remaining horizon as
    /// wait, once.  The truck takes no further part in the run.
    pub fn strand(&mut self, now: SimTime, horizon: SimTime) {
        debug_assert_eq!(self.phase, TruckPhase::ToStation, "{}", self.id);
        self.total_wait += horizon.saturating_since(now);
        self.phase = TruckPhase::Stranded;
    }

    /// Joined `station`'s queue at `now`.
    pub fn join_queue(&mut self, station: StationId, now: SimTime) {
        debug_assert_eq!(self.phase, TruckPhase::ToStation, "{}", self.id);
        self.phase = TruckPhase::Queued { station, joined: now };
    }

    /// Reached the head of the queue: book the wait and the unload.
    pub fn begin_unload(&mut self, now: SimTime, unload: u64) {
        let TruckPhase::Queued { station, joined } = self.phase else {
            debug_assert!(false, "{}: begin_unload in phase {:?}", self.id, self.phase);
            return;
        };
        self.total_wait += now.saturating_since(joined);
        self.total_unload += unload;
        self.phase = TruckPhase::Unloading { station };
    }

    /// Unload done: count the load, then book the return leg and the whole
    /// of the next mining cycle, which starts on arrival at the site.
    ///
    /// Returns the time the next mining cycle ends.
    pub fn finish_unload(&mut self, now: SimTime, travel: u64, next_mining: u64) -> SimTime {
        debug_assert!(
            matches!(self.phase, TruckPhase::Unloading { .. }),
            "{}: finish_unload in phase {:?}",
            self.id,
            self.phase
        );
        self.loads_delivered += 1;
        self.total_travel += travel;
        self.total_mining += next_mining;
        let until = now + travel + next_mining;
        self.phase = TruckPhase::Mining { until };
        until
    }
}
