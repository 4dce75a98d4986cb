//! Unload station: exclusive server with a FIFO queue.

use std::collections::VecDeque;

use hs_core::{SimTime, StationId, TruckId};

/// One unload station.
///
/// `queue` holds every truck assigned here in arrival order.  While the
/// station is busy its head is the truck being unloaded (or about to be, at
/// the same instant); it is popped when that unload finishes.
///
/// Invariant: `busy` implies `!queue.is_empty()`, and an idle station has an
/// empty queue.
#[derive(Clone, Debug)]
pub struct Station {
    pub id: StationId,
    busy: bool,
    /// End of the current unload; meaningful only while `busy`.
    busy_until: SimTime,
    queue: VecDeque<TruckId>,
    /// Minutes spent unloading so far.
    pub total_busy: u64,
}

impl Station {
    pub fn new(id: StationId) -> Self {
        Self {
            id,
            busy: false,
            busy_until: SimTime::ZERO,
            queue: VecDeque::new(),
            total_busy: 0,
        }
    }

    #[inline]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    #[inline]
    pub fn busy_until(&self) -> SimTime {
        self.busy_until
    }

    /// Trucks waiting plus the one in service.
    #[inline]
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// The truck in (or about to start) service.
    pub fn head(&self) -> Option<TruckId> {
        self.queue.front().copied()
    }

    /// Queue contents, head first.
    pub fn queued(&self) -> impl Iterator<Item = TruckId> + '_ {
        self.queue.iter().copied()
    }

    /// Append `truck` to the queue.
    ///
    /// Returns `true` if the station was idle: it is now claimed for `truck`,
    /// which must begin unloading at the current instant.  Claiming on join
    /// means a second truck arriving at the same timestamp queues behind it
    /// instead of starting a second unload.
    pub fn join(&mut self, truck: TruckId) -> bool {
        debug_assert!(self.busy || self.queue.is_empty(), "{}: idle with a queue", self.id);
        self.queue.push_back(truck);
        if self.busy {
            false
        } else {
            self.busy = true;
            true
        }
    }

    /// Start unloading the head truck at `now`.
    ///
    /// The whole unload is credited to `total_busy` up front; see
    /// [`truncate_to`][Self::truncate_to] for the part past the horizon.
    /// Returns the time the unload ends.
    pub fn begin_service(&mut self, now: SimTime, unload: u64) -> SimTime {
        debug_assert!(!self.queue.is_empty(), "{}: begin_service with empty queue", self.id);
        self.busy = true;
        self.busy_until = now + unload;
        self.total_busy += unload;
        self.busy_until
    }

    /// Pop the finished head truck.
    ///
    /// Returns the new head if another truck is waiting (the station stays
    /// busy), otherwise marks the station idle and returns `None`.
    pub fn finish_service(&mut self, truck: TruckId) -> Option<TruckId> {
        let popped = self.queue.pop_front();
        debug_assert_eq!(popped, Some(truck), "{}: unload finished out of order", self.id);
        match self.queue.front() {
            Some(&next) => Some(next),
            None => {
                self.busy = false;
                None
            }
        }
    }

    /// Remove the part of the current unload that lies past `horizon`.
    ///
    /// Returns the minutes removed (0 if idle or finishing by the horizon).
    pub fn truncate_to(&mut self, horizon: SimTime) -> u64 {
        if !self.busy {
            return 0;
        }
        let overshoot = self.busy_until.saturating_since(horizon).min(self.total_busy);
        self.total_busy -= overshoot;
        overshoot
    }

    /// Busy share of `[0, horizon]` as a percentage in `[0, 100]`.
    ///
    /// A zero horizon yields 0.
    pub fn utilization(&self, horizon: SimTime) -> f64 {
        if horizon.0 == 0 {
            return 0.0;
        }
        (self.total_busy as f64 / horizon.0 as f64 * 100.0).clamp(0.0, 100.0)
    }
}
