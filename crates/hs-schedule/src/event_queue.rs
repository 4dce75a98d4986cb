//! `EventQueue` — the pending-event heap that drives virtual time.
//!
//! # Ordering
//!
//! Events pop in ascending `(time, seq)` order.  `seq` is a counter stamped
//! on every push, so events sharing a timestamp pop in the order they were
//! scheduled.  This makes a run fully determined by its seed: a zero-delay
//! `BeginUnload` pushed while handling an arrival at `t` pops after every
//! event already queued for `t`, and before anything at `t + 1`.
//!
//! # Performance note
//!
//! `BinaryHeap` gives O(log n) push and pop where n is the number of pending
//! events.  The haul model keeps at most one pending event per truck, so n
//! never exceeds the fleet size.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use hs_core::{SimTime, StationId, TruckId};
use log::trace;

use crate::{Event, EventKind};

/// Min-time priority queue of pending events.
#[derive(Default)]
pub struct EventQueue {
    heap: BinaryHeap<Reverse<Event>>,
    /// Next sequence number to hand out.
    next_seq: u64,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule an event and return it (with its assigned `seq`).
    pub fn push(
        &mut self,
        time:    SimTime,
        kind:    EventKind,
        truck:   TruckId,
        station: Option<StationId>,
    ) -> Event {
        let event = Event { time, seq: self.next_seq, kind, truck, station };
        self.next_seq += 1;
        trace!("schedule {event}");
        self.heap.push(Reverse(event));
        event
    }

    /// Remove and return the earliest event, or `None` if the queue is empty.
    pub fn pop_min(&mut self) -> Option<Event> {
        self.heap.pop().map(|Reverse(e)| e)
    }

    /// The earliest event without removing it.
    pub fn peek(&self) -> Option<&Event> {
        self.heap.peek().map(|Reverse(e)| e)
    }

    /// Timestamp of the earliest event, or `None` if empty.
    pub fn peek_time(&self) -> Option<SimTime> {
        self.peek().map(|e| e.time)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Total number of events ever pushed.
    pub fn scheduled_count(&self) -> u64 {
        self.next_seq
    }
}
