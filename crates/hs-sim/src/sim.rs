//! The `Sim` struct and its event loop.

use hs_core::{SimClock, SimConfig, SimRng, SimTime};
use hs_fleet::Fleet;
use hs_policy::{ShortestQueue, StationSelector};
use hs_schedule::EventQueue;
use log::{debug, info};

use crate::{SimBuilder, SimObserver, SimReport, SimResult};

/// The main simulation runner.
///
/// `Sim<S>` holds all simulation state and drives the event loop:
///
/// 1. **Pop** the earliest pending event (`(time, seq)` order).
/// 2. **Halt** if its time is past the horizon; the event is dropped and
///    everything still queued is abandoned.
/// 3. **Advance** the clock to the event's time.
/// 4. **Dispatch** it to the handler for its kind, which updates truck and
///    station state and schedules follow-on events at `>= now`.
///
/// After the loop, busy time of stations still unloading is cut back to the
/// horizon.
///
/// Create via [`SimBuilder`][crate::SimBuilder] or [`Sim::new`].
pub struct Sim<S: StationSelector = ShortestQueue> {
    /// Timing constants, horizon and seed.
    pub config: SimConfig,

    /// Current virtual time.
    pub clock: SimClock,

    /// Every truck and station, indexed by id.
    pub fleet: Fleet,

    /// Pending events.
    pub queue: EventQueue,

    /// Which station an arriving truck joins.
    pub selector: S,

    /// Mining-duration source.
    pub(crate) rng: SimRng,

    pub(crate) dispatched: u64,
    pub(crate) halted:     bool,
    pub(crate) finalized:  bool,
}

impl Sim<ShortestQueue> {
    /// `trucks` trucks and `stations` stations with shortest-queue selection.
    pub fn new(trucks: usize, stations: usize, config: SimConfig) -> SimResult<Self> {
        SimBuilder::new(config).trucks(trucks).stations(stations).build()
    }
}

impl<S: StationSelector> Sim<S> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until the queue empties or the next event is past the horizon,
    /// then truncate busy time to the horizon.
    ///
    /// Calling `run` again on a finished sim does nothing.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        if self.finalized {
            return;
        }
        info!(
            "run start: {} trucks, {} stations, horizon {}",
            self.fleet.truck_count(),
            self.fleet.station_count(),
            self.config.end_time()
        );

        while self.step(observer) {}
        self.finalize();

        let report = self.report();
        observer.on_sim_end(self.clock.now(), &report);
        info!(
            "run end at {}: {} events, {} loads, mean utilization {:.2}%",
            self.clock,
            self.dispatched,
            report.total_loads(),
            report.mean_utilization()
        );
    }

    /// Process one event.
    ///
    /// Returns `false` once the loop is over (queue empty, or the next event
    /// was past the horizon and has been dropped).  Busy time is not
    /// truncated until [`run`][Self::run] finishes.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> bool {
        if self.halted {
            return false;
        }
        let Some(event) = self.queue.pop_min() else {
            debug!("event queue empty at {}", self.clock.now());
            self.halted = true;
            return false;
        };
        if event.time > self.config.end_time() {
            debug!("horizon reached; dropping {event}");
            observer.on_discard(&event);
            self.halted = true;
            return false;
        }

        self.clock.advance_to(event.time);
        debug!("dispatch {event}");
        self.dispatch(&event);
        self.dispatched += 1;
        observer.on_event(&event, &self.fleet);
        true
    }

    /// `true` once the loop has halted.
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Number of events dispatched so far.
    pub fn events_dispatched(&self) -> u64 {
        self.dispatched
    }

    /// Current statistics.  Utilization only covers `[0, horizon]` after
    /// `run` has returned.
    pub fn report(&self) -> SimReport {
        SimReport::from_fleet(
            &self.fleet,
            self.config.end_time(),
            self.clock.now(),
            self.dispatched,
        )
    }

    // ── Finalization ──────────────────────────────────────────────────────

    /// Remove busy time past the horizon from stations still unloading.
    ///
    /// `BeginUnload` credits the whole unload up front, so only the part
    /// after the horizon is taken back; nothing is credited twice.
    fn finalize(&mut self) {
        if self.finalized {
            return;
        }
        let horizon: SimTime = self.config.end_time();
        for station in &mut self.fleet.stations {
            let removed = station.truncate_to(horizon);
            if removed > 0 {
                debug!("{}: {removed} min of busy time past horizon removed", station.id);
            }
        }
        self.finalized = true;
    }
}
