//! Event handlers: one state transition per `EventKind`.
//!
//! Every handler runs at `self.clock.now()` and may only schedule events at
//! `now` or later.  A handler receiving an event that names an id outside the
//! fleet, or a truck in the wrong phase, is a programmer error: indexing
//! panics, and phase mismatches trip debug assertions in `hs-fleet`.

use hs_core::{StationId, TruckId};
use hs_policy::StationSelector;
use hs_schedule::{Event, EventKind};
use log::warn;

use crate::Sim;

impl<S: StationSelector> Sim<S> {
    pub(crate) fn dispatch(&mut self, event: &Event) {
        match event.kind {
            EventKind::FinishMining => self.on_finish_mining(event.truck),
            EventKind::ArriveStation => self.on_arrive_station(event.truck),
            EventKind::BeginUnload => self.on_begin_unload(event.truck, bound_station(event)),
            EventKind::FinishUnload => self.on_finish_unload(event.truck, bound_station(event)),
        }
    }

    /// Mining done: drive to the stations.
    fn on_finish_mining(&mut self, truck: TruckId) {
        let now = self.clock.now();
        let travel = self.config.travel_time;
        self.fleet.truck_mut(truck).finish_mining(now, travel);
        self.queue.push(now + travel, EventKind::ArriveStation, truck, None);
    }

    /// Arrived: join the selected station's queue, starting at once if the
    /// station is idle.
    fn on_arrive_station(&mut self, truck: TruckId) {
        let now = self.clock.now();

        if self.fleet.stations.is_empty() {
            warn!("{truck} arrived at {now} but there are no stations; it waits out the run");
            self.fleet.truck_mut(truck).strand(now, self.config.end_time());
            return;
        }

        let Some(station) = self.selector.select(truck, &self.fleet.stations) else {
            panic!("station selector returned no station for {truck} with stations available");
        };

        self.fleet.truck_mut(truck).join_queue(station, now);
        if self.fleet.station_mut(station).join(truck) {
            self.queue.push(now, EventKind::BeginUnload, truck, Some(station));
        }
    }

    /// Head of the queue starts unloading.
    fn on_begin_unload(&mut self, truck: TruckId, station: StationId) {
        let now = self.clock.now();
        let unload = self.config.unload_time;

        debug_assert_eq!(self.fleet.stations[station.index()].head(), Some(truck));
        self.fleet.truck_mut(truck).begin_unload(now, unload);
        let done = self.fleet.station_mut(station).begin_service(now, unload);
        self.queue.push(done, EventKind::FinishUnload, truck, Some(station));
    }

    /// Unload done: hand the station to the next truck, send this one back
    /// to mine.
    fn on_finish_unload(&mut self, truck: TruckId, station: StationId) {
        let now = self.clock.now();

        if let Some(next) = self.fleet.station_mut(station).finish_service(truck) {
            self.queue.push(now, EventKind::BeginUnload, next, Some(station));
        }

        let mining = self
            .rng
            .minutes_between(self.config.mining_min, self.config.mining_max);
        let mined_at = self
            .fleet
            .truck_mut(truck)
            .finish_unload(now, self.config.travel_time, mining);
        self.queue.push(mined_at, EventKind::FinishMining, truck, None);
    }
}

/// Station carried by an unload event.
///
/// # Panics
/// Panics if the event was scheduled without one.
fn bound_station(event: &Event) -> StationId {
    match event.station {
        Some(station) => station,
        None => panic!("{event}: unload event without a station"),
    }
}
