//! `Fleet` — owned storage for every truck and station of a run.
//!
//! Trucks and stations are created once, with ids equal to their index, and
//! live for the whole run.  Handlers index the `Vec`s directly by id; an id
//! outside the fleet is a programmer error and panics.  The fallible
//! [`Fleet::truck`] / [`Fleet::station`] lookups are for callers holding ids
//! from elsewhere (reports, tests).

use hs_core::{HsError, HsResult, StationId, TruckId};

use crate::{Station, Truck};

pub struct Fleet {
    pub trucks: Vec<Truck>,
    pub stations: Vec<Station>,
}

impl Fleet {
    /// `truck_count` fresh trucks and `station_count` idle stations.
    ///
    /// # Panics
    /// Panics if either count does not fit in a `u32` id.
    pub fn new(truck_count: usize, station_count: usize) -> Self {
        let (Ok(n_trucks), Ok(n_stations)) = (u32::try_from(truck_count), u32::try_from(station_count)) else {
            panic!("fleet of {truck_count} trucks and {station_count} stations exceeds the u32 id range");
        };
        let trucks = (0..n_trucks).map(|i| Truck::new(TruckId(i))).collect();
        let stations = (0..n_stations).map(|i| Station::new(StationId(i))).collect();
        Self { trucks, stations }
    }

    pub fn truck_count(&self) -> usize {
        self.trucks.len()
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Iterator over all `TruckId`s in ascending order.
    pub fn truck_ids(&self) -> impl Iterator<Item = TruckId> + '_ {
        self.trucks.iter().map(|t| t.id)
    }

    pub fn truck(&self, id: TruckId) -> HsResult<&Truck> {
        self.trucks.get(id.index()).ok_or(HsError::TruckNotFound(id))
    }

    pub fn station(&self, id: StationId) -> HsResult<&Station> {
        self.stations.get(id.index()).ok_or(HsError::StationNotFound(id))
    }

    /// Mutable truck by id.
    ///
    /// # Panics
    /// Panics if `id` is not in the fleet.
    #[inline]
    pub fn truck_mut(&mut self, id: TruckId) -> &mut Truck {
        &mut self.trucks[id.index()]
    }

    /// Mutable station by id.
    ///
    /// # Panics
    /// Panics if `id` is not in the fleet.
    #[inline]
    pub fn station_mut(&mut self, id: StationId) -> &mut Station {
        &mut self.stations[id.index()]
    }
}
