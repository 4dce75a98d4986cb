//! Unit tests for hs-policy.

use hs_core::{StationId, TruckId};
use hs_fleet::Station;

use crate::{ShortestQueue, StationSelector};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Stations whose queues hold `lens[i]` trucks each.
fn stations_with_queues(lens: &[usize]) -> Vec<Station> {
    let mut next_truck = 0;
    lens.iter()
        .enumerate()
        .map(|(i, &len)| {
            let mut s = Station::new(StationId(i as u32));
            for _ in 0..len {
                s.join(TruckId(next_truck));
                next_truck += 1;
            }
            s
        })
        .collect()
}

#[cfg(test)]
mod shortest_queue {
    use super::*;

    #[test]
    fn first_minimum_wins() {
        let stations = stations_with_queues(&[2, 2, 0, 1]);
        assert_eq!(ShortestQueue.select(TruckId(99), &stations), Some(StationId(2)));
    }

    #[test]
    fn ties_go_to_lowest_id() {
        let stations = stations_with_queues(&[1, 0, 0, 0]);
        assert_eq!(ShortestQueue.select(TruckId(99), &stations), Some(StationId(1)));

        let all_idle = stations_with_queues(&[0, 0, 0]);
        assert_eq!(ShortestQueue.select(TruckId(99), &all_idle), Some(StationId(0)));
    }

    #[test]
    fn counts_truck_in_service() {
        // Station 0 has one truck unloading, no one waiting; station 1 is idle.
        let mut stations = stations_with_queues(&[1, 0]);
        stations[0].begin_service(hs_core::SimTime(10), 5);
        assert_eq!(ShortestQueue.select(TruckId(99), &stations), Some(StationId(1)));
    }

    #[test]
    fn no_stations_selects_none() {
        assert_eq!(ShortestQueue.select(TruckId(0), &[]), None);
    }
}

#[cfg(test)]
mod custom_selector {
    use super::*;

    /// Always the last station.
    struct LastStation;

    impl StationSelector for LastStation {
        fn select(&self, _truck: TruckId, stations: &[Station]) -> Option<StationId> {
            stations.last().map(|s| s.id)
        }
    }

    #[test]
    fn trait_object_dispatch() {
        let policies: Vec<Box<dyn StationSelector>> = vec![Box::new(ShortestQueue), Box::new(LastStation)];
        let stations = stations_with_queues(&[0, 3]);
        let picks: Vec<_> = policies.iter().map(|p| p.select(TruckId(0), &stations)).collect();
        assert_eq!(picks, vec![Some(StationId(0)), Some(StationId(1))]);
    }
}
