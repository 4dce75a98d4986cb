//! Unit tests for hs-fleet.

use hs_core::{SimTime, StationId, TruckId};

use crate::{Fleet, Station, Truck, TruckPhase};

// ── Truck ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod truck {
    use super::*;

    #[test]
    fn new_truck_starts_with_zero_counters() {
        let mut t = Truck::new(TruckId(3));
        assert_eq!(t.loads_delivered, 0);
        assert_eq!(t.accounted_minutes(), 0);

        t.start_first_cycle(SimTime(120));
        assert_eq!(t.phase(), TruckPhase::Mining { until: SimTime(120) });
        assert_eq!(t.total_mining, 0);
    }

    #[test]
    fn full_cycle_bookkeeping() {
        let mut t = Truck::new(TruckId(0));
        t.start_first_cycle(SimTime(120));

        // The opening cycle is never credited.
        t.finish_mining(SimTime(120), 30);
        assert_eq!(t.total_mining, 0);
        assert_eq!(t.total_travel, 30);
        assert_eq!(t.phase(), TruckPhase::ToStation);

        t.join_queue(StationId(1), SimTime(150));
        assert_eq!(t.phase(), TruckPhase::Queued { station: StationId(1), joined: SimTime(150) });

        t.begin_unload(SimTime(158), 5);
        assert_eq!(t.total_wait, 8);
        assert_eq!(t.total_unload, 5);
        assert_eq!(t.phase(), TruckPhase::Unloading { station: StationId(1) });

        // The next draw is credited in full as soon as it is made.
        let next = t.finish_unload(SimTime(163), 30, 200);
        assert_eq!(next, SimTime(393));
        assert_eq!(t.loads_delivered, 1);
        assert_eq!(t.total_travel, 60);
        assert_eq!(t.total_mining, 200);
        assert_eq!(t.phase(), TruckPhase::Mining { until: SimTime(393) });

        // Accounted time runs to the end of the booked cycle, less the
        // uncredited opening one.
        assert_eq!(t.accounted_minutes() + 120, 393);

        t.finish_mining(next, 30);
        assert_eq!(t.total_mining, 200);
        assert_eq!(t.total_travel, 90);
    }

    #[test]
    fn strand_charges_remaining_horizon_once() {
        let mut t = Truck::new(TruckId(0));
        t.start_first_cycle(SimTime(100));
        t.finish_mining(SimTime(100), 30);
        t.strand(SimTime(130), SimTime(4320));
        assert_eq!(t.total_wait, 4190);
        assert_eq!(t.total_mining, 0);
        assert_eq!(t.phase(), TruckPhase::Stranded);
        assert_eq!(t.accounted_minutes() + 100, 4320);
    }

    #[test]
    fn strand_after_horizon_charges_nothing() {
        let mut t = Truck::new(TruckId(0));
        t.start_first_cycle(SimTime(10));
        t.finish_mining(SimTime(10), 30);
        t.strand(SimTime(40), SimTime(20));
        assert_eq!(t.total_wait, 0);
    }
}

// ── Station ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod station {
    use super::*;

    #[test]
    fn join_idle_claims_station() {
        let mut s = Station::new(StationId(0));
        assert!(!s.is_busy());
        assert!(s.join(TruckId(4)));
        assert!(s.is_busy());
        assert_eq!(s.head(), Some(TruckId(4)));
    }

    #[test]
    fn join_busy_queues_behind() {
        let mut s = Station::new(StationId(0));
        assert!(s.join(TruckId(1)));
        assert!(!s.join(TruckId(2)));
        assert!(!s.join(TruckId(3)));
        assert_eq!(s.queue_len(), 3);
        let order: Vec<TruckId> = s.queued().collect();
        assert_eq!(order, vec![TruckId(1), TruckId(2), TruckId(3)]);
    }

    #[test]
    fn service_accounting_and_handover() {
        let mut s = Station::new(StationId(0));
        s.join(TruckId(1));
        s.join(TruckId(2));

        assert_eq!(s.begin_service(SimTime(90), 5), SimTime(95));
        assert_eq!(s.busy_until(), SimTime(95));
        assert_eq!(s.total_busy, 5);

        // Another truck waiting: station stays busy and hands over.
        assert_eq!(s.finish_service(TruckId(1)), Some(TruckId(2)));
        assert!(s.is_busy());

        s.begin_service(SimTime(95), 5);
        assert_eq!(s.finish_service(TruckId(2)), None);
        assert!(!s.is_busy());
        assert_eq!(s.queue_len(), 0);
        assert_eq!(s.total_busy, 10);
    }

    #[test]
    fn truncate_removes_overshoot_only_when_busy() {
        let mut s = Station::new(StationId(0));
        s.join(TruckId(0));
        s.begin_service(SimTime(4318), 5);
        assert_eq!(s.truncate_to(SimTime(4320)), 3);
        assert_eq!(s.total_busy, 2);

        let mut idle = Station::new(StationId(1));
        idle.total_busy = 40;
        assert_eq!(idle.truncate_to(SimTime(4320)), 0);
        assert_eq!(idle.total_busy, 40);
    }

    #[test]
    fn utilization_is_percentage_of_horizon() {
        let mut s = Station::new(StationId(0));
        s.total_busy = 1080;
        assert!((s.utilization(SimTime(4320)) - 25.0).abs() < 1e-9);
        assert_eq!(s.utilization(SimTime(0)), 0.0);
    }
}

// ── Fleet ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod fleet {
    use super::*;

    #[test]
    fn ids_equal_indices() {
        let fleet = Fleet::new(3, 2);
        assert_eq!(fleet.truck_count(), 3);
        assert_eq!(fleet.station_count(), 2);
        let ids: Vec<TruckId> = fleet.truck_ids().collect();
        assert_eq!(ids, vec![TruckId(0), TruckId(1), TruckId(2)]);
        assert_eq!(fleet.stations[1].id, StationId(1));
    }

    #[test]
    fn lookups_report_missing_ids() {
        let fleet = Fleet::new(1, 0);
        assert!(fleet.truck(TruckId(0)).is_ok());
        assert!(fleet.truck(TruckId(1)).is_err());
        let err = fleet.station(StationId(0)).unwrap_err();
        assert_eq!(err.to_string(), "station StationId(0) not found");
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    #[should_panic(expected = "exceeds the u32 id range")]
    fn oversized_fleet_panics_before_allocating() {
        Fleet::new(u32::MAX as usize + 1, 0);
    }

    #[test]
    fn empty_fleet() {
        let fleet = Fleet::new(0, 0);
        assert_eq!(fleet.truck_ids().count(), 0);
    }
}
