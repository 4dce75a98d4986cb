//! Unit tests for hs-core primitives.

#[cfg(test)]
mod ids {
    use crate::{StationId, TruckId};

    #[test]
    fn index_roundtrip() {
        let id = TruckId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(TruckId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(StationId(0) < StationId(1));
        assert!(TruckId(100) > TruckId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(TruckId::INVALID.0, u32::MAX);
        assert_eq!(StationId::default(), StationId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(TruckId(7).to_string(), "TruckId(7)");
        assert_eq!(StationId(2).to_string(), "StationId(2)");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimTime};

    #[test]
    fn time_arithmetic() {
        let t = SimTime(90);
        assert_eq!(t + 5, SimTime(95));
        assert_eq!(SimTime(95) - SimTime(90), 5u64);
        assert_eq!(SimTime(10).saturating_since(SimTime(30)), 0);
        assert_eq!(t.minutes(), 90);
    }

    #[test]
    fn clock_jumps_forward() {
        let mut clock = SimClock::new();
        assert_eq!(clock.now(), SimTime::ZERO);
        clock.advance_to(SimTime(95));
        assert_eq!(clock.now(), SimTime(95));
        // Equal timestamps are allowed (zero-delay events).
        clock.advance_to(SimTime(95));
        assert_eq!(clock.now(), SimTime(95));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "clock moved backwards")]
    fn clock_rejects_backwards_jump() {
        let mut clock = SimClock::new();
        clock.advance_to(SimTime(10));
        clock.advance_to(SimTime(9));
    }

    #[test]
    fn clock_display() {
        let mut clock = SimClock::new();
        // 1 day, 2 hours, 5 minutes.
        clock.advance_to(SimTime(1_440 + 125));
        assert_eq!(clock.elapsed_dhm(), (1, 2, 5));
        assert_eq!(clock.to_string(), "t=1565min (day 1 02:05)");
    }
}

#[cfg(test)]
mod config {
    use crate::SimConfig;

    #[test]
    fn defaults_match_reference_scenario() {
        let c = SimConfig::default();
        assert_eq!(c.mining_min, 60);
        assert_eq!(c.mining_max, 300);
        assert_eq!(c.travel_time, 30);
        assert_eq!(c.unload_time, 5);
        assert_eq!(c.horizon, 4320);
        assert_eq!(c.seed, None);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn inverted_mining_interval_rejected() {
        let c = SimConfig { mining_min: 10, mining_max: 5, ..SimConfig::default() };
        let err = c.validate().unwrap_err();
        assert!(err.to_string().contains("mining_min"), "{err}");
    }

    #[test]
    fn degenerate_interval_accepted() {
        let c = SimConfig { mining_min: 60, mining_max: 60, ..SimConfig::default() };
        assert!(c.validate().is_ok());
    }

    #[test]
    fn overflowing_time_range_rejected() {
        let c = SimConfig { horizon: u64::MAX - 100, ..SimConfig::default() };
        let err = c.validate().unwrap_err();
        assert!(err.to_string().contains("overflows"), "{err}");

        let c = SimConfig { mining_max: u64::MAX, ..SimConfig::default() };
        assert!(c.validate().is_err());

        let c = SimConfig { travel_time: u64::MAX / 2, ..SimConfig::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn largest_representable_range_accepted() {
        let c = SimConfig {
            mining_min:  0,
            mining_max:  10,
            travel_time: 20,
            unload_time: 5,
            horizon:     u64::MAX - 55,
            seed:        None,
        };
        assert!(c.validate().is_ok());
        let c = SimConfig { horizon: c.horizon + 1, ..c };
        assert!(c.validate().is_err());
    }

    #[test]
    fn with_seed_sets_seed() {
        assert_eq!(SimConfig::default().with_seed(9).seed, Some(9));
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::new(42);
        let mut b = SimRng::new(42);
        for _ in 0..100 {
            assert_eq!(a.minutes_between(60, 300), b.minutes_between(60, 300));
        }
    }

    #[test]
    fn minutes_between_is_inclusive_and_bounded() {
        let mut rng = SimRng::new(7);
        let mut saw_min = false;
        let mut saw_max = false;
        for _ in 0..10_000 {
            let d = rng.minutes_between(1, 3);
            assert!((1..=3).contains(&d));
            saw_min |= d == 1;
            saw_max |= d == 3;
        }
        assert!(saw_min && saw_max);
    }

    #[test]
    fn degenerate_interval_always_returns_bound() {
        let mut rng = SimRng::from_seed_opt(None);
        for _ in 0..10 {
            assert_eq!(rng.minutes_between(60, 60), 60);
        }
    }
}
