//! Fluent builder for constructing a [`Sim`].

use hs_core::{SimClock, SimConfig, SimRng, SimTime};
use hs_fleet::Fleet;
use hs_policy::{ShortestQueue, StationSelector};
use hs_schedule::{EventKind, EventQueue};
use log::debug;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<S>`].
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default           |
/// |--------------------|-------------------|
/// | `.trucks(n)`       | 0                 |
/// | `.stations(m)`     | 0                 |
/// | `.selector(s)`     | [`ShortestQueue`] |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::default().with_seed(42))
///     .trucks(10)
///     .stations(3)
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<S: StationSelector = ShortestQueue> {
    config:   SimConfig,
    trucks:   usize,
    stations: usize,
    selector: S,
}

impl SimBuilder<ShortestQueue> {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            trucks:   0,
            stations: 0,
            selector: ShortestQueue,
        }
    }
}

impl<S: StationSelector> SimBuilder<S> {
    /// Number of trucks in the fleet.
    pub fn trucks(mut self, n: usize) -> Self {
        self.trucks = n;
        self
    }

    /// Number of unload stations.  Zero is allowed: arriving trucks then
    /// wait out the run.
    pub fn stations(mut self, n: usize) -> Self {
        self.stations = n;
        self
    }

    /// Replace the station-selection policy.
    pub fn selector<S2: StationSelector>(self, selector: S2) -> SimBuilder<S2> {
        SimBuilder {
            config:   self.config,
            trucks:   self.trucks,
            stations: self.stations,
            selector,
        }
    }

    /// Validate inputs, create the fleet and seed one `FinishMining` per
    /// truck, then return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<S>> {
        self.config.validate()?;
        for (what, n) in [("truck", self.trucks), ("station", self.stations)] {
            if u32::try_from(n).is_err() {
                return Err(SimError::Config(format!("{what} count {n} exceeds id range")));
            }
        }

        let mut fleet = Fleet::new(self.trucks, self.stations);
        let mut rng = SimRng::from_seed_opt(self.config.seed);

        // ── Seed the first mining cycle of every truck ────────────────────
        // Trucks start on site at t=0; this cycle is not credited as mining.
        let mut queue = EventQueue::new();
        for truck in &mut fleet.trucks {
            let until = SimTime(rng.minutes_between(self.config.mining_min, self.config.mining_max));
            truck.start_first_cycle(until);
            queue.push(until, EventKind::FinishMining, truck.id, None);
        }
        debug!(
            "seeded {} trucks, {} stations, horizon {}",
            fleet.truck_count(),
            fleet.station_count(),
            self.config.end_time()
        );

        Ok(Sim {
            config:     self.config,
            clock:      SimClock::new(),
            fleet,
            queue,
            selector:   self.selector,
            rng,
            dispatched: 0,
            halted:     false,
            finalized:  false,
        })
    }
}
