//! The simulation-owned random source.
//!
//! Every draw in a run (the mining duration of each cycle) comes from one
//! `SimRng` held by the `Sim`.  There is no global generator: two sims never
//! share state, and a fixed seed reproduces a run exactly.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Owned, seedable simulation RNG.
///
/// Used only from the single-threaded event loop.
pub struct SimRng(SmallRng);

impl SimRng {
    /// Deterministic generator for reproducible runs and tests.
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Generator seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    /// `new(seed)` when a seed is given, otherwise `from_entropy()`.
    pub fn from_seed_opt(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::new(s),
            None => Self::from_entropy(),
        }
    }

    /// Uniform whole-minute duration in the closed interval `[min, max]`.
    ///
    /// # Panics
    /// Panics if `min > max`; `SimConfig::validate` rules that out.
    #[inline]
    pub fn minutes_between(&mut self, min: u64, max: u64) -> u64 {
        self.0.gen_range(min..=max)
    }
}
