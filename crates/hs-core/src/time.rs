//! Virtual time model.
//!
//! # Design
//!
//! Time is a whole number of simulated minutes since the start of the run.
//! Every configured duration (mining bounds, travel, unload, horizon) is an
//! integer minute count, so all schedule arithmetic is exact and equal
//! timestamps compare equal without any epsilon.
//!
//! The clock never ticks on its own: the run loop jumps it forward to the
//! timestamp of each event it pops.

use std::fmt;

// ── SimTime ──────────────────────────────────────────────────────────────────

/// An absolute point in virtual time, in minutes.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub u64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0);

    /// Minutes as a plain integer.
    #[inline]
    pub fn minutes(self) -> u64 {
        self.0
    }

    /// Minutes elapsed from `earlier` to `self`, or 0 if `earlier` is later.
    #[inline]
    pub fn saturating_since(self, earlier: SimTime) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: u64) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

impl std::ops::Sub for SimTime {
    type Output = u64;

    /// # Panics
    /// Panics in debug mode if `rhs > self`.
    #[inline]
    fn sub(self, rhs: SimTime) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={}min", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The simulation's single "current time" scalar.
///
/// Only the run loop advances it, and only forwards.
#[derive(Clone, Debug, Default)]
pub struct SimClock {
    now: SimTime,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Jump to `t`.
    ///
    /// # Panics
    /// Panics in debug mode if `t` is earlier than the current time.
    #[inline]
    pub fn advance_to(&mut self, t: SimTime) {
        debug_assert!(t >= self.now, "clock moved backwards: {} -> {}", self.now, t);
        self.now = t;
    }

    /// Break the current time into (day, hour, minute) for log lines.
    pub fn elapsed_dhm(&self) -> (u64, u32, u32) {
        let total = self.now.0;
        let days = total / 1_440;
        let hours = ((total % 1_440) / 60) as u32;
        let minutes = (total % 60) as u32;
        (days, hours, minutes)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (d, h, m) = self.elapsed_dhm();
        write!(f, "{} (day {} {:02}:{:02})", self.now, d, h, m)
    }
}
