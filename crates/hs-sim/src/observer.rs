//! Simulation observer trait for progress reporting and data collection.

use hs_core::SimTime;
use hs_fleet::Fleet;
use hs_schedule::Event;

use crate::SimReport;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] and
/// [`Sim::step`][crate::Sim::step].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: load counter
///
/// ```rust,ignore
/// struct LoadCounter(u64);
///
/// impl SimObserver for LoadCounter {
///     fn on_event(&mut self, event: &Event, _fleet: &Fleet) {
///         if event.kind == EventKind::FinishUnload {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after `event` has been dispatched.
    ///
    /// `fleet` reflects the state the handler left behind, so e.g. the
    /// station an arriving truck joined is readable from its phase.
    fn on_event(&mut self, _event: &Event, _fleet: &Fleet) {}

    /// Called once with the first event past the horizon, which is dropped
    /// without being dispatched.
    fn on_discard(&mut self, _event: &Event) {}

    /// Called once after the loop halts and busy time has been truncated to
    /// the horizon.
    fn on_sim_end(&mut self, _final_time: SimTime, _report: &SimReport) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
