//! The `OutputWriter` trait implemented by output backends.

use crate::{EventRow, OutputResult, StationStatsRow, TruckStatsRow};

/// Sink for dispatched events and end-of-run statistics.
///
/// Errors never reach the simulation: [`SimOutputObserver`] stores the first
/// one, retrievable with [`take_error`].
///
/// [`SimOutputObserver`]: crate::SimOutputObserver
/// [`take_error`]: crate::SimOutputObserver::take_error
pub trait OutputWriter {
    /// Write one dispatched event.
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()>;

    /// Write the final per-truck counters.
    fn write_truck_stats(&mut self, rows: &[TruckStatsRow]) -> OutputResult<()>;

    /// Write the final per-station busy time and utilization.
    fn write_station_stats(&mut self, rows: &[StationStatsRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
