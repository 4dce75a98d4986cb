//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use hs_core::SimTime;
use hs_fleet::Fleet;
use hs_schedule::Event;
use hs_sim::{SimObserver, SimReport};

use crate::row::{EventRow, StationStatsRow, TruckStatsRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that streams every dispatched event to an
/// [`OutputWriter`] and writes the final statistics when the run ends.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_event(&mut self, event: &Event, _fleet: &Fleet) {
        let result = self.writer.write_event(&EventRow::from(event));
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_time: SimTime, report: &SimReport) {
        let trucks: Vec<TruckStatsRow> = report.trucks.iter().map(TruckStatsRow::from).collect();
        let result = self.writer.write_truck_stats(&trucks);
        self.store_err(result);

        let stations: Vec<StationStatsRow> =
            report.stations.iter().map(StationStatsRow::from).collect();
        let result = self.writer.write_station_stats(&stations);
        self.store_err(result);

        let result = self.writer.finish();
        self.store_err(result);
    }
}
