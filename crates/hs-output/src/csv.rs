//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `events.csv`
//! - `truck_stats.csv`
//! - `station_stats.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{EventRow, OutputResult, StationStatsRow, TruckStatsRow};
use crate::writer::OutputWriter;

/// Writes run output to three CSV files.
pub struct CsvWriter {
    events:   Writer<File>,
    trucks:   Writer<File>,
    stations: Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the three CSV files and write the header
    /// rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut events = Writer::from_path(dir.join("events.csv"))?;
        events.write_record(["time", "seq", "kind", "truck", "station"])?;

        let mut trucks = Writer::from_path(dir.join("truck_stats.csv"))?;
        trucks.write_record([
            "truck",
            "loads_delivered",
            "total_wait",
            "total_travel",
            "total_mining",
            "total_unload",
        ])?;

        let mut stations = Writer::from_path(dir.join("station_stats.csv"))?;
        stations.write_record(["station", "total_busy", "utilization_pct"])?;

        Ok(Self {
            events,
            trucks,
            stations,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        self.events.write_record(&[
            row.time.to_string(),
            row.seq.to_string(),
            row.kind.to_string(),
            row.truck.to_string(),
            row.station.map(|s| s.to_string()).unwrap_or_default(),
        ])?;
        Ok(())
    }

    fn write_truck_stats(&mut self, rows: &[TruckStatsRow]) -> OutputResult<()> {
        for row in rows {
            self.trucks.write_record(&[
                row.truck.to_string(),
                row.loads_delivered.to_string(),
                row.total_wait.to_string(),
                row.total_travel.to_string(),
                row.total_mining.to_string(),
                row.total_unload.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_station_stats(&mut self, rows: &[StationStatsRow]) -> OutputResult<()> {
        for row in rows {
            self.stations.write_record(&[
                row.station.to_string(),
                row.total_busy.to_string(),
                format!("{:.2}", row.utilization_pct),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        self.trucks.flush()?;
        self.stations.flush()?;
        Ok(())
    }
}
