//! `hs-output` — writers for haul_sim run output.
//!
//! | Type                  | Produces                                                 |
//! |-----------------------|----------------------------------------------------------|
//! | [`CsvWriter`]         | `events.csv`, `truck_stats.csv`, `station_stats.csv`     |
//! | [`TextReport`]        | the human-readable statistics block for one run          |
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `hs_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use hs_output::{CsvWriter, SimOutputObserver, TextReport};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! println!("{}", TextReport::new("10 trucks, 3 stations", &sim.report()));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod text;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{EventRow, StationStatsRow, TruckStatsRow};
pub use text::TextReport;
pub use writer::OutputWriter;
