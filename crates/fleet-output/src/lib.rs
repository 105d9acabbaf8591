//! `fleet-output`: simulation output writers.
//!
//! | Writer          | Files / sink                                                     |
//! |-----------------|------------------------------------------------------------------|
//! | [`CsvWriter`]   | `vehicle_snapshots.csv`, `step_summaries.csv`, `results.csv`     |
//! | [`TableWriter`] | padded text table of per-model results                           |
//!
//! Both implement [`OutputWriter`] and are driven by [`SimOutputObserver`],
//! which implements `fleet_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use fleet_output::{CsvWriter, SimOutputObserver, results_rows};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs);
//! obs.write_results(&results_rows(&sim.models, &sim.aggregate_statistics()));
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod table;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{ResultsRow, StepSummaryRow, VehicleSnapshotRow, results_rows};
pub use table::{TableWriter, format_results_table};
pub use writer::OutputWriter;
