//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `vehicle_snapshots.csv`
//! - `step_summaries.csv`
//! - `results.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, ResultsRow, StepSummaryRow, VehicleSnapshotRow};

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    results:   Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("vehicle_snapshots.csv"))?;
        snapshots.write_record(["vehicle_id", "step", "model_id", "status", "station_id", "battery_kwh"])?;

        let mut summaries = Writer::from_path(dir.join("step_summaries.csv"))?;
        summaries.write_record([
            "step",
            "elapsed_hours",
            "time_step_secs",
            "on_standby",
            "waiting_to_charge",
            "charging",
            "flying",
        ])?;

        let mut results = Writer::from_path(dir.join("results.csv"))?;
        results.write_record([
            "model_id",
            "manufacturer",
            "model",
            "mean_flight_duration_h",
            "mean_flight_distance_mi",
            "mean_charging_duration_h",
            "total_passenger_distance_mi",
            "total_faults",
        ])?;

        Ok(Self {
            snapshots,
            summaries,
            results,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[VehicleSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.vehicle_id.to_string(),
                row.step.to_string(),
                row.model_id.to_string(),
                row.status.to_owned(),
                row.station_id.to_string(),
                row.battery_kwh.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.step.to_string(),
            row.elapsed_hours.to_string(),
            row.time_step_secs.to_string(),
            row.on_standby.to_string(),
            row.waiting_to_charge.to_string(),
            row.charging.to_string(),
            row.flying.to_string(),
        ])?;
        Ok(())
    }

    fn write_results(&mut self, rows: &[ResultsRow]) -> OutputResult<()> {
        for row in rows {
            self.results.write_record(&[
                row.model_id.to_string(),
                row.manufacturer.clone(),
                row.model.clone(),
                row.mean_flight_duration_h.to_string(),
                row.mean_flight_distance_mi.to_string(),
                row.mean_charging_duration_h.to_string(),
                row.total_passenger_distance_mi.to_string(),
                row.total_faults.to_string(),
            ])?;
        }
        self.results.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        self.results.flush()?;
        Ok(())
    }
}
