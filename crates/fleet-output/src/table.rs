//! Whitespace-aligned text table of per-model results.
//!
//! ```text
//! #Manufacturer    Model          MeanFlightDuration  ...  TotalFaults
//! Alpha_Company    Alpha_Model    1.6667 hr           ...  3
//! ```
//!
//! Every column is left-aligned and padded to its widest cell; columns are
//! separated by two spaces.  Names contain no spaces, so the table can be
//! split on whitespace.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::writer::OutputWriter;
use crate::{OutputResult, ResultsRow, StepSummaryRow, VehicleSnapshotRow};

const HEADER: [&str; 7] = [
    "#Manufacturer",
    "Model",
    "MeanFlightDuration",
    "MeanFlightDistance",
    "MeanChargingDuration",
    "TotalFlightPassengerDistance",
    "TotalFaults",
];

const SEPARATOR: &str = "  ";

fn cells(row: &ResultsRow) -> [String; 7] {
    [
        row.manufacturer.clone(),
        row.model.clone(),
        format!("{:.6} hr", row.mean_flight_duration_h),
        format!("{:.6} mi", row.mean_flight_distance_mi),
        format!("{:.6} hr", row.mean_charging_duration_h),
        format!("{:.6} mi", row.total_passenger_distance_mi),
        row.total_faults.to_string(),
    ]
}

/// Render `rows` as a padded table, header first, one line per row.
pub fn format_results_table(rows: &[ResultsRow]) -> String {
    let body: Vec<[String; 7]> = rows.iter().map(cells).collect();

    let mut widths = HEADER.map(str::len);
    for line in &body {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    let header = HEADER.map(str::to_owned);
    for line in std::iter::once(&header).chain(&body) {
        let last = line.len() - 1;
        for (i, (cell, width)) in line.iter().zip(widths).enumerate() {
            if i == last {
                out.push_str(cell);
            } else {
                out.push_str(&format!("{cell:<width$}{SEPARATOR}"));
            }
        }
        out.push('\n');
    }
    out
}

/// Writes the results table to any `Write` sink.  Snapshots and step
/// summaries are not part of the table and are ignored.
pub struct TableWriter<W: Write> {
    out:      W,
    finished: bool,
}

impl TableWriter<BufWriter<File>> {
    /// Create (or truncate) the results file at `path`.
    pub fn create(path: &Path) -> OutputResult<Self> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> TableWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, finished: false }
    }

    /// Unwrap the inner sink (e.g. to inspect an in-memory buffer).
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutputWriter for TableWriter<W> {
    fn write_snapshots(&mut self, _rows: &[VehicleSnapshotRow]) -> OutputResult<()> {
        Ok(())
    }

    fn write_step_summary(&mut self, _row: &StepSummaryRow) -> OutputResult<()> {
        Ok(())
    }

    fn write_results(&mut self, rows: &[ResultsRow]) -> OutputResult<()> {
        self.out.write_all(format_results_table(rows).as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
