//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, ResultsRow, StepSummaryRow, VehicleSnapshotRow};

/// Trait implemented by the CSV and text-table writers.
///
/// Errors surfaced while the simulation is running are stored by
/// [`SimOutputObserver`][crate::SimOutputObserver] and retrieved with
/// [`take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of vehicle snapshots.
    fn write_snapshots(&mut self, rows: &[VehicleSnapshotRow]) -> OutputResult<()>;

    /// Write one step summary row.
    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()>;

    /// Write the per-model results and flush them.
    ///
    /// Called once, after the run; may follow [`finish`](Self::finish).
    fn write_results(&mut self, rows: &[ResultsRow]) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
