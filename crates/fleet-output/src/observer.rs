//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use fleet_charging::ChargingStations;
use fleet_core::units::Time;
use fleet_sim::{RunOutcome, SimObserver};
use fleet_vehicle::Vehicles;
use uom::si::time::{hour, second};

use crate::row::{ResultsRow, StepSummaryRow, VehicleSnapshotRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes step summaries and vehicle snapshots to any
/// [`OutputWriter`] backend, and the final results on request.
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

    /// Write the per-model results once the run is over.
    pub fn write_results(&mut self, rows: &[ResultsRow]) {
        let result = self.writer.write_results(rows);
        self.store_err(result);
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
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
    fn on_step_end(&mut self, step: u64, elapsed: Time, time_step: Time, vehicles: &Vehicles) {
        let counts = vehicles.status_counts();
        let row = StepSummaryRow {
            step,
            elapsed_hours:     elapsed.get::<hour>(),
            time_step_secs:    time_step.get::<second>(),
            on_standby:        counts.on_standby as u64,
            waiting_to_charge: counts.waiting_to_charge as u64,
            charging:          counts.charging as u64,
            flying:            counts.flying as u64,
        };
        let result = self.writer.write_step_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(
        &mut self,
        step:      u64,
        _elapsed:  Time,
        vehicles:  &Vehicles,
        _stations: &ChargingStations,
    ) {
        let rows: Vec<VehicleSnapshotRow> = vehicles
            .iter()
            .map(|v| VehicleSnapshotRow::new(step, v))
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _outcome: &RunOutcome) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
