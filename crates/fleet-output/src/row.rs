//! Plain data row types written by output backends.

use fleet_stats::{AggregateStatistics, Statistics};
use fleet_vehicle::{Vehicle, VehicleModel, VehicleModels};
use uom::si::energy::kilowatt_hour;
use uom::si::length::mile;
use uom::si::time::hour;

/// One vehicle's state at a snapshot step.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleSnapshotRow {
    pub vehicle_id:  u32,
    pub step:        u64,
    pub model_id:    u32,
    pub status:      &'static str,
    /// `u32::MAX` when the vehicle is not at a station.
    pub station_id:  u32,
    pub battery_kwh: f64,
}

impl VehicleSnapshotRow {
    pub fn new(step: u64, vehicle: &Vehicle) -> Self {
        Self {
            vehicle_id:  vehicle.id().0,
            step,
            model_id:    vehicle.model().id().0,
            status:      vehicle.status().name(),
            station_id:  vehicle.station().map_or(u32::MAX, |s| s.0),
            battery_kwh: vehicle.battery().get::<kilowatt_hour>(),
        }
    }
}

/// Fleet status counts after one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepSummaryRow {
    pub step:              u64,
    pub elapsed_hours:     f64,
    pub time_step_secs:    f64,
    pub on_standby:        u64,
    pub waiting_to_charge: u64,
    pub charging:          u64,
    pub flying:            u64,
}

/// Per-model results in catalog units (hours, miles).
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsRow {
    pub model_id:                    u32,
    pub manufacturer:                String,
    pub model:                       String,
    pub mean_flight_duration_h:      f64,
    pub mean_flight_distance_mi:     f64,
    pub mean_charging_duration_h:    f64,
    /// Passenger-miles.
    pub total_passenger_distance_mi: f64,
    pub total_faults:                u64,
}

impl ResultsRow {
    /// Names have spaces replaced by underscores so every cell is one token.
    pub fn new(model: &VehicleModel, stats: &Statistics) -> Self {
        Self {
            model_id:                    model.id().0,
            manufacturer:                model.manufacturer().replace(' ', "_"),
            model:                       model.name().replace(' ', "_"),
            mean_flight_duration_h:      stats.mean_flight_duration().get::<hour>(),
            mean_flight_distance_mi:     stats.mean_flight_distance().get::<mile>(),
            mean_charging_duration_h:    stats.mean_charging_duration().get::<hour>(),
            total_passenger_distance_mi: stats.total_flight_passenger_distance().get::<mile>(),
            total_faults:                stats.total_fault_count(),
        }
    }
}

/// One row per model present in both `aggregate` and `models`, in model id
/// order.
pub fn results_rows(models: &VehicleModels, aggregate: &AggregateStatistics) -> Vec<ResultsRow> {
    aggregate
        .iter()
        .filter_map(|(id, stats)| models.get(id).map(|model| ResultsRow::new(model, stats)))
        .collect()
}
