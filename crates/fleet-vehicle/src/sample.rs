//! A small built-in catalog of five fictional eVTOL models.

use fleet_core::VehicleModelId;
use fleet_core::units::{hours, kilowatt_hours, kilowatt_hours_per_mile, miles_per_hour, per_hour};

use crate::catalog::VehicleModels;
use crate::model::{VehicleModel, VehicleSpecs};

/// (company, passengers, mph, kWh, charge h, faults/h, kWh/mi)
const SAMPLES: [(&str, u32, f64, f64, f64, f64, f64); 5] = [
    ("Alpha",   4, 120.0, 320.0, 0.6,  0.25, 1.6),
    ("Bravo",   5, 100.0, 100.0, 0.2,  0.1,  1.5),
    ("Charlie", 3, 160.0, 220.0, 0.8,  0.05, 2.2),
    ("Delta",   2,  90.0, 120.0, 0.62, 0.22, 0.8),
    ("Echo",    2,  30.0, 150.0, 0.3,  0.61, 5.8),
];

/// The sample catalog: Alpha, Bravo, Charlie, Delta and Echo with ids `0..5`
/// in that order.
pub fn sample_vehicle_models() -> VehicleModels {
    SAMPLES
        .iter()
        .zip(0u32..)
        .map(|(&(company, passengers, mph, kwh, charge_h, faults_h, kwh_mi), id)| {
            VehicleModel::new(
                VehicleModelId(id),
                format!("{company} Company"),
                format!("{company} Model"),
                VehicleSpecs {
                    passenger_count:    passengers,
                    cruise_speed:       miles_per_hour(mph),
                    battery_capacity:   kilowatt_hours(kwh),
                    charging_duration:  hours(charge_h),
                    mean_fault_rate:    per_hour(faults_h),
                    energy_consumption: kilowatt_hours_per_mile(kwh_mi),
                },
            )
        })
        .collect()
}
