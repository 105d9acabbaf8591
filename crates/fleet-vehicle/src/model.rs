//! Immutable per-model physical profiles.
//!
//! A `VehicleModel` is built once, wrapped in an `Arc`, and shared by every
//! vehicle of that model for the lifetime of the run.  Negative (or NaN)
//! inputs are clamped to zero, and each derived constant degrades to zero
//! instead of dividing by zero, so every quantity a model reports is ≥ 0.

use fleet_core::VehicleModelId;
use fleet_core::units::{
    ConstZero, Energy, EnergyPerDistance, Frequency, Length, Power, Speed, Time, non_negative,
};

/// Raw physical parameters of a vehicle model, as found in a catalog.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleSpecs {
    pub passenger_count:    u32,
    pub cruise_speed:       Speed,
    pub battery_capacity:   Energy,
    /// Time to charge an empty battery to full.
    pub charging_duration:  Time,
    /// Mean number of faults per unit time, whatever the status.
    pub mean_fault_rate:    Frequency,
    /// Energy drawn from the battery per unit distance flown.
    pub energy_consumption: EnergyPerDistance,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleModel {
    id:           VehicleModelId,
    manufacturer: String,
    name:         String,
    specs:        VehicleSpecs,

    // ── Derived at construction ───────────────────────────────────────────
    charging_rate:         Power,
    transport_power_usage: Power,
    range_limit:           Length,
    endurance_limit:       Time,
}

impl VehicleModel {
    pub fn new(
        id:           VehicleModelId,
        manufacturer: impl Into<String>,
        name:         impl Into<String>,
        specs:        VehicleSpecs,
    ) -> Self {
        let specs = VehicleSpecs {
            passenger_count:    specs.passenger_count,
            cruise_speed:       non_negative(specs.cruise_speed),
            battery_capacity:   non_negative(specs.battery_capacity),
            charging_duration:  non_negative(specs.charging_duration),
            mean_fault_rate:    non_negative(specs.mean_fault_rate),
            energy_consumption: non_negative(specs.energy_consumption),
        };

        let charging_rate = if specs.charging_duration > Time::ZERO {
            specs.battery_capacity / specs.charging_duration
        } else {
            Power::ZERO
        };
        let transport_power_usage = specs.cruise_speed * specs.energy_consumption;
        let range_limit = if specs.energy_consumption > EnergyPerDistance::ZERO {
            specs.battery_capacity / specs.energy_consumption
        } else {
            Length::ZERO
        };
        let endurance_limit = if specs.cruise_speed > Speed::ZERO {
            range_limit / specs.cruise_speed
        } else {
            Time::ZERO
        };

        Self {
            id,
            manufacturer: manufacturer.into(),
            name: name.into(),
            specs,
            charging_rate,
            transport_power_usage,
            range_limit,
            endurance_limit,
        }
    }

    #[inline]
    pub fn id(&self) -> VehicleModelId {
        self.id
    }

    #[inline]
    pub fn manufacturer(&self) -> &str {
        &self.manufacturer
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The clamped input parameters.
    #[inline]
    pub fn specs(&self) -> &VehicleSpecs {
        &self.specs
    }

    #[inline]
    pub fn passenger_count(&self) -> u32 {
        self.specs.passenger_count
    }

    #[inline]
    pub fn cruise_speed(&self) -> Speed {
        self.specs.cruise_speed
    }

    #[inline]
    pub fn battery_capacity(&self) -> Energy {
        self.specs.battery_capacity
    }

    #[inline]
    pub fn charging_duration(&self) -> Time {
        self.specs.charging_duration
    }

    #[inline]
    pub fn mean_fault_rate(&self) -> Frequency {
        self.specs.mean_fault_rate
    }

    #[inline]
    pub fn energy_consumption(&self) -> EnergyPerDistance {
        self.specs.energy_consumption
    }

    /// Battery capacity / charging duration; zero for an instant charger.
    #[inline]
    pub fn charging_rate(&self) -> Power {
        self.charging_rate
    }

    /// Cruise speed × energy consumption.
    #[inline]
    pub fn transport_power_usage(&self) -> Power {
        self.transport_power_usage
    }

    /// Distance flown on a full battery.
    #[inline]
    pub fn range_limit(&self) -> Length {
        self.range_limit
    }

    /// Flight time on a full battery.
    #[inline]
    pub fn endurance_limit(&self) -> Time {
        self.endurance_limit
    }
}
