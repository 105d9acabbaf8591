//! Vehicle operating status.

use std::fmt;

use fleet_core::ChargingStationId;

/// What a vehicle is doing right now.
///
/// The station a vehicle is queued at only exists in the two charging-related
/// variants, so "waiting without a station" cannot be represented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VehicleStatus {
    /// Grounded, not queued anywhere.
    #[default]
    OnStandby,
    /// Queued at a station behind the vehicle that is charging.
    WaitingToCharge(ChargingStationId),
    /// At the front of a station's queue, charging.
    Charging(ChargingStationId),
    Flying,
}

impl VehicleStatus {
    /// The station this vehicle is queued or charging at.
    #[inline]
    pub fn station(self) -> Option<ChargingStationId> {
        match self {
            VehicleStatus::WaitingToCharge(id) | VehicleStatus::Charging(id) => Some(id),
            VehicleStatus::OnStandby | VehicleStatus::Flying => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            VehicleStatus::OnStandby => "on_standby",
            VehicleStatus::WaitingToCharge(_) => "waiting_to_charge",
            VehicleStatus::Charging(_) => "charging",
            VehicleStatus::Flying => "flying",
        }
    }
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.station() {
            Some(station) => write!(f, "{}@{}", self.name(), station),
            None => f.write_str(self.name()),
        }
    }
}

/// Number of vehicles in each status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub on_standby:        usize,
    pub waiting_to_charge: usize,
    pub charging:          usize,
    pub flying:            usize,
}

impl StatusCounts {
    pub fn record(&mut self, status: VehicleStatus) {
        match status {
            VehicleStatus::OnStandby => self.on_standby += 1,
            VehicleStatus::WaitingToCharge(_) => self.waiting_to_charge += 1,
            VehicleStatus::Charging(_) => self.charging += 1,
            VehicleStatus::Flying => self.flying += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.on_standby + self.waiting_to_charge + self.charging + self.flying
    }
}
