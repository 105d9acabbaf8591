//! The per-vehicle state machine.
//!
//! # Step protocol
//!
//! The simulation driver calls, for every vehicle and in a fixed order:
//!
//! 1. [`Vehicle::update`], the boundary pass: transitions that are due *now*.
//! 2. [`Vehicle::perform_time_step`]: physics over the step, never past the
//!    vehicle's own next transition.
//! 3. [`Vehicle::update`] again, so a vehicle that ran exactly empty or
//!    exactly full changes status without waiting for the next step.
//!
//! Battery drain and charge are linear within a status, so once the step is
//! capped at [`Vehicle::duration_to_next_status_change`] the result is exact.
//! When a step lands on the transition instant, within a relative
//! [`TRANSITION_TOLERANCE`], the battery is set exactly to zero (flying) or to
//! capacity (charging).
//!
//! # Transitions (boundary pass)
//!
//! | From            | Condition             | To                 |
//! |-----------------|-----------------------|--------------------|
//! | OnStandby       | battery > 0           | Flying             |
//! | OnStandby       | battery = 0           | WaitingToCharge    |
//! | WaitingToCharge | front of station queue| Charging           |
//! | Charging        | battery ≥ capacity    | Flying             |
//! | Flying          | battery ≤ 0           | WaitingToCharge ¹  |
//!
//! ¹ Via OnStandby.  With no station registered the vehicle stays OnStandby.

use std::sync::Arc;

use fleet_charging::ChargingStations;
use fleet_core::units::{
    ConstZero, Energy, EnergyPerDistance, Length, Power, Ratio, Speed, Time, min_time,
    non_negative,
};
use fleet_core::{ChargingStationId, SimRng, VehicleId};
use fleet_stats::Statistics;
use tracing::debug;
use uom::si::ratio::ratio;

use crate::model::VehicleModel;
use crate::status::VehicleStatus;

/// Relative slack within which a step counts as reaching a transition.
/// Transition instants that agree in exact arithmetic can differ by a few ulps
/// once computed through different models' constants.
pub const TRANSITION_TOLERANCE: f64 = 1e-12;

/// `true` if `duration` reaches `target`, allowing for rounding residue.
#[inline]
fn reaches(duration: Time, target: Time) -> bool {
    duration >= target * (1.0 - TRANSITION_TOLERANCE)
}

#[derive(Clone, Debug)]
pub struct Vehicle {
    id:         VehicleId,
    model:      Arc<VehicleModel>,
    status:     VehicleStatus,
    battery:    Energy,
    statistics: Statistics,
}

impl Vehicle {
    /// A vehicle on standby with a full battery.
    pub fn new(id: VehicleId, model: Arc<VehicleModel>) -> Self {
        let battery = model.battery_capacity();
        Self::with_battery(id, model, battery)
    }

    /// A vehicle on standby with `battery` clamped to `[0, capacity]`.
    pub fn with_battery(id: VehicleId, model: Arc<VehicleModel>, battery: Energy) -> Self {
        let capacity = model.battery_capacity();
        let battery = non_negative(battery);
        Self {
            id,
            battery: if battery > capacity { capacity } else { battery },
            model,
            status: VehicleStatus::OnStandby,
            statistics: Statistics::new(),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> VehicleId {
        self.id
    }

    #[inline]
    pub fn model(&self) -> &Arc<VehicleModel> {
        &self.model
    }

    #[inline]
    pub fn status(&self) -> VehicleStatus {
        self.status
    }

    /// Station this vehicle is queued or charging at.
    #[inline]
    pub fn station(&self) -> Option<ChargingStationId> {
        self.status.station()
    }

    #[inline]
    pub fn battery(&self) -> Energy {
        self.battery
    }

    #[inline]
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    // ── Derived quantities ────────────────────────────────────────────────

    /// Distance that can still be flown on the current charge.
    pub fn range(&self) -> Length {
        let consumption = self.model.energy_consumption();
        if consumption > EnergyPerDistance::ZERO {
            self.battery / consumption
        } else {
            Length::ZERO
        }
    }

    /// Flight time left on the current charge.
    pub fn endurance(&self) -> Time {
        let speed = self.model.cruise_speed();
        if speed > Speed::ZERO {
            self.range() / speed
        } else {
            Time::ZERO
        }
    }

    /// Time to charge from the current level to capacity.  Zero when full or
    /// when the model cannot charge.
    pub fn duration_to_full_charge(&self) -> Time {
        let rate = self.model.charging_rate();
        if self.battery >= self.model.battery_capacity() || rate <= Power::ZERO {
            return Time::ZERO;
        }
        (self.model.battery_capacity() - self.battery) / rate
    }

    /// Time until this vehicle's next status change, assuming nothing else
    /// changes in between.
    pub fn duration_to_next_status_change(&self) -> Time {
        match self.status {
            VehicleStatus::OnStandby if self.battery > Energy::ZERO => self.endurance(),
            VehicleStatus::OnStandby => self.duration_to_full_charge(),
            VehicleStatus::WaitingToCharge(_) | VehicleStatus::Charging(_) => {
                self.duration_to_full_charge()
            }
            VehicleStatus::Flying => self.endurance(),
        }
    }

    // ── Step protocol ─────────────────────────────────────────────────────

    /// Apply the transition due at the current instant, if any.
    pub fn update(&mut self, stations: &mut ChargingStations) {
        match self.status {
            VehicleStatus::OnStandby => {
                if self.battery > Energy::ZERO {
                    self.takeoff();
                } else {
                    self.enqueue_if_not_already(stations);
                    if self.can_begin_charging(stations) {
                        self.begin_charging();
                    }
                }
            }
            VehicleStatus::WaitingToCharge(_) => {
                if self.can_begin_charging(stations) {
                    self.begin_charging();
                }
            }
            VehicleStatus::Charging(_) => {
                if self.battery >= self.model.battery_capacity() {
                    self.battery = self.model.battery_capacity();
                    self.dequeue(stations);
                    self.takeoff();
                }
            }
            VehicleStatus::Flying => {
                if self.battery <= Energy::ZERO {
                    self.battery = Energy::ZERO;
                    self.land();
                    self.enqueue_if_not_already(stations);
                }
            }
        }
    }

    /// Advance this vehicle by `duration`, capped at its next status change.
    pub fn perform_time_step(
        &mut self,
        duration: Time,
        stations: &mut ChargingStations,
        rng:      &mut SimRng,
    ) {
        let effective = min_time(non_negative(duration), self.duration_to_next_status_change());
        match self.status {
            VehicleStatus::OnStandby => {
                if self.battery > Energy::ZERO {
                    self.takeoff();
                    self.fly(effective, rng);
                } else {
                    self.enqueue_if_not_already(stations);
                }
            }
            VehicleStatus::WaitingToCharge(_) => {
                if self.can_begin_charging(stations) {
                    self.begin_charging();
                    self.charge(effective, rng);
                }
            }
            VehicleStatus::Charging(_) => self.charge(effective, rng),
            VehicleStatus::Flying => self.fly(effective, rng),
        }
    }

    // ── Transitions ───────────────────────────────────────────────────────

    fn set_status(&mut self, status: VehicleStatus) {
        if status != self.status {
            debug!(vehicle = %self.id, from = %self.status, to = %status, "status change");
            self.status = status;
        }
    }

    fn takeoff(&mut self) {
        self.set_status(VehicleStatus::Flying);
        self.statistics.increment_flight_count();
    }

    fn land(&mut self) {
        self.set_status(VehicleStatus::OnStandby);
    }

    /// Join the least-loaded station unless already queued somewhere.
    fn enqueue_if_not_already(&mut self, stations: &mut ChargingStations) {
        if self.station().is_some() {
            return;
        }
        if let Some(station) = stations.lowest_count_mut() {
            station.enqueue(self.id);
            let id = station.id();
            self.set_status(VehicleStatus::WaitingToCharge(id));
        }
    }

    fn can_begin_charging(&self, stations: &ChargingStations) -> bool {
        self.station()
            .and_then(|id| stations.get(id))
            .is_some_and(|station| station.is_front(self.id))
    }

    fn begin_charging(&mut self) {
        if let Some(id) = self.station() {
            self.set_status(VehicleStatus::Charging(id));
            self.statistics.increment_charging_session_count();
        }
    }

    fn dequeue(&mut self, stations: &mut ChargingStations) {
        if let Some(station) = self.station().and_then(|id| stations.get_mut(id)) {
            station.dequeue();
        }
        self.set_status(VehicleStatus::OnStandby);
    }

    // ── Physics ───────────────────────────────────────────────────────────

    fn fly(&mut self, duration: Time, rng: &mut SimRng) {
        let power = self.model.transport_power_usage();
        let reaches_empty = power > Power::ZERO && reaches(duration, self.endurance());
        let distance = self.model.cruise_speed() * duration;

        self.battery = if reaches_empty {
            Energy::ZERO
        } else {
            non_negative(self.battery - power * duration)
        };
        self.statistics.add_flight(self.model.passenger_count(), duration, distance);
        self.generate_faults(duration, rng);
    }

    fn charge(&mut self, duration: Time, rng: &mut SimRng) {
        let rate = self.model.charging_rate();
        let capacity = self.model.battery_capacity();
        let reaches_full = rate > Power::ZERO && reaches(duration, self.duration_to_full_charge());

        self.battery = if reaches_full {
            capacity
        } else {
            let charged = self.battery + rate * duration;
            if charged > capacity { capacity } else { charged }
        };
        self.statistics.add_charging_duration(duration);
        self.generate_faults(duration, rng);
    }

    /// Draw the faults of a Poisson process with the model's rate over
    /// `duration`.
    fn generate_faults(&mut self, duration: Time, rng: &mut SimRng) {
        let expected: Ratio = self.model.mean_fault_rate() * duration;
        self.statistics.add_faults(rng.poisson(expected.get::<ratio>()));
    }
}
