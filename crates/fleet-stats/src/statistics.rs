//! Per-entity operational statistics.
//!
//! # Invariants
//!
//! - Means are recomputed on every mutating call, so they always equal
//!   total / count.  A zero count yields a zero mean, never a division by zero.
//! - Counts only ever increase.
//! - Passenger-distance is accumulated per flight segment
//!   (Σ distance × passengers), since passenger counts may vary per flight.

use fleet_core::units::{ConstZero, Length, Time};

/// Statistics of a single vehicle, or of a collection of vehicles once
/// [aggregated](Statistics::aggregate).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Statistics {
    total_flight_count:              u64,
    total_flight_duration:           Time,
    total_flight_distance:           Length,
    total_flight_passenger_distance: Length,
    mean_flight_duration:            Time,
    mean_flight_distance:            Length,
    total_charging_session_count:    u64,
    total_charging_duration:         Time,
    mean_charging_duration:          Time,
    total_fault_count:               u64,
}

impl Statistics {
    /// All counts and totals at zero.
    pub fn new() -> Self {
        Self {
            total_flight_count:              0,
            total_flight_duration:           Time::ZERO,
            total_flight_distance:           Length::ZERO,
            total_flight_passenger_distance: Length::ZERO,
            mean_flight_duration:            Time::ZERO,
            mean_flight_distance:            Length::ZERO,
            total_charging_session_count:    0,
            total_charging_duration:         Time::ZERO,
            mean_charging_duration:          Time::ZERO,
            total_fault_count:               0,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn total_flight_count(&self) -> u64 {
        self.total_flight_count
    }

    #[inline]
    pub fn total_flight_duration(&self) -> Time {
        self.total_flight_duration
    }

    #[inline]
    pub fn total_flight_distance(&self) -> Length {
        self.total_flight_distance
    }

    /// Σ (flight distance × passengers) over every flight segment.
    #[inline]
    pub fn total_flight_passenger_distance(&self) -> Length {
        self.total_flight_passenger_distance
    }

    #[inline]
    pub fn mean_flight_duration(&self) -> Time {
        self.mean_flight_duration
    }

    #[inline]
    pub fn mean_flight_distance(&self) -> Length {
        self.mean_flight_distance
    }

    #[inline]
    pub fn total_charging_session_count(&self) -> u64 {
        self.total_charging_session_count
    }

    #[inline]
    pub fn total_charging_duration(&self) -> Time {
        self.total_charging_duration
    }

    #[inline]
    pub fn mean_charging_duration(&self) -> Time {
        self.mean_charging_duration
    }

    #[inline]
    pub fn total_fault_count(&self) -> u64 {
        self.total_fault_count
    }

    // ── Mutations ─────────────────────────────────────────────────────────

    /// Open a new flight.
    pub fn increment_flight_count(&mut self) {
        self.total_flight_count += 1;
        self.update_flight_means();
    }

    /// Credit `duration` and `distance` flown with `passengers` aboard to the
    /// currently open flight.
    pub fn add_flight(&mut self, passengers: u32, duration: Time, distance: Length) {
        self.total_flight_duration += duration;
        self.total_flight_distance += distance;
        self.total_flight_passenger_distance += distance * f64::from(passengers);
        self.update_flight_means();
    }

    /// Open a new charging session.
    pub fn increment_charging_session_count(&mut self) {
        self.total_charging_session_count += 1;
        self.update_charging_mean();
    }

    /// Credit `duration` to the currently open charging session.
    pub fn add_charging_duration(&mut self, duration: Time) {
        self.total_charging_duration += duration;
        self.update_charging_mean();
    }

    pub fn add_faults(&mut self, faults: u64) {
        self.total_fault_count += faults;
    }

    /// Fold `other` into `self`: totals and counts are summed and the means
    /// recomputed from them.  Means are never averaged.
    pub fn aggregate(&mut self, other: &Statistics) {
        self.total_flight_count              += other.total_flight_count;
        self.total_flight_duration           += other.total_flight_duration;
        self.total_flight_distance           += other.total_flight_distance;
        self.total_flight_passenger_distance += other.total_flight_passenger_distance;
        self.total_charging_session_count    += other.total_charging_session_count;
        self.total_charging_duration         += other.total_charging_duration;
        self.total_fault_count               += other.total_fault_count;
        self.update_flight_means();
        self.update_charging_mean();
    }

    // ── Derived means ─────────────────────────────────────────────────────

    fn update_flight_means(&mut self) {
        if self.total_flight_count == 0 {
            self.mean_flight_duration = Time::ZERO;
            self.mean_flight_distance = Length::ZERO;
        } else {
            let count = self.total_flight_count as f64;
            self.mean_flight_duration = self.total_flight_duration / count;
            self.mean_flight_distance = self.total_flight_distance / count;
        }
    }

    fn update_charging_mean(&mut self) {
        self.mean_charging_duration = if self.total_charging_session_count == 0 {
            Time::ZERO
        } else {
            self.total_charging_duration / self.total_charging_session_count as f64
        };
    }
}

impl Default for Statistics {
    fn default() -> Self {
        Self::new()
    }
}
