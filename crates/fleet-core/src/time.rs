//! Simulation time model.
//!
//! # Design
//!
//! Time is continuous.  The driver advances in *variable-size* steps, each
//! chosen so that no vehicle skips past its next status change.  Because every
//! per-vehicle quantity evolves linearly within a status, this is exact: there
//! is no fixed Δt and no truncation error.
//!
//! `SimClock` records how much simulated time has elapsed and how many steps
//! it took to get there.  `SimConfig` carries the inputs handed over by the
//! settings loader.

use std::fmt;

use uom::si::time::{hour, second};

use crate::error::{FleetError, FleetResult};
use crate::units::{ConstZero, Time, non_negative};

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Elapsed simulated time and the number of steps taken so far.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimClock {
    /// Total simulated time since the start of the run.
    pub elapsed: Time,
    /// Number of completed steps.
    pub steps: u64,
}

impl SimClock {
    /// A clock at time zero.
    pub fn new() -> Self {
        Self { elapsed: Time::ZERO, steps: 0 }
    }

    /// Advance the clock by one step of length `time_step`.
    #[inline]
    pub fn advance(&mut self, time_step: Time) {
        self.elapsed += time_step;
        self.steps += 1;
    }

    /// Time left until `duration`, never negative.
    #[inline]
    pub fn remaining(&self, duration: Time) -> Time {
        non_negative(duration - self.elapsed)
    }

    /// `true` once the clock has reached `duration`.
    #[inline]
    pub fn reached(&self, duration: Time) -> bool {
        self.elapsed >= duration
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "step {} (t = {:.4} h)",
            self.steps,
            self.elapsed.get::<hour>()
        )
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Produced by the application's settings loader (command line, file, …) and
/// passed to the simulation builder.  All counts are unsigned and the duration
/// is clamped by [`SimConfig::new`], so the engine only ever sees validated,
/// non-negative inputs.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Target simulated duration of the run.
    pub duration: Time,

    /// Number of vehicles drawn from the model catalog.
    pub vehicle_count: usize,

    /// Number of charging stations, registered with ids `0..count`.
    pub charging_station_count: usize,

    /// RNG seed.  `None` seeds from OS entropy (non-reproducible).
    pub seed: Option<u64>,

    /// Report a snapshot every N steps.  0 disables snapshots.
    pub output_interval_steps: u64,
}

impl SimConfig {
    /// Build a configuration, clamping a negative or NaN duration to zero.
    pub fn new(
        duration:               Time,
        vehicle_count:          usize,
        charging_station_count: usize,
        seed:                   Option<u64>,
    ) -> Self {
        Self {
            duration: non_negative(duration),
            vehicle_count,
            charging_station_count,
            seed,
            output_interval_steps: 1,
        }
    }

    /// Set the snapshot interval.
    pub fn with_output_interval(mut self, steps: u64) -> Self {
        self.output_interval_steps = steps;
        self
    }

    /// Reject a configuration the engine cannot run: a negative or NaN
    /// duration, which [`SimConfig::new`] would have clamped but a
    /// hand-assembled struct may still carry.
    pub fn validate(&self) -> FleetResult<()> {
        if self.duration.is_nan() || self.duration < Time::ZERO {
            return Err(FleetError::Config(format!(
                "duration must be non-negative, got {} s",
                self.duration.get::<second>()
            )));
        }
        Ok(())
    }
}
