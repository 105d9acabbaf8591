//! The `Sim` struct and its variable-step loop.

use std::fmt;

use fleet_charging::ChargingStations;
use fleet_core::units::{ConstZero, Time, min_time};
use fleet_core::{SimClock, SimConfig, SimRng};
use fleet_stats::AggregateStatistics;
use fleet_vehicle::{VehicleModels, Vehicles};
use tracing::{info, warn};
use uom::si::time::hour;

use crate::SimObserver;

// ── RunOutcome ────────────────────────────────────────────────────────────────

/// How a call to [`Sim::run`] ended.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunOutcome {
    /// Simulated time covered by the run.
    pub elapsed: Time,
    /// Number of steps taken.
    pub steps: u64,
    /// `true` if the run stopped early because no vehicle could make
    /// progress (a zero-length step).
    pub stalled: bool,
}

impl RunOutcome {
    #[inline]
    pub fn reached_target(&self) -> bool {
        !self.stalled
    }
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} steps, {:.4} h simulated{}",
            self.steps,
            self.elapsed.get::<hour>(),
            if self.stalled { " (stalled)" } else { "" }
        )
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// Each step:
///
/// 1. **Time step**: the largest increment no vehicle may exceed without
///    skipping its next status change, capped at the time remaining.  A
///    zero-length step ends the run as stalled.
/// 2. **Boundary pass**: [`Vehicle::update`] on every vehicle.
/// 3. **Advance pass**: [`Vehicle::perform_time_step`] on every vehicle.
/// 4. **Boundary pass** again.
/// 5. **Clock**: elapsed time += time step.
///
/// Vehicles are always visited in fleet order, so station queue order and
/// RNG draw order are fixed for a given fleet and seed.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
///
/// [`Vehicle::update`]: fleet_vehicle::Vehicle::update
/// [`Vehicle::perform_time_step`]: fleet_vehicle::Vehicle::perform_time_step
pub struct Sim {
    /// Duration, counts, seed, and snapshot interval.
    pub config: SimConfig,

    /// Elapsed simulated time and step count.
    pub clock: SimClock,

    /// The catalog the fleet was drawn from.
    pub models: VehicleModels,

    pub vehicles: Vehicles,

    pub stations: ChargingStations,

    /// The one generator every fault draw consumes.
    pub rng: SimRng,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current clock until `config.duration` is reached or the
    /// fleet stalls.
    ///
    /// Calls observer hooks at every step boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> RunOutcome {
        info!(
            vehicles   = self.vehicles.len(),
            stations   = self.stations.len(),
            duration_h = self.config.duration.get::<hour>(),
            "simulation start"
        );

        let interval = self.config.output_interval_steps;
        let mut stalled = false;
        while !self.clock.reached(self.config.duration) {
            let time_step = self.next_time_step();
            if time_step <= Time::ZERO {
                stalled = true;
                warn!(
                    elapsed_h = self.clock.elapsed.get::<hour>(),
                    target_h  = self.config.duration.get::<hour>(),
                    "no vehicle can make progress; stopping before the target duration"
                );
                break;
            }

            let step = self.clock.steps;
            observer.on_step_start(step, self.clock.elapsed);
            self.advance(time_step);
            observer.on_step_end(step, self.clock.elapsed, time_step, &self.vehicles);
            if interval > 0 && step.is_multiple_of(interval) {
                observer.on_snapshot(step, self.clock.elapsed, &self.vehicles, &self.stations);
            }
        }

        let outcome = RunOutcome {
            elapsed: self.clock.elapsed,
            steps:   self.clock.steps,
            stalled,
        };
        info!(
            elapsed_h = outcome.elapsed.get::<hour>(),
            steps     = outcome.steps,
            stalled,
            "simulation end"
        );
        observer.on_sim_end(&outcome);
        outcome
    }

    /// Take exactly one step, without observer callbacks.
    ///
    /// Returns the length of the step, or `None` if no progress is possible
    /// (target reached, or the fleet is stalled).
    pub fn step(&mut self) -> Option<Time> {
        let time_step = self.next_time_step();
        if time_step <= Time::ZERO {
            return None;
        }
        self.advance(time_step);
        Some(time_step)
    }

    /// Length of the next step: the time remaining, capped at every
    /// vehicle's time to its next status change.
    pub fn next_time_step(&self) -> Time {
        self.vehicles.iter().fold(
            self.clock.remaining(self.config.duration),
            |step, vehicle| min_time(step, vehicle.duration_to_next_status_change()),
        )
    }

    /// Every vehicle's statistics, summed per model id.
    pub fn aggregate_statistics(&self) -> AggregateStatistics {
        self.vehicles.aggregate_statistics()
    }

    // ── Step phases ───────────────────────────────────────────────────────

    fn advance(&mut self, time_step: Time) {
        self.boundary_pass();
        for vehicle in self.vehicles.iter_mut() {
            vehicle.perform_time_step(time_step, &mut self.stations, &mut self.rng);
        }
        self.boundary_pass();
        self.clock.advance(time_step);
    }

    fn boundary_pass(&mut self) {
        for vehicle in self.vehicles.iter_mut() {
            vehicle.update(&mut self.stations);
        }
    }
}
