//! Simulation observer trait for progress reporting and data collection.

use fleet_charging::ChargingStations;
use fleet_core::units::Time;
use fleet_vehicle::Vehicles;

use crate::sim::RunOutcome;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// step loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_step_end(&mut self, step: u64, elapsed: Time, _dt: Time, vehicles: &Vehicles) {
///         let flying = vehicles.status_counts().flying;
///         println!("step {step}: {:.3} h, {flying} flying", elapsed.get::<hour>());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before step `step` is taken, with the time elapsed so far.
    fn on_step_start(&mut self, _step: u64, _elapsed: Time) {}

    /// Called after step `step` completes.
    ///
    /// `elapsed` includes the step; `time_step` is its length.
    fn on_step_end(
        &mut self,
        _step:      u64,
        _elapsed:   Time,
        _time_step: Time,
        _vehicles:  &Vehicles,
    ) {}

    /// Called at snapshot intervals (every `config.output_interval_steps`
    /// steps), after `on_step_end`.
    fn on_snapshot(
        &mut self,
        _step:     u64,
        _elapsed:  Time,
        _vehicles: &Vehicles,
        _stations: &ChargingStations,
    ) {}

    /// Called once when the run ends, whether or not it reached its target.
    fn on_sim_end(&mut self, _outcome: &RunOutcome) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
