//! `fleet-sim`: the variable-step driver for the fleet simulation.
//!
//! # Step loop
//!
//! ```text
//! while elapsed < config.duration:
//!   ① time_step = min(remaining, min over vehicles of time to next status change)
//!                 (zero ⇒ stop, reported as stalled)
//!   ② Boundary    Vehicle::update on every vehicle
//!   ③ Advance     Vehicle::perform_time_step(time_step) on every vehicle
//!   ④ Boundary    Vehicle::update again
//!   ⑤ Clock       elapsed += time_step
//! ```
//!
//! Because every vehicle changes linearly within a status, each step is exact
//! and the loop takes at most a few steps per vehicle transition.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use fleet_core::{SimConfig, units::hours};
//! use fleet_sim::{NoopObserver, SimBuilder};
//! use fleet_vehicle::sample_vehicle_models;
//!
//! let config = SimConfig::new(hours(3.0), 20, 3, Some(42));
//! let mut sim = SimBuilder::new(config).models(sample_vehicle_models()).build()?;
//! let outcome = sim.run(&mut NoopObserver);
//! let per_model = sim.aggregate_statistics();
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{RunOutcome, Sim};
