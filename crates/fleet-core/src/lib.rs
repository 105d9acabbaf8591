//! `fleet-core`: foundational types for the fleet simulation.
//!
//! This crate is a dependency of every other `fleet-*` crate.  It has no
//! `fleet-*` dependencies and few external ones (`uom`, `rand`, `rand_distr`,
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`ids`]    | `VehicleId`, `VehicleModelId`, `ChargingStationId`         |
//! | [`units`]  | `uom` quantity aliases and catalog-unit constructors       |
//! | [`time`]   | `SimClock`, `SimConfig`                                    |
//! | [`rng`]    | `SimRng` (single, explicitly threaded generator)           |
//! | [`error`]  | `FleetError`, `FleetResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids and `SimConfig`.     |

pub mod error;
pub mod ids;
pub mod rng;
pub mod time;
pub mod units;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{FleetError, FleetResult};
pub use ids::{ChargingStationId, VehicleId, VehicleModelId};
pub use rng::SimRng;
pub use time::{SimClock, SimConfig};
