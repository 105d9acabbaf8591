//! `fleet-vehicle`: vehicle models, the vehicle state machine, and the fleet.
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`model`]     | `VehicleModel`, `VehicleSpecs` (derived constants)        |
//! | [`catalog`]   | `VehicleModels` (insertion-ordered, random draw)          |
//! | [`sample`]    | `sample_vehicle_models()`                                 |
//! | [`status`]    | `VehicleStatus`, `StatusCounts`                           |
//! | [`vehicle`]   | `Vehicle` (update / perform_time_step)                    |
//! | [`store`]     | `Vehicles` (fleet registry, per-model aggregation)        |
//!
//! Vehicles share their model through an `Arc<VehicleModel>`.  The charging
//! station registry and the RNG are passed into every call that needs them;
//! nothing here holds global state.

pub mod catalog;
pub mod model;
pub mod sample;
pub mod status;
pub mod store;
pub mod vehicle;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use catalog::VehicleModels;
pub use model::{VehicleModel, VehicleSpecs};
pub use sample::sample_vehicle_models;
pub use status::{StatusCounts, VehicleStatus};
pub use store::Vehicles;
pub use vehicle::Vehicle;
