//! `fleet-charging`: charging-station queues and their registry.
//!
//! | Type                 | Role                                                   |
//! |----------------------|--------------------------------------------------------|
//! | [`ChargingStation`]  | FIFO admission queue; the front vehicle is charging    |
//! | [`ChargingStations`] | Id-ordered registry with least-loaded lookup           |
//!
//! Vehicles never hold a reference to a station, only its
//! [`ChargingStationId`](fleet_core::ChargingStationId).  The registry is passed
//! explicitly into every vehicle operation that enqueues or dequeues.

pub mod registry;
pub mod station;


pub use registry::ChargingStations;
pub use station::ChargingStation;
