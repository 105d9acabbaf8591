//! `fleet-stats`: operational statistics for vehicles and vehicle models.
//!
//! | Type                    | Role                                              |
//! |-------------------------|---------------------------------------------------|
//! | [`Statistics`]          | Counters, totals, and incrementally kept means    |
//! | [`AggregateStatistics`] | `VehicleModelId → Statistics`, summed per model   |
//!
//! Each vehicle owns one `Statistics`.  After a run the driver folds them
//! into an `AggregateStatistics`; aggregation sums totals and counts and
//! recomputes means, so it is associative and commutative.

pub mod aggregate;
pub mod statistics;


pub use aggregate::AggregateStatistics;
pub use statistics::Statistics;
