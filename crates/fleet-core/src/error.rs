//! Framework error type.
//!
//! The simulation engine itself never fails: unknown ids are reported as
//! `None` and degenerate physics degrade to zero.  `FleetError` covers input
//! validation at the edges instead.  Sub-crates define their own error enums
//! and wrap `FleetError` as one variant.

use thiserror::Error;

/// The top-level error type for `fleet-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum FleetError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `fleet-*` crates.
pub type FleetResult<T> = Result<T, FleetError>;
