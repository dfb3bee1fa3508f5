//! Driver lifecycle errors

use std::time::Duration;

use apexpilot_schemas::ConfigError;
use thiserror::Error;

/// Errors surfaced by the driver's lifecycle hooks.
///
/// The per-tick path itself is infallible; only construction and race
/// start validate their inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DriverError {
    /// The tuning configuration failed validation.
    #[error("invalid driver configuration: {0}")]
    Config(#[from] ConfigError),

    /// The car spec supplied at race start failed validation.
    #[error("invalid car spec: {0}")]
    CarSpec(#[source] ConfigError),

    /// The simulator supplied a zero-length timestep; the stuck time
    /// limit cannot be converted into a tick count.
    #[error("tick duration must be positive (got {0:?})")]
    InvalidTickDuration(Duration),
}
