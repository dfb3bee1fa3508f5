//! Control output types
//!
//! [`CarControl`] is the value the drive callback returns every tick; it
//! has no identity beyond that tick. [`PitPolicy`] is the answer to the
//! host's pit-stop callback.

use serde::{Deserialize, Serialize};

/// Gear number used for reverse.
pub const REVERSE_GEAR: i8 = -1;

/// Control commands for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarControl {
    /// Steering command normalized against the steering lock, -1.0..1.0
    /// (positive = left).
    pub steer: f32,
    /// Gear command: -1 reverse, 0 neutral, 1.. forward.
    pub gear: i8,
    /// Throttle command, 0.0..1.0.
    pub throttle: f32,
    /// Brake command, 0.0..1.0.
    pub brake: f32,
}

impl CarControl {
    /// All-zero command: neutral gear, no steering, no pedals.
    #[must_use]
    pub fn neutral() -> Self {
        Self {
            steer: 0.0,
            gear: 0,
            throttle: 0.0,
            brake: 0.0,
        }
    }
}

impl Default for CarControl {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Answer to the host's pit-stop request callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PitPolicy {
    /// Skip the stop and return to the race immediately.
    ResumeImmediately,
    /// Stop in the pit lane and wait for service.
    StopAndWait,
}
