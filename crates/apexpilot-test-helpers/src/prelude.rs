//! Convenience re-exports for test code.

pub use crate::fixtures::{CarSpecFixture, TrackBuilder, VehicleStateFixture};
pub use crate::must::{must, must_some};
