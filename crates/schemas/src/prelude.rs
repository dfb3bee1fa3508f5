//! Convenience re-exports for downstream crates.

pub use crate::config::{ConfigError, DriverConfig};
pub use crate::control::{CarControl, PitPolicy};
pub use crate::track::{CurveDirection, SegmentShape, Track, TrackSegment};
pub use crate::vehicle::{CarSpec, Drivetrain, VehicleState, WHEEL_COUNT};
