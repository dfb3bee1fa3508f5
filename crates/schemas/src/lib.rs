//! Domain types for the ApexPilot racing robot
//!
//! This crate holds the value types shared between the control-law crate and
//! the driver: the track geometry snapshot the simulator hands over at track
//! load, the per-race car constants, the per-tick vehicle state, the control
//! output struct, and the driver tuning configuration.
//!
//! All types are plain data with serde derives. The only validation logic
//! lives in [`DriverConfig::validate`] and [`CarSpec::validate`]; everything
//! else is trusted input from the simulator host.

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod control;
pub mod prelude;
pub mod track;
pub mod vehicle;

pub use config::{ConfigError, DriverConfig};
pub use control::{CarControl, PitPolicy};
pub use track::{CurveDirection, SegmentShape, Track, TrackSegment};
pub use vehicle::{CarSpec, Drivetrain, VehicleState, WHEEL_COUNT};
