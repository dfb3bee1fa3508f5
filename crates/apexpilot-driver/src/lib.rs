//! ApexPilot Driving Robot
//!
//! The driver crate composes the per-tick control laws into a complete
//! racing robot behind a fixed set of lifecycle hooks:
//!
//! 1. [`Robot::track_changed`]: once per track load
//! 2. [`Robot::race_started`]: once per race; converts the stuck time
//!    limit into a tick count and resolves the drivetrain
//! 3. [`Robot::tick`]: once per simulation step; heading estimation,
//!    stuck detection, speed planning, and output mapping end to end
//! 4. [`Robot::pit_requested`] / [`Robot::race_ended`]
//!
//! One [`Driver`] instance serves one car; instances are never shared.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//! use apexpilot_driver::{Driver, Robot};
//! use apexpilot_schemas::{CarSpec, Drivetrain, Track, TrackSegment, VehicleState};
//!
//! let mut driver = Driver::new();
//! let track = Arc::new(Track::circuit(vec![TrackSegment::straight(500.0, 10.0, 1.0)]));
//! driver.track_changed(track);
//!
//! let spec = CarSpec {
//!     steer_lock: 0.366,
//!     gear_ratios: vec![10.6, 7.6, 5.9, 4.8],
//!     redline_rpm: 7500.0,
//!     front_wheel_radius: 0.33,
//!     rear_wheel_radius: 0.33,
//!     drivetrain: Drivetrain::RearWheel,
//! };
//! driver.race_started(spec, Duration::from_millis(20))?;
//!
//! let state = VehicleState {
//!     segment: 0,
//!     segment_travelled: 10.0,
//!     lateral_offset: 0.0,
//!     yaw: 0.0,
//!     track_tangent: 0.0,
//!     speed: 5.0,
//!     engine_rpm: 2500.0,
//!     gear: 1,
//!     wheel_speeds: [15.2; 4],
//! };
//! let control = driver.tick(&state);
//! assert!(control.throttle > 0.0);
//! # Ok::<(), apexpilot_driver::DriverError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod driver;
pub mod error;

pub use driver::{Driver, Robot};
pub use error::DriverError;
