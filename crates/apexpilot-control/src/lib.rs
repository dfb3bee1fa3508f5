//! Per-Tick Control Laws for ApexPilot
//!
//! This crate provides the pure control laws the driver composes every
//! simulation tick:
//!
//! - **Heading**: signed angular error between car heading and the local
//!   track tangent, normalized into (−π, π]
//! - **Stuck**: counter-based detector that latches a recovery posture when
//!   the car has been immobilized and misaligned for a configured time
//! - **Speed**: friction-limited cornering speed, stopping-distance
//!   lookahead, and the brake/throttle demands derived from them
//! - **Gear**: RPM-threshold up/down shifting via per-gear top speed
//! - **Traction**: slip-based throttle and brake refinements on the driven
//!   axle
//!
//! Everything here is synchronous and allocation-free: a law reads the
//! per-tick snapshot plus the tuning configuration and returns a value.
//! The only state that survives between ticks is the stuck detector's
//! counter.

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod gear;
pub mod heading;
pub mod prelude;
pub mod speed;
pub mod stuck;
pub mod traction;

pub use gear::select_gear;
pub use heading::{heading_error, normalize_angle};
pub use speed::{allowed_speed, braking_demand, distance_to_segment_end, throttle_demand};
pub use stuck::{Posture, StuckDetector, StuckSample};
pub use traction::{abs_filter, traction_filter};
