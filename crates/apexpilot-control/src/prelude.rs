//! Convenience re-exports for downstream crates and tests.

pub use crate::gear::select_gear;
pub use crate::heading::{heading_error, normalize_angle};
pub use crate::speed::{allowed_speed, braking_demand, distance_to_segment_end, throttle_demand};
pub use crate::stuck::{Posture, StuckDetector, StuckSample};
pub use crate::traction::{abs_filter, traction_filter};
