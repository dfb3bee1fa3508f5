//! Driver tuning configuration
//!
//! Every policy constant the control laws use lives here, so a host can
//! load a tuning profile from JSON and a test can pin exact thresholds.
//! The defaults reproduce the classic tutorial-robot tuning.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for [`DriverConfig`] and car constants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A field that must be a finite positive number is not.
    #[error("{field} must be finite and positive (got {value})")]
    NonPositive {
        /// Offending field name
        field: &'static str,
        /// Rejected value
        value: f32,
    },

    /// A field left its permitted range.
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Offending field name
        field: &'static str,
        /// Rejected value
        value: f32,
        /// Lower bound (inclusive)
        min: f32,
        /// Upper bound (inclusive)
        max: f32,
    },

    /// The car spec carries no forward gears.
    #[error("gear ratio table is empty")]
    EmptyGearTable,

    /// A gear ratio is non-finite or non-positive.
    #[error("gear {gear} ratio {value} must be finite and positive")]
    InvalidGearRatio {
        /// 1-based forward gear number
        gear: usize,
        /// Rejected ratio
        value: f32,
    },
}

/// Tuning constants for the driver's control laws.
///
/// Angles are radians, speeds m/s, distances meters, times seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Heading-error magnitude above which the car counts as misaligned.
    pub stuck_angle: f32,
    /// Seconds the stuck condition must hold before recovery starts.
    pub stuck_time_limit: f32,
    /// Speed below which the car can count as stuck.
    pub stuck_speed: f32,
    /// Minimum centerline offset for the stuck condition; keeps tight but
    /// intentional turns near the middle of the track from triggering it.
    pub stuck_min_offset: f32,
    /// Gravitational acceleration used by the friction-limit equations.
    pub gravity: f32,
    /// Speed headroom above which the throttle opens fully.
    pub full_accel_margin: f32,
    /// Brake command issued when the speed planner demands braking.
    pub brake_intensity: f32,
    /// Fraction of a gear's redline top speed at which to shift up.
    pub shift_fraction: f32,
    /// Hysteresis margin for downshifts, in m/s.
    pub shift_margin: f32,
    /// Throttle applied while reversing out of a stuck position.
    pub recovery_throttle: f32,
    /// Driven-wheel slip (m/s) above which traction control engages.
    pub tcl_slip: f32,
    /// Slip range (m/s) over which traction control fades throttle to zero.
    pub tcl_range: f32,
    /// Wheel-to-car speed ratio below which the anti-lock logic releases
    /// brake pressure.
    pub abs_slip: f32,
    /// Car speed below which the anti-lock logic stays out of the way.
    pub abs_min_speed: f32,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            stuck_angle: 30.0_f32.to_radians(),
            stuck_time_limit: 2.0,
            stuck_speed: 5.0,
            stuck_min_offset: 3.0,
            gravity: 9.81,
            full_accel_margin: 1.0,
            brake_intensity: 0.8,
            shift_fraction: 0.9,
            shift_margin: 4.0,
            recovery_throttle: 0.3,
            tcl_slip: 2.0,
            tcl_range: 10.0,
            abs_slip: 0.9,
            abs_min_speed: 3.0,
        }
    }
}

impl DriverConfig {
    /// Check the configuration for values the control laws cannot work
    /// with.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positives = [
            ("stuck_angle", self.stuck_angle),
            ("stuck_time_limit", self.stuck_time_limit),
            ("stuck_speed", self.stuck_speed),
            ("stuck_min_offset", self.stuck_min_offset),
            ("gravity", self.gravity),
            ("full_accel_margin", self.full_accel_margin),
            ("shift_margin", self.shift_margin),
            ("tcl_slip", self.tcl_slip),
            ("tcl_range", self.tcl_range),
            ("abs_min_speed", self.abs_min_speed),
        ];
        for (field, value) in positives {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        let unit_ranges = [
            ("brake_intensity", self.brake_intensity),
            ("shift_fraction", self.shift_fraction),
            ("recovery_throttle", self.recovery_throttle),
            ("abs_slip", self.abs_slip),
        ];
        for (field, value) in unit_ranges {
            if !value.is_finite() || value <= 0.0 || value > 1.0 {
                return Err(ConfigError::OutOfRange {
                    field,
                    value,
                    min: 0.0,
                    max: 1.0,
                });
            }
        }

        if self.stuck_angle > core::f32::consts::PI {
            return Err(ConfigError::OutOfRange {
                field: "stuck_angle",
                value: self.stuck_angle,
                min: 0.0,
                max: core::f32::consts::PI,
            });
        }

        Ok(())
    }
}
