//! Car constants and per-tick vehicle state
//!
//! [`CarSpec`] carries the values that stay fixed for a whole race (gear
//! ratios, wheel radii, steering lock, drivetrain layout); the simulator
//! supplies it once at race start. [`VehicleState`] is the per-tick
//! snapshot the drive callback receives; everything in it is recomputed by
//! the host every simulation step.

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Number of wheels in the per-wheel telemetry arrays.
pub const WHEEL_COUNT: usize = 4;

/// Wheel array indices: front-left, front-right, rear-left, rear-right.
const FRONT_LEFT: usize = 0;
const FRONT_RIGHT: usize = 1;
const REAR_LEFT: usize = 2;
const REAR_RIGHT: usize = 3;

/// Drivetrain layout, resolved once at race start.
///
/// Selects which axle's wheels are driven, and therefore which wheel
/// radius and wheel speeds feed the throttle, gear, and slip computations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Drivetrain {
    /// Front-wheel drive
    FrontWheel,
    /// Rear-wheel drive
    #[default]
    RearWheel,
    /// All-wheel drive
    FourWheel,
}

/// Per-race car constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarSpec {
    /// Maximum steering angle in radians; steer commands are normalized
    /// against this lock.
    pub steer_lock: f32,
    /// Forward gear ratios, index 0 = first gear. Engine speed =
    /// wheel speed * ratio.
    pub gear_ratios: Vec<f32>,
    /// Engine redline in revolutions per minute.
    pub redline_rpm: f32,
    /// Front wheel radius in meters.
    pub front_wheel_radius: f32,
    /// Rear wheel radius in meters.
    pub rear_wheel_radius: f32,
    /// Drivetrain layout.
    pub drivetrain: Drivetrain,
}

impl CarSpec {
    /// Highest forward gear number.
    #[must_use]
    pub fn top_gear(&self) -> i8 {
        self.gear_ratios.len().min(i8::MAX as usize) as i8
    }

    /// Ratio for a forward gear (1-based), or `None` for neutral, reverse,
    /// or a gear beyond the table.
    #[must_use]
    pub fn ratio(&self, gear: i8) -> Option<f32> {
        if gear < 1 {
            return None;
        }
        self.gear_ratios.get(gear as usize - 1).copied()
    }

    /// Engine redline in radians per second.
    #[must_use]
    pub fn redline_rad_s(&self) -> f32 {
        self.redline_rpm * core::f32::consts::TAU / 60.0
    }

    /// Radius of the driven axle's wheels in meters.
    ///
    /// Four-wheel drive averages the two axles.
    #[must_use]
    pub fn driven_wheel_radius(&self) -> f32 {
        match self.drivetrain {
            Drivetrain::FrontWheel => self.front_wheel_radius,
            Drivetrain::RearWheel => self.rear_wheel_radius,
            Drivetrain::FourWheel => 0.5 * (self.front_wheel_radius + self.rear_wheel_radius),
        }
    }

    /// Mean angular speed of the driven wheels in rad/s.
    #[must_use]
    pub fn driven_wheel_speed(&self, wheel_speeds: &[f32; WHEEL_COUNT]) -> f32 {
        match self.drivetrain {
            Drivetrain::FrontWheel => {
                0.5 * (wheel_speeds[FRONT_LEFT] + wheel_speeds[FRONT_RIGHT])
            }
            Drivetrain::RearWheel => 0.5 * (wheel_speeds[REAR_LEFT] + wheel_speeds[REAR_RIGHT]),
            Drivetrain::FourWheel => 0.25 * wheel_speeds.iter().sum::<f32>(),
        }
    }

    /// Mean linear speed of all four wheels at the contact patch, in m/s.
    ///
    /// Uses the axle radius matching each wheel pair.
    #[must_use]
    pub fn mean_wheel_linear_speed(&self, wheel_speeds: &[f32; WHEEL_COUNT]) -> f32 {
        let front = 0.5 * (wheel_speeds[FRONT_LEFT] + wheel_speeds[FRONT_RIGHT]);
        let rear = 0.5 * (wheel_speeds[REAR_LEFT] + wheel_speeds[REAR_RIGHT]);
        0.5 * (front * self.front_wheel_radius + rear * self.rear_wheel_radius)
    }

    /// Check the spec for values the control laws cannot work with.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the offending field when the gear
    /// table is empty or any constant is non-finite or non-positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gear_ratios.is_empty() {
            return Err(ConfigError::EmptyGearTable);
        }
        for (i, ratio) in self.gear_ratios.iter().enumerate() {
            if !ratio.is_finite() || *ratio <= 0.0 {
                return Err(ConfigError::InvalidGearRatio {
                    gear: i + 1,
                    value: *ratio,
                });
            }
        }
        let positives = [
            ("steer_lock", self.steer_lock),
            ("redline_rpm", self.redline_rpm),
            ("front_wheel_radius", self.front_wheel_radius),
            ("rear_wheel_radius", self.rear_wheel_radius),
        ];
        for (field, value) in positives {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        Ok(())
    }
}

/// Per-tick vehicle snapshot supplied by the simulator.
///
/// All fields are recomputed by the host every tick; the robot never
/// writes back into this struct.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehicleState {
    /// Index of the segment the car is currently on.
    pub segment: usize,
    /// Distance travelled into the current segment, in meters along the
    /// centerline path.
    pub segment_travelled: f32,
    /// Signed lateral offset from the track centerline in meters
    /// (positive = left of center).
    pub lateral_offset: f32,
    /// Car heading (yaw) in radians.
    pub yaw: f32,
    /// Local track tangent angle at the car's position, in radians.
    pub track_tangent: f32,
    /// Longitudinal speed in m/s.
    pub speed: f32,
    /// Current engine speed in revolutions per minute.
    pub engine_rpm: f32,
    /// Current gear: -1 reverse, 0 neutral, 1.. forward.
    pub gear: i8,
    /// Per-wheel angular speeds in rad/s (FL, FR, RL, RR).
    pub wheel_speeds: [f32; WHEEL_COUNT],
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn spec() -> CarSpec {
        CarSpec {
            steer_lock: 0.366,
            gear_ratios: vec![3.0, 2.0, 1.5, 1.2, 1.0],
            redline_rpm: 7000.0,
            front_wheel_radius: 0.3,
            rear_wheel_radius: 0.35,
            drivetrain: Drivetrain::RearWheel,
        }
    }

    #[test]
    fn test_ratio_lookup() {
        let spec = spec();
        assert_eq!(spec.ratio(1), Some(3.0));
        assert_eq!(spec.ratio(5), Some(1.0));
        assert_eq!(spec.ratio(6), None);
        assert_eq!(spec.ratio(0), None);
        assert_eq!(spec.ratio(-1), None);
        assert_eq!(spec.top_gear(), 5);
    }

    #[test]
    fn test_redline_conversion() {
        let spec = spec();
        // 7000 rpm = 7000 * 2pi / 60 rad/s
        assert_relative_eq!(spec.redline_rad_s(), 733.038, epsilon = 1e-2);
    }

    #[test]
    fn test_driven_wheel_selection() {
        let mut spec = spec();
        let wheels = [10.0, 10.0, 20.0, 20.0];

        assert_relative_eq!(spec.driven_wheel_radius(), 0.35);
        assert_relative_eq!(spec.driven_wheel_speed(&wheels), 20.0);

        spec.drivetrain = Drivetrain::FrontWheel;
        assert_relative_eq!(spec.driven_wheel_radius(), 0.3);
        assert_relative_eq!(spec.driven_wheel_speed(&wheels), 10.0);

        spec.drivetrain = Drivetrain::FourWheel;
        assert_relative_eq!(spec.driven_wheel_radius(), 0.325);
        assert_relative_eq!(spec.driven_wheel_speed(&wheels), 15.0);
    }

    #[test]
    fn test_validate_ok() {
        assert!(spec().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_gear_table() {
        let mut spec = spec();
        spec.gear_ratios.clear();
        assert!(matches!(spec.validate(), Err(ConfigError::EmptyGearTable)));
    }

    #[test]
    fn test_validate_bad_ratio() {
        let mut spec = spec();
        spec.gear_ratios[2] = -1.0;
        assert!(matches!(
            spec.validate(),
            Err(ConfigError::InvalidGearRatio { gear: 3, .. })
        ));
    }

    #[test]
    fn test_validate_non_positive_constant() {
        let mut spec = spec();
        spec.steer_lock = 0.0;
        assert!(matches!(
            spec.validate(),
            Err(ConfigError::NonPositive {
                field: "steer_lock",
                ..
            })
        ));
    }
}
