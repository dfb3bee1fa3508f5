//! Traction Refinements
//!
//! Slip-based corrections applied after the speed planner: a traction
//! control that bleeds throttle when the driven wheels spin up, and an
//! anti-lock stage that releases brake pressure when the wheels slow down
//! faster than the car. Which wheels count as driven comes from the
//! drivetrain layout resolved once at race start.

use apexpilot_schemas::{CarSpec, DriverConfig, VehicleState};

/// Reduce a throttle demand when the driven wheels are spinning.
///
/// Slip is the difference between the driven wheels' contact-patch speed
/// and the car's longitudinal speed. Above `tcl_slip` the throttle is
/// reduced proportionally over `tcl_range`, never below zero.
#[inline]
#[must_use]
pub fn traction_filter(
    throttle: f32,
    state: &VehicleState,
    spec: &CarSpec,
    cfg: &DriverConfig,
) -> f32 {
    if throttle <= 0.0 {
        return throttle;
    }
    let driven = spec.driven_wheel_speed(&state.wheel_speeds) * spec.driven_wheel_radius();
    let slip = driven - state.speed;
    if slip <= cfg.tcl_slip {
        return throttle;
    }
    (throttle - (slip - cfg.tcl_slip) / cfg.tcl_range).max(0.0)
}

/// Release brake pressure when the wheels are locking.
///
/// Below `abs_min_speed` the stage stays out of the way (the ratio is
/// meaningless near standstill). Otherwise the mean wheel-to-car speed
/// ratio below `abs_slip` scales the brake command down proportionally.
#[inline]
#[must_use]
pub fn abs_filter(brake: f32, state: &VehicleState, spec: &CarSpec, cfg: &DriverConfig) -> f32 {
    if brake <= 0.0 || state.speed < cfg.abs_min_speed {
        return brake;
    }
    let ratio = spec.mean_wheel_linear_speed(&state.wheel_speeds) / state.speed;
    if ratio < cfg.abs_slip {
        brake * (ratio / cfg.abs_slip).max(0.0)
    } else {
        brake
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apexpilot_test_helpers::fixtures::{CarSpecFixture, VehicleStateFixture};
    use approx::assert_relative_eq;

    /// Wheel angular speed matching a contact-patch speed for the fixture
    /// car's 0.33 m wheels.
    fn wheel_rad_s(linear: f32) -> f32 {
        linear / 0.33
    }

    #[test]
    fn test_no_slip_passes_throttle_through() {
        let spec = CarSpecFixture::club_racer();
        let cfg = DriverConfig::default();
        let w = wheel_rad_s(20.0);
        let state = VehicleStateFixture::new()
            .speed(20.0)
            .wheel_speeds([w, w, w, w])
            .build();

        assert_relative_eq!(traction_filter(0.8, &state, &spec, &cfg), 0.8);
    }

    #[test]
    fn test_wheelspin_bleeds_throttle() {
        let spec = CarSpecFixture::club_racer();
        let cfg = DriverConfig::default();
        // Rear wheels 7 m/s faster than the car: 5 m/s over the slip
        // threshold, half the fade range.
        let state = VehicleStateFixture::new()
            .speed(10.0)
            .wheel_speeds([
                wheel_rad_s(10.0),
                wheel_rad_s(10.0),
                wheel_rad_s(17.0),
                wheel_rad_s(17.0),
            ])
            .build();

        let throttle = traction_filter(1.0, &state, &spec, &cfg);
        assert_relative_eq!(throttle, 0.5, epsilon = 1e-3);
    }

    #[test]
    fn test_heavy_wheelspin_floors_at_zero() {
        let spec = CarSpecFixture::club_racer();
        let cfg = DriverConfig::default();
        let state = VehicleStateFixture::new()
            .speed(5.0)
            .wheel_speeds([
                wheel_rad_s(5.0),
                wheel_rad_s(5.0),
                wheel_rad_s(40.0),
                wheel_rad_s(40.0),
            ])
            .build();

        assert_relative_eq!(traction_filter(0.6, &state, &spec, &cfg), 0.0);
    }

    #[test]
    fn test_undriven_axle_spin_ignored() {
        // Front wheels spinning on a rear-drive car do not trip the TCL
        let spec = CarSpecFixture::club_racer();
        let cfg = DriverConfig::default();
        let state = VehicleStateFixture::new()
            .speed(10.0)
            .wheel_speeds([
                wheel_rad_s(30.0),
                wheel_rad_s(30.0),
                wheel_rad_s(10.0),
                wheel_rad_s(10.0),
            ])
            .build();

        assert_relative_eq!(traction_filter(0.9, &state, &spec, &cfg), 0.9);
    }

    #[test]
    fn test_abs_inactive_when_rolling_free() {
        let spec = CarSpecFixture::club_racer();
        let cfg = DriverConfig::default();
        let w = wheel_rad_s(30.0);
        let state = VehicleStateFixture::new()
            .speed(30.0)
            .wheel_speeds([w, w, w, w])
            .build();

        assert_relative_eq!(abs_filter(0.8, &state, &spec, &cfg), 0.8);
    }

    #[test]
    fn test_abs_releases_locking_wheels() {
        let spec = CarSpecFixture::club_racer();
        let cfg = DriverConfig::default();
        // Wheels at 40% of car speed: well under the 0.9 release point
        let w = wheel_rad_s(12.0);
        let state = VehicleStateFixture::new()
            .speed(30.0)
            .wheel_speeds([w, w, w, w])
            .build();

        let brake = abs_filter(0.8, &state, &spec, &cfg);
        assert!(brake < 0.8);
        assert_relative_eq!(brake, 0.8 * (0.4 / 0.9), epsilon = 1e-3);
    }

    #[test]
    fn test_abs_idle_near_standstill() {
        let spec = CarSpecFixture::club_racer();
        let cfg = DriverConfig::default();
        let state = VehicleStateFixture::new()
            .speed(1.0)
            .wheel_speeds([0.0; 4])
            .build();

        assert_relative_eq!(abs_filter(0.5, &state, &spec, &cfg), 0.5);
    }

    #[test]
    fn test_abs_ignores_zero_brake() {
        let spec = CarSpecFixture::club_racer();
        let cfg = DriverConfig::default();
        let state = VehicleStateFixture::new()
            .speed(30.0)
            .wheel_speeds([0.0; 4])
            .build();

        assert_relative_eq!(abs_filter(0.0, &state, &spec, &cfg), 0.0);
    }
}
