//! Gear Selection
//!
//! RPM-threshold shifting expressed through wheel kinematics: a gear's top
//! speed is the car speed at which the engine hits redline through that
//! gear's ratio. Shift up near the top of the current gear, shift down
//! when the next gear below would still have headroom, with a hysteresis
//! margin so the two thresholds never chatter.

use apexpilot_schemas::{CarSpec, DriverConfig};

/// Car speed at which the engine reaches redline in `gear`, or `None`
/// for gears outside the forward table.
#[inline]
#[must_use]
fn redline_speed(spec: &CarSpec, gear: i8) -> Option<f32> {
    let ratio = spec.ratio(gear)?;
    Some(spec.redline_rad_s() / ratio * spec.driven_wheel_radius())
}

/// Select the forward gear for this tick.
///
/// Non-positive input gears (neutral, reverse) map to first. Shifts up
/// when the car passes `shift_fraction` of the current gear's redline
/// speed and a higher gear exists; shifts down when the gear below would
/// still sit under its shift point by more than `shift_margin`.
#[must_use]
pub fn select_gear(current: i8, speed: f32, spec: &CarSpec, cfg: &DriverConfig) -> i8 {
    if current < 1 {
        return 1;
    }
    let gear = current.min(spec.top_gear());
    let Some(top_speed) = redline_speed(spec, gear) else {
        return 1;
    };

    if gear < spec.top_gear() && speed > cfg.shift_fraction * top_speed {
        return gear + 1;
    }
    if gear > 1 {
        if let Some(lower_top) = redline_speed(spec, gear - 1) {
            if cfg.shift_fraction * lower_top > speed + cfg.shift_margin {
                return gear - 1;
            }
        }
    }
    gear
}
