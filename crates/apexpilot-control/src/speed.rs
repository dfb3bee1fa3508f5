//! Speed Planner
//!
//! Estimates the friction-limited speed the current and upcoming track
//! geometry permit, and derives the brake and throttle demands from it.
//!
//! The braking decision is a greedy one-pass forward scan over the segment
//! chain, bounded by the stopping-distance horizon: it does not account
//! for compounding deceleration across multiple constraining corners. The
//! scan stops at the end of an open segment list and never walks more
//! than one full lap of a circuit.

use apexpilot_schemas::{CarSpec, DriverConfig, Track, TrackSegment, VehicleState};

/// Maximum speed a segment supports without exceeding tire friction.
///
/// Straights impose no limit and report `f32::INFINITY`. For curves the
/// circular-motion friction limit gives `sqrt(friction * gravity * radius)`.
#[inline]
#[must_use]
pub fn allowed_speed(segment: &TrackSegment, gravity: f32) -> f32 {
    match segment.radius() {
        None => f32::INFINITY,
        Some(radius) => (segment.friction * gravity * radius).sqrt(),
    }
}

/// Remaining centerline distance from `travelled` to the segment end.
///
/// Clamped to zero so a host rounding error past the segment boundary
/// cannot produce a negative lookahead.
#[inline]
#[must_use]
pub fn distance_to_segment_end(segment: &TrackSegment, travelled: f32) -> f32 {
    (segment.path_length() - travelled).max(0.0)
}

/// Brake demand for this tick: `brake_intensity` or 0.0.
///
/// Brakes immediately when the current segment's allowed speed is already
/// below the car's speed. Otherwise walks forward through upcoming
/// segments within the stopping-distance horizon
/// `speed² / (2 · friction · gravity)` and brakes as soon as some
/// segment's allowed speed is low enough that the distance needed to slow
/// down to it exceeds the distance left to reach it.
#[must_use]
pub fn braking_demand(track: &Track, state: &VehicleState, cfg: &DriverConfig) -> f32 {
    let Some(current) = track.segment(state.segment) else {
        return 0.0;
    };
    let speed = state.speed;
    if allowed_speed(current, cfg.gravity) < speed {
        return cfg.brake_intensity;
    }

    let mu = current.friction;
    let decel = 2.0 * mu * cfg.gravity;
    let horizon = speed * speed / decel;

    let mut lookahead = distance_to_segment_end(current, state.segment_travelled);
    let mut index = state.segment;
    let mut remaining = track.segment_count();

    while lookahead < horizon && remaining > 0 {
        index = match track.next_index(index) {
            Some(next) => next,
            None => break,
        };
        let Some(segment) = track.segment(index) else {
            break;
        };
        let allowed = allowed_speed(segment, cfg.gravity);
        if allowed < speed {
            let brake_distance = (speed * speed - allowed * allowed) / decel;
            if brake_distance > lookahead {
                return cfg.brake_intensity;
            }
        }
        lookahead += segment.path_length();
        remaining -= 1;
    }
    0.0
}

/// Throttle demand for this tick, in [0, 1].
///
/// Full throttle while the current segment's allowed speed exceeds the
/// car's speed by more than the configured margin. Near the limit the
/// throttle is the engine-speed fraction that targets the allowed speed
/// through the current gear: `allowed / wheel_radius · ratio / redline`.
/// Neutral and reverse gears produce no forward demand.
#[must_use]
pub fn throttle_demand(
    track: &Track,
    state: &VehicleState,
    spec: &CarSpec,
    cfg: &DriverConfig,
) -> f32 {
    let Some(segment) = track.segment(state.segment) else {
        return 0.0;
    };
    let allowed = allowed_speed(segment, cfg.gravity);
    if allowed > state.speed + cfg.full_accel_margin {
        return 1.0;
    }
    let Some(ratio) = spec.ratio(state.gear) else {
        return 0.0;
    };
    let engine_target = allowed / spec.driven_wheel_radius() * ratio;
    (engine_target / spec.redline_rad_s()).clamp(0.0, 1.0)
}
