//! Heading Estimator
//!
//! Computes the signed angular deviation between the car's heading and the
//! track's local tangent direction. Purely functional; the wrap across the
//! ±π discontinuity is the only subtlety.

use core::f32::consts::{PI, TAU};

/// Normalize an angle into the half-open interval (−π, π].
///
/// −π maps to +π. Non-finite inputs are passed through unchanged.
///
/// # Example
///
/// ```
/// use apexpilot_control::normalize_angle;
/// use core::f32::consts::PI;
///
/// assert!((normalize_angle(3.0 * PI) - PI).abs() < 1e-6);
/// assert!((normalize_angle(-PI) - PI).abs() < 1e-6);
/// ```
#[inline]
#[must_use]
pub fn normalize_angle(angle: f32) -> f32 {
    if !angle.is_finite() {
        return angle;
    }
    let wrapped = angle.rem_euclid(TAU);
    if wrapped > PI { wrapped - TAU } else { wrapped }
}

/// Signed heading error between the local track tangent and the car's yaw.
///
/// Positive means the track bends to the car's left. The result is
/// normalized into (−π, π].
#[inline]
#[must_use]
pub fn heading_error(track_tangent: f32, yaw: f32) -> f32 {
    normalize_angle(track_tangent - yaw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_in_range() {
        assert_relative_eq!(normalize_angle(0.0), 0.0);
        assert_relative_eq!(normalize_angle(1.0), 1.0);
        assert_relative_eq!(normalize_angle(-1.0), -1.0);
    }

    #[test]
    fn test_wraps_full_turns() {
        assert_relative_eq!(normalize_angle(TAU), 0.0, epsilon = 1e-6);
        assert_relative_eq!(normalize_angle(-TAU + 0.5), 0.5, epsilon = 1e-5);
        assert_relative_eq!(normalize_angle(5.0 * TAU + 1.0), 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_boundary_maps_to_positive_pi() {
        // The interval is half-open on the negative side
        assert_relative_eq!(normalize_angle(PI), PI);
        assert_relative_eq!(normalize_angle(-PI), PI, epsilon = 1e-6);
    }

    #[test]
    fn test_error_across_discontinuity() {
        // Tangent just past +pi, yaw just below -pi: nearly aligned
        let err = heading_error(PI - 0.05, -PI + 0.05);
        assert_relative_eq!(err, -0.1, epsilon = 1e-5);
    }

    #[test]
    fn test_error_sign() {
        assert!(heading_error(0.5, 0.0) > 0.0);
        assert!(heading_error(-0.5, 0.0) < 0.0);
        assert_relative_eq!(heading_error(1.25, 1.25), 0.0);
    }

    #[test]
    fn test_non_finite_passthrough() {
        assert!(normalize_angle(f32::NAN).is_nan());
        assert!(normalize_angle(f32::INFINITY).is_infinite());
    }
}
