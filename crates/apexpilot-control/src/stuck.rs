//! Stuck Detector
//!
//! A counter-based state machine with two states, Free and Stuck. While
//! the car looks immobilized and misaligned the counter climbs; once it
//! exceeds the tick limit the detector latches Stuck and the driver runs
//! its scripted recovery until the heading error returns to range.
//!
//! The tick limit is derived from a wall-clock time limit divided by the
//! simulator's fixed timestep. That conversion happens once, in
//! [`StuckDetector::new`] at race start, never per tick.

use apexpilot_schemas::DriverConfig;

/// Posture of the car as judged by the detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Posture {
    /// Normal driving
    Free,
    /// Immobilized; drive the recovery maneuver
    Stuck,
}

/// Per-tick observation fed to the detector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StuckSample {
    /// Signed heading error in radians, normalized into (−π, π)
    pub heading_error: f32,
    /// Longitudinal speed in m/s
    pub speed: f32,
    /// Signed lateral offset from the centerline in meters
    pub lateral_offset: f32,
}

/// Counter-based stuck detector.
///
/// The counter is the only controller state that survives between ticks.
#[derive(Debug, Clone, Copy)]
pub struct StuckDetector {
    counter: u32,
    limit_ticks: u32,
    latched: bool,
    angle_threshold: f32,
    speed_threshold: f32,
    min_offset: f32,
}

impl StuckDetector {
    /// Build a detector for a race with the given fixed timestep.
    ///
    /// `tick_seconds` must be positive; the caller validates it before
    /// race start.
    #[must_use]
    pub fn new(cfg: &DriverConfig, tick_seconds: f32) -> Self {
        Self {
            counter: 0,
            limit_ticks: (cfg.stuck_time_limit / tick_seconds) as u32,
            latched: false,
            angle_threshold: cfg.stuck_angle,
            speed_threshold: cfg.stuck_speed,
            min_offset: cfg.stuck_min_offset,
        }
    }

    /// Ticks the stuck condition has held consecutively.
    #[must_use]
    pub fn counter(&self) -> u32 {
        self.counter
    }

    /// Tick count the counter must exceed before Stuck latches.
    #[must_use]
    pub fn limit_ticks(&self) -> u32 {
        self.limit_ticks
    }

    /// Whether the detector is currently latched Stuck.
    #[must_use]
    pub fn is_stuck(&self) -> bool {
        self.latched
    }

    /// Clear the counter and the latch.
    pub fn reset(&mut self) {
        self.counter = 0;
        self.latched = false;
    }

    /// Feed one tick's observation and get the resulting posture.
    ///
    /// In Free, the stuck condition is: heading error magnitude above the
    /// angle threshold, speed below the low-speed threshold, offset beyond
    /// the minimum distance, and the car pointing away from the
    /// centerline. The latter two keep tight but intentional turns from
    /// counting as stuck. In Stuck, the latch clears as soon as the
    /// heading error returns to range.
    pub fn observe(&mut self, sample: &StuckSample) -> Posture {
        if self.latched {
            if sample.heading_error.abs() < self.angle_threshold {
                self.reset();
                return Posture::Free;
            }
            return Posture::Stuck;
        }

        let misaligned = sample.heading_error.abs() > self.angle_threshold;
        let crawling = sample.speed < self.speed_threshold;
        let off_line = sample.lateral_offset.abs() > self.min_offset;
        // Pointing away from the track: error and offset on opposite sides
        let diverging = sample.lateral_offset * sample.heading_error < 0.0;

        if misaligned && crawling && off_line && diverging {
            self.counter = self.counter.saturating_add(1);
            if self.counter > self.limit_ticks {
                self.latched = true;
                return Posture::Stuck;
            }
        } else {
            self.counter = 0;
        }
        Posture::Free
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::FRAC_PI_2;

    const TICK: f32 = 0.02;

    fn detector() -> StuckDetector {
        StuckDetector::new(&DriverConfig::default(), TICK)
    }

    fn stuck_sample() -> StuckSample {
        // Nose pointed hard left, car right of center, barely moving
        StuckSample {
            heading_error: FRAC_PI_2,
            speed: 0.5,
            lateral_offset: -5.0,
        }
    }

    #[test]
    fn test_limit_derived_from_timestep() {
        // 2.0 s at 50 Hz
        assert_eq!(detector().limit_ticks(), 100);
    }

    #[test]
    fn test_aligned_car_stays_free() {
        let mut det = detector();
        let sample = StuckSample {
            heading_error: 0.1,
            speed: 30.0,
            lateral_offset: 0.5,
        };
        for _ in 0..1000 {
            assert_eq!(det.observe(&sample), Posture::Free);
        }
        assert_eq!(det.counter(), 0);
    }

    #[test]
    fn test_latches_exactly_past_limit() {
        let mut det = detector();
        let sample = stuck_sample();
        let limit = det.limit_ticks();

        for _ in 0..limit {
            assert_eq!(det.observe(&sample), Posture::Free);
        }
        // One more over-threshold tick crosses the limit
        assert_eq!(det.observe(&sample), Posture::Stuck);
        assert!(det.is_stuck());
    }

    #[test]
    fn test_counter_resets_on_good_tick() {
        let mut det = detector();
        let bad = stuck_sample();
        let good = StuckSample {
            heading_error: 0.0,
            ..bad
        };

        for _ in 0..50 {
            let _ = det.observe(&bad);
        }
        assert_eq!(det.counter(), 50);
        let _ = det.observe(&good);
        assert_eq!(det.counter(), 0);
    }

    #[test]
    fn test_fast_car_never_stuck() {
        let mut det = detector();
        let sample = StuckSample {
            speed: 20.0,
            ..stuck_sample()
        };
        for _ in 0..500 {
            assert_eq!(det.observe(&sample), Posture::Free);
        }
    }

    #[test]
    fn test_centered_car_never_stuck() {
        // Tight intentional turn near the middle of the track
        let mut det = detector();
        let sample = StuckSample {
            lateral_offset: 0.2,
            ..stuck_sample()
        };
        for _ in 0..500 {
            assert_eq!(det.observe(&sample), Posture::Free);
        }
    }

    #[test]
    fn test_converging_car_never_stuck() {
        // Error and offset on the same side: nose points back at the track
        let mut det = detector();
        let sample = StuckSample {
            lateral_offset: 5.0,
            ..stuck_sample()
        };
        for _ in 0..500 {
            assert_eq!(det.observe(&sample), Posture::Free);
        }
    }

    #[test]
    fn test_unlatches_when_heading_recovers() {
        let mut det = detector();
        let sample = stuck_sample();
        for _ in 0..=det.limit_ticks() {
            let _ = det.observe(&sample);
        }
        assert!(det.is_stuck());

        // Recovery maneuver keeps it stuck while still misaligned
        assert_eq!(det.observe(&sample), Posture::Stuck);

        let recovered = StuckSample {
            heading_error: 0.2,
            ..sample
        };
        assert_eq!(det.observe(&recovered), Posture::Free);
        assert!(!det.is_stuck());
        assert_eq!(det.counter(), 0);
    }
}
