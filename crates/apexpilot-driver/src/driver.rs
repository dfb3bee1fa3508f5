//! The Driver
//!
//! One instance per car. Holds the track snapshot, the per-race car
//! constants, and the stuck detector (the only state that survives
//! between ticks), and maps each incoming vehicle state to a control
//! command.

use std::sync::Arc;
use std::time::Duration;

use apexpilot_control::{
    Posture, StuckDetector, StuckSample, abs_filter, braking_demand, heading_error, select_gear,
    throttle_demand, traction_filter,
};
use apexpilot_schemas::control::REVERSE_GEAR;
use apexpilot_schemas::{CarControl, CarSpec, DriverConfig, PitPolicy, Track, VehicleState};
use tracing::{debug, info, warn};

use crate::error::DriverError;

/// Lifecycle hooks a simulator host drives, in call order:
/// [`track_changed`](Robot::track_changed) once per track,
/// [`race_started`](Robot::race_started) once per race, then
/// [`tick`](Robot::tick) once per simulation step.
pub trait Robot {
    /// A new track was loaded; the robot keeps the snapshot for the
    /// lookahead scans.
    fn track_changed(&mut self, track: Arc<Track>);

    /// A race is starting on the current track.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError`] when the car spec fails validation or the
    /// timestep is zero.
    fn race_started(
        &mut self,
        spec: CarSpec,
        tick_duration: Duration,
    ) -> Result<(), DriverError>;

    /// Produce the control command for one simulation step.
    fn tick(&mut self, state: &VehicleState) -> CarControl;

    /// The host asks what to do in the pit lane.
    fn pit_requested(&mut self) -> PitPolicy;

    /// The race is over; per-race state is dropped.
    fn race_ended(&mut self);
}

/// Per-race state assembled in [`Robot::race_started`].
#[derive(Debug, Clone)]
struct RaceContext {
    spec: CarSpec,
    stuck: StuckDetector,
}

/// The ApexPilot driving robot.
#[derive(Debug, Clone)]
pub struct Driver {
    config: DriverConfig,
    track: Option<Arc<Track>>,
    race: Option<RaceContext>,
    lifecycle_warned: bool,
}

impl Driver {
    /// Driver with the default tuning.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: DriverConfig::default(),
            track: None,
            race: None,
            lifecycle_warned: false,
        }
    }

    /// Driver with a custom tuning configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::Config`] when the configuration fails
    /// validation.
    pub fn with_config(config: DriverConfig) -> Result<Self, DriverError> {
        config.validate()?;
        Ok(Self {
            config,
            track: None,
            race: None,
            lifecycle_warned: false,
        })
    }

    /// The active tuning configuration.
    #[must_use]
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Whether the stuck detector is currently latched.
    #[must_use]
    pub fn is_stuck(&self) -> bool {
        self.race.as_ref().is_some_and(|race| race.stuck.is_stuck())
    }
}

/// Scripted recovery: reverse out while counter-steering back toward the
/// track.
fn recovery_command(cfg: &DriverConfig, error: f32, spec: &CarSpec) -> CarControl {
    CarControl {
        steer: (-error / spec.steer_lock).clamp(-1.0, 1.0),
        gear: REVERSE_GEAR,
        throttle: cfg.recovery_throttle,
        brake: 0.0,
    }
}

/// Normal driving: steer at the centerline, plan speed, pick a gear.
fn driving_command(
    cfg: &DriverConfig,
    track: &Track,
    state: &VehicleState,
    spec: &CarSpec,
    error: f32,
) -> CarControl {
    // Heading correction biased by how far off-center the car sits,
    // scaled by the local track width.
    let lateral_correction = track
        .segment(state.segment)
        .map_or(0.0, |segment| state.lateral_offset / segment.width);
    let steer = ((error - lateral_correction) / spec.steer_lock).clamp(-1.0, 1.0);

    let gear = select_gear(state.gear, state.speed, spec, cfg);
    let brake = abs_filter(braking_demand(track, state, cfg), state, spec, cfg);
    let throttle = if brake > 0.0 {
        0.0
    } else {
        traction_filter(throttle_demand(track, state, spec, cfg), state, spec, cfg)
    };

    CarControl {
        steer,
        gear,
        throttle,
        brake,
    }
}

impl Default for Driver {
    fn default() -> Self {
        Self::new()
    }
}

impl Robot for Driver {
    fn track_changed(&mut self, track: Arc<Track>) {
        info!(
            segments = track.segment_count(),
            closed = track.is_closed(),
            length_m = track.total_length(),
            "track loaded"
        );
        self.track = Some(track);
        self.lifecycle_warned = false;
    }

    fn race_started(
        &mut self,
        spec: CarSpec,
        tick_duration: Duration,
    ) -> Result<(), DriverError> {
        if tick_duration.is_zero() {
            return Err(DriverError::InvalidTickDuration(tick_duration));
        }
        spec.validate().map_err(DriverError::CarSpec)?;

        let stuck = StuckDetector::new(&self.config, tick_duration.as_secs_f32());
        info!(
            drivetrain = ?spec.drivetrain,
            gears = spec.gear_ratios.len(),
            stuck_limit_ticks = stuck.limit_ticks(),
            "race started"
        );
        self.race = Some(RaceContext { spec, stuck });
        self.lifecycle_warned = false;
        Ok(())
    }

    fn tick(&mut self, state: &VehicleState) -> CarControl {
        let cfg = self.config;
        let (Some(track), Some(race)) = (self.track.as_deref(), self.race.as_mut()) else {
            if !self.lifecycle_warned {
                warn!("tick before track load and race start; returning neutral");
                self.lifecycle_warned = true;
            }
            return CarControl::neutral();
        };

        let error = heading_error(state.track_tangent, state.yaw);
        let was_stuck = race.stuck.is_stuck();
        let posture = race.stuck.observe(&StuckSample {
            heading_error: error,
            speed: state.speed,
            lateral_offset: state.lateral_offset,
        });
        if was_stuck != race.stuck.is_stuck() {
            debug!(
                heading_error = error,
                speed = state.speed,
                stuck = race.stuck.is_stuck(),
                "stuck state changed"
            );
        }

        match posture {
            Posture::Stuck => recovery_command(&cfg, error, &race.spec),
            Posture::Free => driving_command(&cfg, track, state, &race.spec, error),
        }
    }

    fn pit_requested(&mut self) -> PitPolicy {
        PitPolicy::ResumeImmediately
    }

    fn race_ended(&mut self) {
        info!("race ended");
        self.race = None;
    }
}
