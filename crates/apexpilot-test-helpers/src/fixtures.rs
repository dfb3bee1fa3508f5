//! Test fixtures and builders for tracks, cars, and vehicle states.

use apexpilot_schemas::{
    CarSpec, CurveDirection, Drivetrain, Track, TrackSegment, VehicleState, WHEEL_COUNT,
};

/// Wheel radius of the fixture cars in meters; the state builder uses it
/// to derive free-rolling wheel speeds from the car speed.
pub const FIXTURE_WHEEL_RADIUS: f32 = 0.33;

/// Builder for segment chains with shared width and friction.
#[derive(Debug, Clone)]
pub struct TrackBuilder {
    segments: Vec<TrackSegment>,
    width: f32,
    friction: f32,
}

impl Default for TrackBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackBuilder {
    /// Start a chain with 10 m width and friction 1.0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
            width: 10.0,
            friction: 1.0,
        }
    }

    /// Width for subsequently added segments.
    #[must_use]
    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Friction for subsequently added segments.
    #[must_use]
    pub fn friction(mut self, friction: f32) -> Self {
        self.friction = friction;
        self
    }

    /// Append a straight of `length` meters.
    #[must_use]
    pub fn straight(mut self, length: f32) -> Self {
        self.segments
            .push(TrackSegment::straight(length, self.width, self.friction));
        self
    }

    /// Append a left-hand corner.
    #[must_use]
    pub fn left(mut self, radius: f32, arc: f32) -> Self {
        self.segments.push(TrackSegment::curve(
            radius,
            arc,
            CurveDirection::Left,
            self.width,
            self.friction,
        ));
        self
    }

    /// Append a right-hand corner.
    #[must_use]
    pub fn right(mut self, radius: f32, arc: f32) -> Self {
        self.segments.push(TrackSegment::curve(
            radius,
            arc,
            CurveDirection::Right,
            self.width,
            self.friction,
        ));
        self
    }

    /// Finish as a closed circuit.
    #[must_use]
    pub fn circuit(self) -> Track {
        Track::circuit(self.segments)
    }

    /// Finish as an open chain.
    #[must_use]
    pub fn open(self) -> Track {
        Track::open(self.segments)
    }
}

/// Named car specs for tests.
#[derive(Debug, Clone, Copy)]
pub struct CarSpecFixture;

impl CarSpecFixture {
    /// Rear-drive club racer: six gears, 7500 rpm redline, 0.33 m wheels.
    ///
    /// Ratios include the final drive, so engine speed = wheel speed *
    /// ratio.
    #[must_use]
    pub fn club_racer() -> CarSpec {
        CarSpec {
            steer_lock: 0.366,
            gear_ratios: vec![10.6, 7.6, 5.9, 4.8, 4.0, 3.4],
            redline_rpm: 7500.0,
            front_wheel_radius: FIXTURE_WHEEL_RADIUS,
            rear_wheel_radius: FIXTURE_WHEEL_RADIUS,
            drivetrain: Drivetrain::RearWheel,
        }
    }

    /// Front-drive hatchback: five gears, 6500 rpm redline.
    #[must_use]
    pub fn hot_hatch() -> CarSpec {
        CarSpec {
            steer_lock: 0.42,
            gear_ratios: vec![12.2, 8.1, 6.0, 4.7, 3.9],
            redline_rpm: 6500.0,
            front_wheel_radius: FIXTURE_WHEEL_RADIUS,
            rear_wheel_radius: FIXTURE_WHEEL_RADIUS,
            drivetrain: Drivetrain::FrontWheel,
        }
    }
}

/// Builder for per-tick vehicle states.
///
/// Unless wheel speeds are set explicitly, the built state rolls freely:
/// wheel speeds match the car speed through [`FIXTURE_WHEEL_RADIUS`].
#[derive(Debug, Clone, Copy)]
pub struct VehicleStateFixture {
    segment: usize,
    segment_travelled: f32,
    lateral_offset: f32,
    yaw: f32,
    track_tangent: f32,
    speed: f32,
    engine_rpm: f32,
    gear: i8,
    wheel_speeds: Option<[f32; WHEEL_COUNT]>,
}

impl Default for VehicleStateFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl VehicleStateFixture {
    /// A car at rest at the start of segment 0, centered and aligned.
    #[must_use]
    pub fn new() -> Self {
        Self {
            segment: 0,
            segment_travelled: 0.0,
            lateral_offset: 0.0,
            yaw: 0.0,
            track_tangent: 0.0,
            speed: 0.0,
            engine_rpm: 2000.0,
            gear: 1,
            wheel_speeds: None,
        }
    }

    /// Current segment index.
    #[must_use]
    pub fn segment(mut self, segment: usize) -> Self {
        self.segment = segment;
        self
    }

    /// Distance travelled into the segment, meters.
    #[must_use]
    pub fn travelled(mut self, travelled: f32) -> Self {
        self.segment_travelled = travelled;
        self
    }

    /// Signed lateral offset from the centerline, meters.
    #[must_use]
    pub fn offset(mut self, offset: f32) -> Self {
        self.lateral_offset = offset;
        self
    }

    /// Car yaw, radians.
    #[must_use]
    pub fn yaw(mut self, yaw: f32) -> Self {
        self.yaw = yaw;
        self
    }

    /// Local track tangent at the car's position, radians.
    #[must_use]
    pub fn tangent(mut self, tangent: f32) -> Self {
        self.track_tangent = tangent;
        self
    }

    /// Longitudinal speed, m/s.
    #[must_use]
    pub fn speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Engine speed, rpm.
    #[must_use]
    pub fn rpm(mut self, rpm: f32) -> Self {
        self.engine_rpm = rpm;
        self
    }

    /// Current gear.
    #[must_use]
    pub fn gear(mut self, gear: i8) -> Self {
        self.gear = gear;
        self
    }

    /// Explicit per-wheel angular speeds, rad/s (FL, FR, RL, RR).
    #[must_use]
    pub fn wheel_speeds(mut self, wheel_speeds: [f32; WHEEL_COUNT]) -> Self {
        self.wheel_speeds = Some(wheel_speeds);
        self
    }

    /// Build the state.
    #[must_use]
    pub fn build(self) -> VehicleState {
        let rolling = self.speed / FIXTURE_WHEEL_RADIUS;
        VehicleState {
            segment: self.segment,
            segment_travelled: self.segment_travelled,
            lateral_offset: self.lateral_offset,
            yaw: self.yaw,
            track_tangent: self.track_tangent,
            speed: self.speed,
            engine_rpm: self.engine_rpm,
            gear: self.gear,
            wheel_speeds: self.wheel_speeds.unwrap_or([rolling; WHEEL_COUNT]),
        }
    }
}
