//! Lap Demo
//!
//! Drives the robot around a small synthetic circuit with a crude
//! kinematic integrator standing in for the simulator host. Shows the
//! lifecycle contract end to end and prints the control stream.
//!
//! Run with `cargo run --example lap_demo`.

use std::sync::Arc;
use std::time::Duration;

use apexpilot_driver::{Driver, DriverError, Robot};
use apexpilot_schemas::{
    CarSpec, CurveDirection, Drivetrain, Track, TrackSegment, VehicleState,
};

const TICK: Duration = Duration::from_millis(20);
const WHEEL_RADIUS: f32 = 0.33;

fn demo_track() -> Track {
    let width = 11.0;
    let friction = 1.0;
    Track::circuit(vec![
        TrackSegment::straight(400.0, width, friction),
        TrackSegment::curve(80.0, 1.8, CurveDirection::Left, width, friction),
        TrackSegment::straight(250.0, width, friction),
        TrackSegment::curve(45.0, 2.4, CurveDirection::Right, width, friction),
    ])
}

fn demo_car() -> CarSpec {
    CarSpec {
        steer_lock: 0.366,
        gear_ratios: vec![10.6, 7.6, 5.9, 4.8, 4.0, 3.4],
        redline_rpm: 7500.0,
        front_wheel_radius: WHEEL_RADIUS,
        rear_wheel_radius: WHEEL_RADIUS,
        drivetrain: Drivetrain::RearWheel,
    }
}

fn main() -> Result<(), DriverError> {
    tracing_subscriber::fmt::init();

    let track = Arc::new(demo_track());
    let mut driver = Driver::new();
    driver.track_changed(Arc::clone(&track));
    driver.race_started(demo_car(), TICK)?;

    let dt = TICK.as_secs_f32();
    let mut segment = 0_usize;
    let mut travelled = 0.0_f32;
    let mut speed = 0.0_f32;
    let mut gear = 1_i8;

    println!("tick  segment  speed     gear  steer   throttle  brake");
    for tick in 0..3000_u32 {
        let state = VehicleState {
            segment,
            segment_travelled: travelled,
            lateral_offset: 0.0,
            yaw: 0.0,
            track_tangent: 0.0,
            speed,
            engine_rpm: 2500.0,
            gear,
            wheel_speeds: [speed / WHEEL_RADIUS; 4],
        };
        let control = driver.tick(&state);

        // Toy longitudinal model: 6 m/s^2 of drive, 12 m/s^2 of brake.
        speed = (speed + (control.throttle * 6.0 - control.brake * 12.0) * dt).max(0.0);
        gear = control.gear;
        travelled += speed * dt;

        while let Some(seg) = track.segment(segment) {
            let length = seg.path_length();
            if travelled < length {
                break;
            }
            travelled -= length;
            segment = match track.next_index(segment) {
                Some(next) => next,
                None => 0,
            };
        }

        if tick % 100 == 0 {
            println!(
                "{tick:>4}  {segment:>7}  {speed:>7.2}  {gear:>4}  {:>6.2}  {:>8.2}  {:>5.2}",
                control.steer, control.throttle, control.brake
            );
        }
    }

    driver.race_ended();
    Ok(())
}
