//! End-to-end control-loop tests
//!
//! Drives the full decode → interpret → apply pipeline with synthetic
//! (level, timestamp) sample trains and a recording motor, the way the
//! firmware loop drives it with a polled GPIO level and the free-running
//! counter.

use pico_arm::arm::config::{HI_THRESH, LO_THRESH, TACH_MIN};
use pico_arm::arm::{ArmController, MotorState};
use pico_arm::libraries::motor_driver::{Motor, MotorError};

/// Records every motor command issued by the controller
#[derive(Debug, Default)]
struct RecordingMotor {
    speed: f32,
    speed_commands: Vec<f32>,
    stops: u32,
}

impl Motor for RecordingMotor {
    fn set_speed(&mut self, speed: f32) -> Result<(), MotorError> {
        if !(-1.0..=1.0).contains(&speed) {
            return Err(MotorError::InvalidSpeed);
        }
        self.speed = speed;
        self.speed_commands.push(speed);
        Ok(())
    }

    fn stop(&mut self) -> Result<(), MotorError> {
        self.speed = 0.0;
        self.stops += 1;
        Ok(())
    }
}

/// Feed a square wave with the given hi-time and period, `pulses` times,
/// starting at tick `start`. Samples twice per level to exercise the
/// repeated-sample no-op path. Returns the tick after the last sample.
fn feed_square_wave(
    ctl: &mut ArmController<RecordingMotor>,
    start: u32,
    hi: u32,
    period: u32,
    pulses: u32,
) -> u32 {
    let mut t = start;
    for _ in 0..pulses {
        ctl.step(true, t).unwrap();
        ctl.step(true, t + hi / 2).unwrap();
        ctl.step(false, t + hi).unwrap();
        ctl.step(false, t + period / 2 + hi / 2).unwrap();
        t += period;
    }
    t
}

#[test]
fn motor_stays_halted_without_signal() {
    let mut ctl = ArmController::new(RecordingMotor::default());

    for t in 0..1000u32 {
        ctl.step(false, t * 100).unwrap();
    }

    assert_eq!(ctl.state(), MotorState::Stop);
    assert!(!ctl.motion_requested());
    assert_eq!(ctl.position(), TACH_MIN);
    assert!(ctl.motor().speed_commands.is_empty());
}

#[test]
fn retract_command_raises_position() {
    let mut ctl = ArmController::new(RecordingMotor::default());

    feed_square_wave(&mut ctl, 0, LO_THRESH - 500, 20_000, 10);

    assert_eq!(ctl.state(), MotorState::Retract);
    assert!(ctl.position() > TACH_MIN);
    assert!(ctl.motor().speed < 0.0);
    // Every recorded speed command was a retract command
    assert!(ctl.motor().speed_commands.iter().all(|&s| s < 0.0));
}

#[test]
fn extend_needs_travel_headroom() {
    let mut ctl = ArmController::new(RecordingMotor::default());

    // Fresh arm sits at the lower bound: an extend command is refused
    feed_square_wave(&mut ctl, 0, HI_THRESH + 500, 20_000, 5);

    assert_eq!(ctl.state(), MotorState::Stop);
    assert_eq!(ctl.position(), TACH_MIN);
    assert!(ctl.motor().speed_commands.is_empty());
}

#[test]
fn round_trip_retract_then_extend_to_limit() {
    let mut ctl = ArmController::new(RecordingMotor::default());

    // Retract away from the lower bound
    let t = feed_square_wave(&mut ctl, 0, LO_THRESH - 500, 20_000, 8);
    let retracted = ctl.position();
    assert!(retracted > TACH_MIN);

    // Extend until the travel limit halts the motor
    let mut t = feed_square_wave(&mut ctl, t, HI_THRESH + 500, 20_000, 2);
    assert_eq!(ctl.state(), MotorState::Extend);
    while ctl.state() == MotorState::Extend {
        ctl.step(false, t).unwrap();
        t += 100;
    }

    // Bounds halt: stopped, request cleared, position clamped
    assert_eq!(ctl.state(), MotorState::Stop);
    assert!(!ctl.motion_requested());
    assert_eq!(ctl.position(), TACH_MIN);
    assert_eq!(ctl.motor().speed, 0.0);
}

#[test]
fn dead_band_stops_after_motion() {
    let mut ctl = ArmController::new(RecordingMotor::default());

    let t = feed_square_wave(&mut ctl, 0, LO_THRESH - 500, 20_000, 5);
    assert_eq!(ctl.state(), MotorState::Retract);

    let mid = (LO_THRESH + HI_THRESH) / 2;
    feed_square_wave(&mut ctl, t, mid, 20_000, 3);

    assert_eq!(ctl.state(), MotorState::Stop);
    assert_eq!(ctl.motor().speed, 0.0);
}

#[test]
fn position_never_leaves_bounds() {
    let mut ctl = ArmController::new(RecordingMotor::default());

    // Alternate command bands, including degenerate idle stretches
    let mut t = 0u32;
    for round in 0..20u32 {
        let hi = if round % 2 == 0 {
            LO_THRESH - 1
        } else {
            HI_THRESH + 1
        };
        t = feed_square_wave(&mut ctl, t, hi, 20_000, 30);
        for _ in 0..50 {
            ctl.step(false, t).unwrap();
            t += 100;
            assert!(ctl.position() >= TACH_MIN);
        }
    }
}

#[test]
fn stop_iterations_do_not_move_position() {
    let mut ctl = ArmController::new(RecordingMotor::default());

    let t = feed_square_wave(&mut ctl, 0, LO_THRESH - 500, 20_000, 5);
    let mid = (LO_THRESH + HI_THRESH) / 2;
    let t = feed_square_wave(&mut ctl, t, mid, 20_000, 2);
    assert_eq!(ctl.state(), MotorState::Stop);

    let position = ctl.position();
    for i in 0..500u32 {
        ctl.step(false, t + i * 100).unwrap();
    }
    assert_eq!(ctl.position(), position);
}

#[test]
fn hi_time_tracks_latest_complete_pulse() {
    let mut ctl = ArmController::new(RecordingMotor::default());

    feed_square_wave(&mut ctl, 0, 4_000, 20_000, 1);
    assert_eq!(ctl.hi_time(), Some(4_000));

    feed_square_wave(&mut ctl, 100_000, 6_000, 20_000, 1);
    assert_eq!(ctl.hi_time(), Some(6_000));
}
