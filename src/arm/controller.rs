//! Arm control-loop context
//!
//! One struct owns all mutable control state (decoder, tachometer, motor
//! state) and a motor driver, and advances it by exactly one control-loop
//! iteration per [`ArmController::step`] call: decode the PWM sample,
//! interpret it into a motor state, apply the state to the motor and the
//! tachometer. All state has a single writer per tick.

use super::config::MOTOR_SPEED;
use super::decoder::PwmDecoder;
use super::motion::{next_state, MotorState};
use super::tachometer::Tachometer;
use crate::libraries::motor_driver::{Motor, MotorError};

/// Control-loop context for the arm
pub struct ArmController<M: Motor> {
    decoder: PwmDecoder,
    tachometer: Tachometer,
    state: MotorState,
    motor: M,
}

impl<M: Motor> ArmController<M> {
    /// Create a controller in the initial state: motor stopped, no signal
    /// history, position at the lower travel bound
    pub fn new(motor: M) -> Self {
        Self {
            decoder: PwmDecoder::new(),
            tachometer: Tachometer::new(),
            state: MotorState::Stop,
            motor,
        }
    }

    /// Run one control-loop iteration
    ///
    /// # Arguments
    ///
    /// * `pwm_level` - Instantaneous logic level of the PWM command input
    /// * `now` - Free-running counter value for this iteration
    ///
    /// # Errors
    ///
    /// Propagates motor driver failures; the control state has already been
    /// advanced when an error is returned.
    pub fn step(&mut self, pwm_level: bool, now: u32) -> Result<(), MotorError> {
        self.decoder.sample(pwm_level, now);

        // Interpretation waits until a first full pulse has been decoded
        if self.decoder.motion_requested() {
            if let Some(hi_time) = self.decoder.hi_time() {
                let next = next_state(hi_time, self.state, self.tachometer.count());
                if next != self.state {
                    crate::log_info!("motor state: {}", next.name());
                }
                self.state = next;
            }
        }

        self.apply()
    }

    /// Drive the motor and the tachometer from the current state
    fn apply(&mut self) -> Result<(), MotorError> {
        match self.state {
            MotorState::Stop => self.motor.stop(),
            MotorState::Extend => {
                self.motor.set_speed(MOTOR_SPEED)?;
                if self.tachometer.decrement() {
                    Ok(())
                } else {
                    self.halt_at_limit()
                }
            }
            MotorState::Retract => {
                self.motor.set_speed(-MOTOR_SPEED)?;
                if self.tachometer.increment() {
                    Ok(())
                } else {
                    self.halt_at_limit()
                }
            }
        }
    }

    /// Emergency stop at a travel bound
    ///
    /// The tachometer refused to step past its limit while the motor was
    /// still commanded to move. This path is the only one that clears the
    /// motion request.
    fn halt_at_limit(&mut self) -> Result<(), MotorError> {
        crate::log_warn!("travel limit reached at {}, halting", self.tachometer.count());
        self.motor.stop()?;
        self.state = MotorState::Stop;
        self.decoder.clear_motion_request();
        Ok(())
    }

    /// Current motor state
    pub fn state(&self) -> MotorState {
        self.state
    }

    /// Current tachometer position
    pub fn position(&self) -> i32 {
        self.tachometer.count()
    }

    /// Most recently decoded hi-time
    pub fn hi_time(&self) -> Option<u32> {
        self.decoder.hi_time()
    }

    /// Whether a motion request is pending
    pub fn motion_requested(&self) -> bool {
        self.decoder.motion_requested()
    }

    /// Access the motor driver
    pub fn motor(&self) -> &M {
        &self.motor
    }

    /// Mutable access to the motor driver
    pub fn motor_mut(&mut self) -> &mut M {
        &mut self.motor
    }
}
