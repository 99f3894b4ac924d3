//! Motor driver abstraction
//!
//! This module provides a zero-cost abstraction for controlling the arm's DC
//! motor, with forward/reverse motion and speed control.
//!
//! ## Features
//!
//! - Platform-independent `Motor` trait for generic motor control
//! - Direction-pin + PWM driver implementation (`DirPwmMotor`)
//! - Zero-cost abstraction with inline trait methods
//!
//! ## Example
//!
//! ```ignore
//! use pico_arm::libraries::motor_driver::{DirPwmMotor, Motor};
//!
//! // Direction GPIO and PWM channel are platform-specific; see demos/
//! let mut motor = DirPwmMotor::new(dir_pin, pwm);
//!
//! motor.set_speed(0.5)?;  // 50% duty, extend direction
//! motor.set_speed(-0.5)?; // 50% duty, retract direction
//! motor.stop()?;          // duty 0
//! ```

pub mod dir_pwm;

// Re-export main types
pub use dir_pwm::DirPwmMotor;

/// Motor control error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "pico2_w", derive(defmt::Format))]
pub enum MotorError {
    /// Speed value outside [-1.0, +1.0] range
    InvalidSpeed,
    /// Hardware PWM channel or direction pin access failed
    HardwareFault,
}

/// Motor control trait (platform-independent)
///
/// This trait defines the interface for controlling a single motor with
/// variable speed in forward and reverse directions.
///
/// Speed values are normalized to [-1.0, +1.0]:
/// - `+1.0` = full speed, direction pin high (arm extends)
/// - `0.0` = stopped
/// - `-1.0` = full speed, direction pin low (arm retracts)
pub trait Motor {
    /// Set motor speed and direction
    ///
    /// # Arguments
    ///
    /// * `speed` - Motor speed in range [-1.0, +1.0]; the sign selects the
    ///   direction, the magnitude the duty cycle
    ///
    /// # Errors
    ///
    /// Returns `MotorError::InvalidSpeed` if speed is outside [-1.0, +1.0].
    /// Returns `MotorError::HardwareFault` if the PWM or direction pin fails.
    fn set_speed(&mut self, speed: f32) -> Result<(), MotorError>;

    /// Stop motor
    ///
    /// Drives the duty cycle to zero. The direction pin is left as-is.
    /// Stopping an already-stopped motor writes the same zero duty again and
    /// has no further effect.
    ///
    /// # Errors
    ///
    /// Returns `MotorError::HardwareFault` if the PWM hardware fails.
    fn stop(&mut self) -> Result<(), MotorError>;
}
