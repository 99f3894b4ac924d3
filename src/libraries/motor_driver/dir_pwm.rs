//! Direction-pin + PWM motor driver implementation
//!
//! This module implements motor control for drivers wired as one direction
//! GPIO plus one PWM channel, e.g. a relay or half-bridge stage where a
//! single bit selects rotation direction and the PWM duty cycle sets speed.
//!
//! ## Control mapping
//!
//! | speed    | DIR pin   | PWM duty |
//! |----------|-----------|----------|
//! | > 0.0    | high      | speed    |
//! | < 0.0    | low       | -speed   |
//! | 0.0      | unchanged | 0        |

use core::sync::atomic::{AtomicU32, Ordering};

use super::{Motor, MotorError};
use crate::platform::traits::{GpioInterface, PwmInterface};

/// Counter for sampling motor speed logs (every 100th call)
static SET_SPEED_LOG_COUNTER: AtomicU32 = AtomicU32::new(0);

/// Direction-pin + PWM motor driver
///
/// # Type Parameters
///
/// * `D` - GPIO output for the direction bit
/// * `P` - PWM channel carrying the duty cycle
///
/// # Performance
///
/// All methods are marked `#[inline]`. With LTO enabled the trait methods
/// compile down to the underlying GPIO and PWM register writes.
pub struct DirPwmMotor<D, P>
where
    D: GpioInterface,
    P: PwmInterface,
{
    dir: D,
    pwm: P,
    // Last commanded direction; the pin is only rewritten when this changes.
    forward: Option<bool>,
}

impl<D, P> DirPwmMotor<D, P>
where
    D: GpioInterface,
    P: PwmInterface,
{
    /// Create a new motor driver from initialized pins
    ///
    /// The direction pin must be configured as an output and the PWM channel
    /// enabled. The motor is considered stopped after creation; the first
    /// nonzero speed command writes the direction pin.
    pub fn new(dir: D, pwm: P) -> Self {
        Self {
            dir,
            pwm,
            forward: None,
        }
    }

    fn set_direction(&mut self, forward: bool) -> Result<(), MotorError> {
        if self.forward == Some(forward) {
            return Ok(());
        }
        let result = if forward {
            self.dir.set_high()
        } else {
            self.dir.set_low()
        };
        result.map_err(|_| MotorError::HardwareFault)?;
        self.forward = Some(forward);
        Ok(())
    }
}

impl<D, P> Motor for DirPwmMotor<D, P>
where
    D: GpioInterface,
    P: PwmInterface,
{
    #[inline]
    fn set_speed(&mut self, speed: f32) -> Result<(), MotorError> {
        if !(-1.0..=1.0).contains(&speed) {
            return Err(MotorError::InvalidSpeed);
        }

        // Sample logging: only log every 100th call to reduce noise
        let count = SET_SPEED_LOG_COUNTER.fetch_add(1, Ordering::Relaxed);
        if count % 100 == 0 {
            crate::log_debug!("motor set_speed: {}", speed);
        }

        if speed != 0.0 {
            self.set_direction(speed > 0.0)?;
        }
        self.pwm
            .set_duty_cycle(if speed < 0.0 { -speed } else { speed })
            .map_err(|_| MotorError::HardwareFault)
    }

    #[inline]
    fn stop(&mut self) -> Result<(), MotorError> {
        self.pwm
            .set_duty_cycle(0.0)
            .map_err(|_| MotorError::HardwareFault)
    }
}
