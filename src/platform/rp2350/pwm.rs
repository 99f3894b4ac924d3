//! RP2350 PWM implementation
//!
//! This module provides PWM support for RP2350 using the `rp235x-hal` crate.
//! The motor duty cycle is driven through channel A of the wrapped slice.

use crate::platform::{
    error::{PlatformError, PwmError},
    traits::{PwmConfig, PwmInterface},
    Result,
};
use rp235x_hal::pwm::{Slice, SliceId};

/// RP2350 PWM implementation
///
/// Wraps a `rp235x-hal` free-running PWM slice to implement the
/// `PwmInterface` trait.
pub struct Rp2350Pwm<S: SliceId> {
    slice: Slice<S, rp235x_hal::pwm::FreeRunning>,
    duty_cycle: f32,
    frequency: u32,
    enabled: bool,
    system_clock_hz: u32,
}

impl<S: SliceId> Rp2350Pwm<S> {
    /// Create a new RP2350 PWM instance
    ///
    /// The slice's channel A must already be routed to the output pin
    /// (`slice.channel_a.output_to(pin)`).
    ///
    /// # Arguments
    ///
    /// * `slice` - The HAL PWM slice
    /// * `system_clock_hz` - System clock feeding the PWM block
    /// * `config` - PWM configuration
    pub fn new(
        slice: Slice<S, rp235x_hal::pwm::FreeRunning>,
        system_clock_hz: u32,
        config: PwmConfig,
    ) -> Self {
        let mut pwm = Self {
            slice,
            duty_cycle: config.duty_cycle,
            frequency: config.frequency,
            enabled: false,
            system_clock_hz,
        };

        let _ = pwm.set_frequency(config.frequency);
        let _ = pwm.set_duty_cycle(config.duty_cycle);

        pwm
    }

    /// Calculate compare value from duty cycle
    fn duty_to_compare(&self, duty: f32) -> u16 {
        let top = self.slice.get_top();
        (duty * top as f32) as u16
    }
}

impl<S: SliceId> PwmInterface for Rp2350Pwm<S> {
    fn set_duty_cycle(&mut self, duty_cycle: f32) -> Result<()> {
        if !(0.0..=1.0).contains(&duty_cycle) {
            return Err(PlatformError::Pwm(PwmError::InvalidDutyCycle));
        }

        self.duty_cycle = duty_cycle;
        let compare = self.duty_to_compare(duty_cycle);

        self.slice.channel_a.set_duty_cycle(compare);

        Ok(())
    }

    fn duty_cycle(&self) -> f32 {
        self.duty_cycle
    }

    fn set_frequency(&mut self, frequency: u32) -> Result<()> {
        if frequency == 0 {
            return Err(PlatformError::Pwm(PwmError::InvalidFrequency));
        }

        self.frequency = frequency;

        // PWM frequency = sys_clock / (DIV * (TOP + 1)); fixed TOP for
        // maximum resolution, integer divider derived from the request.
        let top: u16 = 65535;
        let divider = self.system_clock_hz / (frequency * (top as u32 + 1));

        if divider > 255 {
            return Err(PlatformError::Pwm(PwmError::InvalidFrequency));
        }

        self.slice.set_div_int(divider.max(1) as u8);
        self.slice.set_top(top);

        // Re-apply duty cycle with new top value
        let compare = self.duty_to_compare(self.duty_cycle);
        self.slice.channel_a.set_duty_cycle(compare);

        Ok(())
    }

    fn frequency(&self) -> u32 {
        self.frequency
    }

    fn enable(&mut self) {
        self.slice.enable();
        self.enabled = true;
    }

    fn disable(&mut self) {
        self.slice.disable();
        self.enabled = false;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}
