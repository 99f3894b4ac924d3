//! RP2350 Platform implementation
//!
//! This module provides the root Platform trait implementation for RP2350.
//!
//! # Note
//!
//! HAL peripheral initialization on RP2350 moves pin and slice singletons by
//! value, which does not fit behind `create_gpio(pin: u8)`-style runtime
//! lookup without a large registry. Applications therefore initialize pins,
//! PWM slices and the timer directly from the HAL, wrap them in
//! [`Rp2350Gpio`](super::Rp2350Gpio) / [`Rp2350Pwm`](super::Rp2350Pwm) /
//! [`Rp2350Timer`](super::Rp2350Timer), and use this type only for the timer
//! and clock queries.

use crate::platform::{
    error::PlatformError,
    traits::{Platform, PwmConfig},
    Result,
};

use super::Rp2350Timer;
use rp235x_hal::timer::TimerDevice;

/// RP2350 Platform implementation
pub struct Rp2350Platform<D: TimerDevice> {
    timer: Rp2350Timer<D>,
    system_clock_hz: u32,
}

impl<D: TimerDevice> Rp2350Platform<D> {
    /// Default system clock frequency for RP2350
    pub const SYSTEM_CLOCK_HZ: u32 = 150_000_000;

    /// Create a new platform instance around an initialized HAL timer
    pub fn new(timer: Rp2350Timer<D>, system_clock_hz: u32) -> Self {
        Self {
            timer,
            system_clock_hz,
        }
    }
}

impl<D: TimerDevice> Platform for Rp2350Platform<D> {
    type Gpio = super::Rp2350Gpio<
        rp235x_hal::gpio::bank0::Gpio25,
        rp235x_hal::gpio::FunctionSioOutput,
        rp235x_hal::gpio::PullNone,
    >;
    type Pwm = super::Rp2350Pwm<rp235x_hal::pwm::Pwm0>;
    type Timer = Rp2350Timer<D>;

    fn init() -> Result<Self> {
        // Clock and peripheral singletons must come from the application's
        // entry point; see the module note.
        Err(PlatformError::InitializationFailed)
    }

    fn system_clock_hz(&self) -> u32 {
        self.system_clock_hz
    }

    fn create_gpio(&mut self, _pin: u8) -> Result<Self::Gpio> {
        Err(PlatformError::ResourceUnavailable)
    }

    fn create_pwm(&mut self, _pin: u8, _config: PwmConfig) -> Result<Self::Pwm> {
        Err(PlatformError::ResourceUnavailable)
    }

    fn timer(&self) -> &Self::Timer {
        &self.timer
    }

    fn timer_mut(&mut self) -> &mut Self::Timer {
        &mut self.timer
    }
}
