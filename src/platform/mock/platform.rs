//! Mock Platform implementation for testing

use crate::platform::{
    error::PlatformError,
    traits::{Platform, PwmConfig},
    Result,
};

use super::{MockGpio, MockPwm, MockTimer};

/// Mock Platform implementation
///
/// Provides mock peripheral implementations for hardware-free testing. GPIO
/// allocation is tracked in a fixed table so double allocation of a pin fails
/// the way it would on hardware.
#[derive(Debug)]
pub struct MockPlatform {
    timer: MockTimer,
    gpio_allocated: [bool; Self::GPIO_COUNT],
}

impl MockPlatform {
    /// Number of GPIO pins on the simulated package
    pub const GPIO_COUNT: usize = 30;

    /// Create a new mock platform
    pub fn new() -> Self {
        Self {
            timer: MockTimer::new(),
            gpio_allocated: [false; Self::GPIO_COUNT],
        }
    }
}

impl Default for MockPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for MockPlatform {
    type Gpio = MockGpio;
    type Pwm = MockPwm;
    type Timer = MockTimer;

    fn init() -> Result<Self> {
        Ok(Self::new())
    }

    fn system_clock_hz(&self) -> u32 {
        150_000_000 // Simulated RP2350 system clock
    }

    fn create_gpio(&mut self, pin: u8) -> Result<Self::Gpio> {
        let slot = self
            .gpio_allocated
            .get_mut(pin as usize)
            .ok_or(PlatformError::ResourceUnavailable)?;
        if *slot {
            return Err(PlatformError::ResourceUnavailable);
        }
        *slot = true;
        Ok(MockGpio::new_output())
    }

    fn create_pwm(&mut self, pin: u8, config: PwmConfig) -> Result<Self::Pwm> {
        if pin as usize >= Self::GPIO_COUNT {
            return Err(PlatformError::ResourceUnavailable);
        }
        Ok(MockPwm::new(config))
    }

    fn timer(&self) -> &Self::Timer {
        &self.timer
    }

    fn timer_mut(&mut self) -> &mut Self::Timer {
        &mut self.timer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::traits::{GpioInterface, TimerInterface};

    #[test]
    fn test_mock_platform_init() {
        let platform = MockPlatform::init().unwrap();
        assert_eq!(platform.system_clock_hz(), 150_000_000);
    }

    #[test]
    fn test_mock_platform_gpio() {
        let mut platform = MockPlatform::new();
        let mut gpio0 = platform.create_gpio(0).unwrap();
        gpio0.set_high().unwrap();

        // Same GPIO should not be allocatable twice
        assert!(platform.create_gpio(0).is_err());

        // Different GPIO should work
        let _gpio1 = platform.create_gpio(1).unwrap();

        // Invalid GPIO should fail
        assert!(platform.create_gpio(100).is_err());
    }

    #[test]
    fn test_mock_platform_pwm() {
        let mut platform = MockPlatform::new();
        assert!(platform.create_pwm(16, PwmConfig::default()).is_ok());
        assert!(platform.create_pwm(100, PwmConfig::default()).is_err());
    }

    #[test]
    fn test_mock_platform_timer() {
        let mut platform = MockPlatform::new();
        platform.timer_mut().delay_us(1000).unwrap();
        assert_eq!(platform.timer().now_us(), 1000);
    }
}
