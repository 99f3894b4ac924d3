//! Root platform trait
//!
//! This module defines the root Platform trait that aggregates all peripheral
//! interfaces the arm controller needs.

use super::{GpioInterface, PwmConfig, PwmInterface, TimerInterface};
use crate::platform::Result;

/// Root platform trait
///
/// Platform implementations provide concrete types for each peripheral
/// interface via associated types, enabling zero-cost abstractions through
/// compile-time dispatch.
///
/// # Example
///
/// ```ignore
/// let mut platform = MockPlatform::init()?;
/// let pwm_in = platform.create_gpio(8)?;
/// let motor_pwm = platform.create_pwm(16, PwmConfig::default())?;
/// ```
pub trait Platform: Sized {
    /// GPIO peripheral type
    type Gpio: GpioInterface;

    /// PWM peripheral type
    type Pwm: PwmInterface;

    /// Timer peripheral type
    type Timer: TimerInterface;

    /// Initialize the platform
    ///
    /// Performs platform-specific initialization including clock configuration
    /// and peripheral setup.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::InitializationFailed` if initialization fails.
    fn init() -> Result<Self>;

    /// Get system clock frequency in Hz
    fn system_clock_hz(&self) -> u32;

    /// Create a GPIO peripheral instance
    ///
    /// # Arguments
    ///
    /// * `pin` - GPIO pin number
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::ResourceUnavailable` if the pin is already in
    /// use or the pin number is invalid.
    fn create_gpio(&mut self, pin: u8) -> Result<Self::Gpio>;

    /// Create a PWM peripheral instance
    ///
    /// # Arguments
    ///
    /// * `pin` - GPIO pin number for PWM output
    /// * `config` - PWM configuration
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::ResourceUnavailable` if the pin does not
    /// support PWM or the pin number is invalid.
    fn create_pwm(&mut self, pin: u8, config: PwmConfig) -> Result<Self::Pwm>;

    /// Get timer instance
    fn timer(&self) -> &Self::Timer;

    /// Get mutable timer instance
    fn timer_mut(&mut self) -> &mut Self::Timer;
}
