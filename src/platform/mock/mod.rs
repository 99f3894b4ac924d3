//! Mock platform implementation for testing
//!
//! This module provides mock implementations of the platform traits so the
//! control loop and its components can be exercised without hardware.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! # Example
//!
//! ```ignore
//! let mut platform = MockPlatform::init().unwrap();
//! let mut pwm_in = platform.create_gpio(8).unwrap();
//! pwm_in.set_mode(GpioMode::Input).unwrap();
//! pwm_in.set_input_state(true);
//! assert!(pwm_in.read());
//! ```

#![cfg(any(test, feature = "mock"))]

mod gpio;
mod platform;
mod pwm;
mod timer;

pub use gpio::MockGpio;
pub use platform::MockPlatform;
pub use pwm::MockPwm;
pub use timer::MockTimer;
