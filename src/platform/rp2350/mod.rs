//! RP2350 platform implementation for Raspberry Pi Pico 2
//!
//! This module provides concrete implementations of the platform abstraction
//! traits for the RP2350 microcontroller using the `rp235x-hal` crate.
//!
//! # Feature Gate
//!
//! This module is only available when the `pico2_w` feature is enabled.
//!
//! # Usage
//!
//! Applications initialize pins, PWM slices and the timer directly from the
//! HAL and wrap them in these types; see `demos/arm_firmware.rs`.

mod gpio;
mod platform;
mod pwm;
mod timer;

pub use gpio::Rp2350Gpio;
pub use platform::Rp2350Platform;
pub use pwm::Rp2350Pwm;
pub use timer::Rp2350Timer;
