//! Platform abstraction layer
//!
//! This module provides hardware abstraction for the peripherals the arm
//! controller touches: GPIO, PWM and the free-running timer. All
//! platform-specific code is isolated to this module.

pub mod error;
pub mod traits;

// Platform implementations (feature-gated)
#[cfg(feature = "pico2_w")]
pub mod rp2350;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{PlatformError, Result};
pub use traits::{GpioInterface, Platform, PwmInterface, TimerInterface};
