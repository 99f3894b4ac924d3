//! Build-time configuration for the arm controller
//!
//! All values are fixed at build time; there is no runtime configuration
//! interface.
//!
//! # Pin Mapping Summary
//!
//! - **PWM command input**: GPIO 8 (floating input, polled)
//! - **Push button**: GPIO 2 (pull-up, active low)
//! - **Status LED**: GPIO 25 (onboard LED)
//! - **Motor direction**: GPIO 9
//! - **Motor PWM**: GPIO 16 (PWM slice 0, channel A)

/// Hi-time at or below which the command signal requests retraction (ticks)
pub const LO_THRESH: u32 = 3_000;

/// Hi-time at or above which the command signal requests extension (ticks)
///
/// Hi-times strictly between `LO_THRESH` and `HI_THRESH` form the dead-band
/// that maps to a stop command.
pub const HI_THRESH: u32 = 7_000;

/// Lower travel bound of the simulated tachometer (arm fully extended)
pub const TACH_MIN: i32 = 0;

/// Upper travel bound of the simulated tachometer (arm fully retracted)
pub const TACH_MAX: i32 = 100_000;

/// Fixed motor duty cycle while the arm is moving (50%)
pub const MOTOR_SPEED: f32 = 0.5;

/// Motor PWM carrier frequency in Hz
pub const MOTOR_PWM_FREQ_HZ: u32 = 1_000;

/// Consecutive confirming samples for a debounced button edge
pub const BUTTON_DEBOUNCE_SAMPLES: i8 = 2;

/// Spacing between accepted button samples (20 ms)
pub const BUTTON_SAMPLE_INTERVAL_US: u64 = 20_000;

/// GPIO pin number for the PWM command input
pub const PWM_IN_PIN: u8 = 8;

/// GPIO pin number for the push button
pub const BUTTON_PIN: u8 = 2;

/// GPIO pin number for the status LED (onboard LED)
pub const LED_PIN: u8 = 25;

/// GPIO pin number for the motor direction bit
pub const MOTOR_DIR_PIN: u8 = 9;

/// GPIO pin number for the motor PWM output
pub const MOTOR_PWM_PIN: u8 = 16;
