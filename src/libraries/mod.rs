//! Common libraries
//!
//! This module contains vehicle-agnostic libraries shared by the arm layer
//! and the firmware entry point.
//!
//! ## Libraries
//!
//! - `motor_driver`: Motor driver abstraction (direction pin + PWM channel)
//! - `button`: Debounced push-on/push-off button handling

pub mod button;
pub mod motor_driver;

// Re-export commonly used types
pub use button::ToggleButton;
pub use motor_driver::{DirPwmMotor, Motor, MotorError};
