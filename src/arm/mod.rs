//! Arm vehicle layer
//!
//! Everything specific to the retractable arm lives here: decoding the PWM
//! command signal, mapping it onto a motor state, tracking travel with the
//! simulated tachometer, and the control-loop context that ties the three
//! together over a motor driver.
//!
//! One loop iteration is `ArmController::step(level, now)`:
//! decode → interpret → apply, run to completion, no suspension.

pub mod config;
pub mod controller;
pub mod decoder;
pub mod motion;
pub mod tachometer;

// Re-export main types
pub use controller::ArmController;
pub use decoder::PwmDecoder;
pub use motion::MotorState;
pub use tachometer::Tachometer;
