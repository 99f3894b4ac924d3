#![cfg_attr(not(test), no_std)]

//! pico_arm - PWM-commanded retractable arm controller for the Raspberry Pi Pico 2
//!
//! This library decodes a pulse-width-modulated command signal by polling a
//! GPIO line, maps the measured high-time onto a three-state motor command
//! (stop / extend / retract), and tracks arm travel with a bounded simulated
//! tachometer so the motor is never driven past its mechanical limits.

// Platform abstraction layer (GPIO / PWM / timer)
pub mod platform;

// Logging and other shared infrastructure
pub mod core;

// Vehicle-agnostic libraries (motor driver, button handling)
pub mod libraries;

// Arm vehicle layer: decoder, state machine, tachometer, control loop
pub mod arm;
