//! Shared infrastructure
//!
//! This module contains infrastructure used across the firmware, currently
//! the logging abstraction.

pub mod logging;
