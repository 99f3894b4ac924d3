//! Timer interface trait
//!
//! This module defines the timer interface that platform implementations must
//! provide: blocking delays plus a monotonically increasing free-running
//! counter. The PWM decoder timestamps signal edges from `now_us()`.

use crate::platform::Result;

/// Timer interface trait
///
/// `now_us()` is read-only from the controller's perspective; the counter is
/// never reset while the system runs.
pub trait TimerInterface {
    /// Block for the given number of microseconds
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Timer(TimerError::InvalidDuration)` if the
    /// duration is not representable on the platform.
    fn delay_us(&mut self, us: u32) -> Result<()>;

    /// Block for the given number of milliseconds
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Timer` if the underlying delay fails.
    fn delay_ms(&mut self, ms: u32) -> Result<()>;

    /// Current value of the free-running counter in microseconds
    fn now_us(&self) -> u64;

    /// Current value of the free-running counter in milliseconds
    fn now_ms(&self) -> u64 {
        self.now_us() / 1000
    }
}
