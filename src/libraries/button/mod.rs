//! Debounced push-on/push-off button handling
//!
//! A mechanical push button toggles the status LED: one full press-release
//! cycle flips the LED state once. The button is sampled from the control
//! loop, so debouncing is poll-based rather than delay-based: samples are
//! taken at a fixed interval and a majority counter must fill before an edge
//! is accepted. Contact bounce shorter than the sample interval never
//! reaches the counter.
//!
//! The button input is active low (pressed pulls the line to ground).

use crate::platform::traits::GpioInterface;
use crate::platform::Result;

/// Debounced toggle button
///
/// Feed one sample per call to [`ToggleButton::poll`]; the LED is toggled on
/// a debounced press and the release must debounce before the next toggle.
#[derive(Debug)]
pub struct ToggleButton {
    /// Microseconds between accepted samples
    sample_interval_us: u64,
    /// Consecutive confirming samples required for an edge
    threshold: i8,
    /// Majority counter, clamped to [-threshold, +threshold]
    counter: i8,
    /// Press consumed; waiting for a debounced release
    latched: bool,
    last_sample_us: Option<u64>,
}

impl ToggleButton {
    /// Create a new toggle button handler
    ///
    /// # Arguments
    ///
    /// * `threshold` - Consecutive confirming samples required to accept a
    ///   press or release (must be >= 1)
    /// * `sample_interval_us` - Minimum spacing between accepted samples
    pub const fn new(threshold: i8, sample_interval_us: u64) -> Self {
        Self {
            sample_interval_us,
            threshold,
            counter: 0,
            latched: false,
            last_sample_us: None,
        }
    }

    /// Sample the button and toggle the LED on a debounced press
    ///
    /// Calls between sample intervals are no-ops, so this can run every
    /// control-loop iteration regardless of loop rate.
    ///
    /// # Arguments
    ///
    /// * `button` - Button input pin (active low)
    /// * `led` - LED output pin to toggle
    /// * `now_us` - Current free-running counter value
    ///
    /// # Returns
    ///
    /// `Ok(true)` if the LED was toggled by this sample.
    ///
    /// # Errors
    ///
    /// Propagates the platform error if the LED write fails.
    pub fn poll<B, L>(&mut self, button: &B, led: &mut L, now_us: u64) -> Result<bool>
    where
        B: GpioInterface,
        L: GpioInterface,
    {
        if let Some(last) = self.last_sample_us {
            if now_us.saturating_sub(last) < self.sample_interval_us {
                return Ok(false);
            }
        }
        self.last_sample_us = Some(now_us);

        let pressed = !button.read();
        if pressed {
            if self.counter < self.threshold {
                self.counter += 1;
            }
        } else if self.counter > -self.threshold {
            self.counter -= 1;
        }

        if self.counter >= self.threshold && !self.latched {
            self.latched = true;
            led.toggle()?;
            return Ok(true);
        }

        if self.counter <= -self.threshold && self.latched {
            self.latched = false;
        }

        Ok(false)
    }
}
