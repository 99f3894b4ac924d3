//! Motor state interpretation
//!
//! Maps the decoded hi-time, the current motor state and the tachometer
//! position onto the next motor state. Hi-times above `HI_THRESH` request
//! extension, below `LO_THRESH` retraction, and the dead-band in between
//! maps to stop so a mid-range or noisy duty cycle cannot make the motor
//! oscillate between directions.

use super::config::{HI_THRESH, LO_THRESH, TACH_MAX, TACH_MIN};

/// Motor command state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "pico2_w", derive(defmt::Format))]
pub enum MotorState {
    /// Motor halted
    Stop,
    /// Arm extending (position moving toward `TACH_MIN`)
    Extend,
    /// Arm retracting (position moving toward `TACH_MAX`)
    Retract,
}

impl MotorState {
    /// State name for logging
    pub fn name(&self) -> &'static str {
        match self {
            MotorState::Stop => "stop",
            MotorState::Extend => "extend",
            MotorState::Retract => "retract",
        }
    }
}

/// Compute the next motor state
///
/// Rules are evaluated in priority order; each guards against re-entering
/// the state it already holds, so a tie or unchanged input never causes a
/// transition:
///
/// 1. Hi-time above `HI_THRESH` requests extension, honored only while the
///    position is above `TACH_MIN`.
/// 2. Hi-time below `LO_THRESH` requests retraction, honored only while the
///    position is below `TACH_MAX`.
/// 3. Hi-time inside the dead-band stops the motor.
/// 4. Anything else (thresholds hit exactly, or a request blocked by a
///    travel limit) leaves the state unchanged.
pub fn next_state(hi_time: u32, current: MotorState, position: i32) -> MotorState {
    if current != MotorState::Extend && hi_time > HI_THRESH && position > TACH_MIN {
        MotorState::Extend
    } else if current != MotorState::Retract && hi_time < LO_THRESH && position < TACH_MAX {
        MotorState::Retract
    } else if hi_time > LO_THRESH && hi_time < HI_THRESH {
        MotorState::Stop
    } else {
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MID: u32 = (LO_THRESH + HI_THRESH) / 2;

    #[test]
    fn test_high_command_extends() {
        let next = next_state(HI_THRESH + 1, MotorState::Stop, TACH_MIN + 1);
        assert_eq!(next, MotorState::Extend);
    }

    #[test]
    fn test_low_command_retracts() {
        let next = next_state(LO_THRESH - 1, MotorState::Stop, TACH_MAX - 1);
        assert_eq!(next, MotorState::Retract);
    }

    #[test]
    fn test_dead_band_stops() {
        assert_eq!(next_state(MID, MotorState::Extend, 500), MotorState::Stop);
        assert_eq!(next_state(MID, MotorState::Retract, 500), MotorState::Stop);
        assert_eq!(next_state(MID, MotorState::Stop, 500), MotorState::Stop);
    }

    #[test]
    fn test_extend_blocked_at_lower_limit() {
        // Command says extend but travel is exhausted: state persists
        let next = next_state(HI_THRESH + 1, MotorState::Stop, TACH_MIN);
        assert_eq!(next, MotorState::Stop);
    }

    #[test]
    fn test_retract_blocked_at_upper_limit() {
        let next = next_state(LO_THRESH - 1, MotorState::Stop, TACH_MAX);
        assert_eq!(next, MotorState::Stop);
    }

    #[test]
    fn test_no_reentry_into_current_state() {
        // Already extending and still commanded to extend: rule 1 is skipped
        // and nothing else matches, so the state simply persists.
        let next = next_state(HI_THRESH + 1, MotorState::Extend, 500);
        assert_eq!(next, MotorState::Extend);

        let next = next_state(LO_THRESH - 1, MotorState::Retract, 500);
        assert_eq!(next, MotorState::Retract);
    }

    #[test]
    fn test_exact_thresholds_match_no_rule() {
        assert_eq!(next_state(HI_THRESH, MotorState::Retract, 500), MotorState::Retract);
        assert_eq!(next_state(LO_THRESH, MotorState::Extend, 500), MotorState::Extend);
        assert_eq!(next_state(HI_THRESH, MotorState::Stop, 500), MotorState::Stop);
    }

    #[test]
    fn test_direction_reversal_without_dead_band_pass() {
        // Extending, then the command drops below LO_THRESH: direct
        // transition to retract is allowed while travel permits.
        let next = next_state(LO_THRESH - 1, MotorState::Extend, 500);
        assert_eq!(next, MotorState::Retract);
    }
}
