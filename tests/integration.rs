#![cfg_attr(feature = "pico2_w", no_std)]
#![cfg_attr(feature = "pico2_w", no_main)]
#![cfg(feature = "pico2_w")] // Only compile for embedded targets

use pico_arm as _; // memory layout
use {defmt_rtt as _, panic_probe as _};

#[defmt_test::tests]
mod tests {
    use defmt::assert_eq;
    use pico_arm::arm::config::{HI_THRESH, TACH_MIN};
    use pico_arm::arm::{motion, MotorState, PwmDecoder};

    #[test]
    fn decoder_measures_hi_time() {
        let mut dec = PwmDecoder::new();
        dec.sample(true, 100);
        dec.sample(false, 4100);
        assert_eq!(dec.hi_time(), Some(4000));
    }

    #[test]
    fn extend_gated_at_lower_bound() {
        let next = motion::next_state(HI_THRESH + 1, MotorState::Stop, TACH_MIN);
        assert_eq!(next, MotorState::Stop);
    }
}
