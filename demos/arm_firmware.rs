//! Arm controller firmware for the Raspberry Pi Pico 2
//!
//! Polls the PWM command input and drives the arm motor; a push button
//! toggles the status LED. The control loop runs decode → interpret → apply
//! to completion every iteration and never sleeps in the motor path.
//!
//! # Hardware
//!
//! - PWM command input on GPIO 8 (floating input)
//! - Push button on GPIO 2 (pull-up, active low)
//! - Status LED on GPIO 25 (onboard LED)
//! - Motor direction on GPIO 9
//! - Motor PWM on GPIO 16 (PWM slice 0, channel A)
//!
//! # Build
//!
//! ```bash
//! cargo build --release --example arm_firmware \
//!     --features pico2_w --target thumbv8m.main-none-eabihf
//! ```

#![no_std]
#![no_main]

use {defmt_rtt as _, panic_probe as _};

use rp235x_hal as hal;

use hal::clocks::init_clocks_and_plls;

use pico_arm::arm::config::{
    BUTTON_DEBOUNCE_SAMPLES, BUTTON_SAMPLE_INTERVAL_US, MOTOR_PWM_FREQ_HZ,
};
use pico_arm::arm::ArmController;
use pico_arm::libraries::button::ToggleButton;
use pico_arm::libraries::motor_driver::DirPwmMotor;
use pico_arm::platform::rp2350::{Rp2350Gpio, Rp2350Platform, Rp2350Pwm, Rp2350Timer};
use pico_arm::platform::traits::{
    GpioInterface, GpioMode, Platform, PwmConfig, PwmInterface, TimerInterface,
};

/// Tell the Boot ROM about our application
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: hal::block::ImageDef = hal::block::ImageDef::secure_exe();

/// External crystal frequency on the Pico 2 board
const XTAL_FREQ_HZ: u32 = 12_000_000;

#[hal::entry]
fn main() -> ! {
    defmt::info!("arm controller starting");

    let mut pac = hal::pac::Peripherals::take().unwrap();
    let mut watchdog = hal::Watchdog::new(pac.WATCHDOG);

    let clocks = init_clocks_and_plls(
        XTAL_FREQ_HZ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    let sio = hal::Sio::new(pac.SIO);
    let pins = hal::gpio::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let timer = Rp2350Timer::new(hal::Timer::new_timer0(
        pac.TIMER0,
        &mut pac.RESETS,
        &clocks,
    ));
    let platform = Rp2350Platform::new(timer, clocks.system_clock.freq().to_Hz());

    // Control and indicator pins
    let pwm_in = Rp2350Gpio::new(pins.gpio8.into_floating_input(), GpioMode::Input);
    let button = Rp2350Gpio::new(pins.gpio2.into_pull_up_input(), GpioMode::InputPullUp);
    let mut led = Rp2350Gpio::new(
        pins.gpio25.into_push_pull_output(),
        GpioMode::OutputPushPull,
    );

    // Motor: direction bit + PWM duty on slice 0 channel A
    let motor_dir = Rp2350Gpio::new(
        pins.gpio9.into_push_pull_output(),
        GpioMode::OutputPushPull,
    );
    let pwm_slices = hal::pwm::Slices::new(pac.PWM, &mut pac.RESETS);
    let mut pwm0 = pwm_slices.pwm0;
    pwm0.channel_a.output_to(pins.gpio16);
    let mut motor_pwm = Rp2350Pwm::new(
        pwm0,
        platform.system_clock_hz(),
        PwmConfig {
            frequency: MOTOR_PWM_FREQ_HZ,
            duty_cycle: 0.0,
        },
    );
    motor_pwm.enable();

    let motor = DirPwmMotor::new(motor_dir, motor_pwm);
    let mut controller = ArmController::new(motor);
    let mut toggle = ToggleButton::new(BUTTON_DEBOUNCE_SAMPLES, BUTTON_SAMPLE_INTERVAL_US);

    defmt::info!("arm controller ready");

    loop {
        let now_us = platform.timer().now_us();

        // Push-on/push-off button drives the status LED
        if toggle.poll(&button, &mut led, now_us).is_err() {
            defmt::warn!("LED write failed");
        }

        // One control iteration: decode the polled PWM level, interpret,
        // drive the motor. The decoder expects the wrapping 32-bit view of
        // the counter.
        let level = pwm_in.read();
        if controller.step(level, now_us as u32).is_err() {
            defmt::warn!("motor command failed");
        }
    }
}
