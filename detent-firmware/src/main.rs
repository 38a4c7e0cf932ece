//! Detent - Rotary Encoder LED Ring Firmware
//!
//! Main firmware binary for RP2040 boards. A quadrature encoder with
//! push-button moves a single lit LED around a 16-LED ring; the button
//! blanks and relights the ring.
//!
//! Pin assignments:
//! - GPIO2: encoder phase A
//! - GPIO3: encoder phase B
//! - GPIO4: encoder button
//! - GPIO6..GPIO21: LED ring, position 0 first

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use {defmt_rtt as _, panic_probe as _};

use detent_drivers::{EncoderPort, LedBar};

use crate::config::DIAL_CONFIG;

mod channels;
mod config;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Detent firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    info!(
        "Config: debounce={}ms, button_active_low={}, self_test={}",
        DIAL_CONFIG.debounce_ms, DIAL_CONFIG.button_active_low, DIAL_CONFIG.self_test
    );

    // Encoder inputs (pull-ups: the encoder switches to ground)
    let button_pull = if DIAL_CONFIG.button_active_low {
        Pull::Up
    } else {
        Pull::Down
    };
    let port = EncoderPort::new(
        Input::new(p.PIN_2, Pull::Up),
        Input::new(p.PIN_3, Pull::Up),
        Input::new(p.PIN_4, button_pull),
        DIAL_CONFIG.button_active_low,
    );

    // LED ring outputs, active-high
    let leds = LedBar::new_active_high([
        Output::new(p.PIN_6, Level::Low),
        Output::new(p.PIN_7, Level::Low),
        Output::new(p.PIN_8, Level::Low),
        Output::new(p.PIN_9, Level::Low),
        Output::new(p.PIN_10, Level::Low),
        Output::new(p.PIN_11, Level::Low),
        Output::new(p.PIN_12, Level::Low),
        Output::new(p.PIN_13, Level::Low),
        Output::new(p.PIN_14, Level::Low),
        Output::new(p.PIN_15, Level::Low),
        Output::new(p.PIN_16, Level::Low),
        Output::new(p.PIN_17, Level::Low),
        Output::new(p.PIN_18, Level::Low),
        Output::new(p.PIN_19, Level::Low),
        Output::new(p.PIN_20, Level::Low),
        Output::new(p.PIN_21, Level::Low),
    ]);
    info!("GPIO initialized");

    // Consumer first, so no notification waits on an absent reader
    spawner.spawn(tasks::dial_task(leds, DIAL_CONFIG)).unwrap();
    spawner.spawn(tasks::debounce_task()).unwrap();
    spawner.spawn(tasks::encoder_task(port)).unwrap();

    info!("All tasks spawned");
}
