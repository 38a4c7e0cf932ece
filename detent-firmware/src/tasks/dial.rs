//! Dial task
//!
//! Sole owner of the dispatcher. Drains the notification channel and
//! drives the LED bar.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_time::{Duration, Timer};

use detent_core::config::DialConfig;
use detent_core::ring::self_test;
use detent_core::traits::LedPublisher;
use detent_core::{Dispatcher, SignalHandler};
use detent_drivers::LedBar;

use super::debounce::SignalTimer;
use crate::channels::NOTIFICATIONS;

/// LED bar on RP2040 GPIO outputs
pub type RpLedBar = LedBar<Output<'static>>;

type RpDispatcher = Dispatcher<RpLedBar, SignalTimer>;

/// Dial task - handles every notification in arrival order
#[embassy_executor::task]
pub async fn dial_task(leds: RpLedBar, config: DialConfig) {
    info!("Dial task started");

    let mut dispatcher = Dispatcher::new(&config, leds, SignalTimer);

    if config.self_test {
        run_self_test(&mut dispatcher).await;
    }

    dispatcher.start();
    info!("Dial ready, mask {=u16:#x}", dispatcher.leds().mask());

    loop {
        let notification = NOTIFICATIONS.receive().await;
        trace!("Notification: {:?}", notification);

        if let Some(action) = dispatcher.handle(notification) {
            debug!(
                "Action: {:?}, mask {=u16:#x}",
                action,
                dispatcher.leds().mask()
            );
        }
    }
}

/// Play the LED sweep without touching dial state
async fn run_self_test(dispatcher: &mut RpDispatcher) {
    info!("LED self-test");

    let frames = self_test::sequence(&dispatcher.state().ring);
    for frame in frames {
        dispatcher.leds_mut().publish(frame.mask);
        if frame.hold_us > 0 {
            Timer::after(Duration::from_micros(frame.hold_us as u64)).await;
        }
    }
}
