//! Debounce timer task
//!
//! One-shot: each arm request produces exactly one expiry notification.

use defmt::*;
use embassy_time::{Duration, Timer};

use detent_core::traits::DebounceTimer;
use detent_core::Notification;

use crate::channels::{DEBOUNCE_ARM, NOTIFICATIONS};

/// Debounce timer backed by the debounce task
pub struct SignalTimer;

impl DebounceTimer for SignalTimer {
    fn arm(&mut self, window_ms: u32) {
        DEBOUNCE_ARM.signal(window_ms);
    }
}

/// Debounce task - waits for an arm request, sleeps the window, reports expiry
#[embassy_executor::task]
pub async fn debounce_task() {
    info!("Debounce task started");

    loop {
        let window_ms = DEBOUNCE_ARM.wait().await;
        trace!("Debounce armed for {} ms", window_ms);

        Timer::after(Duration::from_millis(window_ms as u64)).await;

        // Must not be dropped: the button stays locked out until this lands
        NOTIFICATIONS.send(Notification::DebounceExpired).await;
        trace!("Debounce expired");
    }
}
