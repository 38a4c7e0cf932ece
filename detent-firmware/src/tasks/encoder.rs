//! Encoder signal task
//!
//! Waits for an edge on any encoder pin, samples the whole port and queues
//! the raw read for the dial task.

use defmt::*;
use embassy_futures::select::select3;
use embassy_rp::gpio::Input;

use detent_core::Notification;
use detent_drivers::EncoderPort;

use crate::channels::NOTIFICATIONS;

/// Encoder port on RP2040 GPIO inputs
pub type RpEncoderPort = EncoderPort<Input<'static>, Input<'static>, Input<'static>>;

/// Encoder task - one notification per pin level change
#[embassy_executor::task]
pub async fn encoder_task(mut port: RpEncoderPort) {
    info!("Encoder task started");

    loop {
        {
            let (a, b, button) = port.pins_mut();
            select3(
                a.wait_for_any_edge(),
                b.wait_for_any_edge(),
                button.wait_for_any_edge(),
            )
            .await;
        }

        // Edges are unwatched while a sample is queued; re-read until
        // the levels settle so no intermediate state is skipped
        while let Some(raw) = port.poll_change() {
            trace!("Encoder sample: {=u32:#b}", raw.0);
            NOTIFICATIONS.send(Notification::EncoderSignal(raw.0)).await;
        }
    }
}
