//! Interrupt-facing handler trait
//!
//! Platform glue (an interrupt vector, an async task, a test) calls these
//! two methods; it never touches the dial state directly.

use super::events::{DialAction, Notification};

/// Receiver of the encoder and debounce-timer notifications
///
/// Callers must not run two methods concurrently on the same handler.
/// Where both sources can fire in parallel, serialize them first (for
/// example through one queue drained by one task).
pub trait SignalHandler {
    /// Encoder port changed
    fn on_signal(&mut self, raw: u32) -> Option<DialAction>;

    /// Debounce window elapsed
    fn on_timer_expired(&mut self);

    /// Handle a serialized notification
    fn handle(&mut self, notification: Notification) -> Option<DialAction> {
        match notification {
            Notification::EncoderSignal(raw) => self.on_signal(raw),
            Notification::DebounceExpired => {
                self.on_timer_expired();
                None
            }
        }
    }
}
