//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use detent_core::Notification;

/// Channel capacity for dial notifications
const NOTIFICATION_CHANNEL_SIZE: usize = 16;

/// Encoder samples and debounce expiries, drained by the dial task only
///
/// Single consumer: each notification is handled to completion before the
/// next is taken, so dial state never sees interleaved handlers.
pub static NOTIFICATIONS: Channel<
    CriticalSectionRawMutex,
    Notification,
    NOTIFICATION_CHANNEL_SIZE,
> = Channel::new();

/// Debounce window request (ms), raised by the dial task on an accepted press
pub static DEBOUNCE_ARM: Signal<CriticalSectionRawMutex, u32> = Signal::new();
