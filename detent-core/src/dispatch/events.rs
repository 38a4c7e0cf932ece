//! Inbound notifications and the actions they produce

use crate::input::Direction;

/// Inbound notification
///
/// The serialized form of the two interrupt sources. Handling them one
/// at a time from a single queue gives each handler exclusive access to
/// the dial state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Notification {
    /// Encoder port changed; carries the raw read
    EncoderSignal(u32),
    /// Debounce window elapsed
    DebounceExpired,
}

/// Visible effect of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DialAction {
    /// Button press accepted and the ring toggled
    Toggled {
        /// Ring state after the toggle
        enabled: bool,
    },
    /// A detent completed and the ring moved
    Moved {
        /// Detent direction
        direction: Direction,
        /// Cursor position after the move
        position: u8,
    },
}
