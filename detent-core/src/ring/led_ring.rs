//! Cursor on a 16-LED ring
//!
//! Position arithmetic wraps: moving right from 0 lands on 15, moving
//! left from 15 lands on 0. Moves are ignored while the ring is disabled,
//! but the position survives disable/enable.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of LEDs on the ring
pub const RING_SIZE: u8 = 16;

/// LED ring state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LedRing {
    /// Lit LED index, always below `RING_SIZE`
    position: u8,
    /// When false every LED is dark
    enabled: bool,
}

impl Default for LedRing {
    fn default() -> Self {
        Self::new()
    }
}

impl LedRing {
    /// Create a ring at position 0, enabled
    pub const fn new() -> Self {
        Self {
            position: 0,
            enabled: true,
        }
    }

    /// Create a ring at an arbitrary position (taken modulo `RING_SIZE`)
    pub const fn with_position(position: u8, enabled: bool) -> Self {
        Self {
            position: position % RING_SIZE,
            enabled,
        }
    }

    /// Step the cursor one LED down (clockwise detent)
    pub fn move_right(&mut self) {
        if self.enabled {
            self.position = (self.position + RING_SIZE - 1) % RING_SIZE;
        }
    }

    /// Step the cursor one LED up (counter-clockwise detent)
    pub fn move_left(&mut self) {
        if self.enabled {
            self.position = (self.position + 1) % RING_SIZE;
        }
    }

    /// Light the ring
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Blank the ring, keeping the position
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Flip the enable flag
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    /// One-hot mask of the lit LED, or 0 when disabled
    pub fn render(&self) -> u16 {
        if self.enabled {
            1 << self.position
        } else {
            0
        }
    }

    /// Current cursor position
    pub fn position(&self) -> u8 {
        self.position
    }

    /// Check if the ring is lit
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}
