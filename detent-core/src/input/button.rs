//! One-shot button debounce gate
//!
//! An accepted press closes the gate; every later sample is ignored until
//! the debounce timer expires and reopens it. Holding the button across
//! several windows toggles once per window.

/// Debounce gate state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum GateState {
    /// Next press is accepted
    #[default]
    Open,
    /// Waiting for the debounce window to expire
    Armed,
}

/// Edge-triggered button gate
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonGate {
    state: GateState,
}

impl ButtonGate {
    /// Create an open gate
    pub const fn new() -> Self {
        Self {
            state: GateState::Open,
        }
    }

    /// Try to accept a button sample
    ///
    /// Returns true only for a press while the gate is open; the gate is
    /// then armed. Anything else leaves the gate unchanged.
    pub fn try_accept(&mut self, pressed: bool) -> bool {
        if pressed && self.is_open() {
            self.state = GateState::Armed;
            true
        } else {
            false
        }
    }

    /// Reopen the gate (debounce window expired)
    pub fn reopen(&mut self) {
        self.state = GateState::Open;
    }

    /// Check if the next press will be accepted
    pub fn is_open(&self) -> bool {
        self.state == GateState::Open
    }
}
