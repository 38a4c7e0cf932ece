//! Quadrature decoder state machine
//!
//! One detent is one full Gray-code cycle leaving and re-entering `11`.
//! Each direction has its own three-step path out of `Idle`:
//!
//! ```text
//! CW:  Idle -(01)-> CwHalf1 -(00)-> CwHalf2 -(10)-> CwHalf3 -(11)-> Idle  => Clockwise
//! CCW: Idle -(10)-> CcwHalf1 -(00)-> CcwHalf2 -(01)-> CcwHalf3 -(11)-> Idle => CounterClockwise
//! ```
//!
//! Steps may back up along their own path (contact bounce), and a `11`
//! before the last step abandons the cycle without an event.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::sample::PhaseSample;

/// Rotation direction of one detent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Clockwise rotation
    Clockwise,
    /// Counter-clockwise rotation
    CounterClockwise,
}

/// Decoder states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncoderState {
    /// Resting at `11`, the only state a detent can start from
    #[default]
    Idle,
    /// Saw `01` leaving idle
    CwHalf1,
    /// Saw `00` on the clockwise path
    CwHalf2,
    /// Saw `10` on the clockwise path; `11` completes the detent
    CwHalf3,
    /// Saw `10` leaving idle
    CcwHalf1,
    /// Saw `00` on the counter-clockwise path
    CcwHalf2,
    /// Saw `01` on the counter-clockwise path; `11` completes the detent
    CcwHalf3,
}

impl EncoderState {
    /// Process a phase sample and return the next state
    ///
    /// A direction is returned only on the step that closes a full cycle.
    /// Pairs not listed are no-ops.
    pub fn transition(self, sample: PhaseSample) -> (Self, Option<Direction>) {
        use EncoderState::*;
        use PhaseSample::*;

        match (self, sample) {
            // Leaving idle picks the direction
            (Idle, OnlyB) => (CwHalf1, None),
            (Idle, OnlyA) => (CcwHalf1, None),

            // Clockwise path
            (CwHalf1, BothHigh) => (Idle, None),
            (CwHalf1, BothLow) => (CwHalf2, None),
            (CwHalf2, OnlyB) => (CwHalf1, None),
            (CwHalf2, OnlyA) => (CwHalf3, None),
            (CwHalf3, BothHigh) => (Idle, Some(Direction::Clockwise)),
            (CwHalf3, BothLow) => (CwHalf2, None),

            // Counter-clockwise path
            (CcwHalf1, BothHigh) => (Idle, None),
            (CcwHalf1, BothLow) => (CcwHalf2, None),
            (CcwHalf2, OnlyB) => (CcwHalf3, None),
            (CcwHalf2, OnlyA) => (CcwHalf1, None),
            (CcwHalf3, BothHigh) => (Idle, Some(Direction::CounterClockwise)),
            (CcwHalf3, BothLow) => (CcwHalf2, None),

            // Default: stay in current state
            _ => (self, None),
        }
    }
}

/// Stateful quadrature decoder
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct QuadratureDecoder {
    state: EncoderState,
}

impl QuadratureDecoder {
    /// Create a decoder in `Idle`
    pub const fn new() -> Self {
        Self {
            state: EncoderState::Idle,
        }
    }

    /// Feed one phase sample
    ///
    /// Returns a direction when the sample completes a detent.
    pub fn step(&mut self, sample: PhaseSample) -> Option<Direction> {
        let (next, direction) = self.state.transition(sample);
        self.state = next;
        direction
    }

    /// Current state
    pub fn state(&self) -> EncoderState {
        self.state
    }
}
