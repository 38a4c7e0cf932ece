//! Dial dispatcher
//!
//! Owns all dial state plus the LED and timer collaborators. Every call
//! runs its read-modify-render sequence to completion, so the caller only
//! has to guarantee that calls do not overlap.

use crate::config::DialConfig;
use crate::input::{ButtonGate, Direction, QuadratureDecoder, RawSample};
use crate::ring::LedRing;
use crate::traits::{DebounceTimer, LedPublisher};

use super::events::DialAction;
use super::handler::SignalHandler;

/// All mutable dial state
///
/// Decoder and gate are independent: a pending debounce window does not
/// reset a half-finished detent, and vice versa.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DialState {
    pub decoder: QuadratureDecoder,
    pub gate: ButtonGate,
    pub ring: LedRing,
}

impl DialState {
    /// Power-on state: decoder idle, gate open, ring lit at position 0
    pub const fn new() -> Self {
        Self {
            decoder: QuadratureDecoder::new(),
            gate: ButtonGate::new(),
            ring: LedRing::new(),
        }
    }
}

/// Dispatcher for encoder and debounce notifications
pub struct Dispatcher<L, T> {
    state: DialState,
    leds: L,
    timer: T,
    debounce_ms: u32,
}

impl<L: LedPublisher, T: DebounceTimer> Dispatcher<L, T> {
    /// Create a dispatcher with power-on state
    pub fn new(config: &DialConfig, leds: L, timer: T) -> Self {
        Self {
            state: DialState::new(),
            leds,
            timer,
            debounce_ms: config.debounce_ms,
        }
    }

    /// Publish the current ring so the LEDs match the state
    pub fn start(&mut self) {
        self.publish();
    }

    /// Handle an encoder port change
    ///
    /// An accepted press toggles the ring and arms the debounce timer;
    /// that sample's phase bits are not decoded. Otherwise the phase bits
    /// go to the decoder and a completed detent moves the ring.
    pub fn on_encoder_signal(&mut self, raw: u32) -> Option<DialAction> {
        let sample = RawSample(raw);

        if self.state.gate.try_accept(sample.button().is_pressed()) {
            self.state.ring.toggle();
            self.timer.arm(self.debounce_ms);
            self.publish();
            return Some(DialAction::Toggled {
                enabled: self.state.ring.is_enabled(),
            });
        }

        let direction = self.state.decoder.step(sample.phase())?;
        match direction {
            Direction::Clockwise => self.state.ring.move_right(),
            Direction::CounterClockwise => self.state.ring.move_left(),
        }
        self.publish();

        Some(DialAction::Moved {
            direction,
            position: self.state.ring.position(),
        })
    }

    /// Handle debounce window expiry
    ///
    /// Only reopens the gate; the LEDs are unaffected.
    pub fn on_debounce_timer_expired(&mut self) {
        self.state.gate.reopen();
    }

    /// Current dial state
    pub fn state(&self) -> &DialState {
        &self.state
    }

    /// LED collaborator
    pub fn leds(&self) -> &L {
        &self.leds
    }

    /// Mutable LED collaborator (self-test playback)
    pub fn leds_mut(&mut self) -> &mut L {
        &mut self.leds
    }

    /// Timer collaborator
    pub fn timer(&self) -> &T {
        &self.timer
    }

    fn publish(&mut self) {
        self.leds.publish(self.state.ring.render());
    }
}

impl<L: LedPublisher, T: DebounceTimer> SignalHandler for Dispatcher<L, T> {
    fn on_signal(&mut self, raw: u32) -> Option<DialAction> {
        self.on_encoder_signal(raw)
    }

    fn on_timer_expired(&mut self) {
        self.on_debounce_timer_expired();
    }
}
