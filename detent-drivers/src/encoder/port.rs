//! Encoder input port
//!
//! Reads the two phase pins and the button pin and packs them into the
//! raw layout the dispatcher expects (B in bit 0, A in bit 1, button in
//! bit 2, pressed = 1).

use core::convert::Infallible;

use detent_core::input::RawSample;
use embedded_hal::digital::InputPin;

/// Encoder phase and button inputs
pub struct EncoderPort<A, B, S> {
    a: A,
    b: B,
    button: S,
    /// If true, the button reads LOW when pressed (pull-up wiring)
    button_active_low: bool,
    /// Last sample handed out by `poll_change`
    last: RawSample,
}

impl<A, B, S> EncoderPort<A, B, S>
where
    A: InputPin<Error = Infallible>,
    B: InputPin<Error = Infallible>,
    S: InputPin<Error = Infallible>,
{
    /// Create a new encoder port
    ///
    /// The pins are read once so the resting levels are not reported as
    /// a change.
    pub fn new(a: A, b: B, button: S, button_active_low: bool) -> Self {
        let mut port = Self {
            a,
            b,
            button,
            button_active_low,
            last: RawSample::default(),
        };
        port.last = port.sample();
        port
    }

    /// Read all three pins
    pub fn sample(&mut self) -> RawSample {
        let a = level(&mut self.a);
        let b = level(&mut self.b);
        let pressed = level(&mut self.button) != self.button_active_low;
        RawSample::from_levels(a, b, pressed)
    }

    /// Read all three pins and return the sample if it differs from the
    /// last one returned
    ///
    /// Call until `None` after every edge wakeup: a level that changed
    /// while the previous sample was being handled is picked up here
    /// instead of waiting for the next edge.
    pub fn poll_change(&mut self) -> Option<RawSample> {
        let raw = self.sample();
        if raw == self.last {
            return None;
        }
        self.last = raw;
        Some(raw)
    }

    /// Access the pins (for edge waiting)
    pub fn pins_mut(&mut self) -> (&mut A, &mut B, &mut S) {
        (&mut self.a, &mut self.b, &mut self.button)
    }
}

fn level<P: InputPin<Error = Infallible>>(pin: &mut P) -> bool {
    match pin.is_high() {
        Ok(high) => high,
        Err(e) => match e {},
    }
}
