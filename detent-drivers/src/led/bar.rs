//! GPIO LED bar
//!
//! Sixteen LEDs, one output pin each. Pin `i` shows bit `i` of the
//! published mask. Supports active-high (default) and active-low wiring.

use core::convert::Infallible;

use detent_core::ring::RING_SIZE;
use detent_core::traits::LedPublisher;
use embedded_hal::digital::{OutputPin, PinState};

/// Number of LEDs driven by the bar
pub const BAR_WIDTH: usize = RING_SIZE as usize;

/// LED bar on individual GPIO pins
pub struct LedBar<P> {
    pins: [P; BAR_WIDTH],
    /// If true, LED ON = pin LOW
    inverted: bool,
    /// Last mask written
    mask: u16,
}

impl<P> LedBar<P>
where
    P: OutputPin<Error = Infallible>,
{
    /// Create a new LED bar
    ///
    /// # Arguments
    /// - `pins`: Output pins, index 0 first
    /// - `inverted`: If true, an LED is lit when its pin is LOW
    ///
    /// All LEDs start dark.
    pub fn new(pins: [P; BAR_WIDTH], inverted: bool) -> Self {
        let mut bar = Self {
            pins,
            inverted,
            mask: 0,
        };
        bar.write(0);
        bar
    }

    /// Create a new LED bar with active-high outputs
    pub fn new_active_high(pins: [P; BAR_WIDTH]) -> Self {
        Self::new(pins, false)
    }

    /// Create a new LED bar with active-low outputs
    pub fn new_active_low(pins: [P; BAR_WIDTH]) -> Self {
        Self::new(pins, true)
    }

    /// Last mask written to the pins
    pub fn mask(&self) -> u16 {
        self.mask
    }

    fn write(&mut self, mask: u16) {
        for (i, pin) in self.pins.iter_mut().enumerate() {
            let lit = mask & (1 << i) != 0;
            if let Err(e) = pin.set_state(PinState::from(lit != self.inverted)) {
                match e {}
            }
        }
        self.mask = mask;
    }
}

impl<P> LedPublisher for LedBar<P>
where
    P: OutputPin<Error = Infallible>,
{
    fn publish(&mut self, mask: u16) {
        self.write(mask);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::digital::ErrorType;

    /// Mock GPIO pin for testing
    #[derive(Clone, Copy)]
    struct MockPin {
        high: bool,
    }

    impl MockPin {
        fn new() -> Self {
            Self { high: true }
        }
    }

    impl ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) -> Result<(), Infallible> {
            self.high = true;
            Ok(())
        }

        fn set_low(&mut self) -> Result<(), Infallible> {
            self.high = false;
            Ok(())
        }
    }

    fn levels(bar: &LedBar<MockPin>) -> u16 {
        bar.pins
            .iter()
            .enumerate()
            .fold(0, |acc, (i, pin)| acc | ((pin.high as u16) << i))
    }

    #[test]
    fn test_starts_dark() {
        let bar = LedBar::new_active_high([MockPin::new(); BAR_WIDTH]);
        assert_eq!(bar.mask(), 0);
        assert_eq!(levels(&bar), 0);
    }

    #[test]
    fn test_active_high_publish() {
        let mut bar = LedBar::new_active_high([MockPin::new(); BAR_WIDTH]);

        bar.publish(0x8000);
        assert_eq!(levels(&bar), 0x8000);
        assert_eq!(bar.mask(), 0x8000);

        bar.publish(0x0001);
        assert_eq!(levels(&bar), 0x0001);

        bar.publish(0);
        assert_eq!(levels(&bar), 0);
    }

    #[test]
    fn test_active_low_publish() {
        let mut bar = LedBar::new_active_low([MockPin::new(); BAR_WIDTH]);

        // Dark means every pin high
        assert_eq!(levels(&bar), 0xFFFF);

        bar.publish(0x0010);
        assert_eq!(levels(&bar), !0x0010);
        assert_eq!(bar.mask(), 0x0010);
    }

    #[test]
    fn test_publisher_trait() {
        fn show<L: LedPublisher>(leds: &mut L, mask: u16) {
            leds.publish(mask);
        }

        let mut bar = LedBar::new_active_high([MockPin::new(); BAR_WIDTH]);
        show(&mut bar, 0x0100);
        assert_eq!(levels(&bar), 0x0100);
    }
}
