//! LED output trait

/// Sink for rendered ring masks
///
/// Bit `i` set lights LED `i`; an all-zero mask blanks the ring.
/// Implementations drive the physical LEDs (GPIO bank, shift register, ...).
pub trait LedPublisher {
    /// Show `mask` on the ring
    fn publish(&mut self, mask: u16);
}

impl<T: LedPublisher + ?Sized> LedPublisher for &mut T {
    fn publish(&mut self, mask: u16) {
        (**self).publish(mask);
    }
}
