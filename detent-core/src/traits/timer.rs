//! Debounce timer trait

/// One-shot timer used to reopen the button gate
///
/// After [`arm`](DebounceTimer::arm) the owner must deliver exactly one
/// expiry notification once the window has elapsed, and none without a
/// fresh arm.
pub trait DebounceTimer {
    /// Start a debounce window of `window_ms` milliseconds
    fn arm(&mut self, window_ms: u32);
}

impl<T: DebounceTimer + ?Sized> DebounceTimer for &mut T {
    fn arm(&mut self, window_ms: u32) {
        (**self).arm(window_ms);
    }
}
