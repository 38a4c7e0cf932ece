//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default debounce window (ms)
///
/// Matches a 10,000,000 tick one-shot on a 100 MHz timer.
pub const DEFAULT_DEBOUNCE_MS: u32 = 100;

/// Longest accepted debounce window (ms)
pub const MAX_DEBOUNCE_MS: u32 = 5_000;

/// Errors found while validating a configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Debounce window of zero would never lock out bounce
    ZeroDebounce,
    /// Debounce window above `MAX_DEBOUNCE_MS`
    DebounceTooLong,
}

/// Dial configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct DialConfig {
    /// Button lockout after an accepted press (ms)
    pub debounce_ms: u32,
    /// Button pin reads low when pressed
    pub button_active_low: bool,
    /// Play the LED sweep before accepting input
    pub self_test: bool,
}

impl Default for DialConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DialConfig {
    /// Default configuration
    pub const fn new() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            button_active_low: false,
            self_test: false,
        }
    }

    /// Check the configuration for values the dial cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.debounce_ms == 0 {
            return Err(ConfigError::ZeroDebounce);
        }
        if self.debounce_ms > MAX_DEBOUNCE_MS {
            return Err(ConfigError::DebounceTooLong);
        }
        Ok(())
    }
}
