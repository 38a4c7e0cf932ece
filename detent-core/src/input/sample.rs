//! Raw encoder port samples
//!
//! Bit layout of a raw read:
//! - bit 0: phase B
//! - bit 1: phase A
//! - bit 2: button level (active-high)
//! - bits 3..: ignored

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Mask selecting the two phase bits
pub const PHASE_MASK: u32 = 0b011;

/// Mask selecting the button bit
pub const BUTTON_MASK: u32 = 0b100;

/// Two-bit quadrature phase sample (A in bit 1, B in bit 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum PhaseSample {
    /// `00`
    BothLow = 0b00,
    /// `01`
    OnlyB = 0b01,
    /// `10`
    OnlyA = 0b10,
    /// `11`
    BothHigh = 0b11,
}

impl PhaseSample {
    /// Decode the low two bits of `raw`; higher bits are ignored
    pub const fn from_bits(raw: u32) -> Self {
        match raw & PHASE_MASK {
            0b00 => PhaseSample::BothLow,
            0b01 => PhaseSample::OnlyB,
            0b10 => PhaseSample::OnlyA,
            _ => PhaseSample::BothHigh,
        }
    }
}

/// Button level sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ButtonSample {
    Released,
    Pressed,
}

impl ButtonSample {
    /// Returns true if the button reads pressed
    pub const fn is_pressed(self) -> bool {
        matches!(self, ButtonSample::Pressed)
    }
}

/// One raw read of the encoder port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawSample(pub u32);

impl RawSample {
    /// Pack three logic levels into a raw read
    pub const fn from_levels(a: bool, b: bool, button: bool) -> Self {
        Self(((button as u32) << 2) | ((a as u32) << 1) | b as u32)
    }

    /// Phase bits [1:0]
    pub const fn phase(self) -> PhaseSample {
        PhaseSample::from_bits(self.0)
    }

    /// Button bit 2
    pub const fn button(self) -> ButtonSample {
        if self.0 & BUTTON_MASK != 0 {
            ButtonSample::Pressed
        } else {
            ButtonSample::Released
        }
    }
}

impl From<u32> for RawSample {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}
