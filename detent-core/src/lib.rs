//! Board-agnostic core logic for the Detent dial
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Sample decoding (phase bits, button bit)
//! - Quadrature state machine for detent detection
//! - One-shot button debounce gate
//! - LED ring position model and power-on sweep
//! - Dispatcher tying both interrupt sources to the ring
//! - Collaborator traits and configuration types

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod dispatch;
pub mod input;
pub mod ring;
pub mod traits;

pub use dispatch::{DialAction, Dispatcher, Notification, SignalHandler};
pub use input::{ButtonGate, Direction, EncoderState, QuadratureDecoder, RawSample};
pub use ring::LedRing;
