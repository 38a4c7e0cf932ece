//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in detent-core on top of `embedded-hal` pins:
//!
//! - LED bar: one output pin per ring position
//! - Encoder port: phase A, phase B and button inputs packed into a raw read

#![no_std]
#![deny(unsafe_code)]

pub mod encoder;
pub mod led;

pub use encoder::EncoderPort;
pub use led::LedBar;
