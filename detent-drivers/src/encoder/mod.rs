//! Encoder inputs

pub mod port;

pub use port::EncoderPort;
