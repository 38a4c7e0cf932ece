//! Input decoding for the encoder and its push-button
//!
//! Both inputs arrive packed in one raw read. The phase bits feed the
//! quadrature state machine, the button bit feeds the debounce gate.

pub mod button;
pub mod quadrature;
pub mod sample;

pub use button::ButtonGate;
pub use quadrature::{Direction, EncoderState, QuadratureDecoder};
pub use sample::{ButtonSample, PhaseSample, RawSample};
