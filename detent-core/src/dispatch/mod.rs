//! Event dispatch
//!
//! Routes the two inbound notifications to the decoder, gate and ring,
//! and pushes every visible change out to the LEDs.

pub mod dispatcher;
pub mod events;
pub mod handler;

pub use dispatcher::{DialState, Dispatcher};
pub use events::{DialAction, Notification};
pub use handler::SignalHandler;
