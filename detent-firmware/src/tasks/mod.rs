//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod debounce;
pub mod dial;
pub mod encoder;

pub use debounce::debounce_task;
pub use dial::dial_task;
pub use encoder::encoder_task;
