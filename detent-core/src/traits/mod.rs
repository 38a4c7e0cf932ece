//! Collaborator traits
//!
//! These traits define the interface between the dial logic and the
//! hardware that renders the ring and times the debounce window.

pub mod led;
pub mod timer;

pub use led::LedPublisher;
pub use timer::DebounceTimer;
