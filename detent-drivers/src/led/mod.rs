//! LED outputs

pub mod bar;

pub use bar::LedBar;
