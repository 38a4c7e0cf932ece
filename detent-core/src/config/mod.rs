//! Configuration types
//!
//! Board-agnostic dial settings. The firmware bakes these in at build time
//! from its TOML file.

pub mod types;

pub use types::*;
