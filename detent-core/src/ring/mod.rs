//! LED ring position model
//!
//! The ring owns the cursor and the enable flag. Rotation and button
//! handling only reach it through [`LedRing`]'s operations.

pub mod led_ring;
pub mod self_test;

pub use led_ring::{LedRing, RING_SIZE};
pub use self_test::{SelfTestFrame, SELF_TEST_FRAMES};
