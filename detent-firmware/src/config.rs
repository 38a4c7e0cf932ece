//! Build-time dial configuration
//!
//! Generated by build.rs from dial.toml.

use detent_core::config::DialConfig;

include!(concat!(env!("OUT_DIR"), "/dial_config.rs"));
