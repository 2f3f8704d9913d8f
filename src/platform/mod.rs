//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (key names to commands)
//! - The fixed-period tick clock (setInterval on web)

pub mod input;

#[cfg(target_arch = "wasm32")]
pub mod timer;

pub use input::{KeyCommand, command_for_key, direction_for_key};
