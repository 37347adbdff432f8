//! Terminal input module (driver-facing).
//!
//! Maps `crossterm` events into [`crate::types::DriverEvent`] and merges them
//! with OS shutdown signals into a single channel. The frame loop polls that
//! channel between frames, so a quit request never interrupts a frame in
//! progress.

pub mod events;
pub mod map;

pub use tui_cube_types as types;

pub use events::{forward_event, EventSource};
pub use map::{handle_event, handle_key_event};
