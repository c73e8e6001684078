//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework beyond the
//! `crossterm` event types. It maps key events into
//! [`crate::types::GameAction`] and recognises the quit keys; everything else
//! is dropped.

pub mod map;

pub use tui_snake_types as types;

pub use map::{map_key, should_quit};
