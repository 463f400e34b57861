//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::GameCommand`]. Commands are
//! discrete: holding a key relies on the terminal's own auto-repeat.

pub mod map;

pub use tui_blockfall_types as types;

pub use map::{handle_key_event, should_quit};
