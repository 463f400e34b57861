//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: a [`GameView`] paints a
//! [`crate::core::GameSnapshot`] into a plain framebuffer, and a
//! [`TerminalRenderer`] flushes that framebuffer through crossterm,
//! redrawing only the cells that changed.
//!
//! Board cells are drawn 2 characters wide to keep them roughly square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_blockfall_core as core;
pub use tui_blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
