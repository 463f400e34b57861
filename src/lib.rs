//! Terminal falling-block puzzle game (workspace facade crate).
//!
//! The game itself lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_blockfall::{core,input,term,types}` and adds the
//! process-level pieces used by the binary: [`config`] and [`logging`].

pub mod config;
pub mod logging;

pub use tui_blockfall_core as core;
pub use tui_blockfall_input as input;
pub use tui_blockfall_term as term;
pub use tui_blockfall_types as types;
