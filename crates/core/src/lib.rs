//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the whole game engine. It has **no dependencies** on the
//! terminal, input devices or the clock: time comes in as elapsed
//! milliseconds, randomness comes from a seed.
//!
//! # Module Structure
//!
//! - [`board`]: flat 10-wide grid with a sentinel floor row
//! - [`pieces`]: rotation states of the five piece kinds as flat offsets
//! - [`piece`]: the falling piece and its footprint/wall/collision queries
//! - [`lines`]: full-row detection, compaction and scoring
//! - [`gravity`]: frame-driven gravity timer
//! - [`game_state`]: the session that ties everything together
//! - [`rng`]: seeded uniform piece selection
//! - [`snapshot`]: render-facing copy of the state
//!
//! # Example
//!
//! ```
//! use tui_blockfall_core::GameSession;
//! use tui_blockfall_types::{GameCommand, GameStatus};
//!
//! let mut game = GameSession::new(12345);
//! assert_eq!(game.status(), GameStatus::Idle);
//!
//! game.apply(GameCommand::StartOrPause);
//! game.apply(GameCommand::MoveRight);
//! game.apply(GameCommand::RotateCw);
//!
//! // 500ms of gravity moves the piece down one row.
//! assert_eq!(game.tick(500), 1);
//! assert_eq!(game.score(), 0);
//! ```

pub mod board;
pub mod game_state;
pub mod gravity;
pub mod lines;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use tui_blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::GameSession;
pub use gravity::GravityTimer;
pub use lines::{resolve_lines, LineClear};
pub use piece::ActivePiece;
pub use pieces::{get_shape, next_rotation, rotation_count, Shape};
pub use rng::SimpleRng;
pub use snapshot::{ActiveSnapshot, CellSnapshot, GameSnapshot};
