//! Shared types module - board geometry, timing constants and plain data
//!
//! Everything here is pure data with no external dependencies, so it can be
//! used by the engine, the input mapping and the terminal renderer alike.
//!
//! # Board Geometry
//!
//! The board is addressed with a single flat index: `index = row * WIDTH + column`.
//!
//! - **Width**: 10 columns
//! - **Playable height**: 20 rows (indices `0..200`)
//! - **Sentinel row**: one extra, permanently occupied row (indices `200..210`)
//!   that acts as the floor for collision checks
//! - **Spawn position**: reference index 4
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Main loop frame interval |
//! | `GRAVITY_MS` | 500 | Default gravity period |
//!
//! # Examples
//!
//! ```
//! use tui_blockfall_types::{GameCommand, PieceKind, BOARD_LEN, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(GameCommand::from_str("moveLeft"), Some(GameCommand::MoveLeft));
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_LEN, 210);
//! ```

/// Board width in cells
pub const BOARD_WIDTH: usize = 10;

/// Number of playable rows
pub const PLAYABLE_ROWS: usize = 20;

/// Number of playable cells (rows above the sentinel)
pub const PLAYABLE_LEN: usize = BOARD_WIDTH * PLAYABLE_ROWS;

/// Total addressable cells, including the sentinel row
pub const BOARD_LEN: usize = PLAYABLE_LEN + BOARD_WIDTH;

/// Reference position every new piece spawns at
pub const SPAWN_POSITION: i32 = 4;

/// Score awarded for each cleared row
pub const LINE_SCORE: u32 = 10;

/// Default gravity period in milliseconds
pub const GRAVITY_MS: u32 = 500;

/// Main loop frame interval in milliseconds (~60 FPS)
pub const TICK_MS: u32 = 16;

/// The five piece kinds, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    L,
    Z,
    T,
    O,
    I,
}

impl PieceKind {
    /// All kinds in catalog order. Random draws index into this table.
    pub const ALL: [PieceKind; 5] = [
        PieceKind::L,
        PieceKind::Z,
        PieceKind::T,
        PieceKind::O,
        PieceKind::I,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("L"), Some(PieceKind::L));
    /// assert_eq!(PieceKind::from_str("o"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("s"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "l" => Some(PieceKind::L),
            "z" => Some(PieceKind::Z),
            "t" => Some(PieceKind::T),
            "o" => Some(PieceKind::O),
            "i" => Some(PieceKind::I),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::L => "l",
            PieceKind::Z => "z",
            PieceKind::T => "t",
            PieceKind::O => "o",
            PieceKind::I => "i",
        }
    }

    /// Position in the catalog (0..5)
    pub fn index(&self) -> usize {
        match self {
            PieceKind::L => 0,
            PieceKind::Z => 1,
            PieceKind::T => 2,
            PieceKind::O => 3,
            PieceKind::I => 4,
        }
    }

    /// Display color as a `#rrggbb` string
    pub fn color_hex(&self) -> &'static str {
        match self {
            PieceKind::L => "#f44336",
            PieceKind::Z => "#e91e63",
            PieceKind::T => "#2196f3",
            PieceKind::O => "#ffeb3b",
            PieceKind::I => "#4caf50",
        }
    }

    /// Display color as RGB components
    ///
    /// ```
    /// use tui_blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::O.color_rgb(), (0xff, 0xeb, 0x3b));
    /// ```
    pub fn color_rgb(&self) -> (u8, u8, u8) {
        match self {
            PieceKind::L => (0xf4, 0x43, 0x36),
            PieceKind::Z => (0xe9, 0x1e, 0x63),
            PieceKind::T => (0x21, 0x96, 0xf3),
            PieceKind::O => (0xff, 0xeb, 0x3b),
            PieceKind::I => (0x4c, 0xaf, 0x50),
        }
    }
}

/// A single board cell
///
/// - `Empty`: free cell
/// - `Locked(kind)`: settled block, remembering the kind for its color
/// - `Floor`: sentinel cell below the playable area, always occupied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Locked(PieceKind),
    Floor,
}

impl Cell {
    pub fn is_occupied(&self) -> bool {
        !matches!(self, Cell::Empty)
    }

    /// Piece kind that colors this cell, if any
    pub fn kind(&self) -> Option<PieceKind> {
        match self {
            Cell::Locked(kind) => Some(*kind),
            _ => None,
        }
    }
}

/// Session status
///
/// `Idle` before the first start and after a restart, `Running` while gravity
/// is armed, `Paused` when the player stopped gravity, `GameOver` once a
/// freshly spawned piece collided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Idle,
    Running,
    Paused,
    GameOver,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Idle => "idle",
            GameStatus::Running => "running",
            GameStatus::Paused => "paused",
            GameStatus::GameOver => "game_over",
        }
    }
}

/// Discrete commands consumed by the engine
///
/// The input layer maps physical keys onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// Shift the piece one column left
    MoveLeft,
    /// Shift the piece one column right
    MoveRight,
    /// Advance to the next rotation state
    RotateCw,
    /// Force one gravity step
    SoftDrop,
    /// Start gravity, or pause it when running
    StartOrPause,
    /// Reset board and score and spawn a fresh piece
    Restart,
}

impl GameCommand {
    /// Parse command from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfall_types::GameCommand;
    ///
    /// assert_eq!(GameCommand::from_str("rotateCw"), Some(GameCommand::RotateCw));
    /// assert_eq!(GameCommand::from_str("startOrPause"), Some(GameCommand::StartOrPause));
    /// assert_eq!(GameCommand::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameCommand::MoveLeft),
            "moveright" => Some(GameCommand::MoveRight),
            "rotatecw" => Some(GameCommand::RotateCw),
            "softdrop" => Some(GameCommand::SoftDrop),
            "startorpause" => Some(GameCommand::StartOrPause),
            "restart" => Some(GameCommand::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameCommand::MoveLeft => "moveLeft",
            GameCommand::MoveRight => "moveRight",
            GameCommand::RotateCw => "rotateCw",
            GameCommand::SoftDrop => "softDrop",
            GameCommand::StartOrPause => "startOrPause",
            GameCommand::Restart => "restart",
        }
    }

    /// Session-level commands are accepted in any status.
    pub fn is_session_control(&self) -> bool {
        matches!(self, GameCommand::StartOrPause | GameCommand::Restart)
    }
}

/// Emitted by the engine after a piece locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockEvent {
    pub kind: Option<PieceKind>,
    pub lines_cleared: u32,
    pub score_awarded: u32,
    pub game_over: bool,
}
