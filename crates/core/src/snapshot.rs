use crate::board::Board;
use crate::piece::ActivePiece;
use crate::types::{Cell, GameStatus, PieceKind, BOARD_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: usize,
    pub position: i32,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            position: value.position,
        }
    }
}

/// Render-facing view of one addressable cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellSnapshot {
    /// Settled block or sentinel floor
    pub occupied: bool,
    /// Covered by the falling piece
    pub active: bool,
    /// Kind whose color the cell shows; the falling piece wins over a locked cell
    pub kind: Option<PieceKind>,
    /// Part of the sentinel row
    pub floor: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub cells: [CellSnapshot; BOARD_LEN],
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub status: GameStatus,
    pub game_over: bool,
    pub piece_id: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.cells = [CellSnapshot::default(); BOARD_LEN];
        self.active = None;
        self.score = 0;
        self.status = GameStatus::Idle;
        self.game_over = false;
        self.piece_id = 0;
    }

    pub(crate) fn fill_board(&mut self, board: &Board) {
        for (out, cell) in self.cells.iter_mut().zip(board.cells()) {
            *out = CellSnapshot {
                occupied: cell.is_occupied(),
                active: false,
                kind: cell.kind(),
                floor: *cell == Cell::Floor,
            };
        }
    }

    pub(crate) fn mark_active(&mut self, piece: ActivePiece) {
        for index in piece.footprint() {
            let Ok(i) = usize::try_from(index) else {
                continue;
            };
            if let Some(cell) = self.cells.get_mut(i) {
                cell.active = true;
                cell.kind = Some(piece.kind);
            }
        }
    }

    pub fn playable(&self) -> bool {
        self.status == GameStatus::Running
    }

    /// Cells covered by the falling piece
    pub fn active_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.active)
            .map(|(i, _)| i)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            cells: [CellSnapshot::default(); BOARD_LEN],
            active: None,
            score: 0,
            status: GameStatus::Idle,
            game_over: false,
            piece_id: 0,
        }
    }
}
