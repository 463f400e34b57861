//! Active piece - identity, rotation and reference position of the falling piece

use crate::board::Board;
use crate::pieces::{get_shape, Shape};
use crate::types::{PieceKind, BOARD_WIDTH, SPAWN_POSITION};

const W: i32 = BOARD_WIDTH as i32;

/// The falling piece
///
/// `position` is a flat board index and may be slightly negative: a shape
/// whose leftmost column offset is 1 can sit with its reference one step left
/// of column 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: usize,
    pub position: i32,
}

impl ActivePiece {
    /// New piece of `kind` at the spawn position, rotation 0
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: 0,
            position: SPAWN_POSITION,
        }
    }

    pub fn shape(&self) -> Shape {
        get_shape(self.kind, self.rotation)
    }

    /// Flat board indices covered by the piece
    pub fn footprint(&self) -> [i32; 4] {
        self.shape().map(|off| self.position + off)
    }

    /// Any cell in the leftmost column
    ///
    /// Columns use truncating `%`: a cell above the top row (negative index)
    /// has a negative column and so never counts as the right wall.
    pub fn touches_left_wall(&self) -> bool {
        self.footprint().iter().any(|&i| i % W == 0)
    }

    /// Any cell in the rightmost column
    pub fn touches_right_wall(&self) -> bool {
        self.footprint().iter().any(|&i| i % W == W - 1)
    }

    /// Any cell overlapping an occupied (or off-board) cell
    pub fn collides(&self, board: &Board) -> bool {
        self.footprint().iter().any(|&i| board.is_occupied(i))
    }

    /// Whether the cell directly below any of the piece's cells is occupied
    pub fn is_resting(&self, board: &Board) -> bool {
        self.footprint().iter().any(|&i| board.is_occupied(i + W))
    }
}
