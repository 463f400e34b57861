//! Line resolver - clears full rows and awards score
//!
//! Rows are scanned once, top to bottom. Each full row is cleared and
//! compacted on its own, and each one is worth a flat [`LINE_SCORE`]; clearing
//! several rows at once earns no bonus.

use arrayvec::ArrayVec;
use tracing::info;

use crate::board::Board;
use crate::types::{LINE_SCORE, PLAYABLE_ROWS};

/// Outcome of one resolver pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineClear {
    /// Start index of each cleared row, in the order they were cleared
    pub rows: ArrayVec<usize, PLAYABLE_ROWS>,
    /// Score earned by this pass
    pub score: u32,
}

impl LineClear {
    pub fn count(&self) -> u32 {
        self.rows.len() as u32
    }
}

/// Clear every full playable row and return what was cleared.
///
/// Compacting a row only moves rows above it, so continuing the scan at the
/// next row start never skips a row.
pub fn resolve_lines(board: &mut Board) -> LineClear {
    let mut result = LineClear::default();

    for row_start in Board::row_starts() {
        if board.is_row_full(row_start) {
            board.clear_row(row_start);
            board.compact_row(row_start);
            result.rows.push(row_start);
            result.score += LINE_SCORE;
        }
    }

    if !result.rows.is_empty() {
        info!(lines = result.rows.len(), score = result.score, "cleared lines");
    }
    result
}
