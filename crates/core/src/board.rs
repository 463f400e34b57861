//! Board module - flat cell grid with a sentinel floor row
//!
//! The board is 10 columns wide with 20 playable rows. One extra row of
//! permanently occupied `Floor` cells sits below the playable area so that
//! "is the cell below occupied?" is the only check needed to detect landing.
//! Cells are addressed by flat index (`row * WIDTH + column`), 0..210.

use tracing::trace;

use crate::types::{Cell, PieceKind, BOARD_LEN, BOARD_WIDTH, PLAYABLE_LEN};

/// The game board: 200 playable cells followed by the 10-cell sentinel row
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Row-major cells, sentinel row last
    cells: [Cell; BOARD_LEN],
}

impl Board {
    /// Create an empty board with the sentinel row in place
    pub fn new() -> Self {
        let mut board = Self {
            cells: [Cell::Empty; BOARD_LEN],
        };
        board.reset();
        board
    }

    pub fn width(&self) -> usize {
        BOARD_WIDTH
    }

    pub fn len(&self) -> usize {
        BOARD_LEN
    }

    pub fn is_empty(&self) -> bool {
        self.cells[..PLAYABLE_LEN].iter().all(|c| !c.is_occupied())
    }

    /// Cell at `index`, or `None` outside `0..210`
    pub fn get(&self, index: i32) -> Option<Cell> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.cells.get(i).copied())
    }

    /// Whether the cell at `index` is occupied.
    ///
    /// Indices outside the addressable range read as occupied, so a footprint
    /// that strays off the board is treated as colliding rather than panicking.
    pub fn is_occupied(&self, index: i32) -> bool {
        self.get(index).map_or(true, |c| c.is_occupied())
    }

    /// Mark every given cell as locked with `kind`.
    ///
    /// Already occupied cells are left alone (this keeps sentinel cells as
    /// `Floor`), and out-of-range indices are ignored.
    pub fn occupy(&mut self, indices: &[i32], kind: PieceKind) {
        for &index in indices {
            let Ok(i) = usize::try_from(index) else {
                continue;
            };
            if let Some(cell) = self.cells.get_mut(i) {
                if !cell.is_occupied() {
                    *cell = Cell::Locked(kind);
                }
            }
        }
    }

    /// Whether the playable row starting at `row_start` is completely filled
    pub fn is_row_full(&self, row_start: usize) -> bool {
        if !Self::is_playable_row_start(row_start) {
            return false;
        }
        self.cells[row_start..row_start + BOARD_WIDTH]
            .iter()
            .all(|c| c.is_occupied())
    }

    /// Mark the `WIDTH` cells starting at `row_start` as empty.
    ///
    /// Returns false (and does nothing) unless `row_start` begins a playable row.
    pub fn clear_row(&mut self, row_start: usize) -> bool {
        if !Self::is_playable_row_start(row_start) {
            return false;
        }
        self.cells[row_start..row_start + BOARD_WIDTH].fill(Cell::Empty);
        true
    }

    /// Remove the row at `row_start` and insert a fresh empty row at index 0.
    ///
    /// Everything above the removed row shifts down by one row; rows below it
    /// and the sentinel row keep their indices.
    pub fn compact_row(&mut self, row_start: usize) -> bool {
        if !Self::is_playable_row_start(row_start) {
            return false;
        }
        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..row_start, BOARD_WIDTH);
        self.cells[..BOARD_WIDTH].fill(Cell::Empty);
        trace!(row_start, "compacted row");
        true
    }

    /// Empty every playable cell and restore the sentinel row
    pub fn reset(&mut self) {
        self.cells[..PLAYABLE_LEN].fill(Cell::Empty);
        self.cells[PLAYABLE_LEN..].fill(Cell::Floor);
    }

    /// All 210 cells, sentinel row last
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Start index of every playable row, top to bottom
    pub fn row_starts() -> impl Iterator<Item = usize> {
        (0..PLAYABLE_LEN).step_by(BOARD_WIDTH)
    }

    fn is_playable_row_start(row_start: usize) -> bool {
        row_start < PLAYABLE_LEN && row_start % BOARD_WIDTH == 0
    }

    /// Create from a text picture for testing: one line per row from the top,
    /// `#` for a locked cell and `.` for an empty one. Missing rows are empty.
    #[cfg(test)]
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut board = Self::new();
        let first_row = crate::types::PLAYABLE_ROWS - rows.len();
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                if ch == '#' {
                    let index = ((first_row + r) * BOARD_WIDTH + c) as i32;
                    board.occupy(&[index], PieceKind::O);
                }
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
