//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{CellSnapshot, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GameStatus, BOARD_WIDTH, PLAYABLE_ROWS};

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let board_px_w = BOARD_WIDTH as u16 * self.cell_w;
        let board_px_h = PLAYABLE_ROWS as u16 * self.cell_h;
        let frame_w = board_px_w + 2;
        // The bottom frame row doubles as the sentinel floor.
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let bg = CellStyle::plain(Rgb::new(80, 80, 90), BOARD_BG);
        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', bg);

        let border = CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for row in 0..PLAYABLE_ROWS {
            for col in 0..BOARD_WIDTH {
                let cell = snap.cells[row * BOARD_WIDTH + col];
                self.draw_cell(fb, start_x, start_y, col as u16, row as u16, cell);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        match snap.status {
            GameStatus::Idle => {
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PRESS P")
            }
            GameStatus::Paused => {
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PAUSED")
            }
            GameStatus::GameOver => {
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER")
            }
            GameStatus::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '▀', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        cell: CellSnapshot,
    ) {
        let (ch, style) = match cell.kind {
            Some(kind) if cell.active || cell.occupied => (
                '█',
                CellStyle {
                    fg: Rgb::of_kind(kind),
                    bg: BOARD_BG,
                    bold: cell.active,
                    dim: false,
                },
            ),
            _ => (
                '·',
                CellStyle {
                    fg: Rgb::new(90, 90, 100),
                    bg: BOARD_BG,
                    bold: false,
                    dim: true,
                },
            ),
        };
        let px = start_x + 1 + x * self.cell_w;
        let py = start_y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::plain(Rgb::new(220, 220, 220), PANEL_BG)
        };
        let value = CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG);
        let dim = CellStyle { dim: true, ..value };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "STATUS", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, status_label(snap.status), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "KEYS", label);
        for line in [
            "<- ->  move",
            "^ spc  rotate",
            "v      drop",
            "p      start/pause",
            "r      restart",
            "q      quit",
        ] {
            y = y.saturating_add(1);
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, dim);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            bold: true,
            ..CellStyle::plain(Rgb::new(255, 255, 255), PANEL_BG)
        };
        fb.put_str(x, mid_y, text, style);
    }
}

fn status_label(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Idle => "READY",
        GameStatus::Running => "RUNNING",
        GameStatus::Paused => "PAUSED",
        GameStatus::GameOver => "GAME OVER",
    }
}
