//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const PLAY_BG: Rgb = Rgb::new(20, 20, 40);

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

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse the framebuffer across frames; it is only resized
    /// when the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        // Leave one row above the frame for the clock.
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h + 1) / 2 + 1;

        let border = CellStyle::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for y in 0..BOARD_HEIGHT as u16 {
            for x in 0..BOARD_WIDTH as u16 {
                match snap.cell_kind(x as usize, y as usize) {
                    Some(kind) => self.draw_board_cell(fb, start_x, start_y, x, y, kind),
                    None => self.draw_empty_cell(fb, start_x, start_y, x, y),
                }
            }
        }

        if let Some(active) = snap.active {
            for &(x, y) in active.blocks.iter() {
                if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                    self.draw_board_cell(fb, start_x, start_y, x as u16, y as u16, active.kind);
                }
            }
        }

        // Clock above the top-right corner of the frame.
        let label = CellStyle::plain(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0));
        let clock_x = (start_x + frame_w).saturating_sub(10);
        fb.put_str(clock_x, start_y.saturating_sub(1), "Time ", label);
        fb.put_clock(clock_x + 5, start_y.saturating_sub(1), snap.elapsed_ms, label);

        self.draw_side_panel(fb, snap, viewport, start_x + frame_w + 2, start_y);

        if snap.game_over {
            self.draw_game_over(fb, snap, start_x, start_y, frame_w, frame_h);
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
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = CellStyle {
            dim: true,
            ..CellStyle::plain(Rgb::new(70, 70, 100), PLAY_BG)
        };
        self.fill_cell_rect(fb, start_x, start_y, x, y, '·', style);
    }

    fn draw_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        kind: PieceKind,
    ) {
        let style = CellStyle {
            bold: true,
            ..CellStyle::plain(piece_color(kind), PLAY_BG)
        };
        self.fill_cell_rect(fb, start_x, start_y, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x.saturating_add(10) > viewport.width {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = start_y;
        fb.put_str(panel_x, y, "DROP MS", label);
        y += 1;
        fb.put_u32(panel_x, y, snap.drop_interval_ms, value);
        y += 2;

        fb.put_str(panel_x, y, "PIECES", label);
        y += 1;
        fb.put_u32(panel_x, y, snap.pieces_spawned, value);
        y += 2;

        let hint = CellStyle {
            dim: true,
            ..value
        };
        for line in ["←/→ move", "↑ rotate", "↓ drop", "q quit"] {
            fb.put_str(panel_x, y, line, hint);
            y += 1;
        }
    }

    fn draw_game_over(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        const BOX_W: u16 = 22;
        const BOX_H: u16 = 5;

        let box_x = start_x + frame_w.saturating_sub(BOX_W) / 2;
        let box_y = start_y + frame_h.saturating_sub(BOX_H) / 2;
        let style = CellStyle {
            bold: true,
            ..CellStyle::plain(Rgb::new(220, 30, 30), Rgb::new(255, 255, 255))
        };

        fb.fill_rect(box_x, box_y, BOX_W, BOX_H, ' ', style);
        fb.put_str(box_x + 2, box_y + 1, "GAME OVER", style);
        fb.put_str(box_x + 2, box_y + 2, "Time: ", style);
        fb.put_clock(box_x + 8, box_y + 2, snap.elapsed_ms, style);
        fb.put_str(box_x + 2, box_y + 3, "Press R to restart", style);
    }
}

/// Display color for a piece kind.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::Straight => Rgb::new(60, 90, 230),
        PieceKind::Square => Rgb::new(240, 220, 60),
        PieceKind::T => Rgb::new(160, 60, 200),
        PieceKind::L => Rgb::new(255, 150, 0),
        PieceKind::Skew => Rgb::new(60, 200, 90),
    }
}
