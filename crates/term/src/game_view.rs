//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! Board cells arrive through the core's pixel-rect render contract and are
//! scaled down onto terminal cells. This module is pure (no I/O).

use crate::core::{CellRect, GameSnapshot, RenderSink};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

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

/// Terminal layout of the playfield.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

/// Paints rects from the render contract into the board area of a framebuffer.
struct BoardPainter<'a> {
    fb: &'a mut FrameBuffer,
    origin_x: u16,
    origin_y: u16,
    cell_w: u16,
    cell_h: u16,
}

impl RenderSink for BoardPainter<'_> {
    fn fill_rect(&mut self, rect: CellRect) {
        let (col, row) = rect.cell();
        if !(0..BOARD_WIDTH as i32).contains(&col) || !(0..BOARD_HEIGHT as i32).contains(&row) {
            return;
        }
        let style = CellStyle {
            fg: BOARD_BG.blend(rect.color),
            bg: BOARD_BG,
            bold: true,
            dim: false,
        };
        self.fb.fill_rect(
            self.origin_x + col as u16 * self.cell_w,
            self.origin_y + row as u16 * self.cell_h,
            self.cell_w,
            self.cell_h,
            '█',
            style,
        );
    }
}

impl GameView {
    /// Outer size of the bordered board in terminal cells
    pub fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.cell_w + 2,
            BOARD_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle::plain(Rgb::new(200, 200, 200), SCREEN_BG);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        let grid = CellStyle {
            dim: true,
            ..CellStyle::plain(Rgb::new(90, 90, 100), BOARD_BG)
        };
        for row in 0..BOARD_HEIGHT as u16 {
            for col in 0..BOARD_WIDTH as u16 {
                fb.fill_rect(
                    start_x + 1 + col * self.cell_w,
                    start_y + 1 + row * self.cell_h,
                    self.cell_w,
                    self.cell_h,
                    '·',
                    grid,
                );
            }
        }

        let mut painter = BoardPainter {
            fb: &mut *fb,
            origin_x: start_x + 1,
            origin_y: start_y + 1,
            cell_w: self.cell_w,
            cell_h: self.cell_h,
        };
        snap.render(&mut painter);

        self.draw_side_panel(fb, snap, viewport, start_x + frame_w + 2, start_y);

        if snap.game_over {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        } else if snap.paused {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PAUSED");
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
        let right = x + w - 1;
        let bottom = y + h - 1;

        fb.put_char(x, y, '┌', style);
        fb.put_char(right, y, '┐', style);
        fb.put_char(x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);
        fb.fill_rect(x + 1, y, w - 2, 1, '─', style);
        fb.fill_rect(x + 1, bottom, w - 2, 1, '─', style);
        fb.fill_rect(x, y + 1, 1, h - 2, '│', style);
        fb.fill_rect(right, y + 1, 1, h - 2, '│', style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle::plain(Rgb::new(200, 200, 200), SCREEN_BG);
        let hint = CellStyle { dim: true, ..value };

        let mut y = start_y;
        fb.put_str(panel_x, y, "LINES", label);
        fb.put_u32(panel_x, y + 1, snap.lines, value);
        y += 3;

        fb.put_str(panel_x, y, "STATUS", label);
        let status = if snap.game_over {
            "over"
        } else if snap.paused {
            "paused"
        } else {
            "falling"
        };
        fb.put_str(panel_x, y + 1, status, value);
        y += 3;

        for line in [
            "←/→  move",
            "↑    rotate",
            "↓    drop",
            "p    pause",
            "r    restart",
            "q    quit",
        ] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y += 1;
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
            ..CellStyle::plain(Rgb::new(255, 255, 255), SCREEN_BG)
        };
        fb.put_str(x, mid_y, text, style);
    }
}
