//! Read-only view of a game, handed to renderers after a tick.
//!
//! A snapshot is a plain value copy: nothing a renderer does with it can reach
//! back into the controller.

use crate::board::Square;
use crate::pieces::{Piece, PieceShape};
use crate::types::{PieceKind, Rgba, BOARD_HEIGHT, BOARD_WIDTH, CELL_BORDER_PX, CELL_FILL_PX, CELL_PX};

/// Screen rect for one cell, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    pub color: Rgba,
}

impl CellRect {
    /// Rect for the cell at board column `col`, row `row`
    pub fn for_cell(col: i8, row: i8, color: Rgba) -> Self {
        Self {
            x: col as i32 * CELL_PX + CELL_BORDER_PX,
            y: row as i32 * CELL_PX + CELL_BORDER_PX,
            w: CELL_FILL_PX,
            h: CELL_FILL_PX,
            color,
        }
    }

    /// Board (column, row) this rect was produced for
    pub fn cell(&self) -> (i32, i32) {
        (
            (self.x - CELL_BORDER_PX).div_euclid(CELL_PX),
            (self.y - CELL_BORDER_PX).div_euclid(CELL_PX),
        )
    }
}

/// Receiver of filled rects.
pub trait RenderSink {
    fn fill_rect(&mut self, rect: CellRect);
}

impl RenderSink for Vec<CellRect> {
    fn fill_rect(&mut self, rect: CellRect) {
        self.push(rect);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FallingSnapshot {
    pub kind: PieceKind,
    /// Absolute board cells
    pub cells: PieceShape,
}

impl From<Piece> for FallingSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            cells: value.board_cells(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Square; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub falling: Option<FallingSnapshot>,
    pub paused: bool,
    pub game_over: bool,
    pub lines: u32,
}

impl GameSnapshot {
    /// Emit the falling piece's cells, then every placed cell.
    pub fn render(&self, sink: &mut impl RenderSink) {
        if let Some(falling) = self.falling {
            let color = falling.kind.color();
            for &(x, y) in falling.cells.iter() {
                sink.fill_rect(CellRect::for_cell(x, y, color));
            }
        }

        for (y, row) in self.board.iter().enumerate() {
            for (x, square) in row.iter().enumerate() {
                if let Some(color) = square {
                    sink.fill_rect(CellRect::for_cell(x as i8, y as i8, *color));
                }
            }
        }
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            falling: None,
            paused: false,
            game_over: false,
            lines: 0,
        }
    }
}
