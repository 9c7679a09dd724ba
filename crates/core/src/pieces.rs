//! Pieces module - the shape catalog and the falling piece
//!
//! Seven base shapes of four cells each. Rotation is a quarter turn about the
//! midpoint of a shape's first and fourth cell, mapping (x, y) to (y, -x).
//!
//! Only the I shape is translated back to its original frame after turning.
//! J, L, S, T and Z keep the pivot-relative result, so every further turn
//! pivots around a point computed from the already shifted cells and the
//! piece drifts as it spins.

use crate::types::{PieceKind, Rgba, SPAWN_POSITION};

/// Offset of a single cell relative to the piece origin
pub type CellOffset = (i8, i8);

/// The four local cell offsets of a piece, in the shape's fixed order
pub type PieceShape = [CellOffset; 4];

/// Base (spawn) cells of a piece kind
pub fn base_shape(kind: PieceKind) -> PieceShape {
    match kind {
        PieceKind::I => [(0, 0), (1, 0), (2, 0), (3, 0)],
        PieceKind::J => [(0, 0), (0, 1), (1, 1), (2, 1)],
        PieceKind::L => [(0, 0), (1, 0), (2, 0), (2, 1)],
        PieceKind::O => [(0, 0), (1, 0), (0, 1), (1, 1)],
        PieceKind::S => [(0, 0), (1, 0), (1, 1), (2, 1)],
        PieceKind::T => [(0, 0), (1, 0), (2, 0), (1, 1)],
        PieceKind::Z => [(0, 1), (1, 1), (1, 0), (2, 0)],
    }
}

/// Pivot used by a quarter turn: midpoint of the first and fourth cell,
/// truncating toward zero.
pub fn pivot(shape: &PieceShape) -> CellOffset {
    let (ax, ay) = shape[0];
    let (bx, by) = shape[3];
    ((ax + bx) / 2, (ay + by) / 2)
}

fn quarter_turn(shape: &mut PieceShape, (px, py): CellOffset) {
    for cell in shape.iter_mut() {
        let (x, y) = (cell.0 - px, cell.1 - py);
        *cell = (y, -x);
    }
}

/// Rotate a shape of the given kind in place
pub fn rotate_shape(kind: PieceKind, shape: &mut PieceShape) {
    match kind {
        PieceKind::O => {}
        PieceKind::I => {
            let (px, py) = pivot(shape);
            quarter_turn(shape, (px, py));
            for cell in shape.iter_mut() {
                cell.0 += px;
                cell.1 += py;
            }
        }
        PieceKind::J | PieceKind::L | PieceKind::S | PieceKind::T | PieceKind::Z => {
            let p = pivot(shape);
            quarter_turn(shape, p);
        }
    }
}

/// The falling piece: a private copy of its kind's cells plus a board offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub cells: PieceShape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece at the spawn position
    pub fn new(kind: PieceKind) -> Self {
        Self::at(kind, SPAWN_POSITION.0, SPAWN_POSITION.1)
    }

    pub fn at(kind: PieceKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            cells: base_shape(kind),
            x,
            y,
        }
    }

    pub fn color(&self) -> Rgba {
        self.kind.color()
    }

    pub fn rotate(&mut self) {
        rotate_shape(self.kind, &mut self.cells);
    }

    /// Cells translated by the board offset
    pub fn board_cells(&self) -> PieceShape {
        self.cells.map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Lowest local row (largest y)
    pub fn max_local_row(&self) -> i8 {
        self.cells.iter().map(|&(_, dy)| dy).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pivot_truncates_toward_zero() {
        assert_eq!(pivot(&[(0, 0), (5, 5), (5, 5), (3, 0)]), (1, 0));
        assert_eq!(pivot(&[(-3, 0), (0, 0), (0, 0), (0, -1)]), (-1, 0));
    }

    #[test]
    fn test_i_rotation_returns_to_frame() {
        let mut shape = base_shape(PieceKind::I);
        rotate_shape(PieceKind::I, &mut shape);
        assert_eq!(shape, [(1, 1), (1, 0), (1, -1), (1, -2)]);

        // pivot (1, 0) again since (1 + -2) / 2 truncates to 0
        rotate_shape(PieceKind::I, &mut shape);
        assert_eq!(shape, [(2, 0), (1, 0), (0, 0), (-1, 0)]);
    }

    #[test]
    fn test_t_rotation_stays_pivot_relative() {
        let mut shape = base_shape(PieceKind::T);
        rotate_shape(PieceKind::T, &mut shape);
        // pivot (0,0): (x, y) -> (y, -x)
        assert_eq!(shape, [(0, 0), (0, -1), (0, -2), (1, -1)]);
    }

    #[test]
    fn test_piece_board_cells_apply_offset() {
        let piece = Piece::at(PieceKind::O, 4, 7);
        assert_eq!(piece.board_cells(), [(4, 7), (5, 7), (4, 8), (5, 8)]);
        assert_eq!(piece.max_local_row(), 1);
    }
}
