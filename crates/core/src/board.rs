//! Board module - the grid of placed cells
//!
//! The board is a 10x20 grid where each square is empty or holds one placed
//! cell with its display color. Storage is a flat array, so two placed cells
//! can never share a square.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;

use crate::types::{Rgba, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of squares on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row indices, at most one per board row
pub type RowList = ArrayVec<i8, { BOARD_HEIGHT as usize }>;

/// Content of one square: `None` when empty, otherwise the placed cell's color
pub type Square = Option<Rgba>;

/// A placed cell as seen from outside the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlacedCell {
    pub x: i8,
    pub y: i8,
    pub color: Rgba,
}

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Row-major squares (y * WIDTH + x)
    squares: [Square; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self {
            squares: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH || y < 0 || y >= BOARD_HEIGHT {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    /// Get square at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Square> {
        Self::index(x, y).map(|idx| self.squares[idx])
    }

    /// Set square at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, square: Square) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.squares[idx] = square;
                true
            }
            None => false,
        }
    }

    /// Within bounds and empty
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Within bounds and holding a placed cell
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    fn row(&self, y: i8) -> &[Square] {
        let width = BOARD_WIDTH as usize;
        let start = (y as usize) * width;
        &self.squares[start..start + width]
    }

    /// Every column of the row holds a placed cell
    pub fn is_row_full(&self, y: i8) -> bool {
        if y < 0 || y >= BOARD_HEIGHT {
            return false;
        }
        self.row(y).iter().all(|square| square.is_some())
    }

    /// At least one placed cell sits in the row
    pub fn row_has_any(&self, y: i8) -> bool {
        if y < 0 || y >= BOARD_HEIGHT {
            return false;
        }
        self.row(y).iter().any(|square| square.is_some())
    }

    /// Indices of all full rows, top to bottom
    pub fn full_rows(&self) -> RowList {
        (0..BOARD_HEIGHT).filter(|&y| self.is_row_full(y)).collect()
    }

    /// Remove one row and move every row above it down by one
    fn remove_row(&mut self, y: i8) {
        let width = BOARD_WIDTH as usize;
        let y = y as usize;

        for row in (1..=y).rev() {
            let src = (row - 1) * width;
            self.squares.copy_within(src..src + width, row * width);
        }
        for square in &mut self.squares[..width] {
            *square = None;
        }
    }

    /// Remove the given rows, compacting the board downward.
    ///
    /// Rows are processed in ascending order so that each removal shifts only
    /// the cells strictly above it. Repeated and out-of-range indices are
    /// skipped. Returns the number of rows removed.
    pub fn clear_rows(&mut self, rows: &[i8]) -> usize {
        let mut marked = [false; BOARD_HEIGHT as usize];
        for &y in rows {
            if (0..BOARD_HEIGHT).contains(&y) {
                marked[y as usize] = true;
            }
        }

        let mut removed = 0;
        for y in 0..BOARD_HEIGHT {
            if marked[y as usize] {
                self.remove_row(y);
                removed += 1;
            }
        }
        removed
    }

    /// Detect and remove all full rows; returns the removed row indices (ascending)
    pub fn clear_full_rows(&mut self) -> RowList {
        let full = self.full_rows();
        self.clear_rows(&full);
        full
    }

    /// Place a set of cells with one color.
    ///
    /// All-or-nothing: returns false and leaves the board untouched if any
    /// cell is out of bounds or already occupied.
    pub fn place_cells(&mut self, cells: &[(i8, i8)], color: Rgba) -> bool {
        if !cells.iter().all(|&(x, y)| self.is_valid(x, y)) {
            return false;
        }
        // Duplicates inside the input would also put two cells on one square.
        for (i, a) in cells.iter().enumerate() {
            if cells[i + 1..].contains(a) {
                return false;
            }
        }

        for &(x, y) in cells {
            self.set(x, y, Some(color));
        }
        true
    }

    /// Number of placed cells
    pub fn placed_count(&self) -> usize {
        self.squares.iter().filter(|square| square.is_some()).count()
    }

    /// Iterate placed cells in row-major order
    pub fn placed_cells(&self) -> impl Iterator<Item = PlacedCell> + '_ {
        let width = BOARD_WIDTH as usize;
        self.squares.iter().enumerate().filter_map(move |(idx, square)| {
            square.map(|color| PlacedCell {
                x: (idx % width) as i8,
                y: (idx / width) as i8,
                color,
            })
        })
    }

    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    pub fn clear(&mut self) {
        for square in &mut self.squares {
            *square = None;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
