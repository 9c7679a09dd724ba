//! Board tests - placement, row detection and compaction

use tui_blockfall::core::Board;
use tui_blockfall::types::{Rgba, BOARD_HEIGHT, BOARD_WIDTH};

const GRAY: Rgba = Rgba::opaque(0x80, 0x80, 0x80);

fn fill_row(board: &mut Board, y: i8, color: Rgba) {
    for x in 0..BOARD_WIDTH {
        assert!(board.set(x, y, Some(color)));
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    for y in 0..BOARD_HEIGHT {
        for x in 0..BOARD_WIDTH {
            assert!(board.is_valid(x, y), "Cell ({}, {}) should be valid", x, y);
            assert_eq!(board.get(x, y), Some(None));
        }
    }
    assert_eq!(board.placed_count(), 0);
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT), None);
    assert!(!board.is_valid(BOARD_WIDTH, 0));
    assert!(!board.is_occupied(-1, -1));
}

#[test]
fn test_board_set_rejects_out_of_bounds() {
    let mut board = Board::new();
    assert!(!board.set(-1, 5, Some(GRAY)));
    assert!(!board.set(3, BOARD_HEIGHT, Some(GRAY)));
    assert_eq!(board.placed_count(), 0);
}

#[test]
fn test_nine_of_ten_is_not_full() {
    let mut board = Board::new();
    for x in 0..BOARD_WIDTH - 1 {
        board.set(x, 19, Some(GRAY));
    }

    assert!(!board.is_row_full(19));
    assert!(board.full_rows().is_empty());
    assert!(board.clear_full_rows().is_empty());
    assert_eq!(board.placed_count(), 9);
}

#[test]
fn test_clear_moves_cells_above_down_keeping_colors() {
    let mut board = Board::new();
    let red = Rgba::opaque(0xFF, 0, 0);
    let blue = Rgba::opaque(0, 0, 0xFF);

    fill_row(&mut board, 18, GRAY);
    board.set(2, 17, Some(red));
    board.set(7, 19, Some(blue));

    let cleared = board.clear_full_rows();

    assert_eq!(cleared.as_slice(), &[18]);
    assert_eq!(board.get(2, 18), Some(Some(red)));
    assert_eq!(board.get(2, 17), Some(None));
    // Cells below the cleared row stay put.
    assert_eq!(board.get(7, 19), Some(Some(blue)));
    assert_eq!(board.placed_count(), 2);
}

#[test]
fn test_clear_n_rows_removes_n_times_width_cells() {
    let mut board = Board::new();
    for y in [12, 15, 19] {
        fill_row(&mut board, y, GRAY);
    }
    // One stray cell per gap.
    board.set(0, 11, Some(GRAY));
    board.set(1, 14, Some(GRAY));
    board.set(2, 17, Some(GRAY));

    let before = board.placed_count();
    let cleared = board.clear_full_rows();

    assert_eq!(cleared.len(), 3);
    assert_eq!(board.placed_count(), before - 3 * BOARD_WIDTH as usize);
    // Each stray cell drops by the number of cleared rows beneath it.
    assert!(board.is_occupied(0, 14));
    assert!(board.is_occupied(1, 16));
    assert!(board.is_occupied(2, 18));
    assert!(!board.row_has_any(0));
}

#[test]
fn test_clear_rows_input_order_does_not_matter() {
    let mut a = Board::new();
    for y in [10, 11, 16] {
        fill_row(&mut a, y, GRAY);
    }
    a.set(4, 9, Some(GRAY));
    a.set(5, 13, Some(GRAY));
    let mut b = a.clone();

    assert_eq!(a.clear_rows(&[10, 11, 16]), 3);
    assert_eq!(b.clear_rows(&[16, 10, 11]), 3);
    assert_eq!(a, b);
    assert!(a.is_occupied(4, 12));
    assert!(a.is_occupied(5, 14));
}

#[test]
fn test_clear_rows_skips_out_of_range() {
    let mut board = Board::new();
    fill_row(&mut board, 19, GRAY);

    assert_eq!(board.clear_rows(&[-1, 19, BOARD_HEIGHT]), 1);
    assert_eq!(board.placed_count(), 0);
}

#[test]
fn test_place_cells_is_all_or_nothing() {
    let mut board = Board::new();
    board.set(5, 5, Some(GRAY));

    let red = Rgba::opaque(0xFF, 0, 0);
    assert!(!board.place_cells(&[(4, 5), (5, 5)], red));
    assert!(!board.place_cells(&[(9, 0), (10, 0)], red));
    assert!(!board.place_cells(&[(1, 1), (1, 1)], red));
    assert_eq!(board.placed_count(), 1);

    assert!(board.place_cells(&[(0, 19), (1, 19), (2, 19), (3, 19)], red));
    assert_eq!(board.placed_count(), 5);
}

#[test]
fn test_clear_empties_everything() {
    let mut board = Board::new();
    fill_row(&mut board, 0, GRAY);
    fill_row(&mut board, 19, GRAY);

    board.clear();
    assert_eq!(board, Board::new());
}
