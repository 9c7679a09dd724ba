use tui_blockfall::core::{GameState, Piece};
use tui_blockfall::term::{GameView, Rgb, Viewport};
use tui_blockfall::types::{GameAction, PieceKind, Rgba};

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // board = 10*2 by 20*1 => 20x20, plus border => 22x22
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_placed_cell_two_chars_wide() {
    let mut state = GameState::new(1);
    state.replace_falling(Piece::new(PieceKind::I));
    state
        .board_mut()
        .set(0, 19, Some(Rgba::opaque(0xFF, 0x00, 0x00)));

    let fb = GameView::default().render(&state.snapshot(), Viewport::new(22, 22));

    // Board row 19 is framebuffer row 20; column 0 covers x=1..=2.
    for x in [1, 2] {
        let cell = fb.get(x, 20).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, Rgb::new(0xFF, 0x00, 0x00));
    }
    assert_eq!(fb.get(3, 20).unwrap().ch, '·');
}

#[test]
fn term_view_follows_falling_piece() {
    let mut state = GameState::new(1);
    state.replace_falling(Piece::new(PieceKind::I));
    state.apply_action(GameAction::MoveLeft);

    let fb = GameView::default().render(&state.snapshot(), Viewport::new(22, 22));

    // I now spans columns 2..=5 on board row 0.
    let row = fb.row_text(1);
    assert_eq!(&row.chars().skip(5).take(8).collect::<String>(), "████████");
    assert_eq!(fb.get(13, 1).unwrap().ch, '·');
}

#[test]
fn term_view_side_panel_shows_lines_and_status() {
    let mut state = GameState::new(1);
    let view = GameView::default();

    let fb = view.render(&state.snapshot(), Viewport::new(60, 24));
    let text: Vec<String> = (0..fb.height()).map(|y| fb.row_text(y)).collect();
    assert!(text.iter().any(|l| l.contains("LINES")));
    assert!(text.iter().any(|l| l.contains("falling")));

    state.apply_action(GameAction::Pause);
    let fb = view.render(&state.snapshot(), Viewport::new(60, 24));
    let text: Vec<String> = (0..fb.height()).map(|y| fb.row_text(y)).collect();
    assert!(text.iter().any(|l| l.contains("PAUSED")));
    assert!(text.iter().any(|l| l.contains("paused")));
}

#[test]
fn term_view_tolerates_tiny_viewport() {
    let snap = GameState::new(1).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(5, 3));
    assert_eq!((fb.width(), fb.height()), (5, 3));
}
