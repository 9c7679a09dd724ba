//! Property tests for the controller.
//!
//! Random input and clock sequences are replayed against a seeded game.
//! While the game is running the falling piece must stay on the board and off
//! the stack, and every commit must change the placed-cell count by exactly
//! four minus ten per cleared row.
use proptest::prelude::*;
use tui_blockfall::core::GameState;
use tui_blockfall::types::{GameAction, FALL_DELAY_MS, FRAME_MS};

#[derive(Debug, Clone, Copy)]
enum Op {
    Act(GameAction),
    Frame,
    Gravity,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        1 => Just(Op::Act(GameAction::MoveLeft)),
        1 => Just(Op::Act(GameAction::MoveRight)),
        1 => Just(Op::Act(GameAction::Rotate)),
        1 => Just(Op::Act(GameAction::SoftDrop)),
        1 => Just(Op::Act(GameAction::HardDrop)),
        1 => Just(Op::Frame),
        3 => Just(Op::Gravity),
    ]
}

fn assert_falling_clear(g: &GameState) -> Result<(), TestCaseError> {
    for (x, y) in g.falling().board_cells() {
        prop_assert!(g.board().is_valid(x, y), "falling cell ({}, {}) off board", x, y);
        prop_assert!(!g.board().is_occupied(x, y), "falling cell ({}, {}) on stack", x, y);
    }
    Ok(())
}

proptest! {
    #[test]
    fn generated_play_respects_board_invariants(
        seed in any::<u64>(),
        ops in prop::collection::vec(op_strategy(), 1..400),
    ) {
        let mut g = GameState::new(seed);
        let mut now = 0u64;
        let mut lines = 0u32;

        for op in ops {
            if g.game_over() {
                break;
            }
            assert_falling_clear(&g)?;

            match op {
                Op::Act(action) => {
                    g.apply_action(action);
                }
                Op::Frame | Op::Gravity => {
                    let delta = if matches!(op, Op::Frame) { FRAME_MS } else { FALL_DELAY_MS + 1 };
                    now += delta;
                    let before = g.board().placed_count() as i64;

                    let Some(event) = g.update(delta, now) else {
                        prop_assert_eq!(g.board().placed_count() as i64, before);
                        continue;
                    };

                    let after = g.board().placed_count() as i64;
                    match event.committed {
                        Some(_) => prop_assert_eq!(after, before + 4 - 10 * event.rows_cleared as i64),
                        None => {
                            prop_assert_eq!(event.rows_cleared, 0);
                            prop_assert_eq!(after, before);
                        }
                    }
                    lines += event.rows_cleared;
                    prop_assert_eq!(g.lines(), lines);
                    prop_assert_eq!(event.game_over, g.game_over());
                }
            }
        }

        if !g.game_over() {
            assert_falling_clear(&g)?;
        }
    }

    #[test]
    fn gravity_gate_never_fires_inside_the_window(
        seed in any::<u64>(),
        offsets in prop::collection::vec(0..=FALL_DELAY_MS, 1..20),
    ) {
        let mut g = GameState::new(seed);
        prop_assert!(g.update(0, FALL_DELAY_MS + 1).is_some());
        let last = g.last_fall_ms();

        for offset in offsets {
            prop_assert!(g.update(0, last + offset).is_none());
        }
        prop_assert_eq!(g.last_fall_ms(), last);
    }
}

#[test]
fn idle_play_eventually_ends() {
    let mut g = GameState::new(2024);
    let mut now = 0;

    // Every piece lands in the spawn columns, so the stack reaches the top.
    for _ in 0..10_000 {
        now += FALL_DELAY_MS + 1;
        g.update(0, now);
        if g.game_over() {
            break;
        }
    }
    assert!(g.game_over());
    assert!(g.update(0, now + 10 * FALL_DELAY_MS).is_none());
}
