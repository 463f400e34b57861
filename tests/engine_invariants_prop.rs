//! Property tests for the session state machine.
//!
//! Random command sequences interleaved with gravity steps must keep the
//! falling piece on the board, move it by at most one column per command and
//! keep the score a multiple of the per-row award.

use proptest::prelude::*;
use tui_blockfall::core::{next_rotation, rotation_count, ActivePiece, GameSession};
use tui_blockfall::types::{GameCommand, PieceKind, GRAVITY_MS, LINE_SCORE, PLAYABLE_LEN};

#[derive(Debug, Clone, Copy)]
enum Step {
    Command(GameCommand),
    Gravity,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::Command(GameCommand::MoveLeft)),
        Just(Step::Command(GameCommand::MoveRight)),
        Just(Step::Command(GameCommand::RotateCw)),
        Just(Step::Command(GameCommand::SoftDrop)),
        Just(Step::Gravity),
    ]
}

fn kind() -> impl Strategy<Value = PieceKind> {
    prop::sample::select(PieceKind::ALL.to_vec())
}

proptest! {
    #[test]
    fn rollout_keeps_piece_on_board(
        seed in any::<u32>(),
        steps in prop::collection::vec(step(), 1..400),
    ) {
        let mut session = GameSession::new(seed);
        session.apply(GameCommand::StartOrPause);

        for step in steps {
            if session.game_over() {
                prop_assert!(session.active().is_none());
                break;
            }
            let before = session.active();
            let id = session.piece_id();

            let changed = match step {
                Step::Command(cmd) => session.apply(cmd),
                Step::Gravity => session.tick(GRAVITY_MS) > 0,
            };

            if let (Some(b), Some(a)) = (before, session.active()) {
                if session.piece_id() == id {
                    let delta = a.position - b.position;
                    match step {
                        Step::Command(GameCommand::MoveLeft) => {
                            prop_assert_eq!(delta, if changed { -1 } else { 0 });
                        }
                        Step::Command(GameCommand::MoveRight) => {
                            prop_assert_eq!(delta, if changed { 1 } else { 0 });
                        }
                        Step::Command(GameCommand::RotateCw) => {
                            prop_assert!(delta.abs() <= 1);
                        }
                        _ => {
                            prop_assert_eq!(delta, 10);
                        }
                    }
                }
            }

            if let Some(piece) = session.active() {
                for i in piece.footprint() {
                    prop_assert!(i >= 0 && (i as usize) < PLAYABLE_LEN, "cell {} off board", i);
                }
            }
            prop_assert_eq!(session.score() % LINE_SCORE, 0);
        }
    }

    #[test]
    fn full_rotation_cycle_returns_to_start(
        kind in kind(),
        row in 3i32..15,
        col in 2i32..5,
    ) {
        let mut session = GameSession::new(1);
        session.apply(GameCommand::StartOrPause);
        let piece = ActivePiece { kind, rotation: 0, position: row * 10 + col };
        session.set_active(Some(piece));

        for i in 0..rotation_count(kind) {
            let expected = next_rotation(kind, i);
            session.apply(GameCommand::RotateCw);
            prop_assert_eq!(session.active().map(|p| p.rotation), Some(expected));
        }
        prop_assert_eq!(session.active(), Some(piece));
    }
}
