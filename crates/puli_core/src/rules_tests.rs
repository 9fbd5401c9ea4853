use super::*;

fn reason(result: Result<GameState, RuleError>) -> String {
    match result {
        Err(RuleError::IllegalMove { reason }) => reason,
        other => panic!("expected an illegal move, got {other:?}"),
    }
}

fn movement_position(turn: Side) -> GameState {
    let goats: Vec<Node> = (5..20).collect();
    GameState::setup(&[0, 3, 4], &goats, turn, 15, 0).unwrap()
}

#[test]
fn test_place_flips_turn() {
    let state = GameState::new();
    let next = apply(&state, Move::Place { to: 1 }).unwrap();
    assert_eq!(next.piece_at(1), Some(Side::Goat));
    assert_eq!(next.goats_placed(), 1);
    assert_eq!(next.turn(), Side::Tiger);
    assert_eq!(legal_moves(&next).len(), 6);
    // Input is untouched.
    assert_eq!(state, GameState::new());
}

#[test]
fn test_capture_removes_goat() {
    let state = GameState::setup(&[0, 3, 4], &[2], Side::Tiger, 1, 0).unwrap();
    let next = apply(
        &state,
        Move::Capture {
            from: 3,
            over: 2,
            to: 1,
        },
    )
    .unwrap();
    assert_eq!(next.piece_at(1), Some(Side::Tiger));
    assert_eq!(next.piece_at(2), None);
    assert_eq!(next.piece_at(3), None);
    assert_eq!(next.goats_captured(), 1);
    assert_eq!(next.goats_on_board(), 0);
    assert_eq!(next.goats_placed(), 1);
    assert_eq!(next.turn(), Side::Goat);
}

#[test]
fn test_fifth_capture_wins_for_tiger() {
    let state = GameState::setup(&[0, 3, 4], &[2], Side::Tiger, 5, 4).unwrap();
    let next = apply(
        &state,
        Move::Capture {
            from: 0,
            over: 2,
            to: 8,
        },
    )
    .unwrap();
    assert_eq!(next.winner(), Some(Side::Tiger));
    assert!(legal_moves(&next).is_empty());
    assert_eq!(
        apply(&next, Move::Place { to: 1 }),
        Err(RuleError::TerminalState)
    );
}

#[test]
fn test_blocking_placement_wins_for_goat() {
    let goats = [1, 2, 5, 6, 8, 9, 10, 11, 15];
    let state = GameState::setup(&[0, 3, 4], &goats, Side::Goat, 9, 0).unwrap();
    assert_eq!(state.winner(), None);
    let next = apply(&state, Move::Place { to: 16 }).unwrap();
    assert_eq!(next.winner(), Some(Side::Goat));
    assert!(legal_moves(&next).is_empty());
}

#[test]
fn test_fifteen_placements_reach_movement() {
    let mut state = GameState::new();
    while state.phase() == Phase::Placement {
        let mv = legal_moves(&state)[0];
        state = apply(&state, mv).unwrap();
    }
    assert_eq!(state.goats_placed(), 15);
    assert_eq!(state.goats_captured(), 0);
    assert_eq!(state.winner(), None);
    assert_eq!(state.turn(), Side::Tiger);

    let state = apply(&state, legal_moves(&state)[0]).unwrap();
    let goat_moves = legal_moves(&state);
    assert!(!goat_moves.is_empty());
    assert!(goat_moves.iter().all(|m| matches!(m, Move::Slide { .. })));
}

#[test]
fn test_rejections_leave_state_alone() {
    let state = GameState::new();
    let before = state.clone();
    assert!(apply(&state, Move::Slide { from: 0, to: 2 }).is_err());
    assert!(apply(&state, Move::Place { to: 0 }).is_err());
    assert_eq!(state, before);
}

#[test]
fn test_rejection_reasons() {
    let state = GameState::new();
    assert_eq!(
        reason(apply(&state, Move::Place { to: 0 })),
        "node 0 is occupied"
    );
    assert_eq!(
        reason(apply(&state, Move::Place { to: 30 })),
        "node 30 is off the board"
    );
    assert_eq!(
        reason(apply(&state, Move::Slide { from: 0, to: 2 })),
        "not your turn"
    );

    let tiger_turn = GameState::setup(&[0, 3, 4], &[1], Side::Tiger, 1, 0).unwrap();
    assert_eq!(
        reason(apply(&tiger_turn, Move::Place { to: 5 })),
        "not your turn: only goats are placed"
    );
    assert_eq!(
        reason(apply(
            &tiger_turn,
            Move::Capture {
                from: 0,
                over: 2,
                to: 8
            }
        )),
        "no goat on node 2 to capture"
    );
    assert_eq!(
        reason(apply(
            &tiger_turn,
            Move::Capture {
                from: 0,
                over: 2,
                to: 1
            }
        )),
        "0, 2 and 1 are not on one capture line"
    );
    assert_eq!(
        reason(apply(&tiger_turn, Move::Slide { from: 0, to: 9 })),
        "nodes 0 and 9 are not adjacent"
    );

    let placing = GameState::setup(&[0, 3, 4], &[10], Side::Goat, 1, 0).unwrap();
    assert_eq!(
        reason(apply(&placing, Move::Slide { from: 10, to: 11 })),
        "goats cannot move until all 15 are placed"
    );
    assert_eq!(
        reason(apply(&placing, Move::Slide { from: 12, to: 11 })),
        "no piece on node 12"
    );

    let moving = movement_position(Side::Goat);
    assert_eq!(
        reason(apply(&moving, Move::Place { to: 1 })),
        "all 15 goats are already placed"
    );
    assert_eq!(
        reason(apply(
            &moving,
            Move::Capture {
                from: 7,
                over: 8,
                to: 9
            }
        )),
        "goats cannot capture"
    );
    assert_eq!(
        reason(apply(&moving, Move::Slide { from: 7, to: 8 })),
        "node 8 is occupied"
    );
}

#[test]
fn test_diagnose_on_finished_game() {
    let done = GameState::setup(&[0, 3, 4], &[], Side::Goat, 5, 5).unwrap();
    assert_eq!(diagnose(&done, Move::Place { to: 1 }), "game over, Tiger won");
}
