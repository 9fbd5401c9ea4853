use super::*;

const START: &str = "T..TT.................. G 0 0";

#[test]
fn test_new_game() {
    let state = GameState::new();
    assert_eq!(state.tigers().collect::<Vec<_>>(), vec![0, 3, 4]);
    assert_eq!(state.goats().count(), 0);
    assert_eq!(state.turn(), Side::Goat);
    assert_eq!(state.goats_placed(), 0);
    assert_eq!(state.goats_captured(), 0);
    assert_eq!(state.goats_in_hand(), 15);
    assert_eq!(state.phase(), Phase::Placement);
    assert_eq!(state.winner(), None);
    assert_eq!(state, GameState::default());
}

#[test]
fn test_notation_round_trip() {
    assert_eq!(GameState::new().to_notation(), START);

    let text = "T.GTTG..G.............. T 4 1";
    let state = GameState::from_notation(text).unwrap();
    assert_eq!(state.goats().collect::<Vec<_>>(), vec![2, 5, 8]);
    assert_eq!(state.goats_on_board(), 3);
    assert_eq!(state.to_notation(), text);
}

#[test]
fn test_notation_lowercase_cells() {
    let state = GameState::from_notation("t..tt.................. g 0 0").unwrap();
    assert_eq!(state, GameState::new());
}

#[test]
fn test_notation_errors() {
    assert_eq!(
        GameState::from_notation("T..TT G 0"),
        Err(NotationError::FieldCount(3))
    );
    assert_eq!(
        GameState::from_notation("T..TT G 0 0"),
        Err(NotationError::BoardLength(5))
    );
    assert_eq!(
        GameState::from_notation("T..TX.................. G 0 0"),
        Err(NotationError::InvalidCell('X'))
    );
    assert!(matches!(
        GameState::from_notation("T..TT.................. Q 0 0"),
        Err(NotationError::InvalidSide(_))
    ));
    assert!(matches!(
        GameState::from_notation("T..TT.................. G x 0"),
        Err(NotationError::InvalidCounter(_))
    ));
}

#[test]
fn test_setup_validates() {
    assert_eq!(
        GameState::setup(&[0, 3], &[], Side::Goat, 0, 0),
        Err(NotationError::TigerCount(2))
    );
    assert_eq!(
        GameState::setup(&[0, 3, 4], &[4], Side::Goat, 1, 0),
        Err(NotationError::DuplicateNode(4))
    );
    assert_eq!(
        GameState::setup(&[0, 3, 23], &[], Side::Goat, 0, 0),
        Err(NotationError::NodeOutOfRange(23))
    );
    assert_eq!(
        GameState::setup(&[0, 3, 4], &[1, 2], Side::Goat, 3, 0),
        Err(NotationError::GoatCount {
            placed: 3,
            on_board: 2,
            captured: 0
        })
    );
    assert_eq!(
        GameState::setup(&[0, 3, 4], &[], Side::Goat, 16, 16),
        Err(NotationError::CounterRange(16))
    );
}

#[test]
fn test_setup_computes_tiger_win() {
    let state = GameState::setup(&[0, 3, 4], &[], Side::Goat, 5, 5).unwrap();
    assert_eq!(state.winner(), Some(Side::Tiger));
    assert!(state.is_terminal());
}

#[test]
fn test_setup_computes_blocked_tigers() {
    let goats = [1, 2, 5, 6, 8, 9, 10, 11, 15, 16];
    let blocked = GameState::setup(&[0, 3, 4], &goats, Side::Tiger, 10, 0).unwrap();
    assert_eq!(blocked.winner(), Some(Side::Goat));

    // Same board with Goat to move is not over yet.
    let waiting = GameState::setup(&[0, 3, 4], &goats, Side::Goat, 10, 0).unwrap();
    assert_eq!(waiting.winner(), None);
}

#[test]
fn test_phase_follows_placed_count() {
    let goats: Vec<Node> = (5..20).collect();
    let state = GameState::setup(&[0, 3, 4], &goats, Side::Goat, 15, 0).unwrap();
    assert_eq!(state.phase(), Phase::Movement);
    assert_eq!(state.goats_in_hand(), 0);
}

#[test]
fn test_display_shape() {
    let text = GameState::new().to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0].trim(), "T");
    assert_eq!(lines[1], ". . T T . .");
    assert_eq!(lines[4], "  . . . .");
    assert_eq!(lines[5], "turn Goat | placed 0 | captured 0");
}
