use super::*;
use minimax_engine::EngineConfig;

fn minimax(depth: u8) -> EngineSpec {
    EngineSpec::Minimax {
        config: EngineConfig {
            depth,
            ..Default::default()
        },
    }
}

#[test]
fn test_match_counts_every_game() {
    let config = MatchConfig {
        num_games: 4,
        max_moves: 60,
        parallel: true,
    };
    let runner = MatchRunner::new(config);
    let result = runner
        .run_match(&minimax(1), &EngineSpec::Random { seed: Some(5) })
        .unwrap();

    assert_eq!(result.total_games(), 4);
    assert_eq!(result.games.len(), 4);
    let order: Vec<u32> = result.games.iter().map(|g| g.game).collect();
    assert_eq!(order, vec![0, 1, 2, 3]);
    for game in &result.games {
        assert!(game.plies <= 60);
        assert_eq!(game.plies as usize, game.moves.len());
    }
}

#[test]
fn test_parallel_matches_sequential() {
    let tiger = EngineSpec::Random { seed: Some(1) };
    let goat = EngineSpec::Random { seed: Some(2) };
    let run = |parallel| {
        MatchRunner::new(MatchConfig {
            num_games: 6,
            max_moves: 120,
            parallel,
        })
        .run_match(&tiger, &goat)
        .unwrap()
    };
    assert_eq!(run(true), run(false));
}

#[test]
fn test_game_record_replays() {
    let runner = MatchRunner::new(MatchConfig {
        num_games: 1,
        max_moves: 80,
        parallel: false,
    });
    let record = runner
        .play_game(0, &minimax(2), &EngineSpec::Random { seed: Some(3) })
        .unwrap();

    let mut state = GameState::new();
    for text in &record.moves {
        let mv = puli_core::parse_move(&state, text).unwrap();
        state = apply(&state, mv).unwrap();
    }
    assert_eq!(state.goats_captured(), record.goats_captured);
    let expected = match state.winner() {
        Some(Side::Tiger) => GameOutcome::TigerWin,
        Some(Side::Goat) => GameOutcome::GoatWin,
        None => GameOutcome::Unfinished,
    };
    assert_eq!(record.outcome, expected);
}

#[test]
fn test_zero_move_cap_leaves_games_unfinished() {
    let runner = MatchRunner::new(MatchConfig {
        num_games: 2,
        max_moves: 0,
        parallel: false,
    });
    let result = runner
        .run_match(&minimax(1), &minimax(1))
        .unwrap();
    assert_eq!(result.unfinished, 2);
    assert_eq!(result.tiger_score(), 0.5);
}
