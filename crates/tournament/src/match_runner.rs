//! Match runner for playing games between engines

use puli_core::{apply, GameState, RuleError, Side};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::engines::{EngineSpec, TournamentError};

/// Configuration for a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Plies per game before it is scored unfinished
    pub max_moves: u32,
    /// Play games on the rayon pool instead of one after another
    pub parallel: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            max_moves: 200,
            parallel: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOutcome {
    TigerWin,
    GoatWin,
    /// Move cap reached, or the goats were left without a move.
    Unfinished,
}

/// One played game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub game: u32,
    pub outcome: GameOutcome,
    pub plies: u32,
    pub goats_captured: u8,
    /// Moves in text form, `P5`, `3-9`, `0x3-9`.
    pub moves: Vec<String>,
}

/// Totals over a match, always counted from the Tiger side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub tiger_wins: u32,
    pub goat_wins: u32,
    pub unfinished: u32,
    pub games: Vec<GameRecord>,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_games(&self) -> u32 {
        self.tiger_wins + self.goat_wins + self.unfinished
    }

    /// Tiger score in [0, 1], unfinished games counting half.
    pub fn tiger_score(&self) -> f64 {
        let total = self.total_games();
        if total == 0 {
            return 0.5;
        }
        (self.tiger_wins as f64 + self.unfinished as f64 * 0.5) / total as f64
    }

    fn record(&mut self, game: GameRecord) {
        match game.outcome {
            GameOutcome::TigerWin => self.tiger_wins += 1,
            GameOutcome::GoatWin => self.goat_wins += 1,
            GameOutcome::Unfinished => self.unfinished += 1,
        }
        self.games.push(game);
    }
}

/// Runs matches between a Tiger engine and a Goat engine
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Play every game of the match. Games are independent; results come
    /// back in game order whether or not they ran in parallel.
    pub fn run_match(
        &self,
        tiger: &EngineSpec,
        goat: &EngineSpec,
    ) -> Result<MatchResult, TournamentError> {
        info!(
            tiger = %tiger.label(),
            goat = %goat.label(),
            games = self.config.num_games,
            "starting match"
        );

        let games: Vec<GameRecord> = if self.config.parallel {
            (0..self.config.num_games)
                .into_par_iter()
                .map(|game| self.play_game(game, tiger, goat))
                .collect::<Result<_, _>>()?
        } else {
            (0..self.config.num_games)
                .map(|game| self.play_game(game, tiger, goat))
                .collect::<Result<_, _>>()?
        };

        let mut result = MatchResult::new();
        for game in games {
            result.record(game);
        }
        info!(
            tiger_wins = result.tiger_wins,
            goat_wins = result.goat_wins,
            unfinished = result.unfinished,
            "match finished"
        );
        Ok(result)
    }

    /// Play a single game from the opening position.
    pub fn play_game(
        &self,
        game: u32,
        tiger_spec: &EngineSpec,
        goat_spec: &EngineSpec,
    ) -> Result<GameRecord, TournamentError> {
        let mut tiger = tiger_spec.build(game);
        let mut goat = goat_spec.build(game);
        tiger.new_game();
        goat.new_game();

        let mut state = GameState::new();
        let mut moves = Vec::new();

        while !state.is_terminal() && (moves.len() as u32) < self.config.max_moves {
            let side = state.turn();
            let (engine, spec) = match side {
                Side::Tiger => (&mut tiger, tiger_spec),
                Side::Goat => (&mut goat, goat_spec),
            };
            // Fresh limits per move so each search gets its own clock.
            let mv = match engine.select_move(&state, side, spec.limits()) {
                Ok(mv) => mv,
                Err(RuleError::NoLegalMove) => break,
                Err(source) => return Err(TournamentError::Rule { game, source }),
            };
            state = apply(&state, mv).map_err(|source| TournamentError::Rule { game, source })?;
            moves.push(mv.to_string());
        }

        let outcome = match state.winner() {
            Some(Side::Tiger) => GameOutcome::TigerWin,
            Some(Side::Goat) => GameOutcome::GoatWin,
            None => GameOutcome::Unfinished,
        };
        debug!(game, ?outcome, plies = moves.len(), "game over");

        Ok(GameRecord {
            game,
            outcome,
            plies: moves.len() as u32,
            goats_captured: state.goats_captured(),
            moves,
        })
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    tiger: &EngineSpec,
    goat: &EngineSpec,
    num_games: u32,
) -> Result<MatchResult, TournamentError> {
    let config = MatchConfig {
        num_games,
        ..Default::default()
    };
    MatchRunner::new(config).run_match(tiger, goat)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
