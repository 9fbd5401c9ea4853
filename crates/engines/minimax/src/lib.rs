//! Minimax Engine
//!
//! Negamax with alpha-beta pruning over a weighted heuristic. Depth, an
//! optional move time and the weights come from [`EngineConfig`].

mod config;
mod eval;
mod search;

use puli_core::{Engine, GameState, SearchLimits, SearchResult};
use tracing::debug;

pub use config::{ConfigError, EngineConfig, EvalWeights, DEFAULT_DEPTH};
pub use eval::{evaluate, tiger_score, WIN};

/// Alpha-beta engine.
///
/// Without a move time it searches exactly `limits.depth` plies. With one,
/// it deepens one ply at a time and answers with the last fully completed
/// iteration when the clock runs out.
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    config: EngineConfig,
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config, nodes: 0 }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Limits taken from the engine's own configuration.
    pub fn limits(&self) -> SearchLimits {
        self.config.limits()
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, state: &GameState, limits: SearchLimits) -> SearchResult {
        self.nodes = 0;
        limits.start();
        let weights = &self.config.weights;
        let tc = &limits.time_control;
        let max_depth = limits.depth.max(1);

        let (outcome, depth) = if limits.move_time.is_none() {
            let outcome = search::pick_best_move(state, max_depth, weights, &mut self.nodes, tc);
            (outcome, max_depth)
        } else {
            let mut done = search::pick_best_move(state, 1, weights, &mut self.nodes, tc);
            let mut reached = 1;
            for d in 2..=max_depth {
                if done.stopped {
                    break;
                }
                let next = search::pick_best_move(state, d, weights, &mut self.nodes, tc);
                if next.stopped {
                    done.stopped = true;
                    break;
                }
                done = next;
                reached = d;
                if done.best_move.is_some_and(|(_, s)| s.abs() > WIN - 256) {
                    break;
                }
            }
            (done, reached)
        };

        let result = SearchResult {
            best_move: outcome.best_move.map(|(mv, _)| mv),
            score: outcome.best_move.map(|(_, s)| s).unwrap_or(0),
            depth,
            nodes: self.nodes,
            stopped: outcome.stopped,
        };
        debug!(
            turn = %state.turn(),
            depth = result.depth,
            nodes = result.nodes,
            score = result.score,
            best = ?result.best_move.map(|m| m.to_string()),
            stopped = result.stopped,
            "search finished"
        );
        result
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }

    /// Recognises `depth`, `move_time_ms` and every weight name.
    fn set_option(&mut self, name: &str, value: &str) -> bool {
        match name {
            "depth" => match value.parse::<u8>() {
                Ok(d) if d > 0 => {
                    self.config.depth = d;
                    true
                }
                _ => false,
            },
            "move_time_ms" => match value.parse::<u64>() {
                Ok(ms) => {
                    self.config.move_time_ms = (ms > 0).then_some(ms);
                    true
                }
                Err(_) => false,
            },
            _ => match (self.config.weights.get_mut(name), value.parse::<i32>()) {
                (Some(slot), Ok(v)) => {
                    *slot = v;
                    true
                }
                _ => false,
            },
        }
    }
}
