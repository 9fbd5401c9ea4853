//! Random Move Engine
//!
//! Picks uniformly among the legal moves. Useful as:
//! - a baseline any searching engine should beat
//! - a source of varied games for tournament and stress tests

use puli_core::{legal_moves, Engine, GameState, SearchLimits, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;


/// An engine that plays random legal moves.
///
/// Seeded engines replay the same choices for the same positions, which
/// keeps tournament runs reproducible.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
    seed: Option<u64>,
    nodes: u64,
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
            nodes: 0,
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
            nodes: 0,
        }
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, state: &GameState, _limits: SearchLimits) -> SearchResult {
        let moves = legal_moves(state);
        self.nodes = 1;

        SearchResult {
            best_move: moves.choose(&mut self.rng).copied(),
            score: 0,
            depth: 1,
            nodes: self.nodes,
            stopped: false,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
        if let Some(seed) = self.seed {
            self.rng = StdRng::seed_from_u64(seed);
        }
    }

    /// Accepts `seed` to reseed the generator.
    fn set_option(&mut self, name: &str, value: &str) -> bool {
        match (name, value.parse::<u64>()) {
            ("seed", Ok(seed)) => {
                *self = Self::seeded(seed);
                true
            }
            _ => false,
        }
    }
}
