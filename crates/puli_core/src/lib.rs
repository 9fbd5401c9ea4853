pub mod error;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod rules;
pub mod state;
pub mod time_control;
pub mod topology;
pub mod types;
pub mod win;
pub mod wire;

// Re-export core game logic (not engine-specific)
pub use error::*;
pub use movegen::*;
pub use notation::{moves_to_text, parse_move, parse_move_text};
pub use perft::{perft, perft_divide};
pub use rules::{apply, diagnose};
pub use state::GameState;
pub use time_control::*;
pub use topology::TOPOLOGY;
pub use types::*;
pub use win::winner;

// =============================================================================
// Engine trait, implemented by every move selector (minimax, random, ...)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation from the searching side's point of view
    pub score: i32,
    /// Search depth reached
    pub depth: u8,
    pub nodes: u64,
    /// Whether search was stopped early due to time limit
    pub stopped: bool,
}

/// Trait that all move selectors implement.
pub trait Engine: Send {
    /// Search `state` for the side to move within `limits`.
    fn search(&mut self, state: &GameState, limits: SearchLimits) -> SearchResult;

    fn name(&self) -> &str;

    fn author(&self) -> &str {
        "puli"
    }

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}

    /// Set a named option. Returns true if the option was recognized.
    fn set_option(&mut self, _name: &str, _value: &str) -> bool {
        false
    }

    /// Pick a move for `side`, which must be the side to move.
    ///
    /// Fails with `TerminalState` once the game is decided, `NotYourTurn`
    /// when asked for the waiting side, and `NoLegalMove` when the side to
    /// move is stuck without the game being over. The returned move is
    /// always one of `legal_moves(state)`.
    fn select_move(
        &mut self,
        state: &GameState,
        side: Side,
        limits: SearchLimits,
    ) -> Result<Move, RuleError> {
        if state.is_terminal() {
            return Err(RuleError::TerminalState);
        }
        if state.turn() != side {
            return Err(RuleError::NotYourTurn { side });
        }
        let moves = legal_moves(state);
        if moves.is_empty() {
            return Err(RuleError::NoLegalMove);
        }
        match self.search(state, limits).best_move {
            Some(mv) if moves.contains(&mv) => Ok(mv),
            _ => Err(RuleError::NoLegalMove),
        }
    }
}
