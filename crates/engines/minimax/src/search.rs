//! Negamax search with alpha-beta pruning

use puli_core::{apply, legal_moves_into, GameState, Move, TimeControl};

use crate::config::EvalWeights;
use crate::eval::{evaluate, WIN};

/// Result from pick_best_move indicating whether search completed or was stopped.
pub struct SearchOutcome {
    /// Best fully searched root move and its score (None without legal moves)
    pub best_move: Option<(Move, i32)>,
    /// True if search was stopped early due to time
    pub stopped: bool,
}

/// Searches the position and returns the best move with its score.
///
/// Root moves are tried in generator order and a later move must score
/// strictly better to replace an earlier one, so ties go to the first move
/// generated. If the clock runs out before any root move is fully searched,
/// the first legal move is returned so that callers always get a move.
pub fn pick_best_move(
    state: &GameState,
    depth: u8,
    weights: &EvalWeights,
    nodes: &mut u64,
    tc: &TimeControl,
) -> SearchOutcome {
    let mut moves = Vec::with_capacity(32);
    legal_moves_into(state, &mut moves);

    let Some(&first) = moves.first() else {
        return SearchOutcome {
            best_move: None,
            stopped: false,
        };
    };

    let mut best: Option<(Move, i32)> = None;
    let mut stopped = false;
    let beta = WIN + 1;

    for mv in moves {
        if out_of_time(tc, *nodes) {
            stopped = true;
            break;
        }

        let Ok(child) = apply(state, mv) else {
            continue;
        };
        *nodes += 1;

        let alpha = best.map_or(-beta, |(_, s)| s);
        let (score, was_stopped) = negamax(
            &child,
            depth.saturating_sub(1),
            1,
            -beta,
            -alpha,
            weights,
            nodes,
            tc,
        );
        let score = -score;

        if was_stopped {
            stopped = true;
            break;
        }

        if best.map_or(true, |(_, s)| score > s) {
            best = Some((mv, score));
        }
    }

    SearchOutcome {
        best_move: Some(best.unwrap_or((first, 0))),
        stopped,
    }
}

/// Recursive negamax search with alpha-beta pruning.
///
/// Returns (score, stopped) where stopped indicates if search was aborted due to time.
#[allow(clippy::too_many_arguments)]
fn negamax(
    state: &GameState,
    depth: u8,
    ply: i32,
    mut alpha: i32,
    beta: i32,
    weights: &EvalWeights,
    nodes: &mut u64,
    tc: &TimeControl,
) -> (i32, bool) {
    if out_of_time(tc, *nodes) {
        return (0, true);
    }

    if let Some(winner) = state.winner() {
        let score = WIN - ply;
        return if winner == state.turn() {
            (score, false)
        } else {
            (-score, false)
        };
    }

    if depth == 0 {
        return (evaluate(state, weights), false);
    }

    let mut moves = Vec::with_capacity(32);
    legal_moves_into(state, &mut moves);
    if moves.is_empty() {
        // Goat stuck without a decided game.
        return (0, false);
    }
    // Captures first; the sort is stable so generator order holds otherwise.
    moves.sort_by_key(|mv| !mv.is_capture());

    let mut best = -WIN - 1;

    for mv in moves {
        let Ok(child) = apply(state, mv) else {
            continue;
        };
        *nodes += 1;

        let (score, stopped) = negamax(
            &child,
            depth - 1,
            ply + 1,
            -beta,
            -alpha,
            weights,
            nodes,
            tc,
        );
        let score = -score;

        if stopped {
            return (best, true);
        }

        if score > best {
            best = score;
        }
        if best > alpha {
            alpha = best;
        }
        if alpha >= beta {
            break; // Beta cutoff
        }
    }

    (best, false)
}

#[inline]
fn out_of_time(tc: &TimeControl, nodes: u64) -> bool {
    tc.is_stopped() || (tc.should_check_time(nodes) && tc.check_time())
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
