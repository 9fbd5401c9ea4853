//! Static evaluation of non-terminal positions.

use puli_core::{GameState, Phase, Side, TOPOLOGY};

use crate::config::EvalWeights;

/// Score of a decided game, before shortening by ply.
pub const WIN: i32 = 100_000;

/// Evaluates the position from the side-to-move's perspective.
///
/// Positive = good for the side to move. Terminal positions are scored by
/// the search, not here.
pub fn evaluate(state: &GameState, weights: &EvalWeights) -> i32 {
    let score = tiger_score(state, weights);
    match state.turn() {
        Side::Tiger => score,
        Side::Goat => -score,
    }
}

/// Heuristic value for the Tiger side.
pub fn tiger_score(state: &GameState, weights: &EvalWeights) -> i32 {
    let captured = state.goats_captured() as i32;
    let mut score = weights.capture * captured + weights.capture_urgency * captured * captured;
    score -= weights.goat_material * state.goats_on_board() as i32;

    let placing = state.phase() == Phase::Placement;
    for tiger in state.tigers() {
        let slides = TOPOLOGY
            .neighbors(tiger)
            .iter()
            .filter(|&&n| state.is_empty(n))
            .count() as i32;
        let jumps = TOPOLOGY
            .capture_lines(tiger)
            .iter()
            .filter(|l| state.piece_at(l.over) == Some(Side::Goat) && state.is_empty(l.landing))
            .count() as i32;

        score += weights.mobility * (slides + jumps) + weights.threat * jumps;
        if slides + jumps == 0 {
            score -= weights.trapped_tiger;
        }
        if placing {
            score += weights.centrality * TOPOLOGY.degree(tiger) as i32;
        }
    }
    score
}
