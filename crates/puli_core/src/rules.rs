//! The move applier.
//!
//! `apply` is the only way a game advances. Legality is membership in
//! [`legal_moves`]; nothing else is consulted. When a move is refused,
//! [`diagnose`] explains why in words a player understands, but it never
//! decides anything on its own.

use crate::{
    error::RuleError,
    movegen::legal_moves,
    state::GameState,
    topology::TOPOLOGY,
    types::*,
};

/// Apply `mv` to `state`, returning the successor position.
///
/// The successor has the turn flipped and its winner already evaluated. On
/// failure `state` is untouched; validation happens before anything is
/// built.
pub fn apply(state: &GameState, mv: Move) -> Result<GameState, RuleError> {
    if state.is_terminal() {
        return Err(RuleError::TerminalState);
    }
    if !legal_moves(state).contains(&mv) {
        return Err(RuleError::illegal(diagnose(state, mv)));
    }
    Ok(state.successor(mv))
}

/// Human-readable reason why `mv` is not among the legal moves of `state`.
pub fn diagnose(state: &GameState, mv: Move) -> String {
    let nodes = [mv.from(), Some(mv.to()), mv.captured()];
    if let Some(n) = nodes.into_iter().flatten().find(|&n| n as usize >= NODE_COUNT) {
        return format!("node {n} is off the board");
    }
    if let Some(w) = state.winner() {
        return format!("game over, {w} won");
    }

    let turn = state.turn();
    match mv {
        Move::Place { to } => {
            if turn != Side::Goat {
                "not your turn: only goats are placed".to_string()
            } else if state.phase() == Phase::Movement {
                format!("all {TOTAL_GOATS} goats are already placed")
            } else if !state.is_empty(to) {
                format!("node {to} is occupied")
            } else {
                format!("{mv} is not legal here")
            }
        }
        Move::Slide { from, to } => match state.piece_at(from) {
            None => format!("no piece on node {from}"),
            Some(side) if side != turn => "not your turn".to_string(),
            Some(Side::Goat) if state.phase() == Phase::Placement => {
                format!("goats cannot move until all {TOTAL_GOATS} are placed")
            }
            Some(_) if !TOPOLOGY.is_adjacent(from, to) => {
                format!("nodes {from} and {to} are not adjacent")
            }
            Some(_) if !state.is_empty(to) => format!("node {to} is occupied"),
            Some(_) => format!("{mv} is not legal here"),
        },
        Move::Capture { from, over, to } => match state.piece_at(from) {
            None => format!("no piece on node {from}"),
            Some(Side::Goat) => "goats cannot capture".to_string(),
            Some(Side::Tiger) if turn != Side::Tiger => "not your turn".to_string(),
            Some(Side::Tiger) if TOPOLOGY.landing(from, over) != Some(to) => {
                format!("{from}, {over} and {to} are not on one capture line")
            }
            Some(Side::Tiger) if state.piece_at(over) != Some(Side::Goat) => {
                format!("no goat on node {over} to capture")
            }
            Some(Side::Tiger) if !state.is_empty(to) => format!("node {to} is occupied"),
            Some(Side::Tiger) => format!("{mv} is not legal here"),
        },
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
