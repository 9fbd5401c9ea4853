//! Terminal-state detection.

use crate::{movegen::tiger_can_move, state::GameState, types::*};

/// Who has won in `state`, if anyone.
///
/// Tigers win on the fifth capture, whoever moves next. Goats win only when
/// the Tiger is due to move and has nothing to play; a blocked Tiger on the
/// Goat's turn is not yet a win, since the Goat still has to move.
pub fn winner(state: &GameState) -> Option<Side> {
    if state.goats_captured() >= CAPTURES_TO_WIN {
        return Some(Side::Tiger);
    }
    if state.turn() == Side::Tiger && !tiger_can_move(state) {
        return Some(Side::Goat);
    }
    None
}
