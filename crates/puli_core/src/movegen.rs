use crate::{state::GameState, topology::TOPOLOGY, types::*};

/// Generate all legal moves for the side to move, freshly allocated.
pub fn legal_moves(state: &GameState) -> Vec<Move> {
    let mut out = Vec::with_capacity(32);
    legal_moves_into(state, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
///
/// Order is by node ascending, then neighbours ascending, with a tiger's
/// captures after its slides. Search tie-breaks rely on this order.
pub fn legal_moves_into(state: &GameState, out: &mut Vec<Move>) {
    out.clear();
    if state.is_terminal() {
        return;
    }
    match (state.turn(), state.phase()) {
        (Side::Goat, Phase::Placement) => gen_placements(state, out),
        (Side::Goat, Phase::Movement) => {
            for from in state.goats() {
                gen_slides(state, from, out);
            }
        }
        (Side::Tiger, _) => gen_tiger(state, out),
    }
}

/// Tiger options in this position whoever is to move. Used for mobility
/// scoring and for the blocked-tiger win check.
pub fn tiger_moves_into(state: &GameState, out: &mut Vec<Move>) {
    out.clear();
    gen_tiger(state, out);
}

/// Whether any tiger can slide or jump. Stops at the first option found.
pub fn tiger_can_move(state: &GameState) -> bool {
    state.tigers().any(|from| {
        TOPOLOGY.neighbors(from).iter().any(|&to| state.is_empty(to))
            || TOPOLOGY
                .capture_lines(from)
                .iter()
                .any(|line| can_jump(state, line.over, line.landing))
    })
}

fn gen_placements(state: &GameState, out: &mut Vec<Move>) {
    for to in 0..NODE_COUNT as Node {
        if state.is_empty(to) {
            out.push(Move::Place { to });
        }
    }
}

fn gen_slides(state: &GameState, from: Node, out: &mut Vec<Move>) {
    for &to in TOPOLOGY.neighbors(from) {
        if state.is_empty(to) {
            out.push(Move::Slide { from, to });
        }
    }
}

fn gen_tiger(state: &GameState, out: &mut Vec<Move>) {
    for from in state.tigers() {
        gen_slides(state, from, out);
        for line in TOPOLOGY.capture_lines(from) {
            if can_jump(state, line.over, line.landing) {
                out.push(Move::Capture {
                    from,
                    over: line.over,
                    to: line.landing,
                });
            }
        }
    }
}

#[inline]
fn can_jump(state: &GameState, over: Node, landing: Node) -> bool {
    state.piece_at(over) == Some(Side::Goat) && state.is_empty(landing)
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
