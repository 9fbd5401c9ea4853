//! Short text form for moves: `P5` places, `3-9` slides, `0x3-9` captures.
//!
//! `Move`'s `Display` writes this form; [`parse_move`] reads it back and
//! matches it against the legal moves so the result is always playable.

use crate::{error::MoveParseError, movegen::legal_moves, state::GameState, types::*};

/// Parse the text form without looking at a position.
pub fn parse_move_text(text: &str) -> Result<Move, MoveParseError> {
    let syntax = || MoveParseError::Syntax(text.to_string());
    let node = |s: &str| s.trim().parse::<Node>().map_err(|_| syntax());

    let t = text.trim();
    if let Some(rest) = t.strip_prefix(['P', 'p']) {
        return Ok(Move::Place { to: node(rest)? });
    }
    let (head, to) = t.split_once('-').ok_or_else(syntax)?;
    let to = node(to)?;
    match head.split_once(['x', 'X']) {
        Some((from, over)) => Ok(Move::Capture {
            from: node(from)?,
            over: node(over)?,
            to,
        }),
        None => Ok(Move::Slide {
            from: node(head)?,
            to,
        }),
    }
}

/// Parse a move and require it to be legal in `state`.
pub fn parse_move(state: &GameState, text: &str) -> Result<Move, MoveParseError> {
    let mv = parse_move_text(text)?;
    if legal_moves(state).contains(&mv) {
        Ok(mv)
    } else {
        Err(MoveParseError::NotLegal(text.trim().to_string()))
    }
}

/// Space-separated text of a move list, for logs and the protocol's `moves`.
pub fn moves_to_text(moves: &[Move]) -> String {
    moves
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
