//! JSON shapes exchanged with game clients.
//!
//! Boards travel as a map from node number to `null`, `"T"` or `"G"`, and
//! moves carry an upper-case `type` tag. These types only translate; every
//! decision stays with the rule engine.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{error::WireError, movegen::legal_moves, state::GameState, types::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MoveKind {
    Place,
    Move,
    Capture,
}

impl MoveKind {
    fn label(self) -> &'static str {
        match self {
            MoveKind::Place => "PLACE",
            MoveKind::Move => "MOVE",
            MoveKind::Capture => "CAPTURE",
        }
    }
}

/// One entry of `valid_moves`, also the reply to an AI move request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveView {
    pub from: Option<Node>,
    pub to: Node,
    #[serde(rename = "type")]
    pub kind: MoveKind,
    pub capture: Option<Node>,
}

impl From<Move> for MoveView {
    fn from(mv: Move) -> Self {
        let kind = match mv {
            Move::Place { .. } => MoveKind::Place,
            Move::Slide { .. } => MoveKind::Move,
            Move::Capture { .. } => MoveKind::Capture,
        };
        MoveView {
            from: mv.from(),
            to: mv.to(),
            kind,
            capture: mv.captured(),
        }
    }
}

/// Full game snapshot as clients see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateView {
    pub board: BTreeMap<Node, Option<Side>>,
    pub turn: Side,
    pub goats_placed: u8,
    pub goats_captured: u8,
    pub winner: Option<Side>,
    pub valid_moves: Vec<MoveView>,
}

impl From<&GameState> for StateView {
    fn from(state: &GameState) -> Self {
        let board = state
            .board()
            .iter()
            .enumerate()
            .map(|(node, cell)| (node as Node, *cell))
            .collect();
        StateView {
            board,
            turn: state.turn(),
            goats_placed: state.goats_placed(),
            goats_captured: state.goats_captured(),
            winner: state.winner(),
            valid_moves: legal_moves(state).into_iter().map(MoveView::from).collect(),
        }
    }
}

/// A client's move. Optional fields depend on `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    #[serde(rename = "type")]
    pub kind: MoveKind,
    #[serde(default)]
    pub from_node: Option<Node>,
    pub to_node: Node,
    #[serde(default)]
    pub capture_node: Option<Node>,
}

impl MoveRequest {
    /// Decode into a [`Move`], checking only the shape of the request.
    /// Whether the move is legal is the rule engine's call.
    pub fn to_move(&self) -> Result<Move, WireError> {
        let kind = self.kind.label();
        let required = |value: Option<Node>, field| {
            value.ok_or(WireError::MissingField { kind, field })
        };
        let forbidden = |value: Option<Node>, field| match value {
            Some(_) => Err(WireError::UnexpectedField { kind, field }),
            None => Ok(()),
        };

        let mv = match self.kind {
            MoveKind::Place => {
                forbidden(self.from_node, "from_node")?;
                forbidden(self.capture_node, "capture_node")?;
                Move::Place { to: self.to_node }
            }
            MoveKind::Move => {
                forbidden(self.capture_node, "capture_node")?;
                Move::Slide {
                    from: required(self.from_node, "from_node")?,
                    to: self.to_node,
                }
            }
            MoveKind::Capture => Move::Capture {
                from: required(self.from_node, "from_node")?,
                over: required(self.capture_node, "capture_node")?,
                to: self.to_node,
            },
        };

        let nodes = [mv.from(), Some(mv.to()), mv.captured()];
        match nodes.into_iter().flatten().find(|&n| n as usize >= NODE_COUNT) {
            Some(n) => Err(WireError::NodeOutOfRange(n)),
            None => Ok(mv),
        }
    }
}

impl From<Move> for MoveRequest {
    fn from(mv: Move) -> Self {
        let view = MoveView::from(mv);
        MoveRequest {
            kind: view.kind,
            from_node: view.from,
            to_node: view.to,
            capture_node: view.capture,
        }
    }
}

/// Error reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorView {
    pub detail: String,
}

impl ErrorView {
    pub fn new(detail: impl ToString) -> Self {
        ErrorView {
            detail: detail.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "wire_tests.rs"]
mod wire_tests;
