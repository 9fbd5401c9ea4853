//! Error types for rule checks and input parsing.

use thiserror::Error;

use crate::types::Side;

/// A request the rules refuse. The state it was made against is untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("illegal move: {reason}")]
    IllegalMove { reason: String },
    #[error("game over")]
    TerminalState,
    #[error("no legal moves available")]
    NoLegalMove,
    #[error("not {side}'s turn")]
    NotYourTurn { side: Side },
}

impl RuleError {
    pub fn illegal(reason: impl Into<String>) -> Self {
        RuleError::IllegalMove {
            reason: reason.into(),
        }
    }
}

/// Malformed position notation or an impossible setup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("expected 4 fields, found {0}")]
    FieldCount(usize),
    #[error("board must have 23 cells, found {0}")]
    BoardLength(usize),
    #[error("invalid cell '{0}'")]
    InvalidCell(char),
    #[error("invalid side '{0}'")]
    InvalidSide(String),
    #[error("invalid counter '{0}'")]
    InvalidCounter(String),
    #[error("node {0} is off the board")]
    NodeOutOfRange(u8),
    #[error("node {0} is listed twice")]
    DuplicateNode(u8),
    #[error("expected 3 tigers, found {0}")]
    TigerCount(usize),
    #[error("goats placed ({placed}) must equal goats on board ({on_board}) plus captured ({captured})")]
    GoatCount {
        placed: u8,
        on_board: u8,
        captured: u8,
    },
    #[error("counter {0} out of range")]
    CounterRange(u8),
}

/// A text move that does not parse or matches no legal move.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveParseError {
    #[error("cannot parse move '{0}'")]
    Syntax(String),
    #[error("'{0}' is not a legal move here")]
    NotLegal(String),
}

/// A move request whose fields do not fit its declared kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WireError {
    #[error("{kind} move requires {field}")]
    MissingField {
        kind: &'static str,
        field: &'static str,
    },
    #[error("{kind} move does not take {field}")]
    UnexpectedField {
        kind: &'static str,
        field: &'static str,
    },
    #[error("node {0} is off the board")]
    NodeOutOfRange(u8),
}
