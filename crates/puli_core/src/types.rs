use std::fmt;

use serde::{Deserialize, Serialize};

/// Board intersection, 0..=22. Front ends display it 1-based.
pub type Node = u8;

/// Number of intersections on the board.
pub const NODE_COUNT: usize = 23;

/// Goats available to the Goat side over the whole game.
pub const TOTAL_GOATS: u8 = 15;

/// Captures that end the game in the Tigers' favour.
pub const CAPTURES_TO_WIN: u8 = 5;

/// Number of tigers on the board for the whole game.
pub const TIGER_COUNT: usize = 3;

/// Where the tigers stand at the start: the apex and the two inner nodes of
/// the first row.
pub const TIGER_START: [Node; TIGER_COUNT] = [0, 3, 4];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    #[serde(rename = "T")]
    Tiger,
    #[serde(rename = "G")]
    Goat,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Tiger => Side::Goat,
            Side::Goat => Side::Tiger,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Side::Tiger => 'T',
            Side::Goat => 'G',
        }
    }

    pub fn from_symbol(c: char) -> Option<Side> {
        match c.to_ascii_uppercase() {
            'T' => Some(Side::Tiger),
            'G' => Some(Side::Goat),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Tiger => f.write_str("Tiger"),
            Side::Goat => f.write_str("Goat"),
        }
    }
}

/// Derived from `goats_placed`, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Placement,
    Movement,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Place { to: Node },
    Slide { from: Node, to: Node },
    Capture { from: Node, over: Node, to: Node },
}

impl Move {
    /// Origin of the moving piece; placements have none.
    pub fn from(self) -> Option<Node> {
        match self {
            Move::Place { .. } => None,
            Move::Slide { from, .. } | Move::Capture { from, .. } => Some(from),
        }
    }

    pub fn to(self) -> Node {
        match self {
            Move::Place { to } | Move::Slide { to, .. } | Move::Capture { to, .. } => to,
        }
    }

    /// The jumped goat, for captures.
    pub fn captured(self) -> Option<Node> {
        match self {
            Move::Capture { over, .. } => Some(over),
            _ => None,
        }
    }

    pub fn is_capture(self) -> bool {
        matches!(self, Move::Capture { .. })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Move::Place { to } => write!(f, "P{to}"),
            Move::Slide { from, to } => write!(f, "{from}-{to}"),
            Move::Capture { from, over, to } => write!(f, "{from}x{over}-{to}"),
        }
    }
}
