use std::fmt;

use crate::error::NotationError;
use crate::types::*;
use crate::win;

/// A complete game position.
///
/// Fields are private so that every value in circulation satisfies the
/// game's invariants: exactly three tigers, `goats_placed` equal to goats on
/// the board plus goats captured, and a `winner` consistent with the rest.
/// New values come from [`GameState::new`], [`GameState::setup`],
/// [`GameState::from_notation`] or [`crate::apply`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GameState {
    board: [Option<Side>; NODE_COUNT],
    turn: Side,
    goats_placed: u8,
    goats_captured: u8,
    winner: Option<Side>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Tigers on the apex triangle, no goats, Goat to move.
    pub fn new() -> Self {
        let mut board = [None; NODE_COUNT];
        for t in TIGER_START {
            board[t as usize] = Some(Side::Tiger);
        }
        GameState {
            board,
            turn: Side::Goat,
            goats_placed: 0,
            goats_captured: 0,
            winner: None,
        }
    }

    /// Builds an arbitrary position, checking every invariant.
    ///
    /// The winner is computed from the result, so a setup with five captures
    /// or a blocked Tiger to move comes back terminal.
    pub fn setup(
        tigers: &[Node],
        goats: &[Node],
        turn: Side,
        goats_placed: u8,
        goats_captured: u8,
    ) -> Result<Self, NotationError> {
        let mut board = [None; NODE_COUNT];
        for (&node, side) in tigers
            .iter()
            .map(|n| (n, Side::Tiger))
            .chain(goats.iter().map(|n| (n, Side::Goat)))
        {
            let cell = board
                .get_mut(node as usize)
                .ok_or(NotationError::NodeOutOfRange(node))?;
            if cell.is_some() {
                return Err(NotationError::DuplicateNode(node));
            }
            *cell = Some(side);
        }
        Self::from_board(board, turn, goats_placed, goats_captured)
    }

    fn from_board(
        board: [Option<Side>; NODE_COUNT],
        turn: Side,
        goats_placed: u8,
        goats_captured: u8,
    ) -> Result<Self, NotationError> {
        let tigers = board.iter().filter(|c| **c == Some(Side::Tiger)).count();
        if tigers != TIGER_COUNT {
            return Err(NotationError::TigerCount(tigers));
        }
        if goats_placed > TOTAL_GOATS {
            return Err(NotationError::CounterRange(goats_placed));
        }
        if goats_captured > CAPTURES_TO_WIN {
            return Err(NotationError::CounterRange(goats_captured));
        }
        let on_board = board.iter().filter(|c| **c == Some(Side::Goat)).count() as u8;
        if on_board + goats_captured != goats_placed {
            return Err(NotationError::GoatCount {
                placed: goats_placed,
                on_board,
                captured: goats_captured,
            });
        }

        let mut state = GameState {
            board,
            turn,
            goats_placed,
            goats_captured,
            winner: None,
        };
        state.winner = win::winner(&state);
        Ok(state)
    }

    /// Parses `<23 cells> <turn> <goats_placed> <goats_captured>`, cells
    /// being `T`, `G` or `.` for nodes 0..22.
    ///
    /// ```
    /// use puli_core::{GameState, Side};
    /// let s = GameState::from_notation("T..TT.................. G 0 0").unwrap();
    /// assert_eq!(s, GameState::new());
    /// assert_eq!(s.turn(), Side::Goat);
    /// ```
    pub fn from_notation(text: &str) -> Result<Self, NotationError> {
        let parts: Vec<&str> = text.split_whitespace().collect();
        if parts.len() != 4 {
            return Err(NotationError::FieldCount(parts.len()));
        }

        let cells: Vec<char> = parts[0].chars().collect();
        if cells.len() != NODE_COUNT {
            return Err(NotationError::BoardLength(cells.len()));
        }
        let mut board = [None; NODE_COUNT];
        for (slot, &ch) in board.iter_mut().zip(&cells) {
            *slot = match ch {
                '.' => None,
                other => Some(Side::from_symbol(other).ok_or(NotationError::InvalidCell(other))?),
            };
        }

        let turn = match parts[1] {
            t if t.len() == 1 => t
                .chars()
                .next()
                .and_then(Side::from_symbol)
                .ok_or_else(|| NotationError::InvalidSide(t.to_string()))?,
            t => return Err(NotationError::InvalidSide(t.to_string())),
        };
        let counter = |s: &str| {
            s.parse::<u8>()
                .map_err(|_| NotationError::InvalidCounter(s.to_string()))
        };
        let placed = counter(parts[2])?;
        let captured = counter(parts[3])?;

        Self::from_board(board, turn, placed, captured)
    }

    pub fn to_notation(&self) -> String {
        let cells: String = self
            .board
            .iter()
            .map(|c| c.map_or('.', Side::symbol))
            .collect();
        format!(
            "{cells} {} {} {}",
            self.turn.symbol(),
            self.goats_placed,
            self.goats_captured
        )
    }

    #[inline]
    pub fn piece_at(&self, node: Node) -> Option<Side> {
        self.board[node as usize]
    }

    #[inline]
    pub fn is_empty(&self, node: Node) -> bool {
        self.board[node as usize].is_none()
    }

    pub fn board(&self) -> &[Option<Side>; NODE_COUNT] {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn goats_placed(&self) -> u8 {
        self.goats_placed
    }

    pub fn goats_captured(&self) -> u8 {
        self.goats_captured
    }

    pub fn goats_on_board(&self) -> u8 {
        self.goats_placed - self.goats_captured
    }

    /// Goats still waiting to be placed.
    pub fn goats_in_hand(&self) -> u8 {
        TOTAL_GOATS - self.goats_placed
    }

    #[inline]
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.winner.is_some()
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        if self.goats_placed < TOTAL_GOATS {
            Phase::Placement
        } else {
            Phase::Movement
        }
    }

    /// Nodes holding a piece of `side`, ascending.
    pub fn nodes_of(&self, side: Side) -> impl Iterator<Item = Node> + '_ {
        self.board
            .iter()
            .enumerate()
            .filter(move |(_, c)| **c == Some(side))
            .map(|(i, _)| i as Node)
    }

    pub fn tigers(&self) -> impl Iterator<Item = Node> + '_ {
        self.nodes_of(Side::Tiger)
    }

    pub fn goats(&self) -> impl Iterator<Item = Node> + '_ {
        self.nodes_of(Side::Goat)
    }

    /// Successor after a move already known to be legal. Only the rule
    /// engine calls this, after its membership check.
    pub(crate) fn successor(&self, mv: Move) -> GameState {
        let mut next = self.clone();
        match mv {
            Move::Place { to } => {
                next.board[to as usize] = Some(Side::Goat);
                next.goats_placed += 1;
            }
            Move::Slide { from, to } => {
                next.board[to as usize] = next.board[from as usize].take();
            }
            Move::Capture { from, over, to } => {
                next.board[to as usize] = next.board[from as usize].take();
                next.board[over as usize] = None;
                next.goats_captured += 1;
            }
        }
        next.turn = self.turn.other();
        next.winner = win::winner(&next);
        next
    }
}

impl fmt::Display for GameState {
    /// Draws the board in its triangle-over-rectangle shape.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cell = |n: Node| self.piece_at(n).map_or('.', Side::symbol);
        writeln!(f, "{:>6}", cell(0))?;
        for start in [1, 7, 13] {
            let row: Vec<String> = (start..start + 6).map(|n| cell(n).to_string()).collect();
            writeln!(f, "{}", row.join(" "))?;
        }
        let bottom: Vec<String> = (19..23).map(|n| cell(n).to_string()).collect();
        writeln!(f, "  {}", bottom.join(" "))?;
        write!(
            f,
            "turn {} | placed {} | captured {}",
            self.turn, self.goats_placed, self.goats_captured
        )?;
        if let Some(w) = self.winner {
            write!(f, " | winner {w}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
