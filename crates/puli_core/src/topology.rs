//! Board graph for Aadu Puli Aattam.
//!
//! The board is a triangle over a rectangle: an apex, three rows of six and a
//! bottom row of four hanging under the inner columns.
//!
//! ```text
//!                 0
//!      1    2    3    4    5    6
//!      7    8    9   10   11   12
//!     13   14   15   16   17   18
//!          19   20   21   22
//! ```
//!
//! Adjacency and capture lines are computed at compile time into a single
//! immutable [`TOPOLOGY`] table, so lookups are plain array reads and the
//! table can be shared freely between threads.

use crate::types::{NODE_COUNT, Node};

/// Largest number of neighbours any node has.
pub const MAX_DEGREE: usize = 4;

/// Largest number of capture lines starting at any node.
pub const MAX_CAPTURE_LINES: usize = 4;

/// The apex node.
pub const APEX: Node = 0;

/// First node and length of each horizontal row.
const ROWS: [(Node, Node); 4] = [(1, 6), (7, 6), (13, 6), (19, 4)];

/// A straight line a tiger can jump along: over an adjacent goat onto the
/// node directly behind it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaptureLine {
    pub over: Node,
    pub landing: Node,
}

/// Pre-computed adjacency and capture lines for every node.
pub struct Topology {
    neighbors: [[Node; MAX_DEGREE]; NODE_COUNT],
    degree: [u8; NODE_COUNT],
    lines: [[CaptureLine; MAX_CAPTURE_LINES]; NODE_COUNT],
    line_count: [u8; NODE_COUNT],
}

/// The one board every game is played on.
pub static TOPOLOGY: Topology = Topology::build();

impl Topology {
    const fn build() -> Self {
        let mut t = Topology {
            neighbors: [[0; MAX_DEGREE]; NODE_COUNT],
            degree: [0; NODE_COUNT],
            lines: [[CaptureLine {
                over: 0,
                landing: 0,
            }; MAX_CAPTURE_LINES]; NODE_COUNT],
            line_count: [0; NODE_COUNT],
        };

        // Apex diagonals run through the four inner nodes of row 1 into row 2.
        let mut c = 2;
        while c <= 5 {
            t.add_edge(APEX, c);
            t.add_line(APEX, c, c + 6);
            c += 1;
        }

        // Horizontal chains; any three consecutive nodes form a line.
        let mut r = 0;
        while r < ROWS.len() {
            let (start, len) = ROWS[r];
            let mut i = 0;
            while i + 1 < len {
                t.add_edge(start + i, start + i + 1);
                i += 1;
            }
            let mut i = 0;
            while i + 2 < len {
                t.add_line(start + i, start + i + 1, start + i + 2);
                i += 1;
            }
            r += 1;
        }

        // Six full columns through rows 1-3.
        let mut c = 1;
        while c <= 6 {
            t.add_edge(c, c + 6);
            t.add_edge(c + 6, c + 12);
            t.add_line(c, c + 6, c + 12);
            c += 1;
        }

        // Bottom row sits under columns 2-5 only.
        let mut c = 2;
        while c <= 5 {
            t.add_edge(c + 12, c + 17);
            t.add_line(c + 6, c + 12, c + 17);
            c += 1;
        }

        t
    }

    const fn add_edge(&mut self, a: Node, b: Node) {
        self.push_neighbor(a, b);
        self.push_neighbor(b, a);
    }

    /// Keeps each neighbour list sorted so generation order is stable.
    const fn push_neighbor(&mut self, at: Node, n: Node) {
        let i = at as usize;
        let mut k = self.degree[i] as usize;
        assert!(k < MAX_DEGREE, "node degree exceeds MAX_DEGREE");
        while k > 0 && self.neighbors[i][k - 1] > n {
            self.neighbors[i][k] = self.neighbors[i][k - 1];
            k -= 1;
        }
        self.neighbors[i][k] = n;
        self.degree[i] += 1;
    }

    /// Registers the line `a - b - c` in both directions.
    const fn add_line(&mut self, a: Node, b: Node, c: Node) {
        self.push_line(a, b, c);
        self.push_line(c, b, a);
    }

    const fn push_line(&mut self, from: Node, over: Node, landing: Node) {
        let i = from as usize;
        let k = self.line_count[i] as usize;
        assert!(k < MAX_CAPTURE_LINES, "capture lines exceed MAX_CAPTURE_LINES");
        self.lines[i][k] = CaptureLine { over, landing };
        self.line_count[i] += 1;
    }

    #[inline]
    fn index(node: Node) -> usize {
        let i = node as usize;
        assert!(i < NODE_COUNT, "node {node} is off the board");
        i
    }

    /// Nodes one step away along a board line, ascending.
    #[inline]
    pub fn neighbors(&self, node: Node) -> &[Node] {
        let i = Self::index(node);
        &self.neighbors[i][..self.degree[i] as usize]
    }

    /// Capture lines starting at `node`, in a fixed order.
    #[inline]
    pub fn capture_lines(&self, node: Node) -> &[CaptureLine] {
        let i = Self::index(node);
        &self.lines[i][..self.line_count[i] as usize]
    }

    #[inline]
    pub fn degree(&self, node: Node) -> usize {
        self.degree[Self::index(node)] as usize
    }

    pub fn is_adjacent(&self, a: Node, b: Node) -> bool {
        self.neighbors(a).contains(&b)
    }

    /// Landing node of the jump `from` over `over`, if those two lie on a line.
    pub fn landing(&self, from: Node, over: Node) -> Option<Node> {
        self.capture_lines(from)
            .iter()
            .find(|line| line.over == over)
            .map(|line| line.landing)
    }

    /// Every undirected edge once, as `(low, high)`.
    pub fn edges(&self) -> impl Iterator<Item = (Node, Node)> + '_ {
        (0..NODE_COUNT as Node).flat_map(move |a| {
            self.neighbors(a)
                .iter()
                .copied()
                .filter(move |&b| a < b)
                .map(move |b| (a, b))
        })
    }
}

#[cfg(test)]
#[path = "topology_tests.rs"]
mod topology_tests;
