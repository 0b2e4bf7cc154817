//! The search capability implementation for a Reversi position.

use waypoint_search::contract::Searchable;
use waypoint_search::heuristic::Estimate;
use waypoint_search::node::SearchNode;

use crate::board::{Board, Outcome, Piece};

/// Default scalar for the driver's iteration budget (`size_hint²` = 64
/// expansions). A constant, deliberately independent of board size — the
/// budget is domain configuration, not a search concern.
pub const DEFAULT_SIZE_HINT: f64 = 8.0;

/// A Reversi game exposed to the search driver.
///
/// Every edge weight is zero, so path cost never differentiates
/// candidates and the search runs as a heuristic-ordered best-first
/// search. Terminal positions map to the tagged sentinels: a White win
/// ranks before every finite f-value, so the driver explores toward a
/// White-favorable terminal first — a consequence of the sign convention.
#[derive(Debug, Clone)]
pub struct Reversi {
    board: Board,
    size_hint: f64,
}

impl Reversi {
    /// Wrap a position with the default iteration-budget hint.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self::with_size_hint(board, DEFAULT_SIZE_HINT)
    }

    /// Wrap a position with an explicit iteration-budget hint.
    #[must_use]
    pub fn with_size_hint(board: Board, size_hint: f64) -> Self {
        Self { board, size_hint }
    }

    /// The wrapped position.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }
}

/// Piece-difference plus boundary-difference evaluation, Black positive.
#[allow(clippy::cast_precision_loss)]
fn evaluate(board: &Board) -> f64 {
    let material = board.count(Piece::Black) as f64 - board.count(Piece::White) as f64;
    let boundary =
        board.boundary_count(Piece::Black) as f64 - board.boundary_count(Piece::White) as f64;
    material + boundary
}

impl Searchable for Reversi {
    type Element = Board;

    fn initial_state(&self) -> SearchNode<Board> {
        SearchNode::new(self.board.clone(), 0.0)
    }

    fn successors(&self, node: &SearchNode<Board>) -> Vec<SearchNode<Board>> {
        node.element()
            .next_positions()
            .into_iter()
            .map(|board| SearchNode::new(board, 0.0))
            .collect()
    }

    fn is_goal(&self, node: &SearchNode<Board>) -> bool {
        node.element().outcome().is_some()
    }

    fn heuristic(&self, node: &SearchNode<Board>) -> Estimate {
        match node.element().outcome() {
            Some(Outcome::BlackWin) => Estimate::MaxWin,
            Some(Outcome::WhiteWin) => Estimate::MinWin,
            Some(Outcome::Tie) => Estimate::Draw,
            None => Estimate::Finite(evaluate(node.element())),
        }
    }

    fn size_hint(&self) -> f64 {
        self.size_hint
    }
}
