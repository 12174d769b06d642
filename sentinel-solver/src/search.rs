//! Internal search functions.

use crate::DEFAULT_DEPTH;
use log::trace;
use rayon::prelude::*;
use sentinel_othello::rules::{self, legal_moves};
use sentinel_othello::{Board, Position, Side};

/// The outcome of a search: the minimax value of the root, the move reaching
/// it (None at depth 0, on a pass, or when the game is over) and the number of
/// nodes visited.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SearchResult {
    pub score: i8,
    pub best_move: Option<Position>,
    pub nodes: u64,
}

/// A fixed-depth minimax searcher.
///
/// Leaves are scored as `maximizer pieces - opponent pieces`. The maximizing
/// side moves at maximizing nodes and its opponent at minimizing ones.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Minimax {
    pub depth: u32,
    pub maximizer: Side,
}

impl Default for Minimax {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

impl SearchResult {
    fn leaf(score: i8) -> Self {
        Self {
            score,
            best_move: None,
            nodes: 1,
        }
    }
}

/// Whether `candidate` beats `incumbent`. Strict, so the first move seen wins ties.
#[inline]
fn improves(maximizing: bool, candidate: i8, incumbent: i8) -> bool {
    if maximizing {
        candidate > incumbent
    } else {
        candidate < incumbent
    }
}

/// Fold child results in enumeration order into the result for their parent.
fn pick_best<I>(maximizing: bool, replies: I) -> SearchResult
where
    I: IntoIterator<Item = (Position, SearchResult)>,
{
    let mut best = SearchResult {
        score: if maximizing { i8::MIN } else { i8::MAX },
        best_move: None,
        nodes: 1,
    };

    for (mv, reply) in replies {
        best.nodes += reply.nodes;
        if improves(maximizing, reply.score, best.score) {
            best.score = reply.score;
            best.best_move = Some(mv);
        }
    }

    best
}

impl Minimax {
    /// Search `depth` plies with white maximizing.
    pub fn new(depth: u32) -> Self {
        Self {
            depth,
            maximizer: Side::White,
        }
    }

    /// Use `side` as the maximizing side instead of white.
    pub fn with_maximizer(self, side: Side) -> Self {
        Self {
            maximizer: side,
            ..self
        }
    }

    /// Score a board from the maximizer's point of view.
    #[inline]
    pub fn evaluate(&self, board: &Board) -> i8 {
        board.score().difference(self.maximizer)
    }

    #[inline]
    fn side_to_move(&self, maximizing: bool) -> Side {
        if maximizing {
            self.maximizer
        } else {
            !self.maximizer
        }
    }

    /// Search from `board`. The board is never modified: every explored move is
    /// played on a copy.
    pub fn search(&self, board: &Board, maximizing: bool) -> SearchResult {
        let result = self.minimax(board, self.depth, maximizing);
        trace!(
            "minimax depth {}: score {} via {:?} after {} nodes",
            self.depth,
            result.score,
            result.best_move,
            result.nodes
        );
        result
    }

    /// Search from `board`, evaluating each root move's subtree in parallel.
    pub fn search_parallel(&self, board: &Board, maximizing: bool) -> SearchResult {
        if self.depth == 0 {
            return self.search(board, maximizing);
        }

        let side = self.side_to_move(maximizing);
        let moves = legal_moves(board, side);
        if moves.is_empty() {
            return self.search(board, maximizing);
        }

        let replies: Vec<(Position, SearchResult)> = moves
            .as_slice()
            .par_iter()
            .map(|&mv| (mv, self.child(board, side, mv, self.depth, maximizing)))
            .collect();

        let result = pick_best(maximizing, replies);
        trace!(
            "parallel minimax depth {}: score {} via {:?} after {} nodes",
            self.depth,
            result.score,
            result.best_move,
            result.nodes
        );
        result
    }

    /// Play `mv` for `side` on a copy of `board` and search the reply.
    fn child(&self, board: &Board, side: Side, mv: Position, depth: u32, maximizing: bool) -> SearchResult {
        let mut next = *board;
        rules::play_unchecked(&mut next, side, mv);
        self.minimax(&next, depth - 1, !maximizing)
    }

    fn minimax(&self, board: &Board, depth: u32, maximizing: bool) -> SearchResult {
        if depth == 0 {
            return SearchResult::leaf(self.evaluate(board));
        }

        let side = self.side_to_move(maximizing);
        let moves = legal_moves(board, side);
        if moves.is_empty() {
            // Neither side can move: game over
            if !rules::has_moves(board, !side) {
                return SearchResult::leaf(self.evaluate(board));
            }

            // I pass, but my opponent has moves: same depth, other side to move
            let reply = self.minimax(board, depth, !maximizing);
            return SearchResult {
                score: reply.score,
                best_move: None,
                nodes: reply.nodes + 1,
            };
        }

        pick_best(
            maximizing,
            moves
                .into_iter()
                .map(|mv| (mv, self.child(board, side, mv, depth, maximizing))),
        )
    }
}
