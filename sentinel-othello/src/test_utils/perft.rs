//! "Perft" performance test: count the number of leaves at a given depth.
//! Exercises move generation and captures together, and is useful for tuning both.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::rules;
use crate::{Board, Side};

/// Count the leaves `depth` plies below the starting position.
/// A forced pass consumes a ply; two passes in a row end the game.
pub fn run_perft(depth: u64) -> u64 {
    leaves_below(Board::new(), Side::Black, depth, false)
}

fn leaves_below(board: Board, side: Side, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let moves = rules::legal_moves(&board, side);
    if moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(board, !side, depth - 1, true);
    }

    moves
        .into_iter()
        .map(|mv| {
            let mut next = board;
            rules::play_unchecked(&mut next, side, mv);
            leaves_below(next, !side, depth - 1, false)
        })
        .sum()
}
