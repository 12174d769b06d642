pub mod search;

pub use search::{Minimax, SearchResult};

use sentinel_othello::Board;

/// Search depth used by the "aggressive" computer player.
pub const DEFAULT_DEPTH: u32 = 5;

/// Find the best move by plain minimax, `depth` plies deep.
/// White is the maximizing side and scores are `white pieces - black pieces`.
/// When `maximizing` is set, white is to move; otherwise black is.
pub fn best_move(board: &Board, depth: u32, maximizing: bool) -> SearchResult {
    Minimax::new(depth).search(board, maximizing)
}

/// Same as [`best_move`], but evaluates the root's subtrees on the rayon thread pool.
/// The result is identical to the sequential search.
pub fn best_move_parallel(board: &Board, depth: u32, maximizing: bool) -> SearchResult {
    Minimax::new(depth).search_parallel(board, maximizing)
}
