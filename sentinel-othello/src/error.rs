//! Errors raised by the board and the rules.

use crate::{Position, Side};
use derive_more::{Display, Error};

/// Everything that can go wrong when touching the board or applying a move.
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
pub enum OthelloError {
    /// The position is on the border ring or outside the storage grid.
    #[display(fmt = "position ({}, {}) is outside the playing area", row, col)]
    OutOfBounds { row: usize, col: usize },

    /// The position is not a legal move for `side` on the current board.
    #[display(fmt = "{} cannot play at {}", side, position)]
    IllegalMove { side: Side, position: Position },
}

impl OthelloError {
    pub(crate) fn out_of_bounds(position: Position) -> Self {
        OthelloError::OutOfBounds {
            row: position.row,
            col: position.col,
        }
    }
}
