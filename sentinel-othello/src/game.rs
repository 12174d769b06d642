//! Implements game-level Othello logic.
//!
//! For correctness, this higher-level interface is preferred, but engines may
//! use [`Board`] and [`crate::rules`] directly.

use crate::rules::{self, MoveList};
use crate::{Board, OthelloError, Position, Score, Side};
use derive_more::Display;
use log::debug;
use std::fmt;

/// Whether the game is still going, and who moves next.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum GameStatus {
    #[display(fmt = "{} to move", _0)]
    ToMove(Side),
    #[display(fmt = "game over")]
    Finished,
}

/// The complete state of an Othello game.
///
/// The side to move always has a legal move unless the game is finished:
/// passes are made automatically and recorded in [`Game::passed`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Game {
    board: Board,
    active: Side,
    passed: Option<Side>,
    score: Score,
    finished: bool,
}

impl Default for Game {
    /// Gets the starting position with black to move.
    fn default() -> Self {
        Self::new(Board::new(), Side::default())
    }
}

impl Game {
    /// Construct a game from a board and the side to move.
    /// If `active` cannot move, it passes immediately.
    pub fn new(board: Board, active: Side) -> Self {
        let mut game = Self {
            board,
            active,
            passed: None,
            score: board.score(),
            finished: false,
        };
        game.settle_turn();
        game
    }

    /// Make sure the side to move can move: pass if it cannot, or end the game
    /// if neither side can.
    fn settle_turn(&mut self) {
        if rules::has_moves(&self.board, self.active) {
            return;
        }

        if rules::has_moves(&self.board, !self.active) {
            debug!("{} has no legal moves and passes", self.active);
            self.passed = Some(self.active);
            self.active = !self.active;
        } else {
            debug!("no legal moves remain: {}", self.score);
            self.finished = true;
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side whose turn it is. Meaningless once the game is finished.
    #[inline]
    pub fn active_side(&self) -> Side {
        self.active
    }

    /// The side that passed to reach this position, if any.
    #[inline]
    pub fn passed(&self) -> Option<Side> {
        self.passed
    }

    /// Piece counts, recomputed after every move.
    #[inline]
    pub fn score(&self) -> Score {
        self.score
    }

    /// Get the legal moves for the side to move. Empty once the game is finished.
    pub fn legal_moves(&self) -> MoveList {
        if self.finished {
            return MoveList::default();
        }
        rules::legal_moves(&self.board, self.active)
    }

    pub fn status(&self) -> GameStatus {
        if self.finished {
            GameStatus::Finished
        } else {
            GameStatus::ToMove(self.active)
        }
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The side with more pieces at the end of the game.
    /// None while the game is in progress or on a tie.
    pub fn winner(&self) -> Option<Side> {
        if !self.finished {
            return None;
        }
        self.score.winner()
    }

    /// Play `position` for the side to move, then hand over the turn.
    pub fn play(&mut self, position: Position) -> Result<(), OthelloError> {
        if self.finished {
            return Err(OthelloError::IllegalMove {
                side: self.active,
                position,
            });
        }

        rules::apply_move(&mut self.board, self.active, position)?;
        self.score = self.board.score();
        self.passed = None;
        self.active = !self.active;
        self.settle_turn();
        Ok(())
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        if let Some(side) = self.passed {
            writeln!(f, "({} passed)", side)?;
        }
        write!(f, "{}; {}", self.status(), self.score)
    }
}
