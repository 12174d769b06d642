use crate::SessionError;
use sentinel_othello::{Game, Position};

/// A source of moves for one side: a person at a terminal, or an engine.
pub trait Controller {
    /// Choose a move for the side to move in `game`.
    ///
    /// Only called while the game is in progress, so the side to move always
    /// has at least one legal move. Returning an illegal move makes the
    /// session ask again.
    fn choose_move(&mut self, game: &Game) -> Result<Position, SessionError>;
}
