use derive_more::{Display, Error};
use sentinel_othello::{OthelloError, Side};
use std::io;

/// Everything that can stop a game session early.
#[derive(Debug, Display, Error)]
pub enum SessionError {
    #[display(fmt = "I/O error: {}", _0)]
    Io(io::Error),
    #[display(fmt = "{}", _0)]
    Rules(OthelloError),
    #[display(fmt = "input closed before a move was entered")]
    InputClosed,
    #[display(fmt = "no move available for {}", _0)]
    NoMove(#[error(not(source))] Side),
}

impl From<io::Error> for SessionError {
    fn from(err: io::Error) -> Self {
        SessionError::Io(err)
    }
}

impl From<OthelloError> for SessionError {
    fn from(err: OthelloError) -> Self {
        SessionError::Rules(err)
    }
}
