//! `sentinel-othello` is an Othello library for engines and UIs built on a bordered mailbox board.
//!
//! This package implements three levels of abstraction:
//!
//!  - [`Board`] is plain grid bookkeeping: a 10x10 array whose outer ring is a
//!    sentinel border, so ray walks stop on a cell instead of an index check.
//!  - [`rules`] holds the Othello rules on top of the board: legal-move
//!    enumeration and the capture logic. [`rules::play_unchecked`] skips the
//!    legality check and is intended for engines that already hold a legal move.
//!  - [`Game`] is a high-level, safe interface that also tracks the side to move,
//!    passes and the end of the game.
//!
//! Coordinates are storage coordinates: rows and columns `1..=8` are playable,
//! `0` and `9` are the border.

pub mod rules;
pub mod test_utils;

mod board;
mod error;
mod game;
mod location;
mod utils;

pub use board::*;
pub use error::*;
pub use game::*;
pub use location::*;
pub use rules::{apply_move, legal_moves, MoveList};

/// The number of playable spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of cells on one edge of the storage grid, including the border ring.
pub const GRID_LENGTH: usize = EDGE_LENGTH + 2;

/// The number of playable spaces on an Othello board.
pub const NUM_SPACES: usize = EDGE_LENGTH * EDGE_LENGTH;
