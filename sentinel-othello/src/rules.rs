//! The rules of Othello on top of a [`Board`]: legal moves and captures.
//!
//! Both operations use the same ray walk. From a starting cell, step in one
//! direction through a contiguous run of opponent pieces; the cell that ends
//! the run decides the outcome. Because the board has a border ring, every
//! walk stops on a [`Cell::Border`] before it can leave the grid.

use crate::{Board, Cell, Direction, OthelloError, Position, Side, EDGE_LENGTH, NUM_SPACES};
use arrayvec::ArrayVec;
use itertools::Itertools;
use log::debug;
use std::fmt;
use std::ops::Deref;

/// The legal moves for one side, sorted in row-major order without duplicates.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct MoveList(ArrayVec<Position, NUM_SPACES>);

/// Walk from `origin` (one of `side`'s pieces) looking for a move:
/// the empty cell just past a run of at least one opponent piece.
fn scan_for_move(board: &Board, origin: Position, direction: Direction, side: Side) -> Option<Position> {
    let opponent = Cell::from(!side);

    let mut pos = origin.step(direction)?;
    if board.cell(pos) != opponent {
        return None;
    }
    while board.cell(pos) == opponent {
        pos = pos.step(direction)?;
    }

    match board.cell(pos) {
        Cell::Empty => Some(pos),
        _ => None,
    }
}

/// Walk from `origin` collecting the opponent pieces `side` would capture in
/// one direction. Empty if the run is not closed by one of `side`'s pieces.
fn capture_line(
    board: &Board,
    origin: Position,
    direction: Direction,
    side: Side,
) -> ArrayVec<Position, EDGE_LENGTH> {
    let own = Cell::from(side);
    let opponent = Cell::from(!side);

    let mut line = ArrayVec::new();
    let mut pos = origin;
    loop {
        pos = match pos.step(direction) {
            Some(next) => next,
            None => return ArrayVec::new(),
        };

        let cell = board.cell(pos);
        if cell == opponent {
            line.push(pos);
        } else if cell == own {
            return line;
        } else {
            return ArrayVec::new();
        }
    }
}

/// Get the legal moves for `side`, sorted by (row, column).
pub fn legal_moves(board: &Board, side: Side) -> MoveList {
    let mut moves: ArrayVec<Position, NUM_SPACES> = ArrayVec::new();

    for (origin, cell) in board.cells() {
        if cell.side() != Some(side) {
            continue;
        }

        for &direction in Direction::ALL.iter() {
            if let Some(target) = scan_for_move(board, origin, direction, side) {
                if !moves.contains(&target) {
                    moves.push(target);
                }
            }
        }
    }

    moves.sort_unstable();
    MoveList(moves)
}

/// Returns whether `side` has at least one legal move.
/// Stops at the first move found.
pub fn has_moves(board: &Board, side: Side) -> bool {
    board
        .cells()
        .filter(|(_, cell)| cell.side() == Some(side))
        .any(|(origin, _)| {
            Direction::ALL
                .iter()
                .any(|&direction| scan_for_move(board, origin, direction, side).is_some())
        })
}

/// Returns whether neither side can move.
pub fn is_game_over(board: &Board) -> bool {
    !has_moves(board, Side::Black) && !has_moves(board, Side::White)
}

/// Get the opponent pieces a move by `side` at `position` would flip, in
/// direction order. Empty if the move captures nothing.
pub fn captures(board: &Board, side: Side, position: Position) -> Vec<Position> {
    Direction::ALL
        .iter()
        .flat_map(|&direction| capture_line(board, position, direction, side))
        .collect()
}

/// Make a move for `side` without checking that it is legal, returning the
/// number of pieces flipped.
/// Whatever is at a playable `position` is overwritten, and every run it
/// brackets is flipped. Positions off the playing area are ignored.
pub fn play_unchecked(board: &mut Board, side: Side, position: Position) -> u8 {
    if !position.is_playable() {
        return 0;
    }
    board.put(position, side);

    let mut flipped = 0;
    for &direction in Direction::ALL.iter() {
        for captured in capture_line(board, position, direction, side) {
            board.put(captured, side);
            flipped += 1;
        }
    }
    flipped
}

/// Make a move for `side`, flipping every bracketed opponent piece.
/// The board is left untouched if the move is not legal.
pub fn apply_move(board: &mut Board, side: Side, position: Position) -> Result<(), OthelloError> {
    board.piece_at(position)?;
    if !legal_moves(board, side).contains(position) {
        return Err(OthelloError::IllegalMove { side, position });
    }

    let flipped = play_unchecked(board, side, position);
    debug!("{} plays {}, flipping {}", side, position, flipped);
    Ok(())
}

impl MoveList {
    /// Returns whether `position` is in this list.
    pub fn contains(&self, position: Position) -> bool {
        self.0.binary_search(&position).is_ok()
    }

    /// Get the moves as a slice.
    pub fn as_slice(&self) -> &[Position] {
        self.0.as_slice()
    }
}

impl Deref for MoveList {
    type Target = [Position];

    fn deref(&self) -> &[Position] {
        self.0.as_slice()
    }
}

impl IntoIterator for MoveList {
    type Item = Position;
    type IntoIter = arrayvec::IntoIter<Position, NUM_SPACES>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.iter().join(", "))
    }
}
