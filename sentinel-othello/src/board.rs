//! Grid bookkeeping for a bordered 10x10 mailbox board.
//!
//! The board knows nothing about the rules of Othello: it stores cells, reads
//! them back, and counts pieces. Legality and captures live in [`crate::rules`].
//! The outer ring of the grid holds [`Cell::Border`] markers, which stops every
//! ray walk without an explicit bounds check. Game logic never writes to it.

use crate::rules::MoveList;
use crate::{utils, OthelloError, Position, GRID_LENGTH, NUM_SPACES};
use derive_more::{Display, Error};
use std::fmt::{self, Formatter};

/// One of the two sides in a game.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Display)]
pub enum Side {
    #[display(fmt = "black")]
    Black,
    #[display(fmt = "white")]
    White,
}

/// The contents of one cell of the storage grid.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Cell {
    Border,
    Empty,
    Black,
    White,
}

/// A bordered Othello board. Copies are independent values.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Board {
    cells: [[Cell; GRID_LENGTH]; GRID_LENGTH],
}

/// The number of pieces each side has on a board.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Display)]
#[display(fmt = "Black {} - White {}", black, white)]
pub struct Score {
    pub black: u8,
    pub white: u8,
}

/// A board rendered with a set of positions marked as available.
/// The board itself is never written to.
pub struct Highlighted<'a> {
    board: &'a Board,
    moves: &'a MoveList,
}

impl Default for Side {
    /// Gets the starting side (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Side {
    type Output = Self;

    /// Gets the other side.
    fn not(self) -> Self {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }
}

impl Side {
    /// The character this side's pieces are drawn with.
    pub fn marker(self) -> char {
        match self {
            Side::Black => 'X',
            Side::White => 'O',
        }
    }
}

#[derive(Debug, Display, Error, PartialEq)]
#[display(fmt = "invalid side string")]
pub struct ParseSideError;

impl std::str::FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" | "b" | "x" => Ok(Side::Black),
            "white" | "w" | "o" => Ok(Side::White),
            _ => Err(ParseSideError),
        }
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        match side {
            Side::Black => Cell::Black,
            Side::White => Cell::White,
        }
    }
}

impl Cell {
    /// The side owning this cell, if it holds a piece.
    #[inline]
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Black => Some(Side::Black),
            Cell::White => Some(Side::White),
            Cell::Border | Cell::Empty => None,
        }
    }

    fn to_char(self) -> char {
        match self {
            Cell::Black => Side::Black.marker(),
            Cell::White => Side::White.marker(),
            Cell::Empty => '.',
            Cell::Border => '*',
        }
    }
}

impl Default for Board {
    /// Gets the standard starting board.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Construct the standard starting board: white on the main diagonal of the
    /// centre square, black on the anti-diagonal.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.put(Position::new(4, 4), Side::White);
        board.put(Position::new(5, 5), Side::White);
        board.put(Position::new(4, 5), Side::Black);
        board.put(Position::new(5, 4), Side::Black);
        board
    }

    /// Construct a board with no pieces on it.
    pub fn empty() -> Self {
        let mut cells = [[Cell::Border; GRID_LENGTH]; GRID_LENGTH];
        for pos in Position::playable() {
            cells[pos.row][pos.col] = Cell::Empty;
        }
        Self { cells }
    }

    /// Read a cell, including border cells.
    /// Positions outside the storage grid read as border.
    #[inline]
    pub(crate) fn cell(&self, pos: Position) -> Cell {
        if pos.in_grid() {
            self.cells[pos.row][pos.col]
        } else {
            Cell::Border
        }
    }

    /// Write a piece without checking that `pos` is playable.
    #[inline]
    pub(crate) fn put(&mut self, pos: Position, side: Side) {
        self.cells[pos.row][pos.col] = side.into();
    }

    /// Get the contents of a playable cell.
    pub fn piece_at(&self, pos: Position) -> Result<Cell, OthelloError> {
        if !pos.is_playable() {
            return Err(OthelloError::out_of_bounds(pos));
        }
        Ok(self.cells[pos.row][pos.col])
    }

    /// Overwrite a playable cell with `side`'s piece. Performs no rules check.
    pub fn set_piece(&mut self, pos: Position, side: Side) -> Result<(), OthelloError> {
        if !pos.is_playable() {
            return Err(OthelloError::out_of_bounds(pos));
        }
        self.put(pos, side);
        Ok(())
    }

    /// Count `side`'s pieces across the whole grid.
    pub fn count(&self, side: Side) -> u8 {
        let target = Cell::from(side);
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == target)
            .count() as u8
    }

    /// Count the empty playable spaces.
    pub fn count_empty(&self) -> u8 {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Empty)
            .count() as u8
    }

    /// Count both sides' pieces.
    pub fn score(&self) -> Score {
        Score {
            black: self.count(Side::Black),
            white: self.count(Side::White),
        }
    }

    /// Iterate over the playable cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        Position::playable().map(move |pos| (pos, self.cell(pos)))
    }

    /// Render this board with `moves` drawn as `A`.
    pub fn highlighted<'a>(&'a self, moves: &'a MoveList) -> Highlighted<'a> {
        Highlighted { board: self, moves }
    }
}

impl Score {
    /// Get the number of pieces `side` has.
    pub fn of(self, side: Side) -> u8 {
        match side {
            Side::Black => self.black,
            Side::White => self.white,
        }
    }

    /// Piece differential from `side`'s point of view.
    pub fn difference(self, side: Side) -> i8 {
        self.of(side) as i8 - self.of(!side) as i8
    }

    /// The side with more pieces, or None on a tie.
    pub fn winner(self) -> Option<Side> {
        use std::cmp::Ordering::*;
        match self.black.cmp(&self.white) {
            Greater => Some(Side::Black),
            Less => Some(Side::White),
            Equal => None,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        utils::format_grid(self.cells().map(|(_, cell)| cell.to_char()), f)
    }
}

impl fmt::Display for Highlighted<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        utils::format_grid(
            self.board.cells().map(|(pos, cell)| {
                if self.moves.contains(pos) {
                    'A'
                } else {
                    cell.to_char()
                }
            }),
            f,
        )
    }
}

#[derive(Debug, Display, Error, PartialEq)]
pub enum ParseBoardError {
    #[display(fmt = "unrecognized board character {:?}", _0)]
    BadCharacter(#[error(not(source))] char),
    #[display(fmt = "expected {} board cells, found {}", NUM_SPACES, _0)]
    WrongLength(#[error(not(source))] usize),
}

/// Build a [`Board`] from 64 cell characters in row-major order:
/// `X`/`#`/`b` for black, `O`/`w` for white, `.`/`-` for empty.
/// Whitespace is ignored.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(board_string: &str) -> Result<Self, Self::Err> {
        let cells = board_string
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                'X' | 'x' | '#' | 'b' | 'B' => Ok(Cell::Black),
                'O' | 'o' | 'w' | 'W' => Ok(Cell::White),
                '.' | '-' => Ok(Cell::Empty),
                other => Err(ParseBoardError::BadCharacter(other)),
            })
            .collect::<Result<Vec<Cell>, _>>()?;

        if cells.len() != NUM_SPACES {
            return Err(ParseBoardError::WrongLength(cells.len()));
        }

        let mut board = Board::empty();
        for (pos, cell) in Position::playable().zip(cells) {
            if let Some(side) = cell.side() {
                board.put(pos, side);
            }
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn side_opponent_is_symmetric() {
        assert_eq!(!Side::Black, Side::White);
        assert_eq!(!Side::White, Side::Black);
        assert_eq!(!!Side::Black, Side::Black);
    }

    #[test]
    fn side_from_str() {
        assert_eq!(Side::from_str("Black"), Ok(Side::Black));
        assert_eq!(Side::from_str("o"), Ok(Side::White));
        assert_eq!(Side::from_str("red"), Err(ParseSideError));
    }

    #[test]
    fn starting_board() {
        let board = Board::new();
        assert_eq!(board.piece_at(Position::new(4, 4)), Ok(Cell::White));
        assert_eq!(board.piece_at(Position::new(5, 5)), Ok(Cell::White));
        assert_eq!(board.piece_at(Position::new(4, 5)), Ok(Cell::Black));
        assert_eq!(board.piece_at(Position::new(5, 4)), Ok(Cell::Black));
        assert_eq!(board.score(), Score { black: 2, white: 2 });
        assert_eq!(board.count_empty(), 60);
    }

    #[test]
    fn border_ring_is_tagged() {
        let board = Board::new();
        for i in 0..GRID_LENGTH {
            assert_eq!(board.cell(Position::new(0, i)), Cell::Border);
            assert_eq!(board.cell(Position::new(9, i)), Cell::Border);
            assert_eq!(board.cell(Position::new(i, 0)), Cell::Border);
            assert_eq!(board.cell(Position::new(i, 9)), Cell::Border);
        }
        assert_eq!(board.cell(Position::new(11, 2)), Cell::Border);
    }

    #[test]
    fn piece_at_out_of_bounds() {
        let board = Board::new();
        assert_eq!(
            board.piece_at(Position::new(0, 3)),
            Err(OthelloError::OutOfBounds { row: 0, col: 3 })
        );
        assert_eq!(
            board.piece_at(Position::new(3, 9)),
            Err(OthelloError::OutOfBounds { row: 3, col: 9 })
        );
        assert_eq!(
            board.piece_at(Position::new(40, 40)),
            Err(OthelloError::OutOfBounds { row: 40, col: 40 })
        );
    }

    #[test]
    fn set_piece_overwrites_without_rules() {
        let mut board = Board::new();
        board.set_piece(Position::new(1, 1), Side::White).unwrap();
        board.set_piece(Position::new(4, 4), Side::Black).unwrap();
        assert_eq!(board.piece_at(Position::new(1, 1)), Ok(Cell::White));
        assert_eq!(board.score(), Score { black: 3, white: 2 });

        assert!(board.set_piece(Position::new(9, 1), Side::Black).is_err());
        assert_eq!(board.cell(Position::new(9, 1)), Cell::Border);
    }

    #[test]
    fn clone_is_independent() {
        let board = Board::new();
        let mut copy = board.clone();
        copy.set_piece(Position::new(1, 1), Side::Black).unwrap();
        assert_eq!(board.piece_at(Position::new(1, 1)), Ok(Cell::Empty));
        assert_ne!(board, copy);
    }

    #[test]
    fn score_winner_and_difference() {
        let score = Score { black: 10, white: 7 };
        assert_eq!(score.winner(), Some(Side::Black));
        assert_eq!(score.difference(Side::White), -3);
        assert_eq!(Score { black: 5, white: 5 }.winner(), None);
        assert_eq!(score.to_string(), "Black 10 - White 7");
    }

    #[test]
    fn board_from_str_roundtrips_start() {
        let board = Board::from_str(
            "........
             ........
             ........
             ...OX...
             ...XO...
             ........
             ........
             ........",
        )
        .unwrap();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn board_from_str_fail() {
        assert_eq!(
            Board::from_str("...."),
            Err(ParseBoardError::WrongLength(4))
        );
        assert_eq!(
            Board::from_str(&"?".repeat(64)),
            Err(ParseBoardError::BadCharacter('?'))
        );
    }

    #[test]
    fn board_display() {
        let expected = "   1 2 3 4 5 6 7 8\n \
                        1 . . . . . . . . \n \
                        2 . . . . . . . . \n \
                        3 . . . . . . . . \n \
                        4 . . . O X . . . \n \
                        5 . . . X O . . . \n \
                        6 . . . . . . . . \n \
                        7 . . . . . . . . \n \
                        8 . . . . . . . . ";
        assert_eq!(Board::new().to_string(), expected);
    }
}
