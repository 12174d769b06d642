//! Code for working with [`Position`]s and [`Direction`]s on the storage grid.

use crate::{EDGE_LENGTH, GRID_LENGTH};
use derive_more::{Display, Error, From, Into};
use itertools::iproduct;
use std::fmt::{self, Formatter};

/// A (row, column) coordinate into the storage grid.
///
/// Any pair can be built; accesses through [`Board`](crate::Board) validate it.
/// Ordering is row-major, which is the order legal moves are reported in.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, From, Into)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// One of the eight unit steps on the grid.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Direction {
    pub d_row: isize,
    pub d_col: isize,
}

impl Position {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns whether this position is inside the 8x8 playing area.
    #[inline]
    pub fn is_playable(self) -> bool {
        (1..=EDGE_LENGTH).contains(&self.row) && (1..=EDGE_LENGTH).contains(&self.col)
    }

    /// Returns whether this position is inside the storage grid (border ring included).
    #[inline]
    pub fn in_grid(self) -> bool {
        self.row < GRID_LENGTH && self.col < GRID_LENGTH
    }

    /// Move one step in `direction`.
    /// Returns None if the step would leave the storage grid.
    #[inline]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let row = self.row.checked_add_signed(direction.d_row)?;
        let col = self.col.checked_add_signed(direction.d_col)?;
        let next = Self { row, col };
        next.in_grid().then_some(next)
    }

    /// Iterate over every playable position in row-major order.
    pub fn playable() -> impl Iterator<Item = Position> {
        iproduct!(1..=EDGE_LENGTH, 1..=EDGE_LENGTH).map(|(row, col)| Position { row, col })
    }
}

impl Direction {
    pub const UP: Self = Self::new(-1, 0);
    pub const DOWN: Self = Self::new(1, 0);
    pub const LEFT: Self = Self::new(0, -1);
    pub const RIGHT: Self = Self::new(0, 1);
    pub const UP_LEFT: Self = Self::new(-1, -1);
    pub const UP_RIGHT: Self = Self::new(-1, 1);
    pub const DOWN_LEFT: Self = Self::new(1, -1);
    pub const DOWN_RIGHT: Self = Self::new(1, 1);

    /// All eight directions, orthogonal first.
    pub const ALL: [Self; 8] = [
        Self::UP,
        Self::DOWN,
        Self::LEFT,
        Self::RIGHT,
        Self::UP_LEFT,
        Self::UP_RIGHT,
        Self::DOWN_LEFT,
        Self::DOWN_RIGHT,
    ];

    const fn new(d_row: isize, d_col: isize) -> Self {
        Self { d_row, d_col }
    }
}

/// Convert this [`Position`] into "(row, col)" notation.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Display, Error, PartialEq)]
#[display(fmt = "invalid position string")]
pub struct ParsePositionError;

/// Build a [`Position`] from two integers: "4 3", "4,3" or "(4, 3)".
/// The result is not checked against the board.
impl std::str::FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);

        let mut parts = inner
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty());

        let row = parts
            .next()
            .ok_or(ParsePositionError)?
            .parse()
            .or(Err(ParsePositionError))?;
        let col = parts
            .next()
            .ok_or(ParsePositionError)?
            .parse()
            .or(Err(ParsePositionError))?;

        if parts.next().is_some() {
            return Err(ParsePositionError);
        }

        Ok(Self { row, col })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn position_playable() {
        assert!(Position::new(1, 1).is_playable());
        assert!(Position::new(8, 8).is_playable());
        assert!(!Position::new(0, 4).is_playable());
        assert!(!Position::new(4, 9).is_playable());
        assert!(!Position::new(12, 3).is_playable());
    }

    #[test]
    fn position_step() {
        assert_eq!(
            Position::new(4, 4).step(Direction::UP_LEFT),
            Some(Position::new(3, 3))
        );
        assert_eq!(
            Position::new(1, 8).step(Direction::UP_RIGHT),
            Some(Position::new(0, 9))
        );
        assert_eq!(Position::new(0, 0).step(Direction::UP), None);
        assert_eq!(Position::new(9, 9).step(Direction::DOWN_RIGHT), None);
    }

    #[test]
    fn position_ordering_is_row_major() {
        assert!(Position::new(3, 8) < Position::new(4, 1));
        assert!(Position::new(4, 3) < Position::new(4, 6));
    }

    #[test]
    fn playable_positions() {
        let all: Vec<Position> = Position::playable().collect();
        assert_eq!(all.len(), 64);
        assert_eq!(all[0], Position::new(1, 1));
        assert_eq!(all[1], Position::new(1, 2));
        assert_eq!(all[63], Position::new(8, 8));
    }

    #[test]
    fn directions_are_distinct_unit_steps() {
        for (i, a) in Direction::ALL.iter().enumerate() {
            assert!(a.d_row.abs() <= 1 && a.d_col.abs() <= 1);
            assert!(a.d_row != 0 || a.d_col != 0);
            assert!(Direction::ALL[i + 1..].iter().all(|b| a != b));
        }
    }

    #[test]
    fn position_from_str_success() {
        assert_eq!(Position::from_str("4 3"), Ok(Position::new(4, 3)));
        assert_eq!(Position::from_str("4,3"), Ok(Position::new(4, 3)));
        assert_eq!(Position::from_str(" (5, 6) "), Ok(Position::new(5, 6)));
        assert_eq!(Position::from_str("0 9"), Ok(Position::new(0, 9)));
    }

    #[test]
    fn position_from_str_fail() {
        assert_eq!(Position::from_str(""), Err(ParsePositionError));
        assert_eq!(Position::from_str("4"), Err(ParsePositionError));
        assert_eq!(Position::from_str("a b"), Err(ParsePositionError));
        assert_eq!(Position::from_str("-1 3"), Err(ParsePositionError));
        assert_eq!(Position::from_str("1 2 3"), Err(ParsePositionError));
    }

    #[test]
    fn position_to_str() {
        assert_eq!(Position::new(3, 4).to_string(), "(3, 4)");
        assert_eq!(
            Position::from_str("6 5").unwrap().to_string(),
            "(6, 5)"
        );
    }
}
