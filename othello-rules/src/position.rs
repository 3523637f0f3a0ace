//! Code for working with [`Position`]s on the Othello board.

use crate::bitboard::Bitboard;
use crate::{OthelloError, EDGE_LENGTH};
use derive_more::{Display, Error, From, Into};
use std::fmt::{self, Formatter, Write};
use std::iter;

/// A single space on the Othello board, stored as a one-hot [`Bitboard`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd, Into)]
pub struct Position(Bitboard);

/// A set of positions on the Othello board.
/// Iterates in row-major order, upper-left first.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord, From, Into)]
pub struct PositionList(Bitboard);

/// One of the eight unit steps between neighboring spaces.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Direction {
    pub d_row: i8,
    pub d_col: i8,
}

impl Direction {
    pub const SOUTH: Self = Self::new(1, 0);
    pub const NORTH: Self = Self::new(-1, 0);
    pub const EAST: Self = Self::new(0, 1);
    pub const WEST: Self = Self::new(0, -1);
    pub const SOUTH_EAST: Self = Self::new(1, 1);
    pub const SOUTH_WEST: Self = Self::new(1, -1);
    pub const NORTH_EAST: Self = Self::new(-1, 1);
    pub const NORTH_WEST: Self = Self::new(-1, -1);

    /// Every direction a line of pieces can run in.
    pub const ALL: [Self; 8] = [
        Self::SOUTH,
        Self::NORTH,
        Self::EAST,
        Self::WEST,
        Self::SOUTH_EAST,
        Self::SOUTH_WEST,
        Self::NORTH_EAST,
        Self::NORTH_WEST,
    ];

    pub const fn new(d_row: i8, d_col: i8) -> Self {
        Self { d_row, d_col }
    }
}

impl Position {
    /// Convert from a square index: 63 for the upper-left, 0 for the lower-right.
    #[inline]
    pub fn from_index(index: u8) -> Self {
        assert!((index as usize) < crate::NUM_SPACES);
        Self(Bitboard::from(1u64 << index))
    }

    /// Convert into a square index: 63 for the upper-left, 0 for the lower-right.
    #[inline]
    pub fn to_index(self) -> u8 {
        let bitboard: u64 = self.0.into();
        bitboard.trailing_zeros() as u8
    }

    /// Convert from row and column coordinates.
    /// Panics if either coordinate is off the board.
    pub fn from_coords(row: usize, col: usize) -> Self {
        assert!(row < EDGE_LENGTH && col < EDGE_LENGTH);
        let index = (EDGE_LENGTH - 1 - col) + ((EDGE_LENGTH - 1 - row) * EDGE_LENGTH);
        Self::from_index(index as u8)
    }

    /// Convert from row and column coordinates, reporting coordinates off the board.
    pub fn try_from_coords(row: usize, col: usize) -> Result<Self, OthelloError> {
        if row >= EDGE_LENGTH || col >= EDGE_LENGTH {
            return Err(OthelloError::OutOfRange { row, col });
        }
        Ok(Self::from_coords(row, col))
    }

    /// Get the `(row, col)` coordinates.
    pub fn to_coords(self) -> (usize, usize) {
        let index = self.to_index() as usize;
        let row = EDGE_LENGTH - 1 - index / EDGE_LENGTH;
        let col = EDGE_LENGTH - 1 - index % EDGE_LENGTH;
        (row, col)
    }

    /// The neighboring position one step away in `direction`,
    /// or None if that step leaves the board.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (row, col) = self.to_coords();
        let row = row as isize + direction.d_row as isize;
        let col = col as isize + direction.d_col as isize;
        let on_board = 0..EDGE_LENGTH as isize;

        if on_board.contains(&row) && on_board.contains(&col) {
            Some(Self::from_coords(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Every position walking away from this one in `direction`, up to the edge.
    /// Does not include this position.
    pub fn ray(self, direction: Direction) -> impl Iterator<Item = Position> {
        iter::successors(self.step(direction), move |pos| pos.step(direction))
    }
}

/// Convert this [`Position`] into string notation ("A4").
impl fmt::Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (row, col) = self.to_coords();
        let row_str = "12345678".chars().nth(row).ok_or(fmt::Error)?;
        let col_str = "ABCDEFGH".chars().nth(col).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "invalid position string")]
pub struct ParsePositionError;

/// Build a [`Position`] from 1-indexed string notation ("A4").
impl std::str::FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let col_str = chars.next().ok_or(ParsePositionError)?.to_ascii_uppercase();
        let col = "ABCDEFGH".find(col_str).ok_or(ParsePositionError)?;
        let row = chars
            .next()
            .ok_or(ParsePositionError)?
            .to_digit(10)
            .ok_or(ParsePositionError)? as usize;

        if !(1..=EDGE_LENGTH).contains(&row) || chars.next().is_some() {
            return Err(ParsePositionError);
        }

        Ok(Self::from_coords(row - 1, col))
    }
}

impl PositionList {
    /// Returns whether `pos` is in this list.
    pub fn contains(self, pos: Position) -> bool {
        self.0.covers(pos.into())
    }

    /// Returns whether this list has no positions.
    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }

    /// Add `pos` to this list.
    pub fn insert(&mut self, pos: Position) {
        let mask: Bitboard = pos.into();
        self.0 |= mask;
    }
}

impl FromIterator<Position> for PositionList {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        let mut list = Self::default();
        for pos in iter {
            list.insert(pos);
        }
        list
    }
}

impl ExactSizeIterator for PositionList {
    fn len(&self) -> usize {
        self.0.count_occupied() as usize
    }
}

impl Iterator for PositionList {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.0.is_empty() {
            return None;
        }

        let bitboard: u64 = self.0.into();
        let next_pos: Bitboard = (1u64 << (63 - bitboard.leading_zeros())).into();
        self.0 ^= next_pos;

        Some(Position(next_pos))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl fmt::Display for PositionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = self
            .into_iter()
            .map(|pos| pos.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        f.write_fmt(format_args!("[{}]", string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn position_from_index() {
        assert_eq!(Position::from_index(0), Position(Bitboard::from(1)));
        assert_eq!(Position::from_index(63), Position(Bitboard::from(1 << 63)));
    }

    #[test]
    fn position_to_index() {
        assert_eq!(Position(Bitboard::from(1)).to_index(), 0);
        assert_eq!(Position(Bitboard::from(1 << 63)).to_index(), 63);
    }

    #[test]
    fn position_from_coords() {
        assert_eq!(
            Position::from_coords(0, 0),
            Position(Bitboard::from(1 << 63))
        );
        assert_eq!(Position::from_coords(0, 1), Position(Bitboard::from(1 << 62)));
        assert_eq!(Position::from_coords(7, 7), Position(Bitboard::from(1)));
    }

    #[test]
    #[should_panic]
    fn position_from_coords_fail() {
        Position::from_coords(0, 8);
    }

    #[test]
    fn position_try_from_coords() {
        assert_eq!(
            Position::try_from_coords(2, 3),
            Ok(Position::from_coords(2, 3))
        );
        assert_eq!(
            Position::try_from_coords(8, 3),
            Err(OthelloError::OutOfRange { row: 8, col: 3 })
        );
    }

    #[test]
    fn position_to_coords() {
        assert_eq!(Position(Bitboard::from(1 << 63)).to_coords(), (0, 0));
        assert_eq!(Position(Bitboard::from(1)).to_coords(), (7, 7));
        assert_eq!(Position::from_coords(2, 5).to_coords(), (2, 5));
        assert_eq!(Position::from_coords(6, 1).to_coords(), (6, 1));
    }

    #[test]
    fn step_stays_on_board() {
        let corner = Position::from_coords(0, 0);
        assert_eq!(corner.step(Direction::NORTH), None);
        assert_eq!(corner.step(Direction::WEST), None);
        assert_eq!(corner.step(Direction::NORTH_EAST), None);
        assert_eq!(
            corner.step(Direction::SOUTH_EAST),
            Some(Position::from_coords(1, 1))
        );
        assert_eq!(
            Position::from_coords(7, 0).step(Direction::NORTH_EAST),
            Some(Position::from_coords(6, 1))
        );
    }

    #[test]
    fn ray_runs_to_edge() {
        let ray: Vec<_> = Position::from_coords(5, 2)
            .ray(Direction::NORTH_EAST)
            .map(Position::to_coords)
            .collect();
        assert_eq!(ray, vec![(4, 3), (3, 4), (2, 5), (1, 6), (0, 7)]);

        assert_eq!(Position::from_coords(3, 7).ray(Direction::EAST).count(), 0);
    }

    #[test]
    fn position_from_str_success() {
        assert_eq!(
            Position::from_str("A1"),
            Ok(Position(Bitboard::from(1 << 63)))
        );
        assert_eq!(Position::from_str("h8"), Ok(Position(Bitboard::from(1))));
        assert_eq!(Position::from_str("D7"), Ok(Position::from_coords(6, 3)));
    }

    #[test]
    fn position_from_str_fail() {
        assert_eq!(Position::from_str(""), Err(ParsePositionError));
        assert_eq!(Position::from_str("A12"), Err(ParsePositionError));
        assert_eq!(Position::from_str("AA"), Err(ParsePositionError));
        assert_eq!(Position::from_str("A0"), Err(ParsePositionError));
        assert_eq!(Position::from_str("A9"), Err(ParsePositionError));
        assert_eq!(Position::from_str("I5"), Err(ParsePositionError));
    }

    #[test]
    fn position_to_str() {
        assert_eq!(Position(Bitboard::from(1)).to_string(), "H8");
        assert_eq!(Position(Bitboard::from(1 << 63)).to_string(), "A1");
        assert_eq!(Position::from_coords(2, 3).to_string(), "D3");
        assert_eq!(Position::from_str("F6").unwrap().to_string(), "F6");
    }

    #[test]
    fn list_iterates_row_major() {
        let list: PositionList = vec![
            Position::from_coords(7, 7),
            Position::from_coords(0, 5),
            Position::from_coords(3, 1),
            Position::from_coords(0, 2),
        ]
        .into_iter()
        .collect();

        assert_eq!(list.len(), 4);
        assert!(list.contains(Position::from_coords(3, 1)));
        assert!(!list.contains(Position::from_coords(1, 3)));
        assert_eq!(list.to_string(), "[C1, F1, B4, H8]");

        let coords: Vec<_> = list.map(Position::to_coords).collect();
        assert_eq!(coords, vec![(0, 2), (0, 5), (3, 1), (7, 7)]);
    }

    #[test]
    fn empty_list() {
        let list = PositionList::default();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.to_string(), "[]");
    }
}
