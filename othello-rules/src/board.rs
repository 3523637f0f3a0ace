//! The board model: grid state and cell access.
//!
//! A [`Board`] is two [`Bitboard`]s, one per color. The rules that act on it live in
//! `rules.rs`.

use crate::bitboard::{self, Bitboard};
use crate::{utils, OthelloError, Position, PositionList, NUM_SPACES};
use derive_more::{Display, Error};
use std::fmt;

/// One of the two piece colors.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum Color {
    #[display(fmt = "dark")]
    Dark,
    #[display(fmt = "light")]
    Light,
}

impl Default for Color {
    /// Gets the color that moves first (dark).
    fn default() -> Self {
        Self::Dark
    }
}

impl std::ops::Not for Color {
    type Output = Self;

    /// Gets the other color.
    fn not(self) -> Self {
        match self {
            Color::Dark => Color::Light,
            Color::Light => Color::Dark,
        }
    }
}

/// The contents of a single space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Dark,
    Light,
}

impl Cell {
    /// The color of the piece here, if any.
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Dark => Some(Color::Dark),
            Cell::Light => Some(Color::Light),
        }
    }

    /// The character used for this cell in rendered boards.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Dark => 'X',
            Cell::Light => 'O',
        }
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Dark => Cell::Dark,
            Color::Light => Cell::Light,
        }
    }
}

/// The 8x8 grid of pieces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    dark: Bitboard,
    light: Bitboard,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard opening: light on D4 and E5, dark on E4 and D5.
    pub const fn new() -> Self {
        Self {
            dark: bitboard::DARK_START,
            light: bitboard::LIGHT_START,
        }
    }

    /// A board with no pieces on it.
    pub fn empty() -> Self {
        Self {
            dark: Bitboard::default(),
            light: Bitboard::default(),
        }
    }

    /// The pieces of one color.
    #[inline]
    pub fn bitboard(&self, color: Color) -> Bitboard {
        match color {
            Color::Dark => self.dark,
            Color::Light => self.light,
        }
    }

    /// A mask of the spaces with no piece.
    #[inline]
    pub fn empty_mask(&self) -> Bitboard {
        !(self.dark | self.light)
    }

    /// Read the space at `pos`.
    #[inline]
    pub fn cell(&self, pos: Position) -> Cell {
        let mask: Bitboard = pos.into();
        if self.dark.covers(mask) {
            Cell::Dark
        } else if self.light.covers(mask) {
            Cell::Light
        } else {
            Cell::Empty
        }
    }

    /// Read the space at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, OthelloError> {
        Ok(self.cell(Position::try_from_coords(row, col)?))
    }

    /// Overwrite the space at `pos`, for setting up positions. Flipping rules are
    /// not applied, and an occupied space may be cleared, which no legal move ever
    /// does. Play moves through `apply_move` instead.
    pub fn place(&mut self, pos: Position, cell: Cell) {
        let mask: Bitboard = pos.into();
        self.dark &= !mask;
        self.light &= !mask;

        match cell {
            Cell::Empty => {}
            Cell::Dark => self.dark |= mask,
            Cell::Light => self.light |= mask,
        }
    }

    /// Overwrite the space at `(row, col)`, for setting up positions.
    /// Same caveats as [`Board::place`].
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), OthelloError> {
        self.place(Position::try_from_coords(row, col)?, cell);
        Ok(())
    }

    /// Every position holding a piece of `color`, in row-major order.
    pub fn positions_of(&self, color: Color) -> PositionList {
        self.bitboard(color).into()
    }

    /// Every position with no piece, in row-major order.
    pub fn empty_positions(&self) -> PositionList {
        self.empty_mask().into()
    }

    /// Count the pieces of one color.
    #[inline]
    pub fn count(&self, color: Color) -> u8 {
        self.bitboard(color).count_occupied()
    }

    /// Count the spaces with no piece.
    #[inline]
    pub fn count_empty(&self) -> u8 {
        self.empty_mask().count_occupied()
    }

    /// Iterate over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        self.dark
            .into_iter()
            .zip(self.light)
            .map(|(dark, light)| match (dark, light) {
                (true, _) => Cell::Dark,
                (false, true) => Cell::Light,
                (false, false) => Cell::Empty,
            })
    }

    /// Dump the grid as plain text: one line per row, cells separated by a space.
    pub fn render(&self) -> String {
        utils::join_grid(self.cells().map(Cell::symbol), " ")
    }

    /// Give `pos` and every space in `flips` to `color`.
    pub(crate) fn commit(&mut self, pos: Position, color: Color, flips: Bitboard) {
        let mask: Bitboard = pos.into();
        let placed = flips | mask;
        match color {
            Color::Dark => {
                self.dark |= placed;
                self.light &= !placed;
            }
            Color::Light => {
                self.light |= placed;
                self.dark &= !placed;
            }
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(self.cells().map(Cell::symbol), f)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    #[display(fmt = "a board needs exactly {} cells", NUM_SPACES)]
    WrongLength,
    #[display(fmt = "unexpected board symbol")]
    UnknownSymbol,
}

/// Parse a board from 64 symbols in row-major order: `.` or `-` for empty,
/// `X` or `#` for dark, and `O` for light. Whitespace is ignored.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if symbols.len() != NUM_SPACES {
            return Err(ParseBoardError::WrongLength);
        }

        let mut board = Board::empty();
        for (pos, symbol) in PositionList::from(!Bitboard::default()).zip(symbols) {
            let cell = match symbol {
                '.' | '-' => Cell::Empty,
                'X' | 'x' | '#' => Cell::Dark,
                'O' | 'o' => Cell::Light,
                _ => return Err(ParseBoardError::UnknownSymbol),
            };
            board.place(pos, cell);
        }

        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn opening_position() {
        let board = Board::new();
        assert_eq!(board.get(3, 3), Ok(Cell::Light));
        assert_eq!(board.get(3, 4), Ok(Cell::Dark));
        assert_eq!(board.get(4, 3), Ok(Cell::Dark));
        assert_eq!(board.get(4, 4), Ok(Cell::Light));
        assert_eq!(board.count(Color::Dark), 2);
        assert_eq!(board.count(Color::Light), 2);
        assert_eq!(board.count_empty(), 60);
    }

    #[test]
    fn get_out_of_range() {
        let board = Board::new();
        assert_eq!(
            board.get(8, 0),
            Err(OthelloError::OutOfRange { row: 8, col: 0 })
        );
        assert_eq!(
            board.get(0, 10),
            Err(OthelloError::OutOfRange { row: 0, col: 10 })
        );
    }

    #[test]
    fn set_and_clear() {
        let mut board = Board::new();
        board.set(0, 7, Cell::Dark).unwrap();
        assert_eq!(board.get(0, 7), Ok(Cell::Dark));

        board.set(0, 7, Cell::Light).unwrap();
        assert_eq!(board.get(0, 7), Ok(Cell::Light));
        assert_eq!(board.count(Color::Dark), 2);

        board.set(0, 7, Cell::Empty).unwrap();
        assert_eq!(board, Board::new());

        assert_eq!(
            board.set(7, 8, Cell::Dark),
            Err(OthelloError::OutOfRange { row: 7, col: 8 })
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn positions_of_is_row_major() {
        let board = Board::new();
        let dark: Vec<_> = board.positions_of(Color::Dark).map(Position::to_coords).collect();
        let light: Vec<_> = board.positions_of(Color::Light).map(Position::to_coords).collect();
        assert_eq!(dark, vec![(3, 4), (4, 3)]);
        assert_eq!(light, vec![(3, 3), (4, 4)]);
        assert_eq!(board.empty_positions().len(), 60);
    }

    #[test]
    fn render_opening() {
        let expected = "\
. . . . . . . .
. . . . . . . .
. . . . . . . .
. . . O X . . .
. . . X O . . .
. . . . . . . .
. . . . . . . .
. . . . . . . .";
        assert_eq!(Board::new().render(), expected);
    }

    #[test]
    fn display_has_headers() {
        let shown = Board::new().to_string();
        assert!(shown.starts_with("   A B C D E F G H\n 1 "));
        assert!(shown.contains(" 4 . . . O X . . . "));
    }

    #[test]
    fn parse_round_trips_render() {
        let board = Board::new();
        assert_eq!(Board::from_str(&board.render()), Ok(board));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(Board::from_str("X O"), Err(ParseBoardError::WrongLength));
        let bad = format!("{}?", ".".repeat(63));
        assert_eq!(Board::from_str(&bad), Err(ParseBoardError::UnknownSymbol));
    }

    #[test]
    fn colors_and_cells() {
        assert_eq!(!Color::Dark, Color::Light);
        assert_eq!(!Color::Light, Color::Dark);
        assert_eq!(Color::default(), Color::Dark);
        assert_eq!(Cell::from(Color::Light).color(), Some(Color::Light));
        assert_eq!(Cell::Empty.color(), None);
        assert_eq!(Color::Dark.to_string(), "dark");
    }
}
