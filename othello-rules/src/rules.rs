//! The rules engine: legality, captures, move application and scoring.
//!
//! Every rule is a directional scan. From a candidate space, walk each of the eight
//! [`Direction`]s: the direction captures when it crosses one or more opposing pieces
//! and then lands on a piece of the mover's color. An empty space or the board edge
//! ends the scan without a capture.

use crate::bitboard::Bitboard;
use crate::{Board, Cell, Color, Direction, OthelloError, Position, PositionList};
use std::fmt;

/// Piece counts for both colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Tally {
    pub dark: u8,
    pub light: u8,
}

impl Tally {
    /// The color with more pieces, or None on a tie.
    pub fn leader(self) -> Option<Color> {
        use std::cmp::Ordering;

        match self.dark.cmp(&self.light) {
            Ordering::Greater => Some(Color::Dark),
            Ordering::Less => Some(Color::Light),
            Ordering::Equal => None,
        }
    }

    /// The number of pieces of one color.
    pub fn of(self, color: Color) -> u8 {
        match color {
            Color::Dark => self.dark,
            Color::Light => self.light,
        }
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dark: {} light: {}", self.dark, self.light)
    }
}

impl Board {
    /// Whether walking from `pos` in `direction` crosses a run of opposing pieces
    /// closed off by a piece of `color`.
    fn captures_along(&self, pos: Position, color: Color, direction: Direction) -> bool {
        let mut crossed_opponent = false;

        for next in pos.ray(direction) {
            match self.cell(next).color() {
                Some(found) if found == color => return crossed_opponent,
                Some(_) => crossed_opponent = true,
                None => return false,
            }
        }

        // Ran off the edge.
        false
    }

    /// Whether `color` may place a piece at `pos`: the space is empty and at least
    /// one direction captures.
    pub fn is_valid_move(&self, pos: Position, color: Color) -> bool {
        self.cell(pos) == Cell::Empty
            && Direction::ALL
                .iter()
                .any(|&direction| self.captures_along(pos, color, direction))
    }

    /// Every position where `color` may play. All entries are equally available.
    pub fn legal_moves(&self, color: Color) -> PositionList {
        self.empty_positions()
            .filter(|&pos| self.is_valid_move(pos, color))
            .collect()
    }

    /// The directions in which a piece of `color` placed at `pos` captures.
    /// An occupied `pos` captures nothing.
    pub fn captured_lines(&self, pos: Position, color: Color) -> Vec<Direction> {
        if self.cell(pos) != Cell::Empty {
            return Vec::new();
        }

        Direction::ALL
            .iter()
            .copied()
            .filter(|&direction| self.captures_along(pos, color, direction))
            .collect()
    }

    /// The mask of opposing pieces a placement at `pos` would flip.
    pub fn flips(&self, pos: Position, color: Color) -> Bitboard {
        let opponent = self.bitboard(!color);
        let mut flips = Bitboard::default();

        for direction in self.captured_lines(pos, color) {
            for captured in pos.ray(direction) {
                let mask: Bitboard = captured.into();
                if !opponent.covers(mask) {
                    break;
                }
                flips |= mask;
            }
        }

        flips
    }

    /// Place a piece of `color` at `pos` and flip every captured line, returning the
    /// updated board. An illegal placement leaves the board untouched.
    pub fn apply_move(&mut self, pos: Position, color: Color) -> Result<Board, OthelloError> {
        if !self.is_valid_move(pos, color) {
            return Err(OthelloError::IllegalMove {
                position: pos,
                color,
                legal: self.legal_moves(color),
            });
        }

        Ok(self.apply_move_unchecked(pos, color))
    }

    /// Place a piece of `color` at `pos` and flip every captured line without
    /// checking legality. A placement that captures nothing is simply a lone piece.
    /// Panics if `pos` is occupied.
    pub fn apply_move_unchecked(&mut self, pos: Position, color: Color) -> Board {
        assert_eq!(self.cell(pos), Cell::Empty, "{} is occupied", pos);

        let flips = self.flips(pos, color);
        log::trace!(
            "{} plays {}, flipping {} pieces",
            color,
            pos,
            flips.count_occupied()
        );

        self.commit(pos, color, flips);
        *self
    }

    /// Count the pieces of each color.
    pub fn tally(&self) -> Tally {
        Tally {
            dark: self.count(Color::Dark),
            light: self.count(Color::Light),
        }
    }

    /// True when neither color has a legal move.
    pub fn is_finished(&self) -> bool {
        self.legal_moves(Color::Dark).is_empty() && self.legal_moves(Color::Light).is_empty()
    }
}
