//! `othello-rules` is a small, complete rules engine for Othello (Reversi).
//!
//! This package is split into two layers:
//!
//!  - [`Board`] owns the grid state as a pair of [`bitboard::Bitboard`]s and implements
//!    the rules: legal-move search, capture lines, move application and tallying.
//!    It knows nothing about who is playing.
//!  - [`Game`] wraps a board with a player list and resolves whole turns, reporting
//!    rejections, continuation, or the end of the game.
//!
//! Coordinates are zero-indexed `(row, col)` pairs, rows top to bottom, columns left
//! to right. In algebraic notation `"D3"` is row 2, column 3.

pub mod bitboard;
pub mod test_utils;

mod board;
mod error;
mod game;
mod position;
mod rules;
mod utils;

pub use board::*;
pub use error::*;
pub use game::*;
pub use position::*;
pub use rules::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;

/// The most players a [`Game`] accepts.
pub const MAX_PLAYERS: usize = 2;
