use crate::{Color, Position, PositionList, MAX_PLAYERS};
use derive_more::{Display, Error};

/// Errors raised by the board and the rules engine.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum OthelloError {
    /// Coordinates outside the 8x8 board.
    #[display(fmt = "coordinates ({}, {}) are off the board", row, col)]
    OutOfRange { row: usize, col: usize },

    /// A placement that is not among the mover's legal moves.
    #[display(fmt = "{} cannot play {}, legal moves: {}", color, position, legal)]
    IllegalMove {
        position: Position,
        color: Color,
        legal: PositionList,
    },

    #[display(fmt = "a game holds at most {} players", MAX_PLAYERS)]
    TooManyPlayers,

    #[display(fmt = "{} is already playing {}", owner, color)]
    ColorTaken { color: Color, owner: String },

    /// The winning color has no registered player.
    #[display(fmt = "no player holds the winning color {}", color)]
    NoPlayerForColor { color: Color },
}
