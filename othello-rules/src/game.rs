//! Implements game-level Othello logic.
//!
//! A [`Game`] owns a [`Board`] and its players and resolves whole turns. The game
//! ends only when neither color has a legal move; there is no separate pass action,
//! so when one color is stuck the caller simply lets the other color keep playing.

use crate::{Board, Color, OthelloError, Position, PositionList, Tally, MAX_PLAYERS};
use std::fmt;

/// A registered player: a display name paired with a piece color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub color: Color,
}

impl Player {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

/// Where a game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No move has been played yet.
    Setup,
    InProgress,
    /// Neither color can move.
    Terminal,
}

/// The result of submitting a move with [`Game::resolve_turn`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The move was not legal; carries the moves that are. Nothing changed.
    Rejected(PositionList),
    /// The move was played and at least one color can still move.
    Continue(Board),
    /// The move was played and neither color can move.
    GameOver(Tally),
}

impl fmt::Display for TurnOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnOutcome::Rejected(legal) => write!(f, "Invalid move, legal moves: {}", legal),
            TurnOutcome::Continue(board) => write!(f, "{}", board),
            TurnOutcome::GameOver(tally) => write!(
                f,
                "Game is ended dark pieces: {} light pieces: {}",
                tally.dark, tally.light
            ),
        }
    }
}

/// Who won a finished game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Winner { name: String, color: Color },
    Tie,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner { name, color } => {
                write!(f, "The winner is {} player: {}", color, name)
            }
            Outcome::Tie => f.write_str("It's a tie"),
        }
    }
}

/// Decide the winner from a piece tally: the player holding the color with more
/// pieces, or a tie on equal counts.
pub fn winner(players: &[Player], tally: Tally) -> Result<Outcome, OthelloError> {
    let color = match tally.leader() {
        Some(color) => color,
        None => return Ok(Outcome::Tie),
    };

    players
        .iter()
        .find(|player| player.color == color)
        .map(|player| Outcome::Winner {
            name: player.name.clone(),
            color,
        })
        .ok_or(OthelloError::NoPlayerForColor { color })
}

/// One game of Othello: a board, up to two players, and a move counter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Game {
    board: Board,
    players: Vec<Player>,
    moves_played: usize,
}

impl Game {
    /// A game at the standard opening with no players.
    pub fn new() -> Self {
        Self::default()
    }

    /// A game starting from an arbitrary position. A position where neither color
    /// can move is [`Phase::Terminal`] from the start.
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            ..Self::default()
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The number of moves accepted so far.
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Register a player. A game takes at most [`MAX_PLAYERS`] players, each with
    /// a color of their own.
    pub fn add_player(
        &mut self,
        name: impl Into<String>,
        color: Color,
    ) -> Result<(), OthelloError> {
        if self.players.len() >= MAX_PLAYERS {
            return Err(OthelloError::TooManyPlayers);
        }
        if let Some(owner) = self.players.iter().find(|player| player.color == color) {
            return Err(OthelloError::ColorTaken {
                color,
                owner: owner.name.clone(),
            });
        }

        let player = Player::new(name, color);
        log::debug!("{} joins as {}", player.name, player.color);
        self.players.push(player);
        Ok(())
    }

    /// Every position where `color` may play.
    pub fn legal_moves(&self, color: Color) -> PositionList {
        self.board.legal_moves(color)
    }

    /// Play `color` at `pos` if it is legal, then report whether the game goes on.
    pub fn resolve_turn(&mut self, color: Color, pos: Position) -> TurnOutcome {
        let legal = self.board.legal_moves(color);
        if !legal.contains(pos) {
            log::debug!("rejected {} at {}; legal: {}", color, pos, legal);
            return TurnOutcome::Rejected(legal);
        }

        let board = self.board.apply_move_unchecked(pos, color);
        self.moves_played += 1;

        if board.is_finished() {
            let tally = board.tally();
            log::debug!("{} played {}; game over, {}", color, pos, tally);
            TurnOutcome::GameOver(tally)
        } else {
            log::debug!("{} played {}", color, pos);
            TurnOutcome::Continue(board)
        }
    }

    /// Where the game is in its lifecycle. Terminal follows the board, not the
    /// move history: a game built on a dead position is terminal before any turn.
    pub fn phase(&self) -> Phase {
        if self.board.is_finished() {
            Phase::Terminal
        } else if self.moves_played == 0 {
            Phase::Setup
        } else {
            Phase::InProgress
        }
    }

    pub fn tally(&self) -> Tally {
        self.board.tally()
    }

    /// The winner by current piece counts. Meaningful once the game is terminal.
    pub fn winner(&self) -> Result<Outcome, OthelloError> {
        winner(&self.players, self.tally())
    }

    pub fn render(&self) -> String {
        self.board.render()
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.board.to_string())?;
        if self.phase() == Phase::Terminal {
            f.write_str("\n(Game over)")?;
        }
        Ok(())
    }
}
