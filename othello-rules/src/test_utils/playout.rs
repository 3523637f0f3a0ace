//! Deterministic games driven by a list of choice indices, for property tests.

use crate::{Board, Color, Game, Position, TurnOutcome};

/// One accepted move and the boards around it.
#[derive(Clone, Copy, Debug)]
pub struct Ply {
    pub before: Board,
    pub color: Color,
    pub position: Position,
    pub outcome: TurnOutcome,
    pub after: Board,
}

/// Play from the opening, taking move `choice % moves.len()` at each turn.
/// A color with no legal move hands the turn to its opponent. Stops when the
/// choices run out or the game ends.
pub fn playout(choices: &[usize]) -> Vec<Ply> {
    let mut game = Game::new();
    let mut color = Color::default();
    let mut plies = Vec::with_capacity(choices.len());

    for &choice in choices {
        let mut moves = game.legal_moves(color);
        if moves.is_empty() {
            color = !color;
            moves = game.legal_moves(color);
        }
        let count = moves.len().max(1);
        let position = match moves.nth(choice % count) {
            Some(position) => position,
            None => break,
        };

        let before = *game.board();
        let outcome = game.resolve_turn(color, position);
        plies.push(Ply {
            before,
            color,
            position,
            outcome,
            after: *game.board(),
        });

        if let TurnOutcome::GameOver(_) = outcome {
            break;
        }
        color = !color;
    }

    plies
}

#[test]
fn playout_from_opening() {
    let plies = playout(&[0, 0]);
    assert_eq!(plies.len(), 2);
    assert_eq!(plies[0].color, Color::Dark);
    assert_eq!(plies[0].position, Position::from_coords(2, 3));
    assert_eq!(plies[1].color, Color::Light);
    assert_eq!(plies[1].before, plies[0].after);
}
