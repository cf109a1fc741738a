//! Disjoint marks invariant: the two players never share a cell.

use super::Invariant;
use crate::engine::Game;
use crate::types::Player;

/// Invariant: the two placement histories have no position in common.
///
/// A cell holds at most one mark, so a position claimed by both players
/// means a history was updated without the board, or vice versa.
pub struct DisjointMarksInvariant;

impl Invariant<Game> for DisjointMarksInvariant {
    fn holds(game: &Game) -> bool {
        game.history(Player::Nought)
            .positions()
            .iter()
            .all(|pos| !game.history(Player::Cross).contains(*pos))
    }

    fn description() -> &'static str {
        "Placement histories are disjoint"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn test_new_game_holds() {
        assert!(DisjointMarksInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_holds_after_reusing_evicted_cell() {
        let mut game = Game::new();
        game.start();
        for pos in [
            Position::TopLeft,
            Position::TopCenter,
            Position::MiddleLeft,
            Position::BottomLeft,
            Position::BottomCenter,
            Position::BottomRight,
            Position::TopRight, // ○ evicts TopLeft
            Position::TopLeft,  // × claims the freed cell, evicting TopCenter
        ] {
            game.place(pos).unwrap();
        }
        assert!(DisjointMarksInvariant::holds(&game));
    }

    #[test]
    fn test_shared_position_violates() {
        let mut game = Game::new();
        game.start();
        game.place(Position::Center).unwrap();
        // Claim ○'s cell for × behind the engine's back.
        game.cross_history.push(Position::Center);
        assert!(!DisjointMarksInvariant::holds(&game));
    }
}
