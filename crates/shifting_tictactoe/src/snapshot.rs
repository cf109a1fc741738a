//! Read-only view of the observable game state.

use crate::position::Position;
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};

/// Immutable snapshot of everything a frontend renders.
///
/// Taken with [`Game::snapshot`](crate::Game::snapshot) after each command.
/// The presentation layer never holds a mutable alias to engine state; it
/// renders from these values and issues commands to request mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
    current_player: Player,
    winner: Option<Player>,
    started: bool,
    eviction_target: Option<Position>,
}

impl Snapshot {
    pub(crate) fn new(
        board: Board,
        current_player: Player,
        winner: Option<Player>,
        started: bool,
        eviction_target: Option<Position>,
    ) -> Self {
        Self {
            board,
            current_player,
            winner,
            started,
            eviction_target,
        }
    }

    /// The board at snapshot time.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// The winner, if the game is over.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Whether the game has been started.
    pub fn started(&self) -> bool {
        self.started
    }

    /// The current player's mark that their next placement would evict.
    ///
    /// Frontends highlight this cell so the mover can see which mark is
    /// about to fade.
    pub fn eviction_target(&self) -> Option<Position> {
        self.eviction_target
    }

    /// Returns true if the game is over.
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Returns a status string for display.
    pub fn status_string(&self) -> String {
        if !self.started {
            "Ready to start".to_string()
        } else if let Some(winner) = self.winner {
            format!("Game over. Player {} wins!", winner)
        } else {
            format!("In progress. Player {} to move.", self.current_player)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Game;

    #[test]
    fn test_status_strings_across_lifecycle() {
        let mut game = Game::new();
        assert_eq!(game.snapshot().status_string(), "Ready to start");

        game.start();
        assert_eq!(
            game.snapshot().status_string(),
            "In progress. Player ○ to move."
        );

        // ○ wins the left column.
        for pos in [
            Position::TopLeft,
            Position::TopRight,
            Position::MiddleLeft,
            Position::MiddleRight,
            Position::BottomLeft,
        ] {
            game.place(pos).unwrap();
        }
        let snapshot = game.snapshot();
        assert!(snapshot.is_over());
        assert_eq!(snapshot.status_string(), "Game over. Player ○ wins!");
    }
}
