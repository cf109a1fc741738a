//! History consistency invariant: board marks and histories agree.

use super::Invariant;
use crate::engine::Game;
use crate::position::Position;
use crate::types::{Player, Square};

/// Invariant: a square holds a player's mark iff its position appears in
/// that player's history.
///
/// This is bidirectional: no mark without a history entry, no history
/// entry without a mark. Eviction must clear both sides together.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        Position::ALL.iter().all(|&pos| {
            let expected = match game.board().get(pos) {
                Square::Empty => (false, false),
                Square::Occupied(Player::Nought) => (true, false),
                Square::Occupied(Player::Cross) => (false, true),
            };
            let actual = (
                game.history(Player::Nought).contains(pos),
                game.history(Player::Cross).contains(pos),
            );
            expected == actual
        })
    }

    fn description() -> &'static str {
        "Board marks agree with placement histories in both directions"
    }
}
