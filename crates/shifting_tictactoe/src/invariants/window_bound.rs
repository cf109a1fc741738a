//! Window bound invariant: no player ever holds more than three marks.

use super::Invariant;
use crate::engine::Game;
use crate::history::WINDOW;
use crate::types::Player;

/// Invariant: each placement history holds at most [`WINDOW`] entries.
///
/// The sliding-window rule evicts before it appends, so the bound can
/// never be exceeded, only met.
pub struct WindowBoundInvariant;

impl Invariant<Game> for WindowBoundInvariant {
    fn holds(game: &Game) -> bool {
        game.history(Player::Nought).len() <= WINDOW
            && game.history(Player::Cross).len() <= WINDOW
    }

    fn description() -> &'static str {
        "Each player holds at most three marks"
    }
}
