//! First-class invariants for the sliding-window game.
//!
//! Invariants are logical properties that must hold after every accepted
//! placement. They are testable independently and serve as documentation
//! of the engine's guarantees.

use crate::engine::Game;
use tracing::warn;

pub mod disjoint_marks;
pub mod history_consistent;
pub mod window_bound;

pub use disjoint_marks::DisjointMarksInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use window_bound::WindowBoundInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns `Ok(())` if all invariants hold, or `Err` with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All sliding-window game invariants as a composable set.
pub type GameInvariants = (
    WindowBoundInvariant,
    HistoryConsistentInvariant,
    DisjointMarksInvariant,
);

/// Asserts that all game invariants hold (panics on violation in debug builds).
pub fn assert_invariants(game: &Game) {
    if let Err(violations) = GameInvariants::check_all(game) {
        for violation in &violations {
            warn!(description = %violation.description, "invariant violated");
        }
        debug_assert!(violations.is_empty(), "invariant violations: {violations:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    fn played(moves: &[Position]) -> Game {
        let mut game = Game::new();
        game.start();
        for &pos in moves {
            game.place(pos).unwrap();
        }
        game
    }

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = Game::new();
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let game = played(&[Position::TopLeft, Position::Center, Position::TopRight]);
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_through_eviction() {
        // Seven placements: ○ places a fourth mark, evicting their first.
        let game = played(&[
            Position::TopLeft,
            Position::TopCenter,
            Position::MiddleLeft,
            Position::Center,
            Position::BottomCenter,
            Position::BottomRight,
            Position::TopRight,
        ]);
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_corruption() {
        use crate::types::{Player, Square};

        let mut game = played(&[Position::Center]);
        // Occupy a square without a matching history entry.
        game.board
            .set(Position::TopLeft, Square::Occupied(Player::Cross));

        let violations = GameInvariants::check_all(&game).unwrap_err();
        assert!(!violations.is_empty());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let game = Game::new();
        type TwoInvariants = (WindowBoundInvariant, DisjointMarksInvariant);
        assert!(TwoInvariants::check_all(&game).is_ok());
    }
}
