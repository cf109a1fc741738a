//! First-class placement events and their rejection reasons.
//!
//! An accepted placement is a domain event, not a side effect: it records
//! the mover, the cell, the eviction it caused (if any), and whether it won
//! the game, so a frontend can log or replay it.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Record of one accepted placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// The player who placed the mark.
    pub player: Player,
    /// The cell the mark was placed on.
    pub position: Position,
    /// The mover's oldest mark, cleared to make room for this one.
    ///
    /// `None` unless the mover already held three marks.
    pub evicted: Option<Position>,
    /// Set when this placement completed a winning line.
    pub winner: Option<Player>,
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())?;
        if let Some(evicted) = self.evicted {
            write!(f, " (evicting {})", evicted.label())?;
        }
        if self.winner.is_some() {
            write!(f, " [wins]")?;
        }
        Ok(())
    }
}

/// Reason a placement was rejected.
///
/// Rejected commands leave the game state untouched; the variants exist so
/// callers and tests can tell outcomes apart instead of guessing from a
/// silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlaceError {
    /// The game has not been started yet.
    #[display("Game has not been started")]
    NotStarted,

    /// The index is outside the 0-8 board range.
    #[display("Index {_0} is outside the board (must be 0-8)")]
    OutOfRange(usize),

    /// The square at the position is already occupied.
    #[display("{} is already occupied", _0.label())]
    Occupied(Position),

    /// The game already has a winner.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for PlaceError {}
