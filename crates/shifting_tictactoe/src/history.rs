//! Per-player placement history with the sliding-window rule.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// Maximum marks a player may hold on the board at once.
pub const WINDOW: usize = 3;

/// The positions currently occupied by one player's marks, oldest first.
///
/// Holds at most [`WINDOW`] entries. Pushing a fourth position evicts the
/// oldest (FIFO), which is how the sliding-window placement rule works:
/// a player's marks fade in the order they were placed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlacementHistory {
    positions: Vec<Position>,
}

impl PlacementHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self {
            positions: Vec::with_capacity(WINDOW),
        }
    }

    /// Appends a position, evicting the oldest when the window is full.
    ///
    /// Returns the evicted position, if any. The caller is responsible for
    /// clearing the evicted square on the board.
    pub fn push(&mut self, pos: Position) -> Option<Position> {
        let evicted = if self.positions.len() == WINDOW {
            Some(self.positions.remove(0))
        } else {
            None
        };
        self.positions.push(pos);
        evicted
    }

    /// The position that the next push would evict.
    ///
    /// `None` while the player holds fewer than [`WINDOW`] marks. Always
    /// recomputed from the current entries; the target changes on every
    /// placement by this player.
    pub fn eviction_target(&self) -> Option<Position> {
        if self.positions.len() == WINDOW {
            self.positions.first().copied()
        } else {
            None
        }
    }

    /// Positions occupied by this player, oldest first.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Number of marks the player currently holds.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the player holds no marks.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Whether the given position is one of this player's marks.
    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }

    /// Drops all entries.
    pub fn clear(&mut self) {
        self.positions.clear();
    }
}
