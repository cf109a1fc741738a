//! The game engine: owns all state, enforces all rules.

use crate::action::{PlaceError, Placement};
use crate::history::PlacementHistory;
use crate::invariants::assert_invariants;
use crate::position::Position;
use crate::rules;
use crate::snapshot::Snapshot;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Lifecycle phase of a game.
///
/// ```text
/// Unstarted --start()--> InProgress --winning place()--> Finished
///     ^                                                      |
///     +----------------------- reset() ---------------------+
/// ```
///
/// `reset()` returns to `Unstarted` from any phase; `Finished` has no
/// other outgoing transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Created but not yet started; no placements accepted.
    Unstarted,
    /// Accepting placements.
    InProgress,
    /// A winner has been declared; only reset leaves this phase.
    Finished,
}

/// Sliding-window tic-tac-toe engine.
///
/// Sole owner of the board, the turn, both placement histories, and the
/// winner. Mutation happens only through [`start`](Game::start),
/// [`place`](Game::place), and [`reset`](Game::reset); a frontend reads
/// the observable state through [`snapshot`](Game::snapshot) after each
/// command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) winner: Option<Player>,
    pub(crate) phase: Phase,
    pub(crate) nought_history: PlacementHistory,
    pub(crate) cross_history: PlacementHistory,
}

impl Game {
    /// Creates a new unstarted game. ○ moves first.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::Nought,
            winner: None,
            phase: Phase::Unstarted,
            nought_history: PlacementHistory::new(),
            cross_history: PlacementHistory::new(),
        }
    }

    /// Starts the game: `Unstarted` → `InProgress`.
    ///
    /// Calling this in any other phase is a no-op; repeated starts never
    /// corrupt state.
    #[instrument(skip(self))]
    pub fn start(&mut self) {
        match self.phase {
            Phase::Unstarted => self.phase = Phase::InProgress,
            Phase::InProgress | Phase::Finished => {
                debug!(phase = ?self.phase, "start ignored, game already started");
            }
        }
    }

    /// Places the current player's mark at the given position.
    ///
    /// On acceptance, the mover's oldest mark is evicted first when they
    /// already hold three, the mark is written, win detection runs against
    /// the new board, and the turn passes unless the move won. The returned
    /// [`Placement`] records all of that.
    ///
    /// # Errors
    ///
    /// - [`PlaceError::NotStarted`] before [`start`](Game::start)
    /// - [`PlaceError::GameOver`] once a winner is declared
    /// - [`PlaceError::Occupied`] when the target square is not empty
    ///
    /// Rejected calls leave the state unchanged.
    #[instrument(skip(self), fields(player = ?self.current_player))]
    pub fn place(&mut self, pos: Position) -> Result<Placement, PlaceError> {
        match self.phase {
            Phase::Unstarted => return Err(PlaceError::NotStarted),
            Phase::Finished => return Err(PlaceError::GameOver),
            Phase::InProgress => {}
        }

        if !self.board.is_empty(pos) {
            return Err(PlaceError::Occupied(pos));
        }

        let player = self.current_player;

        // Sliding-window rule: a fourth mark pushes out the oldest.
        let evicted = self.history_mut(player).push(pos);
        if let Some(old) = evicted {
            self.board.clear(old);
            debug!(?player, position = ?old, "evicted oldest mark");
        }

        self.board.set(pos, Square::Occupied(player));

        let winner = rules::check_winner(&self.board);
        if let Some(winning) = winner {
            self.winner = Some(winning);
            self.phase = Phase::Finished;
            debug!(?winning, "game won");
        } else {
            self.current_player = player.opponent();
        }

        assert_invariants(self);

        Ok(Placement {
            player,
            position: pos,
            evicted,
            winner,
        })
    }

    /// Places at a raw board index (0-8).
    ///
    /// Convenience boundary for callers holding untyped indices; indices
    /// outside the board reject with [`PlaceError::OutOfRange`].
    #[instrument(skip(self))]
    pub fn place_index(&mut self, index: usize) -> Result<Placement, PlaceError> {
        let pos = Position::from_index(index).ok_or(PlaceError::OutOfRange(index))?;
        self.place(pos)
    }

    /// Returns the engine to the initial unstarted state.
    ///
    /// Valid in every phase: empty board, empty histories, no winner,
    /// ○ to move, not started.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// The cell that the given player's next placement would evict.
    ///
    /// `None` while that player holds fewer than three marks. Recomputed
    /// from the live history on every call.
    pub fn eviction_target(&self, player: Player) -> Option<Position> {
        self.history(player).eviction_target()
    }

    /// Read-only view of the observable state, for the presentation layer.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(
            self.board.clone(),
            self.current_player,
            self.winner,
            self.phase != Phase::Unstarted,
            self.eviction_target(self.current_player),
        )
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    ///
    /// Frozen on the winning mover once the game finishes.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the winner, if the game has one.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Returns the lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the game has been started.
    pub fn started(&self) -> bool {
        self.phase != Phase::Unstarted
    }

    /// Returns the given player's placement history, oldest first.
    pub fn history(&self, player: Player) -> &PlacementHistory {
        match player {
            Player::Nought => &self.nought_history,
            Player::Cross => &self.cross_history,
        }
    }

    fn history_mut(&mut self, player: Player) -> &mut PlacementHistory {
        match player {
            Player::Nought => &mut self.nought_history,
            Player::Cross => &mut self.cross_history,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
