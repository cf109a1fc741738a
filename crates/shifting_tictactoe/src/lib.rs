//! Pure game logic for sliding-window tic-tac-toe.
//!
//! A tic-tac-toe variant where each player may hold at most three marks:
//! placing a fourth evicts that player's oldest mark (FIFO), so marks fade
//! as the game goes on. Victory is the standard three in a row.
//!
//! The [`Game`] engine is the sole owner of game state. A frontend issues
//! the commands `start`, `place`, and `reset`, and renders from the
//! read-only [`Snapshot`] taken after each command — including the
//! [`Snapshot::eviction_target`] cell, highlighted so the mover can see
//! which of their marks is about to fade.
//!
//! # Example
//!
//! ```
//! use shifting_tictactoe::{Game, Player, Position};
//!
//! let mut game = Game::new();
//! game.start();
//!
//! let placement = game.place(Position::Center)?;
//! assert_eq!(placement.player, Player::Nought);
//!
//! let snapshot = game.snapshot();
//! assert_eq!(snapshot.current_player(), Player::Cross);
//! # Ok::<(), shifting_tictactoe::PlaceError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod history;
mod invariants;
mod position;
mod rules;
mod snapshot;
mod types;

// Engine and lifecycle
pub use engine::{Game, Phase};

// Placement events and rejections
pub use action::{PlaceError, Placement};

// Domain types
pub use history::{PlacementHistory, WINDOW};
pub use position::Position;
pub use types::{Board, Player, Square};

// Read-only view for frontends
pub use snapshot::Snapshot;

// Rules and invariants, usable against any board/game value
pub use invariants::{
    DisjointMarksInvariant, GameInvariants, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, WindowBoundInvariant,
};
pub use rules::check_winner;
