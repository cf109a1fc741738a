//! Game rules.
//!
//! Pure functions for evaluating board state. Rules are separated from
//! board storage so they can be checked against any board value, not just
//! the one the engine owns.

pub mod win;

pub use win::check_winner;
