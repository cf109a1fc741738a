//! Engine lifecycle tests: start/place/reset through the public API.

use shifting_tictactoe::{Game, Phase, PlaceError, Player, Position, Square};

fn started() -> Game {
    let mut game = Game::new();
    game.start();
    game
}

#[test]
fn test_new_game_is_unstarted() {
    let game = Game::new();
    assert_eq!(game.phase(), Phase::Unstarted);
    assert!(!game.started());
    assert_eq!(game.current_player(), Player::Nought);
    assert_eq!(game.winner(), None);
    assert!(Position::ALL.iter().all(|&pos| game.board().is_empty(pos)));
}

#[test]
fn test_place_requires_start() {
    let mut game = Game::new();
    assert_eq!(game.place(Position::Center), Err(PlaceError::NotStarted));
    assert_eq!(game.phase(), Phase::Unstarted);
}

#[test]
fn test_diagonal_win() {
    // ○ takes the 0-4-8 diagonal while × stays off it.
    let mut game = started();
    game.place(Position::TopLeft).unwrap();
    game.place(Position::TopCenter).unwrap();
    game.place(Position::Center).unwrap();
    game.place(Position::TopRight).unwrap();
    let placement = game.place(Position::BottomRight).unwrap();

    assert_eq!(placement.winner, Some(Player::Nought));
    assert_eq!(game.winner(), Some(Player::Nought));
    assert_eq!(game.phase(), Phase::Finished);
}

#[test]
fn test_fourth_mark_slides_window() {
    // ○ builds history [TopCenter, MiddleLeft, BottomCenter] then places a
    // fourth mark at MiddleRight: the oldest mark fades.
    let mut game = started();
    game.place(Position::TopCenter).unwrap(); // ○
    game.place(Position::TopLeft).unwrap(); // ×
    game.place(Position::MiddleLeft).unwrap(); // ○
    game.place(Position::TopRight).unwrap(); // ×
    game.place(Position::BottomCenter).unwrap(); // ○
    game.place(Position::BottomLeft).unwrap(); // ×

    assert_eq!(
        game.eviction_target(Player::Nought),
        Some(Position::TopCenter)
    );

    let placement = game.place(Position::MiddleRight).unwrap();
    assert_eq!(placement.evicted, Some(Position::TopCenter));
    assert!(game.board().is_empty(Position::TopCenter));
    assert_eq!(
        game.history(Player::Nought).positions(),
        &[
            Position::MiddleLeft,
            Position::BottomCenter,
            Position::MiddleRight
        ]
    );
    // ×'s marks are untouched by ○'s eviction.
    assert_eq!(
        game.history(Player::Cross).positions(),
        &[Position::TopLeft, Position::TopRight, Position::BottomLeft]
    );
}

#[test]
fn test_occupied_cell_rejected_without_state_change() {
    let mut game = started();
    game.place(Position::Center).unwrap();
    let before = game.clone();

    assert_eq!(
        game.place(Position::Center),
        Err(PlaceError::Occupied(Position::Center))
    );
    assert_eq!(game, before);
    // Still ×'s turn.
    assert_eq!(game.current_player(), Player::Cross);
}

#[test]
fn test_place_after_win_rejected_without_state_change() {
    let mut game = started();
    // ○ wins the top row.
    game.place(Position::TopLeft).unwrap();
    game.place(Position::BottomLeft).unwrap();
    game.place(Position::TopCenter).unwrap();
    game.place(Position::BottomCenter).unwrap();
    game.place(Position::TopRight).unwrap();
    assert_eq!(game.winner(), Some(Player::Nought));

    let before = game.clone();
    assert_eq!(game.place(Position::Center), Err(PlaceError::GameOver));
    assert_eq!(game, before);
}

#[test]
fn test_reset_mid_game_restores_initial_state() {
    let mut game = started();
    game.place(Position::Center).unwrap();
    game.place(Position::TopLeft).unwrap();
    game.place(Position::BottomRight).unwrap();

    game.reset();

    assert_eq!(game, Game::new());
    assert!(!game.started());
    assert!(Position::ALL.iter().all(|&pos| game.board().is_empty(pos)));
    assert!(game.history(Player::Nought).is_empty());
    assert!(game.history(Player::Cross).is_empty());
    assert_eq!(game.winner(), None);
}

#[test]
fn test_reset_after_win_allows_new_game() {
    let mut game = started();
    game.place(Position::TopLeft).unwrap();
    game.place(Position::BottomLeft).unwrap();
    game.place(Position::TopCenter).unwrap();
    game.place(Position::BottomCenter).unwrap();
    game.place(Position::TopRight).unwrap();
    assert_eq!(game.phase(), Phase::Finished);

    game.reset();
    game.start();
    let placement = game.place(Position::Center).unwrap();
    assert_eq!(placement.player, Player::Nought);
}

#[test]
fn test_winning_mark_written_before_detection() {
    // The winning line must be evaluated against the board that already
    // contains the new mark.
    let mut game = started();
    game.place(Position::TopLeft).unwrap();
    game.place(Position::Center).unwrap();
    game.place(Position::MiddleLeft).unwrap();
    game.place(Position::TopRight).unwrap();
    let placement = game.place(Position::BottomLeft).unwrap();

    assert_eq!(placement.winner, Some(Player::Nought));
    assert_eq!(
        game.board().get(Position::BottomLeft),
        Square::Occupied(Player::Nought)
    );
}

#[test]
fn test_snapshot_round_trips_through_json() {
    let mut game = started();
    game.place(Position::Center).unwrap();

    let snapshot = game.snapshot();
    let json = serde_json::to_string(&snapshot).unwrap();
    let restored: shifting_tictactoe::Snapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, snapshot);
}

#[test]
fn test_snapshot_reports_observable_state() {
    let mut game = started();
    game.place(Position::TopLeft).unwrap();

    let snapshot = game.snapshot();
    assert!(snapshot.started());
    assert_eq!(snapshot.current_player(), Player::Cross);
    assert_eq!(snapshot.winner(), None);
    assert_eq!(snapshot.eviction_target(), None);
    assert_eq!(
        snapshot.board().get(Position::TopLeft),
        Square::Occupied(Player::Nought)
    );
}
