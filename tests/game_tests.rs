//! Game state validation test
//!
//! This test validates that scoring and phase transitions work correctly

use parking_sim::simulation::{GamePhase, GameState};

#[test]
fn test_game_state_initialization() {
    let game_state = GameState::new();
    assert_eq!(game_state.score, 0);
    assert_eq!(game_state.phase, GamePhase::Playing);
    assert_eq!(game_state.round, 0);
    assert_eq!(game_state.frames, 0);
}

#[test]
fn test_score_accumulates_across_parks() {
    let mut game_state = GameState::new();

    game_state.record_park();
    game_state.begin_round();
    game_state.record_park();
    game_state.begin_round();

    assert_eq!(game_state.score, 2);
    assert!(game_state.is_playing());
}

#[test]
fn test_crash_enters_game_over() {
    let mut game_state = GameState::new();
    game_state.record_park();

    game_state.record_crash();

    assert!(game_state.is_game_over());
    // The crash itself does not touch the score; only a restart does
    assert_eq!(game_state.score, 1);
}

#[test]
fn test_restart_wipes_score() {
    let mut game_state = GameState::new();
    game_state.record_park();
    game_state.record_park();
    game_state.record_crash();

    game_state.restart();
    game_state.begin_round();

    assert_eq!(game_state.score, 0);
    assert!(game_state.is_playing());
}

#[test]
fn test_begin_round_advances_round_counter() {
    let mut game_state = GameState::new();
    let initial_round = game_state.round;

    game_state.begin_round();
    game_state.begin_round();

    assert_eq!(game_state.round, initial_round + 2);
}

#[test]
fn test_summary_reports_score() {
    let mut game_state = GameState::new();
    game_state.record_park();

    let summary = game_state.summary();
    assert!(summary.contains("Score: 1"), "unexpected summary: {summary}");
}
