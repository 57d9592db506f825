//! Tests for turn derivation, the completion notice, and snapshot
//! reconciliation.

use codebreaker::{
    CompletionNotice, GameState, GameStatus, GameView, Guess, PlayerSlot, is_players_turn,
    is_terminal,
};

fn snapshot(status: GameStatus, waiting: PlayerSlot, history_len: usize) -> GameState {
    let history = (0..history_len)
        .map(|i| Guess {
            code: format!("{:04}", 1234 + i),
            feedback: "1".to_string(),
            comments: None,
            player: if i % 2 == 0 {
                PlayerSlot::Player1
            } else {
                PlayerSlot::Player2
            },
        })
        .collect();

    GameState {
        game_id: "game-1".to_string(),
        player_1_secret_code: "1234".to_string(),
        player_2_secret_code: "5678".to_string(),
        history,
        status,
        waiting_for_player: waiting,
        winner: None,
    }
}

#[test]
fn my_turn_requires_in_progress_and_matching_slot() {
    let state = snapshot(GameStatus::InProgress, PlayerSlot::Player1, 0);
    assert!(is_players_turn(&state, PlayerSlot::Player1));
    assert!(!is_players_turn(&state, PlayerSlot::Player2));

    let done = snapshot(GameStatus::Completed, PlayerSlot::Player1, 0);
    assert!(!is_players_turn(&done, PlayerSlot::Player1));
}

#[test]
fn completed_and_cancelled_are_terminal() {
    assert!(!is_terminal(&snapshot(
        GameStatus::InProgress,
        PlayerSlot::Player1,
        0
    )));
    assert!(is_terminal(&snapshot(
        GameStatus::Completed,
        PlayerSlot::Player1,
        0
    )));
    assert!(is_terminal(&snapshot(
        GameStatus::Cancelled,
        PlayerSlot::Player1,
        0
    )));
}

#[test]
fn notice_fires_exactly_once_on_the_completion_edge() {
    let mut notice = CompletionNotice::new();
    let observed: Vec<bool> = [
        GameStatus::InProgress,
        GameStatus::InProgress,
        GameStatus::Completed,
        GameStatus::Completed,
    ]
    .into_iter()
    .map(|status| notice.observe(status))
    .collect();

    assert_eq!(observed, vec![false, false, true, false]);
}

#[test]
fn notice_stays_silent_when_the_first_snapshot_is_already_completed() {
    let mut notice = CompletionNotice::new();
    assert!(!notice.observe(GameStatus::Completed));
    assert!(!notice.observe(GameStatus::Completed));
}

#[test]
fn notice_does_not_fire_on_cancellation() {
    let mut notice = CompletionNotice::new();
    assert!(!notice.observe(GameStatus::InProgress));
    assert!(!notice.observe(GameStatus::Cancelled));
}

#[test]
fn notice_refires_if_the_server_reopens_a_finished_game() {
    // Illegal server behavior, tolerated by design: the latch re-arms.
    let mut notice = CompletionNotice::new();
    assert!(!notice.observe(GameStatus::InProgress));
    assert!(notice.observe(GameStatus::Completed));
    assert!(!notice.observe(GameStatus::InProgress));
    assert!(notice.observe(GameStatus::Completed));
}

#[test]
fn view_accepts_progressively_newer_snapshots() {
    let mut view = GameView::new();
    assert!(view.absorb(snapshot(GameStatus::InProgress, PlayerSlot::Player1, 0)));
    assert!(view.absorb(snapshot(GameStatus::InProgress, PlayerSlot::Player2, 1)));
    assert_eq!(view.state().map(|s| s.history.len()), Some(1));
}

#[test]
fn view_discards_a_stale_command_response() {
    let mut view = GameView::new();
    // Stream push with two guesses arrives first.
    assert!(view.absorb(snapshot(GameStatus::InProgress, PlayerSlot::Player1, 2)));
    // The older command response resolves late and must lose.
    assert!(!view.absorb(snapshot(GameStatus::InProgress, PlayerSlot::Player2, 1)));
    assert_eq!(view.state().map(|s| s.history.len()), Some(2));
    assert_eq!(
        view.state().map(|s| s.waiting_for_player),
        Some(PlayerSlot::Player1)
    );
}

#[test]
fn view_replaces_on_equal_freshness() {
    // Snapshots are authoritative wholesale; same-length replacements win.
    let mut view = GameView::new();
    assert!(view.absorb(snapshot(GameStatus::InProgress, PlayerSlot::Player1, 1)));
    assert!(view.absorb(snapshot(GameStatus::InProgress, PlayerSlot::Player2, 1)));
    assert_eq!(
        view.state().map(|s| s.waiting_for_player),
        Some(PlayerSlot::Player2)
    );
}

#[test]
fn terminal_snapshot_outranks_in_progress_at_equal_length() {
    let mut view = GameView::new();
    assert!(view.absorb(snapshot(GameStatus::Completed, PlayerSlot::Player1, 2)));
    assert!(!view.absorb(snapshot(GameStatus::InProgress, PlayerSlot::Player1, 2)));
    assert_eq!(view.state().map(|s| s.status), Some(GameStatus::Completed));
}

#[test]
fn longer_history_wins_even_against_a_terminal_snapshot() {
    // A reopened game with more history is adopted as the new truth.
    let mut view = GameView::new();
    assert!(view.absorb(snapshot(GameStatus::Completed, PlayerSlot::Player1, 2)));
    assert!(view.absorb(snapshot(GameStatus::InProgress, PlayerSlot::Player1, 3)));
    assert_eq!(view.state().map(|s| s.status), Some(GameStatus::InProgress));
}
