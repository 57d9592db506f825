//! Turn derivation and snapshot reconciliation.
//!
//! Two sources write game state on the client: the update stream and the
//! responses of mutating commands. [`GameView`] is the single landing slot
//! for both, and discards whichever of the two turns out to be stale
//! instead of letting the last writer win.

use super::types::{GameState, GameStatus, PlayerSlot};
use tracing::debug;

/// True when the game is running and it is `slot`'s move.
pub fn is_players_turn(state: &GameState, slot: PlayerSlot) -> bool {
    state.status == GameStatus::InProgress && state.waiting_for_player == slot
}

/// True once the game has reached an absorbing status.
pub fn is_terminal(state: &GameState) -> bool {
    state.status.is_terminal()
}

/// Edge-triggered completion latch.
///
/// Fires exactly once, on the transition from a known non-completed status
/// to `Completed`. The first observed status never fires, even when the
/// game is already over by the time the first snapshot arrives. Observing a
/// non-completed status re-arms the latch, so a server that illegally
/// reopens a finished game will trigger a second notice.
#[derive(Debug, Clone, Default)]
pub struct CompletionNotice {
    prev: Option<GameStatus>,
}

impl CompletionNotice {
    /// Creates a latch that has not yet observed a status.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `status` and reports whether the completion edge fired.
    pub fn observe(&mut self, status: GameStatus) -> bool {
        let fired = matches!(self.prev, Some(prev) if prev != GameStatus::Completed)
            && status == GameStatus::Completed;
        self.prev = Some(status);
        fired
    }
}

/// Snapshot freshness: history length first, then terminal rank, so a
/// terminal snapshot outranks an in-progress one of equal length.
fn freshness(state: &GameState) -> (usize, u8) {
    (state.history.len(), u8::from(state.status.is_terminal()))
}

/// The client's reconciled view of one game.
#[derive(Debug, Clone, Default)]
pub struct GameView {
    state: Option<GameState>,
}

impl GameView {
    /// Creates a view with no snapshot yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest accepted snapshot, if any.
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    /// Absorbs a snapshot from either write source.
    ///
    /// Returns `false` when the snapshot describes a state older than the
    /// one already displayed and was discarded. Equal freshness replaces:
    /// snapshots are authoritative wholesale.
    pub fn absorb(&mut self, incoming: GameState) -> bool {
        if let Some(current) = &self.state {
            if freshness(&incoming) < freshness(current) {
                debug!(
                    game_id = %incoming.game_id,
                    incoming_len = incoming.history.len(),
                    current_len = current.history.len(),
                    "Discarding stale snapshot"
                );
                return false;
            }
        }
        self.state = Some(incoming);
        true
    }
}
