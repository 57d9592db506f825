//! Wire-level game types shared with the backend.

use serde::{Deserialize, Serialize};

/// One of the two player slots in a game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum PlayerSlot {
    /// The slot that conventionally leads each round. Held by the human in
    /// Player-vs-AI games.
    #[serde(rename = "player_1")]
    #[strum(serialize = "player_1")]
    Player1,
    /// The responding slot, always held by a server-side AI.
    #[serde(rename = "player_2")]
    #[strum(serialize = "player_2")]
    Player2,
}

impl PlayerSlot {
    /// Returns the other slot.
    pub fn opponent(self) -> Self {
        match self {
            PlayerSlot::Player1 => PlayerSlot::Player2,
            PlayerSlot::Player2 => PlayerSlot::Player1,
        }
    }
}

/// Lifecycle status of a game.
///
/// Progression is monotonic on the server: once `Completed` or `Cancelled`
/// is reached no further play occurs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// A player found the opposing secret code.
    Completed,
    /// Game was abandoned before completion.
    Cancelled,
}

impl GameStatus {
    /// True for the absorbing statuses after which no further play occurs.
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Completed | GameStatus::Cancelled)
    }
}

/// A single guess with its server-computed feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guess {
    /// Four pairwise-distinct ASCII digits. Enforced at submission, not
    /// re-validated on receipt.
    pub code: String,
    /// Opaque match-quality text computed by the server; rendered verbatim.
    pub feedback: String,
    /// Free-text rationale, present for AI guesses in AI-vs-AI games.
    pub comments: Option<String>,
    /// Which slot made the guess.
    pub player: PlayerSlot,
}

/// Authoritative game snapshot.
///
/// Immutable once received; the client only ever replaces its copy
/// wholesale with a newer snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Opaque identifier, stable for the game's lifetime.
    pub game_id: String,
    /// Player 1's secret code. The server currently sends both codes
    /// unconditionally; what the viewer gets to see is a rendering concern.
    pub player_1_secret_code: String,
    /// Player 2's secret code.
    pub player_2_secret_code: String,
    /// Guess history, append-only, insertion order = chronological order.
    pub history: Vec<Guess>,
    /// Lifecycle status.
    pub status: GameStatus,
    /// Which slot must move next; meaningful only while in progress.
    pub waiting_for_player: PlayerSlot,
    /// Winning slot, set once at the transition into `Completed`.
    pub winner: Option<PlayerSlot>,
}
