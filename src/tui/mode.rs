//! Game mode - who occupies the player slots?

use crate::game::PlayerSlot;

/// Which kind of match the client is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum GameMode {
    /// Terminal user in the player-1 slot against the server AI.
    #[default]
    PlayerVsAi,
    /// Two server AIs; the client only observes.
    AiVsAi,
}

impl GameMode {
    /// Returns the display title.
    pub fn title(self) -> &'static str {
        match self {
            GameMode::PlayerVsAi => "Player vs AI",
            GameMode::AiVsAi => "AI vs AI",
        }
    }

    /// Display name for a player slot under this mode's wording.
    pub fn player_label(self, slot: PlayerSlot) -> &'static str {
        match (self, slot) {
            (GameMode::PlayerVsAi, PlayerSlot::Player1) => "You",
            (GameMode::PlayerVsAi, PlayerSlot::Player2) => "AI",
            (GameMode::AiVsAi, PlayerSlot::Player1) => "AI Player 1",
            (GameMode::AiVsAi, PlayerSlot::Player2) => "AI Player 2",
        }
    }

    /// The slot the terminal user plays, if any. Observer modes have no
    /// slot and never enable submission.
    pub fn viewer_slot(self) -> Option<PlayerSlot> {
        match self {
            GameMode::PlayerVsAi => Some(PlayerSlot::Player1),
            GameMode::AiVsAi => None,
        }
    }
}
