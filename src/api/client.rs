//! HTTP command client for the game backend.

use crate::api::error::ApiError;
use crate::config::ClientConfig;
use crate::game::GameState;
use tracing::{debug, info, instrument, warn};

/// Issues mutating commands against the game backend.
///
/// Each command is a single request/response exchange: no retry, no
/// client-side dedup. Callers must disable the triggering control while a
/// request is outstanding; the server's response is the full resulting
/// [`GameState`], and no partial state is ever applied on failure.
#[derive(Debug, Clone)]
pub struct GameClient {
    /// Base URL of the game backend.
    base_url: String,
    /// HTTP client, reused across requests.
    client: reqwest::Client,
}

impl GameClient {
    /// Creates a client for the backend named by `config`.
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            base_url: config.server_url().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Backend base URL without a trailing slash.
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The underlying HTTP client, shared with the update stream.
    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.client
    }

    /// Starts a Player-vs-AI game with the viewer's secret code.
    #[instrument(skip_all)]
    pub async fn start_player_vs_ai(&self, secret: &str) -> Result<GameState, ApiError> {
        info!("Starting player-vs-ai game");
        self.post_for_state("start-new-game-player-vs-ai", &[("secret_1", secret)])
            .await
    }

    /// Starts an AI-vs-AI game seeded with player 1's secret code.
    #[instrument(skip_all)]
    pub async fn start_ai_vs_ai(&self, secret: &str) -> Result<GameState, ApiError> {
        info!("Starting ai-vs-ai game");
        self.post_for_state("start-new-game-ai-vs-ai", &[("secret", secret)])
            .await
    }

    /// Submits a guess for the viewer's slot in an existing game.
    #[instrument(skip_all, fields(game_id = %game_id))]
    pub async fn make_guess(&self, game_id: &str, guess: &str) -> Result<GameState, ApiError> {
        info!("Submitting guess");
        self.post_for_state("make-guess", &[("game_id", game_id), ("guess", guess)])
            .await
    }

    /// One POST with query parameters, decoding the body as a [`GameState`].
    async fn post_for_state(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<GameState, ApiError> {
        let url = format!("{}/{}", self.base_url, path);
        let response = self.client.post(&url).query(params).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Command rejected by server");
            return Err(ApiError::new(format!(
                "Server returned {}: {}",
                status, body
            )));
        }

        let state: GameState = response.json().await?;
        debug!(
            game_id = %state.game_id,
            status = %state.status,
            history_len = state.history.len(),
            "Command accepted"
        );
        Ok(state)
    }
}
