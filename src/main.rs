//! Codebreaker - terminal client for a turn-based code-breaking game.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use codebreaker::tui::{self, GameMode};
use codebreaker::{ClientConfig, GameClient, code_is_submittable, normalize_code};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { secret, server_url } => run_play(secret, server_url).await,
        Command::Observe { secret, server_url } => run_observe(secret, server_url).await,
        Command::Watch {
            game_id,
            mode,
            server_url,
        } => run_watch(game_id, mode, server_url).await,
    }
}

/// Starts a Player-vs-AI game with the given secret and enters the game view.
async fn run_play(secret: String, server_url: Option<String>) -> Result<()> {
    let config = ClientConfig::resolve(server_url)?;
    let secret = checked_secret(&secret)?;

    let client = GameClient::new(&config);
    let state = client.start_player_vs_ai(&secret).await?;

    tui::run(&config, GameMode::PlayerVsAi, state.game_id).await
}

/// Starts an AI-vs-AI game and enters the observer view.
async fn run_observe(secret: String, server_url: Option<String>) -> Result<()> {
    let config = ClientConfig::resolve(server_url)?;
    let secret = checked_secret(&secret)?;

    let client = GameClient::new(&config);
    let state = client.start_ai_vs_ai(&secret).await?;

    tui::run(&config, GameMode::AiVsAi, state.game_id).await
}

/// Attaches to an existing game without issuing a start command.
async fn run_watch(game_id: String, mode: GameMode, server_url: Option<String>) -> Result<()> {
    let config = ClientConfig::resolve(server_url)?;
    tui::run(&config, mode, game_id).await
}

/// Normalizes a secret code argument and rejects incomplete or invalid ones.
fn checked_secret(raw: &str) -> Result<String> {
    let secret = normalize_code(raw);
    if !code_is_submittable(&secret) {
        anyhow::bail!("Secret code must be 4 unique digits (0-9), got {:?}", raw);
    }
    Ok(secret)
}
