//! Command-line interface for the codebreaker client.

use clap::{Parser, Subcommand};
use codebreaker::tui::GameMode;

/// Codebreaker - terminal client for a code-breaking game
///
/// Find all digits of the opposing four-digit secret code before the AI
/// finds yours. Every code has four unique digits (0-9); the feedback on
/// each guess tells you how many of its digits are in the secret code.
#[derive(Parser, Debug)]
#[command(name = "codebreaker")]
#[command(about = "Play or observe a four-digit code-breaking game")]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start a Player-vs-AI game and play it
    Play {
        /// Your four-digit secret code (unique digits 0-9)
        #[arg(short, long)]
        secret: String,

        /// Game server URL (falls back to CODEBREAKER_SERVER_URL, then
        /// codebreaker.toml, then localhost)
        #[arg(long)]
        server_url: Option<String>,
    },

    /// Start an AI-vs-AI game and observe it
    Observe {
        /// Secret code handed to AI player 1 (unique digits 0-9)
        #[arg(short, long)]
        secret: String,

        /// Game server URL
        #[arg(long)]
        server_url: Option<String>,
    },

    /// Attach to an existing game by ID
    Watch {
        /// Game ID to attach to
        #[arg(short, long)]
        game_id: String,

        /// How to label the players
        #[arg(long, value_enum, default_value = "player-vs-ai")]
        mode: GameMode,

        /// Game server URL
        #[arg(long)]
        server_url: Option<String>,
    },
}
