//! Codebreaker client library - state sync for a turn-based guessing game
//!
//! The backend runs a four-unique-digit code-breaking game between a human
//! and an AI (or two AIs) and pushes authoritative state over a
//! server-sent event stream. This crate is the client side of that
//! protocol:
//!
//! - **game**: wire data model, guess validation, round grouping, and
//!   snapshot reconciliation (turn derivation, completion edge, staleness
//!   guard)
//! - **api**: the mutating command client and the owned update-stream
//!   subscription handle
//! - **tui**: a terminal client that renders whatever the core exposes
//!
//! # Example
//!
//! ```no_run
//! use codebreaker::{ClientConfig, GameClient, StreamEvent, UpdateStream};
//!
//! # async fn example() -> Result<(), codebreaker::ApiError> {
//! let config = ClientConfig::new("http://localhost:8080".to_string());
//! let client = GameClient::new(&config);
//!
//! let state = client.start_player_vs_ai("1234").await?;
//! let mut updates = UpdateStream::subscribe(&client, &state.game_id);
//!
//! while let Some(event) = updates.next_event().await {
//!     if let StreamEvent::Snapshot(snapshot) = event {
//!         println!("{} guesses so far", snapshot.history.len());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod api;
mod config;
mod game;

/// Terminal client.
pub mod tui;

// Crate-level exports - API client and update stream
pub use api::{ApiError, GameClient, StreamEvent, UpdateStream};

// Crate-level exports - Configuration
pub use config::{ClientConfig, ConfigError};

// Crate-level exports - Game model
pub use game::{
    CODE_LEN, CodeInput, CompletionNotice, GameState, GameStatus, GameView, Guess, PlayerSlot,
    Round, ValidationError, code_is_submittable, group_into_rounds, is_players_turn, is_terminal,
    normalize_code, validate_code,
};
