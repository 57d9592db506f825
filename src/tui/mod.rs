//! Terminal client for playing and observing games.

mod app;
mod input;
mod mode;
mod ui;

pub use mode::GameMode;

use crate::api::{GameClient, UpdateStream};
use crate::config::ClientConfig;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tokio::time::Duration;
use tracing::{debug, error, info, instrument, warn};

use app::App;
use input::Action;

/// Runs the terminal client against an already-created game.
///
/// Subscribes to the game's update stream, then enters the render loop.
/// The terminal is restored and the subscription released on every exit
/// path.
pub async fn run(config: &ClientConfig, mode: GameMode, game_id: String) -> Result<()> {
    // Log to a file so raw-mode output stays clean.
    let log_file = std::fs::File::create("codebreaker_tui.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(game_id = %game_id, ?mode, "Starting codebreaker TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let client = GameClient::new(config);
    let updates = UpdateStream::subscribe(&client, &game_id);

    let res = run_game(&mut terminal, &client, updates, mode, game_id).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
        eprintln!("Error: {:?}", err);
    }

    res
}

/// Render loop: drain stream events, draw, handle one key.
///
/// Guess submission is awaited inline, so a second submit cannot start
/// while one is outstanding; its response goes through the same absorb
/// path as stream snapshots and loses to anything fresher.
#[instrument(skip_all, fields(game_id = %game_id))]
async fn run_game<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    client: &GameClient,
    mut updates: UpdateStream,
    mode: GameMode,
    game_id: String,
) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: std::error::Error + Send + Sync + 'static,
{
    let mut app = App::new(mode, game_id);

    loop {
        while let Some(event) = updates.try_next_event() {
            app.handle_stream_event(event);
        }

        terminal.draw(|frame| ui::draw(frame, &app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match input::handle_key(&mut app, key.code) {
                    Action::Quit => {
                        info!("User left the game view");
                        updates.close();
                        return Ok(());
                    }
                    Action::Submit => {
                        let guess = app.take_input();
                        debug!(guess = %guess, "Submitting guess");
                        match client.make_guess(app.game_id(), &guess).await {
                            Ok(state) => app.apply_snapshot(state),
                            Err(err) => {
                                warn!(error = %err, "Guess rejected");
                                app.set_command_error(err.message);
                            }
                        }
                    }
                    Action::None => {}
                }
            }
        }
    }
}
