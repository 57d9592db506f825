//! Application state for the terminal client.

use super::mode::GameMode;
use crate::api::StreamEvent;
use crate::game::{
    CodeInput, CompletionNotice, GameState, GameView, is_players_turn, is_terminal,
};
use tracing::debug;

/// Main application state for one game view.
///
/// All snapshots land here through [`App::apply_snapshot`] regardless of
/// whether they arrived over the update stream or as a command response,
/// so the staleness guard and the completion latch see every write.
pub struct App {
    mode: GameMode,
    game_id: String,
    view: GameView,
    notice: CompletionNotice,
    input: CodeInput,
    /// Non-fatal transport/stream problem, shown as a banner.
    stream_error: Option<String>,
    /// Failure of the viewer's own last command, shown under the input.
    command_error: Option<String>,
    end_popup_open: bool,
    show_reasoning: bool,
}

impl App {
    /// Creates the view state for one game.
    pub fn new(mode: GameMode, game_id: String) -> Self {
        Self {
            mode,
            game_id,
            view: GameView::new(),
            notice: CompletionNotice::new(),
            input: CodeInput::new(),
            stream_error: None,
            command_error: None,
            end_popup_open: false,
            show_reasoning: false,
        }
    }

    /// The game this view is attached to.
    pub fn game_id(&self) -> &str {
        &self.game_id
    }

    /// The mode this view renders under.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Latest accepted snapshot, if any has arrived yet.
    pub fn state(&self) -> Option<&GameState> {
        self.view.state()
    }

    /// The guess input buffer.
    pub fn input(&self) -> &CodeInput {
        &self.input
    }

    /// Mutable access for keyboard edits.
    pub fn input_mut(&mut self) -> &mut CodeInput {
        &mut self.input
    }

    /// Current non-fatal stream problem, if any.
    pub fn stream_error(&self) -> Option<&str> {
        self.stream_error.as_deref()
    }

    /// Failure of the viewer's last command, if any.
    pub fn command_error(&self) -> Option<&str> {
        self.command_error.as_deref()
    }

    /// True while the end-of-game popup is showing.
    pub fn end_popup_open(&self) -> bool {
        self.end_popup_open
    }

    /// True when AI reasoning comments are rendered in the history.
    pub fn show_reasoning(&self) -> bool {
        self.show_reasoning
    }

    /// Toggles rendering of AI reasoning comments.
    pub fn toggle_reasoning(&mut self) {
        self.show_reasoning = !self.show_reasoning;
    }

    /// Dismisses the end-of-game popup.
    pub fn dismiss_popup(&mut self) {
        self.end_popup_open = false;
    }

    /// Handles one event from the update stream.
    pub fn handle_stream_event(&mut self, event: StreamEvent) {
        match event {
            StreamEvent::Snapshot(snapshot) => self.apply_snapshot(snapshot),
            StreamEvent::Error(message) => {
                debug!(error = %message, "Stream reported a problem");
                self.stream_error = Some(message);
            }
        }
    }

    /// Absorbs a snapshot from either write source.
    ///
    /// Stale snapshots are discarded; accepted ones clear the stream
    /// banner and drive the completion latch, opening the end-of-game
    /// popup exactly once per completion edge.
    pub fn apply_snapshot(&mut self, snapshot: GameState) {
        if !self.view.absorb(snapshot) {
            return;
        }
        self.stream_error = None;
        if let Some(state) = self.view.state() {
            if self.notice.observe(state.status) {
                self.end_popup_open = true;
            }
        }
    }

    /// Records the failure of the viewer's own command. Shared state is
    /// untouched; the message hangs off the input box that triggered it.
    pub fn set_command_error(&mut self, message: String) {
        self.command_error = Some(message);
    }

    /// True when the terminal user holds a slot and it is their move.
    pub fn is_my_turn(&self) -> bool {
        match (self.mode.viewer_slot(), self.view.state()) {
            (Some(slot), Some(state)) => is_players_turn(state, slot),
            _ => false,
        }
    }

    /// True once the game has reached an absorbing status.
    pub fn is_over(&self) -> bool {
        self.view.state().is_some_and(is_terminal)
    }

    /// Sole gate on submission: the viewer's turn, a complete valid code,
    /// and a game that is still running.
    pub fn can_submit(&self) -> bool {
        self.is_my_turn() && self.input.is_submittable() && !self.is_over()
    }

    /// Takes the current input for submission, clearing the buffer and any
    /// stale command error.
    pub fn take_input(&mut self) -> String {
        self.command_error = None;
        let code = self.input.value().to_string();
        self.input.clear();
        code
    }
}
