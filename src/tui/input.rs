//! Keyboard handling for the game view.

use super::app::App;
use crossterm::event::KeyCode;

/// What the main loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Nothing further; state may have changed.
    None,
    /// Submit the current guess.
    Submit,
    /// Leave the game view.
    Quit,
}

/// Applies one key press to the application state.
///
/// While the end-of-game popup is open, any key dismisses it ('q' still
/// quits). Guess editing accepts any character and lets the input buffer
/// drop non-digits and overflow, matching the normalize-on-edit rule.
pub fn handle_key(app: &mut App, key: KeyCode) -> Action {
    if app.end_popup_open() {
        return match key {
            KeyCode::Char('q') => Action::Quit,
            _ => {
                app.dismiss_popup();
                Action::None
            }
        };
    }

    match key {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('r') => {
            app.toggle_reasoning();
            Action::None
        }
        KeyCode::Char(c) => {
            if app.is_my_turn() {
                app.input_mut().push(c);
            }
            Action::None
        }
        KeyCode::Backspace => {
            app.input_mut().backspace();
            Action::None
        }
        KeyCode::Enter if app.can_submit() => Action::Submit,
        _ => Action::None,
    }
}
