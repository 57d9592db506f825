//! Core game model: wire types, input validation, round grouping, and
//! snapshot reconciliation.

mod reconcile;
mod rounds;
mod types;
mod validate;

pub use reconcile::{CompletionNotice, GameView, is_players_turn, is_terminal};
pub use rounds::{Round, group_into_rounds};
pub use types::{GameState, GameStatus, Guess, PlayerSlot};
pub use validate::{
    CODE_LEN, CodeInput, ValidationError, code_is_submittable, normalize_code, validate_code,
};
