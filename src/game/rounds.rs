//! Grouping the guess history into display rounds.

use super::types::{Guess, PlayerSlot};

/// A display pairing of at most one guess per player from one turn cycle.
///
/// Derived on demand from the history; never stored or sent anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Round {
    /// Player 1's guess this cycle, if made.
    pub player_1: Option<Guess>,
    /// Player 2's guess this cycle, if made.
    pub player_2: Option<Guess>,
}

/// Groups `history` into rounds with a single left-to-right scan.
///
/// A player-1 guess always opens a new round. A player-2 guess joins the
/// most recent round if its player-2 slot is still free, otherwise it opens
/// a round of its own. Player 1 leads each round by convention, so
/// consecutive player-2 guesses produce multiple player-2-only rounds.
/// The returned rounds are chronological; the caller reverses for
/// newest-first display. `history` itself is never reordered.
pub fn group_into_rounds(history: &[Guess]) -> Vec<Round> {
    let mut rounds: Vec<Round> = Vec::new();
    for guess in history {
        match guess.player {
            PlayerSlot::Player1 => rounds.push(Round {
                player_1: Some(guess.clone()),
                player_2: None,
            }),
            PlayerSlot::Player2 => match rounds.last_mut() {
                Some(last) if last.player_2.is_none() => {
                    last.player_2 = Some(guess.clone());
                }
                _ => rounds.push(Round {
                    player_1: None,
                    player_2: Some(guess.clone()),
                }),
            },
        }
    }
    rounds
}
