//! Transition events emitted by the game for observers.

use crate::models::{Difficulty, GameColor};

/// Something observable happened in the game.
///
/// Events are informational only: observers (sound, speech, the board's
/// confetti) react to them but can never feed anything back into the state
/// machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A fresh deck was dealt
    Dealt {
        /// Level of the new deck
        difficulty: Difficulty,
    },
    /// A card was turned face up
    Revealed {
        /// Colour on the revealed card
        color: GameColor,
    },
    /// The second card completed a pair
    Matched {
        /// Colour of the pair
        color: GameColor,
    },
    /// The second card did not match the first
    Mismatched {
        /// Colour of the first card
        first: GameColor,
        /// Colour of the second card
        second: GameColor,
    },
    /// The mismatched pair was turned back over
    Hidden,
    /// The final pair was found; fires once per game
    Celebrate,
    /// The game entered the won state
    Won {
        /// Cumulative session score
        score: u32,
        /// Moves taken this game
        moves: u32,
    },
}
