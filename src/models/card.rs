//! Cards on the board.

use serde::Serialize;
use std::fmt;
use uuid::Uuid;

use super::GameColor;

/// Unique identity of a single card (two cards of a pair have different ids).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CardId(Uuid);

impl CardId {
    /// Generates a fresh random id.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CardId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One card of a pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    /// Unique id
    pub id: CardId,
    /// Colour shown when face up
    pub color: GameColor,
    /// Face up (revealed or matched)
    pub is_flipped: bool,
    /// Part of a resolved pair; never reverts once set
    pub is_matched: bool,
}

impl Card {
    /// A fresh face-down card with a new id.
    #[must_use]
    pub fn new(color: GameColor) -> Self {
        Self {
            id: CardId::new(),
            color,
            is_flipped: false,
            is_matched: false,
        }
    }

    /// Whether the colour side should be drawn.
    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.is_flipped || self.is_matched
    }
}
