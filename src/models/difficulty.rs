//! Difficulty levels and their board dimensions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How many pairs are dealt.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    /// 3 pairs, 6 cards
    #[default]
    Easy,
    /// 6 pairs, 12 cards
    Medium,
    /// 9 pairs, 18 cards
    Hard,
}

impl Difficulty {
    /// All levels in selector order.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Number of colour pairs dealt at this level.
    #[must_use]
    pub const fn pairs(self) -> usize {
        match self {
            Self::Easy => 3,
            Self::Medium => 6,
            Self::Hard => 9,
        }
    }

    /// Total number of cards on the board.
    #[must_use]
    pub const fn card_count(self) -> usize {
        self.pairs() * 2
    }

    /// Columns used when laying the cards out in a grid.
    #[must_use]
    pub const fn columns(self) -> usize {
        match self {
            Self::Easy => 3,
            Self::Medium => 4,
            Self::Hard => 6,
        }
    }

    /// Upper-case label shown in the selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "EASY",
            Self::Medium => "MEDIUM",
            Self::Hard => "HARD",
        }
    }

    /// Next level, wrapping from Hard back to Easy.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Easy => Self::Medium,
            Self::Medium => Self::Hard,
            Self::Hard => Self::Easy,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
