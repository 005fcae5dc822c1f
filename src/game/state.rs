//! The card-flip / match state machine for a single deck.
//!
//! ```text
//! Idle -> Revealing(1) -> Locked(2) -> Resolving -> Idle
//!                                               \-> Won
//! ```
//!
//! Clicks that arrive in the wrong state are not errors; they come back as
//! [`ClickOutcome::Ignored`] and leave the state untouched.

use rand::Rng;
use serde::Serialize;

use super::deck::build_deck;
use super::timer::Resolution;
use crate::models::{Card, CardId, Difficulty, GameColor};

/// Coarse state of the machine, derived from the flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// Nothing revealed
    Idle,
    /// One card revealed, waiting for the second
    Revealing,
    /// Two cards revealed, resolution pending
    Locked,
    /// Every pair found
    Won,
}

/// Why a click had no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// A pair is waiting to resolve
    Locked,
    /// The card is already face up
    AlreadyFlipped,
    /// The card belongs to a found pair
    AlreadyMatched,
    /// The game is already won
    GameOver,
    /// No card with that id on this deck
    UnknownCard,
}

/// Result of clicking a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing changed
    Ignored(IgnoreReason),
    /// First card of a pair turned up
    Revealed {
        /// Colour shown
        color: GameColor,
    },
    /// Second card matched the first; both are now matched
    Matched {
        /// Colour of the pair
        color: GameColor,
        /// That was the last pair
        all_matched: bool,
    },
    /// Second card did not match
    Mismatched {
        /// First card's colour
        first: GameColor,
        /// Second card's colour
        second: GameColor,
        /// First card's id
        first_id: CardId,
        /// Second card's id
        second_id: CardId,
    },
}

impl ClickOutcome {
    /// The deferred resolution this click requires, if it completed a pair.
    #[must_use]
    pub const fn resolution(&self) -> Option<Resolution> {
        match *self {
            Self::Matched { all_matched, .. } => Some(Resolution::Match { all_matched }),
            Self::Mismatched {
                first_id,
                second_id,
                ..
            } => Some(Resolution::Mismatch {
                first: first_id,
                second: second_id,
            }),
            Self::Ignored(_) | Self::Revealed { .. } => None,
        }
    }
}

/// Result of applying a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// Matched pair settled, game continues
    Settled,
    /// Mismatched pair turned back over
    Hidden,
    /// Final pair settled, game is won
    Won,
}

/// State of one dealt deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    cards: Vec<Card>,
    flipped: Vec<CardId>,
    moves: u32,
    is_game_over: bool,
    is_locked: bool,
    epoch: u64,
}

impl GameState {
    /// Deals a fresh shuffled deck for `difficulty`.
    pub fn deal<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R, epoch: u64) -> Self {
        Self::from_cards(build_deck(difficulty, rng), epoch)
    }

    /// Starts a game on an explicit card order.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>, epoch: u64) -> Self {
        Self {
            cards,
            flipped: Vec::with_capacity(2),
            moves: 0,
            is_game_over: false,
            is_locked: false,
            epoch,
        }
    }

    /// Cards in board order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Card with the given id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Ids of revealed cards that are not yet resolved (0-2).
    #[must_use]
    pub fn flipped(&self) -> &[CardId] {
        &self.flipped
    }

    /// Completed pair attempts this game.
    #[must_use]
    pub const fn moves(&self) -> u32 {
        self.moves
    }

    /// Whether the game has been won.
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    /// Whether clicks are blocked while a pair resolves.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.is_locked
    }

    /// Deck generation this state belongs to.
    #[must_use]
    pub const fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Whether every card is matched.
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(|c| c.is_matched)
    }

    /// Number of pairs found so far.
    #[must_use]
    pub fn pairs_found(&self) -> usize {
        self.cards.iter().filter(|c| c.is_matched).count() / 2
    }

    /// Current coarse phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.is_game_over {
            Phase::Won
        } else if self.is_locked {
            Phase::Locked
        } else if self.flipped.is_empty() {
            Phase::Idle
        } else {
            Phase::Revealing
        }
    }

    /// Handles a click on the card with `id`.
    ///
    /// Reveals the card and, if it is the second of a pair, locks the board,
    /// counts the move and evaluates the pair. Matching marks both cards as
    /// matched right away; the caller schedules [`ClickOutcome::resolution`]
    /// to finish the transition.
    pub fn click(&mut self, id: CardId) -> ClickOutcome {
        if self.is_locked {
            return ClickOutcome::Ignored(IgnoreReason::Locked);
        }
        if self.is_game_over {
            return ClickOutcome::Ignored(IgnoreReason::GameOver);
        }
        let Some(index) = self.cards.iter().position(|c| c.id == id) else {
            return ClickOutcome::Ignored(IgnoreReason::UnknownCard);
        };
        if self.cards[index].is_matched {
            return ClickOutcome::Ignored(IgnoreReason::AlreadyMatched);
        }
        if self.cards[index].is_flipped {
            return ClickOutcome::Ignored(IgnoreReason::AlreadyFlipped);
        }

        self.cards[index].is_flipped = true;
        self.flipped.push(id);
        let color = self.cards[index].color;

        if self.flipped.len() < 2 {
            return ClickOutcome::Revealed { color };
        }

        self.is_locked = true;
        self.moves += 1;

        let first_id = self.flipped[0];
        let first = self
            .card(first_id)
            .map_or(color, |card| card.color);

        if first.matches(&color) {
            for card in &mut self.cards {
                if card.id == first_id || card.id == id {
                    card.is_matched = true;
                    card.is_flipped = true;
                }
            }
            ClickOutcome::Matched {
                color,
                all_matched: self.all_matched(),
            }
        } else {
            ClickOutcome::Mismatched {
                first,
                second: color,
                first_id,
                second_id: id,
            }
        }
    }

    /// Applies a resolution scheduled by an earlier click.
    pub fn resolve(&mut self, resolution: Resolution) -> ResolveOutcome {
        self.flipped.clear();
        self.is_locked = false;

        match resolution {
            Resolution::Match { .. } => {
                if self.all_matched() {
                    self.is_game_over = true;
                    ResolveOutcome::Won
                } else {
                    ResolveOutcome::Settled
                }
            }
            Resolution::Mismatch { first, second } => {
                for card in &mut self.cards {
                    if (card.id == first || card.id == second) && !card.is_matched {
                        card.is_flipped = false;
                    }
                }
                ResolveOutcome::Hidden
            }
        }
    }
}
