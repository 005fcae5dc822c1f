//! A play session: the current deck plus everything that outlives it.
//!
//! The session is created when the app starts and owns the cumulative score,
//! the chosen difficulty and the pending pair resolutions. Restarting or
//! changing difficulty replaces the deck but keeps the score; only a full
//! reset clears it.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

use super::event::GameEvent;
use super::state::{ClickOutcome, GameState, Phase, ResolveOutcome};
use super::timer::ResolutionQueue;
use crate::models::{CardId, Difficulty};
use crate::notify::{Notifier, NotifierSet};

/// Points awarded for each matched pair.
pub const MATCH_POINTS: u32 = 100;

/// Session state owned by the UI.
pub struct Session {
    difficulty: Difficulty,
    score: u32,
    game: GameState,
    queue: ResolutionQueue,
    rng: StdRng,
    epoch: u64,
    notifiers: NotifierSet,
}

impl Session {
    /// Starts a session with an entropy-seeded deck.
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_rng(difficulty, StdRng::from_entropy())
    }

    /// Starts a session whose decks are reproducible from `seed`.
    #[must_use]
    pub fn seeded(difficulty: Difficulty, seed: u64) -> Self {
        Self::with_rng(difficulty, StdRng::seed_from_u64(seed))
    }

    /// Starts a session dealing from the given generator.
    #[must_use]
    pub fn with_rng(difficulty: Difficulty, mut rng: StdRng) -> Self {
        let game = GameState::deal(difficulty, &mut rng, 0);
        Self {
            difficulty,
            score: 0,
            game,
            queue: ResolutionQueue::new(),
            rng,
            epoch: 0,
            notifiers: NotifierSet::new(),
        }
    }

    /// Attaches an observer for game events.
    pub fn add_notifier(&mut self, notifier: Box<dyn Notifier>) {
        self.notifiers.push(notifier);
    }

    /// Current difficulty.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Cumulative score across games since the last full reset.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// The current deck.
    #[must_use]
    pub const fn game(&self) -> &GameState {
        &self.game
    }

    /// Moves taken in the current game.
    #[must_use]
    pub const fn moves(&self) -> u32 {
        self.game.moves()
    }

    /// Whether the current game is won.
    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.game.is_game_over()
    }

    /// Current phase of the deck.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.game.phase()
    }

    /// Deadline of the next pending resolution.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.queue.next_due()
    }

    /// Clicks the card with `id` at time `now`.
    ///
    /// Returns the events the click produced (empty when it was ignored).
    pub fn click(&mut self, id: CardId, now: Instant) -> Vec<GameEvent> {
        let outcome = self.game.click(id);
        let mut events = Vec::new();

        match outcome {
            ClickOutcome::Ignored(reason) => {
                tracing::trace!(?reason, card = %id, "click ignored");
                return events;
            }
            ClickOutcome::Revealed { color } => {
                events.push(GameEvent::Revealed { color });
            }
            ClickOutcome::Matched { color, all_matched } => {
                self.score += MATCH_POINTS;
                tracing::debug!(color = color.name, score = self.score, "pair matched");
                events.push(GameEvent::Matched { color });
                if all_matched {
                    events.push(GameEvent::Celebrate);
                }
            }
            ClickOutcome::Mismatched { first, second, .. } => {
                tracing::debug!(first = first.name, second = second.name, "pair mismatched");
                events.push(GameEvent::Mismatched { first, second });
            }
        }

        if let Some(resolution) = outcome.resolution() {
            self.queue.schedule(self.game.epoch(), now, resolution);
        }

        self.emit(&events);
        events
    }

    /// Clicks the card at board position `index`.
    pub fn click_index(&mut self, index: usize, now: Instant) -> Vec<GameEvent> {
        match self.game.cards().get(index) {
            Some(card) => {
                let id = card.id;
                self.click(id, now)
            }
            None => Vec::new(),
        }
    }

    /// Applies every resolution that is due at `now`.
    ///
    /// Resolutions scheduled against an earlier deck are dropped.
    pub fn tick(&mut self, now: Instant) -> Vec<GameEvent> {
        let mut events = Vec::new();

        for pending in self.queue.take_due(now) {
            if pending.epoch != self.game.epoch() {
                tracing::debug!(
                    stale = pending.epoch,
                    current = self.game.epoch(),
                    "dropping resolution for replaced deck"
                );
                continue;
            }

            match self.game.resolve(pending.resolution) {
                ResolveOutcome::Settled => {}
                ResolveOutcome::Hidden => events.push(GameEvent::Hidden),
                ResolveOutcome::Won => {
                    tracing::info!(score = self.score, moves = self.game.moves(), "game won");
                    events.push(GameEvent::Won {
                        score: self.score,
                        moves: self.game.moves(),
                    });
                }
            }
        }

        self.emit(&events);
        events
    }

    /// Deals a new deck at the current difficulty, keeping the score.
    pub fn restart(&mut self) -> Vec<GameEvent> {
        self.deal()
    }

    /// Deals a new deck and zeroes the score.
    pub fn full_reset(&mut self) -> Vec<GameEvent> {
        self.score = 0;
        self.deal()
    }

    /// Switches difficulty, abandoning the current deck.
    ///
    /// Selecting the difficulty already in play does nothing.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Vec<GameEvent> {
        if difficulty == self.difficulty {
            return Vec::new();
        }
        self.difficulty = difficulty;
        self.deal()
    }

    fn deal(&mut self) -> Vec<GameEvent> {
        self.epoch += 1;
        self.game = GameState::deal(self.difficulty, &mut self.rng, self.epoch);
        tracing::info!(
            difficulty = %self.difficulty,
            epoch = self.epoch,
            orphaned = self.queue.len(),
            "dealt new deck"
        );

        let events = vec![GameEvent::Dealt {
            difficulty: self.difficulty,
        }];
        self.emit(&events);
        events
    }

    fn emit(&self, events: &[GameEvent]) {
        for event in events {
            self.notifiers.notify(event);
        }
    }
}
