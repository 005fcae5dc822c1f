//! Deferred pair resolutions.
//!
//! Revealed pairs stay on screen for a moment before they resolve. Instead of
//! sleeping or spawning timers, the event loop calls [`ResolutionQueue::take_due`]
//! on every tick. Each entry remembers the deck epoch it was scheduled for so
//! a resolution can never land on a deck that has since been replaced.

use std::time::{Duration, Instant};

use crate::models::CardId;

/// Delay before a matched pair resolves while other pairs remain.
pub const MATCH_DELAY: Duration = Duration::from_millis(1000);

/// Delay before the final matched pair resolves into the won state.
pub const FINAL_MATCH_DELAY: Duration = Duration::from_millis(500);

/// Delay before a mismatched pair is turned back over.
pub const MISMATCH_DELAY: Duration = Duration::from_millis(1000);

/// What to do with the pending pair once its delay has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Pair matched: clear the reveal list and unlock
    Match {
        /// Every card on the board is now matched
        all_matched: bool,
    },
    /// Pair did not match: turn both cards back over and unlock
    Mismatch {
        /// First revealed card
        first: CardId,
        /// Second revealed card
        second: CardId,
    },
}

impl Resolution {
    /// How long the pair stays revealed before this resolution applies.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        match self {
            Self::Match { all_matched: true } => FINAL_MATCH_DELAY,
            Self::Match { all_matched: false } => MATCH_DELAY,
            Self::Mismatch { .. } => MISMATCH_DELAY,
        }
    }
}

/// A resolution waiting for its deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingResolution {
    /// Deck epoch this resolution belongs to
    pub epoch: u64,
    /// When it becomes due
    pub due: Instant,
    /// What to apply
    pub resolution: Resolution,
}

/// Pending resolutions ordered by deadline.
#[derive(Debug, Clone, Default)]
pub struct ResolutionQueue {
    pending: Vec<PendingResolution>,
}

impl ResolutionQueue {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    /// Schedules `resolution` for `epoch`, due after its delay from `now`.
    pub fn schedule(&mut self, epoch: u64, now: Instant, resolution: Resolution) {
        let entry = PendingResolution {
            epoch,
            due: now + resolution.delay(),
            resolution,
        };
        // Keep sorted by deadline; ties keep scheduling order
        let index = self.pending.partition_point(|p| p.due <= entry.due);
        self.pending.insert(index, entry);
    }

    /// Removes and returns every entry due at or before `now`, earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<PendingResolution> {
        let split = self.pending.partition_point(|p| p.due <= now);
        self.pending.drain(..split).collect()
    }

    /// Deadline of the next pending entry.
    #[must_use]
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.first().map(|p| p.due)
    }

    /// Number of pending entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
