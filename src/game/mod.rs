//! The memory game: deck building, the match state machine and the session
//! that ties decks, score and timers together.

pub mod deck;
pub mod event;
pub mod session;
pub mod state;
pub mod timer;

pub use deck::{build_deck, shuffle};
pub use event::GameEvent;
pub use session::{Session, MATCH_POINTS};
pub use state::{ClickOutcome, GameState, IgnoreReason, Phase, ResolveOutcome};
pub use timer::{
    PendingResolution, Resolution, ResolutionQueue, FINAL_MATCH_DELAY, MATCH_DELAY,
    MISMATCH_DELAY,
};
