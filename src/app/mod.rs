//! Application orchestration layer
//!
//! Wires configuration, the game session, notifiers and the palette
//! generator together before handing control to the TUI.

/// Interactive game startup
pub mod launch;

pub use launch::{build_state, launch_game, PlayOptions};
