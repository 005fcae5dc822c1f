//! ColorSpeak library
//!
//! A colour memory game with spoken colour names, plus a generator for
//! role-tagged UI palettes with mock interface previews. The game core is
//! free of I/O; sound, speech and HTTP sit behind traits so the TUI and the
//! headless CLI share one implementation.

// Module declarations
pub mod app;
pub mod branding;
pub mod cli;
pub mod config;
pub mod game;
pub mod logging;
pub mod models;
pub mod notify;
pub mod palette;
pub mod preview;
pub mod shortcuts;
pub mod tui;
