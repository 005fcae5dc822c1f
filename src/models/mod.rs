//! Data models for the game and the palette generator.
//!
//! This module contains all the core data structures used throughout the application.
//! Models are designed to be independent of UI and business logic.

pub mod card;
pub mod difficulty;
pub mod game_color;
pub mod palette;
pub mod rgb;

// Re-export all model types
pub use card::{Card, CardId};
pub use difficulty::Difficulty;
pub use game_color::{GameColor, CATALOG};
pub use palette::{ColorItem, ColorRole, Palette, PaletteDraft};
pub use rgb::RgbColor;
