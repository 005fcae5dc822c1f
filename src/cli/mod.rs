//! CLI command handlers for ColorSpeak.
//!
//! Headless, scriptable access to the catalog, the palette generator and the
//! configuration. The game itself runs in the TUI.

pub mod catalog;
pub mod common;
pub mod config;
pub mod palette;

// Re-export types used by main.rs and tests
pub use catalog::CatalogArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use palette::PaletteArgs;
