//! Input handler modules for different TUI contexts.

pub mod actions;
pub mod game;
pub mod navigation;
pub mod palette;

// Re-export handler functions
pub use actions::dispatch_action;
pub use palette::handle_prompt_input;
