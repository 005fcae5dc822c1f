//! Centralized shortcut and action system.
//!
//! Every key the TUI reacts to is registered here per context, and the help
//! overlay and status bar read their hints from the same table.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Context names.
pub mod contexts {
    /// The card grid
    pub const BOARD: &str = "board";
    /// The win dialog
    pub const WON: &str = "won";
    /// Palette screen, browsing swatches
    pub const PALETTE: &str = "palette";
    /// Palette screen, typing a prompt
    pub const PALETTE_INPUT: &str = "palette_input";
    /// Help overlay
    pub const HELP: &str = "help";
}

/// All possible actions in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === NAVIGATION ===
    NavigateUp,
    NavigateDown,
    NavigateLeft,
    NavigateRight,

    // === GAME ===
    FlipCard,
    SelectEasy,
    SelectMedium,
    SelectHard,
    CycleDifficulty,
    RestartGame,
    FullReset,
    PlayAgain,

    // === PALETTE ===
    OpenPalette,
    EditPrompt,
    SubmitPrompt,
    CopyHex,
    NextPreview,
    PreviousPreview,
    BackToGame,

    // === HELP ===
    ToggleHelp,

    // === GENERAL ===
    Cancel,
    Quit,
}

impl Action {
    /// Stable id of the action.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::NavigateUp => "navigate_up",
            Self::NavigateDown => "navigate_down",
            Self::NavigateLeft => "navigate_left",
            Self::NavigateRight => "navigate_right",

            Self::FlipCard => "flip_card",
            Self::SelectEasy => "select_easy",
            Self::SelectMedium => "select_medium",
            Self::SelectHard => "select_hard",
            Self::CycleDifficulty => "cycle_difficulty",
            Self::RestartGame => "restart_game",
            Self::FullReset => "full_reset",
            Self::PlayAgain => "play_again",

            Self::OpenPalette => "open_palette",
            Self::EditPrompt => "edit_prompt",
            Self::SubmitPrompt => "submit_prompt",
            Self::CopyHex => "copy_hex",
            Self::NextPreview => "next_preview",
            Self::PreviousPreview => "previous_preview",
            Self::BackToGame => "back_to_game",

            Self::ToggleHelp => "toggle_help",

            Self::Cancel => "cancel",
            Self::Quit => "quit",
        }
    }

    /// Whether this only moves a cursor or scroll position.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::NavigateUp | Self::NavigateDown | Self::NavigateLeft | Self::NavigateRight
        )
    }

    /// Short description for hints and help.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::NavigateUp => "Move up",
            Self::NavigateDown => "Move down",
            Self::NavigateLeft => "Move left",
            Self::NavigateRight => "Move right",

            Self::FlipCard => "Flip card",
            Self::SelectEasy => "Easy (3 pairs)",
            Self::SelectMedium => "Medium (6 pairs)",
            Self::SelectHard => "Hard (9 pairs)",
            Self::CycleDifficulty => "Next difficulty",
            Self::RestartGame => "New game (keep score)",
            Self::FullReset => "Reset score and game",
            Self::PlayAgain => "Play again",

            Self::OpenPalette => "Palette studio",
            Self::EditPrompt => "Describe a palette",
            Self::SubmitPrompt => "Generate",
            Self::CopyHex => "Copy hex",
            Self::NextPreview => "Next preview",
            Self::PreviousPreview => "Previous preview",
            Self::BackToGame => "Back to game",

            Self::ToggleHelp => "Help",

            Self::Cancel => "Cancel",
            Self::Quit => "Quit",
        }
    }
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    #[must_use]
    pub const fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }

    /// Display label, e.g. "Ctrl+q" or "Enter".
    #[must_use]
    pub fn label(&self) -> String {
        let key = match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "Shift+Tab".to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            other => format!("{other:?}"),
        };
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            format!("Ctrl+{key}")
        } else if self.modifiers.contains(KeyModifiers::ALT) {
            format!("Alt+{key}")
        } else {
            key
        }
    }
}

/// Shortcut registry that maps key events to actions for a given context.
///
/// This is the central source of truth for all keyboard shortcuts in the application.
pub struct ShortcutRegistry {
    /// Maps (context, key_binding) to Action
    bindings: HashMap<(&'static str, KeyBinding), Action>,
    /// Bindings per context in registration order, for hints
    ordered: Vec<(&'static str, KeyBinding, Action)>,
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
            ordered: Vec::new(),
        };

        registry.register_board_shortcuts();
        registry.register_won_shortcuts();
        registry.register_palette_shortcuts();
        registry.register_help_shortcuts();
        registry
    }

    fn register_navigation(&mut self, ctx: &'static str) {
        use KeyCode as K;
        use KeyModifiers as M;

        self.register(ctx, K::Up, M::NONE, Action::NavigateUp);
        self.register(ctx, K::Down, M::NONE, Action::NavigateDown);
        self.register(ctx, K::Char('k'), M::NONE, Action::NavigateUp);
        self.register(ctx, K::Char('j'), M::NONE, Action::NavigateDown);
    }

    fn register_quit(&mut self, ctx: &'static str) {
        use KeyCode as K;
        use KeyModifiers as M;

        self.register(ctx, K::Char('q'), M::CONTROL, Action::Quit);
        self.register(ctx, K::Char('c'), M::CONTROL, Action::Quit);
    }

    /// Register all shortcuts for the card grid.
    fn register_board_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = contexts::BOARD;

        // === NAVIGATION ===
        self.register_navigation(ctx);
        self.register(ctx, K::Left, M::NONE, Action::NavigateLeft);
        self.register(ctx, K::Right, M::NONE, Action::NavigateRight);
        self.register(ctx, K::Char('h'), M::NONE, Action::NavigateLeft);
        self.register(ctx, K::Char('l'), M::NONE, Action::NavigateRight);

        // === GAME ===
        self.register(ctx, K::Enter, M::NONE, Action::FlipCard);
        self.register(ctx, K::Char(' '), M::NONE, Action::FlipCard);
        self.register(ctx, K::Char('1'), M::NONE, Action::SelectEasy);
        self.register(ctx, K::Char('2'), M::NONE, Action::SelectMedium);
        self.register(ctx, K::Char('3'), M::NONE, Action::SelectHard);
        self.register(ctx, K::Tab, M::NONE, Action::CycleDifficulty);
        self.register(ctx, K::Char('n'), M::NONE, Action::RestartGame);
        self.register(ctx, K::Char('R'), M::SHIFT, Action::FullReset);
        self.register(ctx, K::Char('R'), M::NONE, Action::FullReset);

        // === PALETTE ===
        self.register(ctx, K::Char('p'), M::NONE, Action::OpenPalette);

        // === HELP ===
        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);

        // === GENERAL ===
        self.register(ctx, K::Char('q'), M::NONE, Action::Quit);
        self.register_quit(ctx);
    }

    /// Register all shortcuts for the win dialog.
    fn register_won_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = contexts::WON;

        self.register(ctx, K::Enter, M::NONE, Action::PlayAgain);
        self.register(ctx, K::Char(' '), M::NONE, Action::PlayAgain);
        self.register(ctx, K::Char('r'), M::NONE, Action::FullReset);
        self.register(ctx, K::Char('q'), M::NONE, Action::Quit);
        self.register_quit(ctx);
    }

    /// Register all shortcuts for the palette screen.
    fn register_palette_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = contexts::PALETTE;

        self.register_navigation(ctx);
        self.register(ctx, K::Char('c'), M::NONE, Action::CopyHex);
        self.register(ctx, K::Enter, M::NONE, Action::CopyHex);
        self.register(ctx, K::Char('i'), M::NONE, Action::EditPrompt);
        self.register(ctx, K::Char('/'), M::NONE, Action::EditPrompt);
        self.register(ctx, K::Tab, M::NONE, Action::NextPreview);
        self.register(ctx, K::BackTab, M::SHIFT, Action::PreviousPreview);
        self.register(ctx, K::BackTab, M::NONE, Action::PreviousPreview);
        self.register(ctx, K::Esc, M::NONE, Action::BackToGame);
        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);
        self.register_quit(ctx);

        // Typing a prompt: printable keys are text, so only control keys bind
        let ctx = contexts::PALETTE_INPUT;
        self.register(ctx, K::Enter, M::NONE, Action::SubmitPrompt);
        self.register(ctx, K::Esc, M::NONE, Action::Cancel);
        self.register_quit(ctx);
    }

    /// Register all shortcuts for the help overlay.
    fn register_help_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = contexts::HELP;

        self.register_navigation(ctx);
        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);
        self.register(ctx, K::Esc, M::NONE, Action::Cancel);
        self.register(ctx, K::Char('q'), M::NONE, Action::Cancel);
        self.register_quit(ctx);
    }

    /// Register a shortcut binding.
    fn register(
        &mut self,
        context: &'static str,
        code: KeyCode,
        modifiers: KeyModifiers,
        action: Action,
    ) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert((context, binding), action);
        self.ordered.push((context, binding, action));
    }

    /// Look up an action for a given context and key event.
    #[must_use]
    pub fn lookup(&self, context: &'static str, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&(context, binding)).copied()
    }

    /// Check if a key event matches a specific action in the given context.
    #[must_use]
    pub fn matches(&self, context: &'static str, event: KeyEvent, action: Action) -> bool {
        self.lookup(context, event) == Some(action)
    }

    /// Key labels and actions for a context, one entry per action in
    /// registration order. Multiple keys for one action are joined with "/".
    #[must_use]
    pub fn hints(&self, context: &str) -> Vec<(String, Action)> {
        let mut hints: Vec<(Action, Vec<String>)> = Vec::new();
        for (ctx, binding, action) in &self.ordered {
            if *ctx != context {
                continue;
            }
            match hints.iter_mut().find(|(a, _)| a == action) {
                Some((_, keys)) => {
                    let label = binding.label();
                    if !keys.contains(&label) {
                        keys.push(label);
                    }
                }
                None => hints.push((*action, vec![binding.label()])),
            }
        }
        hints
            .into_iter()
            .map(|(action, keys)| (keys.join("/"), action))
            .collect()
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}
