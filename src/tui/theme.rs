//! Theme system for consistent UI colors across dark and light modes.
//!
//! The OS appearance is detected with `dark-light` unless the config pins a
//! mode. Card faces always use the catalog colours; the theme only covers
//! chrome, card backs and text.

use ratatui::style::Color;

use crate::config::ThemeMode;

/// Theme variant identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    /// Slate chrome for dark terminals
    Dark,
    /// Paper chrome for light terminals
    Light,
}

/// Semantic color theme for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Which variant this is
    pub variant: ThemeVariant,

    /// Borders, titles and emphasis
    pub primary: Color,
    /// Highlights and the board cursor
    pub accent: Color,
    /// Matches, confirmations
    pub success: Color,
    /// Errors
    pub error: Color,
    /// In-progress states
    pub warning: Color,

    /// Primary text
    pub text: Color,
    /// Labels and help text
    pub text_muted: Color,

    /// Main background
    pub background: Color,
    /// Panels and dialogs
    pub surface: Color,
    /// Face-down card fill
    pub card_back: Color,
    /// Glyph on a face-down card
    pub card_back_mark: Color,
}

impl Theme {
    /// Detects the OS theme and returns the appropriate Theme.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            // Dark mode, unspecified, or detection failure
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Theme for a configured mode.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Slate chrome for dark terminals.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            variant: ThemeVariant::Dark,

            primary: Color::Rgb(129, 140, 248),
            accent: Color::Rgb(251, 191, 36),
            success: Color::Rgb(52, 211, 153),
            error: Color::Rgb(248, 113, 113),
            warning: Color::Rgb(251, 146, 60),

            text: Color::Rgb(241, 245, 249),
            text_muted: Color::Rgb(148, 163, 184),

            background: Color::Rgb(15, 23, 42),
            surface: Color::Rgb(30, 41, 59),
            card_back: Color::Rgb(51, 65, 85),
            card_back_mark: Color::Rgb(100, 116, 139),
        }
    }

    /// Paper chrome for light terminals.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            variant: ThemeVariant::Light,

            primary: Color::Rgb(67, 56, 202),
            accent: Color::Rgb(180, 100, 0),
            success: Color::Rgb(0, 128, 0),
            error: Color::Rgb(190, 18, 60),
            warning: Color::Rgb(200, 100, 0),

            text: Color::Rgb(15, 23, 42),
            text_muted: Color::Rgb(71, 85, 105),

            background: Color::Rgb(248, 250, 252),
            surface: Color::Rgb(226, 232, 240),
            card_back: Color::Rgb(203, 213, 225),
            card_back_mark: Color::Rgb(100, 116, 139),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}
