//! Application identity strings.
//!
//! Names, directories and taglines live here so user-facing text and
//! on-disk locations stay consistent.

/// The human-readable display name of the application.
///
/// Used in:
/// - The board title
/// - Help text
/// - CLI `--version` output
pub const APP_DISPLAY_NAME: &str = "ColorSpeak";

/// The binary/executable name (lowercase, no spaces).
pub const APP_BINARY_NAME: &str = "colorspeak";

/// The directory name for application data (config, log file).
///
/// Used in platform-specific paths:
/// - Linux: `~/.config/{APP_DATA_DIR}/`
/// - macOS: `~/Library/Application Support/{APP_DATA_DIR}/`
/// - Windows: `%APPDATA%\{APP_DATA_DIR}\`
pub const APP_DATA_DIR: &str = "ColorSpeak";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "COLORSPEAK_CONFIG_DIR";

/// Log file name inside the config directory.
pub const LOG_FILE_NAME: &str = "colorspeak.log";

/// Short description for help text.
pub const APP_DESCRIPTION: &str = "Memory-matching colour game with spoken names";

/// Subtitle under the board title.
pub const APP_TAGLINE: &str = "Match the colors. Hear their names.";

/// Title of the palette screen.
pub const PALETTE_TITLE: &str = "AI Palette Studio";
