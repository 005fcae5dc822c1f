//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving user preferences
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::branding::{APP_DATA_DIR, CONFIG_DIR_ENV};
use crate::models::Difficulty;

/// Default generative model.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default API base URL.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default environment variable holding the API key.
pub const DEFAULT_API_KEY_ENV: &str = "API_KEY";

/// Config file name inside the config directory.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Theme display mode preference.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// Game preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GameConfig {
    /// Difficulty the first deck is dealt at
    pub default_difficulty: Difficulty,
}

/// Sound and speech preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Announce matched colours and the win
    pub speech: bool,
    /// Buzz when a pair does not match
    pub failure_tone: bool,
    /// Chirp when a pair matches
    pub match_tone: bool,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            speech: true,
            failure_tone: true,
            match_tone: false,
        }
    }
}

/// Palette generator settings.
///
/// The API key itself is never stored here, only the name of the
/// environment variable it is read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Model id
    pub model: String,
    /// API base URL
    pub endpoint: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            timeout_secs: 60,
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    pub theme_mode: ThemeMode,
    /// Display help on startup
    pub show_help_on_startup: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::default(),
            show_help_on_startup: false,
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/ColorSpeak/config.toml`
/// - macOS: `~/Library/Application Support/ColorSpeak/config.toml`
/// - Windows: `%APPDATA%\ColorSpeak\config.toml`
///
/// `COLORSPEAK_CONFIG_DIR` replaces the directory on every platform.
///
/// # Validation
///
/// - palette `model` and `endpoint` must be non-empty
/// - `endpoint` must be an http(s) URL
/// - `timeout_secs` must be non-zero
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Game preferences
    pub game: GameConfig,
    /// Sound and speech
    pub audio: AudioConfig,
    /// Palette generator
    pub palette: PaletteConfig,
    /// UI preferences
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// - `$COLORSPEAK_CONFIG_DIR` when set
    /// - Linux: `~/.config/ColorSpeak/`
    /// - macOS: `~/Library/Application Support/ColorSpeak/`
    /// - Windows: `%APPDATA%\ColorSpeak\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DATA_DIR);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_dir()?)
    }

    /// Loads configuration from `dir/config.toml`.
    pub fn load_from(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate().context(format!(
            "Invalid configuration in {}",
            config_path.display()
        ))?;

        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_dir()?)
    }

    /// Saves configuration to `dir/config.toml`.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, dir: &Path) -> Result<()> {
        self.validate()?;

        fs::create_dir_all(dir).context(format!(
            "Failed to create config directory: {}",
            dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = dir.join(CONFIG_FILE_NAME);
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        let palette = &self.palette;

        if palette.model.trim().is_empty() {
            anyhow::bail!("palette.model must not be empty");
        }

        if palette.endpoint.trim().is_empty() {
            anyhow::bail!("palette.endpoint must not be empty");
        }

        if !palette.endpoint.starts_with("https://") && !palette.endpoint.starts_with("http://") {
            anyhow::bail!(
                "palette.endpoint must be an http(s) URL, got '{}'",
                palette.endpoint
            );
        }

        if palette.api_key_env.trim().is_empty() {
            anyhow::bail!("palette.api_key_env must not be empty");
        }

        if palette.timeout_secs == 0 {
            anyhow::bail!("palette.timeout_secs must be greater than zero");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.game.default_difficulty, Difficulty::Easy);
        assert!(config.audio.speech);
        assert!(config.audio.failure_tone);
        assert!(!config.audio.match_tone);
        assert_eq!(config.palette.model, "gemini-2.5-flash");
        assert_eq!(config.palette.api_key_env, "API_KEY");
        assert_eq!(config.ui.theme_mode, ThemeMode::Auto);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate() {
        let mut config = Config::new();
        config.palette.endpoint = "ftp://example.test".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.palette.timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.palette.model = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();

        let mut config = Config::new();
        config.game.default_difficulty = Difficulty::Hard;
        config.audio.match_tone = true;
        config.ui.theme_mode = ThemeMode::Light;
        config.save_to(temp_dir.path()).unwrap();

        assert!(temp_dir.path().join("config.toml").exists());
        assert!(!temp_dir.path().join("config.toml.tmp").exists());

        let loaded = Config::load_from(temp_dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(Config::load_from(temp_dir.path()).unwrap(), Config::new());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("config.toml"),
            "[game]\ndefault_difficulty = \"MEDIUM\"\n\n[audio]\nspeech = false\n",
        )
        .unwrap();

        let loaded = Config::load_from(temp_dir.path()).unwrap();
        assert_eq!(loaded.game.default_difficulty, Difficulty::Medium);
        assert!(!loaded.audio.speech);
        assert!(loaded.audio.failure_tone);
        assert_eq!(loaded.palette, PaletteConfig::default());
    }

    #[test]
    fn test_invalid_values_are_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        fs::write(&path, "[game]\ndefault_difficulty = \"NIGHTMARE\"\n").unwrap();
        let err = Config::load_from(temp_dir.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));

        fs::write(&path, "[palette]\ntimeout_secs = 0\n").unwrap();
        let err = Config::load_from(temp_dir.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid configuration"));
    }
}
