//! Configuration commands.

use clap::{Args, Subcommand};

use crate::cli::common::{CliError, CliResult};
use crate::config::{Config, ThemeMode};
use crate::models::Difficulty;

/// Configuration commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
    /// Print the config file location
    Path,
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Difficulty the first deck is dealt at
    #[arg(long, value_enum)]
    difficulty: Option<Difficulty>,

    /// Theme mode
    #[arg(long, value_enum, value_name = "MODE")]
    theme: Option<ThemeMode>,

    /// Announce matched colours and the win
    #[arg(long, value_name = "BOOL")]
    speech: Option<bool>,

    /// Buzz when a pair does not match
    #[arg(long, value_name = "BOOL")]
    failure_tone: Option<bool>,

    /// Chirp when a pair matches
    #[arg(long, value_name = "BOOL")]
    match_tone: Option<bool>,

    /// Palette generator model id
    #[arg(long)]
    model: Option<String>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
            ConfigCommand::Path => {
                let path = Config::config_file_path()
                    .map_err(|e| CliError::io(format!("{e:#}")))?;
                println!("{}", path.display());
                Ok(())
            }
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            let json = serde_json::to_string_pretty(&config).map_err(|e| {
                CliError::io(format!("Failed to serialize configuration to JSON: {e}"))
            })?;
            println!("{json}");
        } else {
            print!("{}", format_config(&config));
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        let mut config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if !self.apply(&mut config) {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --difficulty, --theme, \
                 --speech, --failure-tone, --match-tone or --model",
            ));
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("{e:#}")))?;
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");
        Ok(())
    }

    /// Copies every given option into `config`; false when none was given.
    fn apply(&self, config: &mut Config) -> bool {
        let mut changed = false;

        if let Some(difficulty) = self.difficulty {
            config.game.default_difficulty = difficulty;
            changed = true;
        }
        if let Some(theme) = self.theme {
            config.ui.theme_mode = theme;
            changed = true;
        }
        if let Some(speech) = self.speech {
            config.audio.speech = speech;
            changed = true;
        }
        if let Some(failure_tone) = self.failure_tone {
            config.audio.failure_tone = failure_tone;
            changed = true;
        }
        if let Some(match_tone) = self.match_tone {
            config.audio.match_tone = match_tone;
            changed = true;
        }
        if let Some(model) = &self.model {
            config.palette.model.clone_from(model);
            changed = true;
        }

        changed
    }
}

/// Output configuration in human-readable format
fn format_config(config: &Config) -> String {
    let on_off = |flag: bool| if flag { "on" } else { "off" };

    let lines = [
        "ColorSpeak Configuration".to_string(),
        "========================".to_string(),
        String::new(),
        "Game:".to_string(),
        format!("  Default difficulty: {}", config.game.default_difficulty),
        String::new(),
        "Audio:".to_string(),
        format!("  Speech:       {}", on_off(config.audio.speech)),
        format!("  Failure tone: {}", on_off(config.audio.failure_tone)),
        format!("  Match tone:   {}", on_off(config.audio.match_tone)),
        String::new(),
        "Palette:".to_string(),
        format!("  Model:    {}", config.palette.model),
        format!("  Endpoint: {}", config.palette.endpoint),
        format!("  API key:  ${}", config.palette.api_key_env),
        format!("  Timeout:  {}s", config.palette.timeout_secs),
        String::new(),
        "UI:".to_string(),
        format!("  Theme: {:?}", config.ui.theme_mode),
        format!("  Help on startup: {}", on_off(config.ui.show_help_on_startup)),
    ];

    lines.join("\n") + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_args() -> ConfigSetArgs {
        ConfigSetArgs {
            difficulty: None,
            theme: None,
            speech: None,
            failure_tone: None,
            match_tone: None,
            model: None,
        }
    }

    #[test]
    fn test_apply_only_touches_given_options() {
        let mut config = Config::new();
        assert!(!set_args().apply(&mut config));
        assert_eq!(config, Config::new());

        let args = ConfigSetArgs {
            difficulty: Some(Difficulty::Medium),
            match_tone: Some(true),
            ..set_args()
        };
        assert!(args.apply(&mut config));
        assert_eq!(config.game.default_difficulty, Difficulty::Medium);
        assert!(config.audio.match_tone);
        assert!(config.audio.speech);
        assert_eq!(config.ui.theme_mode, ThemeMode::Auto);
    }

    #[test]
    fn test_human_output_names_the_key_variable() {
        let text = format_config(&Config::new());
        assert!(text.contains("Default difficulty: EASY"));
        assert!(text.contains("API key:  $API_KEY"));
        assert!(text.contains("Match tone:   off"));
    }
}
