use anyhow::Result;
use std::sync::Arc;

use crate::config::Config;
use crate::game::Session;
use crate::models::Difficulty;
use crate::notify;
use crate::palette::GeminiClient;
use crate::tui::{self, AppState, GeneratorSlot, HexClipboard, Theme};

/// Options for an interactive game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayOptions {
    /// Starting difficulty; the configured default when absent
    pub difficulty: Option<Difficulty>,
    /// Seed for reproducible decks
    pub seed: Option<u64>,
}

/// Builds the application state without touching the terminal.
///
/// Missing audio backends or API credentials degrade features rather than
/// failing startup.
#[must_use]
pub fn build_state(config: Config, options: PlayOptions) -> AppState {
    let difficulty = options
        .difficulty
        .unwrap_or(config.game.default_difficulty);

    let mut session = match options.seed {
        Some(seed) => Session::seeded(difficulty, seed),
        None => Session::new(difficulty),
    };
    for notifier in notify::from_config(&config.audio) {
        tracing::debug!(notifier = notifier.name(), "attached notifier");
        session.add_notifier(notifier);
    }

    let generator = match GeminiClient::from_config(&config.palette) {
        Ok(client) => GeneratorSlot::Ready(Arc::new(client)),
        Err(e) => {
            tracing::info!(error = %e, "palette generation unavailable");
            GeneratorSlot::Unavailable(e.to_string())
        }
    };

    let theme = Theme::from_mode(config.ui.theme_mode);
    AppState::new(session, config, theme, generator, HexClipboard::system())
}

/// Runs the game in the terminal until the user quits.
pub fn launch_game(config: Config, options: PlayOptions) -> Result<()> {
    let mut state = build_state(config, options);
    tracing::info!(
        difficulty = %state.session.difficulty(),
        seed = ?options.seed,
        "starting game"
    );

    let mut terminal = tui::setup_terminal()?;
    let result = tui::run_tui(&mut state, &mut terminal);
    // Restore even when the loop failed so the shell stays usable
    tui::restore_terminal(terminal)?;

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_state_uses_options() {
        let mut config = Config::new();
        config.audio.speech = false;
        config.audio.failure_tone = false;
        config.game.default_difficulty = Difficulty::Medium;
        config.palette.api_key_env = "COLORSPEAK_TEST_UNSET_KEY".to_string();

        let state = build_state(config.clone(), PlayOptions::default());
        assert_eq!(state.session.difficulty(), Difficulty::Medium);
        assert!(matches!(
            state.palette.generator(),
            GeneratorSlot::Unavailable(reason) if reason.contains("COLORSPEAK_TEST_UNSET_KEY")
        ));

        let state = build_state(
            config,
            PlayOptions {
                difficulty: Some(Difficulty::Hard),
                seed: Some(3),
            },
        );
        assert_eq!(state.session.game().cards().len(), 18);
    }
}
