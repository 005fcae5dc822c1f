//! Action dispatch.

use anyhow::Result;
use std::time::Instant;

use crate::models::Difficulty;
use crate::shortcuts::Action;
use crate::tui::{AppState, HelpOverlayState};

use super::{game, navigation, palette};

/// Dispatch action to appropriate handler
pub fn dispatch_action(state: &mut AppState, action: Action, now: Instant) -> Result<()> {
    match action {
        // Navigation
        Action::NavigateUp
        | Action::NavigateDown
        | Action::NavigateLeft
        | Action::NavigateRight => navigation::handle_navigate(state, action),

        // Game
        Action::FlipCard => game::handle_flip(state, now),
        Action::SelectEasy => game::handle_select_difficulty(state, Difficulty::Easy, now),
        Action::SelectMedium => game::handle_select_difficulty(state, Difficulty::Medium, now),
        Action::SelectHard => game::handle_select_difficulty(state, Difficulty::Hard, now),
        Action::CycleDifficulty => {
            let next = state.session.difficulty().next();
            game::handle_select_difficulty(state, next, now)
        }
        Action::RestartGame | Action::PlayAgain => game::handle_restart(state, now),
        Action::FullReset => game::handle_full_reset(state, now),

        // Palette
        Action::OpenPalette => palette::handle_open(state),
        Action::EditPrompt => {
            state.palette.editing = true;
            Ok(())
        }
        Action::SubmitPrompt => palette::handle_submit(state),
        Action::CopyHex => palette::handle_copy(state, now),
        Action::NextPreview => {
            state.palette.preview = state.palette.preview.next();
            Ok(())
        }
        Action::PreviousPreview => {
            state.palette.preview = state.palette.preview.previous();
            Ok(())
        }
        Action::BackToGame => palette::handle_close(state),

        // Help
        Action::ToggleHelp => {
            state.help = match state.help {
                Some(_) => None,
                None => Some(HelpOverlayState::new()),
            };
            Ok(())
        }

        // General
        Action::Cancel => {
            if state.help.is_some() {
                state.help = None;
            } else {
                state.palette.editing = false;
            }
            Ok(())
        }
        Action::Quit => {
            tracing::info!("quit requested");
            state.should_quit = true;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::models::Difficulty;
    use crate::tui::test_support::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::time::Instant;

    #[test]
    fn test_quit_keys() {
        let now = Instant::now();

        let mut state = state();
        press(&mut state, KeyCode::Char('q'), now);
        assert!(state.should_quit);

        let mut state = crate::tui::test_support::state();
        crate::tui::handle_key_event(
            &mut state,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            now,
        )
        .unwrap();
        assert!(state.should_quit);
    }

    #[test]
    fn test_help_toggles_and_cancels() {
        let mut state = state();
        let now = Instant::now();

        press(&mut state, KeyCode::Char('?'), now);
        assert!(state.help.is_some());
        press(&mut state, KeyCode::Char('?'), now);
        assert!(state.help.is_none());

        press(&mut state, KeyCode::Char('?'), now);
        // 'q' closes help rather than quitting
        press(&mut state, KeyCode::Char('q'), now);
        assert!(state.help.is_none());
        assert!(!state.should_quit);
    }

    #[test]
    fn test_difficulty_keys() {
        let mut state = state();
        let now = Instant::now();

        press(&mut state, KeyCode::Char('3'), now);
        assert_eq!(state.session.difficulty(), Difficulty::Hard);
        assert_eq!(state.session.game().cards().len(), 18);

        press(&mut state, KeyCode::Tab, now);
        assert_eq!(state.session.difficulty(), Difficulty::Easy);
        assert_eq!(state.status_message, "New EASY game");
    }
}
