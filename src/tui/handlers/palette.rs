//! Palette studio actions.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Instant;

use crate::palette::PaletteError;
use crate::tui::{AppState, GeneratorSlot, Screen};

/// Longest prompt accepted from the keyboard.
const MAX_PROMPT_LEN: usize = 200;

/// Opens the studio, straight into the prompt when nothing was generated yet.
pub fn handle_open(state: &mut AppState) -> Result<()> {
    state.screen = Screen::Palette;
    state.palette.editing = state.palette.palette.is_none() && !state.palette.job.is_running();
    Ok(())
}

/// Returns to the board. A running generation keeps going.
pub fn handle_close(state: &mut AppState) -> Result<()> {
    state.screen = Screen::Board;
    state.palette.editing = false;
    Ok(())
}

/// Text editing while the prompt has focus.
pub fn handle_prompt_input(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c)
            if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            if state.palette.prompt.chars().count() < MAX_PROMPT_LEN {
                state.palette.prompt.push(c);
            }
        }
        KeyCode::Backspace => {
            state.palette.prompt.pop();
        }
        _ => {}
    }
}

/// Starts generating from the prompt.
///
/// Refused while another generation runs, for a blank prompt, or when no
/// generator is configured.
pub fn handle_submit(state: &mut AppState) -> Result<()> {
    if state.palette.job.is_running() {
        state.set_status("Generation already in progress");
        return Ok(());
    }

    let prompt = state.palette.prompt.trim().to_string();
    if prompt.is_empty() {
        state.set_status(PaletteError::EmptyPrompt.to_string());
        return Ok(());
    }

    let generator = match state.palette.generator() {
        GeneratorSlot::Ready(generator) => Arc::clone(generator),
        GeneratorSlot::Unavailable(reason) => {
            let reason = reason.clone();
            state.set_error(reason);
            return Ok(());
        }
    };

    match state.palette.job.start(generator, &prompt) {
        Ok(()) => {
            state.palette.editing = false;
            state.set_status(format!("Generating palette for \"{prompt}\"..."));
        }
        Err(e) => state.set_error(format!("{e:#}")),
    }

    Ok(())
}

/// Copies the selected swatch's hex code.
pub fn handle_copy(state: &mut AppState, now: Instant) -> Result<()> {
    let Some(hex) = state.palette.selected_hex().map(str::to_string) else {
        return Ok(());
    };

    match state.clipboard.copy(&hex, now) {
        Ok(()) => state.set_status(format!("Copied {hex}")),
        Err(e) => state.set_error(format!("{e:#}")),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::models::{ColorItem, ColorRole, Palette, PaletteDraft};
    use crate::preview::test_support::palette;
    use crate::tui::test_support::*;
    use crate::tui::{AppState, Screen};
    use crossterm::event::KeyCode;
    use std::time::{Duration, Instant};

    fn draft() -> PaletteDraft {
        PaletteDraft {
            name: "Neon Nights".to_string(),
            description: "Electric city glow".to_string(),
            colors: vec![ColorItem {
                hex: "#FF00AA".to_string(),
                name: "Hot Magenta".to_string(),
                role: ColorRole::Primary,
                description: "Brand".to_string(),
            }],
        }
    }

    fn type_text(state: &mut AppState, text: &str, now: Instant) {
        for c in text.chars() {
            press(state, KeyCode::Char(c), now);
        }
    }

    fn settle(state: &mut AppState) {
        for _ in 0..500 {
            state.tick(Instant::now());
            if !state.palette.job.is_running() {
                return;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        panic!("generation did not finish");
    }

    #[test]
    fn test_generate_and_copy() {
        let (mut state, copied) = state_with(ready(draft()));
        let now = Instant::now();

        press(&mut state, KeyCode::Char('p'), now);
        assert_eq!(state.screen, Screen::Palette);
        assert!(state.palette.editing);

        // Bound letters are plain text while typing
        type_text(&mut state, "cyberpunk neon city", now);
        press(&mut state, KeyCode::Backspace, now);
        assert_eq!(state.palette.prompt, "cyberpunk neon cit");
        assert!(!state.should_quit);

        press(&mut state, KeyCode::Enter, now);
        assert!(!state.palette.editing);
        settle(&mut state);

        let shown = state.palette.palette.as_ref().unwrap();
        assert_eq!(shown.name, "Neon Nights");
        assert_eq!(state.status_message, "Generated 'Neon Nights'");

        press(&mut state, KeyCode::Char('c'), now);
        assert_eq!(copied.borrow().as_slice(), ["#FF00AA"]);
        assert!(state.clipboard.is_acknowledged("#FF00AA", now));

        press(&mut state, KeyCode::Esc, now);
        assert_eq!(state.screen, Screen::Board);
    }

    /// Submits "ocean" over an existing palette and waits for the outcome.
    fn submit_over_previous(body: String) -> (AppState, Palette) {
        let (mut state, _) = state_with(replaying(body));
        let now = Instant::now();
        let previous = palette(&[(ColorRole::Accent, "#123456")]);
        state.palette.show(previous.clone());
        state.palette.prompt = "ocean".to_string();
        state.screen = Screen::Palette;

        press(&mut state, KeyCode::Char('i'), now);
        press(&mut state, KeyCode::Enter, now);
        settle(&mut state);
        (state, previous)
    }

    #[test]
    fn test_failure_keeps_previous_palette() {
        let body = serde_json::json!({"candidates": []}).to_string();
        let (state, previous) = submit_over_previous(body);

        assert_eq!(state.palette.palette.as_ref(), Some(&previous));
        assert_eq!(state.status_message, "Generation failed");
        let error = state.error_message.as_deref().unwrap();
        assert!(error.contains("No response from Gemini"));
    }

    #[test]
    fn test_missing_colors_keeps_previous_palette() {
        let body = envelope(r#"{"name": "Tide", "description": "Cool blues"}"#);
        let (state, previous) = submit_over_previous(body);

        assert_eq!(state.palette.palette.as_ref(), Some(&previous));
        assert_eq!(state.palette.selected_hex(), Some("#123456"));
        let error = state.error_message.as_deref().unwrap();
        assert!(error.contains("Invalid response format"), "{error}");
    }

    #[test]
    fn test_blank_prompt_refused() {
        let (mut state, _) = state_with(ready(draft()));
        let now = Instant::now();

        press(&mut state, KeyCode::Char('p'), now);
        type_text(&mut state, "   ", now);
        press(&mut state, KeyCode::Enter, now);

        assert!(!state.palette.job.is_running());
        assert_eq!(state.status_message, "Prompt is empty");
        assert!(state.palette.editing);
    }

    #[test]
    fn test_missing_generator_shows_error() {
        let mut state = state();
        let now = Instant::now();

        press(&mut state, KeyCode::Char('p'), now);
        type_text(&mut state, "forest", now);
        press(&mut state, KeyCode::Enter, now);

        assert!(state.error_message.as_deref().unwrap().contains("API_KEY"));
        assert!(state.palette.palette.is_none());
    }

    #[test]
    fn test_preview_tabs_cycle() {
        let mut state = state();
        let now = Instant::now();
        state.screen = Screen::Palette;

        let start = state.palette.preview;
        press(&mut state, KeyCode::Tab, now);
        assert_ne!(state.palette.preview, start);
        press(&mut state, KeyCode::BackTab, now);
        assert_eq!(state.palette.preview, start);
    }
}
