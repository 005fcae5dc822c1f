//! Cursor movement for the board, the swatch list and the help overlay.

use anyhow::Result;

use crate::shortcuts::Action;
use crate::tui::board::{move_cursor, Step};
use crate::tui::{AppState, Screen};

/// Moves whatever the current context navigates.
pub fn handle_navigate(state: &mut AppState, action: Action) -> Result<()> {
    if let Some(help) = state.help.as_mut() {
        match action {
            Action::NavigateUp => help.scroll_up(),
            Action::NavigateDown => help.scroll_down(),
            _ => {}
        }
        return Ok(());
    }

    match state.screen {
        Screen::Palette => match action {
            Action::NavigateUp => state.palette.select_previous(),
            Action::NavigateDown => state.palette.select_next(),
            _ => {}
        },
        Screen::Board => {
            let step = match action {
                Action::NavigateUp => Step::Up,
                Action::NavigateDown => Step::Down,
                Action::NavigateLeft => Step::Left,
                Action::NavigateRight => Step::Right,
                _ => return Ok(()),
            };
            state.cursor = move_cursor(
                state.cursor,
                state.session.game().cards().len(),
                state.session.difficulty().columns(),
                step,
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::tui::test_support::*;
    use crossterm::event::KeyCode;
    use std::time::Instant;

    #[test]
    fn test_board_cursor_keys() {
        let mut state = state();
        let now = Instant::now();

        // Easy: 2 rows of 3
        press(&mut state, KeyCode::Right, now);
        press(&mut state, KeyCode::Char('l'), now);
        assert_eq!(state.cursor, 2);
        press(&mut state, KeyCode::Right, now);
        assert_eq!(state.cursor, 2);
        press(&mut state, KeyCode::Char('j'), now);
        assert_eq!(state.cursor, 5);
        press(&mut state, KeyCode::Down, now);
        assert_eq!(state.cursor, 5);
        press(&mut state, KeyCode::Char('h'), now);
        press(&mut state, KeyCode::Up, now);
        assert_eq!(state.cursor, 1);
    }
}
