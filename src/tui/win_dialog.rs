//! Modal shown once every pair is found.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use super::AppState;

const DIALOG_WIDTH: u16 = 40;
const DIALOG_HEIGHT: u16 = 11;

/// Renders the win dialog centred in `area`.
pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;

    let width = DIALOG_WIDTH.min(area.width);
    let height = DIALOG_HEIGHT.min(area.height);
    let dialog = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );
    f.render_widget(Clear, dialog);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(theme.accent))
        .style(Style::default().bg(theme.surface));

    let label = Style::default().fg(theme.text_muted);
    let value = Style::default().fg(theme.text).add_modifier(Modifier::BOLD);
    let key = Style::default()
        .fg(theme.accent)
        .add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "★ YOU WON! ★",
            Style::default()
                .fg(theme.success)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("Great Job, Super Star!", label)),
        Line::from(""),
        Line::from(vec![
            Span::styled("SCORE ", label),
            Span::styled(state.session.score().to_string(), value),
            Span::raw("    "),
            Span::styled("MOVES ", label),
            Span::styled(state.session.moves().to_string(), value),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", key),
            Span::styled(" Play Again   ", label),
            Span::styled("r", key),
            Span::styled(" Reset", label),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(paragraph, dialog);
}

#[cfg(test)]
mod tests {
    use crate::tui::test_support::*;
    use std::time::{Duration, Instant};

    #[test]
    fn test_dialog_after_win() {
        let mut state = state();
        let mut now = Instant::now();

        // Seeded deck: pair cards by colour and play them
        let cards = state.session.game().cards().to_vec();
        let mut done = vec![false; cards.len()];
        for i in 0..cards.len() {
            if done[i] {
                continue;
            }
            let j = (i + 1..cards.len())
                .find(|&j| cards[j].color.matches(&cards[i].color))
                .unwrap();
            done[i] = true;
            done[j] = true;
            state.session.click_index(i, now);
            state.session.click_index(j, now);
            now += Duration::from_millis(1100);
            state.tick(now);
        }

        assert!(state.session.is_won());
        let screen = draw(&state, 100, 30);
        assert!(screen.contains("YOU WON!"));
        assert!(screen.contains("Great Job, Super Star!"));
        assert!(screen.contains("300"));
    }
}
