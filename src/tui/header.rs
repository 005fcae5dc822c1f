//! Title bar with the difficulty selector, score and moves.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Screen};
use crate::branding::{APP_DISPLAY_NAME, APP_TAGLINE, PALETTE_TITLE};
use crate::models::Difficulty;

/// Renders the header.
pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary))
        .style(Style::default().bg(theme.background));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(44)])
        .split(inner);

    let subtitle = match state.screen {
        Screen::Board => APP_TAGLINE,
        Screen::Palette => PALETTE_TITLE,
    };
    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            APP_DISPLAY_NAME,
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle, Style::default().fg(theme.text_muted))),
    ]);
    f.render_widget(title, columns[0]);

    let mut selector = Vec::new();
    for (i, level) in Difficulty::ALL.iter().enumerate() {
        if i > 0 {
            selector.push(Span::raw(" "));
        }
        let style = if *level == state.session.difficulty() {
            Style::default()
                .fg(theme.background)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_muted)
        };
        selector.push(Span::styled(format!(" {} {} ", i + 1, level.label()), style));
    }

    let stats = Line::from(vec![
        Span::styled("Score ", Style::default().fg(theme.text_muted)),
        Span::styled(
            state.session.score().to_string(),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled("Moves ", Style::default().fg(theme.text_muted)),
        Span::styled(
            state.session.moves().to_string(),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
    ]);

    let right = Paragraph::new(vec![Line::from(selector), stats])
        .alignment(ratatui::layout::Alignment::Right);
    f.render_widget(right, columns[1]);
}
