//! Status bar widget for displaying status messages and help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};

/// Hints shown on the bottom line.
const MAX_HINTS: usize = 8;

/// Render the status bar with contextual help
pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;

    let first = if let Some(error) = &state.error_message {
        Line::from(vec![
            Span::styled("ERROR: ", Style::default().fg(theme.error)),
            Span::styled(error.as_str(), Style::default().fg(theme.text)),
        ])
    } else if state.palette.job.is_running() {
        let secs = state
            .palette
            .job
            .elapsed()
            .map_or(0, |elapsed| elapsed.as_secs());
        Line::from(vec![
            Span::styled("Palette: ", Style::default().fg(theme.primary)),
            Span::styled(
                format!("{} ({secs}s)", state.palette.job.status()),
                Style::default().fg(theme.warning),
            ),
        ])
    } else {
        Line::from(Span::styled(
            state.status_message.as_str(),
            Style::default().fg(theme.text),
        ))
    };

    let status = Paragraph::new(vec![first, hints_line(state, theme)])
        .style(Style::default().bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Status ")
                .border_style(Style::default().fg(theme.primary)),
        );

    f.render_widget(status, area);
}

/// Hints for the current context, from the shortcut registry.
///
/// Cursor keys are left to the help overlay.
fn hints_line(state: &AppState, theme: &Theme) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    for (i, (key, action)) in state
        .shortcuts
        .hints(state.context())
        .into_iter()
        .filter(|(_, action)| !action.is_navigation())
        .take(MAX_HINTS)
        .enumerate()
    {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            key,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            action.description(),
            Style::default().fg(theme.text_muted),
        ));
    }
    Line::from(spans)
}
