//! Help overlay listing every shortcut by context.
//!
//! The content is generated from the [`ShortcutRegistry`], so it always
//! matches the keys that are actually bound.

use ratatui::{
    layout::{Alignment, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use super::{centered_rect, Theme};
use crate::branding::APP_DISPLAY_NAME;
use crate::shortcuts::{contexts, ShortcutRegistry};

/// Sections in display order.
const SECTIONS: [(&str, &str); 5] = [
    (contexts::BOARD, "GAME BOARD"),
    (contexts::WON, "WIN DIALOG"),
    (contexts::PALETTE, "PALETTE STUDIO"),
    (contexts::PALETTE_INPUT, "PROMPT INPUT"),
    (contexts::HELP, "THIS HELP"),
];

/// Width of the key column.
const KEY_COLUMN: usize = 22;

/// State for the help overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpOverlayState {
    /// Current scroll offset (line number)
    pub scroll_offset: usize,
    /// Total number of content lines
    total_lines: usize,
}

impl HelpOverlayState {
    /// Creates a new help overlay state.
    #[must_use]
    pub fn new() -> Self {
        let total_lines = help_lines(&ShortcutRegistry::new(), &Theme::dark()).len();
        Self {
            scroll_offset: 0,
            total_lines,
        }
    }

    /// Scroll up by one line.
    pub const fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down by one line.
    pub const fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < self.total_lines {
            self.scroll_offset += 1;
        }
    }
}

impl Default for HelpOverlayState {
    fn default() -> Self {
        Self::new()
    }
}

/// Help content, one section per context.
fn help_lines(registry: &ShortcutRegistry, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("{APP_DISPLAY_NAME} - Keyboard Shortcuts"),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (context, title) in SECTIONS {
        lines.push(Line::from(Span::styled(
            format!("═══ {title} ═══"),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )));
        for (keys, action) in registry.hints(context) {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!("{keys:<KEY_COLUMN$}"),
                    Style::default().fg(theme.success),
                ),
                Span::styled(action.description(), Style::default().fg(theme.text)),
            ]));
        }
        lines.push(Line::from(""));
    }

    lines
}

/// Renders the overlay on top of `area`.
pub fn render(
    f: &mut Frame,
    area: Rect,
    state: &HelpOverlayState,
    registry: &ShortcutRegistry,
    theme: &Theme,
) {
    let popup = centered_rect(70, 80, area);
    f.render_widget(Clear, popup);

    let lines = help_lines(registry, theme);
    let total = lines.len();

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Help ")
                .title_alignment(Alignment::Center)
                .title_bottom(Line::from(" ↑↓ scroll  ? close ").alignment(Alignment::Center))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary))
                .style(Style::default().bg(theme.surface)),
        )
        .scroll((state.scroll_offset.min(u16::MAX as usize) as u16, 0));
    f.render_widget(paragraph, popup);

    let mut scrollbar_state = ScrollbarState::new(total).position(state.scroll_offset);
    f.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::VerticalRight),
        popup.inner(Margin {
            vertical: 1,
            horizontal: 0,
        }),
        &mut scrollbar_state,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::test_support::*;

    #[test]
    fn test_lists_every_context() {
        let text: String = help_lines(&ShortcutRegistry::new(), &Theme::dark())
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        for (_, title) in SECTIONS {
            assert!(text.contains(title));
        }
        assert!(text.contains("Flip card"));
        assert!(text.contains("Copy hex"));
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut help = HelpOverlayState::new();
        help.scroll_up();
        assert_eq!(help.scroll_offset, 0);
        for _ in 0..1000 {
            help.scroll_down();
        }
        assert_eq!(help.scroll_offset, help.total_lines - 1);
    }

    #[test]
    fn test_overlay_renders() {
        let mut state = state();
        state.help = Some(HelpOverlayState::new());
        let screen = draw(&state, 100, 40);
        assert!(screen.contains("Keyboard Shortcuts"));
        assert!(screen.contains("GAME BOARD"));
    }
}
