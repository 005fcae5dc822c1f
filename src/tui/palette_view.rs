//! Palette studio: prompt, swatches and mock previews.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap},
    Frame,
};
use std::sync::Arc;
use std::time::Instant;

use super::AppState;
use crate::models::Palette;
use crate::palette::{GenerationJob, PaletteGenerator};
use crate::preview::{self, PreviewKind, RoleStyles};

/// Width of the prompt and swatch column.
const SIDEBAR_WIDTH: u16 = 46;

/// Where palettes come from.
pub enum GeneratorSlot {
    /// A configured generator
    Ready(Arc<dyn PaletteGenerator>),
    /// Generation is unavailable, with the reason shown on submit
    Unavailable(String),
}

/// State of the palette screen.
pub struct PaletteScreen {
    /// Prompt being typed
    pub prompt: String,
    /// Keys go to the prompt
    pub editing: bool,
    /// Palette on display; survives failed generations
    pub palette: Option<Palette>,
    /// Selected swatch
    pub selected: usize,
    /// Active preview tab
    pub preview: PreviewKind,
    /// Background generation
    pub job: GenerationJob,
    generator: GeneratorSlot,
}

impl PaletteScreen {
    /// Empty studio using `generator`.
    #[must_use]
    pub fn new(generator: GeneratorSlot) -> Self {
        Self {
            prompt: String::new(),
            editing: false,
            palette: None,
            selected: 0,
            preview: PreviewKind::default(),
            job: GenerationJob::new(),
            generator,
        }
    }

    /// The generator, or why there is none.
    pub const fn generator(&self) -> &GeneratorSlot {
        &self.generator
    }

    /// Replaces the displayed palette.
    pub fn show(&mut self, palette: Palette) {
        self.palette = Some(palette);
        self.selected = 0;
    }

    /// Number of swatches on display.
    #[must_use]
    pub fn swatch_count(&self) -> usize {
        self.palette.as_ref().map_or(0, |p| p.colors.len())
    }

    /// Hex code of the selected swatch.
    #[must_use]
    pub fn selected_hex(&self) -> Option<&str> {
        self.palette
            .as_ref()
            .and_then(|p| p.colors.get(self.selected))
            .map(|c| c.hex.as_str())
    }

    /// Moves the swatch selection up.
    pub const fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Moves the swatch selection down.
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.swatch_count() {
            self.selected += 1;
        }
    }
}

/// Renders the studio.
pub fn render(f: &mut Frame, area: Rect, state: &AppState, now: Instant) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Prompt
            Constraint::Length(5), // Name and description
            Constraint::Min(3),    // Swatches
        ])
        .split(columns[0]);

    render_prompt(f, left[0], state);
    render_summary(f, left[1], state);
    render_swatches(f, left[2], state, now);
    render_previews(f, columns[1], state);
}

fn render_prompt(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let screen = &state.palette;

    let (text, style) = if screen.prompt.is_empty() && !screen.editing {
        (
            "e.g. Cyberpunk neon city at night".to_string(),
            Style::default().fg(theme.text_muted),
        )
    } else if screen.editing {
        (format!("{}▏", screen.prompt), Style::default().fg(theme.text))
    } else {
        (screen.prompt.clone(), Style::default().fg(theme.text))
    };

    let border = if screen.editing {
        theme.accent
    } else {
        theme.primary
    };

    let title = if screen.job.is_running() {
        " Describe a vibe (generating...) "
    } else {
        " Describe a vibe "
    };

    let prompt = Paragraph::new(Line::from(Span::styled(text, style))).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(border)),
    );
    f.render_widget(prompt, area);
}

fn render_summary(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;

    let lines = match &state.palette.palette {
        Some(palette) => vec![
            Line::from(Span::styled(
                palette.name.clone(),
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                palette.description.clone(),
                Style::default().fg(theme.text_muted),
            )),
        ],
        None => vec![Line::from(Span::styled(
            "Press i, type a description, then Enter.",
            Style::default().fg(theme.text_muted),
        ))],
    };

    let summary = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Palette ")
                .border_style(Style::default().fg(theme.primary)),
        );
    f.render_widget(summary, area);
}

fn render_swatches(f: &mut Frame, area: Rect, state: &AppState, now: Instant) {
    let theme = &state.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Colors ")
        .border_style(Style::default().fg(theme.primary));

    let Some(palette) = &state.palette.palette else {
        f.render_widget(block, area);
        return;
    };

    let items: Vec<ListItem> = palette
        .colors
        .iter()
        .map(|color| {
            let rgb = color.rgb();
            let mut header = vec![
                Span::styled("      ", Style::default().bg(rgb.to_ratatui_color())),
                Span::raw(" "),
                Span::styled(
                    color.name.clone(),
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(color.hex.clone(), Style::default().fg(theme.text_muted)),
            ];
            if state.clipboard.is_acknowledged(&color.hex, now) {
                header.push(Span::styled(
                    " Copied!",
                    Style::default()
                        .fg(theme.success)
                        .add_modifier(Modifier::BOLD),
                ));
            }

            ListItem::new(vec![
                Line::from(header),
                Line::from(vec![
                    Span::styled("      ", Style::default().bg(rgb.to_ratatui_color())),
                    Span::raw(" "),
                    Span::styled(
                        color.role.as_str().to_uppercase(),
                        Style::default().fg(theme.accent),
                    ),
                    Span::raw(" "),
                    Span::styled(
                        color.description.clone(),
                        Style::default().fg(theme.text_muted),
                    ),
                ]),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(theme.surface))
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default().with_selected(Some(state.palette.selected));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_previews(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(5)])
        .split(area);

    let tabs = Tabs::new(PreviewKind::ALL.iter().map(|kind| kind.label()))
        .select(state.palette.preview.index())
        .style(Style::default().fg(theme.text_muted))
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );
    f.render_widget(tabs, chunks[0]);

    match &state.palette.palette {
        Some(palette) => {
            let styles = RoleStyles::from_palette(palette);
            preview::render(f, chunks[1], state.palette.preview, &styles);
        }
        None => {
            let placeholder = Paragraph::new("No palette yet")
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme.text_muted))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(theme.surface)),
                );
            f.render_widget(placeholder, chunks[1]);
        }
    }
}
