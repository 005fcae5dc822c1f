//! The card grid.
//!
//! Face-down cards show `?` on the theme's card back. Face-up cards show the
//! colour's name on the colour itself, in black or white text picked by YIQ
//! brightness.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

use super::{AppState, Theme};
use crate::models::{Card, CATALOG};

/// How long the confetti falls after the last pair.
pub const CELEBRATION_DURATION: Duration = Duration::from_millis(3000);

const CONFETTI_PIECES: usize = 48;
const CONFETTI_GLYPHS: [char; 5] = ['*', '+', '•', 'o', '✦'];

const MAX_CARD_WIDTH: u16 = 18;
const MAX_CARD_HEIGHT: u16 = 7;

/// Cursor movement on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// One row up
    Up,
    /// One row down
    Down,
    /// One column left
    Left,
    /// One column right
    Right,
}

/// Moves `index` one step on a grid of `len` cards laid out in `columns`.
///
/// Moves that would leave the grid keep the cursor where it is.
#[must_use]
pub const fn move_cursor(index: usize, len: usize, columns: usize, step: Step) -> usize {
    if len == 0 || columns == 0 {
        return 0;
    }
    let col = index % columns;
    match step {
        Step::Up if index >= columns => index - columns,
        Step::Down if index + columns < len => index + columns,
        Step::Left if col > 0 => index - 1,
        Step::Right if col + 1 < columns && index + 1 < len => index + 1,
        _ => index,
    }
}

/// Confetti animation started by the final match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Celebration {
    started: Instant,
    seed: u64,
}

impl Celebration {
    /// Starts the animation at `now`.
    #[must_use]
    pub fn start(now: Instant) -> Self {
        Self {
            started: now,
            seed: rand::thread_rng().gen(),
        }
    }

    /// Whether the confetti is still falling at `now`.
    #[must_use]
    pub fn is_active(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) < CELEBRATION_DURATION
    }

    /// Confetti pieces visible in `area` at `now`, as `(x, y, glyph, colour)`.
    #[must_use]
    pub fn pieces(&self, area: Rect, now: Instant) -> Vec<(u16, u16, char, ratatui::style::Color)> {
        if area.width == 0 || area.height == 0 || !self.is_active(now) {
            return Vec::new();
        }

        let elapsed = now.saturating_duration_since(self.started).as_secs_f32();
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut pieces = Vec::with_capacity(CONFETTI_PIECES);

        for i in 0..CONFETTI_PIECES {
            let x = rng.gen_range(0..area.width);
            let start = rng.gen_range(-f32::from(area.height)..0.0);
            let speed = rng.gen_range(6.0..16.0_f32);
            let glyph = CONFETTI_GLYPHS[rng.gen_range(0..CONFETTI_GLYPHS.len())];

            let y = start + elapsed * speed;
            if y < 0.0 || y >= f32::from(area.height) {
                continue;
            }

            let color = CATALOG[i % CATALOG.len()].rgb().to_ratatui_color();
            pieces.push((area.x + x, area.y + y as u16, glyph, color));
        }

        pieces
    }
}

/// Cell rectangles for every card, centred in `area`.
#[must_use]
pub fn card_areas(area: Rect, card_count: usize, columns: usize) -> Vec<Rect> {
    if card_count == 0 || columns == 0 {
        return Vec::new();
    }
    let rows = card_count.div_ceil(columns);

    let card_width = (area.width / columns as u16).min(MAX_CARD_WIDTH);
    let card_height = (area.height / rows as u16).min(MAX_CARD_HEIGHT);
    let grid_width = card_width * columns as u16;
    let grid_height = card_height * rows as u16;

    let left = area.x + area.width.saturating_sub(grid_width) / 2;
    let top = area.y + area.height.saturating_sub(grid_height) / 2;

    (0..card_count)
        .map(|i| {
            let (row, col) = ((i / columns) as u16, (i % columns) as u16);
            // One column of gap between cards
            Rect::new(
                left + col * card_width,
                top + row * card_height,
                card_width.saturating_sub(1),
                card_height,
            )
        })
        .collect()
}

/// Renders the board and any falling confetti.
pub fn render(f: &mut Frame, area: Rect, state: &AppState, now: Instant) {
    let theme = &state.theme;
    let game = state.session.game();
    let columns = state.session.difficulty().columns();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(
            " Pairs {}/{} ",
            game.pairs_found(),
            state.session.difficulty().pairs()
        ))
        .border_style(Style::default().fg(theme.primary))
        .style(Style::default().bg(theme.background));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let areas = card_areas(inner, game.cards().len(), columns);
    for (index, (card, card_area)) in game.cards().iter().zip(areas).enumerate() {
        render_card(f, card_area, card, index == state.cursor, theme);
    }

    if let Some(celebration) = &state.celebration {
        let buf = f.buffer_mut();
        for (x, y, glyph, color) in celebration.pieces(inner, now) {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(glyph).set_fg(color);
            }
        }
    }
}

fn render_card(f: &mut Frame, area: Rect, card: &Card, selected: bool, theme: &Theme) {
    if area.width < 3 || area.height < 3 {
        return;
    }

    let (fill, text_color, label) = if card.is_face_up() {
        let rgb = card.color.rgb();
        (
            rgb.to_ratatui_color(),
            rgb.contrast_text().to_ratatui_color(),
            card.color.name,
        )
    } else {
        (theme.card_back, theme.card_back_mark, "?")
    };

    let border_style = if selected {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else if card.is_matched {
        Style::default().fg(theme.success)
    } else {
        Style::default().fg(theme.surface)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if selected {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(border_style)
        .style(Style::default().bg(fill));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let padding = inner.height.saturating_sub(1) / 2;
    let mut lines = vec![Line::from(""); padding as usize];
    lines.push(Line::from(label));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(text_color)
                .bg(fill)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(paragraph, inner);
}
