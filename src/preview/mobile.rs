//! Phone app mock inside a device frame.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::{fill, RoleStyles};
use crate::models::RgbColor;

/// Device frame colour, independent of the palette.
const FRAME: RgbColor = RgbColor::new(0x1e, 0x29, 0x3b);

const PHONE_WIDTH: u16 = 34;

/// Paints the phone mock centred in `area`.
pub fn render(f: &mut Frame, area: Rect, styles: &RoleStyles) {
    let [phone] = Layout::horizontal([Constraint::Length(PHONE_WIDTH)])
        .flex(Flex::Center)
        .areas(area);

    let frame = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(FRAME.to_ratatui_color()))
        .style(Style::default().bg(styles.background.to_ratatui_color()));
    let screen = frame.inner(phone);
    f.render_widget(frame, phone);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Min(0),
        ])
        .split(screen);

    render_app_bar(f, rows[0], styles);
    render_title(f, rows[1], styles);
    render_search(f, rows[2], styles);
    render_featured(f, rows[3], styles);
    render_list(f, rows[4], styles);
}

fn render_app_bar(f: &mut Frame, area: Rect, styles: &RoleStyles) {
    let width = usize::from(area.width);
    let notch = Line::from(Span::styled(
        "▀▀▀▀▀▀▀▀",
        Style::default().fg(RgbColor::BLACK.to_ratatui_color()),
    ))
    .alignment(Alignment::Center);
    let bar = Line::from(vec![
        Span::styled(" ≡", Style::default().fg(styles.text_main.to_ratatui_color())),
        Span::raw(" ".repeat(width.saturating_sub(6))),
        Span::styled("(◉)", Style::default().fg(styles.accent.to_ratatui_color())),
    ]);
    f.render_widget(Paragraph::new(vec![notch, bar]), area);
}

fn render_title(f: &mut Frame, area: Rect, styles: &RoleStyles) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            " Find your",
            Style::default()
                .fg(styles.text_main.to_ratatui_color())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            " Inspiration",
            Style::default()
                .fg(styles.primary.to_ratatui_color())
                .add_modifier(Modifier::BOLD),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn render_search(f: &mut Frame, area: Rect, styles: &RoleStyles) {
    let inset = inset(area, 1);
    let placeholder = styles.text_muted.blend_over(styles.surface, 50);
    let search = Paragraph::new(Line::from(vec![
        Span::styled(" ⌕ ", Style::default().fg(placeholder.to_ratatui_color())),
        Span::styled(
            "Search for items...",
            Style::default().fg(placeholder.to_ratatui_color()),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(styles.surface.to_ratatui_color()))
            .style(Style::default().bg(styles.surface.to_ratatui_color())),
    );
    f.render_widget(search, inset);
}

fn render_featured(f: &mut Frame, area: Rect, styles: &RoleStyles) {
    let area = inset(area, 1);
    fill(f, area, styles.primary);

    let white = RgbColor::WHITE;
    let badge_bg = white.blend_over(styles.primary, 20);
    let subtitle = white.blend_over(styles.primary, 80);
    let lines = vec![
        Line::from(Span::styled(
            " TRENDING ",
            RoleStyles::style(white, badge_bg).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "Abstract 3D Art",
            Style::default()
                .fg(white.to_ratatui_color())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Discover the latest collection",
            Style::default().fg(subtitle.to_ratatui_color()),
        )),
    ];
    let card = Paragraph::new(lines).block(Block::default().borders(Borders::NONE).style(
        Style::default().bg(styles.primary.to_ratatui_color()),
    ));
    f.render_widget(card, inset(area, 1));
}

fn render_list(f: &mut Frame, area: Rect, styles: &RoleStyles) {
    let area = inset(area, 1);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3); 3])
        .spacing(1)
        .split(area);

    let title = styles.text_main.blend_over(styles.surface, 20);
    let meta = styles.text_muted.blend_over(styles.surface, 40);
    let chevron_bg = styles.background.blend_over(styles.surface, 50);

    for (index, row) in rows.iter().enumerate() {
        // Thumbnails alternate secondary and accent
        let thumb = if index % 2 == 0 {
            styles.secondary
        } else {
            styles.accent
        };
        let text_width = usize::from(row.width.saturating_sub(12));
        let block = |color: RgbColor, width: usize| {
            Span::styled(" ".repeat(width), Style::default().bg(color.to_ratatui_color()))
        };
        let lines = vec![
            Line::from(vec![
                block(thumb, 4),
                Span::raw(" "),
                block(title, text_width * 2 / 3),
            ]),
            Line::from(vec![
                block(thumb, 4),
                Span::raw(" "),
                block(meta, text_width / 3),
                Span::raw(" ".repeat(text_width - text_width / 3)),
                Span::styled(" › ", RoleStyles::style(styles.text_main, chevron_bg)),
            ]),
            Line::from(vec![block(thumb, 4)]),
        ];
        let item = Paragraph::new(lines)
            .style(Style::default().bg(styles.surface.to_ratatui_color()));
        f.render_widget(item, *row);
    }
}

/// Shrinks `area` by `margin` cells on the left and right.
fn inset(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x.saturating_add(margin),
        width: area.width.saturating_sub(margin * 2),
        ..area
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{draw, full_styles, text};
    use super::super::PreviewKind;
    use super::*;

    #[test]
    fn test_mobile_shows_template_text() {
        let buffer = draw(PreviewKind::Mobile, &full_styles(), 80, 40);
        let screen = text(&buffer);
        for needle in ["Inspiration", "Search for items...", "TRENDING", "Abstract 3D Art"] {
            assert!(screen.contains(needle), "missing {needle}");
        }
    }

    #[test]
    fn test_phone_is_centred() {
        let buffer = draw(PreviewKind::Mobile, &full_styles(), 80, 40);
        // Left of the frame is untouched
        assert_ne!(buffer[(0, 5)].fg, FRAME.to_ratatui_color());
        assert_eq!(
            buffer[((80 - PHONE_WIDTH) / 2, 5)].fg,
            FRAME.to_ratatui_color()
        );
    }

    #[test]
    fn test_inset() {
        let area = Rect::new(0, 0, 10, 3);
        assert_eq!(inset(area, 1), Rect::new(1, 0, 8, 3));
        assert_eq!(inset(Rect::new(0, 0, 1, 1), 1).width, 0);
    }
}
